//! Unified error handling for Nocturne
//!
//! The only fallible boundary in the system is the preference store;
//! everything else is a synchronous in-memory mutation.

use thiserror::Error;

/// Unified error type for all Nocturne operations
#[derive(Error, Debug)]
pub enum Error {
    /// The host did not provide a persistent store at all
    #[error("preference store unavailable: {reason}")]
    StoreUnavailable { reason: String },

    /// Reading a key from the preference store failed
    #[error("failed to read preference {key:?}: {message}")]
    StoreRead { key: String, message: String },

    /// Writing a key to the preference store failed
    #[error("failed to write preference {key:?}: {message}")]
    StoreWrite { key: String, message: String },
}

/// Result type using the unified Error
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a store-unavailable error
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Error::StoreUnavailable {
            reason: reason.into(),
        }
    }

    /// Create a read error for a key
    pub fn read(key: impl Into<String>, message: impl Into<String>) -> Self {
        Error::StoreRead {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Create a write error for a key
    pub fn write(key: impl Into<String>, message: impl Into<String>) -> Self {
        Error::StoreWrite {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Check if this error means the store cannot be used at all
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Error::StoreUnavailable { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_includes_key() {
        let err = Error::read("theme", "disk on fire");
        let text = err.to_string();

        assert!(text.contains("theme"));
        assert!(text.contains("disk on fire"));
    }

    #[test]
    fn test_is_unavailable() {
        assert!(Error::unavailable("no backend").is_unavailable());
        assert!(!Error::write("theme", "denied").is_unavailable());
    }
}
