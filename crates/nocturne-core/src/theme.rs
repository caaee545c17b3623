//! Visual theme preference model
//!
//! The persisted wire form is the exact strings `"dark"` and `"light"`.
//! Anything else read from storage resolves to `Light`.

use serde::{Deserialize, Serialize};

/// User-visible theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    /// Create dark theme
    pub fn dark() -> Self {
        Theme::Dark
    }

    /// Create light theme
    pub fn light() -> Self {
        Theme::Light
    }

    /// Check if dark theme
    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// Check if light theme
    pub fn is_light(&self) -> bool {
        matches!(self, Theme::Light)
    }

    /// Toggle between dark and light
    pub fn toggle(&mut self) {
        *self = match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        };
    }

    /// The string persisted to the preference store
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Resolve a stored value. Only the exact string `"dark"` selects the
    /// dark theme; absent or unrecognized values fall back to light.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    /// Theme selected by a switch control in the given checked state
    pub fn from_checked(checked: bool) -> Self {
        if checked { Theme::Dark } else { Theme::Light }
    }

    /// Checked state a switch control should show for this theme
    pub fn is_checked(&self) -> bool {
        self.is_dark()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::light()
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_stored_exact_dark_only() {
        assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("Dark")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("garbage")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("")), Theme::Light);
        assert_eq!(Theme::from_stored(None), Theme::Light);
    }

    #[test]
    fn test_stored_round_trip() {
        for theme in [Theme::Dark, Theme::Light] {
            assert_eq!(Theme::from_stored(Some(theme.as_str())), theme);
        }
    }

    #[test]
    fn test_toggle() {
        let mut theme = Theme::light();
        theme.toggle();
        assert!(theme.is_dark());
        theme.toggle();
        assert!(theme.is_light());
    }

    #[test]
    fn test_default_is_light() {
        assert_eq!(Theme::default(), Theme::Light);
    }

    #[test]
    fn test_checked_mapping() {
        assert_eq!(Theme::from_checked(true), Theme::Dark);
        assert_eq!(Theme::from_checked(false), Theme::Light);
        assert!(Theme::Dark.is_checked());
        assert!(!Theme::Light.is_checked());
    }
}
