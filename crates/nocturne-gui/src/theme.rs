//! Mapping from the theme preference to egui visuals
//!
//! The controller only toggles state; the concrete styling lives here.

use eframe::egui;
use nocturne_core::Theme;

/// Color of the name heading while its light-color accent is on
pub const NAME_ACCENT_COLOR: egui::Color32 = egui::Color32::from_rgb(0xF5, 0xF5, 0xF0);

/// Visuals for a theme
pub fn visuals(theme: Theme) -> egui::Visuals {
    if theme.is_dark() {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    }
}

/// Apply a theme to the whole window
pub fn apply(theme: Theme, ctx: &egui::Context) {
    ctx.set_visuals(visuals(theme));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visuals_follow_theme() {
        assert!(visuals(Theme::Dark).dark_mode);
        assert!(!visuals(Theme::Light).dark_mode);
    }
}
