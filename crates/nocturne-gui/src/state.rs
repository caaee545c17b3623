//! View state driven by the theme controller

use nocturne_core::ThemeTarget;

/// Visual state of the window
///
/// This is the controller's target: the dark style flag, the switch
/// control's checked state, and the name heading's accent class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewState {
    /// Dark visual style applied to the window
    pub dark: bool,

    /// Checked state of the switch control
    pub switch_checked: bool,

    /// Light-color accent on the name heading
    pub name_accent: bool,
}

impl ViewState {
    /// Create the default (light) view state
    pub fn new() -> Self {
        Self::default()
    }
}

impl ThemeTarget for ViewState {
    fn set_dark(&mut self, on: bool) {
        self.dark = on;
    }

    fn set_switch_checked(&mut self, on: bool) {
        self.switch_checked = on;
    }

    fn set_name_accent(&mut self, on: bool) {
        self.name_accent = on;
    }
}
