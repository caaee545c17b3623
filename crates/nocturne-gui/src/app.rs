//! Main application state and UI logic

use eframe::egui;
use nocturne_core::{MemoryStore, ThemePreferenceController};

use crate::state::ViewState;
use crate::{storage, theme, widgets};

/// Name shown on the themed heading
const DISPLAY_NAME: &str = "Nocturne";

/// Nocturne application window
pub struct NocturneApp {
    /// Theme preference controller
    controller: ThemePreferenceController<MemoryStore>,

    /// Visual state the controller drives
    view: ViewState,
}

impl NocturneApp {
    /// Create new application
    ///
    /// This is the startup event: the persisted preference is read from
    /// host storage and applied before the first frame renders.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let store = storage::load_store(cc.storage);
        let mut controller = ThemePreferenceController::new(store);
        let mut view = ViewState::new();

        let theme = controller.initialize(&mut view);
        theme::apply(theme, &cc.egui_ctx);

        Self { controller, view }
    }
}

impl eframe::App for NocturneApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(48.0);

            ui.vertical_centered(|ui| {
                let heading = egui::RichText::new(DISPLAY_NAME).size(32.0);
                let heading = if self.view.name_accent {
                    heading.color(theme::NAME_ACCENT_COLOR)
                } else {
                    heading
                };
                ui.label(heading);

                ui.add_space(24.0);

                ui.horizontal_wrapped(|ui| {
                    // Center the switch row by hand; horizontal layouts
                    // left-align inside vertical_centered.
                    let row_width = 140.0;
                    ui.add_space((ui.available_width() - row_width).max(0.0) / 2.0);

                    ui.label("Dark mode");
                    let response = ui.add(widgets::toggle(&mut self.view.switch_checked));
                    if response.changed() {
                        let checked = self.view.switch_checked;
                        let theme = self.controller.on_toggle(checked, &mut self.view);
                        theme::apply(theme, ctx);
                    }
                });
            });
        });
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        storage::persist(self.controller.store(), storage);
    }
}
