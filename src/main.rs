//! Nocturne - a desktop window with a persisted dark-mode switch
//!
//! Main entry point that sets up logging and launches the window

use anyhow::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logging first, so a failed launch still reports why
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,nocturne=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("starting nocturne");

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 320.0])
            .with_min_inner_size([320.0, 240.0])
            .with_title("Nocturne"),
        ..Default::default()
    };

    // Run the GUI application
    eframe::run_native(
        "nocturne",
        options,
        Box::new(|cc| Ok(Box::new(nocturne_gui::NocturneApp::new(cc)))),
    )
    .map_err(|err| anyhow::anyhow!("failed to launch window: {err}"))
}
