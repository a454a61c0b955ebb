pub mod app;

pub use app::FilePickApp;

use crate::{AppConfig, FilePickError};
use log::info;

/// Window options for the given configuration
pub fn native_options(config: &AppConfig) -> eframe::NativeOptions {
    eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title(config.window_title.as_str())
            .with_inner_size(config.window_size),
        ..Default::default()
    }
}

/// Entry point: open the window and block until it is closed
pub fn run(config: AppConfig) -> crate::Result<()> {
    info!("Starting filepick {}", crate::VERSION);
    let native_options = native_options(&config);

    eframe::run_native(
        "filepick",
        native_options,
        Box::new(move |cc| Ok(Box::new(FilePickApp::new(cc, &config)))),
    )
    .map_err(FilePickError::from_eframe)?;

    info!("Window closed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_follow_config() {
        let config = AppConfig::default();
        let options = native_options(&config);
        assert_eq!(options.viewport.title.as_deref(), Some("File Upload Example"));
        assert_eq!(
            options.viewport.inner_size,
            Some(eframe::egui::vec2(760.0, 140.0))
        );
    }
}
