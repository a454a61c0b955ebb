//! Main filepick window

use crate::{AppConfig, FilePicker, FileSelector, NativePicker};
use eframe::egui;

/// Room for about 100 characters across 4 lines
const LABEL_SIZE: [f32; 2] = [720.0, 64.0];

/// Main application state
pub struct FilePickApp<P: FilePicker = NativePicker> {
    selector: FileSelector<P>,
    button_text: String,
}

impl FilePickApp<NativePicker> {
    /// Create the app backed by the platform dialog
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &AppConfig) -> Self {
        Self::with_picker(NativePicker, config)
    }
}

impl<P: FilePicker> FilePickApp<P> {
    pub fn with_picker(picker: P, config: &AppConfig) -> Self {
        Self {
            selector: FileSelector::initialize(picker, config),
            button_text: config.button_text.clone(),
        }
    }

    pub fn selector(&self) -> &FileSelector<P> {
        &self.selector
    }

    /// Render the label and button column
    fn render_selector(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_sized(
                LABEL_SIZE,
                egui::Label::new(
                    egui::RichText::new(self.selector.label()).color(egui::Color32::BLUE),
                ),
            );

            // The dialog call blocks this frame until it is dismissed
            if ui.button(&self.button_text).clicked() {
                self.selector.on_browse_clicked();
            }
        });
    }
}

impl<P: FilePicker> eframe::App for FilePickApp<P> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_selector(ui);
        });
    }
}
