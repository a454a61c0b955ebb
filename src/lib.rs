//! filepick - pick a file with the native dialog and show its path
//!
//! A single window holding a label and a "Browse Files" button. The button
//! opens the platform's modal "open file" dialog; once it closes the label
//! reads `File Opened: <path>`. The file itself is never opened.
//!
//! # Example
//!
//! ```no_run
//! use filepick::{gui, logging, AppConfig};
//!
//! fn main() -> filepick::Result<()> {
//!     logging::init()?;
//!     gui::run(AppConfig::default())
//! }
//! ```
//!
//! The selector can also be driven headless with any [`FilePicker`]:
//!
//! ```
//! use filepick::{AppConfig, DialogRequest, FilePicker, FileSelector, Selection};
//!
//! struct Always(&'static str);
//!
//! impl FilePicker for Always {
//!     fn pick_file(&mut self, _request: &DialogRequest) -> Selection {
//!         Selection::Picked(self.0.into())
//!     }
//! }
//!
//! let mut selector = FileSelector::initialize(Always("/srv/readme.txt"), &AppConfig::default());
//! selector.on_browse_clicked();
//! assert_eq!(selector.label(), "File Opened: /srv/readme.txt");
//! ```

pub mod dialog;
pub mod error;
pub mod gui;
pub mod logging;
pub mod selector;

// Re-export main types
pub use dialog::{DialogRequest, FileFilter, FilePicker, NativePicker, Selection};
pub use error::{FilePickError, Result};
pub use selector::{FileSelector, SelectorState};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Main window title
    pub window_title: String,
    /// Initial window size in points
    pub window_size: [f32; 2],
    /// Label text before any browse
    pub initial_label: String,
    /// Text on the browse button
    pub button_text: String,
    /// Prepended to the selected path in the label
    pub label_prefix: String,
    /// How the file dialog is configured
    pub dialog: DialogRequest,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_title: "File Upload Example".to_string(),
            window_size: [760.0, 140.0],
            initial_label: "Select a file".to_string(),
            button_text: "Browse Files".to_string(),
            label_prefix: "File Opened: ".to_string(),
            dialog: DialogRequest::default(),
        }
    }
}
