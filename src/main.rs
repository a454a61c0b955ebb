//! filepick GUI entry point
//!
//! Takes no arguments; runs until the window is closed.

#![cfg_attr(windows, windows_subsystem = "windows")]

use filepick::{gui, logging, AppConfig};
use log::error;

fn main() -> filepick::Result<()> {
    logging::init()?;

    gui::run(AppConfig::default()).inspect_err(|e| error!("{}", e))
}
