//! File selector state
//!
//! Owns the label text and drives the dialog on each browse. Kept free of
//! widget types so it can be exercised without a display.

use crate::dialog::{DialogRequest, FilePicker, Selection};
use crate::AppConfig;
use log::{debug, info};

/// Whether the selector is waiting on a dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorState {
    Idle,
    DialogOpen,
}

/// Label plus the picker that feeds it
pub struct FileSelector<P: FilePicker> {
    picker: P,
    request: DialogRequest,
    /// Prepended to every selected path
    prefix: String,
    label: String,
    state: SelectorState,
}

impl<P: FilePicker> FileSelector<P> {
    pub fn initialize(picker: P, config: &AppConfig) -> Self {
        Self {
            picker,
            request: config.dialog.clone(),
            prefix: config.label_prefix.clone(),
            label: config.initial_label.clone(),
            state: SelectorState::Idle,
        }
    }

    /// Current label text
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn state(&self) -> SelectorState {
        self.state
    }

    pub fn request(&self) -> &DialogRequest {
        &self.request
    }

    pub fn picker(&self) -> &P {
        &self.picker
    }

    /// Show the dialog and replace the label with its result.
    ///
    /// Blocks until the dialog is dismissed. A cancel still rewrites the
    /// label, leaving only the prefix.
    pub fn on_browse_clicked(&mut self) -> Selection {
        debug!(
            "Opening dialog '{}' at {}",
            self.request.title,
            self.request.directory.display()
        );

        self.state = SelectorState::DialogOpen;
        let selection = self.picker.pick_file(&self.request);
        self.state = SelectorState::Idle;

        match &selection {
            Selection::Picked(path) => info!("File picked: {}", path.display()),
            Selection::Cancelled => info!("Dialog cancelled"),
        }

        self.label = format!("{}{}", self.prefix, selection.path_text());
        selection
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::path::PathBuf;

    /// Replays canned outcomes and records every request
    #[derive(Default)]
    struct Scripted {
        outcomes: VecDeque<Selection>,
        requests: Vec<DialogRequest>,
    }

    impl Scripted {
        fn with(outcomes: Vec<Selection>) -> Self {
            Self {
                outcomes: outcomes.into(),
                requests: Vec::new(),
            }
        }
    }

    impl FilePicker for Scripted {
        fn pick_file(&mut self, request: &DialogRequest) -> Selection {
            self.requests.push(request.clone());
            self.outcomes.pop_front().unwrap_or(Selection::Cancelled)
        }
    }

    fn picked(path: &str) -> Selection {
        Selection::Picked(PathBuf::from(path))
    }

    #[test]
    fn initial_label() {
        let selector = FileSelector::initialize(Scripted::default(), &AppConfig::default());
        assert_eq!(selector.label(), "Select a file");
        assert_eq!(selector.state(), SelectorState::Idle);
        assert!(selector.picker().requests.is_empty());
    }

    #[test]
    fn picked_path_shown() {
        let picker = Scripted::with(vec![picked("/home/user/notes.txt")]);
        let mut selector = FileSelector::initialize(picker, &AppConfig::default());

        let selection = selector.on_browse_clicked();

        assert_eq!(selection, picked("/home/user/notes.txt"));
        assert_eq!(selector.label(), "File Opened: /home/user/notes.txt");
        assert_eq!(selector.state(), SelectorState::Idle);
    }

    #[test]
    fn cancel_leaves_prefix() {
        let picker = Scripted::with(vec![Selection::Cancelled]);
        let mut selector = FileSelector::initialize(picker, &AppConfig::default());

        assert!(selector.on_browse_clicked().is_cancelled());
        assert_eq!(selector.label(), "File Opened: ");
    }

    #[test]
    fn second_pick_replaces_first() {
        let picker = Scripted::with(vec![picked("/tmp/first.txt"), picked("/tmp/second.log")]);
        let mut selector = FileSelector::initialize(picker, &AppConfig::default());

        selector.on_browse_clicked();
        selector.on_browse_clicked();

        assert_eq!(selector.label(), "File Opened: /tmp/second.log");
        assert!(!selector.label().contains("first"));
    }

    #[test]
    fn every_browse_sends_same_request() {
        let picker = Scripted::with(vec![picked("/a.txt"), Selection::Cancelled]);
        let mut selector = FileSelector::initialize(picker, &AppConfig::default());

        selector.on_browse_clicked();
        selector.on_browse_clicked();

        let requests = &selector.picker().requests;
        assert_eq!(requests.len(), 2);
        for request in requests {
            assert_eq!(request.title, "Select a File");
            assert_eq!(request.filters.len(), 2);
            assert_eq!(request.filters[0].name, "Text files");
            assert_eq!(request.filters[0].patterns, vec!["*.txt"]);
            assert_eq!(request.filters[1].name, "all files");
            assert_eq!(request.filters[1].patterns, vec!["*"]);
            assert!(request.directory.parent().is_none());
        }
    }
}
