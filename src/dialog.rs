//! Native file dialog configuration and invocation

use std::path::{Path, PathBuf};

/// A named group of glob patterns shown in the dialog's type selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFilter {
    pub name: String,
    pub patterns: Vec<String>,
}

impl FileFilter {
    pub fn new(name: impl Into<String>, patterns: &[&str]) -> Self {
        Self {
            name: name.into(),
            patterns: patterns.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// Extensions as the native backend expects them: `*.txt` -> `txt`, `*` stays `*`
    pub fn extensions(&self) -> Vec<String> {
        self.patterns
            .iter()
            .map(|p| match p.strip_prefix("*.") {
                Some(ext) if !ext.is_empty() => ext.to_string(),
                _ => p.clone(),
            })
            .collect()
    }
}

/// Everything a single dialog invocation is configured with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogRequest {
    pub title: String,
    pub directory: PathBuf,
    pub filters: Vec<FileFilter>,
}

impl Default for DialogRequest {
    fn default() -> Self {
        Self {
            title: "Select a File".to_string(),
            directory: filesystem_root(),
            filters: vec![
                FileFilter::new("Text files", &["*.txt"]),
                FileFilter::new("all files", &["*"]),
            ],
        }
    }
}

/// Root of the filesystem holding the working directory
pub fn filesystem_root() -> PathBuf {
    std::env::current_dir()
        .ok()
        .and_then(|cwd| cwd.ancestors().last().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from(std::path::MAIN_SEPARATOR_STR))
}

/// Outcome of one dialog invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Picked(PathBuf),
    Cancelled,
}

impl Selection {
    /// The selected path as label text; empty when cancelled
    pub fn path_text(&self) -> String {
        match self {
            Selection::Picked(path) => path.display().to_string(),
            Selection::Cancelled => String::new(),
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Selection::Cancelled)
    }
}

impl From<Option<PathBuf>> for Selection {
    fn from(path: Option<PathBuf>) -> Self {
        path.map_or(Selection::Cancelled, Selection::Picked)
    }
}

/// Something that can show a blocking "open file" dialog
pub trait FilePicker {
    fn pick_file(&mut self, request: &DialogRequest) -> Selection;
}

/// Platform dialog via rfd; blocks the calling thread until dismissed
#[derive(Debug, Default, Clone, Copy)]
pub struct NativePicker;

impl FilePicker for NativePicker {
    fn pick_file(&mut self, request: &DialogRequest) -> Selection {
        let dialog = request.filters.iter().fold(
            rfd::FileDialog::new()
                .set_title(&request.title)
                .set_directory(&request.directory),
            |dialog, filter| dialog.add_filter(&filter.name, filter.extensions().as_slice()),
        );

        dialog.pick_file().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_request_filters() {
        let request = DialogRequest::default();
        assert_eq!(request.title, "Select a File");
        assert_eq!(
            request.filters,
            vec![
                FileFilter::new("Text files", &["*.txt"]),
                FileFilter::new("all files", &["*"]),
            ]
        );
    }

    #[test]
    fn root_has_no_parent() {
        let root = filesystem_root();
        assert!(root.parent().is_none(), "{} is not a root", root.display());
    }

    #[test]
    fn extensions_from_patterns() {
        assert_eq!(FileFilter::new("Text files", &["*.txt"]).extensions(), vec!["txt"]);
        assert_eq!(FileFilter::new("all files", &["*"]).extensions(), vec!["*"]);
        assert_eq!(
            FileFilter::new("Images", &["*.png", "*.jpg"]).extensions(),
            vec!["png", "jpg"]
        );
    }

    #[test]
    fn cancelled_renders_empty() {
        assert_eq!(Selection::from(None::<PathBuf>).path_text(), "");
        assert!(Selection::from(None::<PathBuf>).is_cancelled());

        let picked = Selection::from(Some(PathBuf::from("/home/user/notes.txt")));
        assert_eq!(picked.path_text(), "/home/user/notes.txt");
        assert!(!picked.is_cancelled());
    }
}
