//! File picker state: the terminal stand-in for a browser file input.

use std::path::{Path, PathBuf};

/// State for the image file picker overlay.
///
/// Entries are image files (by extension) of a single directory, scanned by a
/// background task so the event loop never blocks on IO.
#[derive(Debug, Clone, Default)]
pub struct FilePickerState {
    /// Directory whose listing is shown.
    pub dir: PathBuf,
    /// Candidate image files, sorted by file name.
    pub entries: Vec<PathBuf>,
    /// Index of the highlighted entry.
    pub selected: usize,
    /// Whether a directory scan is in flight.
    pub loading: bool,
}

impl FilePickerState {
    pub fn begin_scan(&mut self, dir: &Path) {
        self.dir = dir.to_path_buf();
        self.entries.clear();
        self.selected = 0;
        self.loading = true;
    }

    pub fn finish_scan(&mut self, entries: Vec<PathBuf>) {
        self.entries = entries;
        self.selected = 0;
        self.loading = false;
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if !self.entries.is_empty() {
            self.selected = (self.selected + 1).min(self.entries.len() - 1);
        }
    }

    /// The highlighted path, if the listing is non-empty.
    pub fn selected_path(&self) -> Option<&Path> {
        self.entries.get(self.selected).map(PathBuf::as_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn picker_with(entries: &[&str]) -> FilePickerState {
        let mut picker = FilePickerState::default();
        picker.finish_scan(entries.iter().map(PathBuf::from).collect());
        picker
    }

    #[test]
    fn test_selection_clamps_at_bounds() {
        let mut picker = picker_with(&["a.png", "b.png"]);
        picker.select_previous();
        assert_eq!(picker.selected, 0);
        picker.select_next();
        picker.select_next();
        picker.select_next();
        assert_eq!(picker.selected, 1);
    }

    #[test]
    fn test_selected_path_empty_listing() {
        let mut picker = FilePickerState::default();
        assert!(picker.selected_path().is_none());
        picker.select_next();
        assert_eq!(picker.selected, 0);
    }

    #[test]
    fn test_begin_scan_resets_listing() {
        let mut picker = picker_with(&["a.png"]);
        picker.select_next();
        picker.begin_scan(Path::new("/photos"));
        assert!(picker.loading);
        assert!(picker.entries.is_empty());
        assert_eq!(picker.selected, 0);
        assert_eq!(picker.dir, PathBuf::from("/photos"));
    }
}
