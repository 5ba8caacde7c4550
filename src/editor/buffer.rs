//! Text buffers shown by the viewer.

use std::path::{Path, PathBuf};

/// A read-only text buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    name: String,
    path: Option<PathBuf>,
    lines: Vec<String>,
}

impl Buffer {
    /// Creates a buffer from text, splitting it into lines.
    ///
    /// # Example
    ///
    /// ```
    /// use markquill::editor::buffer::Buffer;
    ///
    /// let buffer = Buffer::from_text("notes.txt", "one\ntwo\n");
    /// assert_eq!(buffer.line_count(), 2);
    /// assert_eq!(buffer.line(2), Some("two"));
    /// ```
    pub fn from_text(name: impl Into<String>, text: &str) -> Self {
        let mut lines: Vec<String> = text.lines().map(str::to_string).collect();
        if lines.is_empty() {
            lines.push(String::new());
        }
        Self {
            name: name.into(),
            path: None,
            lines,
        }
    }

    /// Creates a buffer for a file on disk.
    pub fn from_file(path: &Path, text: &str) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let mut buffer = Self::from_text(name, text);
        buffer.path = Some(path.to_path_buf());
        buffer
    }

    /// Short display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Path of the backing file, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Number of lines; never zero.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the 1-based line `n`.
    pub fn line(&self, n: usize) -> Option<&str> {
        n.checked_sub(1)
            .and_then(|idx| self.lines.get(idx))
            .map(String::as_str)
    }

    /// All lines.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}
