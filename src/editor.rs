use std::path::{Path, PathBuf};

/// The text-buffer contract the host editor implements.
///
/// Positions are byte offsets into the buffer and are expected to lie on
/// character boundaries. Edits made between `begin_edit` and `end_edit`
/// count as one logical change for the host (one undo step, one change
/// notification).
pub trait EditorBuffer {
    /// Current cursor position as a byte offset.
    fn cursor_position(&self) -> usize;

    /// Path of the active document, if it has one.
    fn document_path(&self) -> Option<&Path>;

    /// The buffer content in `[start, end)`.
    fn text_range(&self, start: usize, end: usize) -> String;

    /// Delete the buffer content in `[start, end)`.
    fn delete_range(&mut self, start: usize, end: usize);

    /// Insert `text` at the given position.
    fn insert(&mut self, position: usize, text: &str);

    /// Bracket a compound edit; default is a no-op for hosts without
    /// grouped-undo support.
    fn begin_edit(&mut self) {}
    fn end_edit(&mut self) {}
}

/// An in-memory buffer backing the CLI dry-run and the test suite.
///
/// The cursor follows edits the way an editor caret would: deleting before
/// it pulls it back, inserting before it pushes it forward.
pub struct ScratchBuffer {
    content: String,
    cursor: usize,
    path: Option<PathBuf>,
}

impl ScratchBuffer {
    pub fn new(content: String, cursor: usize, path: Option<PathBuf>) -> Self {
        Self {
            content,
            cursor,
            path,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Largest valid char boundary at or below `pos`.
fn clamp_to_boundary(s: &str, mut pos: usize) -> usize {
    if pos >= s.len() {
        return s.len();
    }
    while !s.is_char_boundary(pos) {
        pos -= 1;
    }
    pos
}

impl EditorBuffer for ScratchBuffer {
    fn cursor_position(&self) -> usize {
        self.cursor
    }

    fn document_path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn text_range(&self, start: usize, end: usize) -> String {
        // Reads are total: out-of-range or mid-character positions are
        // clamped down to the nearest valid boundary, so a bad cursor
        // produces a short read instead of a panic.
        let end = clamp_to_boundary(&self.content, end);
        let start = clamp_to_boundary(&self.content, start.min(end));
        self.content[start..end].to_string()
    }

    fn delete_range(&mut self, start: usize, end: usize) {
        self.content.replace_range(start..end, "");
        if self.cursor >= end {
            self.cursor -= end - start;
        } else if self.cursor > start {
            self.cursor = start;
        }
    }

    fn insert(&mut self, position: usize, text: &str) {
        self.content.insert_str(position, text);
        if self.cursor >= position {
            self.cursor += text.len();
        }
    }
}
