//! Per-document session state.
//!
//! The engine itself is stateless; everything that persists between calls for
//! one open document lives here: the file path, the dirty flag, the search
//! continuation, the formatting guard, and the deferred-work queue. The host
//! owns one session per open document/tab and passes it into engine calls by
//! reference.

use crate::position::PositionedDocument;
use crate::search::SearchCursor;
use std::cell::Cell;
use std::path::PathBuf;

/// Work queued to run once the in-flight edit settles.
///
/// Hosts enqueue these from input handlers (for example right after an Enter
/// keystroke, before the widget has applied the edit) and drain them with
/// [`engine::drain_deferred`](crate::engine::drain_deferred) on the same
/// event loop, never a separate thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredOp {
    /// Re-run header restyling for the line under the caret.
    ReformatCaretLine,
    /// Re-run header restyling for the whole document.
    ReformatAllHeaders,
}

/// State the host keeps per open document.
pub struct DocumentSession<D: PositionedDocument> {
    /// Backing file, if the document has been saved or loaded.
    pub file_path: Option<PathBuf>,
    /// Per-document "find next" continuation.
    pub search: SearchCursor<D::Position>,
    dirty: Cell<bool>,
    formatting_depth: Cell<u32>,
    deferred: Vec<DeferredOp>,
}

impl<D: PositionedDocument> DocumentSession<D> {
    /// Create a clean session with no backing file.
    pub fn new() -> Self {
        Self {
            file_path: None,
            search: SearchCursor::new(),
            dirty: Cell::new(false),
            formatting_depth: Cell::new(0),
            deferred: Vec::new(),
        }
    }

    /// Create a clean session backed by `path`.
    pub fn with_path(path: PathBuf) -> Self {
        let mut session = Self::new();
        session.file_path = Some(path);
        session
    }

    /// Whether the document has been modified since the last save.
    pub fn has_unsaved_changes(&self) -> bool {
        self.dirty.get()
    }

    /// Clear the dirty flag; the host's save path calls this after a
    /// successful write.
    pub fn mark_saved(&self) {
        self.dirty.set(false);
    }

    /// Record a document mutation. Dirties the session unless a formatting
    /// guard is held, which is how engine-driven restyling stays invisible to
    /// change tracking.
    pub fn note_mutation(&self) {
        if self.formatting_depth.get() == 0 {
            self.dirty.set(true);
        }
    }

    /// Whether a formatting guard is currently held.
    pub fn is_formatting(&self) -> bool {
        self.formatting_depth.get() > 0
    }

    /// Acquire the formatting guard. While the returned guard lives,
    /// [`note_mutation`](Self::note_mutation) is a no-op; the guard releases
    /// on drop, so the suppression cannot leak past the scope that needed it.
    pub fn formatting_guard(&self) -> FormattingGuard<'_> {
        self.formatting_depth.set(self.formatting_depth.get() + 1);
        FormattingGuard {
            depth: &self.formatting_depth,
        }
    }

    /// Queue work to run on the next [`engine::drain_deferred`](crate::engine::drain_deferred).
    pub fn defer(&mut self, op: DeferredOp) {
        self.deferred.push(op);
    }

    /// Take the queued work, leaving the queue empty. Ops queued while the
    /// taken batch runs land in the next batch, preserving the zero-delay
    /// event-queue model.
    pub fn take_deferred(&mut self) -> Vec<DeferredOp> {
        std::mem::take(&mut self.deferred)
    }
}

impl<D: PositionedDocument> Default for DocumentSession<D> {
    fn default() -> Self {
        Self::new()
    }
}

/// Scoped suppression of dirty-state tracking around engine-driven
/// formatting. Strictly nested; released on drop.
pub struct FormattingGuard<'a> {
    depth: &'a Cell<u32>,
}

impl Drop for FormattingGuard<'_> {
    fn drop(&mut self) {
        self.depth.set(self.depth.get().saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::RichTextBuffer;

    #[test]
    fn mutation_outside_guard_dirties() {
        let session: DocumentSession<RichTextBuffer> = DocumentSession::new();
        assert!(!session.has_unsaved_changes());
        session.note_mutation();
        assert!(session.has_unsaved_changes());
        session.mark_saved();
        assert!(!session.has_unsaved_changes());
    }

    #[test]
    fn guard_suppresses_dirty_tracking() {
        let session: DocumentSession<RichTextBuffer> = DocumentSession::new();
        {
            let _guard = session.formatting_guard();
            assert!(session.is_formatting());
            session.note_mutation();
        }
        assert!(!session.is_formatting());
        assert!(!session.has_unsaved_changes());
        session.note_mutation();
        assert!(session.has_unsaved_changes());
    }

    #[test]
    fn guards_nest() {
        let session: DocumentSession<RichTextBuffer> = DocumentSession::new();
        let outer = session.formatting_guard();
        {
            let _inner = session.formatting_guard();
            session.note_mutation();
        }
        assert!(session.is_formatting());
        session.note_mutation();
        drop(outer);
        assert!(!session.has_unsaved_changes());
    }

    #[test]
    fn take_deferred_empties_the_queue() {
        let mut session: DocumentSession<RichTextBuffer> = DocumentSession::new();
        session.defer(DeferredOp::ReformatCaretLine);
        session.defer(DeferredOp::ReformatAllHeaders);
        assert_eq!(
            session.take_deferred(),
            vec![DeferredOp::ReformatCaretLine, DeferredOp::ReformatAllHeaders]
        );
        assert!(session.take_deferred().is_empty());
    }
}
