//! Reference rich-text document.
//!
//! [`RichTextBuffer`] is a rope-backed implementation of
//! [`PositionedDocument`] for hosts that do not bring their own widget, and
//! for tests. Text lives in a [`Rope`]; applied styles live in a sorted span
//! table next to it and never touch the text. Positions step forward one
//! grapheme cluster at a time, so a CRLF pair or a combining sequence is a
//! single addressable unit.

use crate::position::{PositionedDocument, TextStyle};
use ropey::Rope;
use unicode_segmentation::UnicodeSegmentation;

/// Opaque position into a [`RichTextBuffer`].
///
/// Internally a character offset, but engine code only ever compares, steps,
/// and extracts text between positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct BufferPosition(usize);

/// A styled range in character offsets, as recorded by
/// [`PositionedDocument::apply_style`].
#[derive(Debug, Clone, PartialEq)]
pub struct StyledSpan {
    /// Start offset (inclusive), in characters.
    pub start: usize,
    /// End offset (exclusive), in characters.
    pub end: usize,
    /// The applied style.
    pub style: TextStyle,
}

/// Upper bound on the characters inspected when finding the next grapheme
/// boundary. Clusters longer than this are split; none occur in practice.
const GRAPHEME_LOOKAHEAD: usize = 32;

/// Rope-backed rich-text document with caret, selection, and styled spans.
pub struct RichTextBuffer {
    rope: Rope,
    spans: Vec<StyledSpan>,
    caret: usize,
    selection: Option<(usize, usize)>,
}

impl RichTextBuffer {
    /// Create a buffer from initial text.
    pub fn new(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            spans: Vec::new(),
            caret: 0,
            selection: None,
        }
    }

    /// Full document text.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Replace the entire content, discarding styles, caret, and selection.
    /// This is the host's file-load path.
    pub fn set_text(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
        self.spans.clear();
        self.caret = 0;
        self.selection = None;
    }

    /// Total character count.
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// The styled spans currently applied, sorted by start offset.
    ///
    /// Overlapping spans are kept in application order; a later span takes
    /// precedence where it overlaps an earlier one.
    pub fn styled_spans(&self) -> &[StyledSpan] {
        &self.spans
    }

    /// Character offset of a position. Host-side convenience; engine code
    /// never relies on it.
    pub fn offset_of(&self, pos: &BufferPosition) -> usize {
        pos.0.min(self.rope.len_chars())
    }

    /// Position at a character offset, clamped to the document end.
    pub fn position_at(&self, offset: usize) -> BufferPosition {
        BufferPosition(offset.min(self.rope.len_chars()))
    }

    fn next_boundary(&self, offset: usize) -> Option<usize> {
        let len = self.rope.len_chars();
        if offset >= len {
            return None;
        }
        let take = GRAPHEME_LOOKAHEAD.min(len - offset);
        let window: String = self.rope.slice(offset..offset + take).chars().collect();
        let first = window.graphemes(true).next()?;
        Some(offset + first.chars().count())
    }

    fn clamp(&self, offset: usize) -> usize {
        offset.min(self.rope.len_chars())
    }

    fn shift_spans_for_removal(&mut self, start: usize, end: usize) {
        let removed = end - start;
        let clamp = |off: usize| {
            if off <= start {
                off
            } else if off >= end {
                off - removed
            } else {
                start
            }
        };
        let spans = std::mem::take(&mut self.spans);
        self.spans = spans
            .into_iter()
            .filter_map(|mut s| {
                s.start = clamp(s.start);
                s.end = clamp(s.end);
                (s.start < s.end).then_some(s)
            })
            .collect();
    }

    fn shift_spans_for_insert(&mut self, pos: usize, inserted: usize) {
        for s in &mut self.spans {
            if s.start >= pos {
                s.start += inserted;
            }
            if s.end > pos {
                s.end += inserted;
            }
        }
    }
}

impl Default for RichTextBuffer {
    fn default() -> Self {
        Self::new("")
    }
}

impl PositionedDocument for RichTextBuffer {
    type Position = BufferPosition;

    fn start(&self) -> BufferPosition {
        BufferPosition(0)
    }

    fn end(&self) -> BufferPosition {
        BufferPosition(self.rope.len_chars())
    }

    fn step_forward(&self, pos: &BufferPosition) -> Option<BufferPosition> {
        self.next_boundary(pos.0).map(BufferPosition)
    }

    fn text_of(&self, a: &BufferPosition, b: &BufferPosition) -> String {
        let start = self.clamp(a.0);
        let end = self.clamp(b.0);
        if start >= end {
            return String::new();
        }
        self.rope.slice(start..end).to_string()
    }

    fn apply_style(&mut self, a: &BufferPosition, b: &BufferPosition, style: &TextStyle) {
        let start = self.clamp(a.0);
        let end = self.clamp(b.0);
        if start >= end {
            return;
        }
        // The new application wins over anything it fully covers; re-applying
        // an identical span is therefore a no-op on the final table.
        self.spans.retain(|s| !(s.start >= start && s.end <= end));
        self.spans.push(StyledSpan {
            start,
            end,
            style: *style,
        });
        self.spans.sort_by_key(|s| (s.start, s.end));
    }

    fn insert_text(&mut self, pos: &BufferPosition, text: &str) -> BufferPosition {
        let at = self.clamp(pos.0);
        self.rope.insert(at, text);
        let inserted = text.chars().count();
        self.shift_spans_for_insert(at, inserted);
        if self.caret >= at {
            self.caret += inserted;
        }
        self.selection = None;
        BufferPosition(at + inserted)
    }

    fn replace_range(&mut self, a: &BufferPosition, b: &BufferPosition, text: &str) -> BufferPosition {
        let start = self.clamp(a.0);
        let end = self.clamp(b.0).max(start);
        if start < end {
            self.rope.remove(start..end);
            self.shift_spans_for_removal(start, end);
        }
        self.rope.insert(start, text);
        let inserted = text.chars().count();
        self.shift_spans_for_insert(start, inserted);
        let after = start + inserted;
        self.caret = after;
        self.selection = None;
        BufferPosition(after)
    }

    fn caret(&self) -> BufferPosition {
        BufferPosition(self.caret)
    }

    fn set_caret(&mut self, pos: BufferPosition) {
        self.caret = self.clamp(pos.0);
    }

    fn selection(&self) -> Option<(BufferPosition, BufferPosition)> {
        self.selection
            .filter(|(a, b)| a != b)
            .map(|(a, b)| (BufferPosition(a), BufferPosition(b)))
    }

    fn select(&mut self, a: BufferPosition, b: BufferPosition) {
        let start = self.clamp(a.0.min(b.0));
        let end = self.clamp(a.0.max(b.0));
        self.selection = Some((start, end));
        self.caret = end;
    }
}
