//! Stateful find/replace over the flattened document.
//!
//! Search works on the flattened text rather than the line projection:
//! queries compile to escaped regexes (case folding handled by the regex
//! engine) and matched character offsets map back to document positions
//! through the [`PositionedDocument`] contract.
//!
//! "Find next" continues from a per-document [`SearchCursor`] and wraps to
//! the document start exactly once before reporting not-found, so a fruitless
//! search terminates instead of looping.

use crate::position::PositionedDocument;
use crate::session::DocumentSession;
use regex::{Regex, RegexBuilder};

/// Options that control how search is performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// If `true`, performs a case-sensitive search.
    pub match_case: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self { match_case: false }
    }
}

/// Per-document "find next" continuation state.
///
/// Reset whenever the search term changes or a replace-all executes. Scoped
/// to one document; never shared across documents.
#[derive(Debug, Clone)]
pub struct SearchCursor<P> {
    pub(crate) last_match_end: Option<P>,
    pub(crate) last_query: Option<String>,
}

impl<P> SearchCursor<P> {
    /// Create an empty cursor.
    pub fn new() -> Self {
        Self {
            last_match_end: None,
            last_query: None,
        }
    }

    /// Forget the continuation point and remembered query.
    pub fn reset(&mut self) {
        self.last_match_end = None;
        self.last_query = None;
    }
}

impl<P> Default for SearchCursor<P> {
    fn default() -> Self {
        Self::new()
    }
}

/// Character offset to byte offset mapping for one flattened text snapshot.
#[derive(Debug)]
pub(crate) struct CharIndex {
    char_to_byte: Vec<usize>,
    text_len: usize,
}

impl CharIndex {
    pub(crate) fn new(text: &str) -> Self {
        let mut char_to_byte: Vec<usize> = text.char_indices().map(|(b, _)| b).collect();
        char_to_byte.push(text.len());
        Self {
            char_to_byte,
            text_len: text.len(),
        }
    }

    pub(crate) fn char_count(&self) -> usize {
        self.char_to_byte.len().saturating_sub(1)
    }

    pub(crate) fn char_to_byte(&self, char_offset: usize) -> usize {
        let clamped = char_offset.min(self.char_count());
        self.char_to_byte
            .get(clamped)
            .cloned()
            .unwrap_or(self.text_len)
    }

    pub(crate) fn byte_to_char(&self, byte_offset: usize) -> usize {
        let clamped = byte_offset.min(self.text_len);
        match self.char_to_byte.binary_search(&clamped) {
            Ok(idx) => idx,
            Err(idx) => idx,
        }
    }
}

fn compile_query(query: &str, options: SearchOptions) -> Option<Regex> {
    RegexBuilder::new(&regex::escape(query))
        .case_insensitive(!options.match_case)
        .build()
        .ok()
}

fn find_from(re: &Regex, text: &str, index: &CharIndex, from_char: usize) -> Option<(usize, usize)> {
    let start_byte = index.char_to_byte(from_char);
    let m = re.find_at(text, start_byte)?;
    Some((index.byte_to_char(m.start()), index.byte_to_char(m.end())))
}

/// Resolve a character offset in the flattened text to a document position by
/// stepping forward from the document start.
fn position_at_char<D: PositionedDocument>(doc: &D, offset: usize) -> Option<D::Position> {
    let mut pos = doc.start();
    let mut seen = 0usize;
    while seen < offset {
        let next = doc.step_forward(&pos)?;
        seen += doc.text_of(&pos, &next).chars().count();
        pos = next;
    }
    Some(pos)
}

/// Character offset of `pos` in the flattened text.
fn char_offset_of<D: PositionedDocument>(doc: &D, pos: &D::Position) -> usize {
    doc.text_of(&doc.start(), pos).chars().count()
}

/// Find the next occurrence of `query` forward from the cursor, selecting it
/// and advancing the cursor on success.
///
/// An empty query fails without searching. When the forward scan exhausts the
/// document and a previous continuation point existed, the search wraps to
/// the document start once, clearing the cursor first so a second failure
/// reports not-found.
pub fn find_next<D: PositionedDocument>(
    doc: &mut D,
    cursor: &mut SearchCursor<D::Position>,
    query: &str,
    options: SearchOptions,
) -> Option<(D::Position, D::Position)> {
    if query.is_empty() {
        return None;
    }
    if cursor.last_query.as_deref() != Some(query) {
        cursor.last_match_end = None;
        cursor.last_query = Some(query.to_string());
    }
    let re = compile_query(query, options)?;
    let text = doc.text_of(&doc.start(), &doc.end());
    let index = CharIndex::new(&text);

    let from_char = match &cursor.last_match_end {
        Some(pos) => char_offset_of(doc, pos),
        None => 0,
    };
    let had_cursor = cursor.last_match_end.is_some();

    let (m_start, m_end) = find_from(&re, &text, &index, from_char).or_else(|| {
        if had_cursor {
            cursor.last_match_end = None;
            find_from(&re, &text, &index, 0)
        } else {
            None
        }
    })?;

    let start = position_at_char(doc, m_start)?;
    let end = position_at_char(doc, m_end)?;
    doc.select(start.clone(), end.clone());
    cursor.last_match_end = Some(end.clone());
    Some((start, end))
}

/// Replace the current selection if it equals `query` under the active case
/// policy, then advance to the next match either way.
///
/// Returns whether a replacement occurred. A mismatched selection is left
/// untouched.
pub fn replace_current<D: PositionedDocument>(
    doc: &mut D,
    session: &mut DocumentSession<D>,
    query: &str,
    replacement: &str,
    options: SearchOptions,
) -> bool {
    if query.is_empty() {
        return false;
    }
    let mut replaced = false;
    if let Some((a, b)) = doc.selection() {
        let selected = doc.text_of(&a, &b);
        let equal = if options.match_case {
            selected == query
        } else {
            selected.to_lowercase() == query.to_lowercase()
        };
        if equal {
            let after = doc.replace_range(&a, &b, replacement);
            session.note_mutation();
            // Continue the scan from the end of the replacement.
            session.search.last_query = Some(query.to_string());
            session.search.last_match_end = Some(after);
            replaced = true;
        }
    }
    find_next(doc, &mut session.search, query, options);
    replaced
}

/// Replace every non-overlapping occurrence of `query`, resetting the search
/// cursor and returning the number of replacements.
///
/// Matches are counted directly during the substitution pass, so the count is
/// exact even when query and replacement have equal length. The document is
/// rewritten only when the result actually differs.
pub fn replace_all<D: PositionedDocument>(
    doc: &mut D,
    session: &mut DocumentSession<D>,
    query: &str,
    replacement: &str,
    options: SearchOptions,
) -> usize {
    session.search.reset();
    if query.is_empty() {
        return 0;
    }
    let Some(re) = compile_query(query, options) else {
        return 0;
    };
    let original = doc.text_of(&doc.start(), &doc.end());

    let mut result = String::with_capacity(original.len());
    let mut count = 0usize;
    let mut last = 0usize;
    for m in re.find_iter(&original) {
        result.push_str(&original[last..m.start()]);
        result.push_str(replacement);
        last = m.end();
        count += 1;
    }
    if count == 0 {
        return 0;
    }
    result.push_str(&original[last..]);

    if result != original {
        let (start, end) = (doc.start(), doc.end());
        doc.replace_range(&start, &end, &result);
        session.note_mutation();
    }
    count
}
