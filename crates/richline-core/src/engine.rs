//! The engine boundary consumed by host UI code.
//!
//! Stateless free functions over any [`PositionedDocument`]; per-document
//! state travels in the [`DocumentSession`] the host owns. Failures in any
//! scan path degrade to a no-op or a not-found result rather than
//! propagating, so navigation and formatting conveniences can never take the
//! interactive session down with them.

use crate::format;
use crate::locate;
use crate::outline::{self, Outline};
use crate::position::PositionedDocument;
use crate::projection::{self, ProjectedLine};
use crate::search::{self, SearchOptions};
use crate::session::{DeferredOp, DocumentSession};

/// Project the document into plain-text lines.
pub fn project_lines<D: PositionedDocument>(doc: &D) -> Vec<ProjectedLine> {
    projection::project(doc)
}

/// Build the header outline for the current document content.
pub fn build_outline<D: PositionedDocument>(doc: &D) -> Outline {
    outline::build_outline(&projection::project(doc))
}

/// Move the caret to the start of `line_index`, collapsing the selection
/// there. Silently no-ops when the line is out of range or unresolvable
/// (including zero-length lines, which the occurrence scan cannot anchor).
pub fn navigate_to<D: PositionedDocument>(doc: &mut D, line_index: usize) {
    let projection = projection::project(doc);
    let Some(m) = locate::locate(doc, &projection, line_index) else {
        return;
    };
    doc.set_caret(m.line_start.clone());
    doc.select(m.line_start.clone(), m.line_start);
}

/// Find the next occurrence of `query`, selecting it on success.
pub fn find<D: PositionedDocument>(
    doc: &mut D,
    session: &mut DocumentSession<D>,
    query: &str,
    match_case: bool,
) -> bool {
    search::find_next(doc, &mut session.search, query, SearchOptions { match_case }).is_some()
}

/// Replace the current selection if it matches `query`, then advance to the
/// next match. Returns whether a replacement occurred.
pub fn replace_one<D: PositionedDocument>(
    doc: &mut D,
    session: &mut DocumentSession<D>,
    query: &str,
    replacement: &str,
    match_case: bool,
) -> bool {
    search::replace_current(doc, session, query, replacement, SearchOptions { match_case })
}

/// Replace every occurrence of `query`, returning the exact replacement
/// count.
pub fn replace_all<D: PositionedDocument>(
    doc: &mut D,
    session: &mut DocumentSession<D>,
    query: &str,
    replacement: &str,
    match_case: bool,
) -> usize {
    search::replace_all(doc, session, query, replacement, SearchOptions { match_case })
}

/// Restyle every header in the document. Invisible to change tracking; the
/// caret is restored afterwards.
pub fn reformat_headers<D: PositionedDocument>(doc: &mut D, session: &DocumentSession<D>) {
    format::format_all(doc, session);
}

/// Line index of the line containing the caret, derived with the same split
/// policy as the projection.
pub fn caret_line_index<D: PositionedDocument>(doc: &D) -> usize {
    let before = doc.text_of(&doc.start(), &doc.caret());
    projection::split_lines(&before).len().saturating_sub(1)
}

/// Restyle the line under the caret if it is a header. Returns whether a
/// restyle happened.
pub fn reformat_current_line_if_header<D: PositionedDocument>(
    doc: &mut D,
    session: &DocumentSession<D>,
) -> bool {
    let projection = projection::project(doc);
    if projection.is_empty() {
        return false;
    }
    let line = caret_line_index(doc).min(projection.len() - 1);
    format::format_single(doc, session, &projection, line)
}

/// Queue a caret-line reformat to run once the in-flight edit settles (the
/// host drains with [`drain_deferred`] on the same event loop).
pub fn schedule_reformat_current_line<D: PositionedDocument>(session: &mut DocumentSession<D>) {
    session.defer(DeferredOp::ReformatCaretLine);
}

/// Run all queued continuations against the settled document.
pub fn drain_deferred<D: PositionedDocument>(doc: &mut D, session: &mut DocumentSession<D>) {
    for op in session.take_deferred() {
        match op {
            DeferredOp::ReformatCaretLine => {
                reformat_current_line_if_header(doc, session);
            }
            DeferredOp::ReformatAllHeaders => {
                format::format_all(doc, session);
            }
        }
    }
}
