//! Occurrence-disambiguated line location.
//!
//! Positions carry no line identity, so the only reliable way to map a
//! projected line index back into the document is exact text plus occurrence
//! rank: scan forward from the document start, testing a window of positions
//! against the target text at every step, and stop at the rank-th match.
//!
//! The scan is O(document length x target length) in the worst case. That is
//! acceptable at interactive document sizes and is the documented scaling
//! limit of this engine.

use crate::position::PositionedDocument;
use crate::projection::{self, ProjectedLine};

/// A resolved occurrence of a projected line inside the document.
#[derive(Debug, Clone)]
pub struct LineMatch<P> {
    /// Start of the matched text.
    pub start: P,
    /// End of the matched text (exclusive).
    pub end: P,
    /// Beginning of the line enclosing the match. Navigation targets this,
    /// not the match start, which may sit mid-line.
    pub line_start: P,
}

/// Locate the document range of `projection[target_line]`, disambiguating
/// duplicate lines by occurrence rank.
///
/// Returns `None` for zero-length lines (treated as unmatched), out-of-range
/// indices, and documents holding fewer matches than the rank requires.
pub fn locate<D: PositionedDocument>(
    doc: &D,
    projection: &[ProjectedLine],
    target_line: usize,
) -> Option<LineMatch<D::Position>> {
    let target = &projection.get(target_line)?.raw_text;
    let rank = projection::occurrence_rank(projection, target_line)?;
    locate_occurrence(doc, target, rank)
}

/// Scan for the `rank`-th forward-window match of `target`, tracking the
/// enclosing line start along the way.
///
/// `target` must not contain line breaks; projected line text never does.
pub fn locate_occurrence<D: PositionedDocument>(
    doc: &D,
    target: &str,
    rank: usize,
) -> Option<LineMatch<D::Position>> {
    if target.is_empty() {
        return None;
    }
    let doc_end = doc.end();
    let mut cursor = doc.start();
    let mut line_start = doc.start();
    let mut found = 0usize;

    while cursor < doc_end {
        if let Some(match_end) = match_at(doc, &cursor, target, &doc_end) {
            if found == rank {
                return Some(LineMatch {
                    start: cursor,
                    end: match_end,
                    line_start,
                });
            }
            // The matched text holds no line breaks, so the enclosing line is
            // unchanged after skipping past it.
            found += 1;
            cursor = match_end;
            continue;
        }
        let next = doc.step_forward(&cursor)?;
        let unit = doc.text_of(&cursor, &next);
        if unit.contains('\n') || unit.contains('\r') {
            line_start = next.clone();
        }
        cursor = next;
    }
    None
}

/// Test whether the text starting at `at` equals `target`, returning the
/// window end on success.
fn match_at<D: PositionedDocument>(
    doc: &D,
    at: &D::Position,
    target: &str,
    doc_end: &D::Position,
) -> Option<D::Position> {
    let target_chars = target.chars().count();
    let mut pos = at.clone();
    let mut collected = 0usize;
    while collected < target_chars {
        if pos >= *doc_end {
            return None;
        }
        let next = doc.step_forward(&pos)?;
        collected += doc.text_of(&pos, &next).chars().count();
        pos = next;
    }
    (doc.text_of(at, &pos) == target).then_some(pos)
}
