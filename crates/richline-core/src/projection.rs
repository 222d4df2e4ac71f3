//! Plain-text line projection.
//!
//! The projection is the single source of truth for line numbering: the live
//! document is flattened to text and split into lines with one fixed policy.
//! Every line-based feature (outline, navigation, header restyling) uses this
//! exact split, or their indices would disagree.
//!
//! Projections are ephemeral. They are recomputed from the document on every
//! structural query and hold no reference into it.

use crate::position::PositionedDocument;

/// A single line of the plain-text projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectedLine {
    /// Zero-based position of this line within the projection.
    pub index: usize,
    /// Line text without its terminator. Identical text across distinct
    /// indices is expected and handled, not an error.
    pub raw_text: String,
}

/// Project the current document content into ordered plain-text lines.
pub fn project<D: PositionedDocument>(doc: &D) -> Vec<ProjectedLine> {
    let text = doc.text_of(&doc.start(), &doc.end());
    split_lines(&text)
        .into_iter()
        .enumerate()
        .map(|(index, raw_text)| ProjectedLine { index, raw_text })
        .collect()
}

/// Split text on the three recognized line-break forms (`"\r\n"`, `"\r"`,
/// `"\n"`), never merging or dropping empty lines. A zero-length entry is a
/// valid line and preserves index alignment with the source.
pub fn split_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '\n' => lines.push(std::mem::take(&mut current)),
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                lines.push(std::mem::take(&mut current));
            }
            _ => current.push(ch),
        }
    }
    lines.push(current);
    lines
}

/// Rank of `projection[target]` among all lines sharing its text, counted in
/// document order.
///
/// For a fixed text, ranks form a dense `0..k-1` enumeration. This is what
/// lets the scan in [`locate`](crate::locate) re-find "the 3rd line that says
/// X" even though positions carry no identity.
pub fn occurrence_rank(projection: &[ProjectedLine], target: usize) -> Option<usize> {
    let text = &projection.get(target)?.raw_text;
    Some(
        projection[..target]
            .iter()
            .filter(|line| &line.raw_text == text)
            .count(),
    )
}
