//! Header restyling.
//!
//! Maps detected header levels to text styles and applies them to the exact
//! document ranges resolved by the occurrence scan. Every mutating path here
//! runs under the session's formatting guard and restores the caret, so a
//! restyle is never observable as a user edit.

use crate::locate;
use crate::outline;
use crate::position::{Color, DEFAULT_TEXT_STYLE, PositionedDocument, TextStyle};
use crate::projection::ProjectedLine;
use crate::session::DocumentSession;

/// Style for a header of the given level: bold white, sized from 24pt at
/// level 1 down to 15pt at level 6. Invalid levels fall back to the default
/// text style.
pub fn header_style(level: u8) -> TextStyle {
    let font_size = match level {
        1 => 24.0,
        2 => 22.0,
        3 => 20.0,
        4 => 18.0,
        5 => 16.0,
        6 => 15.0,
        _ => return DEFAULT_TEXT_STYLE,
    };
    TextStyle {
        font_size,
        bold: true,
        color: Color::WHITE,
    }
}

/// Restyle every detected header in the document.
///
/// Duplicate header text resolves independently per occurrence rank, so two
/// identical lines at different levels each get their own style. Runs under
/// the formatting guard with caret save/restore.
pub fn format_all<D: PositionedDocument>(doc: &mut D, session: &DocumentSession<D>) {
    let _guard = session.formatting_guard();
    let caret = doc.caret();
    let projection = crate::projection::project(doc);

    for line in &projection {
        if let Some((level, _)) = outline::parse_header(&line.raw_text) {
            if let Some(m) = locate::locate(doc, &projection, line.index) {
                doc.apply_style(&m.start, &m.end, &header_style(level));
                session.note_mutation();
            }
        }
    }
    doc.set_caret(caret);
}

/// Restyle one projected line if it is a header, using the same
/// occurrence-disambiguation scan as [`format_all`] rather than a textual
/// first-match shortcut.
///
/// Returns whether a restyle happened.
pub fn format_single<D: PositionedDocument>(
    doc: &mut D,
    session: &DocumentSession<D>,
    projection: &[ProjectedLine],
    line_index: usize,
) -> bool {
    let Some(line) = projection.get(line_index) else {
        return false;
    };
    let Some((level, _)) = outline::parse_header(&line.raw_text) else {
        return false;
    };
    let _guard = session.formatting_guard();
    let caret = doc.caret();
    let Some(m) = locate::locate(doc, projection, line_index) else {
        return false;
    };
    doc.apply_style(&m.start, &m.end, &header_style(level));
    session.note_mutation();
    doc.set_caret(caret);
    true
}
