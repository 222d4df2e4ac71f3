//! Structural header detection.
//!
//! Detects ATX-style headers in the line projection and builds a flat,
//! navigable outline. The canonical header rule, applied uniformly across the
//! outline and the formatter: a trimmed line starting with one to six `#`
//! characters, immediately followed by a space, with a non-empty remainder
//! after trimming. Anything else is silently not a header.
//!
//! Outlines are rebuilt wholesale whenever the projection changes; there is
//! no incremental diffing.

use crate::projection::ProjectedLine;

/// Label shown for the placeholder row of a header-less document.
pub const PLACEHOLDER_LABEL: &str = "No headers found";

/// A detected header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderEntry {
    /// Header level, 1 through 6.
    pub level: u8,
    /// Header text with hashes and surrounding whitespace removed.
    pub display_text: String,
    /// Projection line index this header came from.
    pub source_line: usize,
}

impl HeaderEntry {
    /// Display label indented by `2 * (level - 1)` spaces. Purely a
    /// presentation hint for outline trees.
    pub fn indented_label(&self) -> String {
        let indent = (usize::from(self.level) - 1) * 2;
        format!("{}{}", " ".repeat(indent), self.display_text)
    }
}

/// One row of the outline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutlineItem {
    /// A navigable header.
    Header(HeaderEntry),
    /// The single disabled row shown when the document has no headers.
    Placeholder,
}

impl OutlineItem {
    /// Whether selecting this row should navigate.
    pub fn is_navigable(&self) -> bool {
        matches!(self, Self::Header(_))
    }

    /// Display label for this row.
    pub fn label(&self) -> String {
        match self {
            Self::Header(entry) => entry.indented_label(),
            Self::Placeholder => PLACEHOLDER_LABEL.to_string(),
        }
    }
}

/// The document outline. Never empty: a placeholder row stands in when the
/// document has no headers, and callers must treat that row as non-navigable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outline {
    /// Outline rows in document order.
    pub items: Vec<OutlineItem>,
}

impl Outline {
    /// Iterate the header rows.
    pub fn headers(&self) -> impl Iterator<Item = &HeaderEntry> {
        self.items.iter().filter_map(|item| match item {
            OutlineItem::Header(entry) => Some(entry),
            OutlineItem::Placeholder => None,
        })
    }

    /// Whether the outline is the placeholder row only.
    pub fn is_placeholder(&self) -> bool {
        matches!(self.items.as_slice(), [OutlineItem::Placeholder])
    }
}

/// Parse one projected line as a header under the canonical rule, returning
/// `(level, display_text)`.
pub fn parse_header(line: &str) -> Option<(u8, String)> {
    let trimmed = line.trim();
    if !trimmed.starts_with('#') {
        return None;
    }
    let level = trimmed.chars().take_while(|&c| c == '#').count();
    if level == 0 || level > 6 {
        return None;
    }
    let rest = &trimmed[level..];
    if !rest.starts_with(' ') {
        return None;
    }
    let text = rest.trim();
    if text.is_empty() {
        return None;
    }
    Some((level as u8, text.to_string()))
}

/// Build the outline for a projection.
pub fn build_outline(projection: &[ProjectedLine]) -> Outline {
    let mut items = Vec::new();
    for line in projection {
        if line.raw_text.trim().is_empty() {
            continue;
        }
        if let Some((level, display_text)) = parse_header(&line.raw_text) {
            items.push(OutlineItem::Header(HeaderEntry {
                level,
                display_text,
                source_line: line.index,
            }));
        }
    }
    if items.is_empty() {
        items.push(OutlineItem::Placeholder);
    }
    Outline { items }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_levels_one_through_six() {
        for level in 1..=6u8 {
            let line = format!("{} Title", "#".repeat(level.into()));
            assert_eq!(parse_header(&line), Some((level, "Title".to_string())));
        }
    }

    #[test]
    fn rejects_seven_hashes() {
        assert_eq!(parse_header("####### TooDeep"), None);
    }

    #[test]
    fn rejects_missing_space() {
        assert_eq!(parse_header("#NoSpace"), None);
    }

    #[test]
    fn rejects_hashes_at_end_of_line() {
        assert_eq!(parse_header("##"), None);
        assert_eq!(parse_header("## "), None);
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(parse_header("  ## Sub  "), Some((2, "Sub".to_string())));
    }

    #[test]
    fn indented_label_steps_two_spaces_per_level() {
        let entry = HeaderEntry {
            level: 3,
            display_text: "Deep".to_string(),
            source_line: 0,
        };
        assert_eq!(entry.indented_label(), "    Deep");
    }
}
