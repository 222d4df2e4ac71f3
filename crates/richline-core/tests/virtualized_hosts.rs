//! Hosts with virtualized content can read flattened text while refusing to
//! step positions past the materialized window. Scans over such documents
//! must degrade to not-found instead of panicking.

use richline_core::locate::locate_occurrence;
use richline_core::search::{self, SearchCursor, SearchOptions};
use richline_core::{PositionedDocument, TextStyle};

/// Document that materializes only its first `step_limit` characters:
/// `text_of` sees everything, but `step_forward` fails past the window.
struct VirtualizedDoc {
    text: String,
    step_limit: usize,
    caret: usize,
    selection: Option<(usize, usize)>,
}

impl VirtualizedDoc {
    fn new(text: &str, step_limit: usize) -> Self {
        Self {
            text: text.to_string(),
            step_limit,
            caret: 0,
            selection: None,
        }
    }

    fn len_chars(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_of(&self, char_offset: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_offset)
            .map(|(b, _)| b)
            .unwrap_or(self.text.len())
    }
}

impl PositionedDocument for VirtualizedDoc {
    type Position = usize;

    fn start(&self) -> usize {
        0
    }

    fn end(&self) -> usize {
        self.len_chars()
    }

    fn step_forward(&self, pos: &usize) -> Option<usize> {
        if *pos >= self.step_limit || *pos >= self.len_chars() {
            return None;
        }
        Some(pos + 1)
    }

    fn text_of(&self, a: &usize, b: &usize) -> String {
        if a >= b {
            return String::new();
        }
        self.text.chars().skip(*a).take(b - a).collect()
    }

    fn apply_style(&mut self, _a: &usize, _b: &usize, _style: &TextStyle) {}

    fn insert_text(&mut self, pos: &usize, text: &str) -> usize {
        let at = self.byte_of(*pos);
        self.text.insert_str(at, text);
        pos + text.chars().count()
    }

    fn replace_range(&mut self, a: &usize, b: &usize, text: &str) -> usize {
        let (start, end) = (self.byte_of(*a.min(b)), self.byte_of(*a.max(b)));
        self.text.replace_range(start..end, text);
        a.min(b) + text.chars().count()
    }

    fn caret(&self) -> usize {
        self.caret
    }

    fn set_caret(&mut self, pos: usize) {
        self.caret = pos.min(self.len_chars());
    }

    fn selection(&self) -> Option<(usize, usize)> {
        self.selection.filter(|(a, b)| a != b)
    }

    fn select(&mut self, a: usize, b: usize) {
        self.selection = Some((a.min(b), a.max(b)));
        self.caret = a.max(b);
    }
}

#[test]
fn locate_degrades_to_not_found_past_the_window() {
    let doc = VirtualizedDoc::new("aaaa\ntarget line", 3);
    assert!(locate_occurrence(&doc, "target line", 0).is_none());
}

#[test]
fn locate_still_resolves_inside_the_window() {
    let doc = VirtualizedDoc::new("aaaa\ntarget line", 3);
    let m = locate_occurrence(&doc, "aaa", 0).unwrap();
    assert_eq!(m.start, 0);
    assert_eq!(m.end, 3);
    assert_eq!(m.line_start, 0);
}

#[test]
fn find_next_degrades_when_the_match_is_unreachable() {
    let mut doc = VirtualizedDoc::new("aaaa\ntarget line", 3);
    let mut cursor = SearchCursor::new();
    let options = SearchOptions { match_case: false };
    assert!(search::find_next(&mut doc, &mut cursor, "target", options).is_none());
}

#[test]
fn find_next_still_selects_inside_the_window() {
    let mut doc = VirtualizedDoc::new("aaaa\ntarget line", 3);
    let mut cursor = SearchCursor::new();
    let options = SearchOptions { match_case: false };
    let (start, end) = search::find_next(&mut doc, &mut cursor, "aaa", options).unwrap();
    assert_eq!((start, end), (0, 3));
    assert_eq!(doc.selection(), Some((0, 3)));
}
