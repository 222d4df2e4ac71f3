use richline_core::engine;
use richline_core::{HeaderEntry, RichTextBuffer};

#[test]
fn detects_valid_headers_and_skips_malformed_ones() {
    let doc = RichTextBuffer::new("# Title\n\nSome text\n## Sub\n####### TooDeep\n#NoSpace");
    let outline = engine::build_outline(&doc);
    let headers: Vec<HeaderEntry> = outline.headers().cloned().collect();
    assert_eq!(
        headers,
        vec![
            HeaderEntry {
                level: 1,
                display_text: "Title".to_string(),
                source_line: 0,
            },
            HeaderEntry {
                level: 2,
                display_text: "Sub".to_string(),
                source_line: 3,
            },
        ]
    );
}

#[test]
fn headerless_document_gets_a_disabled_placeholder() {
    let doc = RichTextBuffer::new("plain\ntext only");
    let outline = engine::build_outline(&doc);
    assert!(outline.is_placeholder());
    assert_eq!(outline.items.len(), 1);
    assert!(!outline.items[0].is_navigable());
    assert_eq!(outline.items[0].label(), "No headers found");
}

#[test]
fn hash_run_without_text_is_not_a_header() {
    let doc = RichTextBuffer::new("##\n### \n#### x");
    let outline = engine::build_outline(&doc);
    let headers: Vec<&HeaderEntry> = outline.headers().collect();
    assert_eq!(headers.len(), 1);
    assert_eq!(headers[0].level, 4);
    assert_eq!(headers[0].source_line, 2);
}

#[test]
fn duplicate_header_lines_each_appear() {
    let doc = RichTextBuffer::new("# A\nx\n# A");
    let outline = engine::build_outline(&doc);
    let lines: Vec<usize> = outline.headers().map(|h| h.source_line).collect();
    assert_eq!(lines, vec![0, 2]);
}

#[test]
fn labels_indent_two_spaces_per_level() {
    let doc = RichTextBuffer::new("# Top\n### Deep");
    let outline = engine::build_outline(&doc);
    let labels: Vec<String> = outline.items.iter().map(|i| i.label()).collect();
    assert_eq!(labels, vec!["Top".to_string(), "    Deep".to_string()]);
}

#[test]
fn outline_is_rebuilt_from_current_content() {
    let mut doc = RichTextBuffer::new("# One");
    assert_eq!(engine::build_outline(&doc).headers().count(), 1);
    doc.set_text("no headers here");
    assert!(engine::build_outline(&doc).is_placeholder());
}
