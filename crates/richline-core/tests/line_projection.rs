use richline_core::engine;
use richline_core::RichTextBuffer;

fn texts(doc: &RichTextBuffer) -> Vec<String> {
    engine::project_lines(doc)
        .into_iter()
        .map(|l| l.raw_text)
        .collect()
}

#[test]
fn round_trips_lf_text() {
    let text = "alpha\n\nbeta\ngamma";
    let doc = RichTextBuffer::new(text);
    assert_eq!(texts(&doc).join("\n"), text);
}

#[test]
fn round_trips_crlf_text() {
    let text = "alpha\r\nbeta\r\n\r\ngamma";
    let doc = RichTextBuffer::new(text);
    assert_eq!(texts(&doc).join("\r\n"), text);
}

#[test]
fn empty_lines_keep_their_indices() {
    let doc = RichTextBuffer::new("a\n\n\nb");
    let lines = engine::project_lines(&doc);
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[1].raw_text, "");
    assert_eq!(lines[2].raw_text, "");
    assert_eq!(lines[3].index, 3);
    assert_eq!(lines[3].raw_text, "b");
}

#[test]
fn empty_document_projects_one_empty_line() {
    let doc = RichTextBuffer::new("");
    let lines = engine::project_lines(&doc);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].raw_text, "");
}

#[test]
fn mixed_break_styles_split_consistently() {
    let doc = RichTextBuffer::new("a\r\nb\rc\nd");
    assert_eq!(texts(&doc), vec!["a", "b", "c", "d"]);
}

#[test]
fn trailing_newline_yields_final_empty_line() {
    let doc = RichTextBuffer::new("a\n");
    assert_eq!(texts(&doc), vec!["a", ""]);
}
