use snippetbook::formats::{ContentKind, HeadingType};
use snippetbook::{OutputSequence, ParagraphDraft, compile};

fn populated_session() -> anyhow::Result<OutputSequence> {
    let mut output = OutputSequence::new();

    output.append(&compile::chapter("chapter-03")?)?;
    let record = compile::heading(output.counters_mut(), "Origins", HeadingType::Main, "1")?;
    output.append(&record)?;
    let record = compile::heading(output.counters_mut(), "Roots", HeadingType::Sub, "no-prefix")?;
    output.append(&record)?;
    let record = compile::hints(output.counters_mut(), "Read slowly.")?;
    output.append(&record)?;
    output.append(&compile::page("45")?)?;

    let mut draft = ParagraphDraft::new("v1", "c03", "12");
    draft.add_snippet(ContentKind::Text, "அன்பு", None)?;
    draft.add_snippet(ContentKind::Italic, "love", None)?;
    draft.add_snippet(ContentKind::Verse, "1 Cor 13:4", Some("https://example.com/1cor13"))?;
    draft.add_snippet(ContentKind::Word, "agape", None)?;
    output.commit_paragraph(&mut draft)?;

    output.append(&compile::poem("poem-1", "Song", "first line\n\n  second line  ")?)?;
    output.append(&compile::image("https://example.com/figure.png")?)?;
    output.append(&compile::footer_passage("fp-1", "See appendix.")?)?;

    Ok(output)
}

#[test]
fn export_then_import_reproduces_sequence() -> anyhow::Result<()> {
    let original = populated_session()?;
    let exported = original.export()?;

    let mut reloaded = OutputSequence::new();
    let added = reloaded.import_str(&exported)?;

    assert_eq!(added, original.len());
    assert_eq!(reloaded.entries(), original.entries());
    assert_eq!(reloaded.render()?, exported);
    Ok(())
}

#[test]
fn exported_array_has_expected_records() -> anyhow::Result<()> {
    let exported = populated_session()?.export()?;
    let value: serde_json::Value = serde_json::from_str(&exported)?;

    let expected = serde_json::json!([
        {"type": "chapter", "value": "அத்தியாயம் – 03", "id": "chapter-03"},
        {"type": "heading", "value": "1. Origins", "id": "main-heading-1", "headingType": "main"},
        {"type": "heading", "value": "Roots", "id": "sub-heading-1", "headingType": "sub"},
        {"type": "hints", "value": "Read slowly.", "id": "hints-1"},
        {"type": "page", "value": "Page 045", "id": "page-045"},
        {"type": "paragraph", "id": "v1-c03-012", "content": [
            {"type": "text", "value": "அன்பு"},
            {"type": "italic", "value": "love"},
            {"type": "verse", "value": "1 Cor 13:4", "link": "https://example.com/1cor13"},
            {"type": "word", "value": "agape"}
        ]},
        {"type": "poem", "id": "poem-1", "title": "Song", "lines": [
            {"type": "line", "value": "first line"},
            {"type": "line", "value": "second line"}
        ]},
        {"type": "image", "src": "https://example.com/figure.png"},
        {"type": "footer_passage", "id": "fp-1", "value": "See appendix."}
    ]);
    assert_eq!(value, expected);
    Ok(())
}

#[test]
fn import_keeps_unknown_kinds_and_extra_fields() -> anyhow::Result<()> {
    let text = r#"[
  {
    "type": "heading",
    "value": "Old",
    "id": "main-heading-9",
    "headingType": "main",
    "reviewed": true
  },
  {
    "type": "sidebar",
    "id": "s1",
    "body": "kept"
  }
]"#;

    let mut output = OutputSequence::new();
    output.import_str(text)?;
    assert_eq!(output.render()?, text);
    Ok(())
}

#[test]
fn duplicate_ids_are_allowed() -> anyhow::Result<()> {
    let mut output = OutputSequence::new();
    output.append(&compile::page("7")?)?;
    output.append(&compile::page("7")?)?;
    assert_eq!(output.len(), 2);
    assert_eq!(output.entries()[0], output.entries()[1]);
    Ok(())
}

#[test]
fn rejected_batch_appends_nothing() -> anyhow::Result<()> {
    let mut output = populated_session()?;
    let before = output.entries().to_vec();

    for bad in [
        r#"{"type":"image","src":"a.png"}"#,
        r#"[{"type":"image"}]"#,
        r#"[{"type":"poem","id":"p1","title":"T","lines":[]}]"#,
        r#"[{"type":"image","src":"ok.png"},{"type":"paragraph","id":"x","content":[]}]"#,
    ] {
        assert!(output.import_str(bad).is_err(), "accepted {bad}");
        assert_eq!(output.entries(), before.as_slice());
    }
    Ok(())
}
