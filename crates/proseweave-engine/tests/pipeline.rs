use proseweave_engine::{
    markup::{parse_markup, to_markup},
    model::Document,
    parsing::{parse_rope, snapshot},
};
use rstest::rstest;

const SAMPLE: &str = "# Title\n\nSome **bold** and *italic* text.\n\n- item one\n- item two";

fn render(text: &str) -> String {
    Document::from_text(text).to_markup()
}

#[test]
fn sample_document_round_trip() {
    insta::assert_snapshot!(
        render(SAMPLE),
        @"<h1>Title</h1><p>Some <strong>bold</strong> and <em>italic</em> text.</p><ul><li>item one</li><li>item two</li></ul>"
    );
}

#[test]
fn sample_document_outline() {
    insta::assert_snapshot!(snapshot::outline(&Document::from_text(SAMPLE)), @r#"
    Heading(1): Plain("Title")
    Paragraph: Plain("Some ") Bold("bold") Plain(" and ") Italic("italic") Plain(" text.")
    List(ul):
      - Plain("item one")
      - Plain("item two")
    "#);
}

#[rstest]
#[case::unclosed_emphasis("*unclosed emphasis", "<p>*unclosed emphasis</p>")]
#[case::unclosed_strong("**never closed", "<p>**never closed</p>")]
#[case::lone_star("a * b", "<p>a * b</p>")]
#[case::spaced_pair("2 * 3 * 4", "<p>2 <em> 3 </em> 4</p>")]
#[case::spaced_strong("** b **", "<p><strong> b </strong></p>")]
#[case::empty_pair("****", "<p>****</p>")]
#[case::deep_heading("#### four", "<p>#### four</p>")]
#[case::hashtag("#tag", "<p>#tag</p>")]
#[case::multi_line_paragraph("one\ntwo", "<p>one<br>two</p>")]
#[case::list_interrupts_paragraph("intro\n- a\n- b", "<p>intro</p><ul><li>a</li><li>b</li></ul>")]
#[case::blank_line_splits_lists("- a\n\n- b", "<ul><li>a</li></ul><ul><li>b</li></ul>")]
#[case::escaping("1 < 2 & *3 > 2*", "<p>1 &lt; 2 &amp; <em>3 &gt; 2</em></p>")]
#[case::empty("", "")]
#[case::only_blank_lines("\n  \n\t\n", "")]
#[case::crlf("# A\r\n\r\nb", "<h1>A</h1><p>b</p>")]
#[case::lone_carriage_return("a\rb", "<p>a b</p>")]
fn text_renders_to_markup(#[case] text: &str, #[case] expected: &str) {
    assert_eq!(render(text), expected);
}

#[rstest]
#[case(SAMPLE)]
#[case("")]
#[case("plain")]
#[case("a\nb\n\n\n# h\n- x\n- y\ntext after\n\n   \n## end")]
#[case("\n\n- only\n- list\n\n")]
#[case("*a* **b** *c")]
fn every_non_blank_line_is_covered_once(#[case] text: &str) {
    let rope = xi_rope::Rope::from(text);
    let parsed = parse_rope(&rope);
    snapshot::invariants(&rope, &parsed.nodes);
}

#[rstest]
#[case(SAMPLE)]
#[case("a\nb\n\n- <x>\n- &amp;")]
#[case("### **all** *of* it\n\nline\nbreak")]
fn serializer_is_idempotent(#[case] text: &str) {
    let doc = Document::from_text(text);
    let first = to_markup(&doc);
    assert_eq!(to_markup(&doc), first);
    assert_eq!(to_markup(&doc.clone().normalized()), first);
}

#[rstest]
#[case(SAMPLE)]
#[case("a\nb\n\n- <x>\n- &amp;")]
#[case("### **all** *of* it\n\nline\nbreak")]
#[case("x * y ** z")]
#[case("one\rtwo\r\n\r\n- a\rb")]
fn markup_reads_back_to_same_document(#[case] text: &str) {
    let doc = Document::from_text(text);
    let markup = doc.to_markup();
    let reread = parse_markup(&markup);
    assert_eq!(reread, doc);
    assert_eq!(reread.to_markup(), markup);
}
