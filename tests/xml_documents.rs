//! Document-level tests over the fixture files in tests/testdata

use rstest::rstest;
use std::fs;
use xmlnodes::xml::ast::{Position, Range};
use xmlnodes::xml::formats::to_treeviz_str;
use xmlnodes::xml::parsing::parse_syntax;
use xmlnodes::xml::testing::assert_document;
use xmlnodes::{parse_xml_document, ParseError};

fn read_fixture(name: &str) -> String {
    fs::read_to_string(format!("tests/testdata/{name}")).expect("Failed to read fixture")
}

#[test]
fn test_spring_beans() {
    let doc = parse_xml_document(&read_fixture("spring.xml")).expect("document");

    assert_document(&doc).root_tag("beans").root(|root| {
        root.child_tags(&["bean", "bean"])
            .starts_at(1, 0)
            .child(0, |first| {
                first.child_count(0).text_trimmed("<!-- wired by name -->");
            })
            .child(1, |second| {
                second
                    .text_trimmed("Content")
                    .range(Range::new(Position::new(10, 4), Position::new(12, 10)));
            });
    });
}

#[test]
fn test_spring_without_beans_has_no_children() {
    let doc = parse_xml_document(&read_fixture("springNoBeans.xml")).expect("document");

    assert_document(&doc).root_tag("beans").root(|root| {
        root.child_count(0);
    });
    assert!(doc.root().text_content.contains("no beans defined yet"));
}

#[test]
fn test_spring_lookup() {
    let doc = parse_xml_document(&read_fixture("spring.xml")).expect("document");

    assert_document(&doc)
        .nodes_at(11, 9, &["bean", "beans"])
        .nodes_at(5, 0, &["beans"])
        .nodes_at(0, 3, &[]);
}

#[test]
fn test_unclosed_element_keeps_siblings() {
    let source = read_fixture("unclosed.xml");
    let doc = parse_xml_document(&source).expect("document");

    // `</project>` closes the unclosed <module>, which swallows the rest of the file
    assert_document(&doc).root_tag("project").root(|root| {
        root.child_tags(&["module", "module"])
            .child(0, |core| {
                core.text("core");
            })
            .child(1, |cli| {
                cli.child_tags(&["module"]).child(0, |lsp| {
                    lsp.text("lsp").starts_at(4, 4);
                });
            });
    });

    let tree = parse_syntax(&source).expect("syntax tree");
    let messages: Vec<String> = tree.errors().iter().map(ToString::to_string).collect();
    assert!(messages.contains(&"4:4: element is missing a tag name".to_string()));
    assert!(messages
        .iter()
        .any(|m| m.contains("end tag </project> does not match start tag <module>")));
}

#[rstest]
#[case::empty("")]
#[case::whitespace("  \n\t\n")]
#[case::declaration_only("<?xml version=\"1.0\"?>\n")]
#[case::comment_only("<!-- nothing here -->")]
#[case::text_only("plain text, no markup")]
#[case::stray_end_tag("</a>")]
#[case::only_nameless_elements("<>x</ >\n< />")]
fn test_documents_without_elements_are_empty(#[case] source: &str) {
    assert_eq!(parse_xml_document(source), Err(ParseError::EmptyDocument));
}

#[rstest]
#[case::self_closing("<a/>", "a", 0)]
#[case::with_text("<a>text</a>", "a", 0)]
#[case::nested("<a><b/><c><d/></c></a>", "a", 2)]
#[case::stylesheet_prolog("<?xml version=\"1.0\"?>\n<?xml-stylesheet href=\"a.xsl\"?>\n<root><a/><b/></root>", "root", 2)]
#[case::after_prolog("<?xml version=\"1.0\"?>\n<!DOCTYPE a>\n<!-- c -->\n<a><b/></a>", "a", 1)]
#[case::extra_roots("<a/><b/><c/>", "a", 0)]
#[case::nameless_first_root("<>x</ >\n<a><b/></a>", "a", 1)]
#[case::attributes("<a x=\"1\" y='2'><b z=\"3\"/></a>", "a", 1)]
#[case::namespaced("<ns:a><ns:b/></ns:a>", "ns:a", 1)]
#[case::unterminated_start_tag("<a", "a", 0)]
#[case::mismatched_end_tag("<a><b></c></a>", "a", 1)]
fn test_root_and_child_count(
    #[case] source: &str,
    #[case] root_tag: &str,
    #[case] child_count: usize,
) {
    let doc = parse_xml_document(source).expect("document");
    assert_document(&doc).root_tag(root_tag).root(|root| {
        root.child_count(child_count);
    });
}

#[rstest]
#[case::plain("<a>  Content\n</a>", "  Content\n")]
#[case::nested_markup("<a>x<b>y</b>z</a>", "x<b>y</b>z")]
#[case::references("<a>&lt;&#65;</a>", "&lt;&#65;")]
#[case::cdata("<a><![CDATA[<raw>]]></a>", "<![CDATA[<raw>]]>")]
#[case::empty_element("<a></a>", "")]
#[case::self_closing("<a/>", "")]
fn test_text_content_is_literal(#[case] source: &str, #[case] expected: &str) {
    let doc = parse_xml_document(source).expect("document");
    assert_eq!(doc.root().text_content, expected);
}

#[rstest]
#[case::balanced(10_000, true)]
#[case::unclosed(10_000, false)]
fn test_deep_nesting_fails_cleanly(#[case] depth: usize, #[case] closed: bool) {
    let mut source = "<node>".repeat(depth);
    if closed {
        source.push_str(&"</node>".repeat(depth));
    }
    match parse_xml_document(&source) {
        Err(ParseError::Syntax { message }) => {
            assert!(message.starts_with("1:768: elements nested deeper than"), "{message}");
        }
        other => panic!("expected a syntax error, got {other:?}"),
    }
}

#[test]
fn test_ranges_count_characters_not_bytes() {
    let doc = parse_xml_document("<a>\n  ééé<b/>\n</a>").expect("document");
    assert_document(&doc).root(|root| {
        root.child(0, |b| {
            b.starts_at(1, 5).ends_at(1, 7);
        });
    });
}

#[test]
fn test_reparsing_is_idempotent() {
    let source = read_fixture("spring.xml");
    assert_eq!(parse_xml_document(&source), parse_xml_document(&source));
}

#[test]
fn test_spring_treeviz() {
    let doc = parse_xml_document(&read_fixture("spring.xml")).expect("document");
    insta::assert_snapshot!(to_treeviz_str(&doc, true, 30), @r###"
    02 ⧉ beans
    07 ├─ ◇ bean: <!-- wired by name -->
    11 └─ ◇ bean: Content
    "###);
}
