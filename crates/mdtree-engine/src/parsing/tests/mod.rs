//! Integration tests for the parsing module.
//!
//! Fixtures (.md) and their expected markup (.html) are co-located in `fixtures/`.


use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use crate::{
    error::StructuralError,
    options::ParseOptions,
    parsing::{blocks::segment, markdown_to_html, parse_document, parse_document_with},
    tree::build_document,
};

// Fixture-based tests

#[test]
fn fixture_headings_and_paragraph() {
    assert_fixture("headings_and_paragraph");
}

#[test]
fn fixture_lists() {
    assert_fixture("lists");
}

#[test]
fn fixture_code_and_quote() {
    assert_fixture("code_and_quote");
}

#[test]
fn fixture_links_and_images() {
    assert_fixture("links_and_images");
}

fn assert_fixture(name: &str) {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let md = std::fs::read_to_string(format!("{fixtures_dir}/{name}.md")).unwrap();
    let expected = std::fs::read_to_string(format!("{fixtures_dir}/{name}.html")).unwrap();

    let doc = parse_document(&md).unwrap();
    invariants::check(&md, &doc);

    assert_eq!(doc.to_markup().unwrap(), expected.trim_end());
}

// End-to-end tests

#[test]
fn heading_then_paragraph() {
    let html = markdown_to_html(
        "# Heading\n\nParagraph with **bold** text.",
        &ParseOptions::default(),
    )
    .unwrap();
    assert_snapshot!(html, @"<div><h1>Heading</h1><p>Paragraph with <b>bold</b> text.</p></div>");
}

#[test]
fn unordered_list_document() {
    let html = markdown_to_html("* one\n* two", &ParseOptions::default()).unwrap();
    assert_snapshot!(html, @"<div><ul><li>one</li><li>two</li></ul></div>");
}

#[test]
fn every_block_type_in_one_document() {
    let md = "## Title\n\n```\ncode\n```\n\n> quoted\n\n- a\n\n1. b\n\ntext";
    let html = markdown_to_html(md, &ParseOptions::default()).unwrap();
    assert_snapshot!(
        html,
        @"<div><h2>Title</h2><pre><code>code</code></pre><blockquote>quoted</blockquote><ul><li>a</li></ul><ol><li>b</li></ol><p>text</p></div>"
    );
}

#[test]
fn code_on_the_opening_fence_line_is_kept() {
    let md = "```x = 1\ny = 2\n```";
    let expected = "<div><pre><code>x = 1\ny = 2</code></pre></div>";
    let html = markdown_to_html(md, &ParseOptions::default()).unwrap();
    assert_eq!(html, expected);

    let options = ParseOptions {
        code_language_class: false,
        ..ParseOptions::default()
    };
    let html = markdown_to_html(md, &options).unwrap();
    assert_eq!(html, expected);
}

#[test]
fn language_tag_is_code_when_classes_are_off() {
    let options = ParseOptions {
        code_language_class: false,
        ..ParseOptions::default()
    };
    let html = markdown_to_html("```rust\nlet x = 1;\n```", &options).unwrap();
    assert_eq!(html, "<div><pre><code>rust\nlet x = 1;</code></pre></div>");
}

#[test]
fn escaping_applies_end_to_end() {
    let options = ParseOptions {
        escape_html: true,
        ..ParseOptions::default()
    };
    let html = markdown_to_html("1 < 2 & **3 > 2**", &options).unwrap();
    assert_snapshot!(html, @"<div><p>1 &lt; 2 &amp; <b>3 &gt; 2</b></p></div>");
}

#[test]
fn empty_document_is_rejected() {
    assert_eq!(
        parse_document(""),
        Err(StructuralError::EmptyChildren { path: "div".into() })
    );
    assert_eq!(parse_document("\n\n\n").unwrap_err().path(), "div");
}

#[test]
fn empty_list_item_is_rejected() {
    let err = parse_document("* a\n* \n* b").unwrap_err();
    assert_eq!(
        err,
        StructuralError::EmptyChildren {
            path: "div > ul[0] > li[1]".into()
        }
    );
}

#[test]
fn rejection_is_independent_of_options() {
    let options = ParseOptions {
        escape_html: true,
        ..ParseOptions::default()
    };
    assert_eq!(parse_document_with("", &options), parse_document(""));
}

// Invariant tests

#[test]
fn invariants_hold_for_samples() {
    let samples = [
        "plain",
        "\n\n# lead blank lines\n\n\n",
        "a\n\n\n\nb",
        "  indented  \n\n  > quote  ",
        "* x\n* y\n\n1. one\n3. three",
        "```\nfence\n```\n\ntail [a](b) ![c](d)",
    ];
    for md in samples {
        let doc = build_document(md, &ParseOptions::default());
        invariants::check(md, &doc);
    }
}

#[test]
fn segment_splits_on_blank_lines_only() {
    let md = "one\ntwo\n\nthree\n\n\n\nfour";
    let blocks: Vec<_> = segment(md).map(|b| b.as_str()).collect();
    assert_eq!(blocks, vec!["one\ntwo", "three", "four"]);
}

#[test]
fn segment_drops_empty_pieces() {
    assert_eq!(segment("\n\n\n\n").count(), 0);
    assert_eq!(segment("").count(), 0);
}
