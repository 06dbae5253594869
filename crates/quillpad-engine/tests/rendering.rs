use pretty_assertions::assert_eq;
use quillpad_engine::parsing::{blocks::Block, markdown_to_html, parse_document};
use rstest::rstest;

const RELEASE_NOTES: &str = "# Release notes

Version **2.0** ships _today_.

- Faster [docs](https://example.com/docs?a=1&b=2)
* Safer `unsafe`
1. Smaller

> Quote with <script>alert(1)</script>

```rust
# not a heading
- not a list
a < b && c
```



Trailing paragraph.";

#[test]
fn renders_mixed_document() {
    let expected = [
        "<h1>Release notes</h1>",
        "",
        "<p>Version <strong>2.0</strong> ships <em>today</em>.</p>",
        "",
        concat!(
            "<ul>",
            r#"<li>Faster <a href="https://example.com/docs?a=1&amp;b=2" target="_blank" rel="noopener">docs</a></li>"#,
            "<li>Safer <code>unsafe</code></li>",
            "<li>Smaller</li>",
            "</ul>"
        ),
        "",
        "<blockquote>Quote with &lt;script&gt;alert(1)&lt;/script&gt;</blockquote>",
        "",
        "<pre><code>rust\n# not a heading\n- not a list\na &lt; b &amp;&amp; c</code></pre>",
        "",
        "<p>Trailing paragraph.</p>",
    ]
    .join("\n");

    assert_eq!(markdown_to_html(RELEASE_NOTES), expected);
}

#[test]
fn heading_blank_and_formatted_paragraph() {
    let doc = parse_document("# Title\n\nSome *italic* and **bold** text.");

    assert_eq!(
        doc.blocks,
        vec![
            Block::Heading {
                level: 1,
                html: "Title".to_string()
            },
            Block::Blank,
            Block::Paragraph {
                html: "Some <em>italic</em> and <strong>bold</strong> text.".to_string()
            },
        ]
    );
    assert_eq!(
        doc.to_html(),
        "<h1>Title</h1>\n\n<p>Some <em>italic</em> and <strong>bold</strong> text.</p>"
    );
}

#[test]
fn inline_code_alone() {
    insta::assert_snapshot!(markdown_to_html("`code`"), @"<code>code</code>");
}

#[test]
fn list_then_blank_is_one_list() {
    let doc = parse_document("- a\n- b\n");

    assert_eq!(
        doc.blocks,
        vec![
            Block::List {
                items: vec!["a".to_string(), "b".to_string()]
            },
            Block::Blank,
        ]
    );
}

#[test]
fn code_fence_content_is_never_reinterpreted() {
    let html = markdown_to_html("```\n**not bold** [not](link)\n> not quoted\n```");

    assert_eq!(
        html,
        "<pre><code>**not bold** [not](link)\n&gt; not quoted</code></pre>"
    );
}

#[rstest]
#[case("<img src=x onerror=alert(1)>")]
#[case("# <script>x</script>")]
#[case("- <b>item</b>")]
#[case("> </blockquote><script>")]
#[case("`<script>`")]
#[case("```\n<script>\n```")]
#[case("[<b>x</b>](javascript:\"<script>)")]
fn authored_markup_is_escaped(#[case] markdown: &str) {
    let html = markdown_to_html(markdown);

    assert!(!html.contains("<script"), "unescaped script in {html:?}");
    assert!(!html.contains("<img"), "unescaped img in {html:?}");
    assert!(!html.contains("<b>"), "unescaped b in {html:?}");
}

#[rstest]
#[case("")]
#[case("\n\n\n")]
#[case("```")]
#[case("``````")]
#[case("**")]
#[case("[]()")]
#[case("#")]
#[case("####### seven")]
#[case("-")]
#[case("1.")]
#[case(">")]
#[case("\u{E000}0\u{E001}")]
#[case("\u{E002}0\u{E003} [a](\u{E000}0\u{E001})")]
fn degenerate_input_renders(#[case] markdown: &str) {
    let html = markdown_to_html(markdown);

    assert!(!html.contains('\u{E000}'));
    assert!(!html.contains('\u{E002}'));
}

#[test]
fn link_with_formatted_label() {
    insta::assert_snapshot!(
        markdown_to_html("See [the **new** guide](https://example.com/a_b_c) now"),
        @r#"<p>See <a href="https://example.com/a_b_c" target="_blank" rel="noopener">the <strong>new</strong> guide</a> now</p>"#
    );
}

#[rstest]
#[case("Just a sentence.", "<p>Just a sentence.</p>")]
#[case("First line\nSecond line", "<p>First line</p>\n<p>Second line</p>")]
#[case("One\n\n\n\nTwo", "<p>One</p>\n\n<p>Two</p>")]
#[case("  indented words  \n\ntrailing", "<p>indented words</p>\n\n<p>trailing</p>")]
#[case(
    "Pi is about 3.14 today\nand 2024 was a year\n\n\nthe end",
    "<p>Pi is about 3.14 today</p>\n<p>and 2024 was a year</p>\n\n<p>the end</p>"
)]
fn plain_text_renders_the_same_once_escaped(#[case] text: &str, #[case] expected: &str) {
    let escaped = html_escape::encode_text(text);
    assert_eq!(escaped, text, "case must be unchanged by escaping");

    assert_eq!(markdown_to_html(&escaped), markdown_to_html(text));
    assert_eq!(markdown_to_html(text), expected);
}

#[test]
fn line_starting_with_inline_code_is_left_unformatted() {
    assert_eq!(
        markdown_to_html("`x` is **bold** & <b>"),
        "<code>x</code> is **bold** &amp; &lt;b&gt;"
    );
    assert_eq!(
        markdown_to_html("- item\n`x` closes the list"),
        "<ul><li>item</li></ul>\n<code>x</code> closes the list"
    );
}

#[test]
fn bullet_followed_by_number_strips_both() {
    assert_eq!(
        markdown_to_html("- 1. still text"),
        "<ul><li>still text</li></ul>"
    );
}

#[test]
fn text_on_opening_fence_line_is_kept() {
    assert_eq!(markdown_to_html("```make\n```"), "<pre><code>make</code></pre>");
    assert_eq!(
        markdown_to_html("```js\nlet a = 1;\n```"),
        "<pre><code>js\nlet a = 1;</code></pre>"
    );
}

#[test]
fn rendering_is_deterministic() {
    assert_eq!(markdown_to_html(RELEASE_NOTES), markdown_to_html(RELEASE_NOTES));
}

#[test]
fn welcome_article_renders() {
    use chrono::NaiveDate;
    use quillpad_engine::models::Article;

    let welcome = Article::welcome(1, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    let html = markdown_to_html(welcome.content());

    assert!(html.starts_with("<h1>Welcome to my blog</h1>"));
    assert!(html.contains("<h2>Tech</h2>"));
    assert!(html.contains("<ul><li>"));
}
