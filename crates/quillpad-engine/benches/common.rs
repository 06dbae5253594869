// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **some** _content_ and a [link](https://example.com).\n\n- Bullet point\n* Another item with `code`\n1. Numbered\n\n> A quote\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_article(sections: usize) -> String {
    let mut content = String::new();

    for section in 0..sections {
        content.push_str(&format!("## Section {}\n\n", section));
        content.push_str("Some paragraph content with multiple sentences. This helps create realistic *article* structure for **benchmarking**.\n\n");

        for i in 0..3 {
            content.push_str(&format!("- Item {} in section {}\n", i, section));
        }
        content.push('\n');

        if section % 3 == 0 {
            content.push_str("```\nlet value = 42;\nprintln!(\"{}\", value);\n```\n\n");
        }
    }

    content
}
