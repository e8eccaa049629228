use ratatui::style::Color;
use ratatui::style::Modifier;

use super::Markdown;

fn texts(markdown: &str) -> Vec<String> {
    return Markdown::to_lines(markdown)
        .iter()
        .map(|line| return Markdown::line_text(line))
        .collect();
}

#[test]
fn it_renders_headings_as_styled_text() {
    let lines = Markdown::to_lines("# Title\n## Experience\n### Details");

    assert_eq!(lines.len(), 3);
    assert_eq!(Markdown::line_text(&lines[0]), "Title");
    assert!(lines[0].spans[0].style.add_modifier.contains(Modifier::BOLD));
    assert!(lines[0].spans[0]
        .style
        .add_modifier
        .contains(Modifier::UNDERLINED));
    assert_eq!(lines[1].spans[0].style.fg, Some(Color::Cyan));
    assert_eq!(Markdown::line_text(&lines[2]), "Details");
}

#[test]
fn it_keeps_hashtags_as_text() {
    assert_eq!(texts("#rust is fun"), vec!["#rust is fun".to_string()]);
}

#[test]
fn it_renders_lists() {
    let res = texts("- first\n* second\n  + nested\n1. one\n2) two");

    assert_eq!(
        res,
        vec![
            "• first".to_string(),
            "• second".to_string(),
            "  • nested".to_string(),
            "1. one".to_string(),
            "2. two".to_string(),
        ]
    );
}

#[test]
fn it_renders_emphasis() {
    let lines = Markdown::to_lines("Led **5 engineers** with *care* using `rust`");
    let spans = &lines[0].spans;

    assert_eq!(spans.len(), 6);
    assert_eq!(spans[0].content, "Led ");
    assert_eq!(spans[1].content, "5 engineers");
    assert!(spans[1].style.add_modifier.contains(Modifier::BOLD));
    assert_eq!(spans[3].content, "care");
    assert!(spans[3].style.add_modifier.contains(Modifier::ITALIC));
    assert_eq!(spans[5].content, "rust");
    assert_eq!(spans[5].style.fg, Some(Color::Yellow));
}

#[test]
fn it_keeps_unclosed_markers_literal() {
    assert_eq!(
        texts("5 * 3 = 15 and **open"),
        vec!["5 * 3 = 15 and **open".to_string()]
    );
}

#[test]
fn it_does_not_style_markers_inside_code() {
    let lines = Markdown::to_lines("`a*b*c`");
    assert_eq!(lines[0].spans.len(), 1);
    assert_eq!(lines[0].spans[0].content, "a*b*c");
}

#[test]
fn it_renders_code_blocks_quotes_and_rules() {
    let res = texts("```rust\nfn main() {}\n```\n> quoted\n---\n\nplain");

    assert_eq!(
        res,
        vec![
            "  fn main() {}".to_string(),
            "│ quoted".to_string(),
            "─".repeat(40),
            "".to_string(),
            "plain".to_string(),
        ]
    );
}

#[test]
fn it_handles_multibyte_text() {
    assert_eq!(
        texts("## 경력\n- **백엔드** 개발 5년"),
        vec!["경력".to_string(), "• 백엔드 개발 5년".to_string()]
    );
}
