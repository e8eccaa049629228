#[cfg(test)]
#[path = "markdown_test.rs"]
mod tests;

use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;

const RULE_WIDTH: usize = 40;

#[derive(Clone, Copy, Default)]
struct InlineState {
    bold: bool,
    italic: bool,
    code: bool,
}

impl InlineState {
    fn style(&self, base: Style) -> Style {
        let mut style = base;
        if self.bold {
            style = style.add_modifier(Modifier::BOLD);
        }
        if self.italic {
            style = style.add_modifier(Modifier::ITALIC);
        }
        if self.code {
            style = style.fg(Color::Yellow);
        }

        return style;
    }
}

fn opens_at(rest: &str, marker_len: usize) -> bool {
    return rest[marker_len..]
        .chars()
        .next()
        .map(|c| return !c.is_whitespace() && c != '*')
        .unwrap_or(false);
}

fn flush(spans: &mut Vec<Span<'static>>, buffer: &mut String, style: Style) {
    if buffer.is_empty() {
        return;
    }

    spans.push(Span::styled(std::mem::take(buffer), style));
}

/// Splits a line on `**bold**`, `*italic*` and `` `code` `` markers. A
/// marker without a closing partner is kept as literal text.
fn inline_spans(text: &str, base: Style) -> Vec<Span<'static>> {
    let mut spans = vec![];
    let mut buffer = String::new();
    let mut state = InlineState::default();
    let mut rest = text;

    while let Some(ch) = rest.chars().next() {
        if ch == '`' && (state.code || rest[1..].contains('`')) {
            flush(&mut spans, &mut buffer, state.style(base));
            state.code = !state.code;
            rest = &rest[1..];
            continue;
        }

        if !state.code
            && rest.starts_with("**")
            && (state.bold || (opens_at(rest, 2) && rest[2..].contains("**")))
        {
            flush(&mut spans, &mut buffer, state.style(base));
            state.bold = !state.bold;
            rest = &rest[2..];
            continue;
        }

        if !state.code
            && ch == '*'
            && (state.italic || (opens_at(rest, 1) && rest[1..].contains('*')))
        {
            flush(&mut spans, &mut buffer, state.style(base));
            state.italic = !state.italic;
            rest = &rest[1..];
            continue;
        }

        buffer.push(ch);
        rest = &rest[ch.len_utf8()..];
    }

    flush(&mut spans, &mut buffer, state.style(base));
    return spans;
}

fn heading_level(line: &str) -> Option<(usize, &str)> {
    let level = line.chars().take_while(|c| return *c == '#').count();
    if level == 0 || level > 6 {
        return None;
    }

    let rest = &line[level..];
    if !rest.is_empty() && !rest.starts_with(' ') {
        return None;
    }

    return Some((level, rest.trim()));
}

fn heading_style(level: usize) -> Style {
    let style = Style::default().add_modifier(Modifier::BOLD);
    match level {
        1 => return style.fg(Color::Cyan).add_modifier(Modifier::UNDERLINED),
        2 => return style.fg(Color::Cyan),
        _ => return style,
    }
}

fn ordered_marker(line: &str) -> Option<(&str, &str)> {
    let digits = line.chars().take_while(|c| return c.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }

    let rest = &line[digits..];
    for sep in [". ", ") "] {
        if let Some(text) = rest.strip_prefix(sep) {
            return Some((&line[..digits], text));
        }
    }

    return None;
}

fn is_rule(line: &str) -> bool {
    let compact = line.replace(' ', "");
    if compact.len() < 3 {
        return false;
    }

    return ["-", "*", "_"]
        .iter()
        .any(|c| return compact.chars().all(|e| return e.to_string() == *c));
}

pub struct Markdown {}

impl Markdown {
    /// Renders Markdown into styled terminal lines. Covers the subset a
    /// résumé uses: headings, bullet and numbered lists, emphasis, inline
    /// and fenced code, block quotes and horizontal rules.
    pub fn to_lines(text: &str) -> Vec<Line<'static>> {
        let mut lines: Vec<Line<'static>> = vec![];
        let mut in_codeblock = false;

        for raw in text.lines() {
            let trimmed = raw.trim_start();
            let indent = " ".repeat(raw.len() - trimmed.len());

            if trimmed.starts_with("```") {
                in_codeblock = !in_codeblock;
                continue;
            }

            if in_codeblock {
                lines.push(Line::from(Span::styled(
                    format!("  {raw}"),
                    Style::default().fg(Color::Yellow),
                )));
                continue;
            }

            if trimmed.is_empty() {
                lines.push(Line::from(""));
                continue;
            }

            if let Some((level, heading)) = heading_level(trimmed) {
                lines.push(Line::from(inline_spans(heading, heading_style(level))));
                continue;
            }

            if is_rule(trimmed) {
                lines.push(Line::from(Span::styled(
                    "─".repeat(RULE_WIDTH),
                    Style::default().fg(Color::DarkGray),
                )));
                continue;
            }

            if let Some(quote) = trimmed.strip_prefix('>') {
                let mut spans = vec![Span::styled(
                    "│ ".to_string(),
                    Style::default().fg(Color::DarkGray),
                )];
                spans.extend(inline_spans(
                    quote.trim_start(),
                    Style::default().add_modifier(Modifier::ITALIC),
                ));
                lines.push(Line::from(spans));
                continue;
            }

            let bullet = ["- ", "* ", "+ "]
                .iter()
                .find_map(|marker| return trimmed.strip_prefix(marker));
            if let Some(item) = bullet {
                let mut spans = vec![Span::raw(format!("{indent}• "))];
                spans.extend(inline_spans(item, Style::default()));
                lines.push(Line::from(spans));
                continue;
            }

            if let Some((number, item)) = ordered_marker(trimmed) {
                let mut spans = vec![Span::raw(format!("{indent}{number}. "))];
                spans.extend(inline_spans(item, Style::default()));
                lines.push(Line::from(spans));
                continue;
            }

            let mut spans = vec![];
            if !indent.is_empty() {
                spans.push(Span::raw(indent));
            }
            spans.extend(inline_spans(trimmed, Style::default()));
            lines.push(Line::from(spans));
        }

        return lines;
    }

    /// Plain text of a rendered line, handy for width math and tests.
    pub fn line_text(line: &Line) -> String {
        return line
            .spans
            .iter()
            .map(|span| return span.content.to_string())
            .collect::<Vec<String>>()
            .join("");
    }
}
