use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Padding;

pub struct TextArea {}

impl<'a> TextArea {
    pub fn new(title: &'a str, lines: Vec<String>) -> tui_textarea::TextArea<'a> {
        let mut textarea = tui_textarea::TextArea::new(lines);
        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .title(title)
                .padding(Padding::new(1, 1, 0, 0)),
        );
        textarea.set_cursor_line_style(Style::default());

        return textarea;
    }

    pub fn set_focused(textarea: &mut tui_textarea::TextArea<'a>, focused: bool) {
        let mut block = textarea.block().cloned().unwrap_or_default();
        let mut cursor_style = Style::default();
        if focused {
            block = block.border_style(Style::default().fg(Color::Cyan));
            cursor_style = cursor_style.add_modifier(Modifier::REVERSED);
        } else {
            block = block.border_style(Style::default());
        }

        textarea.set_block(block);
        textarea.set_cursor_style(cursor_style);
    }
}
