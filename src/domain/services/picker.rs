#[cfg(test)]
#[path = "picker_test.rs"]
mod tests;

use ratatui::prelude::*;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Padding;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Wrap;
use tui_textarea::Input;

use crate::domain::models::JobImage;
use crate::domain::models::TextArea;

/// Terminal stand-in for a file upload box. A path is typed, or a file is
/// dropped onto the terminal which pastes its path.
pub struct ImagePicker<'a> {
    pub input: tui_textarea::TextArea<'a>,
}

impl<'a> Default for ImagePicker<'a> {
    fn default() -> ImagePicker<'a> {
        return ImagePicker::new("");
    }
}

impl<'a> ImagePicker<'a> {
    pub fn new(path: &str) -> ImagePicker<'a> {
        return ImagePicker {
            input: TextArea::new("Image path", vec![path.to_string()]),
        };
    }

    pub fn path(&self) -> String {
        return self.input.lines().join("").trim().to_string();
    }

    pub fn set_path(&mut self, path: &str) {
        let mut input = TextArea::new("Image path", vec![path.to_string()]);
        input.move_cursor(tui_textarea::CursorMove::End);
        self.input = input;
    }

    pub fn input(&mut self, input: Input) {
        self.input.input(input);
    }

    pub fn set_focused(&mut self, focused: bool) {
        TextArea::set_focused(&mut self.input, focused);
    }

    pub fn preview_lines(image: Option<&JobImage>) -> Vec<Line<'static>> {
        if let Some(image) = image {
            return vec![
                Line::from(Span::styled(
                    format!("✔ {} selected", image.file_name()),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(format!("Type: {}", image.mime_type)),
                Line::from(format!("Size: {}", image.size_display())),
                Line::from(format!("Path: {}", image.path.display())),
            ];
        }

        return vec![
            Line::from(Span::styled(
                "Type a path or drop an image onto the terminal, then press Enter.",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "A screenshot of the job posting (PNG, JPEG, GIF, WEBP, BMP).",
                Style::default().fg(Color::DarkGray),
            )),
        ];
    }

    pub fn render<B: Backend>(
        &self,
        frame: &mut Frame<B>,
        rect: Rect,
        image: Option<&JobImage>,
        focused: bool,
    ) {
        let mut border_style = Style::default();
        if focused {
            border_style = border_style.fg(Color::Cyan);
        }
        if image.is_some() {
            border_style = border_style.fg(Color::Green);
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title("1. Job posting screenshot");
        let inner = block.inner(rect);
        frame.render_widget(block, rect);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Length(3), Constraint::Min(1)])
            .split(inner);

        frame.render_widget(self.input.widget(), layout[0]);
        frame.render_widget(
            Paragraph::new(ImagePicker::preview_lines(image))
                .wrap(Wrap { trim: false })
                .block(Block::default().padding(Padding::new(1, 1, 1, 0))),
            layout[1],
        );
    }
}
