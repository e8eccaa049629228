#[cfg(test)]
#[path = "result_view_test.rs"]
mod tests;

use ratatui::prelude::*;
use ratatui::widgets::block::Title;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Padding;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Scrollbar;
use ratatui::widgets::ScrollbarOrientation;
use ratatui::widgets::Wrap;

use super::Markdown;
use super::Scroll;
use crate::domain::models::AnalysisResult;

/// Success panel: match points on the left, the rewritten résumé on the
/// right.
pub struct ResultView {}

impl ResultView {
    pub fn match_point_lines(points: &[String]) -> Vec<Line<'static>> {
        return points
            .iter()
            .enumerate()
            .flat_map(|(idx, point)| {
                let n = idx + 1;
                return vec![
                    Line::from(vec![
                        Span::styled(
                            format!("{n}. "),
                            Style::default()
                                .fg(Color::Yellow)
                                .add_modifier(Modifier::BOLD),
                        ),
                        Span::raw(point.to_string()),
                    ]),
                    Line::from(""),
                ];
            })
            .collect();
    }

    pub fn resume_lines(result: &AnalysisResult) -> Vec<Line<'static>> {
        return Markdown::to_lines(&result.refined_resume);
    }

    /// Rows the lines occupy once word wrapped to `width` columns. Errs on
    /// the high side so the last line is always reachable by scrolling.
    pub fn wrapped_height(lines: &[Line], width: u16) -> u16 {
        let width = usize::from(width.max(1));
        let rows = lines
            .iter()
            .map(|line| {
                let text = Markdown::line_text(line);
                let mut rows: usize = 1;
                let mut used: usize = 0;
                for (idx, word) in text.split(' ').enumerate() {
                    let mut word_width = Span::raw(word).width();
                    let separator = usize::from(idx > 0);
                    if used + separator + word_width <= width {
                        used += separator + word_width;
                        continue;
                    }

                    if used > 0 {
                        rows += 1;
                    }
                    while word_width > width {
                        rows += 1;
                        word_width -= width;
                    }
                    used = word_width;
                }

                return rows;
            })
            .sum::<usize>();

        return u16::try_from(rows).unwrap_or(u16::MAX);
    }

    pub fn render<B: Backend>(
        frame: &mut Frame<B>,
        rect: Rect,
        result: &AnalysisResult,
        scroll: &mut Scroll,
    ) {
        let layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Percentage(35), Constraint::Percentage(65)])
            .split(rect);

        frame.render_widget(
            Paragraph::new(ResultView::match_point_lines(&result.key_matching_points))
                .wrap(Wrap { trim: false })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(Style::default().fg(Color::Yellow))
                        .title("Key matching points")
                        .padding(Padding::new(1, 1, 1, 0)),
                ),
            layout[0],
        );

        // Borders plus horizontal padding.
        let resume_lines = ResultView::resume_lines(result);
        scroll.set_state(
            ResultView::wrapped_height(&resume_lines, layout[1].width.saturating_sub(4)),
            layout[1].height.saturating_sub(2),
        );

        frame.render_widget(
            Paragraph::new(resume_lines)
                .wrap(Wrap { trim: false })
                .scroll((scroll.position, 0))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(Style::default().fg(Color::Cyan))
                        .title("Tailored résumé")
                        .title(
                            Title::from(" Ctrl+R: start over  Ctrl+Y: copy ")
                                .alignment(Alignment::Right),
                        )
                        .padding(Padding::new(1, 1, 0, 0)),
                ),
            layout[1],
        );

        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            layout[1].inner(&Margin {
                vertical: 1,
                horizontal: 0,
            }),
            &mut scroll.scrollbar_state,
        );
    }
}
