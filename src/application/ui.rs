#[cfg(test)]
#[path = "ui_test.rs"]
mod tests;

use std::io;

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::DisableBracketedPaste;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableBracketedPaste;
use crossterm::event::EnableMouseCapture;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::backend::CrosstermBackend;
use ratatui::prelude::*;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Padding;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Wrap;
use ratatui::Terminal;
use tokio::sync::mpsc;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::services::events::EventsService;
use crate::domain::services::AppState;
use crate::domain::services::Focus;
use crate::domain::services::ResultView;

const FORM_HINT: &str = "Ctrl+S: analyze  Tab: switch field  Enter: load image  Ctrl+C: quit";

fn render_header<B: Backend>(frame: &mut Frame<B>, rect: Rect, app_state: &AppState) {
    let mut spans = vec![Span::styled(
        " CareerMatch AI ",
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];

    if let Some(warning) = &app_state.backend_warning {
        spans.push(Span::styled(
            format!(" {warning}"),
            Style::default().fg(Color::Red),
        ));
    } else {
        spans.push(Span::styled(
            " Tailor your résumé to a job posting",
            Style::default().fg(Color::DarkGray),
        ));
    }

    frame.render_widget(Paragraph::new(vec![Line::from(spans)]), rect);
}

fn render_footer<B: Backend>(frame: &mut Frame<B>, rect: Rect, app_state: &AppState) {
    if app_state.loading_state.is_processing() {
        app_state.loading.render(frame, rect);
        return;
    }

    let (text, color) = if let Some(notice) = &app_state.notice {
        (notice.to_string(), Color::Yellow)
    } else if let Some(message) = app_state.loading_state.error_message() {
        (
            format!("{message} Ctrl+S: retry  Ctrl+R: dismiss"),
            Color::Red,
        )
    } else if app_state.loading_state.result().is_some() {
        (
            "Up/Down: scroll  Ctrl+Y: copy  Ctrl+R: start over  Ctrl+C: quit".to_string(),
            Color::DarkGray,
        )
    } else {
        (FORM_HINT.to_string(), Color::DarkGray)
    };

    frame.render_widget(
        Paragraph::new(text)
            .style(Style::default().fg(color))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .padding(Padding::new(1, 1, 0, 0)),
            ),
        rect,
    );
}

fn render_form<B: Backend>(frame: &mut Frame<B>, rect: Rect, app_state: &AppState) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rect);

    app_state.picker.render(
        frame,
        layout[0],
        app_state.image.as_ref(),
        app_state.focus == Focus::Image,
    );
    frame.render_widget(app_state.resume.widget(), layout[1]);
}

/// Draws a full frame for the current state.
pub fn render<B: Backend>(frame: &mut Frame<B>, app_state: &mut AppState) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(frame.size());

    render_header(frame, layout[0], app_state);

    if let Some(result) = app_state.loading_state.result() {
        ResultView::render(frame, layout[1], result, &mut app_state.scroll);
    } else {
        render_form(frame, layout[1], app_state);
    }

    render_footer(frame, layout[2], app_state);
}

async fn start_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: &mut AppState<'_>,
    tx: mpsc::UnboundedSender<Action>,
    events: &mut EventsService,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app_state))?;

        let event = events.next().await?;
        if app_state.handle_event(event, &tx)? {
            break;
        }
    }

    return Ok(());
}

pub fn destruct_terminal_for_panic() {
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    );
    let _ = crossterm::execute!(io::stdout(), cursor::Show);
}

pub async fn start(
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let mut app_state = AppState::new(
        &Config::get(ConfigKey::Image),
        &Config::get(ConfigKey::Resume),
    )
    .await?;
    let mut events = EventsService::new(rx);

    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    enable_raw_mode()?;
    crossterm::execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;
    let term_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(term_backend)?;

    start_loop(&mut terminal, &mut app_state, tx, &mut events).await?;

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    return Ok(());
}
