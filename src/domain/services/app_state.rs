#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

use anyhow::Result;
use tokio::fs;
use tokio::sync::mpsc;
use tui_textarea::Input;
use tui_textarea::Key;

use super::ImagePicker;
use super::Scroll;
use crate::domain::models::clean_dropped_path;
use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::JobImage;
use crate::domain::models::Loading;
use crate::domain::models::LoadingState;
use crate::domain::models::RefineRequest;
use crate::domain::models::TextArea;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    Image,
    Resume,
}

pub struct AppState<'a> {
    pub backend_warning: Option<String>,
    pub focus: Focus,
    pub image: Option<JobImage>,
    pub loading: Loading,
    pub loading_state: LoadingState,
    pub notice: Option<String>,
    pub picker: ImagePicker<'a>,
    pub resume: tui_textarea::TextArea<'a>,
    pub scroll: Scroll,
}

impl<'a> AppState<'a> {
    pub async fn new(image_path: &str, resume_path: &str) -> Result<AppState<'a>> {
        let mut resume_text = "".to_string();
        if !resume_path.is_empty() {
            resume_text = fs::read_to_string(resume_path).await?;
        }

        return Ok(AppState::with_inputs(image_path, &resume_text));
    }

    pub fn with_inputs(image_path: &str, resume_text: &str) -> AppState<'a> {
        let lines = resume_text
            .lines()
            .map(|line| return line.to_string())
            .collect::<Vec<String>>();

        let mut app_state = AppState {
            backend_warning: None,
            focus: Focus::Image,
            image: None,
            loading: Loading::default(),
            loading_state: LoadingState::default(),
            notice: None,
            picker: ImagePicker::new(image_path),
            resume: TextArea::new("2. Current résumé", lines),
            scroll: Scroll::default(),
        };

        if !image_path.is_empty() {
            app_state.select_image();
        }
        app_state.set_focus(app_state.focus);

        return app_state;
    }

    pub fn resume_text(&self) -> String {
        return self.resume.lines().join("\n");
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        self.picker.set_focused(focus == Focus::Image);
        TextArea::set_focused(&mut self.resume, focus == Focus::Resume);
    }

    /// Loads the image named in the picker. A rejected file leaves the
    /// previous selection in place.
    pub fn select_image(&mut self) {
        match JobImage::open(&self.picker.path()) {
            Ok(image) => {
                tracing::debug!(path = %image.path.display(), mime_type = %image.mime_type, "image selected");
                self.image = Some(image);
                self.notice = None;
                self.set_focus(Focus::Resume);
            }
            Err(err) => {
                self.notice = Some(err.to_string());
            }
        }
    }

    /// Dispatches a refinement when both inputs are present. Returns whether
    /// a request was sent.
    pub fn submit(&mut self, tx: &mpsc::UnboundedSender<Action>) -> Result<bool> {
        if !self.loading_state.can_submit() {
            return Ok(false);
        }

        let request = match RefineRequest::new(self.image.clone(), &self.resume_text()) {
            Ok(request) => request,
            Err(err) => {
                self.notice = Some(err.to_string());
                return Ok(false);
            }
        };

        self.loading_state.start();
        self.notice = None;
        tx.send(Action::Refine(request))?;

        return Ok(true);
    }

    /// Leaves a result or an error. Inputs are kept so they can be edited
    /// and resubmitted.
    pub fn reset(&mut self) -> bool {
        if !self.loading_state.reset() {
            return false;
        }

        self.notice = None;
        self.scroll.top();
        return true;
    }

    fn editable(&self) -> bool {
        return self.loading_state.result().is_none();
    }

    fn input(&mut self, input: Input) {
        if !self.editable() {
            return;
        }

        match self.focus {
            Focus::Image => self.picker.input(input),
            Focus::Resume => {
                self.resume.input(input);
            }
        }
    }

    fn paste(&mut self, text: &str) {
        if !self.editable() {
            return;
        }

        match self.focus {
            Focus::Image => {
                self.picker.set_path(&clean_dropped_path(text));
                self.select_image();
            }
            Focus::Resume => {
                self.resume.insert_str(text);
            }
        }
    }

    fn scroll_or_input(&mut self, scroll: fn(&mut Scroll), key: Key) {
        if self.loading_state.result().is_some() {
            scroll(&mut self.scroll);
            return;
        }

        self.input(Input {
            key,
            ctrl: false,
            alt: false,
        });
    }

    /// Applies one event. Returns true when the app should quit.
    pub fn handle_event(
        &mut self,
        event: Event,
        tx: &mpsc::UnboundedSender<Action>,
    ) -> Result<bool> {
        match event {
            Event::KeyboardCTRLC() => {
                return Ok(true);
            }
            Event::BackendWarning(text) => {
                self.backend_warning = Some(text);
            }
            Event::Notice(text) => {
                self.notice = Some(text);
            }
            Event::RefineSucceeded(result) => {
                if self.loading_state.succeed(result) {
                    self.notice = None;
                    self.scroll.top();
                }
            }
            Event::RefineFailed() => {
                if self.loading_state.fail() {
                    self.notice = None;
                }
            }
            Event::KeyboardCTRLS() => {
                self.submit(tx)?;
            }
            Event::KeyboardCTRLR() => {
                self.reset();
            }
            Event::KeyboardCTRLY() => {
                if let Some(result) = self.loading_state.result() {
                    tx.send(Action::CopyText(result.refined_resume.to_string()))?;
                }
            }
            Event::KeyboardTab() => {
                if self.editable() {
                    match self.focus {
                        Focus::Image => self.set_focus(Focus::Resume),
                        Focus::Resume => self.set_focus(Focus::Image),
                    }
                }
            }
            Event::KeyboardEnter() => {
                if !self.editable() {
                    return Ok(false);
                }
                match self.focus {
                    Focus::Image => self.select_image(),
                    Focus::Resume => self.resume.insert_newline(),
                }
            }
            Event::KeyboardPaste(text) => {
                self.paste(&text);
            }
            Event::KeyboardCharInput(input) => {
                // CTRL+U and CTRL+D page through a result. In the editors they
                // keep their text editing meaning.
                match input {
                    Input {
                        key: Key::Char('u'),
                        ctrl: true,
                        ..
                    } if !self.editable() => self.scroll.up_page(),
                    Input {
                        key: Key::Char('d'),
                        ctrl: true,
                        ..
                    } if !self.editable() => self.scroll.down_page(),
                    input => self.input(input),
                }
            }
            Event::UIScrollUp() => {
                self.scroll_or_input(Scroll::up, Key::Up);
            }
            Event::UIScrollDown() => {
                self.scroll_or_input(Scroll::down, Key::Down);
            }
            Event::UIScrollPageUp() => {
                self.scroll_or_input(Scroll::up_page, Key::PageUp);
            }
            Event::UIScrollPageDown() => {
                self.scroll_or_input(Scroll::down_page, Key::PageDown);
            }
            Event::UITick() => {
                if self.loading_state.is_processing() {
                    self.loading.tick();
                }
            }
        }

        return Ok(false);
    }
}
