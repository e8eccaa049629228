#[cfg(test)]
#[path = "loading_state_test.rs"]
mod tests;

use super::AnalysisResult;

pub const GENERATION_FAILED_MESSAGE: &str =
    "Something went wrong while generating your résumé. Please try again.";

/// Which panel the UI shows. Every transition method returns whether it was
/// allowed from the current state; disallowed transitions leave it untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadingState {
    #[default]
    Idle,
    Processing,
    Success(AnalysisResult),
    Error(String),
}

impl LoadingState {
    pub fn is_processing(&self) -> bool {
        return *self == LoadingState::Processing;
    }

    pub fn can_submit(&self) -> bool {
        return matches!(self, LoadingState::Idle | LoadingState::Error(_));
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        if let LoadingState::Success(result) = self {
            return Some(result);
        }

        return None;
    }

    pub fn error_message(&self) -> Option<&str> {
        if let LoadingState::Error(message) = self {
            return Some(message);
        }

        return None;
    }

    pub fn start(&mut self) -> bool {
        if !self.can_submit() {
            return false;
        }

        *self = LoadingState::Processing;
        return true;
    }

    pub fn succeed(&mut self, result: AnalysisResult) -> bool {
        if !self.is_processing() {
            return false;
        }

        *self = LoadingState::Success(result);
        return true;
    }

    pub fn fail(&mut self) -> bool {
        if !self.is_processing() {
            return false;
        }

        *self = LoadingState::Error(GENERATION_FAILED_MESSAGE.to_string());
        return true;
    }

    pub fn reset(&mut self) -> bool {
        if !matches!(self, LoadingState::Success(_) | LoadingState::Error(_)) {
            return false;
        }

        *self = LoadingState::Idle;
        return true;
    }
}
