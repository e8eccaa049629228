use tui_textarea::Input;

use super::AnalysisResult;

pub enum Event {
    BackendWarning(String),
    Notice(String),
    RefineFailed(),
    RefineSucceeded(AnalysisResult),
    KeyboardCharInput(Input),
    KeyboardCTRLC(),
    KeyboardCTRLR(),
    KeyboardCTRLS(),
    KeyboardCTRLY(),
    KeyboardEnter(),
    KeyboardPaste(String),
    KeyboardTab(),
    UIScrollDown(),
    UIScrollUp(),
    UIScrollPageDown(),
    UIScrollPageUp(),
    UITick(),
}
