pub mod actions;
mod app_state;
pub mod clipboard;
pub mod events;
mod markdown;
mod picker;
mod prompt;
mod result_view;
mod scroll;

pub use app_state::*;
pub use markdown::*;
pub use picker::*;
pub use prompt::*;
pub use result_view::*;
pub use scroll::*;
