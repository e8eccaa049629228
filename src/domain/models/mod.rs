mod action;
mod analysis;
mod event;
mod job_image;
mod loading;
mod loading_state;
mod refine;
mod textarea;

pub use action::*;
pub use analysis::*;
pub use event::*;
pub use job_image::*;
pub use loading::*;
pub use loading_state::*;
pub use refine::*;
pub use textarea::*;
