pub mod gemini;

use std::sync::Arc;

use anyhow::Result;

use crate::domain::models::RefinerBox;

pub struct RefinerManager {}

impl RefinerManager {
    pub fn get() -> Result<RefinerBox> {
        return Ok(Arc::<gemini::Gemini>::default());
    }
}
