#[cfg(test)]
#[path = "refine_test.rs"]
mod tests;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;

use super::AnalysisResult;
use super::JobImage;

pub const VALIDATION_MESSAGE: &str =
    "Please provide both a job posting screenshot and your résumé text.";

/// Inputs for a single refinement. Construction enforces that both inputs
/// are present, so holding one means the call may be dispatched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RefineRequest {
    pub image: JobImage,
    pub resume: String,
}

impl RefineRequest {
    pub fn new(image: Option<JobImage>, resume: &str) -> Result<RefineRequest> {
        let Some(image) = image else {
            bail!(VALIDATION_MESSAGE);
        };
        if resume.trim().is_empty() {
            bail!(VALIDATION_MESSAGE);
        }

        return Ok(RefineRequest {
            image,
            resume: resume.to_string(),
        });
    }
}

#[async_trait]
pub trait Refiner {
    /// Used at startup to verify the model endpoint is reachable with the
    /// configured credentials.
    async fn health_check(&self) -> Result<()>;

    /// Sends the posting image and résumé to the model in one request and
    /// parses its structured answer. No retries.
    async fn refine(&self, image: &JobImage, resume: &str) -> Result<AnalysisResult>;
}

pub type RefinerBox = std::sync::Arc<dyn Refiner + Send + Sync>;
