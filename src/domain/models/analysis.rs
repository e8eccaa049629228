#[cfg(test)]
#[path = "analysis_test.rs"]
mod tests;

use serde_derive::Deserialize;
use serde_derive::Serialize;

/// Structured answer returned by the model. Both fields are required, a
/// response missing either one fails to parse.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub refined_resume: String,
    pub key_matching_points: Vec<String>,
}

impl AnalysisResult {
    pub fn to_markdown(&self) -> String {
        let points = self
            .key_matching_points
            .iter()
            .enumerate()
            .map(|(idx, point)| {
                let n = idx + 1;
                return format!("{n}. {point}");
            })
            .collect::<Vec<String>>()
            .join("\n");

        return format!(
            "{}\n\n## Key matching points\n\n{points}\n",
            self.refined_resume.trim_end()
        );
    }
}
