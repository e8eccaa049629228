#[cfg(test)]
#[path = "gemini_test.rs"]
mod tests;

use std::time::Duration;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use serde_derive::Deserialize;
use serde_derive::Serialize;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::AnalysisResult;
use crate::domain::models::JobImage;
use crate::domain::models::Refiner;
use crate::domain::services::PromptBuilder;
use crate::domain::services::RefinePrompt;

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContentPartsBlob {
    mime_type: String,
    data: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
enum ContentParts {
    Text(String),
    InlineData(ContentPartsBlob),
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct Content {
    role: String,
    parts: Vec<ContentParts>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct SystemInstruction {
    parts: Vec<ContentParts>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f64,
    response_mime_type: String,
    response_schema: serde_json::Value,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CompletionRequest {
    system_instruction: SystemInstruction,
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

impl From<RefinePrompt> for CompletionRequest {
    fn from(prompt: RefinePrompt) -> CompletionRequest {
        return CompletionRequest {
            system_instruction: SystemInstruction {
                parts: vec![ContentParts::Text(prompt.system_instruction)],
            },
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![
                    ContentParts::InlineData(ContentPartsBlob {
                        mime_type: prompt.image.mime_type,
                        data: prompt.image.data,
                    }),
                    ContentParts::Text(prompt.user_text),
                ],
            }],
            generation_config: GenerationConfig {
                temperature: prompt.temperature,
                response_mime_type: prompt.response_mime_type,
                response_schema: prompt.response_schema,
            },
        };
    }
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    fn text(&self) -> String {
        return self
            .candidates
            .first()
            .and_then(|candidate| return candidate.content.as_ref())
            .map(|content| {
                return content
                    .parts
                    .iter()
                    .map(|part| return part.text.to_string())
                    .collect::<Vec<String>>()
                    .join("");
            })
            .unwrap_or_default();
    }
}

pub struct Gemini {
    url: String,
    token: String,
    model: String,
    timeout: String,
}

impl Default for Gemini {
    fn default() -> Gemini {
        return Gemini {
            url: Config::get(ConfigKey::GeminiURL),
            token: Config::get(ConfigKey::GeminiToken),
            model: Config::get(ConfigKey::Model),
            timeout: Config::get(ConfigKey::HealthCheckTimeout),
        };
    }
}

impl Gemini {
    fn model_path(&self) -> String {
        if self.model.starts_with("models/") {
            return self.model.to_string();
        }

        return format!("models/{}", self.model);
    }
}

#[async_trait]
impl Refiner for Gemini {
    #[allow(clippy::implicit_return)]
    async fn health_check(&self) -> Result<()> {
        if self.url.is_empty() {
            bail!("Gemini URL is not defined");
        }
        if self.token.is_empty() {
            bail!("Gemini token is not defined");
        }

        let url = format!(
            "{url}/v1beta/{model}?key={key}",
            url = self.url,
            model = self.model_path(),
            key = self.token
        );

        let res = match reqwest::Client::new()
            .get(&url)
            .timeout(Duration::from_millis(self.timeout.parse::<u64>()?))
            .send()
            .await
        {
            Ok(res) => res,
            Err(err) => {
                tracing::error!(error = ?err, "Gemini is not reachable");
                bail!("Gemini is not reachable");
            }
        };

        let status = res.status().as_u16();
        if status >= 400 {
            tracing::error!(status = status, "Gemini health check failed");
            bail!(format!("Gemini health check failed with status {status}"));
        }

        return Ok(());
    }

    #[allow(clippy::implicit_return)]
    async fn refine(&self, image: &JobImage, resume: &str) -> Result<AnalysisResult> {
        if self.token.is_empty() {
            bail!("Gemini token is not defined");
        }

        let payload = image.encode().await?;
        let req = CompletionRequest::from(PromptBuilder::build(resume, payload));

        let res = reqwest::Client::new()
            .post(format!(
                "{url}/v1beta/{model}:generateContent?key={key}",
                url = self.url,
                model = self.model_path(),
                key = self.token,
            ))
            .json(&req)
            .send()
            .await?;

        if !res.status().is_success() {
            tracing::error!(
                status = res.status().as_u16(),
                "Failed to make refine request to Gemini"
            );
            bail!(format!(
                "Failed to make refine request to Gemini, {}",
                res.status().as_u16()
            ));
        }

        let text = res.json::<GenerateContentResponse>().await?.text();
        if text.trim().is_empty() {
            bail!("No response from Gemini");
        }

        let result = serde_json::from_str::<AnalysisResult>(&text)?;
        tracing::debug!(
            resume_len = result.refined_resume.len(),
            points = result.key_matching_points.len(),
            "refine response"
        );

        return Ok(result);
    }
}
