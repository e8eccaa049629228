#[cfg(test)]
#[path = "prompt_test.rs"]
mod tests;

use serde_json::json;

use crate::domain::models::ImagePayload;

pub const TEMPERATURE: f64 = 0.7;
pub const RESPONSE_MIME_TYPE: &str = "application/json";

const SYSTEM_INSTRUCTION: &str = r#"
You are a top career consultant and HR specialist.
Analyze the job posting image (screenshot) and the existing résumé text the user provides, and write résumé content optimized for that specific posting.

Work through the following steps:
1. **Analyze the posting**: Accurately identify the company name, role, main responsibilities, requirements, preferred qualifications, and tech stack from the image.
2. **Match the résumé**: Find the experience and skills in the user's existing résumé that relate to the posting.
3. **Rewrite the résumé (most important)**:
    - Weave the posting's keywords in naturally.
    - Rewrite the introduction or the career summary so it is compelling for this role.
    - Cut what is irrelevant, and emphasize role-related achievements by quantifying them or making them concrete.
4. **Summarize the match**: Summarize in 3 key points why you made these changes and which parts fit the posting well.

Your output must follow the JSON format.
"#;

/// Everything the model needs for one refinement, independent of any wire
/// format.
#[derive(Clone, Debug, PartialEq)]
pub struct RefinePrompt {
    pub system_instruction: String,
    pub image: ImagePayload,
    pub user_text: String,
    pub temperature: f64,
    pub response_mime_type: String,
    pub response_schema: serde_json::Value,
}

pub struct PromptBuilder {}

impl PromptBuilder {
    pub fn system_instruction() -> String {
        return SYSTEM_INSTRUCTION.trim().to_string();
    }

    pub fn user_text(resume: &str) -> String {
        return format!("Here is my current résumé:\n\n{resume}\n\nPlease revise and polish it professionally to match the attached job posting image, so that it maximizes my chances of being hired.");
    }

    pub fn response_schema() -> serde_json::Value {
        return json!({
            "type": "OBJECT",
            "properties": {
                "refinedResume": {
                    "type": "STRING",
                    "description": "Markdown format of the refined resume content",
                },
                "keyMatchingPoints": {
                    "type": "ARRAY",
                    "items": { "type": "STRING" },
                    "description": "List of 3 key reasons why this refinement matches the job",
                },
            },
            "required": ["refinedResume", "keyMatchingPoints"],
        });
    }

    pub fn build(resume: &str, image: ImagePayload) -> RefinePrompt {
        return RefinePrompt {
            system_instruction: PromptBuilder::system_instruction(),
            image,
            user_text: PromptBuilder::user_text(resume),
            temperature: TEMPERATURE,
            response_mime_type: RESPONSE_MIME_TYPE.to_string(),
            response_schema: PromptBuilder::response_schema(),
        };
    }
}
