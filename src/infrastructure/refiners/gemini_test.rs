use anyhow::Result;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use mockito::Matcher;
use serde_json::json;
use test_utils::analysis_fixture;
use test_utils::png_fixture;
use test_utils::write_fixture_file;

use super::Candidate;
use super::CandidateContent;
use super::CompletionRequest;
use super::GenerateContentResponse;
use super::Gemini;
use super::ResponsePart;
use crate::domain::models::ImagePayload;
use crate::domain::models::JobImage;
use crate::domain::models::Refiner;
use crate::domain::services::PromptBuilder;

const REFINE_PATH: &str = "/v1beta/models/gemini-test:generateContent?key=abc";

impl Gemini {
    fn with_url(url: String) -> Gemini {
        return Gemini {
            url,
            token: "abc".to_string(),
            model: "gemini-test".to_string(),
            timeout: "200".to_string(),
        };
    }
}

fn response_body(parts: Vec<&str>) -> Result<String> {
    let res = GenerateContentResponse {
        candidates: vec![Candidate {
            content: Some(CandidateContent {
                parts: parts
                    .into_iter()
                    .map(|text| {
                        return ResponsePart {
                            text: text.to_string(),
                        };
                    })
                    .collect(),
            }),
        }],
    };

    return Ok(serde_json::to_string(&res)?);
}

fn posting(name: &str) -> Result<JobImage> {
    let path = write_fixture_file(name, &png_fixture());
    return JobImage::open(path.to_str().unwrap());
}

#[tokio::test]
async fn it_successfully_health_checks() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/v1beta/models/gemini-test?key=abc")
        .with_status(200)
        .create();

    let backend = Gemini::with_url(server.url());
    let res = backend.health_check().await;

    assert!(res.is_ok());
    mock.assert();
}

#[tokio::test]
async fn it_successfully_health_checks_with_official_api() {
    let token = match std::env::var("CAREERMATCH_GEMINI_TOKEN") {
        Ok(token) => token,
        Err(_) => {
            println!("There is no token in environment defined, skipping test");
            return;
        }
    };
    let backend = Gemini {
        url: "https://generativelanguage.googleapis.com".to_string(),
        token,
        model: "gemini-2.5-flash".to_string(),
        timeout: "2000".to_string(),
    };

    let res = backend.health_check().await;
    assert!(res.is_ok());
}

#[tokio::test]
async fn it_fails_health_checks() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/v1beta/models/gemini-test?key=abc")
        .with_status(500)
        .create();

    let backend = Gemini::with_url(server.url());
    let res = backend.health_check().await;

    assert!(res.is_err());
    mock.assert();
}

#[tokio::test]
async fn it_fails_health_checks_without_a_token() {
    let mut backend = Gemini::with_url("http://localhost:1".to_string());
    backend.token = "".to_string();

    let res = backend.health_check().await;
    assert_eq!(res.unwrap_err().to_string(), "Gemini token is not defined");
}

#[test]
fn it_keeps_qualified_model_names() {
    let mut backend = Gemini::with_url("".to_string());
    assert_eq!(backend.model_path(), "models/gemini-test");

    backend.model = "models/gemini-pro".to_string();
    assert_eq!(backend.model_path(), "models/gemini-pro");
}

#[test]
fn it_serializes_the_wire_request() -> Result<()> {
    let prompt = PromptBuilder::build(
        "Jane Doe",
        ImagePayload {
            data: "YWJj".to_string(),
            mime_type: "image/png".to_string(),
        },
    );
    let req = serde_json::to_value(CompletionRequest::from(prompt))?;

    assert_eq!(
        req["systemInstruction"]["parts"][0]["text"],
        json!(PromptBuilder::system_instruction())
    );
    assert_eq!(req["contents"][0]["role"], "user");
    assert_eq!(
        req["contents"][0]["parts"][0],
        json!({ "inlineData": { "mimeType": "image/png", "data": "YWJj" } })
    );
    assert_eq!(
        req["contents"][0]["parts"][1]["text"],
        json!(PromptBuilder::user_text("Jane Doe"))
    );
    assert_eq!(req["generationConfig"]["temperature"], json!(0.7));
    assert_eq!(
        req["generationConfig"]["responseMimeType"],
        "application/json"
    );
    assert_eq!(
        req["generationConfig"]["responseSchema"],
        PromptBuilder::response_schema()
    );

    return Ok(());
}

#[tokio::test]
async fn it_refines_resumes() -> Result<()> {
    let image = posting("gemini-refine.png")?;
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", REFINE_PATH)
        .match_body(Matcher::PartialJson(json!({
            "contents": [{
                "role": "user",
                "parts": [
                    { "inlineData": { "mimeType": "image/png", "data": STANDARD.encode(png_fixture()) } },
                    { "text": PromptBuilder::user_text("Jane Doe") },
                ],
            }],
            "generationConfig": {
                "temperature": 0.7,
                "responseMimeType": "application/json",
            },
        })))
        .with_status(200)
        .with_body(response_body(vec![analysis_fixture()])?)
        .create();

    let backend = Gemini::with_url(server.url());
    let res = backend.refine(&image, "Jane Doe").await?;
    mock.assert();

    assert!(res.refined_resume.starts_with("# Jane Doe"));
    assert_eq!(
        res.key_matching_points,
        vec![
            "Rust experience matches the stack".to_string(),
            "Payments background fits the domain".to_string(),
            "Kubernetes migration shows ownership".to_string(),
        ]
    );

    return Ok(());
}

#[tokio::test]
async fn it_joins_split_response_parts() -> Result<()> {
    let image = posting("gemini-split.png")?;
    let (first, second) = analysis_fixture().split_at(20);
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", REFINE_PATH)
        .with_status(200)
        .with_body(response_body(vec![first, second])?)
        .create();

    let backend = Gemini::with_url(server.url());
    let res = backend.refine(&image, "Jane Doe").await?;
    mock.assert();

    assert_eq!(res.key_matching_points.len(), 3);

    return Ok(());
}

#[tokio::test]
async fn it_fails_on_malformed_json() -> Result<()> {
    let image = posting("gemini-malformed.png")?;
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", REFINE_PATH)
        .with_status(200)
        .with_body(response_body(vec!["{\"refinedResume\": \"# Title\""])?)
        .create();

    let backend = Gemini::with_url(server.url());
    let res = backend.refine(&image, "Jane Doe").await;
    mock.assert();

    assert!(res.is_err());

    return Ok(());
}

#[tokio::test]
async fn it_fails_on_schema_mismatch() -> Result<()> {
    let image = posting("gemini-mismatch.png")?;
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", REFINE_PATH)
        .with_status(200)
        .with_body(response_body(vec!["{\"resume\": \"# Title\", \"points\": []}"])?)
        .create();

    let backend = Gemini::with_url(server.url());
    let res = backend.refine(&image, "Jane Doe").await;
    mock.assert();

    assert!(res.is_err());

    return Ok(());
}

#[tokio::test]
async fn it_fails_on_empty_responses() -> Result<()> {
    let image = posting("gemini-empty.png")?;
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", REFINE_PATH)
        .with_status(200)
        .with_body("{\"candidates\": []}")
        .create();

    let backend = Gemini::with_url(server.url());
    let res = backend.refine(&image, "Jane Doe").await;
    mock.assert();

    assert_eq!(res.unwrap_err().to_string(), "No response from Gemini");

    return Ok(());
}

#[tokio::test]
async fn it_fails_on_empty_bodies() -> Result<()> {
    let image = posting("gemini-empty-body.png")?;
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", REFINE_PATH)
        .with_status(200)
        .with_body("")
        .create();

    let backend = Gemini::with_url(server.url());
    let res = backend.refine(&image, "Jane Doe").await;
    mock.assert();

    assert!(res.is_err());

    return Ok(());
}

#[tokio::test]
async fn it_fails_on_error_statuses() -> Result<()> {
    let image = posting("gemini-status.png")?;
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", REFINE_PATH)
        .with_status(429)
        .with_body(response_body(vec![analysis_fixture()])?)
        .create();

    let backend = Gemini::with_url(server.url());
    let res = backend.refine(&image, "Jane Doe").await;
    mock.assert();

    assert_eq!(
        res.unwrap_err().to_string(),
        "Failed to make refine request to Gemini, 429"
    );

    return Ok(());
}

#[tokio::test]
async fn it_does_not_call_without_a_token() -> Result<()> {
    let image = posting("gemini-no-token.png")?;
    let mut server = mockito::Server::new();
    let mock = server.mock("POST", REFINE_PATH).expect(0).create();

    let mut backend = Gemini::with_url(server.url());
    backend.token = "".to_string();
    let res = backend.refine(&image, "Jane Doe").await;
    mock.assert();

    assert!(res.is_err());

    return Ok(());
}
