use anyhow::Result;
use test_utils::analysis_fixture;

use super::AnalysisResult;

#[test]
fn it_parses_camel_case_fields() -> Result<()> {
    let res: AnalysisResult = serde_json::from_str(analysis_fixture())?;

    assert!(res.refined_resume.starts_with("# Jane Doe"));
    assert_eq!(res.key_matching_points.len(), 3);
    assert_eq!(
        res.key_matching_points[0],
        "Rust experience matches the stack"
    );

    return Ok(());
}

#[test]
fn it_rejects_missing_fields() {
    let res = serde_json::from_str::<AnalysisResult>(r##"{"refinedResume":"# Title"}"##);
    assert!(res.is_err());
}

#[test]
fn it_rejects_wrong_field_types() {
    let res = serde_json::from_str::<AnalysisResult>(
        r##"{"refinedResume":"# Title","keyMatchingPoints":"a, b, c"}"##,
    );
    assert!(res.is_err());
}

#[test]
fn it_formats_as_markdown() {
    let res = AnalysisResult {
        refined_resume: "# Title\n\nBody\n".to_string(),
        key_matching_points: vec!["a".to_string(), "b".to_string(), "c".to_string()],
    };

    insta::assert_snapshot!(res.to_markdown(), @r###"
    # Title

    Body

    ## Key matching points

    1. a
    2. b
    3. c
    "###);
}
