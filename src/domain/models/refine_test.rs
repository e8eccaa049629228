use super::RefineRequest;
use super::VALIDATION_MESSAGE;
use crate::domain::models::JobImage;

fn image() -> JobImage {
    return JobImage {
        path: "posting.png".into(),
        mime_type: "image/png".to_string(),
        size: 10,
    };
}

#[test]
fn it_requires_an_image() {
    let res = RefineRequest::new(None, "My résumé");
    assert_eq!(res.unwrap_err().to_string(), VALIDATION_MESSAGE);
}

#[test]
fn it_requires_resume_text() {
    for text in ["", "   ", "\n\t\n"] {
        let res = RefineRequest::new(Some(image()), text);
        assert_eq!(res.unwrap_err().to_string(), VALIDATION_MESSAGE);
    }
}

#[test]
fn it_keeps_resume_text_verbatim() {
    let req = RefineRequest::new(Some(image()), "  Jane Doe\n").unwrap();
    assert_eq!(req.resume, "  Jane Doe\n");
    assert_eq!(req.image, image());
}
