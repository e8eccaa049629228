use super::RefineRequest;

pub enum Action {
    CopyText(String),
    Refine(RefineRequest),
}
