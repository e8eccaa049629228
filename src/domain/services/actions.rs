#[cfg(test)]
#[path = "actions_test.rs"]
mod tests;

use anyhow::Result;
use tokio::sync::mpsc;

use super::clipboard::ClipboardService;
use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::RefineRequest;
use crate::domain::models::RefinerBox;

pub fn help_text() -> String {
    let text = r#"
HOTKEYS:
- Tab - Switch between the image path and the résumé text.
- Enter - In the image path, load the image. In the résumé, insert a new line.
- CTRL+S - Submit the posting and résumé for analysis.
- CTRL+R - Start over from a result or an error. Your inputs are kept.
- CTRL+Y - Copy the tailored résumé to your clipboard.
- Up/Down, PageUp/PageDown - Scroll the result. In the résumé, move the cursor.
- CTRL+U/CTRL+D - Page through the result. In the résumé, undo and delete the next character.
- CTRL+C - Exit.

DRAG AND DROP:
Most terminals paste the path of a file dropped onto them. Dropping a screenshot while the image path is focused loads it straight away.
        "#;

    return text.trim().to_string();
}

async fn refine(
    refiner: RefinerBox,
    request: RefineRequest,
    tx: mpsc::UnboundedSender<Event>,
) -> Result<()> {
    tracing::debug!(
        image = %request.image.path.display(),
        mime_type = %request.image.mime_type,
        resume_len = request.resume.len(),
        "refine request"
    );

    match refiner.refine(&request.image, &request.resume).await {
        Ok(result) => {
            tx.send(Event::RefineSucceeded(result))?;
        }
        Err(err) => {
            tracing::error!(error = ?err, "Error refining résumé");
            tx.send(Event::RefineFailed())?;
        }
    }

    return Ok(());
}

async fn health_check(refiner: RefinerBox, tx: mpsc::UnboundedSender<Event>) -> Result<()> {
    if let Err(err) = refiner.health_check().await {
        tracing::warn!(error = ?err, "Gemini health check failed");
        tx.send(Event::BackendWarning(format!(
            "Gemini isn't reachable, submitting will likely fail. Error: {err}"
        )))?;
    }

    return Ok(());
}

fn copy_text(text: String, tx: &mpsc::UnboundedSender<Event>) -> Result<()> {
    let notice = match ClipboardService::set(text) {
        Ok(_) => "Copied the tailored résumé to your clipboard.".to_string(),
        Err(err) => format!("Could not copy to clipboard: {err}"),
    };
    tx.send(Event::Notice(notice))?;

    return Ok(());
}

pub struct ActionsService {}

impl ActionsService {
    pub async fn start(
        refiner: RefinerBox,
        tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        tokio::spawn(health_check(refiner.clone(), tx.clone()));

        while let Some(action) = rx.recv().await {
            match action {
                Action::CopyText(text) => {
                    copy_text(text, &tx)?;
                }
                Action::Refine(request) => {
                    tokio::spawn(refine(refiner.clone(), request, tx.clone()));
                }
            }
        }

        return Ok(());
    }
}
