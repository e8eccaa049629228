use anyhow::anyhow;
use anyhow::Result;
use once_cell::sync::OnceCell;
use tokio::sync::mpsc;

static SENDER: OnceCell<mpsc::UnboundedSender<String>> = OnceCell::new();

/// Owns the system clipboard on a background task. Some platforms drop the
/// clipboard contents when the owning handle is dropped, so a single handle
/// lives for the whole run.
pub struct ClipboardService {}

impl ClipboardService {
    pub async fn start() -> Result<()> {
        let (tx, mut rx) = mpsc::unbounded_channel::<String>();
        SENDER
            .set(tx)
            .map_err(|_| return anyhow!("Clipboard service is already running."))?;
        let mut clipboard = arboard::Clipboard::new()?;

        while let Some(text) = rx.recv().await {
            if let Err(err) = clipboard.set_text(text) {
                tracing::error!(error = ?err, "Failed to write to clipboard");
            }
        }

        return Ok(());
    }

    pub fn healthcheck() -> Result<()> {
        if SENDER.get().is_some() {
            return Ok(());
        }

        arboard::Clipboard::new()?;
        return Ok(());
    }

    pub fn set(text: String) -> Result<()> {
        if let Some(tx) = SENDER.get() {
            tx.send(text)?;
            return Ok(());
        }

        return Err(anyhow!("Clipboard is not available."));
    }
}
