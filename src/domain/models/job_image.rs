#[cfg(test)]
#[path = "job_image_test.rs"]
mod tests;

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::path::PathBuf;

use anyhow::anyhow;
use anyhow::bail;
use anyhow::Result;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_derive::Deserialize;
use serde_derive::Serialize;
use tokio::fs;

/// Inline image part sent alongside the prompt.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagePayload {
    pub data: String,
    pub mime_type: String,
}

/// A job posting screenshot picked by the user. Only metadata is held, the
/// bytes are read again when the request is built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JobImage {
    pub path: PathBuf,
    pub mime_type: String,
    pub size: u64,
}

fn sniff_mime_type(header: &[u8]) -> Option<&'static str> {
    if header.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]) {
        return Some("image/png");
    }
    if header.starts_with(&[0xFF, 0xD8, 0xFF]) {
        return Some("image/jpeg");
    }
    if header.starts_with(b"GIF87a") || header.starts_with(b"GIF89a") {
        return Some("image/gif");
    }
    if header.len() >= 12 && &header[0..4] == b"RIFF" && &header[8..12] == b"WEBP" {
        return Some("image/webp");
    }
    if header.starts_with(b"BM") {
        return Some("image/bmp");
    }

    return None;
}

fn mime_type_from_extension(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_string_lossy().to_lowercase();
    let res = match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "heic" => "image/heic",
        "heif" => "image/heif",
        _ => return None,
    };

    return Some(res);
}

/// Cleans up a path that was typed or dropped onto the terminal. Drops arrive
/// as a pasted path, sometimes quoted or as a `file://` URL.
pub fn clean_dropped_path(raw: &str) -> String {
    let mut path = raw.trim();
    for quote in ['\'', '"'] {
        if path.len() >= 2 && path.starts_with(quote) && path.ends_with(quote) {
            path = &path[1..path.len() - 1];
        }
    }
    // Percent escapes only mean something inside a URL.
    if let Some(stripped) = path.strip_prefix("file://") {
        return stripped.replace("%20", " ");
    }

    return path.replace("\\ ", " ");
}

impl JobImage {
    pub fn open(path_str: &str) -> Result<JobImage> {
        let path = PathBuf::from(clean_dropped_path(path_str));
        if path.as_os_str().is_empty() {
            bail!("Enter the path to a job posting screenshot.");
        }
        if !path.is_file() {
            bail!(format!("{} is not a readable file.", path.display()));
        }

        let mut file = File::open(&path)?;
        let size = file.metadata()?.len();
        let mut header = [0u8; 12];
        let read = file.read(&mut header)?;

        let mime_type = sniff_mime_type(&header[..read])
            .or_else(|| return mime_type_from_extension(&path))
            .ok_or_else(|| {
                return anyhow!(format!(
                    "{} is not an image. Use a PNG, JPEG, GIF, WEBP or BMP screenshot.",
                    path.display()
                ));
            })?;

        return Ok(JobImage {
            path,
            mime_type: mime_type.to_string(),
            size,
        });
    }

    pub fn file_name(&self) -> String {
        return self
            .path
            .file_name()
            .map(|name| return name.to_string_lossy().to_string())
            .unwrap_or_else(|| return self.path.display().to_string());
    }

    pub fn size_display(&self) -> String {
        if self.size < 1024 {
            return format!("{} B", self.size);
        }
        if self.size < 1024 * 1024 {
            return format!("{:.1} KB", self.size as f64 / 1024.0);
        }

        return format!("{:.1} MB", self.size as f64 / (1024.0 * 1024.0));
    }

    /// Reads the file and base64 encodes it. Read failures are returned as is
    /// and never retried.
    pub async fn encode(&self) -> Result<ImagePayload> {
        let bytes = fs::read(&self.path).await?;

        return Ok(ImagePayload {
            data: STANDARD.encode(bytes),
            mime_type: self.mime_type.to_string(),
        });
    }
}
