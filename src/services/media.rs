use crate::services::error::{ServiceError, ServiceResult};
use rand::Rng;
use serde::Serialize;
use std::path::Path;

const ALLOWED_IMAGE_TYPES: &[&str] = &["image/jpeg", "image/png", "image/gif", "image/webp"];

#[derive(Debug, Serialize)]
pub struct StoredImage {
    pub url: String,
    pub path: String,
}

/// Random 40-character hex stem plus a timestamp, mirroring the upload
/// filenames the site frontend already expects.
fn generate_filename(extension: &str) -> String {
    let mut bytes = [0u8; 20];
    rand::thread_rng().fill(&mut bytes);
    format!(
        "{}_{}.{}",
        hex::encode(bytes),
        chrono::Utc::now().timestamp(),
        extension
    )
}

/// Validate and persist an uploaded image. The content type is sniffed from
/// the bytes rather than trusted from the request.
pub fn store_image(
    upload_dir: &Path,
    site_url: &str,
    data: &[u8],
    max_bytes: usize,
) -> ServiceResult<StoredImage> {
    if data.is_empty() {
        return Err(ServiceError::validation("image", "The image field is required."));
    }
    if data.len() > max_bytes {
        return Err(ServiceError::validation(
            "image",
            format!("The image may not be greater than {} bytes.", max_bytes),
        ));
    }

    let kind = infer::get(data).ok_or_else(|| {
        ServiceError::validation("image", "The image must be a jpeg, png, gif, or webp file.")
    })?;
    if !ALLOWED_IMAGE_TYPES.contains(&kind.mime_type()) {
        return Err(ServiceError::validation(
            "image",
            "The image must be a jpeg, png, gif, or webp file.",
        ));
    }

    let images_dir = upload_dir.join("images");
    std::fs::create_dir_all(&images_dir).map_err(anyhow::Error::from)?;

    let filename = generate_filename(kind.extension());
    let file_path = images_dir.join(&filename);
    std::fs::write(&file_path, data).map_err(anyhow::Error::from)?;

    let path = format!("images/{}", filename);
    let url = format!("{}/storage/{}", site_url.trim_end_matches('/'), path);

    Ok(StoredImage { url, path })
}

/// Reduce a caller-supplied path to `images/<basename>` so deletes can never
/// escape the upload directory.
pub fn normalize_image_path(path: &str) -> Option<String> {
    let basename = Path::new(path.trim()).file_name()?.to_str()?;
    if basename.is_empty() {
        return None;
    }
    Some(format!("images/{}", basename))
}

/// Delete a stored image. Returns false when no file exists at the path.
pub fn delete_image(upload_dir: &Path, path: &str) -> ServiceResult<bool> {
    let normalized = normalize_image_path(path)
        .ok_or_else(|| ServiceError::validation("path", "The path field is required."))?;

    let file_path = upload_dir.join(&normalized);
    if !file_path.exists() {
        return Ok(false);
    }

    std::fs::remove_file(&file_path).map_err(anyhow::Error::from)?;
    Ok(true)
}
