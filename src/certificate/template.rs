use image::{ImageFormat, RgbaImage};
use std::path::{Path, PathBuf};

use super::model::CertificateKind;
use crate::error::{AssetKind, CertificateError, Result};

pub fn template_path(folder: &Path, kind: CertificateKind, language: &str) -> PathBuf {
    folder.join(kind.template_file_name(language))
}

/// Decodes a JPEG template into an opaque RGBA canvas of the same size.
pub fn load_template(path: &Path) -> Result<RgbaImage> {
    let bytes = CertificateError::read_asset(AssetKind::Template, path)?;
    let decoded = image::load_from_memory_with_format(&bytes, ImageFormat::Jpeg).map_err(|e| {
        CertificateError::Decode {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }
    })?;
    // JPEG carries no alpha, so every pixel comes out fully opaque
    Ok(decoded.to_rgba8())
}
