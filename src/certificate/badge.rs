use image::imageops::{self, FilterType};
use image::RgbaImage;
use std::path::{Path, PathBuf};

use crate::error::{AssetKind, CertificateError, Result};

/// Every flag is scaled to this width; height follows the aspect ratio.
pub const BADGE_WIDTH: u32 = 80;

pub fn badge_path(folder: &Path, country_code: &str) -> PathBuf {
    folder.join(format!("{country_code}.png"))
}

/// Loads a flag in any supported format and resizes it to `BADGE_WIDTH`.
pub fn load_badge(path: &Path) -> Result<RgbaImage> {
    let bytes = CertificateError::read_asset(AssetKind::Badge, path)?;
    let flag = image::load_from_memory(&bytes)
        .map_err(|e| CertificateError::Decode {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?
        .to_rgba8();
    Ok(resize_to_width(&flag, BADGE_WIDTH))
}

pub fn resize_to_width(img: &RgbaImage, width: u32) -> RgbaImage {
    let (w, h) = img.dimensions();
    if w == 0 || h == 0 {
        return RgbaImage::new(width, 0);
    }
    let height = ((u64::from(h) * u64::from(width)) as f64 / f64::from(w)).round().max(1.0) as u32;
    imageops::resize(img, width, height, FilterType::Lanczos3)
}

/// Alpha-over composite of `badge` onto `canvas` with its top-left at (x, y).
///
/// Only a `BADGE_WIDTH` square is drawn; taller flags are cut off at the bottom.
pub fn composite(canvas: &mut RgbaImage, badge: &RgbaImage, x: i64, y: i64) {
    let visible = imageops::crop_imm(badge, 0, 0, BADGE_WIDTH, BADGE_WIDTH).to_image();
    imageops::overlay(canvas, &visible, x, y);
}
