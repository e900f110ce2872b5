use image::{Rgba, RgbaImage};
use rusttype::{point, Font, Scale};
use std::path::Path;

use crate::error::{AssetKind, CertificateError, Result};

pub const TEXT_SIZE_PT: f32 = 40.0;
pub const TEXT_DPI: f32 = 72.0;
pub const TEXT_COLOR: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Parsed font plus the fixed size and color every certificate uses.
pub struct GlyphRenderer {
    font: Font<'static>,
    size_px: f32,
    color: Rgba<u8>,
}

impl GlyphRenderer {
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = CertificateError::read_asset(AssetKind::Font, path)?;
        Self::from_bytes(bytes).map_err(|e| match e {
            CertificateError::Decode { reason, .. } => CertificateError::Decode {
                path: path.to_path_buf(),
                reason,
            },
            other => other,
        })
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        let font = Font::try_from_vec(bytes).ok_or_else(|| CertificateError::Decode {
            path: "<memory>".into(),
            reason: "not a TrueType/OpenType font".into(),
        })?;
        Ok(Self {
            font,
            size_px: TEXT_SIZE_PT * TEXT_DPI / 72.0,
            color: TEXT_COLOR,
        })
    }

    /// Offset from the anchor's y to the baseline: the point size in whole pixels.
    pub fn baseline_offset(&self) -> i32 {
        self.size_px.round() as i32
    }

    // rusttype scales by ascent-descent height, not by em size.
    fn scale(&self) -> Scale {
        let v = self.font.v_metrics_unscaled();
        let units_per_em = f32::from(self.font.units_per_em().max(1));
        Scale::uniform(self.size_px * (v.ascent - v.descent) / units_per_em)
    }

    /// Draws `text` left to right with its top anchored at (x, y).
    pub fn draw(&self, canvas: &mut RgbaImage, text: &str, x: i32, y: i32) -> Result<()> {
        if canvas.width() == 0 || canvas.height() == 0 {
            return Err(CertificateError::Render("no target canvas to draw on".into()));
        }

        let baseline_y = y + self.baseline_offset();
        let (width, height) = (canvas.width() as i32, canvas.height() as i32);
        let color = self.color;

        for glyph in self
            .font
            .layout(text, self.scale(), point(x as f32, baseline_y as f32))
        {
            let Some(bb) = glyph.pixel_bounding_box() else {
                continue;
            };
            glyph.draw(|gx, gy, coverage| {
                let px = gx as i32 + bb.min.x;
                let py = gy as i32 + bb.min.y;
                if px < 0 || py < 0 || px >= width || py >= height {
                    return;
                }
                let a = coverage.clamp(0.0, 1.0) * f32::from(color.0[3]) / 255.0;
                if a <= 0.0 {
                    return;
                }
                let dst = canvas.get_pixel_mut(px as u32, py as u32);
                let inv = 1.0 - a;
                for c in 0..3 {
                    dst.0[c] = (f32::from(color.0[c]) * a + f32::from(dst.0[c]) * inv).round() as u8;
                }
                dst.0[3] = 255;
            });
        }

        Ok(())
    }
}
