mod badge;
mod glyph;
mod layout;
mod model;
mod template;

pub use badge::{badge_path, composite, load_badge, BADGE_WIDTH};
pub use glyph::GlyphRenderer;
pub use layout::{plan, BADGE_MARGIN, BADGE_TOP};
pub use model::{output_file_name, CertificateKind, CertificateRequest, Participant, TrackingId};
pub use template::{load_template, template_path};

use image::RgbaImage;
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::{error, info};

use crate::config::AssetPaths;
use crate::error::{CertificateError, GenerationError, Result, Stage};
use crate::pdf;

/// Read-only resources shared by every certificate of one request.
pub struct BatchAssets<'a> {
    paths: &'a AssetPaths,
    font: Option<GlyphRenderer>,
    // keyed by template file name
    templates: HashMap<String, RgbaImage>,
    badges: HashMap<String, RgbaImage>,
}

impl<'a> BatchAssets<'a> {
    pub fn new(paths: &'a AssetPaths) -> Self {
        Self {
            paths,
            font: None,
            templates: HashMap::new(),
            badges: HashMap::new(),
        }
    }

    /// A fresh canvas cloned from the cached template.
    fn canvas(&mut self, kind: CertificateKind, language: &str) -> Result<RgbaImage> {
        let key = kind.template_file_name(language);
        if let Some(template) = self.templates.get(&key) {
            return Ok(template.clone());
        }
        let template = load_template(&template_path(&self.paths.templates_folder, kind, language))?;
        self.templates.insert(key, template.clone());
        Ok(template)
    }

    fn font(&mut self) -> Result<&GlyphRenderer> {
        if self.font.is_none() {
            self.font = Some(GlyphRenderer::load(&self.paths.font_path)?);
        }
        self.font
            .as_ref()
            .ok_or_else(|| CertificateError::Render("font not loaded".into()))
    }

    fn badge(&mut self, country_code: &str) -> Result<&RgbaImage> {
        if !self.badges.contains_key(country_code) {
            let badge = load_badge(&badge_path(&self.paths.flags_folder, country_code))?;
            self.badges.insert(country_code.to_string(), badge);
        }
        self.badges
            .get(country_code)
            .ok_or_else(|| CertificateError::Render(format!("badge {country_code} not loaded")))
    }
}

/// What a finished batch produced.
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    pub tracking_id: TrackingId,
    pub files: Vec<PathBuf>,
}

/// Renders one certificate per participant, stopping at the first failure.
///
/// Files already written for earlier participants are left in place.
pub fn generate_batch(
    paths: &AssetPaths,
    kind: CertificateKind,
    tracking_id: TrackingId,
    participants: &[Participant],
) -> std::result::Result<BatchOutcome, GenerationError> {
    info!(
        "Generating {} certificate(s) with template kind {}",
        participants.len(),
        kind.template_prefix()
    );

    let mut assets = BatchAssets::new(paths);
    let mut files = Vec::with_capacity(participants.len());

    for participant in participants {
        info!(
            "Creating certificate for {} with template language {}",
            participant.name, participant.language
        );
        let mut stage = Stage::Init;
        match render_certificate(&mut assets, kind, tracking_id, participants, participant, &mut stage) {
            Ok(path) => {
                info!("Wrote {}", path.display());
                files.push(path);
            }
            Err(source) => {
                error!(
                    "Error generating certificate for {} after {}: {}",
                    participant.name, stage, source
                );
                return Err(GenerationError {
                    participant: participant.name.clone(),
                    stage,
                    source,
                });
            }
        }
    }

    Ok(BatchOutcome { tracking_id, files })
}

fn render_certificate(
    assets: &mut BatchAssets<'_>,
    kind: CertificateKind,
    tracking_id: TrackingId,
    participants: &[Participant],
    current: &Participant,
    stage: &mut Stage,
) -> Result<PathBuf> {
    let mut canvas = assets.canvas(kind, &current.language)?;
    *stage = Stage::TemplateLoaded;

    let identifier = tracking_id.to_string();
    let layout = plan(participants, &identifier, canvas.dimensions());

    let font = assets.font()?;
    for name in &layout.names {
        font.draw(&mut canvas, &name.text, name.x, name.y)?;
    }
    font.draw(
        &mut canvas,
        &layout.identifier.text,
        layout.identifier.x,
        layout.identifier.y,
    )?;
    *stage = Stage::TextDrawn;

    for placement in &layout.badges {
        let badge = assets.badge(&placement.country_code)?;
        composite(&mut canvas, badge, placement.x.into(), placement.y.into());
    }
    *stage = Stage::BadgesDrawn;

    let jpeg = pdf::encode_jpeg(&canvas)?;
    let link = pdf::link_box(
        &identifier,
        (layout.identifier.x, layout.identifier.y),
        canvas.dimensions(),
    )?;
    let url = tracking_id.proof_url(&assets.paths.proof_domain);
    let document = pdf::assemble(&pdf::PageSpec {
        title: kind.title(),
        jpeg: &jpeg,
        pixel_size: canvas.dimensions(),
        link,
        url: &url,
    })?;
    *stage = Stage::Assembled;

    let path = assets
        .paths
        .outcomes_folder
        .join(output_file_name(kind, current));
    pdf::write_document(&path, &document)?;
    *stage = Stage::Written;

    Ok(path)
}
