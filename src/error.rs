//! Error types for certificate generation

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CertificateError>;

/// Which kind of read-only asset a lookup was for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Template,
    Font,
    Badge,
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AssetKind::Template => "template",
            AssetKind::Font => "font",
            AssetKind::Badge => "badge",
        })
    }
}

/// Failures of the rendering pipeline and request validation
#[derive(Debug, Error)]
pub enum CertificateError {
    #[error("{kind} not found: {}", path.display())]
    AssetMissing { kind: AssetKind, path: PathBuf },

    #[error("cannot decode {}: {reason}", path.display())]
    Decode { path: PathBuf, reason: String },

    #[error("rendering failed: {0}")]
    Render(String),

    #[error("JPEG encoding failed: {0}")]
    Encode(String),

    #[error("document assembly failed: {0}")]
    Assembly(String),

    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid request: {0}")]
    Invalid(String),
}

impl CertificateError {
    pub fn is_asset_missing(&self) -> bool {
        matches!(self, CertificateError::AssetMissing { .. })
    }

    /// Reads an asset file, mapping a missing file to `AssetMissing`.
    pub(crate) fn read_asset(kind: AssetKind, path: &std::path::Path) -> Result<Vec<u8>> {
        std::fs::read(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => CertificateError::AssetMissing {
                kind,
                path: path.to_path_buf(),
            },
            _ => CertificateError::Decode {
                path: path.to_path_buf(),
                reason: e.to_string(),
            },
        })
    }
}

/// Last pipeline stage a certificate reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Init,
    TemplateLoaded,
    TextDrawn,
    BadgesDrawn,
    Assembled,
    Written,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::Init => "init",
            Stage::TemplateLoaded => "template-loaded",
            Stage::TextDrawn => "text-drawn",
            Stage::BadgesDrawn => "badges-drawn",
            Stage::Assembled => "assembled",
            Stage::Written => "written",
        })
    }
}

/// A batch aborted on one participant's certificate.
#[derive(Debug, Error)]
#[error("certificate for {participant} failed after {stage}: {source}")]
pub struct GenerationError {
    pub participant: String,
    pub stage: Stage,
    #[source]
    pub source: CertificateError,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_maps_to_asset_missing() {
        let err = CertificateError::read_asset(AssetKind::Badge, "/nonexistent/zz.png".as_ref())
            .unwrap_err();
        assert!(err.is_asset_missing());
        assert_eq!(err.to_string(), "badge not found: /nonexistent/zz.png");
    }

    #[test]
    fn generation_error_names_participant_and_stage() {
        let err = GenerationError {
            participant: "Ada".into(),
            stage: Stage::TemplateLoaded,
            source: CertificateError::Render("empty canvas".into()),
        };
        assert_eq!(
            err.to_string(),
            "certificate for Ada failed after template-loaded: rendering failed: empty canvas"
        );
    }
}
