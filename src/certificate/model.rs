use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::error::{CertificateError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub name: String,
    #[serde(default)]
    pub wallet: Option<String>,
    pub citizenship: String,
    pub language: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CertificateRequest {
    pub peacemakers: Vec<Participant>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CertificateKind {
    Peacemaking,
    Recognition,
}

impl CertificateKind {
    /// Short name used for the endpoint.
    pub fn route_name(self) -> &'static str {
        match self {
            CertificateKind::Peacemaking => "peace",
            CertificateKind::Recognition => "recognition",
        }
    }

    /// Prefix shared by template and output file names.
    pub fn template_prefix(self) -> &'static str {
        match self {
            CertificateKind::Peacemaking => "ProofOfPeacemaking",
            CertificateKind::Recognition => "ProofOfRecognition",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            CertificateKind::Peacemaking => "Proof of Peacemaking",
            CertificateKind::Recognition => "Proof of Recognition",
        }
    }

    pub fn requires_wallet(self) -> bool {
        matches!(self, CertificateKind::Peacemaking)
    }

    pub fn template_file_name(self, language: &str) -> String {
        format!("{}_{}.jpg", self.template_prefix(), language)
    }
}

/// One identifier per request, shared by every certificate in the batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TrackingId(Uuid);

impl TrackingId {
    pub fn generate() -> Self {
        TrackingId(Uuid::new_v4())
    }

    pub fn proof_url(&self, domain: &str) -> String {
        format!("https://{}/proofs-of-peacemaking/{}", domain, self)
    }
}

impl From<Uuid> for TrackingId {
    fn from(id: Uuid) -> Self {
        TrackingId(id)
    }
}

impl fmt::Display for TrackingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl CertificateRequest {
    pub fn validate(&self, kind: CertificateKind) -> Result<()> {
        if self.peacemakers.is_empty() {
            return Err(CertificateError::Invalid(
                "at least one peacemaker is required".into(),
            ));
        }

        for (i, p) in self.peacemakers.iter().enumerate() {
            if p.name.trim().is_empty() {
                return Err(CertificateError::Invalid(format!(
                    "peacemaker #{} has an empty name",
                    i + 1
                )));
            }
            check_code("citizenship", &p.name, &p.citizenship)?;
            check_code("language", &p.name, &p.language)?;

            match p.wallet.as_deref().map(str::trim) {
                None | Some("") if kind.requires_wallet() => {
                    return Err(CertificateError::Invalid(format!(
                        "{} requires a wallet for {}",
                        kind.route_name(),
                        p.name
                    )));
                }
                Some(w) if w.contains(['/', '\\']) || w == ".." => {
                    return Err(CertificateError::Invalid(format!(
                        "wallet for {} contains path separators",
                        p.name
                    )));
                }
                _ => {}
            }
        }

        Ok(())
    }
}

// Codes select asset paths, so only a conservative charset is accepted.
fn check_code(field: &str, name: &str, code: &str) -> Result<()> {
    let valid = !code.is_empty()
        && code
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(CertificateError::Invalid(format!(
            "invalid {field} code {code:?} for {name}"
        )))
    }
}

/// `{kind}_{name}_{wallet}.pdf`, or `{kind}_{name}.pdf` without a wallet.
pub fn output_file_name(kind: CertificateKind, participant: &Participant) -> String {
    let name: String = participant
        .name
        .chars()
        .map(|c| {
            if c == '/' || c == '\\' || c.is_control() {
                '_'
            } else {
                c
            }
        })
        .collect();

    match participant.wallet.as_deref().map(str::trim).filter(|w| !w.is_empty()) {
        Some(wallet) => format!("{}_{}_{}.pdf", kind.template_prefix(), name, wallet),
        None => format!("{}_{}.pdf", kind.template_prefix(), name),
    }
}
