use axum::http::HeaderValue;
use std::path::PathBuf;

const DEFAULT_ORIGINS: &str = "https://diplomacy.network,http://localhost:3000";

#[derive(Clone)]
pub struct Config {
    pub templates_folder: PathBuf,
    pub flags_folder: PathBuf,
    pub outcomes_folder: PathBuf,
    pub font_path: PathBuf,
    pub proof_domain: String,
    pub allowed_origins: Vec<HeaderValue>,
    pub host: String,
    pub port: u16,
}

/// Filesystem locations and link settings the rendering pipeline needs.
#[derive(Debug, Clone)]
pub struct AssetPaths {
    pub templates_folder: PathBuf,
    pub flags_folder: PathBuf,
    pub font_path: PathBuf,
    pub outcomes_folder: PathBuf,
    pub proof_domain: String,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        dotenvy::dotenv().ok();

        let base_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let folder = |key: &str, default: &str| {
            base_dir.join(std::env::var(key).unwrap_or_else(|_| default.to_string()))
        };

        let templates_folder = folder("TEMPLATES_FOLDER", "templates");
        let flags_folder = folder("FLAGS_FOLDER", "flags");
        let outcomes_folder = folder("OUTCOMES_FOLDER", "outcomes");
        let font_path = folder("FONT_PATH", "fonts/Platypi-VariableFont_wght.ttf");

        let proof_domain =
            std::env::var("PROOF_DOMAIN").unwrap_or_else(|_| "diplomacy.network".to_string());

        let allowed_origins = parse_origins(
            &std::env::var("ALLOWED_ORIGINS").unwrap_or_else(|_| DEFAULT_ORIGINS.to_string()),
        )?;

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3030".to_string())
            .parse()
            .unwrap_or(3030);

        Ok(Self {
            templates_folder,
            flags_folder,
            outcomes_folder,
            font_path,
            proof_domain,
            allowed_origins,
            host,
            port,
        })
    }

    pub fn assets(&self) -> AssetPaths {
        AssetPaths {
            templates_folder: self.templates_folder.clone(),
            flags_folder: self.flags_folder.clone(),
            font_path: self.font_path.clone(),
            outcomes_folder: self.outcomes_folder.clone(),
            proof_domain: self.proof_domain.clone(),
        }
    }
}

fn parse_origins(raw: &str) -> Result<Vec<HeaderValue>, Box<dyn std::error::Error + Send + Sync>> {
    let mut origins = Vec::new();
    for origin in raw.split(',').map(str::trim).filter(|o| !o.is_empty()) {
        let value = HeaderValue::from_str(origin)
            .map_err(|_| format!("invalid origin in ALLOWED_ORIGINS: {origin:?}"))?;
        origins.push(value);
    }
    Ok(origins)
}
