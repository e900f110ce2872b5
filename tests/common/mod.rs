#![allow(dead_code)]

use image::{Rgb, RgbImage, Rgba, RgbaImage};
use lopdf::{Document, Object};
use peacemaking::certificate::Participant;
use peacemaking::config::{AssetPaths, Config};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const TEMPLATE_SIZE: (u32, u32) = (1200, 850);
pub const RED: [u8; 3] = [220, 20, 20];
pub const BLUE: [u8; 3] = [20, 40, 220];

/// A TrueType font from the host, if one is installed.
pub fn system_font() -> Option<PathBuf> {
    [
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
        "/System/Library/Fonts/Supplemental/Arial.ttf",
        "/Library/Fonts/Arial.ttf",
    ]
    .iter()
    .map(PathBuf::from)
    .find(|p| p.exists())
}

/// Scratch asset tree: English templates for both kinds plus `gb` and `ua` flags.
pub struct Fixture {
    pub dir: TempDir,
    pub paths: AssetPaths,
}

impl Fixture {
    pub fn new(font: Option<PathBuf>) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        let paths = AssetPaths {
            templates_folder: root.join("templates"),
            flags_folder: root.join("flags"),
            font_path: font.unwrap_or_else(|| root.join("fonts/missing.ttf")),
            outcomes_folder: root.join("outcomes"),
            proof_domain: "diplomacy.network".to_string(),
        };
        for folder in [&paths.templates_folder, &paths.flags_folder, &paths.outcomes_folder] {
            std::fs::create_dir_all(folder).unwrap();
        }

        let template = RgbImage::from_pixel(TEMPLATE_SIZE.0, TEMPLATE_SIZE.1, Rgb([250, 250, 250]));
        for prefix in ["ProofOfPeacemaking", "ProofOfRecognition"] {
            template
                .save(paths.templates_folder.join(format!("{prefix}_en.jpg")))
                .unwrap();
        }
        write_flag(&paths.flags_folder, "gb", RED);
        write_flag(&paths.flags_folder, "ua", BLUE);

        Fixture { dir, paths }
    }

    pub fn config(&self) -> Config {
        Config {
            templates_folder: self.paths.templates_folder.clone(),
            flags_folder: self.paths.flags_folder.clone(),
            outcomes_folder: self.paths.outcomes_folder.clone(),
            font_path: self.paths.font_path.clone(),
            proof_domain: self.paths.proof_domain.clone(),
            allowed_origins: vec!["https://diplomacy.network".parse().unwrap()],
            host: "127.0.0.1".to_string(),
            port: 0,
        }
    }

    pub fn outcome_files(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(&self.paths.outcomes_folder)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

fn write_flag(folder: &Path, code: &str, color: [u8; 3]) {
    RgbaImage::from_pixel(120, 60, Rgba([color[0], color[1], color[2], 255]))
        .save(folder.join(format!("{code}.png")))
        .unwrap();
}

pub fn participant(name: &str, citizenship: &str, wallet: Option<&str>) -> Participant {
    Participant {
        name: name.to_string(),
        wallet: wallet.map(str::to_string),
        citizenship: citizenship.to_string(),
        language: "en".to_string(),
    }
}

/// What a produced certificate PDF contains.
pub struct PdfSummary {
    pub pages: usize,
    pub media_box: Vec<f32>,
    pub link_uris: Vec<String>,
    pub images: Vec<Vec<u8>>,
}

pub fn inspect_pdf(path: &Path) -> PdfSummary {
    let doc = Document::load(path).unwrap();
    let pages = doc.get_pages();
    let page = doc.get_object(pages[&1]).unwrap().as_dict().unwrap();

    let media_box = page
        .get(b"MediaBox")
        .unwrap()
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_float().unwrap())
        .collect();

    let link_uris = page
        .get(b"Annots")
        .unwrap()
        .as_array()
        .unwrap()
        .iter()
        .map(|annot| {
            let action = annot.as_dict().unwrap().get(b"A").unwrap().as_dict().unwrap();
            String::from_utf8(action.get(b"URI").unwrap().as_str().unwrap().to_vec()).unwrap()
        })
        .collect();

    let images = doc
        .objects
        .values()
        .filter_map(|obj| match obj {
            Object::Stream(s)
                if s.dict.get(b"Subtype").and_then(|v| v.as_name()).ok()
                    == Some(b"Image".as_slice()) =>
            {
                Some(s.content.clone())
            }
            _ => None,
        })
        .collect();

    PdfSummary {
        pages: pages.len(),
        media_box,
        link_uris,
        images,
    }
}

pub fn close_to(actual: &[u8], expected: [u8; 3], tolerance: u8) -> bool {
    actual
        .iter()
        .zip(expected)
        .all(|(a, e)| a.abs_diff(e) <= tolerance)
}
