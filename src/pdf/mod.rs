// Certificate PDF assembly
// The composited canvas goes in as one full-bleed JPEG; the identifier gets a link annotation.
mod metrics;

pub use metrics::helvetica_width;

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, RgbaImage};
use pdf_writer::types::{ActionType, AnnotationType};
use pdf_writer::{Content, Filter, Finish, Name, Pdf, Rect, Ref, Str, TextStr};
use std::path::Path;

use crate::error::{CertificateError, Result};

pub const PAGE_WIDTH_MM: f32 = 297.0;
pub const PAGE_HEIGHT_MM: f32 = 210.0;
pub const LINK_FONT_SIZE: f32 = 12.0;
const JPEG_QUALITY: u8 = 75;

pub fn mm_to_pt(mm: f32) -> f32 {
    mm * 72.0 / 25.4
}

pub fn page_size_pt() -> (f32, f32) {
    (mm_to_pt(PAGE_WIDTH_MM), mm_to_pt(PAGE_HEIGHT_MM))
}

/// Clickable area over the identifier, in PDF user space (origin bottom-left).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinkBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl LinkBox {
    fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }
}

/// Places the link over text whose top-left canvas pixel is `anchor`.
pub fn link_box(identifier: &str, anchor: (i32, i32), canvas: (u32, u32)) -> Result<LinkBox> {
    if canvas.0 == 0 || canvas.1 == 0 {
        return Err(CertificateError::Assembly("canvas has no area".into()));
    }
    let (page_w, page_h) = page_size_pt();
    let sx = page_w / canvas.0 as f32;
    let sy = page_h / canvas.1 as f32;

    let top = anchor.1 as f32 * sy;
    let height = LINK_FONT_SIZE;
    Ok(LinkBox {
        x: anchor.0 as f32 * sx,
        y: page_h - top - height,
        width: helvetica_width(identifier, LINK_FONT_SIZE),
        height,
    })
}

/// Re-encodes the canvas as baseline JPEG; the alpha channel is dropped.
pub fn encode_jpeg(canvas: &RgbaImage) -> Result<Vec<u8>> {
    let rgb = DynamicImage::ImageRgba8(canvas.clone()).to_rgb8();
    let mut buf = Vec::new();
    rgb.write_with_encoder(JpegEncoder::new_with_quality(&mut buf, JPEG_QUALITY))
        .map_err(|e| CertificateError::Encode(e.to_string()))?;
    Ok(buf)
}

pub struct PageSpec<'a> {
    pub title: &'a str,
    pub jpeg: &'a [u8],
    pub pixel_size: (u32, u32),
    pub link: LinkBox,
    pub url: &'a str,
}

/// Builds a one-page A4 landscape document from an already encoded JPEG.
pub fn assemble(input: &PageSpec<'_>) -> Result<Vec<u8>> {
    let (px_w, px_h) = input.pixel_size;
    if px_w == 0 || px_h == 0 || input.jpeg.is_empty() {
        return Err(CertificateError::Assembly("no image to place on the page".into()));
    }
    let (px_w, px_h) = (
        i32::try_from(px_w).map_err(|_| CertificateError::Assembly("image too wide".into()))?,
        i32::try_from(px_h).map_err(|_| CertificateError::Assembly("image too tall".into()))?,
    );
    let link = input.link;
    if ![link.x, link.y, link.width, link.height]
        .iter()
        .all(|v| v.is_finite())
    {
        return Err(CertificateError::Assembly("link box is not finite".into()));
    }
    if input.url.is_empty() {
        return Err(CertificateError::Assembly("link has no target".into()));
    }

    let catalog_id = Ref::new(1);
    let page_tree_id = Ref::new(2);
    let page_id = Ref::new(3);
    let image_id = Ref::new(4);
    let content_id = Ref::new(5);
    let info_id = Ref::new(6);
    let image_name = Name(b"Im1");
    let (page_w, page_h) = page_size_pt();

    let mut pdf = Pdf::new();
    pdf.catalog(catalog_id).pages(page_tree_id);
    pdf.pages(page_tree_id).kids([page_id]).count(1);
    pdf.document_info(info_id)
        .title(TextStr(input.title))
        .producer(TextStr(concat!("peacemaking ", env!("CARGO_PKG_VERSION"))));

    let mut page = pdf.page(page_id);
    page.media_box(Rect::new(0.0, 0.0, page_w, page_h));
    page.parent(page_tree_id);
    page.contents(content_id);
    page.resources().x_objects().pair(image_name, image_id);

    let mut annotations = page.annotations();
    let mut annotation = annotations.push();
    annotation.subtype(AnnotationType::Link);
    annotation.rect(link.rect());
    annotation.border(0.0, 0.0, 0.0, None);
    annotation
        .action()
        .action_type(ActionType::Uri)
        .uri(Str(input.url.as_bytes()));
    annotation.finish();
    annotations.finish();
    page.finish();

    // JPEG bytes are stored verbatim behind DCTDecode
    let mut image = pdf.image_xobject(image_id, input.jpeg);
    image.filter(Filter::DctDecode);
    image.width(px_w);
    image.height(px_h);
    image.color_space().device_rgb();
    image.bits_per_component(8);
    image.finish();

    let mut content = Content::new();
    content.save_state();
    content.transform([page_w, 0.0, 0.0, page_h, 0.0, 0.0]);
    content.x_object(image_name);
    content.restore_state();
    pdf.stream(content_id, &content.finish());

    Ok(pdf.finish())
}

/// Writes the finished document, replacing any previous file at `path`.
pub fn write_document(path: &Path, bytes: &[u8]) -> Result<()> {
    std::fs::write(path, bytes).map_err(|source| CertificateError::Write {
        path: path.to_path_buf(),
        source,
    })
}
