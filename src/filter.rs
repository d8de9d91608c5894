//! File-level chroma-key pass: decode, key, encode as PNG.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, ImageReader, RgbaImage};
use log::{debug, info};

use crate::error::Result;
use crate::key;

/// Summary of a successful [`filter`] run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterReport {
    /// Where the PNG was written.
    pub output: PathBuf,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Number of pixels that were made transparent.
    pub keyed_pixels: usize,
}

/// Key out the green pixels of `input` and write the result to `output` as PNG.
///
/// The output is PNG regardless of the extension of `output`. `input` and
/// `output` may be the same path: the source is fully decoded before the
/// destination is created. Missing parent directories of `output` are
/// created.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::Error::Io) if a file cannot be opened,
/// created or written, and [`Error::Image`](crate::Error::Image) if decoding
/// or encoding fails. A failed write may leave a partial file behind.
pub fn filter(input: &Path, output: &Path) -> Result<FilterReport> {
    let mut img = load_rgba(input)?;
    let (width, height) = img.dimensions();

    let keyed_pixels = key::apply_chroma_key(&mut img);
    debug!(
        "{}: keyed {keyed_pixels} of {} pixels",
        input.display(),
        u64::from(width) * u64::from(height)
    );

    if let Some(parent) = output.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    save_png(&img, output)?;
    info!("wrote {width}x{height} PNG to {}", output.display());

    Ok(FilterReport {
        output: output.to_path_buf(),
        width,
        height,
        keyed_pixels,
    })
}

/// Decode an image file and convert it to 8-bit RGBA.
///
/// The format is sniffed from the file content, falling back to the
/// extension. Sources without an alpha channel come out fully opaque.
///
/// # Errors
///
/// Returns an error if the file cannot be read or decoded.
pub fn load_rgba(path: &Path) -> Result<RgbaImage> {
    let reader = ImageReader::open(path)?.with_guessed_format()?;
    let format = reader.format();
    let img = reader.decode()?;
    debug!(
        "decoded {} ({format:?}, {:?}, {}x{})",
        path.display(),
        img.color(),
        img.width(),
        img.height()
    );
    Ok(img.into_rgba8())
}

/// Encode an RGBA image as PNG and write it to `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be created or the encoder fails.
pub fn save_png(img: &RgbaImage, path: &Path) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    PngEncoder::new(&mut writer).write_image(
        img.as_raw(),
        img.width(),
        img.height(),
        ExtendedColorType::Rgba8,
    )?;
    writer.flush()?;
    Ok(())
}

/// Generate a default output path from an input path.
///
/// Example: `"sprite.jpg"` becomes `"sprite.png"`. A PNG input maps to
/// itself whatever the case of its extension (`"Sprite.PNG"` stays as is),
/// so the file is keyed in place.
#[must_use]
pub fn default_output_path(input: &Path) -> PathBuf {
    match input.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("png") => input.to_path_buf(),
        _ => input.with_extension("png"),
    }
}
