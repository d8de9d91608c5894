//! The per-pixel chroma-key rule.
//!
//! A pixel is treated as key color when it sits close to pure green:
//! `red < 50 && green > 200 && blue < 50`. All three bounds are strict, so
//! `(0, 255, 0)` is keyed while `(50, 200, 0)` is not.
//!
//! Keyed pixels are replaced with [`KEYED_PIXEL`], white with zero alpha.
//! Everything else passes through untouched.

use image::{Rgba, RgbaImage};

/// Red must be strictly below this value for a pixel to be keyed.
pub const RED_CEILING: u8 = 50;

/// Green must be strictly above this value for a pixel to be keyed.
pub const GREEN_FLOOR: u8 = 200;

/// Blue must be strictly below this value for a pixel to be keyed.
pub const BLUE_CEILING: u8 = 50;

/// Replacement written over every keyed pixel.
pub const KEYED_PIXEL: Rgba<u8> = Rgba([255, 255, 255, 0]);

/// Check whether a pixel matches the green key signature.
///
/// The alpha channel is not consulted.
#[must_use]
pub fn is_key_color(pixel: &Rgba<u8>) -> bool {
    let [r, g, b, _] = pixel.0;
    r < RED_CEILING && g > GREEN_FLOOR && b < BLUE_CEILING
}

/// Replace all key-colored pixels of `image` in place.
///
/// Returns the number of pixels that were replaced. [`KEYED_PIXEL`] does not
/// match the key signature itself, so a second pass replaces nothing.
pub fn apply_chroma_key(image: &mut RgbaImage) -> usize {
    let mut keyed = 0;
    for px in image.pixels_mut() {
        if is_key_color(px) {
            *px = KEYED_PIXEL;
            keyed += 1;
        }
    }
    keyed
}
