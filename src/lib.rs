//! Make green-screen pixels transparent.
//!
//! Every pixel close to pure green (`red < 50`, `green > 200`, `blue < 50`)
//! is replaced with fully transparent white; all other pixels pass through
//! unchanged. The result is always written as PNG so the alpha channel
//! survives, even when the source format has none.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::path::Path;
//!
//! let report = chroma_key::filter(Path::new("sprite.png"), Path::new("sprite.png"))
//!     .expect("failed to key sprite");
//! println!("Saved transparent image to {}", report.output.display());
//! ```
//!
//! # In-memory use
//!
//! ```
//! use chroma_key::{apply_chroma_key, KEYED_PIXEL};
//! use image::{Rgba, RgbaImage};
//!
//! let mut img = RgbaImage::from_pixel(2, 1, Rgba([10, 10, 10, 255]));
//! img.put_pixel(0, 0, Rgba([0, 255, 0, 255]));
//! assert_eq!(apply_chroma_key(&mut img), 1);
//! assert_eq!(*img.get_pixel(0, 0), KEYED_PIXEL);
//! ```

#![deny(missing_docs)]

pub mod error;
mod filter;
pub mod key;

pub use error::{Error, Result};
pub use filter::{default_output_path, filter, load_rgba, save_png, FilterReport};
pub use key::{apply_chroma_key, is_key_color, KEYED_PIXEL};
