//! Key out the green screen of a sprite, overwriting it in place.
//!
//! Usage:
//! ```sh
//! cargo run --example key_sprite
//! cargo run --example key_sprite -- path/to/sprite.png
//! ```

use std::env;
use std::path::PathBuf;

const SPRITE_PATH: &str = "client/public/sprites/character.png";

fn main() {
    let sprite = env::args_os()
        .nth(1)
        .map_or_else(|| PathBuf::from(SPRITE_PATH), PathBuf::from);

    match chroma_key::filter(&sprite, &sprite) {
        Ok(report) => println!("Saved transparent image to {}", report.output.display()),
        Err(e) => println!("Error: {e}"),
    }
}
