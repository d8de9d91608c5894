#![cfg(feature = "cli")]

use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use chroma_key::KEYED_PIXEL;
use image::{Rgba, RgbaImage};

/// Temporary directory removed again when dropped.
struct ScratchDir(PathBuf);

impl ScratchDir {
    fn new(name: &str) -> Self {
        let dir = std::env::temp_dir().join(format!(
            "chroma-key-cli-{}-{name}",
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        Self(dir)
    }
}

impl Deref for ScratchDir {
    type Target = Path;

    fn deref(&self) -> &Path {
        &self.0
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.0);
    }
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_chroma-key"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn sprite() -> RgbaImage {
    let mut img = RgbaImage::from_pixel(3, 2, Rgba([0, 255, 0, 255]));
    img.put_pixel(1, 1, Rgba([10, 10, 10, 255]));
    img
}

#[test]
fn keys_png_in_place_and_confirms() {
    let dir = ScratchDir::new("in-place");
    let path = dir.join("character.png");
    sprite().save(&path).unwrap();

    let out = run(&[path.to_str().unwrap()]);

    assert!(out.status.success());
    assert_eq!(
        String::from_utf8_lossy(&out.stdout),
        format!("Saved transparent image to {}\n", path.display())
    );
    assert!(out.stderr.is_empty());

    let keyed = image::open(&path).unwrap().into_rgba8();
    assert_eq!(*keyed.get_pixel(0, 0), KEYED_PIXEL);
    assert_eq!(*keyed.get_pixel(1, 1), Rgba([10, 10, 10, 255]));
}

#[test]
fn quiet_suppresses_confirmation() {
    let dir = ScratchDir::new("quiet");
    let input = dir.join("in.png");
    let output = dir.join("out.png");
    sprite().save(&input).unwrap();

    let out = run(&[
        input.to_str().unwrap(),
        "-o",
        output.to_str().unwrap(),
        "-q",
    ]);

    assert!(out.status.success());
    assert!(out.stdout.is_empty());
    assert!(output.exists());
}

#[test]
fn missing_input_reports_error_and_exits_1() {
    let dir = ScratchDir::new("missing");
    let path = dir.join("nope.png");

    let out = run(&[path.to_str().unwrap()]);

    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.starts_with("Error: "), "stderr: {stderr}");
    assert!(stderr.contains("nope.png"), "stderr: {stderr}");
}

#[test]
fn garbage_input_reports_cause_and_exits_1() {
    let dir = ScratchDir::new("garbage");
    let path = dir.join("garbage.png");
    std::fs::write(&path, b"this is not an image").unwrap();

    let out = run(&[path.to_str().unwrap()]);

    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(
        stderr.starts_with("Error: image processing error"),
        "stderr: {stderr}"
    );
    assert_eq!(
        std::fs::read(&path).unwrap(),
        b"this is not an image".to_vec()
    );
}
