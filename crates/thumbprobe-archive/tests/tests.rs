use std::fs::File;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageBuffer, ImageFormat, Luma, RgbImage, RgbaImage};
use thumbprobe_archive::{ArchiveRef, ImageInfo, InspectOptions, InspectionOutcome, Inspector};
use zip::write::SimpleFileOptions;

fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(RgbImage::new(width, height))
        .write_to(&mut buf, ImageFormat::Png)
        .expect("Failed to encode PNG");
    buf.into_inner()
}

fn encode(image: DynamicImage, format: ImageFormat) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    image.write_to(&mut buf, format).expect("Failed to encode image");
    buf.into_inner()
}

fn write_zip(dir: &Path, name: &str, entries: &[(&str, &[u8])]) -> PathBuf {
    let path = dir.join(name);
    let file = File::create(&path).expect("Failed to create zip");
    let mut writer = zip::ZipWriter::new(file);
    for (entry, content) in entries {
        writer
            .start_file(*entry, SimpleFileOptions::default())
            .expect("Failed to start entry");
        writer.write_all(content).expect("Failed to write entry");
    }
    writer.finish().expect("Failed to finish zip");
    path
}

fn temp_dir() -> tempfile::TempDir {
    tempfile::Builder::new()
        .prefix("thumbprobe-test-")
        .tempdir()
        .expect("Failed to create temp dir")
}

#[test]
fn found_rgb_png() {
    let dir = temp_dir();
    let png = png_bytes(64, 64);
    let path = write_zip(dir.path(), "a.zip", &[("thumbnail.png", &png)]);

    let outcome = Inspector::default().inspect(&ArchiveRef::new(path));

    assert_eq!(
        outcome,
        InspectionOutcome::Found {
            thumbnail: "thumbnail.png".into(),
            info: ImageInfo {
                width: 64,
                height: 64,
                format: "PNG".into(),
                color_mode: "RGB".into(),
            },
        }
    );
}

#[test]
fn no_thumbnail() {
    let dir = temp_dir();
    let path = write_zip(
        dir.path(),
        "b.zip",
        &[("model.obj", b"v 0 0 0"), ("readme.txt", b"hello")],
    );

    let outcome = Inspector::default().inspect(&ArchiveRef::new(path));
    assert_eq!(outcome, InspectionOutcome::NoThumbnail);
}

#[test]
fn missing_archive() {
    let dir = temp_dir();
    let outcome = Inspector::default().inspect(&ArchiveRef::new(dir.path().join("missing.zip")));
    assert_eq!(outcome, InspectionOutcome::ArchiveNotFound);
}

#[test]
fn directory_named_like_archive() {
    let dir = temp_dir();
    let path = dir.path().join("folder.zip");
    std::fs::create_dir(&path).unwrap();

    let outcome = Inspector::default().inspect(&ArchiveRef::new(path));
    assert_eq!(outcome, InspectionOutcome::ArchiveNotFound);
}

#[test]
fn invalid_thumbnail_bytes() {
    let dir = temp_dir();
    let path = write_zip(
        dir.path(),
        "c.zip",
        &[("thumbnail.jpg", b"\xff\xd8 truncated jpeg")],
    );

    let outcome = Inspector::default().inspect(&ArchiveRef::new(path));
    assert_eq!(
        outcome,
        InspectionOutcome::DecodeFailed {
            thumbnail: "thumbnail.jpg".into()
        }
    );
}

#[test]
fn corrupt_archive() {
    let dir = temp_dir();
    let path = dir.path().join("corrupt.zip");
    std::fs::write(&path, b"PK\x03\x04 this is not really a zip").unwrap();

    let outcome = Inspector::default().inspect(&ArchiveRef::new(path));
    assert_eq!(outcome, InspectionOutcome::ArchiveCorrupt);
}

#[test]
fn empty_file_is_corrupt() {
    let dir = temp_dir();
    let path = dir.path().join("empty.zip");
    std::fs::write(&path, b"").unwrap();

    let outcome = Inspector::default().inspect(&ArchiveRef::new(path));
    assert_eq!(outcome, InspectionOutcome::ArchiveCorrupt);
}

#[test]
fn exact_match_only() {
    let dir = temp_dir();
    let png = png_bytes(8, 8);
    let path = write_zip(
        dir.path(),
        "near.zip",
        &[
            ("Thumbnail.PNG", &png),
            ("sub/thumbnail.png", &png),
            ("thumbnail.bmp", &png),
            ("THUMBNAIL.JPG", &png),
        ],
    );

    let outcome = Inspector::default().inspect(&ArchiveRef::new(path));
    assert_eq!(outcome, InspectionOutcome::NoThumbnail);
}

#[test]
fn tie_break_prefers_jpg() {
    let dir = temp_dir();
    let png = png_bytes(8, 8);
    let path = write_zip(
        dir.path(),
        "both.zip",
        &[("thumbnail.png", &png), ("thumbnail.jpg", b"not an image")],
    );

    let outcome = Inspector::default().inspect(&ArchiveRef::new(path));
    assert_eq!(
        outcome,
        InspectionOutcome::DecodeFailed {
            thumbnail: "thumbnail.jpg".into()
        }
    );
}

#[test]
fn tie_break_png_over_jpeg() {
    let dir = temp_dir();
    let png = png_bytes(5, 6);
    let path = write_zip(
        dir.path(),
        "pair.zip",
        &[("thumbnail.jpeg", b"junk"), ("thumbnail.png", &png)],
    );

    let outcome = Inspector::default().inspect(&ArchiveRef::new(path));
    match outcome {
        InspectionOutcome::Found { thumbnail, info } => {
            assert_eq!(thumbnail, "thumbnail.png");
            assert_eq!((info.width, info.height), (5, 6));
        }
        other => panic!("Expected Found, got {other:?}"),
    }
}

#[test]
fn inspection_is_idempotent() {
    let dir = temp_dir();
    let png = png_bytes(32, 16);
    let path = write_zip(dir.path(), "same.zip", &[("thumbnail.png", &png)]);
    let archive = ArchiveRef::new(path);

    let inspector = Inspector::default();
    let first = inspector.inspect(&archive);
    let second = inspector.inspect(&archive);
    assert_eq!(first, second);
    assert!(first.is_found());
}

#[test]
fn batch_isolates_failures() {
    let dir = temp_dir();
    let png = png_bytes(4, 4);

    let mut archives = Vec::new();
    for i in 0..9 {
        let name = format!("ok-{i}.zip");
        let path = if i % 3 == 0 {
            write_zip(dir.path(), &name, &[("notes.txt", b"n")])
        } else {
            write_zip(dir.path(), &name, &[("thumbnail.png", &png)])
        };
        archives.push(ArchiveRef::new(path));
    }
    let bad = dir.path().join("bad.zip");
    std::fs::write(&bad, b"garbage").unwrap();
    archives.insert(4, ArchiveRef::new(bad));

    let inspector = Inspector::default();
    let outcomes: Vec<InspectionOutcome> = archives.iter().map(|a| inspector.inspect(a)).collect();

    assert_eq!(outcomes.len(), archives.len());
    assert_eq!(
        outcomes
            .iter()
            .filter(|o| **o == InspectionOutcome::ArchiveCorrupt)
            .count(),
        1
    );
    assert_eq!(outcomes.iter().filter(|o| o.is_found()).count(), 6);
    assert_eq!(
        outcomes
            .iter()
            .filter(|o| **o == InspectionOutcome::NoThumbnail)
            .count(),
        3
    );
}

#[test]
fn color_modes() {
    let dir = temp_dir();
    let gray16: ImageBuffer<Luma<u16>, Vec<u16>> = ImageBuffer::new(3, 3);
    let cases = [
        (
            "thumbnail.png",
            include_bytes!("fixtures/indexed.png").to_vec(),
            "P",
        ),
        (
            "thumbnail.png",
            include_bytes!("fixtures/bilevel.png").to_vec(),
            "1",
        ),
        (
            "thumbnail.png",
            encode(DynamicImage::ImageLuma16(gray16), ImageFormat::Png),
            "I;16",
        ),
        (
            "thumbnail.gif",
            encode(DynamicImage::ImageRgba8(RgbaImage::new(4, 4)), ImageFormat::Gif),
            "P",
        ),
        (
            "thumbnail.jpg",
            encode(DynamicImage::ImageRgb8(RgbImage::new(4, 4)), ImageFormat::Jpeg),
            "RGB",
        ),
    ];

    let inspector = Inspector::default();
    for (i, (entry, bytes, mode)) in cases.iter().enumerate() {
        let path = write_zip(dir.path(), &format!("mode-{i}.zip"), &[(*entry, bytes.as_slice())]);
        match inspector.inspect(&ArchiveRef::new(path)) {
            InspectionOutcome::Found { info, .. } => assert_eq!(info.color_mode, *mode, "{entry}"),
            other => panic!("Expected Found for case {i}, got {other:?}"),
        }
    }
}

#[test]
fn inflated_entry_is_read_as_prefix() {
    let dir = temp_dir();
    let zeros = vec![0u8; 16 << 20];
    let path = write_zip(dir.path(), "bomb.zip", &[("thumbnail.png", &zeros)]);

    let inspector = Inspector::new(InspectOptions::default().max_entry_bytes(1 << 20));
    assert_eq!(
        inspector.inspect(&ArchiveRef::new(path)),
        InspectionOutcome::DecodeFailed {
            thumbnail: "thumbnail.png".into()
        }
    );
}

#[test]
fn header_found_within_prefix() {
    let dir = temp_dir();
    let mut padded = png_bytes(24, 12);
    padded.resize(padded.len() + (4 << 20), 0);
    let path = write_zip(dir.path(), "padded.zip", &[("thumbnail.png", &padded)]);

    let inspector = Inspector::new(InspectOptions::default().max_entry_bytes(64 * 1024));
    match inspector.inspect(&ArchiveRef::new(path)) {
        InspectionOutcome::Found { info, .. } => {
            assert_eq!((info.width, info.height), (24, 12));
            assert_eq!(info.color_mode, "RGB");
        }
        other => panic!("Expected Found, got {other:?}"),
    }
}
