use std::fs;
use std::path::Path;

use golfball_icons::{DEFAULT_SIZES, Error, IconGenerator, IconGeometry, IconProfile, IconSize};
use image::{ColorType, RgbaImage};

fn generate_into(dir: &Path) -> (Vec<std::path::PathBuf>, String) {
    let mut out = Vec::new();
    let written = IconGenerator::new().generate(dir, &mut out).unwrap();
    (written, String::from_utf8(out).unwrap())
}

fn open_rgba(path: &Path) -> RgbaImage {
    let img = image::open(path).unwrap();
    assert_eq!(img.color(), ColorType::Rgba8, "{} is not RGBA", path.display());
    img.to_rgba8()
}

#[test]
fn writes_every_default_size() {
    let dir = tempfile::tempdir().unwrap();
    let (written, console) = generate_into(dir.path());

    assert_eq!(written.len(), DEFAULT_SIZES.len());
    let lines: Vec<&str> = console.lines().collect();

    for (i, edge) in DEFAULT_SIZES.into_iter().enumerate() {
        let name = format!("icon-{edge}x{edge}.png");
        assert_eq!(written[i], dir.path().join(&name));
        assert_eq!(lines[i], format!("Generated {name}"));

        let img = open_rgba(&written[i]);
        assert_eq!(img.dimensions(), (edge, edge));
        assert_eq!(img.get_pixel(edge / 2, edge / 2).0, [255, 255, 255, 255]);
        for (x, y) in [(0, 0), (edge - 1, 0), (0, edge - 1), (edge - 1, edge - 1)] {
            assert_eq!(img.get_pixel(x, y)[3], 0);
        }
    }
}

#[test]
fn smallest_default_icon() {
    let dir = tempfile::tempdir().unwrap();
    let mut generator = IconGenerator::new();
    generator.set_sizes([72]);

    let mut out = Vec::new();
    generator.generate(dir.path(), &mut out).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "Generated icon-72x72.png\n");
    let img = open_rgba(&dir.path().join("icon-72x72.png"));
    assert_eq!(img.dimensions(), (72, 72));
    assert_eq!(img.get_pixel(36, 36).0, [255, 255, 255, 255]);
}

#[test]
fn largest_icon_crosshair_core_width() {
    let geometry = IconGeometry::new(IconSize::new(512).unwrap());
    assert_eq!(geometry.line_width, 17);

    let icon = IconGenerator::new().render(512).unwrap();
    let [_, _, left, _] = geometry.crosshair_segments();
    let x = ((left.start.x + left.end.x) / 2.0) as u32;

    // Core spans y = 247.5..264.5; rows past it only show glow
    assert_eq!(icon.data.get_pixel(x, 256).0, [255, 255, 255, 255]);
    assert_eq!(icon.data.get_pixel(x, 256 + 7).0, [255, 255, 255, 255]);
    assert_ne!(icon.data.get_pixel(x, 256 + 10).0, [255, 255, 255, 255]);
}

#[test]
fn output_is_byte_identical_across_runs() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    generate_into(first.path());
    generate_into(second.path());

    for edge in DEFAULT_SIZES {
        let name = IconSize::new(edge).unwrap().file_name();
        let a = fs::read(first.path().join(&name)).unwrap();
        let b = fs::read(second.path().join(&name)).unwrap();
        assert!(a == b, "{name} differs between runs");
    }
}

#[test]
fn missing_directory_aborts_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("icons");

    let mut out = Vec::new();
    let err = IconGenerator::new().generate(&missing, &mut out).unwrap_err();

    match err {
        Error::Encode { path, .. } => assert_eq!(path, missing.join("icon-72x72.png")),
        other => panic!("expected Encode error, got {other:?}"),
    }
    assert!(out.is_empty());
    assert!(!missing.exists());
}

#[test]
fn invalid_size_is_rejected_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let mut generator = IconGenerator::new();
    generator.set_sizes([72, 1]);

    let err = generator.generate(dir.path(), &mut Vec::new()).unwrap_err();
    assert!(matches!(err, Error::InvalidSize { size: 1, min: IconSize::MIN }));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn write_icon_writes_a_single_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = IconGenerator::new().write_icon(96, dir.path()).unwrap();

    assert_eq!(path, dir.path().join("icon-96x96.png"));
    assert_eq!(open_rgba(&path).dimensions(), (96, 96));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn profile_file_drives_generation() {
    let dir = tempfile::tempdir().unwrap();
    let profile_path = dir.path().join("profile.json");
    fs::write(
        &profile_path,
        r##"{ "sizes": [128], "ball": { "color": "#FF0000" }, "pattern": null }"##,
    )
    .unwrap();

    let profile = IconProfile::load(&profile_path).unwrap();
    let written = IconGenerator::from_profile(&profile)
        .generate(dir.path(), &mut Vec::new())
        .unwrap();

    assert_eq!(written, [dir.path().join("icon-128x128.png")]);
    let img = open_rgba(&written[0]);
    assert_eq!(img.get_pixel(64, 64).0, [255, 0, 0, 255]);
}
