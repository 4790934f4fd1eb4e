use std::process::Command;

fn bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_golfball-icons"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn generates_requested_sizes() {
    let dir = tempfile::tempdir().unwrap();
    let output = bin()
        .args(["--size", "72", "--size", "96", "--out-dir"])
        .arg(dir.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "Generated icon-72x72.png\nGenerated icon-96x96.png\n"
    );
    assert!(dir.path().join("icon-72x72.png").is_file());
    assert!(dir.path().join("icon-96x96.png").is_file());
}

#[test]
fn missing_output_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = bin()
        .arg("--out-dir")
        .arg(dir.path().join("absent"))
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("icon-72x72.png"), "{stderr}");
}

#[test]
fn degenerate_size_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = bin()
        .args(["--size", "1", "--out-dir"])
        .arg(dir.path())
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("invalid icon size 1"), "{stderr}");
}

#[test]
fn print_profile_emits_defaults() {
    let output = bin().arg("--print-profile").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let profile = golfball_icons::IconProfile::from_json(&stdout).unwrap();
    assert_eq!(profile, golfball_icons::IconProfile::default());
}
