use std::process::Command;

// Runs the real binary in `--print` mode with a config file and checks the
// colored output plus the reported desired size.
#[test]
fn print_mode_uses_config_colors_and_padding() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("clarity.toml");
    std::fs::write(
        &config,
        "[colors]\ndigit = \"#FF0000\"\n[padding]\nleft = 2\nright = 3\ntop = 1\n",
    )
    .unwrap();
    let log = dir.path().join("clarity.log");

    let output = Command::new(env!("CARGO_BIN_EXE_clarity"))
        .arg("--print")
        .arg("--config")
        .arg(&config)
        .arg("--log-file")
        .arg(&log)
        .arg("Ab3!")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("38;2;255;0;0m3"), "{stdout:?}");
    assert!(stdout.contains("desired 9x2"), "{stdout:?}");
}

#[test]
fn print_mode_without_text_reports_padding_only() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("clarity.toml");
    std::fs::write(&config, "[padding]\nleft = 1\nright = 1\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_clarity"))
        .arg("--print")
        .arg("--config")
        .arg(&config)
        .arg("--log-file")
        .arg(dir.path().join("clarity.log"))
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("desired 2x0"), "{stdout:?}");
}
