#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fs;
use std::process::Command;

fn annogen() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_annogen"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_cli_render_from_yaml() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("plugin.yaml");
    fs::write(
        &config,
        "builder: true\nbuilder.toBuilder: true\ntoString: \"TRUE\"\n",
    )
    .unwrap();

    let output = annogen()
        .arg("render")
        .arg("--config")
        .arg(&config)
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout,
        "import lombok.Data;\n\
         import lombok.Builder;\n\
         import lombok.ToString;\n\
         @Data\n\
         @Builder(toBuilder=true)\n\
         @ToString\n"
    );
}

#[test]
fn test_cli_missing_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = annogen()
        .arg("render")
        .arg("--config")
        .arg(dir.path().join("nope.toml"))
        .output()
        .expect("run cli");
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("nope.toml"));
}

#[test]
fn test_cli_lint_fail_on_error_exit_code() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("plugin.toml");
    fs::write(&config, "toString = true\n\"toString.exclude\" = \"{a\"\n").unwrap();

    let status = annogen()
        .arg("lint")
        .arg("--config")
        .arg(&config)
        .arg("--fail-on-error")
        .status()
        .expect("run cli");
    assert!(!status.success());
}

#[test]
fn test_cli_features() {
    let output = annogen().arg("features").output().expect("run cli");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("lombok.experimental.Accessors"));
}
