//! CLI 端到端测试（不需要 CAN bridge）

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn cli() -> Command {
    let mut cmd = Command::cargo_bin("dexhand-cli").unwrap();
    // 避免读取开发机上的默认配置
    cmd.env("HOME", "/nonexistent/dexhand-cli-test")
        .env("XDG_CONFIG_HOME", "/nonexistent/dexhand-cli-test")
        .env("RUST_LOG", "off");
    cmd
}

#[test]
fn test_help_lists_subcommands() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("presets"))
        .stdout(predicate::str::contains("finger"))
        .stdout(predicate::str::contains("sensor"));
}

#[test]
fn test_presets_listed_without_bridge() {
    cli()
        .args(["--url", "http://127.0.0.1:9", "presets"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fist"))
        .stdout(predicate::str::contains("thumbs_up"));
}

#[test]
fn test_missing_url_fails() {
    cli()
        .arg("presets")
        .assert()
        .failure()
        .stderr(predicate::str::contains("can_service_url"));
}

#[test]
fn test_bad_pose_rejected() {
    cli()
        .args(["--url", "http://127.0.0.1:9", "finger", "1,2,3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("需要 6 个姿态值"));
}

#[test]
fn test_bad_hand_rejected() {
    cli()
        .args(["--url", "http://127.0.0.1:9", "--hand", "middle", "presets"])
        .assert()
        .failure();
}

#[test]
fn test_config_file_is_used() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "id = \"cfg-hand\"").unwrap();
    writeln!(file, "can_service_url = \"http://127.0.0.1:9\"").unwrap();

    cli()
        .arg("--config")
        .arg(file.path())
        .arg("sensor")
        .assert()
        .success()
        .stdout(predicate::str::contains("can0"));
}
