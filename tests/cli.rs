use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn tmp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("ecg_plot_cli_{}_{}", name, std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn ecg_plot(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ecg_plot"))
        .args(args)
        .current_dir(cwd)
        .env_remove("RUST_LOG")
        .env_remove("ECG_CSV_PATH")
        .output()
        .unwrap()
}

fn assert_fails_with(out: &Output, needle: &str) {
    assert!(!out.status.success());
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.starts_with("error: "), "stderr: {}", stderr);
    assert_eq!(stderr.lines().count(), 1, "stderr: {}", stderr);
    assert!(stderr.contains(needle), "stderr: {}", stderr);
}

#[test]
fn missing_file_exits_with_error() {
    let dir = tmp_dir("missing");
    let out = ecg_plot(&dir, &["no_such_recording.csv"]);
    assert_fails_with(&out, "no_such_recording.csv");
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn default_path_is_used_without_argument() {
    let dir = tmp_dir("default");
    let out = ecg_plot(&dir, &[]);
    assert_fails_with(&out, "could not open ecg.csv");
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn one_line_file_exits_with_error() {
    let dir = tmp_dir("oneline");
    fs::write(dir.join("ecg.csv"), "meta\n").unwrap();
    let out = ecg_plot(&dir, &["ecg.csv"]);
    assert_fails_with(&out, "found 1 line(s)");
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn malformed_row_exits_with_error() {
    let dir = tmp_dir("malformed");
    fs::write(dir.join("ecg.csv"), "meta\nheader\n0,512\n1,oops\n").unwrap();
    let out = ecg_plot(&dir, &["ecg.csv", "--svg", "ecg.svg", "--no-window"]);
    assert_fails_with(&out, "line 4, column 1");
    assert!(!dir.join("ecg.svg").exists());
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn svg_without_window_exits_cleanly() {
    let dir = tmp_dir("svg");
    fs::write(dir.join("ecg.csv"), "meta,line\ntimestamp,ecg\n0,512\n1,515\n2,509\n").unwrap();
    let out = ecg_plot(&dir, &["ecg.csv", "--svg", "ecg.svg", "--no-window"]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert!(out.stderr.is_empty());
    assert!(fs::metadata(dir.join("ecg.svg")).unwrap().len() > 0);
    fs::remove_dir_all(&dir).unwrap();
}
