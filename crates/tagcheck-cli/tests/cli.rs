use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use std::time::{SystemTime, UNIX_EPOCH};

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let mut path = env::temp_dir();
    let now = SystemTime::now().duration_since(UNIX_EPOCH).expect("time");
    let file_name = format!(
        "tagcheck_cli_{}_{}_{}.tsx",
        name,
        now.as_secs(),
        now.subsec_nanos()
    );
    path.push(file_name);
    fs::write(&path, contents).expect("write temp file");
    path
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tagcheck"))
        .args(args)
        .output()
        .expect("run")
}

#[test]
fn check_well_formed_prints_nothing() {
    let input = temp_file("ok", "<div>\n  <span>hi</span>\n  <img src=\"a.png\">\n</div>\n");
    let output = run(&["check", input.to_str().expect("path")]);
    fs::remove_file(&input).ok();

    assert!(output.status.success());
    assert!(output.stdout.is_empty(), "expected no diagnostics");
}

#[test]
fn check_reports_diagnostics_in_order_and_exits_zero() {
    let input = temp_file("bad", "<a><b>\n</a>\n</p>\n");
    let output = run(&["check", input.to_str().expect("path")]);
    fs::remove_file(&input).ok();

    assert!(output.status.success(), "diagnostics don't change exit code");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Error: Mismatched tag. Opened <b> at line 1, closed </a> at line 2",
            "Error: Unexpected closing tag </p> at line 3",
            "Error: Unclosed tag <a> opened at line 1",
        ]
    );
}

#[test]
fn check_missing_file_fails() {
    let missing = env::temp_dir().join("tagcheck_cli_missing_input.tsx");
    let output = run(&["check", missing.to_str().expect("path")]);

    assert!(!output.status.success(), "expected error exit code");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error reading"), "stderr was: {stderr}");
    assert!(output.stdout.is_empty());
}

#[test]
fn tokens_lists_scanned_tags() {
    let input = temp_file("tokens", "<ul>\n  <li>x<br></li>\n  <Item />\n</ul>");
    let output = run(&["tokens", input.to_str().expect("path")]);
    fs::remove_file(&input).ok();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "1:1 <ul>",
            "2:3 <li>",
            "2:8 <br> (void)",
            "2:12 </li>",
            "3:3 <Item/>",
            "4:1 </ul>",
        ]
    );
}

#[test]
fn verbose_logs_to_stderr_only() {
    let input = temp_file("verbose", "<div>");
    let output = run(&["--verbose", "check", input.to_str().expect("path")]);
    fs::remove_file(&input).ok();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim_end(), "Error: Unclosed tag <div> opened at line 1");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("diagnostics"), "stderr was: {stderr}");
}
