use std::io::Write;
use std::process::{Command, Output, Stdio};

fn bigmath(args: &[&str], input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_bigmath"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(input.as_bytes()).unwrap();
    child.wait_with_output().unwrap()
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).to_string()
}

#[test]
fn evaluates_lines_from_stdin() {
    let out = bigmath(&["--prec", "24"], "sqrt 2\natan 1\nsqrt 4\nacos 1\n");
    assert!(out.status.success());
    assert_eq!(
        stdout(&out),
        "1.41421356237309504880169\n0.785398163397448309615661\n2\n0\n"
    );
}

#[test]
fn expr_flag_evaluates_and_exits() {
    let out = bigmath(&["--prec", "15", "-e", "asin 1/2", "-e", "sqrt 16"], "");
    assert!(out.status.success());
    assert_eq!(stdout(&out), "0.523598775598299\n4\n");
}

#[test]
fn errors_do_not_end_the_session() {
    let out = bigmath(&[], "sqrt -4\nacos 3\nsqrt 9\n");
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.contains("error: square root of negative number\n"));
    assert!(text.contains("error: acos argument out of domain"));
    assert!(text.ends_with("3\n"));
}

#[test]
fn panic_flag_exits_nonzero() {
    let out = bigmath(&[], ")debug panic 1\nsqrt -4\nsqrt 9\n");
    assert!(!out.status.success());
    assert!(!stdout(&out).contains("3\n"));
}

#[test]
fn obase_applies_to_integers_only() {
    let out = bigmath(&["--obase", "16", "--prec", "5"], "sqrt 65536\nsqrt 2\n");
    assert!(out.status.success());
    assert_eq!(stdout(&out), "100\n1.4142\n");
}

#[test]
fn config_file_is_loaded() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bigmath.json");
    std::fs::write(&path, r#"{"float_prec": 8, "debug": {"loop": true}}"#).unwrap();
    let out = bigmath(&["--config", path.to_str().unwrap()], "sqrt 2\n");
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.contains("sqrt: "));
    assert!(text.ends_with("1.4142136\n"));
}

#[test]
fn bad_precision_flag_fails() {
    let out = bigmath(&["--prec", "0"], "");
    assert!(!out.status.success());
}

#[test]
fn last_digit_rounded_from_full_precision() {
    let out = bigmath(&["--prec", "24"], "asin 1/2\nsqrt 1e600\n");
    assert!(out.status.success());
    assert_eq!(stdout(&out), "0.523598775598298873077107\n1e+300\n");
}
