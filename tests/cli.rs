use std::io::Write;
use std::process::{Command, Stdio};

fn run_with_stdin(args: &[&str], input: &str) -> std::process::Output {
    run_with_stdin_bytes(args, input.as_bytes())
}

fn run_with_stdin_bytes(args: &[&str], input: &[u8]) -> std::process::Output {
    let bin = env!("CARGO_BIN_EXE_lantern-translate");
    let mut child = Command::new(bin)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    {
        let stdin = child.stdin.as_mut().unwrap();
        stdin.write_all(input).unwrap();
    }

    child.wait_with_output().unwrap()
}

#[test]
fn translates_each_argument_on_its_own_line() {
    let bin = env!("CARGO_BIN_EXE_lantern-translate");
    let out = Command::new(bin)
        .arg("Found an invalid max index: 9")
        .arg("dimension 0 does not have size 5")
        .arg("nothing to see")
        .output()
        .unwrap();
    assert!(out.status.success());

    let stdout = String::from_utf8(out.stdout).unwrap();
    let expected = "Found an invalid max index: 10\n\
                    dimension 1 does not have size 5\n\
                    nothing to see\n";
    assert_eq!(stdout, expected);
}

#[test]
fn stdin_message_may_span_lines() {
    let input = "Error in torch_cat:\n\
                 Dimension out of range (expected to be in range of [-10, 9], but got 9)\n\
                 Exception raised from maybe_wrap_dim\n";
    let out = run_with_stdin(&[], input);
    assert!(out.status.success());

    let stdout = String::from_utf8(out.stdout).unwrap();
    let expected = "Error in torch_cat:\n\
                    Dimension out of range (expected to be in range of [-10, 10], but got 10)\n\
                    Exception raised from maybe_wrap_dim\n";
    assert_eq!(stdout, expected);
}

#[test]
fn negative_index_is_kept_from_stdin() {
    let input = "Dimension out of range (expected to be in range of [-3, 2], but got -4)";
    let out = run_with_stdin(&[], input);
    assert!(out.status.success());

    let stdout = String::from_utf8(out.stdout).unwrap();
    assert_eq!(
        stdout,
        "Dimension out of range (expected to be in range of [-3, 3], but got -4)"
    );
}

#[test]
fn unreadable_stdin_exits_with_1() {
    let out = run_with_stdin_bytes(&[], b"Found an invalid max index: 9 \xff\n");
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.starts_with("error: failed to read stdin"));
}

#[test]
fn rule_flag_restricts_translation() {
    let bin = env!("CARGO_BIN_EXE_lantern-translate");
    let msg = "dimension 2 does not have size 2\nFound an invalid max index: 2";

    let out = Command::new(bin)
        .args(["--rule", "max-index", msg])
        .output()
        .unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert_eq!(
        stdout,
        "dimension 2 does not have size 2\nFound an invalid max index: 3\n"
    );

    let out = Command::new(bin)
        .args(["--rule", "dim-size", msg])
        .output()
        .unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert_eq!(
        stdout,
        "dimension 3 does not have size 2\nFound an invalid max index: 2\n"
    );
}

#[test]
fn unknown_rule_is_a_usage_error() {
    let bin = env!("CARGO_BIN_EXE_lantern-translate");
    let out = Command::new(bin)
        .args(["--rule", "everything", "x"])
        .output()
        .unwrap();
    assert!(!out.status.success());
    assert_eq!(out.status.code(), Some(2));
}
