//! Process lifecycle of the `wmcp-wait` binary.
#![cfg(unix)]

use std::{
    io::{BufRead, BufReader, Write},
    process::{Child, Command, Stdio},
    thread,
    time::{Duration, Instant},
};

const INITIALIZE: &str = r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{"protocolVersion":"2024-11-05","capabilities":{},"clientInfo":{"name":"shutdown-test","version":"0.0.0"}}}"#;
const INITIALIZED: &str = r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#;
const WAIT_CALL: &str = r#"{"jsonrpc":"2.0","id":2,"method":"tools/call","params":{"name":"wait","arguments":{"duration_seconds":100}}}"#;

fn wait_for_exit(child: &mut Child, timeout: Duration) -> Option<std::process::ExitStatus> {
    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        if let Some(status) = child.try_wait().expect("try_wait") {
            return Some(status);
        }
        thread::sleep(Duration::from_millis(50));
    }
    None
}

#[test]
fn sigterm_exits_while_stdin_stays_open() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_wmcp-wait"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("spawn server");

    let mut stdin = child.stdin.take().expect("stdin");
    let mut stdout = BufReader::new(child.stdout.take().expect("stdout"));

    writeln!(stdin, "{INITIALIZE}").expect("send initialize");
    stdin.flush().expect("flush");
    let mut response = String::new();
    stdout.read_line(&mut response).expect("initialize response");
    assert!(response.contains("\"id\":1"), "{response}");
    assert!(response.contains("wmcp-wait"), "{response}");

    writeln!(stdin, "{INITIALIZED}").expect("send initialized");
    writeln!(stdin, "{WAIT_CALL}").expect("send wait");
    stdin.flush().expect("flush");
    thread::sleep(Duration::from_millis(300));

    let killed = Command::new("kill")
        .args(["-TERM", &child.id().to_string()])
        .status()
        .expect("run kill");
    assert!(killed.success());

    let status = wait_for_exit(&mut child, Duration::from_secs(10));
    if status.is_none() {
        child.kill().ok();
    }
    // stdin stays open until the exit has been observed.
    drop(stdin);
    let status = status.expect("server did not exit after SIGTERM");
    assert_eq!(status.code(), Some(0));
}
