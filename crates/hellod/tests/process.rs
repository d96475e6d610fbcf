//! Process-level tests for the hellod binary
//!
//! The startup notice and the exit code are part of the process contract,
//! so these drive the compiled binary rather than the library.

use std::io::{BufRead, BufReader, Read};
use std::net::TcpListener;
use std::process::{Command, Stdio};
use std::time::Duration;

fn hellod(port: u16) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_hellod"));
    cmd.env("PORT", port.to_string())
        .env("HOST", "127.0.0.1")
        .env("WORKERS", "1");
    cmd
}

/// Pick a free loopback port by binding and immediately releasing it
fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}

#[test]
fn startup_line_is_printed_exactly_once() {
    let port = free_port();
    let mut child = hellod(port)
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();

    let mut stdout = BufReader::new(child.stdout.take().unwrap());
    let mut first = String::new();
    stdout.read_line(&mut first).unwrap();
    assert_eq!(first.trim_end(), format!("Server running at {port}"));

    // Let the serve loop run, then confirm no further copies appear
    std::thread::sleep(Duration::from_millis(300));
    child.kill().unwrap();
    let mut rest = String::new();
    stdout.read_to_string(&mut rest).unwrap();
    child.wait().unwrap();
    assert!(!rest.contains("Server running"));
}

#[test]
fn occupied_port_exits_nonzero_without_startup_line() {
    let holder = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = holder.local_addr().unwrap().port();

    let output = hellod(port).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("Server running"));
}

#[test]
fn invalid_worker_count_exits_cleanly_without_startup_line() {
    let output = hellod(free_port()).env("WORKERS", "0").output().unwrap();

    // exit 1 through the fatal path, not a panic abort
    assert_eq!(output.status.code(), Some(1));
    assert!(!String::from_utf8_lossy(&output.stderr).contains("panicked"));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("Server running"));
}
