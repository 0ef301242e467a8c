//! Common test utilities for gitpack integration tests
//!
//! End-to-end tests run the real binary against a local fixture server that
//! speaks just enough HTTP/1.1 to serve repository zip archives, redirects,
//! and error statuses. The server handles one connection per scripted
//! response, in order, and records the request headers it saw.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::thread;

use assert_cmd::Command;
use tempfile::TempDir;

/// One scripted fixture server response
#[allow(dead_code)]
pub enum FixtureResponse {
    /// 200 with a zip body
    Zip(Vec<u8>),
    /// 302 with the given Location
    Redirect(String),
    /// Arbitrary status with an empty body
    Status(u16),
}

/// Minimal HTTP/1.1 server serving a fixed response sequence
#[allow(dead_code)]
pub struct FixtureServer {
    addr: String,
    /// Request lines and headers, one entry per handled connection
    requests: Arc<Mutex<Vec<Vec<String>>>>,
}

impl FixtureServer {
    /// Start a server that answers each incoming connection with the next
    /// scripted response, then stops accepting.
    #[allow(dead_code)]
    pub fn serve(responses: Vec<FixtureResponse>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind fixture server");
        let addr = format!("http://{}", listener.local_addr().expect("no local addr"));
        let requests: Arc<Mutex<Vec<Vec<String>>>> = Arc::new(Mutex::new(Vec::new()));

        let seen = Arc::clone(&requests);
        thread::spawn(move || {
            for response in responses {
                let Ok((mut stream, _)) = listener.accept() else {
                    return;
                };
                let headers = read_request(&mut stream);
                seen.lock().expect("requests lock poisoned").push(headers);
                let _ = stream.write_all(&render(&response));
            }
        });

        Self { addr, requests }
    }

    /// Base URL of the server, suitable for GITPACK_HOST.
    #[allow(dead_code)]
    pub fn url(&self) -> &str {
        &self.addr
    }

    /// Headers of every request handled so far.
    #[allow(dead_code)]
    pub fn requests(&self) -> Vec<Vec<String>> {
        self.requests.lock().expect("requests lock poisoned").clone()
    }
}

/// Read one request up to the header terminator.
#[allow(dead_code)]
fn read_request(stream: &mut std::net::TcpStream) -> Vec<String> {
    let mut raw = Vec::new();
    let mut buf = [0u8; 1024];
    loop {
        let Ok(n) = stream.read(&mut buf) else { break };
        if n == 0 {
            break;
        }
        raw.extend_from_slice(&buf[..n]);
        if raw.windows(4).any(|w| w == b"\r\n\r\n") {
            break;
        }
    }
    String::from_utf8_lossy(&raw)
        .split("\r\n")
        .take_while(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[allow(dead_code)]
fn render(response: &FixtureResponse) -> Vec<u8> {
    match response {
        FixtureResponse::Zip(body) => {
            let mut out = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: application/zip\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                body.len()
            )
            .into_bytes();
            out.extend_from_slice(body);
            out
        }
        FixtureResponse::Redirect(location) => format!(
            "HTTP/1.1 302 Found\r\nLocation: {location}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
        )
        .into_bytes(),
        FixtureResponse::Status(status) => format!(
            "HTTP/1.1 {status} Error\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
        )
        .into_bytes(),
    }
}

/// Build a zip archive laid out like a hosting-service snapshot:
/// `repo-main/` wrapping the given files.
#[allow(dead_code)]
pub fn repo_zip(files: &[(&str, &str)]) -> Vec<u8> {
    let cursor = std::io::Cursor::new(Vec::new());
    let mut writer = zip::ZipWriter::new(cursor);
    let options = zip::write::SimpleFileOptions::default();

    writer
        .add_directory("repo-main", options)
        .expect("Failed to add archive directory");
    for (name, content) in files {
        writer
            .start_file(format!("repo-main/{name}"), options)
            .expect("Failed to start archive entry");
        writer
            .write_all(content.as_bytes())
            .expect("Failed to write archive entry");
    }

    writer
        .finish()
        .expect("Failed to finish archive")
        .into_inner()
}

/// Temporary installation prefix for one test
#[allow(dead_code)]
pub struct TestPrefix {
    #[allow(dead_code)]
    temp: TempDir,
    pub path: PathBuf,
}

impl TestPrefix {
    #[allow(dead_code)]
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp prefix");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file under the prefix, creating parent directories.
    #[allow(dead_code)]
    pub fn write_file(&self, rel: &str, content: &str) {
        let path = self.path.join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, content).expect("Failed to write file");
    }

    #[allow(dead_code)]
    pub fn file_exists(&self, rel: &str) -> bool {
        self.path.join(rel).exists()
    }
}

/// Command for the gitpack binary with a clean environment, pointed at the
/// given fixture server and prefix.
#[allow(dead_code)]
pub fn gitpack_cmd(server: &FixtureServer, prefix: &TestPrefix) -> Command {
    let mut cmd = Command::cargo_bin("gitpack").expect("Failed to find gitpack binary");
    cmd.env_remove("GITPACK_TOKEN");
    cmd.env_remove("SUDO_USER");
    cmd.env("GITPACK_HOST", server.url());
    cmd.env("GITPACK_PREFIX", &prefix.path);
    cmd
}

/// Command for the gitpack binary with a clean environment and no server.
#[allow(dead_code)]
pub fn gitpack_cmd_bare() -> Command {
    let mut cmd = Command::cargo_bin("gitpack").expect("Failed to find gitpack binary");
    cmd.env_remove("GITPACK_TOKEN");
    cmd.env_remove("GITPACK_HOST");
    cmd.env_remove("GITPACK_PREFIX");
    cmd.env_remove("SUDO_USER");
    cmd
}
