use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use anyhow::{Context, Result};
use tempfile::TempDir;

/// Temporary word-per-line input file for builder tests
#[allow(dead_code)]
pub struct WordFile {
    _temp_dir: TempDir,
    pub path: PathBuf,
}

#[allow(dead_code)]
impl WordFile {
    pub fn new(content: &str) -> Result<Self> {
        let temp_dir = tempfile::tempdir().context("Failed to create temporary directory")?;
        let path = temp_dir.path().join("test_data.txt");
        std::fs::write(&path, content).context("Failed to write word file")?;

        Ok(Self {
            _temp_dir: temp_dir,
            path,
        })
    }
}

/// Single-use HTTP responder standing in for AnkiConnect.
///
/// Serves one scripted reply per incoming request, records every request
/// body it parses, then exits. `finish` joins the thread and hands the
/// recorded bodies back for assertions.
#[allow(dead_code)]
pub struct CannedConnect {
    url: String,
    requests: Arc<Mutex<Vec<serde_json::Value>>>,
    handle: Option<JoinHandle<()>>,
}

#[allow(dead_code)]
impl CannedConnect {
    pub fn start(replies: Vec<(u16, String)>) -> Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").context("Failed to bind responder")?;
        let addr = listener.local_addr()?;
        let requests = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&requests);

        let handle = std::thread::spawn(move || {
            for (status, body) in replies {
                let Ok((mut stream, _)) = listener.accept() else {
                    return;
                };

                if let Some(request_body) = read_request(&mut stream) {
                    if let Ok(json) = serde_json::from_slice::<serde_json::Value>(&request_body) {
                        seen.lock().unwrap().push(json);
                    }
                }

                let reason = match status {
                    200 => "OK",
                    _ => "Internal Server Error",
                };
                let response = format!(
                    "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len(),
                );
                let _ = stream.write_all(response.as_bytes());
            }
        });

        Ok(Self {
            url: format!("http://{addr}"),
            requests,
            handle: Some(handle),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Join the responder thread and return the request bodies it saw
    pub fn finish(mut self) -> Vec<serde_json::Value> {
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
        let requests = self.requests.lock().unwrap();
        requests.clone()
    }
}

fn read_request(stream: &mut TcpStream) -> Option<Vec<u8>> {
    let mut buffer = Vec::new();
    let mut chunk = [0u8; 1024];

    let header_end = loop {
        let n = stream.read(&mut chunk).ok()?;
        if n == 0 {
            return None;
        }
        buffer.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buffer.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos;
        }
    };

    let headers = String::from_utf8_lossy(&buffer[..header_end]).to_string();
    let content_length = headers
        .lines()
        .find(|line| line.to_ascii_lowercase().starts_with("content-length"))
        .and_then(|line| line.split(':').nth(1))
        .and_then(|value| value.trim().parse::<usize>().ok())?;

    let body_start = header_end + 4;
    while buffer.len() < body_start + content_length {
        let n = stream.read(&mut chunk).ok()?;
        if n == 0 {
            break;
        }
        buffer.extend_from_slice(&chunk[..n]);
    }

    let body_end = (body_start + content_length).min(buffer.len());
    Some(buffer[body_start..body_end].to_vec())
}
