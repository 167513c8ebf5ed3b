//! Minimal HTTP/1.1 server that answers Nominatim-style search requests for integration tests.
//!
//! Each request's `q` parameter is passed to a handler that picks the
//! reply. Every request line and header block is recorded so tests can
//! inspect what the client sent.

#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

/// What the server does with one request.
#[derive(Debug, Clone)]
pub enum Reply {
    /// 200 with the given JSON body.
    Json(String),
    /// Bare status line with an empty body.
    Status(u16),
    /// Wait this long before answering 200 `[]` (longer than the client timeout).
    Stall(Duration),
}

impl Reply {
    pub fn hit(lat: &str, lon: &str) -> Self {
        Reply::Json(format!(
            r#"[{{"place_id":1,"lat":"{lat}","lon":"{lon}","display_name":"test"}}]"#
        ))
    }

    pub fn miss() -> Self {
        Reply::Json("[]".to_string())
    }
}

pub struct NominatimServer {
    pub endpoint: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl NominatimServer {
    /// Raw requests received so far (request line plus headers).
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    /// Decoded `q` parameters received so far, in order.
    pub fn queries(&self) -> Vec<String> {
        self.requests()
            .iter()
            .filter_map(|r| query_param(r))
            .collect()
    }
}

/// Starts a server in a background thread. Returns its `/search` endpoint.
/// The server runs until the process exits.
pub fn start<F>(handler: F) -> NominatimServer
where
    F: Fn(&str) -> Reply + Send + Sync + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let handler = Arc::new(handler);
    let requests = Arc::new(Mutex::new(Vec::new()));
    let log = Arc::clone(&requests);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let handler = Arc::clone(&handler);
            let log = Arc::clone(&log);
            thread::spawn(move || handle(stream, handler.as_ref(), &log));
        }
    });
    NominatimServer {
        endpoint: format!("http://127.0.0.1:{}/search", port),
        requests,
    }
}

fn handle<F>(mut stream: std::net::TcpStream, handler: &F, log: &Mutex<Vec<String>>)
where
    F: Fn(&str) -> Reply,
{
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s.to_string(),
        Err(_) => return,
    };
    log.lock().unwrap().push(request.clone());
    let query = query_param(&request).unwrap_or_default();

    let (status, body) = match handler(&query) {
        Reply::Json(body) => (200, body),
        Reply::Status(code) => (code, String::new()),
        Reply::Stall(d) => {
            thread::sleep(d);
            (200, "[]".to_string())
        }
    };
    let response = format!(
        "HTTP/1.1 {} X\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );
    let _ = stream.write_all(response.as_bytes());
}

fn query_param(request: &str) -> Option<String> {
    let line = request.lines().next()?;
    let target = line.split_whitespace().nth(1)?;
    let url = url::Url::parse(&format!("http://localhost{}", target)).ok()?;
    url.query_pairs()
        .find(|(k, _)| k == "q")
        .map(|(_, v)| v.into_owned())
}
