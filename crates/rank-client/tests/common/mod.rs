//! In-process fake scoring service built on `tiny_http`.

#![allow(dead_code)]

use std::io::Read;
use std::thread::JoinHandle;
use std::time::Duration;

use rank_config::RankConfig;

/// Read one HTTP request (headers plus `Content-Length` body) off a raw socket.
pub fn drain_request(stream: &mut std::net::TcpStream) {
    let mut seen = Vec::new();
    let mut chunk = [0_u8; 4096];
    loop {
        let Ok(read) = stream.read(&mut chunk) else {
            return;
        };
        if read == 0 {
            return;
        }
        seen.extend_from_slice(&chunk[..read]);

        let text = String::from_utf8_lossy(&seen);
        let Some(header_end) = text.find("\r\n\r\n") else {
            continue;
        };
        let body_len = text[..header_end]
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                name.eq_ignore_ascii_case("content-length")
                    .then(|| value.trim().parse::<usize>().ok())?
            })
            .unwrap_or(0);
        if seen.len() >= header_end + 4 + body_len {
            return;
        }
    }
}

/// One request as the fake service saw it.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub url: String,
    pub content_type: Option<String>,
    pub body: String,
}

/// Canned reply: status code and body.
pub type Reply = (u16, &'static str);

pub struct FakeService {
    pub base_url: String,
    handle: JoinHandle<Vec<Recorded>>,
}

impl FakeService {
    /// Serve `replies` in order, one per incoming request, then stop.
    ///
    /// The server also stops once `idle` elapses without a request.
    pub fn start(replies: Vec<Reply>, idle: Duration) -> Self {
        let server = tiny_http::Server::http("127.0.0.1:0").expect("bind fake service");
        let port = server
            .server_addr()
            .to_ip()
            .map(|addr| addr.port())
            .expect("fake service port");

        let handle = std::thread::spawn(move || {
            let mut seen = Vec::new();
            for (status, body) in replies {
                let mut request = match server.recv_timeout(idle) {
                    Ok(Some(request)) => request,
                    _ => break,
                };

                let mut received = String::new();
                let _ = request.as_reader().read_to_string(&mut received);
                let content_type = request
                    .headers()
                    .iter()
                    .find(|h| h.field.equiv("Content-Type"))
                    .map(|h| h.value.as_str().to_string());
                seen.push(Recorded {
                    method: request.method().as_str().to_string(),
                    url: request.url().to_string(),
                    content_type,
                    body: received,
                });

                let response = tiny_http::Response::from_string(body)
                    .with_status_code(status)
                    .with_header(
                        tiny_http::Header::from_bytes("Content-Type", "application/json")
                            .expect("static header"),
                    );
                let _ = request.respond(response);
            }
            seen
        });

        Self {
            base_url: format!("http://127.0.0.1:{port}"),
            handle,
        }
    }

    /// Serve a single reply with a generous idle window.
    pub fn once(status: u16, body: &'static str) -> Self {
        Self::start(vec![(status, body)], Duration::from_secs(10))
    }

    /// Config pointing a client at this fake.
    pub fn config(&self) -> RankConfig {
        let mut config = RankConfig::default();
        config.service.base_url = self.base_url.clone();
        config
    }

    /// Wait for the server thread and return every request it saw.
    pub fn finish(self) -> Vec<Recorded> {
        self.handle.join().expect("fake service thread")
    }
}
