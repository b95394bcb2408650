#![allow(dead_code)]

use std::{
    io::{ErrorKind, Read, Write},
    net::{TcpListener, TcpStream},
    sync::{
        Arc, Mutex,
        atomic::{AtomicBool, Ordering},
    },
    thread::JoinHandle,
    time::Duration,
};

use awsrest::{Auth, Credentials, Error};

/// A request as seen by [`TestServer`].
#[derive(Clone, Debug)]
pub(crate) struct RecordedRequest {
    pub(crate) method: String,
    /// Path plus query, exactly as sent.
    pub(crate) target: String,
    pub(crate) headers: Vec<(String, String)>,
    pub(crate) body: Vec<u8>,
}

impl RecordedRequest {
    pub(crate) fn path(&self) -> &str {
        self.target.split_once('?').map_or(&self.target, |(p, _)| p)
    }

    pub(crate) fn query(&self) -> Option<&str> {
        self.target.split_once('?').map(|(_, q)| q)
    }

    pub(crate) fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub(crate) fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap_or(serde_json::Value::Null)
    }
}

#[derive(Clone, Debug)]
pub(crate) struct CannedResponse {
    pub(crate) status: u16,
    pub(crate) headers: Vec<(&'static str, String)>,
    pub(crate) body: String,
}

impl CannedResponse {
    pub(crate) fn json(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: vec![
                ("content-type", "application/json".to_string()),
                ("x-amzn-RequestId", "req-test".to_string()),
            ],
            body: body.into(),
        }
    }

    pub(crate) fn xml(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: vec![("content-type", "text/xml".to_string())],
            body: body.into(),
        }
    }

    pub(crate) fn header(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.headers.push((name, value.into()));
        self
    }
}

type Responder = Box<dyn Fn(&RecordedRequest, usize) -> CannedResponse + Send + 'static>;

/// Minimal HTTP/1.1 server on a random local port.
///
/// Each connection carries one request; the responder gets the request and
/// its zero-based index.
pub(crate) struct TestServer {
    url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl TestServer {
    pub(crate) fn start<F>(responder: F) -> Self
    where
        F: Fn(&RecordedRequest, usize) -> CannedResponse + Send + 'static,
    {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind test server");
        listener
            .set_nonblocking(true)
            .expect("configure test server");
        let addr = listener.local_addr().expect("test server address");

        let requests = Arc::new(Mutex::new(Vec::new()));
        let stop = Arc::new(AtomicBool::new(false));
        let responder: Responder = Box::new(responder);

        let handle = {
            let requests = Arc::clone(&requests);
            let stop = Arc::clone(&stop);
            std::thread::spawn(move || {
                while !stop.load(Ordering::SeqCst) {
                    match listener.accept() {
                        Ok((stream, _)) => handle_connection(stream, &requests, &responder),
                        Err(err) if err.kind() == ErrorKind::WouldBlock => {
                            std::thread::sleep(Duration::from_millis(5));
                        }
                        Err(_) => break,
                    }
                }
            })
        };

        Self {
            url: format!("http://{addr}"),
            requests,
            stop,
            handle: Some(handle),
        }
    }

    /// Answers every request with the same response.
    pub(crate) fn always(response: CannedResponse) -> Self {
        Self::start(move |_, _| response.clone())
    }

    /// Answers requests with `responses` in order, repeating the last one.
    pub(crate) fn sequence(responses: Vec<CannedResponse>) -> Self {
        Self::start(move |_, idx| {
            responses
                .get(idx)
                .or_else(|| responses.last())
                .cloned()
                .unwrap_or_else(|| CannedResponse::json(500, "{}"))
        })
    }

    pub(crate) fn url(&self) -> &str {
        &self.url
    }

    pub(crate) fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }

    pub(crate) fn hits(&self) -> usize {
        self.requests.lock().map(|r| r.len()).unwrap_or_default()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::SeqCst);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn handle_connection(
    mut stream: TcpStream,
    requests: &Mutex<Vec<RecordedRequest>>,
    responder: &Responder,
) {
    let _ = stream.set_nonblocking(false);
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));

    let Some(request) = read_request(&mut stream) else {
        return;
    };

    let idx = {
        let mut all = requests.lock().expect("request log");
        all.push(request.clone());
        all.len() - 1
    };
    let response = responder(&request, idx);

    let mut raw = format!("HTTP/1.1 {} {}\r\n", response.status, reason(response.status));
    for (name, value) in &response.headers {
        raw.push_str(&format!("{name}: {value}\r\n"));
    }
    raw.push_str(&format!(
        "Content-Length: {}\r\nConnection: close\r\n\r\n",
        response.body.len()
    ));
    raw.push_str(&response.body);

    let _ = stream.write_all(raw.as_bytes());
    let _ = stream.flush();
}

fn read_request(stream: &mut TcpStream) -> Option<RecordedRequest> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    let header_end = loop {
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos;
        }
        match stream.read(&mut chunk) {
            Ok(0) | Err(_) => return None,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).into_owned();
    let mut lines = head.split("\r\n");
    let mut request_line = lines.next()?.split_whitespace();
    let method = request_line.next()?.to_string();
    let target = request_line.next()?.to_string();

    let headers: Vec<(String, String)> = lines
        .filter_map(|line| line.split_once(':'))
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        .collect();
    let content_length = headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, v)| v.parse::<usize>().ok())
        .unwrap_or(0);

    let mut body = buf[header_end + 4..].to_vec();
    while body.len() < content_length {
        match stream.read(&mut chunk) {
            Ok(0) | Err(_) => break,
            Ok(n) => body.extend_from_slice(&chunk[..n]),
        }
    }
    body.truncate(content_length);

    Some(RecordedRequest {
        method,
        target,
        headers,
        body,
    })
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        400 => "Bad Request",
        404 => "Not Found",
        409 => "Conflict",
        429 => "Too Many Requests",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Unknown",
    }
}

pub(crate) fn test_auth() -> Result<Auth, Error> {
    Ok(Auth::Static(Credentials::new(
        "AKIDEXAMPLE",
        "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY",
    )?))
}

#[cfg(feature = "async")]
pub(crate) fn async_client(server: &TestServer) -> Result<awsrest::Client, Error> {
    awsrest::Client::builder()
        .region("us-east-1")
        .auth(test_auth()?)
        .endpoint_url(server.url())
        .max_attempts(1)
        .timeout(Duration::from_secs(5))
        .build()
}

#[cfg(feature = "blocking")]
pub(crate) fn blocking_client(server: &TestServer) -> Result<awsrest::BlockingClient, Error> {
    awsrest::BlockingClient::builder()
        .region("us-east-1")
        .auth(test_auth()?)
        .endpoint_url(server.url())
        .max_attempts(1)
        .timeout(Duration::from_secs(5))
        .build()
}

/// A placeholder value that satisfies validation for any member.
pub(crate) fn placeholder(name: &str) -> serde_json::Value {
    serde_json::Value::String(format!("v-{name}"))
}
