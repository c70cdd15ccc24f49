//! Remote reasoner reached over HTTP.
//!
//! The asserted graph is POSTed as `application/n-triples`; a 2xx answer
//! carries the entailed triples in the same format.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE};

use super::ReasoningService;
use crate::error::ReasonerError;

const N_TRIPLES: &str = "application/n-triples";

/// Error bodies are cut to this many characters.
const MAX_ERROR_BODY: usize = 512;

/// A reasoning service behind an HTTP endpoint.
#[derive(Debug, Clone)]
pub struct HttpReasoner {
    client: Client,
    endpoint: String,
    timeout: Duration,
}

impl HttpReasoner {
    /// Builds a client for `endpoint` with a whole-request `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`ReasonerError::Unavailable`] if the HTTP client cannot be
    /// constructed.
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, ReasonerError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ReasonerError::Unavailable(format!("cannot build HTTP client: {e}")))?;
        Ok(Self {
            client,
            endpoint: endpoint.to_owned(),
            timeout,
        })
    }

    /// The endpoint requests go to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ReasoningService for HttpReasoner {
    fn name(&self) -> &str {
        "http"
    }

    fn entail(&self, request: &str) -> Result<String, ReasonerError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, N_TRIPLES)
            .header(ACCEPT, N_TRIPLES)
            .body(request.to_owned())
            .send()
            .map_err(|e| {
                if e.is_timeout() {
                    ReasonerError::Timeout(self.timeout)
                } else {
                    ReasonerError::Unavailable(format!("{}: {e}", self.endpoint))
                }
            })?;

        let status = response.status();
        let body = response.text().map_err(|e| {
            if e.is_timeout() {
                ReasonerError::Timeout(self.timeout)
            } else {
                ReasonerError::Unavailable(format!("reading response: {e}"))
            }
        })?;
        if !status.is_success() {
            return Err(ReasonerError::Status {
                status: status.as_u16(),
                body: body.chars().take(MAX_ERROR_BODY).collect(),
            });
        }
        tracing::debug!(endpoint = %self.endpoint, bytes = body.len(), "reasoner answered");
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufRead, BufReader, Read, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Serves one request with `status` and `body` after `delay`.
    fn serve_once(status: &'static str, body: &'static str, delay: Duration) -> String {
        let Ok(listener) = TcpListener::bind("127.0.0.1:0") else {
            panic!("bind");
        };
        let Ok(addr) = listener.local_addr() else {
            panic!("local addr");
        };
        thread::spawn(move || {
            let Ok((stream, _)) = listener.accept() else {
                return;
            };
            let mut reader = BufReader::new(stream);
            let mut content_length = 0usize;
            loop {
                let mut line = String::new();
                if reader.read_line(&mut line).unwrap_or(0) == 0 || line == "\r\n" {
                    break;
                }
                if let Some(v) = line.to_ascii_lowercase().strip_prefix("content-length:") {
                    content_length = v.trim().parse().unwrap_or(0);
                }
            }
            let mut request = vec![0u8; content_length];
            let _ = reader.read_exact(&mut request);
            thread::sleep(delay);
            let mut stream = reader.into_inner();
            let _ = write!(
                stream,
                "HTTP/1.1 {status}\r\nContent-Type: application/n-triples\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
        });
        format!("http://{addr}/entail")
    }

    const ENTAILED: &str = "<https://example.org/x> <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <https://example.org/B> .\n";

    #[test]
    fn success_returns_body() {
        let endpoint = serve_once("200 OK", ENTAILED, Duration::ZERO);
        let Ok(reasoner) = HttpReasoner::new(&endpoint, Duration::from_secs(5)) else {
            panic!("client");
        };
        assert_eq!(reasoner.entail("").as_deref(), Ok(ENTAILED));
    }

    #[test]
    fn error_status_is_reported() {
        let endpoint = serve_once("500 Internal Server Error", "boom", Duration::ZERO);
        let Ok(reasoner) = HttpReasoner::new(&endpoint, Duration::from_secs(5)) else {
            panic!("client");
        };
        assert_eq!(
            reasoner.entail(""),
            Err(ReasonerError::Status {
                status: 500,
                body: "boom".to_owned()
            })
        );
    }

    #[test]
    fn slow_server_times_out() {
        let endpoint = serve_once("200 OK", ENTAILED, Duration::from_secs(3));
        let timeout = Duration::from_millis(200);
        let Ok(reasoner) = HttpReasoner::new(&endpoint, timeout) else {
            panic!("client");
        };
        assert_eq!(reasoner.entail(""), Err(ReasonerError::Timeout(timeout)));
    }

    #[test]
    fn closed_port_is_unavailable() {
        let Ok(listener) = TcpListener::bind("127.0.0.1:0") else {
            panic!("bind");
        };
        let Ok(addr) = listener.local_addr() else {
            panic!("local addr");
        };
        drop(listener);
        let Ok(reasoner) = HttpReasoner::new(&format!("http://{addr}/"), Duration::from_secs(2))
        else {
            panic!("client");
        };
        assert!(matches!(
            reasoner.entail(""),
            Err(ReasonerError::Unavailable(_))
        ));
    }
}
