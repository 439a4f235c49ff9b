//! HTTP transport — implements the `Transport` port with `ureq`.

use std::io::Read as _;

use crate::application::ports::Transport;
use crate::domain::{ApiRequest, ApiResult, ClientConfig, PlatformError, RawResponse, RequestBody};

/// Blocking HTTP transport with a bearer token and one client-wide timeout.
///
/// Settings are fixed at construction.
pub struct HttpTransport {
    agent: ureq::Agent,
    host: String,
    token: String,
    debug: bool,
}

impl HttpTransport {
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(config.timeout).build();
        Self {
            agent,
            host: config.host.clone(),
            token: config.token.clone(),
            debug: config.debug,
        }
    }

    fn url(&self, request: &ApiRequest) -> String {
        format!("{}/{}", self.host, request.path_string())
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: &ApiRequest) -> ApiResult<RawResponse> {
        let url = self.url(request);
        if self.debug {
            tracing::debug!(method = %request.method, %url, query = ?request.query, "> request");
        }

        let mut req = self
            .agent
            .request(request.method.as_str(), &url)
            .set("Accept", "application/json")
            .set("Authorization", &format!("Bearer {}", self.token));
        for (key, value) in &request.query {
            req = req.query(key, value);
        }

        let result = match &request.body {
            RequestBody::Empty => req.call(),
            RequestBody::Json(payload) => {
                let body = payload.to_string();
                if self.debug {
                    tracing::debug!(payload = %body, ">>> payload");
                }
                req.set("Content-Type", "application/json").send_string(&body)
            }
            RequestBody::Form(fields) => {
                if self.debug {
                    tracing::debug!(payload = ?fields, ">>> payload");
                }
                let pairs: Vec<(&str, &str)> = fields
                    .iter()
                    .map(|(k, v)| (k.as_str(), v.as_str()))
                    .collect();
                req.send_form(&pairs)
            }
        };

        let response = match result {
            Ok(resp) | Err(ureq::Error::Status(_, resp)) => read_response(resp)?,
            Err(ureq::Error::Transport(err)) => {
                if is_benign_eof(&err) {
                    tracing::debug!(%url, "connection dropped after response; treating as 200");
                    RawResponse::new(200, Vec::new())
                } else {
                    return Err(PlatformError::Transport(err.to_string()));
                }
            }
        };

        if self.debug {
            tracing::debug!(status = response.status, body = %response.text(), "< response");
        }
        Ok(response)
    }
}

fn read_response(resp: ureq::Response) -> ApiResult<RawResponse> {
    let status = resp.status();
    let mut body = Vec::new();
    resp.into_reader()
        .read_to_end(&mut body)
        .map_err(|e| PlatformError::Transport(format!("reading response body: {e}")))?;
    Ok(RawResponse { status, body })
}

/// Whether `err` is the peer closing the connection at end of stream.
///
/// Walks the source chain looking for an `UnexpectedEof` I/O error or an
/// error message ending in `EOF`.
pub fn is_benign_eof(err: &(dyn std::error::Error + 'static)) -> bool {
    let mut current = Some(err);
    while let Some(e) = current {
        if let Some(io) = e.downcast_ref::<std::io::Error>()
            && io.kind() == std::io::ErrorKind::UnexpectedEof
        {
            return true;
        }
        let text = e.to_string();
        if text.ends_with("EOF") || text.to_lowercase().contains("unexpected eof") {
            return true;
        }
        current = e.source();
    }
    false
}
