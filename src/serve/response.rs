//! HTTP response handlers.

use std::path::Path;

use anyhow::Result;
use tiny_http::{Header, Request, Response, StatusCode};

use crate::actor::WsMsg;
use crate::embed::VIEWER_HTML;
use crate::matrix;

const HTML: &str = "text/html; charset=utf-8";
const JSON: &str = "application/json; charset=utf-8";
const PLAIN: &str = "text/plain; charset=utf-8";

/// Respond with the embedded viewer page.
pub fn respond_viewer(request: Request) -> Result<()> {
    send_body(request, 200, HTML, VIEWER_HTML.as_bytes().to_vec())
}

/// Respond with the current document as JSON, loaded fresh from disk so
/// the viewer always sees the latest save.
pub fn respond_matrix(request: Request, source: &Path) -> Result<()> {
    let (status, body) = matrix_payload(source);
    send_body(request, status, JSON, body.into_bytes())
}

/// Status and JSON body for the document endpoint: 200 with the document,
/// or 500 with an error body when the load fails.
fn matrix_payload(source: &Path) -> (u16, String) {
    let result = matrix::load_matrix(source)
        .map_err(|e| e.to_string())
        .and_then(|matrix| serde_json::to_string(&matrix).map_err(|e| e.to_string()));
    match result {
        Ok(body) => (200, body),
        Err(message) => (
            500,
            serde_json::json!({ "error": message }).to_string(),
        ),
    }
}

/// Respond with 404.
pub fn respond_not_found(request: Request) -> Result<()> {
    send_body(request, 404, PLAIN, b"404 Not Found".to_vec())
}

/// Respond with 503 Service Unavailable (server shutting down).
pub fn respond_unavailable(request: Request) -> Result<()> {
    send_body(request, 503, PLAIN, b"503 Service Unavailable".to_vec())
}

/// Upgrade the connection to a WebSocket session and hand the raw stream
/// to the WebSocket actor.
///
/// `Request::upgrade` writes the `Upgrade`/`Connection` headers itself;
/// only the accept key goes on the response.
pub fn upgrade_websocket(request: Request) -> Result<()> {
    let Some(key) = websocket_key(&request) else {
        return send_body(request, 400, PLAIN, b"400 Bad Request".to_vec());
    };
    let Some(ws_tx) = crate::core::ws_sender() else {
        return respond_unavailable(request);
    };

    let accept = tungstenite::handshake::derive_accept_key(key.as_bytes());
    let accept_header = Header::from_bytes("Sec-WebSocket-Accept", accept.as_bytes())
        .map_err(|()| anyhow::anyhow!("invalid websocket accept key"))?;
    let response = Response::empty(StatusCode(101)).with_header(accept_header);

    let stream = request.upgrade("websocket", response);
    ws_tx
        .blocking_send(WsMsg::AddClient(stream))
        .map_err(|_| anyhow::anyhow!("websocket actor unavailable"))?;
    Ok(())
}

fn websocket_key(request: &Request) -> Option<String> {
    request
        .headers()
        .iter()
        .find(|h| {
            h.field
                .as_str()
                .as_str()
                .eq_ignore_ascii_case("sec-websocket-key")
        })
        .map(|h| h.value.to_string())
}

fn send_body(
    request: Request,
    status: u16,
    content_type: &'static str,
    body: Vec<u8>,
) -> Result<()> {
    let response = Response::from_data(body)
        .with_status_code(StatusCode(status))
        .with_header(make_header("Content-Type", content_type));
    request.respond(response)?;
    Ok(())
}

fn make_header(key: &'static str, value: &'static str) -> Header {
    Header::from_bytes(key, value).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_matrix_payload_valid_document() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("db.json");
        fs::write(
            &source,
            r#"{
                "decision": {"statement": "Pick DB", "description": "ctx"},
                "options": [],
                "criteria": []
            }"#,
        )
        .unwrap();

        let (status, body) = matrix_payload(&source);
        assert_eq!(status, 200);
        let doc: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(doc["decision"]["statement"], "Pick DB");
    }

    #[test]
    fn test_matrix_payload_invalid_save_is_500_error_body() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("db.json");
        fs::write(&source, "{ not json").unwrap();

        let (status, body) = matrix_payload(&source);
        assert_eq!(status, 500);
        let err: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert!(err["error"].as_str().unwrap().contains("failed to parse"));
    }

    #[test]
    fn test_matrix_payload_missing_file_is_500() {
        let (status, body) = matrix_payload(Path::new("/nonexistent/db.json"));
        assert_eq!(status, 500);
        let err: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert!(err["error"].as_str().unwrap().contains("failed to read"));
    }
}
