//! Assets compiled into the binary.

/// Single-page viewer served at `/`. Fetches the document from
/// `/api/matrix` and reloads on WebSocket push.
pub const VIEWER_HTML: &str = include_str!("viewer.html");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewer_wires_api_and_ws() {
        assert!(VIEWER_HTML.contains("/api/matrix"));
        assert!(VIEWER_HTML.contains("/ws"));
    }
}
