//! Tests for HTTP request/response types.

use super::{HttpRequest, HttpResponse, TransportError};

mod http_request {
    use super::*;

    #[test]
    fn new_creates_request_with_method_and_url() {
        let url = url::Url::parse("https://example.com/api").unwrap();
        let req = HttpRequest::new(http::Method::PUT, url.clone());

        assert_eq!(req.method, http::Method::PUT);
        assert_eq!(req.url, url);
        assert!(req.headers.is_empty());
        assert!(req.body.is_none());
    }

    #[test]
    fn with_body_sets_body() {
        let url = url::Url::parse("https://example.com/").unwrap();
        let body = b"test body".to_vec();
        let req = HttpRequest::new(http::Method::POST, url).with_body(body.clone());

        assert_eq!(req.body, Some(body));
        assert_eq!(req.body_lossy().as_deref(), Some("test body"));
    }

    #[test]
    fn with_header_appends_multiple_values_for_same_name() {
        let url = url::Url::parse("https://example.com/").unwrap();
        let req = HttpRequest::new(http::Method::GET, url)
            .with_header(
                http::header::ACCEPT,
                http::HeaderValue::from_static("text/html"),
            )
            .with_header(
                http::header::ACCEPT,
                http::HeaderValue::from_static("application/json"),
            );

        assert_eq!(req.headers.get_all(http::header::ACCEPT).iter().count(), 2);
    }

    #[test]
    fn body_lossy_is_none_without_body() {
        let url = url::Url::parse("http://example.com/").unwrap();
        let req = HttpRequest::new(http::Method::GET, url);

        assert!(req.body_lossy().is_none());
    }
}

mod http_response {
    use super::*;

    #[test]
    fn body_text_returns_valid_utf8() {
        let resp = HttpResponse::new(
            http::StatusCode::OK,
            http::HeaderMap::new(),
            b"Hello, World!".to_vec(),
        );

        assert_eq!(resp.body_text(), Some("Hello, World!"));
    }

    #[test]
    fn body_text_returns_none_for_invalid_utf8() {
        let resp = HttpResponse::new(
            http::StatusCode::OK,
            http::HeaderMap::new(),
            vec![0xff, 0xfe],
        );

        assert!(resp.body_text().is_none());
        assert_eq!(resp.body_lossy(), "\u{fffd}\u{fffd}");
    }
}

mod transport_error {
    use super::*;

    #[test]
    fn kinds_are_stable() {
        let io = || Box::new(std::io::Error::other("boom"));

        assert_eq!(TransportError::Connection(io()).kind(), "connection");
        assert_eq!(TransportError::Tls(io()).kind(), "tls");
        assert_eq!(TransportError::Timeout(io()).kind(), "timeout");
        assert_eq!(TransportError::Body(io()).kind(), "body");
        assert_eq!(TransportError::Request(io()).kind(), "request");
    }

    #[test]
    fn display_includes_source_message() {
        let err = TransportError::Connection(Box::new(std::io::Error::other("dns lookup failed")));

        assert_eq!(err.to_string(), "Connection error: dns lookup failed");
    }

    #[test]
    fn source_is_preserved() {
        use std::error::Error as _;

        let err = TransportError::Tls(Box::new(std::io::Error::other("bad certificate")));

        assert_eq!(err.source().unwrap().to_string(), "bad certificate");
    }

    #[test]
    fn timeout_keeps_originating_error() {
        use std::error::Error as _;

        let err = TransportError::Timeout(Box::new(std::io::Error::other("connect deadline")));

        assert_eq!(err.to_string(), "Request timed out: connect deadline");
        assert_eq!(err.source().unwrap().to_string(), "connect deadline");
    }
}
