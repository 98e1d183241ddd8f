//! HTTP response building module
//!
//! The artifact response and the failure response, independent of how the
//! bytes were obtained.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

/// Content type of the served bundle, sent verbatim
pub const ARTIFACT_CONTENT_TYPE: &str = "application/javascript; charset=UTF-8";

/// Build 200 response carrying the artifact
///
/// The CORS header lets a notebook on any origin `fetch` the bundle;
/// `nosniff` keeps browsers from second-guessing the content type.
pub fn build_artifact_response(data: Bytes) -> Response<Full<Bytes>> {
    Response::builder()
        .status(200)
        .header("Access-Control-Allow-Origin", "*")
        .header("Content-Type", ARTIFACT_CONTENT_TYPE)
        .header("X-Content-Type-Options", "nosniff")
        .header("Content-Length", data.len())
        .body(Full::new(data))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 500 Internal Server Error response
pub fn build_500_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(500)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("500 Internal Server Error")))
        .unwrap_or_else(|e| {
            log_build_error("500", &e);
            let mut resp = Response::new(Full::new(Bytes::new()));
            *resp.status_mut() = hyper::StatusCode::INTERNAL_SERVER_ERROR;
            resp
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[tokio::test]
    async fn test_artifact_response_headers_verbatim() {
        let resp = build_artifact_response(Bytes::from_static(b"export default 42;\n"));
        assert_eq!(resp.status(), 200);

        let headers = resp.headers();
        assert_eq!(headers["access-control-allow-origin"], "*");
        assert_eq!(
            headers["content-type"],
            "application/javascript; charset=UTF-8"
        );
        assert_eq!(headers["x-content-type-options"], "nosniff");
        assert_eq!(headers["content-length"], "19");

        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"export default 42;\n");
    }

    #[test]
    fn test_500_response() {
        let resp = build_500_response();
        assert_eq!(resp.status(), 500);
        assert!(resp.headers().get("access-control-allow-origin").is_none());
    }
}
