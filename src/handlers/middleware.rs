use axum::{
    body::Body,
    extract::Request,
    http::{header, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::Response,
};
use tracing::warn;

use super::errors::{error_response, ApiError};

/// Request validation middleware: bodies sent with POST/PUT/PATCH must be JSON
pub async fn request_validation_middleware(
    request: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    validate_content_type(&request)?;

    Ok(next.run(request).await)
}

fn validate_content_type(request: &Request<Body>) -> Result<(), ApiError> {
    let method = request.method();

    if method != Method::POST && method != Method::PUT && method != Method::PATCH {
        return Ok(());
    }

    match request.headers().get(header::CONTENT_TYPE) {
        Some(content_type) => {
            let content_type_str = content_type.to_str().unwrap_or("");
            if !content_type_str.starts_with("application/json") {
                warn!("Invalid content type: {}", content_type_str);
                return Err(error_response(
                    StatusCode::UNSUPPORTED_MEDIA_TYPE,
                    "Content-Type must be application/json",
                ));
            }
            Ok(())
        }
        None => {
            warn!("Missing content type header");
            Err(error_response(
                StatusCode::BAD_REQUEST,
                "Content-Type header is required for requests with body",
            ))
        }
    }
}

/// CORS middleware for handling cross-origin requests
pub async fn cors_middleware(request: Request<Body>, next: Next) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST, PUT, DELETE, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
    headers.insert(
        header::ACCESS_CONTROL_MAX_AGE,
        HeaderValue::from_static("86400"),
    );

    response
}

/// Security headers middleware
pub async fn security_headers_middleware(request: Request<Body>, next: Next) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    headers.insert(
        header::REFERRER_POLICY,
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(method: Method, content_type: Option<&str>) -> Request<Body> {
        let mut builder = axum::http::Request::builder().method(method).uri("/cities");
        if let Some(content_type) = content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[test]
    fn test_json_body_accepted() {
        let request = request(Method::POST, Some("application/json; charset=utf-8"));
        assert!(validate_content_type(&request).is_ok());
    }

    #[test]
    fn test_non_json_body_rejected() {
        let request = request(Method::PUT, Some("text/plain"));
        let (status, _) = validate_content_type(&request).unwrap_err();
        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[test]
    fn test_missing_content_type_rejected() {
        let request = request(Method::POST, None);
        let (status, _) = validate_content_type(&request).unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_bodyless_methods_skip_validation() {
        assert!(validate_content_type(&request(Method::GET, None)).is_ok());
        assert!(validate_content_type(&request(Method::DELETE, None)).is_ok());
    }
}
