//! HTTP requests and responses as plain data.
//!
//! # Design
//! The client describes each call as an `HttpRequest` and interprets the
//! resulting `HttpResponse`; the `Transport` trait in `transport` owns the
//! actual I/O. Headers are fixed policy (`Accept` always, `Content-Type`
//! when a body is present) and belong to the transport, so requests carry
//! only method, absolute URL, and optional body text.

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// One request: method, absolute URL, and optional UTF-8 body.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn get(url: String) -> Self {
        Self {
            method: HttpMethod::Get,
            url,
            body: None,
        }
    }

    pub fn post(url: String, body: String) -> Self {
        Self {
            method: HttpMethod::Post,
            url,
            body: Some(body),
        }
    }

    pub fn put(url: String, body: String) -> Self {
        Self {
            method: HttpMethod::Put,
            url,
            body: Some(body),
        }
    }

    pub fn delete(url: String) -> Self {
        Self {
            method: HttpMethod::Delete,
            url,
            body: None,
        }
    }
}

/// One response: numeric status and full body text.
///
/// An empty body is valid — DELETE and error responses may produce none.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    /// True for the 2xx status class.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_method_and_body() {
        let req = HttpRequest::get("http://x/users".to_string());
        assert_eq!(req.method, HttpMethod::Get);
        assert!(req.body.is_none());

        let req = HttpRequest::post("http://x/users".to_string(), "{}".to_string());
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.body.as_deref(), Some("{}"));

        let req = HttpRequest::delete("http://x/users/1".to_string());
        assert_eq!(req.method, HttpMethod::Delete);
        assert!(req.body.is_none());
    }

    #[test]
    fn success_covers_the_2xx_class() {
        for status in [200, 201, 204, 299] {
            assert!(HttpResponse { status, body: String::new() }.is_success());
        }
        for status in [199, 300, 301, 404, 500] {
            assert!(!HttpResponse { status, body: String::new() }.is_success());
        }
    }
}
