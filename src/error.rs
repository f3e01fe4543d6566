use lambda_http::{Body, Response};
use serde::Serialize;
use thiserror::Error;

/// Error raised when a request violates a vehicle-integrity rule.
///
/// Carries the HTTP status code the caller should receive together with a
/// short summary and a longer description. The status is stored as-is, no
/// range check is applied.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct DomainError {
    status: u16,
    message: String,
    description: String,
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    status: u16,
    title: &'a str,
    detail: &'a str,
}

impl DomainError {
    pub fn new(status: u16, message: String, description: String) -> Self {
        Self {
            status,
            message,
            description,
        }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Renders the error as the HTTP response returned to the caller.
    /// The body is a JSON object with the fields `status`, `title` and
    /// `detail`, in that order.
    pub fn http_response(&self) -> Response<Body> {
        let body = ErrorBody {
            status: self.status,
            title: &self.message,
            detail: &self.description,
        };

        Response::builder()
            .status(self.status)
            .header("Content-Type", "application/json")
            .body(Body::Text(serde_json::to_string(&body).unwrap()))
            .unwrap()
    }
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Vehicle registry lookup failed")]
    LookupFailed,

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_vin_response() {
        let error = DomainError::new(
            400,
            "Invalid VIN".to_string(),
            "VIN checksum failed".to_string(),
        );

        let response = error.http_response();
        assert_eq!(response.status(), 400);

        let body = String::from_utf8(response.body().to_vec()).unwrap();
        assert_eq!(
            body,
            r#"{"status":400,"title":"Invalid VIN","detail":"VIN checksum failed"}"#
        );
    }

    #[test]
    fn test_not_found_response() {
        let error = DomainError::new(
            404,
            "Not Found".to_string(),
            "Vehicle record does not exist".to_string(),
        );

        let response = error.http_response();
        assert_eq!(response.status(), 404);

        let body = String::from_utf8(response.body().to_vec()).unwrap();
        assert_eq!(
            body,
            r#"{"status":404,"title":"Not Found","detail":"Vehicle record does not exist"}"#
        );
    }

    #[test]
    fn test_body_parses_back_to_the_original_fields() {
        let error = DomainError::new(
            422,
            "Unprocessable vehicle".to_string(),
            "Model year is out of range".to_string(),
        );

        let response = error.http_response();
        let body = String::from_utf8(response.body().to_vec()).unwrap();
        let body_json = serde_json::from_str::<serde_json::Value>(&body).unwrap();

        assert_eq!(body_json["status"], 422);
        assert_eq!(body_json["title"].as_str().unwrap(), "Unprocessable vehicle");
        assert_eq!(
            body_json["detail"].as_str().unwrap(),
            "Model year is out of range"
        );
    }

    #[test]
    fn test_display_matches_message() {
        let error = DomainError::new(
            400,
            "Invalid VIN".to_string(),
            "VIN checksum failed".to_string(),
        );

        assert_eq!(error.to_string(), "Invalid VIN");
    }

    #[test]
    fn test_empty_strings_still_produce_a_well_formed_body() {
        let error = DomainError::new(500, String::new(), String::new());

        let response = error.http_response();
        assert_eq!(response.status(), 500);

        let body = String::from_utf8(response.body().to_vec()).unwrap();
        assert_eq!(body, r#"{"status":500,"title":"","detail":""}"#);
    }

    #[test]
    fn test_accessors() {
        let error = DomainError::new(
            404,
            "Not Found".to_string(),
            "Vehicle record does not exist".to_string(),
        );

        assert_eq!(error.status(), 404);
        assert_eq!(error.message(), "Not Found");
        assert_eq!(error.description(), "Vehicle record does not exist");
    }

    #[test]
    fn test_response_is_json() {
        let error = DomainError::new(400, "Invalid VIN".to_string(), "Too short".to_string());

        let response = error.http_response();
        assert_eq!(
            response.headers().get("Content-Type").unwrap(),
            "application/json"
        );
    }
}
