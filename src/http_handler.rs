use crate::error::DomainError;
use crate::registry::lookup_vehicle;
use crate::vin::Vin;
use lambda_http::tracing::{error, info};
use lambda_http::{Body, Error, Request, RequestExt, Response};
use reqwest::Client;

/// This function is the entry point for the Lambda function.
/// It receives a request with query parameters, validates the VIN and
/// checks the vehicle registry for a matching record.
///
/// Following query-parameters are required:
/// - vin: The 17-character vehicle identification number to check
pub(crate) async fn function_handler(event: Request) -> Result<Response<Body>, Error> {
    // Extract query parameters
    info!("Validating request");
    let query_params = event.query_string_parameters();
    let vin_param = match query_params.first("vin") {
        Some(query_param) => query_param,
        None => {
            return Ok(DomainError::new(
                400,
                "Missing query-parameter 'vin'".to_string(),
                "A 17-character vehicle identification number is required".to_string(),
            )
            .http_response())
        }
    };
    info!(
        "Valid request received for checking the vehicle with VIN: '{:?}'.",
        vin_param
    );

    // Validate the VIN before touching the registry
    let vin = match Vin::new(vin_param) {
        Ok(vin) => vin,
        Err(e) => return Ok(e.http_response()),
    };
    info!(
        "WMI: {:?}, VDS: {:?}, VIS: {:?}",
        vin.wmi(),
        vin.vds(),
        vin.vis()
    );

    let client = Client::new();

    match lookup_vehicle(&client, &vin).await {
        Ok(Some(record)) => {
            info!(
                "Vehicle record found for VIN {:?}: {:?}",
                vin.as_str(),
                record
            );
            Ok(json_response(
                200,
                &format!(
                    "VIN '{}' passed integrity checks: {} {} {}",
                    vin.as_str(),
                    record.model_year,
                    record.make,
                    record.model
                ),
            ))
        }
        Ok(None) => Ok(DomainError::new(
            404,
            "Not Found".to_string(),
            "Vehicle record does not exist".to_string(),
        )
        .http_response()),
        Err(e) => {
            error!(
                "Failed to retrieve vehicle record for VIN {:?}: {:?}",
                vin.as_str(),
                e
            );
            Ok(DomainError::new(
                500,
                "Registry lookup failed".to_string(),
                "Failed to retrieve vehicle record".to_string(),
            )
            .http_response())
        }
    }
}

// Helper function to generate JSON responses
fn json_response(status_code: u16, message: &str) -> Response<Body> {
    Response::builder()
        .status(status_code)
        .header("Content-Type", "application/json")
        .body(Body::Text(format!("{{\"message\": \"{}\"}}", message)))
        .unwrap()
}
