use crate::error::ApiError;
use crate::vin::Vin;
use lambda_http::tracing::{error, info, log::debug};
use reqwest::Client;
use serde::Deserialize;

const API_BASE_URL: &str = "https://vpic.nhtsa.dot.gov/api/vehicles";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VehicleRecord {
    #[serde(rename = "VIN")]
    pub vin: String,
    pub make: String,
    pub model: String,
    pub model_year: String,
    error_code: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct DecodeVinResponse {
    count: u32,
    results: Vec<VehicleRecord>,
}

pub(crate) async fn lookup_vehicle(
    client: &Client,
    vin: &Vin,
) -> Result<Option<VehicleRecord>, ApiError> {
    let url = format!(
        "{}/DecodeVinValues/{}?format=json",
        API_BASE_URL,
        vin.as_str()
    );
    info!(
        "Looking up vehicle record for VIN {:?} by calling {:?}",
        vin.as_str(),
        url
    );
    let response = client.get(&url).send().await?;
    if !response.status().is_success() {
        error!("Vehicle registry returned HTTP status {}", response.status());
        return Err(ApiError::LookupFailed);
    }

    let decode_response: DecodeVinResponse = response.json().await?;
    info!("Registry returned {} decode result(s)", decode_response.count);
    for record in decode_response.results {
        debug!(
            "Checking decode result: {:?} to find {:?}",
            record,
            vin.as_str()
        );
        // An error code of "0" marks a clean decode.
        if record.error_code == "0" {
            info!(
                "Found matching vehicle record for VIN {:?}: {:?}",
                vin.as_str(),
                record
            );
            return Ok(Some(record));
        }
    }

    info!("No vehicle record found.");
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_decode_response() {
        let payload = r#"{
            "Count": 1,
            "Message": "Results returned successfully",
            "Results": [{
                "VIN": "1HGCM82633A004352",
                "Make": "HONDA",
                "Model": "Accord",
                "ModelYear": "2003",
                "ErrorCode": "0"
            }]
        }"#;

        let response: DecodeVinResponse = serde_json::from_str(payload).unwrap();
        assert_eq!(response.count, 1);

        let record = &response.results[0];
        assert_eq!(record.vin, "1HGCM82633A004352");
        assert_eq!(record.make, "HONDA");
        assert_eq!(record.model, "Accord");
        assert_eq!(record.model_year, "2003");
        assert_eq!(record.error_code, "0");
    }
}
