use serde::de::DeserializeOwned;

use crate::application::ports::{ApiError, BrasilApi, HttpTransport, ServiceError};
use crate::domain::address::PostalAddress;
use crate::domain::bank::Bank;

pub const BASE_URL: &str = "https://brasilapi.com.br/api";

const BANKS_ENDPOINT: &str = "/banks/v1";
const CEP_ENDPOINT: &str = "/cep/v1";

pub struct BrasilApiClient<T> {
    transport: T,
    base_url: String,
}

impl<T: HttpTransport> BrasilApiClient<T> {
    pub fn new(transport: T) -> Self {
        Self::with_base_url(transport, BASE_URL)
    }

    pub fn with_base_url(transport: T, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn request<R: DeserializeOwned>(&self, endpoint: &str) -> Result<R, ApiError> {
        let url = format!("{}{endpoint}", self.base_url);
        let response = self.transport.get(&url)?;
        decode_response(response.status, &response.body)
    }
}

/// Maps a completed exchange onto the expected payload or the error it describes.
pub fn decode_response<R: DeserializeOwned>(status: u16, body: &str) -> Result<R, ApiError> {
    if status != 200 {
        return match serde_json::from_str::<ServiceError>(body) {
            Ok(service_error) => Err(ApiError::Service(service_error)),
            Err(_) => Err(ApiError::Status {
                status,
                body: body.to_string(),
            }),
        };
    }

    serde_json::from_str(body).map_err(ApiError::Decode)
}

impl<T: HttpTransport> BrasilApi for BrasilApiClient<T> {
    fn get_address(&self, cep: &str) -> Result<PostalAddress, ApiError> {
        self.request(&format!("{CEP_ENDPOINT}/{cep}"))
    }

    fn list_banks(&self) -> Result<Vec<Bank>, ApiError> {
        self.request(BANKS_ENDPOINT)
    }

    fn get_bank_by_code(&self, code: &str) -> Result<Bank, ApiError> {
        self.request(&format!("{BANKS_ENDPOINT}/{code}"))
    }
}
