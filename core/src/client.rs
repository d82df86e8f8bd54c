//! Stateless HTTP request builder and response parser for the person API.
//!
//! # Design
//! `PersonClient` holds only the collection URL and carries no mutable state
//! between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. The caller executes the actual HTTP round-trip.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{EmailAddressesRequest, Filter, NewPerson, PersonRecord, PhoneNumbersRequest};

/// Collection endpoint of a locally running API.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api/v1/persons/";

/// Synchronous, stateless client for the person API.
#[derive(Debug, Clone)]
pub struct PersonClient {
    collection_url: String,
}

impl Default for PersonClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl PersonClient {
    /// `base_url` is the person collection endpoint. It is normalized to end
    /// in exactly one `/`.
    pub fn new(base_url: &str) -> Self {
        Self {
            collection_url: format!("{}/", base_url.trim_end_matches('/')),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.collection_url
    }

    pub fn build_create_person(&self, input: &NewPerson) -> Result<HttpRequest, ApiError> {
        self.json_post(self.collection_url.clone(), input)
    }

    /// The query is appended only when the filter has at least one key.
    pub fn build_list_persons(&self, filter: &Filter) -> HttpRequest {
        let path = match filter.query_string() {
            Some(query) => format!("{}?{query}", self.collection_url),
            None => self.collection_url.clone(),
        };
        HttpRequest {
            method: HttpMethod::Get,
            path,
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_get_person(&self, id: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.item_path(id),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_delete_person(&self, id: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: self.item_path(id),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_add_phone_numbers(
        &self,
        id: &str,
        input: &PhoneNumbersRequest,
    ) -> Result<HttpRequest, ApiError> {
        self.json_post(format!("{}/phone-numbers", self.item_path(id)), input)
    }

    pub fn build_add_email_addresses(
        &self,
        id: &str,
        input: &EmailAddressesRequest,
    ) -> Result<HttpRequest, ApiError> {
        self.json_post(format!("{}/addresses", self.item_path(id)), input)
    }

    pub fn parse_create_person(&self, response: HttpResponse) -> Result<PersonRecord, ApiError> {
        parse_json(response)
    }

    pub fn parse_list_persons(&self, response: HttpResponse) -> Result<Vec<PersonRecord>, ApiError> {
        parse_json(response)
    }

    pub fn parse_get_person(&self, response: HttpResponse) -> Result<PersonRecord, ApiError> {
        parse_json(response)
    }

    pub fn parse_add_phone_numbers(&self, response: HttpResponse) -> Result<PersonRecord, ApiError> {
        parse_json(response)
    }

    pub fn parse_add_email_addresses(
        &self,
        response: HttpResponse,
    ) -> Result<PersonRecord, ApiError> {
        parse_json(response)
    }

    pub fn parse_delete_person(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)?;
        Ok(())
    }

    // The id is opaque and goes into the path untouched.
    fn item_path(&self, id: &str) -> String {
        format!("{}{id}", self.collection_url)
    }

    fn json_post<T: Serialize>(&self, path: String, input: &T) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path,
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }
}

fn parse_json<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    check_status(&response)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

/// Map non-2xx status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound {
            body: response.body.clone(),
        });
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}
