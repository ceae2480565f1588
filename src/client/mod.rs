//! HTTP client for the iFirma API: configuration, request signing, and the
//! invoice commands (create, fetch, download, send).
//!
//! # Example
//!
//! ```ignore
//! use ifirma::client::{Config, Ifirma};
//! use ifirma::mapping::AttrTree;
//!
//! let client = Ifirma::new(Config {
//!     username: "acme".into(),
//!     invoices_key: "0123456789abcdef".into(),
//! })?;
//!
//! let response = client.create_invoice(&attrs).await?;
//! assert!(response.success());
//! println!("created {}", response.full_number().unwrap_or("?"));
//! ```

mod auth;

pub use auth::{AUTH_HEADER, INVOICES_KEY_NAME, RequestSigner};

use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::mapping::{AttrTree, AttributeMapper, MappingConfig, MappingError};
use crate::response::Response;

const DEFAULT_BASE_URL: &str = "https://www.ifirma.pl";
const CREATE_INVOICE_PATH: &str = "/iapi/fakturakraj.json";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors from the client layer.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ClientError {
    /// Invalid or missing configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// The attribute-mapping walk failed.
    #[error(transparent)]
    Mapping(#[from] MappingError),

    /// Network failure or non-success HTTP status.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The response body was not the expected JSON shape.
    #[error("unexpected response: {0}")]
    Parse(String),

    /// The service answered, but reported an error code.
    #[error("service error {code}: {message}")]
    Api { code: i64, message: String },
}

/// Account credentials.
///
/// `invoices_key` is the hex-encoded API key for the invoice endpoints,
/// as shown in the iFirma account settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub username: String,
    pub invoices_key: String,
}

/// Rendered document formats the service can produce for an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Html,
}

impl DocumentFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Html => "html",
        }
    }
}

/// Options for [`Ifirma::send_invoice`], serialized as the send-request
/// body. The defaults mirror the service's documented sample request.
#[derive(Debug, Clone, Serialize)]
pub struct SendOptions {
    /// Message text of the e-mail the service sends.
    #[serde(rename = "Tekst")]
    pub text: String,
    /// Include wire-transfer payment details.
    #[serde(rename = "Przelew")]
    pub wire_transfer: bool,
    /// Include collect-on-delivery payment details.
    #[serde(rename = "Pobranie")]
    pub collect_on_delivery: bool,
    /// Online transfer service identifier.
    #[serde(rename = "MTransfer")]
    pub transfer_service: String,
}

impl Default for SendOptions {
    fn default() -> Self {
        Self {
            text: "Tresc wiadomosci".into(),
            wire_transfer: true,
            collect_on_delivery: true,
            transfer_service: "mtransfer".into(),
        }
    }
}

/// The iFirma API client.
///
/// Holds the HTTP connection pool, the request signer, and the mapping
/// tables — all constructed once in [`Ifirma::new`].
#[derive(Debug, Clone)]
pub struct Ifirma {
    http: reqwest::Client,
    signer: RequestSigner,
    mapping: MappingConfig,
    base_url: String,
}

impl Ifirma {
    /// Build a client against the production endpoint.
    pub fn new(config: Config) -> Result<Self, ClientError> {
        Self::with_base_url(config, DEFAULT_BASE_URL)
    }

    /// Build a client against a different endpoint (tests, proxies).
    pub fn with_base_url(config: Config, base_url: impl Into<String>) -> Result<Self, ClientError> {
        let signer = RequestSigner::new(
            config.username.as_str(),
            &config.invoices_key,
            INVOICES_KEY_NAME,
        )?;

        let mut headers = HeaderMap::new();
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/json; charset=utf-8"),
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .default_headers(headers)
            .build()
            .map_err(|e| ClientError::Http(e.to_string()))?;

        let base_url = base_url.into();
        Ok(Self {
            http,
            signer,
            mapping: MappingConfig::domestic_invoice(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The mapping tables this client translates with.
    pub fn mapping(&self) -> &MappingConfig {
        &self.mapping
    }

    /// Create a domestic invoice from an attribute tree.
    pub async fn create_invoice(&self, attrs: &AttrTree) -> Result<Response, ClientError> {
        let wire = AttributeMapper::new(&self.mapping.fields, &self.mapping.values).map(attrs)?;
        self.post_json(CREATE_INVOICE_PATH, &Value::Object(wire)).await
    }

    /// Fetch an invoice's JSON record.
    pub async fn get_invoice(&self, invoice_id: u64) -> Result<Response, ClientError> {
        self.get_json(&invoice_record_path(invoice_id)).await
    }

    /// Download a rendered invoice document.
    ///
    /// Fetches the JSON record first and turns a service-side failure into
    /// [`ClientError::Api`] before requesting the document bytes.
    pub async fn download_invoice(
        &self,
        invoice_id: u64,
        format: DocumentFormat,
    ) -> Result<Vec<u8>, ClientError> {
        let record = self.get_invoice(invoice_id).await?;
        if !record.success() {
            return Err(api_error(&record));
        }

        let resp = self.get_raw(&invoice_document_path(invoice_id, format)).await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ClientError::Http(format!("HTTP {status}")));
        }
        let bytes = resp
            .bytes()
            .await
            .map_err(|e| ClientError::Http(e.to_string()))?;
        Ok(bytes.to_vec())
    }

    /// E-mail an invoice to its customer.
    ///
    /// Resolves the invoice's full number first; the send endpoint is
    /// addressed by the full number with `/` flattened to `_`.
    pub async fn send_invoice(
        &self,
        invoice_id: u64,
        options: &SendOptions,
    ) -> Result<Response, ClientError> {
        let record = self.get_invoice(invoice_id).await?;
        if !record.success() {
            return Err(api_error(&record));
        }
        let full_number = record
            .full_number()
            .ok_or_else(|| ClientError::Parse("invoice record carries no PelnyNumer".into()))?;

        let body =
            serde_json::to_value(options).map_err(|e| ClientError::Parse(e.to_string()))?;
        self.post_json(&send_path(full_number), &body).await
    }

    async fn get_json(&self, path: &str) -> Result<Response, ClientError> {
        let resp = self.get_raw(path).await?;
        decode_response(resp).await
    }

    async fn get_raw(&self, path: &str) -> Result<reqwest::Response, ClientError> {
        let url = format!("{}{path}", self.base_url);
        let auth = self.signer.authentication_header(&url, "");
        self.http
            .get(&url)
            .header(AUTH_HEADER, auth)
            .send()
            .await
            .map_err(|e| ClientError::Http(e.to_string()))
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Response, ClientError> {
        let url = format!("{}{path}", self.base_url);
        // The signature covers the exact serialized body, so serialize once
        // and send those same bytes.
        let body = serde_json::to_string(body).map_err(|e| ClientError::Parse(e.to_string()))?;
        let auth = self.signer.authentication_header(&url, &body);
        let resp = self
            .http
            .post(&url)
            .header(AUTH_HEADER, auth)
            .body(body)
            .send()
            .await
            .map_err(|e| ClientError::Http(e.to_string()))?;
        decode_response(resp).await
    }
}

async fn decode_response(resp: reqwest::Response) -> Result<Response, ClientError> {
    let status = resp.status();
    let text = resp
        .text()
        .await
        .map_err(|e| ClientError::Http(e.to_string()))?;

    if !status.is_success() {
        return Err(ClientError::Http(format!("HTTP {status}: {text}")));
    }

    let raw: Value =
        serde_json::from_str(&text).map_err(|e| ClientError::Parse(e.to_string()))?;
    Response::from_envelope(raw)
        .ok_or_else(|| ClientError::Parse("missing response envelope".into()))
}

fn api_error(record: &Response) -> ClientError {
    ClientError::Api {
        code: record.code().unwrap_or(-1),
        message: record.message().unwrap_or("unknown error").to_string(),
    }
}

fn invoice_record_path(invoice_id: u64) -> String {
    format!("/iapi/fakturakraj/{invoice_id}.json")
}

fn invoice_document_path(invoice_id: u64, format: DocumentFormat) -> String {
    format!("/iapi/fakturakraj/{invoice_id}.{}", format.extension())
}

fn send_path(full_number: &str) -> String {
    format!("/iapi/fakturakraj/send/{}.json", full_number.replace('/', "_"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn paths() {
        assert_eq!(invoice_record_path(12345), "/iapi/fakturakraj/12345.json");
        assert_eq!(
            invoice_document_path(12345, DocumentFormat::Pdf),
            "/iapi/fakturakraj/12345.pdf"
        );
        assert_eq!(
            send_path("12/2023"),
            "/iapi/fakturakraj/send/12_2023.json"
        );
    }

    #[test]
    fn send_options_serialization() {
        let body = serde_json::to_value(SendOptions::default()).unwrap();
        assert_eq!(
            body,
            json!({
                "Tekst": "Tresc wiadomosci",
                "Przelew": true,
                "Pobranie": true,
                "MTransfer": "mtransfer"
            })
        );
    }

    #[test]
    fn api_error_carries_code_and_message() {
        let record = Response::new(json!({"Kod": 202, "Informacja": "Brak faktury"}));
        match api_error(&record) {
            ClientError::Api { code, message } => {
                assert_eq!(code, 202);
                assert_eq!(message, "Brak faktury");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = Ifirma::with_base_url(
            Config {
                username: "acme".into(),
                invoices_key: "0b0b0b0b".into(),
            },
            "http://localhost:8080/",
        )
        .unwrap();
        assert_eq!(client.base_url, "http://localhost:8080");
    }
}
