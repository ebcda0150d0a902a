//! Fetches the package document from the emote API and lists the emotes inside it.
//!
//! # Example usage
//!
//! ```no_run
//! use bili_emote_downloader::emotes::extractor::PackageExtractor;
//! use bili_emote_downloader::emotes::BILIBILI_EMOTE_API;
//! use reqwest::Client;
//!
//! async fn list_emotes() {
//!     let client = Client::builder().build().unwrap();
//!
//!     let extractor = PackageExtractor::new(client, BILIBILI_EMOTE_API, "7067");
//!
//!     let response = extractor.fetch().await.unwrap();
//!
//!     for emote in response.emotes() {
//!         println!("{} -> {}", emote.name, emote.url);
//!     }
//! }
//! ```
use log::{debug, warn};
use reqwest::Client;
use serde_json::Value;

use self::models::ApiStatus;
use super::{emote::Emote, BILIBILI_EMOTE_QUERY};

pub use self::error::ExtractorError;

mod error;
pub mod models;

/// Builds the request URL. `ids` is inserted as-is, without any escaping.
#[inline]
pub fn request_url(api_prefix: &str, ids: &str) -> String {
    format!("{}{}{}", api_prefix, ids, BILIBILI_EMOTE_QUERY)
}

/// Walks `data.packages[*].emote[*]` in document order.
pub fn collect_emotes(document: &Value) -> Vec<Emote> {
    let mut emotes = Vec::new();

    for package in models::packages(document) {
        let package_name = models::text(package);

        for emote in models::package_emotes(package) {
            emotes.push(Emote::new(
                package_name,
                models::text(emote),
                models::webp_url(emote),
            ));
        }
    }

    emotes
}

/// The parsed API document together with the emotes found in it.
#[derive(Debug)]
pub struct PackageResponse {
    document: Value,
    emotes: Vec<Emote>,
}

impl PackageResponse {
    pub fn from_document(document: Value) -> Self {
        let emotes = collect_emotes(&document);
        Self { document, emotes }
    }

    #[inline]
    pub fn document(&self) -> &Value {
        &self.document
    }

    #[inline]
    pub fn emotes(&self) -> &[Emote] {
        &self.emotes
    }

    pub fn into_parts(self) -> (Value, Vec<Emote>) {
        (self.document, self.emotes)
    }
}

pub struct PackageExtractor {
    client: Client,
    url: String,
}

impl PackageExtractor {
    pub fn new(client: Client, api_prefix: &str, ids: &str) -> Self {
        Self {
            client,
            url: request_url(api_prefix, ids),
        }
    }

    #[inline]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Requests the package document and parses it.
    ///
    /// The HTTP status is not looked at: whatever body comes back must be valid JSON.
    pub async fn fetch(&self) -> Result<PackageResponse, ExtractorError> {
        debug!("Fetching {}", &self.url);
        let body = self.client.get(&self.url).send().await?.bytes().await?;

        debug!("Received {} bytes, parsing", body.len());
        let document: Value = serde_json::from_slice(&body)?;

        let status = ApiStatus::from_document(&document);
        if !status.is_ok() {
            warn!(
                "Emote API answered with code {}: {}",
                status.code, status.message
            );
        }

        let response = PackageResponse::from_document(document);
        debug!(
            "{} packages, {} emotes",
            models::packages(response.document()).len(),
            response.emotes().len()
        );

        Ok(response)
    }
}
