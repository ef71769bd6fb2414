//! HTTP client for the character document endpoint.
//!
//! The endpoint is a key-value document store: `GET` returns the full
//! collection wrapped in a `{ "body": [...] }` envelope (or a
//! distinguished not-found message), `POST` replaces it wholesale.

use async_trait::async_trait;
use serde::Deserialize;
use sheet_core::Character;
use thiserror::Error;

/// Message the endpoint returns when no document exists yet.
const NOT_FOUND_MESSAGE: &str = "Item not found";

/// Errors from the persistence endpoint.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Endpoint error (status {status}): {message}")]
    Endpoint { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    Parse(String),
}

/// Envelope wrapping load responses.
#[derive(Debug, Deserialize)]
struct LoadEnvelope {
    body: Option<Vec<Character>>,
    message: Option<String>,
}

/// `Ok(None)` means the endpoint has no document yet; callers treat
/// that as an empty collection.
fn interpret_envelope(envelope: LoadEnvelope) -> Result<Option<Vec<Character>>, StoreError> {
    if envelope.message.as_deref() == Some(NOT_FOUND_MESSAGE) {
        return Ok(None);
    }
    match envelope.body {
        Some(characters) => Ok(Some(characters)),
        None => Err(StoreError::Parse(
            "load response has neither body nor not-found message".to_string(),
        )),
    }
}

/// Abstraction over the persistence endpoint, so the sync worker can
/// be exercised without a network.
#[async_trait]
pub trait CharacterStore: Send + Sync + 'static {
    /// Fetch the stored collection; `None` when no document exists.
    async fn load(&self) -> Result<Option<Vec<Character>>, StoreError>;

    /// Replace the stored collection with the given one.
    async fn save(&self, characters: &[Character]) -> Result<(), StoreError>;
}

/// Client for the character document endpoint.
#[derive(Clone)]
pub struct SheetClient {
    client: reqwest::Client,
    url: String,
}

impl SheetClient {
    /// Create a client for the given document URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .connect_timeout(std::time::Duration::from_secs(10))
                .build()
                .expect("Failed to build HTTP client"),
            url: url.into(),
        }
    }
}

#[async_trait]
impl CharacterStore for SheetClient {
    async fn load(&self) -> Result<Option<Vec<Character>>, StoreError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Endpoint {
                status,
                message: body,
            });
        }

        let envelope: LoadEnvelope = response
            .json()
            .await
            .map_err(|e| StoreError::Parse(e.to_string()))?;

        interpret_envelope(envelope)
    }

    async fn save(&self, characters: &[Character]) -> Result<(), StoreError> {
        let response = self
            .client
            .post(&self.url)
            .json(&characters)
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Endpoint {
                status,
                message: body,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_envelope_yields_characters() {
        let envelope: LoadEnvelope = serde_json::from_str(
            r#"{ "body": [ { "name": "Character 1",
                  "attributes": { "Strength": 11, "Dexterity": 10,
                                  "Constitution": 10, "Intelligence": 10,
                                  "Wisdom": 10, "Charisma": 10 },
                  "skills": [ { "name": "Acrobatics", "points": 2,
                                "attributeModifier": "Dexterity" } ] } ] }"#,
        )
        .unwrap();

        let characters = interpret_envelope(envelope).unwrap().unwrap();
        assert_eq!(characters.len(), 1);
        assert_eq!(characters[0].name, "Character 1");
        assert_eq!(characters[0].attributes.strength, 11);
        assert_eq!(characters[0].skills[0].points, 2);
    }

    #[test]
    fn test_not_found_envelope_is_empty_collection() {
        let envelope: LoadEnvelope =
            serde_json::from_str(r#"{ "message": "Item not found" }"#).unwrap();
        assert!(interpret_envelope(envelope).unwrap().is_none());
    }

    #[test]
    fn test_other_message_without_body_is_a_parse_error() {
        let envelope: LoadEnvelope =
            serde_json::from_str(r#"{ "message": "Internal error" }"#).unwrap();
        assert!(matches!(
            interpret_envelope(envelope),
            Err(StoreError::Parse(_))
        ));
    }

    #[test]
    fn test_empty_body_is_a_valid_empty_collection() {
        let envelope: LoadEnvelope = serde_json::from_str(r#"{ "body": [] }"#).unwrap();
        let characters = interpret_envelope(envelope).unwrap().unwrap();
        assert!(characters.is_empty());
    }
}
