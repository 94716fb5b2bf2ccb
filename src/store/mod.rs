use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Duration;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
};

/// Client for the external generic document store. Records of any shape are
/// kept as `json_data` under a caller-chosen data type; the store assigns
/// `_id` values. Every record we write is tagged with this application's
/// identifier so list queries only see our own documents.
#[derive(Clone)]
pub struct DataStore {
    http: reqwest::Client,
    base_url: String,
    bearer_token: SecretString,
    app_identifier: String,
}

/// A record as returned by the store: its id plus the payload we stored.
#[derive(Debug, Deserialize)]
pub struct StoredRecord<T> {
    #[serde(rename = "_id")]
    pub id: String,
    pub json_data: T,
}

#[derive(Debug, Deserialize)]
struct InsertEnvelope {
    success: bool,
    #[serde(default)]
    results: Vec<InsertedId>,
}

#[derive(Debug, Deserialize)]
struct InsertedId {
    inserted_id: String,
}

#[derive(Debug, Deserialize)]
struct FetchOneEnvelope<T> {
    success: bool,
    result: Option<StoredRecord<T>>,
}

#[derive(Debug, Deserialize)]
struct FilterEnvelope<T> {
    success: bool,
    #[serde(default = "Vec::new")]
    results: Vec<StoredRecord<T>>,
}

impl DataStore {
    pub fn new(config: &Config) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .connect_timeout(Duration::from_secs(5))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            http,
            base_url: config.store_base_url.trim_end_matches('/').to_string(),
            bearer_token: config.store_bearer_token.clone(),
            app_identifier: config.app_identifier.clone(),
        }
    }

    /// Insert a record, returning the id the store assigned.
    pub async fn insert<T: Serialize>(
        &self,
        data_type: &str,
        description: &str,
        record: &T,
    ) -> AppResult<String> {
        let body = json!({
            "description": description,
            "json_data": self.tagged(record)?,
        });

        let response = self
            .http
            .post(format!("{}/data/{}", self.base_url, data_type))
            .bearer_auth(self.bearer_token.expose_secret())
            .json(&body)
            .send()
            .await?;

        let envelope: InsertEnvelope = Self::decode(data_type, response).await?;
        envelope
            .results
            .into_iter()
            .next()
            .map(|r| r.inserted_id)
            .ok_or_else(|| {
                AppError::StoreError(format!(
                    "store returned no inserted id for '{}'",
                    data_type
                ))
            })
    }

    /// Replace the record with the given id in place.
    pub async fn replace<T: Serialize>(
        &self,
        data_type: &str,
        id: &str,
        description: &str,
        record: &T,
    ) -> AppResult<()> {
        let body = json!({
            "description": description,
            "json_data": self.tagged(record)?,
        });

        let response = self
            .http
            .put(format!("{}/data/{}/one/{}", self.base_url, data_type, id))
            .bearer_auth(self.bearer_token.expose_secret())
            .json(&body)
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(format!(
                "No '{}' record with id '{}'",
                data_type, id
            )));
        }

        let _: InsertEnvelope = Self::decode(data_type, response).await?;
        Ok(())
    }

    /// Fetch one record by store id. Ok(None) when the store has no record.
    pub async fn fetch_one<T: DeserializeOwned>(
        &self,
        data_type: &str,
        id: &str,
    ) -> AppResult<Option<StoredRecord<T>>> {
        let response = self
            .http
            .get(format!("{}/data/{}/one/{}", self.base_url, data_type, id))
            .bearer_auth(self.bearer_token.expose_secret())
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let envelope: FetchOneEnvelope<T> = Self::decode(data_type, response).await?;
        Ok(envelope.result)
    }

    /// List every record of this type that belongs to this application.
    pub async fn list_owned<T: DeserializeOwned>(
        &self,
        data_type: &str,
    ) -> AppResult<Vec<StoredRecord<T>>> {
        let filter = json!({
            "mongo_filter": {
                "json_data.app_identifier": { "$eq": self.app_identifier }
            }
        });

        let response = self
            .http
            .post(format!("{}/data/{}/filter", self.base_url, data_type))
            .bearer_auth(self.bearer_token.expose_secret())
            .json(&filter)
            .send()
            .await?;

        let envelope: FilterEnvelope<T> = Self::decode(data_type, response).await?;
        Ok(envelope.results)
    }

    /// Serialize a record and stamp the app identifier into it.
    fn tagged<T: Serialize>(&self, record: &T) -> AppResult<serde_json::Value> {
        let mut value = serde_json::to_value(record)?;
        match value.as_object_mut() {
            Some(map) => {
                map.insert(
                    "app_identifier".to_string(),
                    json!(self.app_identifier),
                );
                Ok(value)
            }
            None => Err(AppError::InternalError(
                "store records must serialize to JSON objects".to_string(),
            )),
        }
    }

    async fn decode<E: DeserializeOwned + EnvelopeStatus>(
        data_type: &str,
        response: reqwest::Response,
    ) -> AppResult<E> {
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::StoreError(format!(
                "store responded {} for '{}'",
                status, data_type
            )));
        }

        let envelope: E = response.json().await?;
        if !envelope.success() {
            return Err(AppError::StoreError(format!(
                "store reported failure for '{}'",
                data_type
            )));
        }
        Ok(envelope)
    }
}

trait EnvelopeStatus {
    fn success(&self) -> bool;
}

impl EnvelopeStatus for InsertEnvelope {
    fn success(&self) -> bool {
        self.success
    }
}

impl<T> EnvelopeStatus for FetchOneEnvelope<T> {
    fn success(&self) -> bool {
        self.success
    }
}

impl<T> EnvelopeStatus for FilterEnvelope<T> {
    fn success(&self) -> bool {
        self.success
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::Quiz;

    #[test]
    fn test_data_store_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DataStore>();
    }

    #[test]
    fn tagged_record_carries_app_identifier() {
        let store = DataStore::new(&Config::test_config());
        let quiz = Quiz {
            title: "Basics".to_string(),
            questions: vec![],
        };

        let value = store.tagged(&quiz).expect("quiz serializes to an object");
        assert_eq!(value["app_identifier"], "quizlink-test");
        assert_eq!(value["title"], "Basics");
    }

    #[test]
    fn tagged_rejects_non_object_records() {
        let store = DataStore::new(&Config::test_config());
        let result = store.tagged(&"just a string");
        assert!(result.is_err());
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let mut config = Config::test_config();
        config.store_base_url = "http://localhost:3030/".to_string();

        let store = DataStore::new(&config);
        assert_eq!(store.base_url, "http://localhost:3030");
    }

    #[test]
    fn insert_envelope_parses_store_response() {
        let json = r#"{"success": true, "results": [{"inserted_id": "abc123"}]}"#;
        let envelope: InsertEnvelope = serde_json::from_str(json).expect("envelope parses");

        assert!(envelope.success);
        assert_eq!(envelope.results[0].inserted_id, "abc123");
    }

    #[test]
    fn filter_envelope_tolerates_missing_results() {
        let json = r#"{"success": true}"#;
        let envelope: FilterEnvelope<Quiz> =
            serde_json::from_str(json).expect("envelope parses");

        assert!(envelope.results.is_empty());
    }
}
