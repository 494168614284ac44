use gloo_net::http::Request;
use log::{debug, warn};
use serde::Serialize;
use serde_json::Value;
use std::rc::Rc;

use super::error::StoreError;
use crate::config;

/// Insert-one access to a remote table. Any `Ok` counts as a stored row.
#[allow(async_fn_in_trait)]
pub trait RecordStore {
    async fn insert_one<R: Serialize + ?Sized>(
        &self,
        collection: &str,
        record: &R,
    ) -> Result<Vec<Value>, StoreError>;
}

impl<S: RecordStore + ?Sized> RecordStore for Rc<S> {
    async fn insert_one<R: Serialize + ?Sized>(
        &self,
        collection: &str,
        record: &R,
    ) -> Result<Vec<Value>, StoreError> {
        (**self).insert_one(collection, record).await
    }
}

/// Supabase table access through its PostgREST endpoint.
#[derive(Clone, Debug)]
pub struct SupabaseStore {
    base_url: String,
    anon_key: String,
}

impl SupabaseStore {
    pub fn new(base_url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            anon_key: anon_key.into(),
        }
    }

    pub fn from_config() -> Self {
        Self::new(config::get_supabase_url(), config::get_supabase_anon_key())
    }

    pub fn table_url(&self, collection: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url.trim_end_matches('/'), collection)
    }
}

impl RecordStore for SupabaseStore {
    async fn insert_one<R: Serialize + ?Sized>(
        &self,
        collection: &str,
        record: &R,
    ) -> Result<Vec<Value>, StoreError> {
        let payload = serde_json::to_string(record).map_err(|e| StoreError::Encode(e.to_string()))?;

        let response = Request::post(&self.table_url(collection))
            .header("apikey", &self.anon_key)
            .header("Authorization", &format!("Bearer {}", self.anon_key))
            .header("Content-Type", "application/json")
            .header("Prefer", "return=minimal")
            .body(payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if !response.ok() {
            warn!("Insert into {} failed with status: {}", collection, status);
            return Err(StoreError::from_response(status, &body));
        }

        debug!("Insert into {} accepted with status: {}", collection, status);
        Ok(parse_rows(&body))
    }
}

// `return=minimal` gives an empty body; a representation may be an array or one object.
fn parse_rows(body: &str) -> Vec<Value> {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Array(rows)) => rows,
        Ok(Value::Null) | Err(_) => Vec::new(),
        Ok(row) => vec![row],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn table_url_joins_rest_path() {
        let store = SupabaseStore::new("https://abc.supabase.co/", "anon");
        assert_eq!(
            store.table_url("contact_submissions"),
            "https://abc.supabase.co/rest/v1/contact_submissions"
        );
    }

    #[test]
    fn rows_from_any_success_body() {
        assert!(parse_rows("").is_empty());
        assert!(parse_rows("null").is_empty());
        assert_eq!(parse_rows(r#"[{"id":1}]"#), vec![json!({"id": 1})]);
        assert_eq!(parse_rows(r#"{"id":2}"#), vec![json!({"id": 2})]);
    }
}
