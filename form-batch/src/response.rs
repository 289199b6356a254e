//! Read endpoint response body
//!
//! The API wraps results as `{"DATA": {"rows": [{"comment": ...}, ...]}}`.
//! Other keys are ignored.

use crate::error::{ClientError, ClientResult};
use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, Deserialize)]
pub struct FormsResponse {
    #[serde(rename = "DATA")]
    pub data: FormsData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FormsData {
    pub rows: Vec<FormRow>,
}

/// One saved record as returned by the read endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct FormRow {
    /// `None` when the field is present but not a string (e.g. `null`)
    #[serde(deserialize_with = "comment_text")]
    pub comment: Option<String>,
}

fn comment_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => Some(s),
        _ => None,
    })
}

impl FormsResponse {
    /// Parse a raw body, mapping any syntax or shape error to `MalformedResponse`
    pub fn from_slice(body: &[u8]) -> ClientResult<Self> {
        serde_json::from_slice(body).map_err(|e| ClientError::MalformedResponse(e.to_string()))
    }

    pub fn rows(&self) -> &[FormRow] {
        &self.data.rows
    }
}
