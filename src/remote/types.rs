//! Response envelope and error types shared by every endpoint.

use serde::{Deserialize, Serialize};

/// Every response is wrapped as `{result: {status, value}, detail: {...}}`.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub result: EnvelopeResult<T>,

    #[serde(default)]
    pub detail: Option<EnvelopeDetail>,
}

#[derive(Debug, Deserialize)]
pub struct EnvelopeResult<T> {
    #[serde(default = "default_true")]
    pub status: bool,

    pub value: Option<T>,

    #[serde(default)]
    pub error: Option<ServerError>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct EnvelopeDetail {
    #[serde(default)]
    pub description: Option<String>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ServerError {
    #[serde(default)]
    pub code: i64,

    #[serde(default)]
    pub message: String,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{label}: server reported failure (code {code}): {message}")]
    Server {
        label: String,
        code: i64,
        message: String,
    },

    #[error("{label}: response carried no value")]
    MissingValue { label: String },

    #[error("unauthorized (token invalid/expired; run `piadmin login --url ... --username ...`)")]
    Unauthorized,

    #[error("forbidden (the admin account lacks rights for this action)")]
    Forbidden,

    #[error("{0} not found")]
    NotFound(String),

    #[error("preload branch {branch} panicked")]
    BranchPanicked { branch: usize },
}

impl<T> Envelope<T> {
    /// Unwraps `result.value`, turning `status: false` into an [`ApiError`].
    pub fn into_value(self, label: &str) -> Result<T, ApiError> {
        let (value, _) = self.into_value_and_detail(label)?;
        Ok(value)
    }

    pub fn into_value_and_detail(self, label: &str) -> Result<(T, EnvelopeDetail), ApiError> {
        if !self.result.status {
            let err = self.result.error.unwrap_or(ServerError {
                code: 0,
                message: "unknown error".to_string(),
            });
            return Err(ApiError::Server {
                label: label.to_string(),
                code: err.code,
                message: err.message,
            });
        }
        let value = self.result.value.ok_or_else(|| ApiError::MissingValue {
            label: label.to_string(),
        })?;
        Ok((value, self.detail.unwrap_or_default()))
    }
}

#[derive(Debug, Serialize)]
pub(super) struct SetRealmRequest<'a> {
    pub(super) resolvers: &'a str,
}

#[derive(Debug, Serialize)]
pub(super) struct AuthRequest<'a> {
    pub(super) username: &'a str,
    pub(super) password: &'a str,
}

#[derive(Debug, Deserialize)]
pub(super) struct AuthValue {
    pub(super) token: String,
}

#[cfg(test)]
#[path = "../tests/remote/types_tests.rs"]
mod tests;
