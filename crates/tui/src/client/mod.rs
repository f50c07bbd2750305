use api_types::transaction::TransactionRecord;
use reqwest::Url;
use serde::Deserialize;

use crate::error::{AppError, Result};

/// How a fetch can fail, as seen by the screen.
///
/// Only `Offline` is meaningful to the user on its own; the view model
/// collapses every other variant into its generic failure kind.
#[derive(Debug)]
pub enum ClientError {
    /// The request never reached a server (no connectivity).
    Offline,
    /// The server answered with a non-success status.
    Server(String),
    /// The body could not be decoded as a transaction list.
    Decode(reqwest::Error),
    /// Any other transport failure.
    Transport(reqwest::Error),
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}

/// Source of transaction records for one user.
///
/// The screen talks to this trait only, so tests can drive it with a
/// scripted source instead of a live server.
pub trait TransactionSource {
    async fn fetch_transactions(
        &self,
        user_id: i64,
    ) -> std::result::Result<Vec<TransactionRecord>, ClientError>;
}

#[derive(Debug, Clone)]
pub struct Client {
    base_url: Url,
    http: reqwest::Client,
}

impl Client {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|err| AppError::Terminal(format!("invalid base_url: {err}")))?;
        Ok(Self {
            base_url,
            http: reqwest::Client::new(),
        })
    }
}

impl TransactionSource for Client {
    async fn fetch_transactions(
        &self,
        user_id: i64,
    ) -> std::result::Result<Vec<TransactionRecord>, ClientError> {
        let endpoint = self
            .base_url
            .join(&format!("users/{user_id}/transactions"))
            .map_err(|err| ClientError::Server(format!("invalid base_url: {err}")))?;

        tracing::debug!(%endpoint, "requesting transactions");
        let res = self.http.get(endpoint).send().await.map_err(|err| {
            if err.is_connect() {
                ClientError::Offline
            } else {
                ClientError::Transport(err)
            }
        })?;

        if res.status().is_success() {
            return res
                .json::<Vec<TransactionRecord>>()
                .await
                .map_err(ClientError::Decode);
        }

        let status = res.status();
        let body = res
            .json::<ErrorResponse>()
            .await
            .map(|err| err.error)
            .unwrap_or_else(|_| "unknown error".to_string());
        Err(ClientError::Server(format!("{status}: {body}")))
    }
}
