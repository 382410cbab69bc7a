use crate::config::Config;
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const TOKEN_URL: &str = "https://oauth2.googleapis.com/token";

/// OAuth token as stored on disk beside the config file.
/// The interactive consent flow is out of scope: the file is provisioned
/// externally, and this module only reads it and exchanges the refresh
/// token when the access token has expired.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredToken {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Unix timestamp after which `access_token` is no longer valid.
    #[serde(default)]
    pub expires_at: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct RefreshResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<i64>,
}

/// Return a usable access token, refreshing and re-saving it if expired.
pub fn access_token(cfg: &Config, now: DateTime<Utc>) -> AppResult<String> {
    let path = Path::new(&cfg.token_file);

    if !path.exists() {
        return Err(AppError::Auth(format!(
            "no token file at {}. Save an OAuth token there as JSON with at least an \
             \"access_token\" field before running collect",
            path.display()
        )));
    }

    let content = fs::read_to_string(path)?;
    let token: StoredToken = serde_json::from_str(&content)?;

    let expired = token
        .expires_at
        .is_some_and(|expiry| expiry <= now.timestamp());

    if !expired {
        return Ok(token.access_token);
    }

    let refreshed = refresh(cfg, &token, now)?;
    fs::write(path, serde_json::to_string_pretty(&refreshed)?)?;
    Ok(refreshed.access_token)
}

fn refresh(cfg: &Config, token: &StoredToken, now: DateTime<Utc>) -> AppResult<StoredToken> {
    let refresh_token = token.refresh_token.as_deref().ok_or_else(|| {
        AppError::Auth("access token expired and no refresh token is stored".to_string())
    })?;

    let (client_id, client_secret) = match (&cfg.google_client_id, &cfg.google_client_secret) {
        (Some(id), Some(secret)) => (id.as_str(), secret.as_str()),
        _ => {
            return Err(AppError::Auth(
                "access token expired; set google_client_id and google_client_secret \
                 in the config to enable refresh"
                    .to_string(),
            ));
        }
    };

    let params = [
        ("client_id", client_id),
        ("client_secret", client_secret),
        ("refresh_token", refresh_token),
        ("grant_type", "refresh_token"),
    ];

    let response = reqwest::blocking::Client::new()
        .post(TOKEN_URL)
        .form(&params)
        .send()?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response
            .text()
            .unwrap_or_else(|_| "could not read error response".to_string());
        return Err(AppError::Auth(format!(
            "token refresh failed: HTTP {} - {}",
            status, body
        )));
    }

    let refreshed: RefreshResponse = response.json()?;

    Ok(StoredToken {
        access_token: refreshed.access_token,
        refresh_token: Some(refresh_token.to_string()),
        expires_at: refreshed.expires_in.map(|secs| now.timestamp() + secs),
    })
}
