//! Remote app registration against a Mastodon instance.

use serde::{Deserialize, Serialize};
use std::str;
use std::time::Duration;

use crate::config::RegistryConfig;
use crate::error::ShellError;

/// Application credentials returned by `POST /api/v1/apps`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredApp {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default)]
    pub scopes: Vec<String>,
    #[serde(default)]
    pub redirect_uris: Vec<String>,
    pub client_id: String,
    pub client_secret: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_secret_expires_at: Option<i64>,
}

/// Form fields sent when registering the reader with an instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationForm {
    pub client_name: String,
    pub website: String,
    pub redirect_uris: String,
    pub scopes: String,
}

impl RegistrationForm {
    pub fn from_config(cfg: &RegistryConfig) -> Self {
        Self {
            client_name: cfg.client_name.clone(),
            website: cfg.website.clone(),
            redirect_uris: cfg.redirect_uri.clone(),
            scopes: cfg.scopes.clone(),
        }
    }

    /// `application/x-www-form-urlencoded` body.
    pub fn encode(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .append_pair("client_name", &self.client_name)
            .append_pair("website", &self.website)
            .append_pair("redirect_uris", &self.redirect_uris)
            .append_pair("scopes", &self.scopes)
            .finish()
    }
}

/// Creates an app registration on an instance.
pub trait Registrar {
    fn register(&self, instance: &str, form: &RegistrationForm) -> Result<RegisteredApp, ShellError>;
}

/// Registers over HTTPS with libcurl.
///
/// Blocking; call from `spawn_blocking` if used from async code.
#[derive(Debug, Clone, Default)]
pub struct CurlRegistrar;

impl Registrar for CurlRegistrar {
    fn register(&self, instance: &str, form: &RegistrationForm) -> Result<RegisteredApp, ShellError> {
        let endpoint = format!("https://{instance}/api/v1/apps");
        let fail = |reason: String| ShellError::Registration {
            instance: instance.to_string(),
            reason,
        };
        let curl_err = |e: curl::Error| fail(e.to_string());

        let mut body: Vec<u8> = Vec::new();
        let mut easy = curl::easy::Easy::new();
        easy.url(&endpoint).map_err(curl_err)?;
        easy.post(true).map_err(curl_err)?;
        easy.post_fields_copy(form.encode().as_bytes())
            .map_err(curl_err)?;
        easy.connect_timeout(Duration::from_secs(15)).map_err(curl_err)?;
        easy.timeout(Duration::from_secs(30)).map_err(curl_err)?;

        {
            let mut transfer = easy.transfer();
            transfer
                .write_function(|data| {
                    body.extend_from_slice(data);
                    Ok(data.len())
                })
                .map_err(curl_err)?;
            transfer.perform().map_err(curl_err)?;
        }

        let code = easy.response_code().map_err(curl_err)?;
        parse_registration(code, &body).map_err(fail)
    }
}

/// Interprets the registration response. Status >= 400 carries the body as the reason.
fn parse_registration(code: u32, body: &[u8]) -> Result<RegisteredApp, String> {
    if code >= 400 {
        let text = str::from_utf8(body).unwrap_or("<non-utf8 body>").trim();
        return Err(format!("HTTP {code}: {text}"));
    }
    serde_json::from_slice(body).map_err(|e| format!("invalid app JSON: {e}"))
}
