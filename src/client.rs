use std::fmt;

use anyhow::{Context, Result};
use reqwest::header::{AUTHORIZATION, HeaderValue};
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::credential::BasicCredentials;
use crate::types::{AllCardSignageLinks, CardSignageLink, ContentRequest};

const CARDS_PATH: [&str; 4] = ["api", "v1", "signage", "cards"];

pub const BASE_URL_ENV: &str = "SIGNAGE_BASE_URL";
pub const USERNAME_ENV: &str = "SIGNAGE_USERNAME";
pub const PASSWORD_ENV: &str = "SIGNAGE_PASSWORD";

/// Configuration for SignageApiClient
#[derive(Clone)]
pub struct SignageConfig {
    /// Root of the signage service, e.g. `https://signage.example.com`
    pub base_url: String,
    pub username: String,
    pub password: String,
}

impl SignageConfig {
    pub fn new(
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            username: username.into(),
            password: password.into(),
        }
    }

    /// Read `SIGNAGE_BASE_URL`, `SIGNAGE_USERNAME` and `SIGNAGE_PASSWORD`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |key: &str| {
            lookup(key).with_context(|| format!("Missing environment variable {}", key))
        };

        Ok(Self {
            base_url: require(BASE_URL_ENV)?,
            username: require(USERNAME_ENV)?,
            password: require(PASSWORD_ENV)?,
        })
    }
}

impl fmt::Debug for SignageConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignageConfig")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Client for the `/api/v1/signage/cards` endpoints.
///
/// Every call is a single request with no retry. Transport failures, non-2xx
/// statuses and undecodable bodies all surface as the underlying
/// `reqwest::Error`, reachable through `anyhow::Error::downcast_ref`.
#[derive(Clone)]
pub struct SignageApiClient {
    http_client: Client,
    base_url: Url,
    credentials: BasicCredentials,
    authorization: HeaderValue,
}

impl SignageApiClient {
    pub fn new(
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self> {
        Self::with_config(SignageConfig::new(base_url, username, password))
    }

    pub fn with_config(config: SignageConfig) -> Result<Self> {
        let http_client = Client::builder().build()?;
        Self::with_http_client(config, http_client)
    }

    /// Use a caller-provided transport, e.g. one with its own timeouts
    pub fn with_http_client(config: SignageConfig, http_client: Client) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)
            .with_context(|| format!("Invalid signage base URL: {}", config.base_url))?;
        if base_url.cannot_be_a_base() {
            anyhow::bail!("Signage base URL cannot carry a path: {}", config.base_url);
        }

        let credentials = BasicCredentials::new(config.username, config.password);
        let authorization = credentials
            .header_value()
            .context("Credentials do not form a valid Authorization header")?;

        Ok(Self {
            http_client,
            base_url,
            credentials,
            authorization,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn credentials(&self) -> &BasicCredentials {
        &self.credentials
    }

    /// `GET /api/v1/signage/cards/{cardIDm}`
    pub async fn get_content_by_card_idm(&self, card_idm: &str) -> Result<CardSignageLink> {
        let url = self.card_url(Some(card_idm))?;
        self.send(self.request(Method::GET, url)).await
    }

    /// `GET /api/v1/signage/cards`
    pub async fn get_all_card_idm_and_content_list(&self) -> Result<AllCardSignageLinks> {
        let url = self.card_url(None)?;
        self.send(self.request(Method::GET, url)).await
    }

    /// `PUT /api/v1/signage/cards/{cardIDm}`
    pub async fn register_content_by_card_idm(
        &self,
        card_idm: &str,
        url: &str,
        display_seconds: u32,
    ) -> Result<CardSignageLink> {
        self.write_content(Method::PUT, card_idm, url, display_seconds)
            .await
    }

    /// `PATCH /api/v1/signage/cards/{cardIDm}`
    pub async fn update_content_by_card_idm(
        &self,
        card_idm: &str,
        url: &str,
        display_seconds: u32,
    ) -> Result<CardSignageLink> {
        self.write_content(Method::PATCH, card_idm, url, display_seconds)
            .await
    }

    async fn write_content(
        &self,
        method: Method,
        card_idm: &str,
        url: &str,
        display_seconds: u32,
    ) -> Result<CardSignageLink> {
        let endpoint = self.card_url(Some(card_idm))?;
        let body = ContentRequest {
            url,
            display_seconds,
        };

        // json() also sets Content-Type: application/json
        self.send(self.request(method, endpoint).json(&body)).await
    }

    /// Cards collection URL, or a single card when `card_idm` is given.
    /// The id is appended as one percent-encoded path segment.
    fn card_url(&self, card_idm: Option<&str>) -> Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| anyhow::anyhow!("Base URL cannot carry a path: {}", self.base_url))?;
            segments.pop_if_empty().extend(CARDS_PATH);
            if let Some(card_idm) = card_idm {
                segments.push(card_idm);
            }
        }
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        self.http_client
            .request(method, url)
            .header(AUTHORIZATION, self.authorization.clone())
    }

    /// Send a single request and decode the body. Errors pass through untouched.
    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let request = builder.build()?;
        let method = request.method().clone();
        let url = request.url().clone();

        debug!(method = %method, url = %url, "Sending signage request");
        let response = self.http_client.execute(request).await?;

        let status = response.status();
        if status.is_success() {
            debug!(method = %method, url = %url, status = %status, "Signage request succeeded");
        } else {
            warn!(method = %method, url = %url, status = %status, "Signage request failed");
        }

        let response = response.error_for_status()?;
        Ok(response.json::<T>().await?)
    }
}
