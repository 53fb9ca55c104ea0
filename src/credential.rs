//! Basic-auth credentials for the signage API.
//!
//! The `Authorization` value is derived once from the username/password pair
//! and attached to every request the client sends.

use std::fmt;

use base64::Engine;
use reqwest::header::{HeaderValue, InvalidHeaderValue};

/// Username/password pair used for HTTP Basic authentication.
#[derive(Clone)]
pub struct BasicCredentials {
    pub username: String,
    password: String,
}

impl BasicCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// `Basic <base64(username:password)>`
    pub fn authorization_value(&self) -> String {
        let raw = format!("{}:{}", self.username, self.password);
        format!(
            "Basic {}",
            base64::engine::general_purpose::STANDARD.encode(raw)
        )
    }

    /// The authorization value as a header, flagged sensitive so it is
    /// left out of reqwest's debug output.
    pub fn header_value(&self) -> Result<HeaderValue, InvalidHeaderValue> {
        let mut value = HeaderValue::from_str(&self.authorization_value())?;
        value.set_sensitive(true);
        Ok(value)
    }
}

impl fmt::Debug for BasicCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
