use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Outcome reported by the signage service in every response body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignageStatus {
    Success,
    Error,
}

impl fmt::Display for SignageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "SUCCESS"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

/// Content linked to a single card, as returned by the get/register/update endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSignageLink {
    pub status: SignageStatus,
    pub description: String,
    #[serde(rename = "cardIDm")]
    pub card_idm: String,
    pub url: String,
    #[serde(rename = "displaySeconds")]
    pub display_seconds: u32,
}

impl CardSignageLink {
    pub fn is_success(&self) -> bool {
        self.status == SignageStatus::Success
    }

    /// How long the content stays on screen
    pub fn display_duration(&self) -> Duration {
        Duration::from_secs(u64::from(self.display_seconds))
    }
}

/// One entry of the link listing. Carries no status of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardLink {
    #[serde(rename = "cardIDm")]
    pub card_idm: String,
    pub url: String,
    #[serde(rename = "displaySeconds")]
    pub display_seconds: u32,
}

/// Every card-to-content link owned by the authenticated user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllCardSignageLinks {
    pub status: SignageStatus,
    pub description: String,
    pub links: Vec<CardLink>,
}

impl AllCardSignageLinks {
    pub fn is_success(&self) -> bool {
        self.status == SignageStatus::Success
    }

    /// First link registered for `card_idm`, if any
    pub fn find(&self, card_idm: &str) -> Option<&CardLink> {
        self.links.iter().find(|link| link.card_idm == card_idm)
    }
}

/// Body of register (PUT) and update (PATCH) requests.
///
/// The write API takes `display_seconds` while responses use `displaySeconds`.
#[derive(Debug, Clone, Serialize)]
pub struct ContentRequest<'a> {
    pub url: &'a str,
    pub display_seconds: u32,
}
