//! Collaborators the session controller talks to. The browser implementations live in
//! `storage` and `audio`; tests swap in recording fakes.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    Start,
    ThemeSelect,
    Game,
    Complete,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sound {
    Click,
    Accepted,
    Rejected,
    SessionComplete,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("local storage is not available")]
    Unavailable,

    #[error("storage rejected write of {key}")]
    WriteRejected { key: &'static str },

    #[error("failed to encode {key}")]
    Encode {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

pub trait ScreenNavigator {
    fn show(&mut self, screen: Screen);
}

/// Fire-and-forget; implementations swallow their own failures.
pub trait AudioFeedback {
    fn play(&mut self, sound: Sound);
}

pub trait CoinStore {
    /// `None` when nothing (or nothing parseable) is stored.
    fn load(&self) -> Option<u64>;
    fn save(&mut self, coins: u64) -> Result<(), StoreError>;
}
