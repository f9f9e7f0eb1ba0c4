//! `localStorage` persistence: the coin balance and the small settings blob.

use serde::{Deserialize, Serialize};
use web_sys::Storage;

use crate::host::{CoinStore, StoreError};
use crate::util::cwarn;

pub const COIN_BALANCE_KEY: &str = "puzzleCoins";
pub const SETTINGS_KEY: &str = "puzzleSettings";

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub sound_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self { sound_enabled: true }
    }
}

/// Stored as a plain decimal string; anything unparseable reads as "no balance".
pub fn parse_coins(raw: &str) -> Option<u64> {
    raw.trim().parse::<u64>().ok()
}

pub fn parse_settings(raw: &str) -> Settings {
    serde_json::from_str(raw).unwrap_or_default()
}

pub fn load_settings() -> Settings {
    local_storage()
        .and_then(|store| store.get_item(SETTINGS_KEY).ok().flatten())
        .map(|raw| parse_settings(&raw))
        .unwrap_or_default()
}

pub fn save_settings(settings: &Settings) -> Result<(), StoreError> {
    let store = local_storage().ok_or(StoreError::Unavailable)?;
    let raw = serde_json::to_string(settings)
        .map_err(|source| StoreError::Encode { key: SETTINGS_KEY, source })?;
    store
        .set_item(SETTINGS_KEY, &raw)
        .map_err(|_| StoreError::WriteRejected { key: SETTINGS_KEY })
}

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalCoinStore;

impl CoinStore for LocalCoinStore {
    fn load(&self) -> Option<u64> {
        let raw = local_storage()?.get_item(COIN_BALANCE_KEY).ok().flatten()?;
        let coins = parse_coins(&raw);
        if coins.is_none() {
            cwarn(&format!("ignoring unreadable coin balance {:?}", raw));
        }
        coins
    }

    fn save(&mut self, coins: u64) -> Result<(), StoreError> {
        let store = local_storage().ok_or(StoreError::Unavailable)?;
        store
            .set_item(COIN_BALANCE_KEY, &coins.to_string())
            .map_err(|_| StoreError::WriteRejected { key: COIN_BALANCE_KEY })
    }
}
