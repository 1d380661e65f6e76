//! Service configuration.
//!
//! Configuration is loaded from (in order of precedence):
//! 1. Environment variables (`RESOURCE_API_*`, e.g. `RESOURCE_API_ID_STRATEGY=counter`)
//! 2. Default values
//!
//! Log verbosity is not part of this struct; it comes from `RUST_LOG`
//! (see [`setup_tracing`](crate::lifecycle::setup_tracing)).

use crate::framework::IdStrategy;
use figment::{
    providers::{Env, Serialized},
    Figment,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "RESOURCE_API_";

/// Runtime settings shared by every resource actor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Capacity of each actor's request channel.
    #[serde(default = "default_buffer_size")]
    pub buffer_size: usize,

    /// How new record IDs are allocated.
    #[serde(default)]
    pub id_strategy: IdStrategy,

    /// Start each collection with its seed records.
    #[serde(default = "default_seed")]
    pub seed: bool,

    /// Path prefix in front of the collection segment when deployed behind a stage or
    /// mount point (`/api` for `/api/users/2`). Empty means routes start at the root.
    #[serde(default)]
    pub base_path: String,
}

fn default_buffer_size() -> usize {
    32
}

fn default_seed() -> bool {
    true
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            buffer_size: default_buffer_size(),
            id_strategy: IdStrategy::default(),
            seed: default_seed(),
            base_path: String::new(),
        }
    }
}

impl ServiceConfig {
    /// Loads configuration from the environment.
    ///
    /// Reports a warning for invalid values but falls back to defaults.
    pub fn load() -> Self {
        Self::from_figment(Self::figment())
    }

    /// The figment used by [`ServiceConfig::load`]; exposed so callers can layer more providers.
    pub fn figment() -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    pub fn from_figment(figment: Figment) -> Self {
        match figment.extract::<Self>() {
            Ok(config) if config.buffer_size == 0 => {
                warn!("buffer_size must be positive, using default");
                Self {
                    buffer_size: default_buffer_size(),
                    ..config
                }
            }
            Ok(config) => config,
            Err(e) => {
                warn!(error = %e, "Invalid configuration, using defaults");
                Self::default()
            }
        }
    }
}
