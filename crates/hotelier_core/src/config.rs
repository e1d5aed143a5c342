//! Configuration for the hotelier core.
//!
//! Centralized configuration with sensible defaults. Embedders opt into
//! stricter semantics through the builder.

use std::path::PathBuf;

use crate::logging::default_log_level;

/// Reference-existence policy applied by the reservation service.
///
/// The room service always verifies that a room's hotel exists in the
/// store before inserting the room; whether the reservation service
/// performs the same check for its user/room references is governed by
/// this policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReferencePolicy {
    /// Reservation add/update accepts user/room references without
    /// checking the store.
    #[default]
    Lenient,
    /// Reservation add/update requires the referenced user and room to
    /// exist in the store by value equality.
    Strict,
}

/// Process-level configuration for the core.
#[derive(Debug, Clone)]
pub struct CoreConfig {
    /// Log level handed to `init_logging` (`trace`..`error`).
    pub log_level: String,
    /// Absolute directory for rolling log files; `None` leaves logging
    /// uninitialized.
    pub log_dir: Option<PathBuf>,
    /// Reference-existence policy for the reservation service.
    pub reference_policy: ReferencePolicy,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level().to_string(),
            log_dir: None,
            reference_policy: ReferencePolicy::default(),
        }
    }
}

impl CoreConfig {
    /// Create a new config builder.
    pub fn builder() -> CoreConfigBuilder {
        CoreConfigBuilder::default()
    }
}

/// Builder for `CoreConfig`.
#[derive(Debug, Default)]
pub struct CoreConfigBuilder {
    config: CoreConfig,
}

impl CoreConfigBuilder {
    /// Set the log level.
    pub fn log_level(mut self, level: impl Into<String>) -> Self {
        self.config.log_level = level.into();
        self
    }

    /// Set the log directory (must be absolute, see `init_logging`).
    pub fn log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.log_dir = Some(dir.into());
        self
    }

    /// Set the reference-existence policy.
    pub fn reference_policy(mut self, policy: ReferencePolicy) -> Self {
        self.config.reference_policy = policy;
        self
    }

    /// Build the final config.
    pub fn build(self) -> CoreConfig {
        self.config
    }
}
