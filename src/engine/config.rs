// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::base::write::{RollbackPolicy, DEFAULT_LEVEL};

use std::path::{Path, PathBuf};

/// The configuration an [`ZipEngine`](crate::engine::ZipEngine) is constructed with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    pub(crate) default_archive: Option<PathBuf>,
    pub(crate) rollback_policy: RollbackPolicy,
    pub(crate) compression_level: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { default_archive: None, rollback_policy: RollbackPolicy::default(), compression_level: DEFAULT_LEVEL }
    }
}

impl EngineConfig {
    pub fn builder() -> EngineConfigBuilder {
        EngineConfigBuilder::new()
    }

    /// Returns the archive used when a scan names none, and the archive all writes go to.
    pub fn default_archive(&self) -> Option<&Path> {
        self.default_archive.as_deref()
    }

    pub fn rollback_policy(&self) -> RollbackPolicy {
        self.rollback_policy
    }

    pub fn compression_level(&self) -> u32 {
        self.compression_level
    }
}

/// A builder for [`EngineConfig`].
#[derive(Clone, Debug, Default)]
pub struct EngineConfigBuilder(EngineConfig);

impl From<EngineConfig> for EngineConfigBuilder {
    fn from(config: EngineConfig) -> Self {
        Self(config)
    }
}

impl EngineConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the archive used when a scan names none, and which all writes go to.
    pub fn default_archive(mut self, path: impl Into<PathBuf>) -> Self {
        self.0.default_archive = Some(path.into());
        self
    }

    /// Sets what happens to appended bytes on rollback. Defaults to [`RollbackPolicy::Abandon`].
    pub fn rollback_policy(mut self, policy: RollbackPolicy) -> Self {
        self.0.rollback_policy = policy;
        self
    }

    /// Sets the deflate level, from 0 to 9. Defaults to 9.
    pub fn compression_level(mut self, level: u32) -> Self {
        self.0.compression_level = level.min(9);
        self
    }

    pub fn build(self) -> EngineConfig {
        self.0
    }
}
