// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Session configuration.
//!
//! Options for the device session, loadable from a YAML file. Only the
//! port matching is configurable; the operating mode is fixed by the
//! session itself.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Options for an APC40 session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Apc40Options {
    /// Substring matched against MIDI port names to locate the device
    #[serde(default = "default_device_name")]
    pub device_name: String,
    /// Client name under which MIDI connections are registered
    #[serde(default = "default_client_name")]
    pub client_name: String,
}

fn default_device_name() -> String {
    "APC40".to_string()
}

fn default_client_name() -> String {
    "apc40".to_string()
}

impl Default for Apc40Options {
    fn default() -> Self {
        Self {
            device_name: default_device_name(),
            client_name: default_client_name(),
        }
    }
}

impl Apc40Options {
    /// Load options from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        Self::from_yaml(&contents)
    }

    /// Parse options from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse YAML configuration")
    }

    /// Serialize to a YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize configuration to YAML")
    }

    /// Save options to a YAML file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = self.to_yaml()?;
        fs::write(path.as_ref(), yaml)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))
    }

    /// Set the device name filter.
    pub fn device_name(mut self, name: impl Into<String>) -> Self {
        self.device_name = name.into();
        self
    }

    /// Set the MIDI client name.
    pub fn client_name(mut self, name: impl Into<String>) -> Self {
        self.client_name = name.into();
        self
    }
}
