// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Configuration system for Largo.
//!
//! A theory file sets the tuning reference, the session's key and scale,
//! and any custom interval patterns. Files are YAML unless their extension
//! is `.toml`.

use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::music::{CustomScaleDefinition, Key, Note, Octave, Pitch, Scale, ScaleRegistry, Tuning};

/// Root configuration file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct TheoryFile {
    /// Frequency reference
    #[serde(default)]
    pub tuning: Tuning,
    /// Key and scale to work in
    #[serde(default)]
    pub session: SessionConfig,
    /// Named interval patterns usable as scales
    #[serde(default)]
    pub patterns: Vec<CustomScaleDefinition>,
}

impl TheoryFile {
    /// Load a configuration file, choosing the format from its extension
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        let file = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml(&contents)?,
            _ => Self::from_yaml(&contents)?,
        };

        info!(
            path = ?path,
            key = %file.session.key,
            scale = %file.session.scale,
            patterns = file.patterns.len(),
            "loaded theory configuration"
        );
        Ok(file)
    }

    /// Parse a configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse YAML configuration")
    }

    /// Parse a configuration from TOML string
    pub fn from_toml(source: &str) -> Result<Self> {
        toml::from_str(source).context("Failed to parse TOML configuration")
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize configuration to YAML")
    }

    /// Save configuration to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = self.to_yaml()?;
        fs::write(path.as_ref(), yaml)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))
    }

    /// Built-in scales plus this file's custom patterns
    pub fn registry(&self) -> ScaleRegistry {
        let mut registry = ScaleRegistry::new();
        for def in &self.patterns {
            registry.register(def.clone());
        }
        registry
    }

    /// The session key
    pub fn key(&self) -> Result<Key> {
        self.session.tonic().map(Key::new)
    }

    /// The session scale, resolved through the registry
    pub fn scale(&self) -> Result<Scale> {
        let tonic = Note::new(self.session.tonic()?, self.session.octave);
        self.registry()
            .get_scale(tonic, &self.session.scale)
            .ok_or_else(|| {
                warn!(scale = %self.session.scale, "unknown scale in configuration");
                anyhow!("Unknown scale: {}", self.session.scale)
            })
    }
}

/// Session-level configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionConfig {
    /// Tonic pitch (e.g., "C", "F#", "Bb")
    #[serde(default = "default_key")]
    pub key: String,
    /// Scale name, built-in or custom (e.g., "major", "dorian")
    #[serde(default = "default_scale")]
    pub scale: String,
    /// Octave the tonic sits in
    #[serde(default = "default_octave")]
    pub octave: Octave,
}

fn default_key() -> String {
    "C".to_string()
}
fn default_scale() -> String {
    "major".to_string()
}
fn default_octave() -> Octave {
    4
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            key: default_key(),
            scale: default_scale(),
            octave: default_octave(),
        }
    }
}

impl SessionConfig {
    /// Parse the configured tonic
    pub fn tonic(&self) -> Result<Pitch> {
        self.key
            .parse::<Pitch>()
            .with_context(|| format!("Invalid key in configuration: {:?}", self.key))
    }
}
