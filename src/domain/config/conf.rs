// Copyright 2025 Chart Render Team.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Optional TOML configuration file for the CLI

use crate::shared::error::{HelmError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::read_to_string;

/// Top-level configuration loaded from a chart-render.toml file.
///
/// Every field has a default, so a partial file (or none at all) is fine.
/// Command-line flags take priority over anything configured here.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RenderConf {
    pub helm: HelmConf,
    pub kubernetes: KubernetesConf,
    pub values: ValuesConf,
}

/// Settings for the helm binary itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HelmConf {
    /// Binary name or path used to invoke helm.
    pub binary: String,

    /// Pinned major version ("v2" or "v3"). Unset means auto-detect.
    pub version: Option<String>,
}

impl Default for HelmConf {
    fn default() -> Self {
        Self {
            binary: "helm".to_string(),
            version: None,
        }
    }
}

/// Default cluster connection settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct KubernetesConf {
    pub namespace: Option<String>,
    pub kubeconfig: Option<String>,
    pub context: Option<String>,
}

/// Default value overrides applied to every render.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ValuesConf {
    pub set: BTreeMap<String, String>,
    pub set_string: BTreeMap<String, String>,
    pub files: Vec<String>,
}

impl RenderConf {
    /// Load configuration from a TOML file.
    pub fn from<T: AsRef<str>>(path: T) -> Result<Self> {
        let content = read_to_string(path.as_ref()).map_err(|e| {
            HelmError::config_error(format!(
                "Failed to read config file {}: {}",
                path.as_ref(),
                e
            ))
        })?;

        let conf: Self = toml::from_str(&content)?;
        Ok(conf)
    }
}
