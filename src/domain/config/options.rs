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

//! Per-render configuration passed by the caller

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Connection settings forwarded to the helm binary.
///
/// `namespace` ends up in the version-specific argument list; `kubeconfig`
/// and `context` are global flags injected by the runner.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KubectlOptions {
    pub namespace: Option<String>,
    pub kubeconfig: Option<String>,
    pub context: Option<String>,
}

impl KubectlOptions {
    pub fn with_namespace(namespace: impl Into<String>) -> Self {
        Self {
            namespace: Some(namespace.into()),
            ..Self::default()
        }
    }
}

/// Options for a single render or detection call.
///
/// Owned by the caller and read-only to the renderer. The value maps are
/// ordered so the produced argument list is deterministic run to run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Options {
    /// Cluster connection settings. `None` means helm's own defaults.
    pub kubectl: Option<KubectlOptions>,

    /// `--set key=value` overrides.
    pub set_values: BTreeMap<String, String>,

    /// `--set-string key=value` overrides (values kept as strings).
    pub set_str_values: BTreeMap<String, String>,

    /// `-f <path>` values files, passed in order.
    pub values_files: Vec<String>,

    /// Extra environment variables for the spawned helm process.
    #[serde(skip)]
    pub env_vars: HashMap<String, String>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn namespace(&self) -> Option<&str> {
        self.kubectl
            .as_ref()
            .and_then(|k| k.namespace.as_deref())
            .filter(|ns| !ns.is_empty())
    }

    pub fn set_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_values.insert(key.into(), value.into());
        self
    }

    pub fn set_str_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_str_values.insert(key.into(), value.into());
        self
    }

    pub fn values_file(mut self, path: impl Into<String>) -> Self {
        self.values_files.push(path.into());
        self
    }

    pub fn kubectl_options(mut self, kubectl: KubectlOptions) -> Self {
        self.kubectl = Some(kubectl);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespace_accessor() {
        let options = Options::new();
        assert_eq!(options.namespace(), None);

        let options = Options::new().kubectl_options(KubectlOptions::with_namespace("ns1"));
        assert_eq!(options.namespace(), Some("ns1"));
    }

    #[test]
    fn test_empty_namespace_is_none() {
        let options = Options::new().kubectl_options(KubectlOptions::with_namespace(""));
        assert_eq!(options.namespace(), None);
    }

    #[test]
    fn test_builder_chain() {
        let options = Options::new()
            .set_value("replicas", "3")
            .set_str_value("tag", "1.21")
            .values_file("values-prod.yaml");

        assert_eq!(options.set_values.get("replicas"), Some(&"3".to_string()));
        assert_eq!(options.set_str_values.get("tag"), Some(&"1.21".to_string()));
        assert_eq!(options.values_files, vec!["values-prod.yaml"]);
    }
}
