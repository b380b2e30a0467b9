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

//! Conversion of rendered manifest text into structured objects

use crate::shared::error::{HelmError, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Decode a rendered manifest document into a caller-provided shape.
///
/// The YAML is first converted into a JSON value, then decoded into `T`
/// with standard serde semantics: unknown fields are tolerated, type
/// mismatches are not. The two steps fail with distinct errors so callers
/// can tell malformed output from an incompatible target shape.
pub fn from_rendered_yaml<T: DeserializeOwned>(yaml_text: &str) -> Result<T> {
    let json_value: serde_json::Value =
        serde_yaml::from_str(yaml_text).map_err(HelmError::Conversion)?;
    serde_json::from_value(json_value).map_err(HelmError::Decode)
}

/// Split a rendered stream into its individual YAML documents.
///
/// `helm template` separates documents with `---` lines; blank documents
/// (source comments, trailing separators) are dropped.
pub fn split_documents(rendered: &str) -> Vec<&str> {
    rendered
        .split("\n---")
        .map(|doc| doc.trim_start_matches("---").trim())
        .filter(|doc| !doc.is_empty())
        .collect()
}

/// The identifying head of a rendered Kubernetes manifest.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ManifestHead {
    #[serde(default, rename = "apiVersion")]
    pub api_version: String,
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub metadata: ManifestMeta,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ManifestMeta {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub namespace: Option<String>,
}

/// Best-effort parse of the manifest heads in a rendered stream.
///
/// Documents that are not YAML mappings (or not YAML at all) are skipped
/// rather than failing the whole summary.
pub fn manifest_heads(rendered: &str) -> Vec<ManifestHead> {
    split_documents(rendered)
        .into_iter()
        .filter_map(|doc| serde_yaml::from_str::<ManifestHead>(doc).ok())
        .filter(|head| !head.kind.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    const CONFIGMAP_YAML: &str = r#"
apiVersion: v1
kind: ConfigMap
metadata:
  name: test-cm
  namespace: default
data:
  app.properties: "port=8080"
"#;

    #[derive(Debug, Deserialize)]
    struct ConfigMapShape {
        kind: String,
        metadata: MetaShape,
        data: BTreeMap<String, String>,
    }

    #[derive(Debug, Deserialize)]
    struct MetaShape {
        name: String,
    }

    #[test]
    fn test_decode_configmap() {
        let cm: ConfigMapShape = from_rendered_yaml(CONFIGMAP_YAML).unwrap();
        assert_eq!(cm.kind, "ConfigMap");
        assert_eq!(cm.metadata.name, "test-cm");
        assert_eq!(
            cm.data.get("app.properties"),
            Some(&"port=8080".to_string())
        );
    }

    #[test]
    fn test_unknown_fields_tolerated() {
        #[derive(Debug, Deserialize)]
        struct KindOnly {
            kind: String,
        }

        let head: KindOnly = from_rendered_yaml(CONFIGMAP_YAML).unwrap();
        assert_eq!(head.kind, "ConfigMap");
    }

    #[test]
    fn test_invalid_yaml_is_conversion_error() {
        let err = from_rendered_yaml::<serde_json::Value>("kind: [unclosed").unwrap_err();
        assert!(matches!(err, HelmError::Conversion(_)));
    }

    #[test]
    fn test_shape_mismatch_is_decode_error() {
        #[derive(Debug, Deserialize)]
        struct WrongShape {
            #[allow(dead_code)]
            kind: u64,
        }

        let err = from_rendered_yaml::<WrongShape>(CONFIGMAP_YAML).unwrap_err();
        assert!(matches!(err, HelmError::Decode(_)));
    }

    #[test]
    fn test_split_documents() {
        let rendered = "---\n# Source: a\nkind: ConfigMap\n---\nkind: Service\n---\n";
        let docs = split_documents(rendered);
        assert_eq!(docs.len(), 2);
        assert!(docs[0].contains("ConfigMap"));
        assert!(docs[1].contains("Service"));
    }

    #[test]
    fn test_manifest_heads_skip_non_manifests() {
        let rendered = "---\nkind: Deployment\nmetadata:\n  name: web\n---\njust a scalar\n";
        let heads = manifest_heads(rendered);
        assert_eq!(heads.len(), 1);
        assert_eq!(heads[0].kind, "Deployment");
        assert_eq!(heads[0].metadata.name, "web");
    }
}
