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

#[cfg(test)]
mod tests {
    use chart_render::{
        from_rendered_yaml, manifest_heads, split_documents, HelmError, HelmRunner, HelmVersion,
        Options, TemplateRenderer,
    };
    use k8s_openapi::api::core::v1::{ConfigMap, Service};
    use std::fs;
    use tempfile::TempDir;

    const RENDERED_STREAM: &str = r#"---
# Source: test-chart/templates/configmap.yaml
apiVersion: v1
kind: ConfigMap
metadata:
  name: test-cm
  namespace: default
data:
  app.properties: "port=8080"
---
# Source: test-chart/templates/service.yaml
apiVersion: v1
kind: Service
metadata:
  name: test-svc
spec:
  ports:
    - port: 8080
"#;

    /// Answers every template invocation with a fixed rendered stream.
    struct StaticRunner(String);

    #[async_trait::async_trait]
    impl HelmRunner for StaticRunner {
        async fn run(
            &self,
            _options: &Options,
            _subcommand: &str,
            _args: &[String],
        ) -> chart_render::Result<String> {
            Ok(self.0.clone())
        }
    }

    fn create_test_chart() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("Chart.yaml"),
            "apiVersion: v1\nname: test-chart\nversion: 0.1.0\n",
        )
        .unwrap();
        fs::create_dir(dir.path().join("templates")).unwrap();
        dir
    }

    #[tokio::test]
    async fn test_rendered_configmap_round_trip() {
        let chart = create_test_chart();
        let chart_dir = chart.path().to_str().unwrap();

        let renderer =
            TemplateRenderer::with_runner(Box::new(StaticRunner(RENDERED_STREAM.to_string())));
        let output = renderer
            .render(&Options::new(), chart_dir, "rel1", &[], HelmVersion::V3)
            .await
            .unwrap();

        let docs = split_documents(&output);
        let cm: ConfigMap = from_rendered_yaml(docs[0]).unwrap();

        assert_eq!(cm.metadata.name.as_deref(), Some("test-cm"));
        let data = cm.data.unwrap();
        assert_eq!(data.get("app.properties"), Some(&"port=8080".to_string()));
    }

    #[test]
    fn test_typed_decode_per_kind() {
        let docs = split_documents(RENDERED_STREAM);
        assert_eq!(docs.len(), 2);

        let cm: ConfigMap = from_rendered_yaml(docs[0]).unwrap();
        assert_eq!(cm.metadata.namespace.as_deref(), Some("default"));

        let svc: Service = from_rendered_yaml(docs[1]).unwrap();
        assert_eq!(svc.metadata.name.as_deref(), Some("test-svc"));
        let ports = svc.spec.unwrap().ports.unwrap();
        assert_eq!(ports[0].port, 8080);
    }

    #[test]
    fn test_decode_into_wrong_kind_is_decode_error() {
        // Typed resources validate their `kind` during decoding, so a
        // Service document does not pass as a ConfigMap.
        let docs = split_documents(RENDERED_STREAM);
        let err = from_rendered_yaml::<ConfigMap>(docs[1]).unwrap_err();
        assert!(matches!(err, HelmError::Decode(_)));
    }

    #[test]
    fn test_malformed_output_is_conversion_error() {
        let err = from_rendered_yaml::<ConfigMap>("{invalid: [yaml").unwrap_err();
        assert!(matches!(err, HelmError::Conversion(_)));
    }

    #[test]
    fn test_manifest_heads_summarize_stream() {
        let heads = manifest_heads(RENDERED_STREAM);
        assert_eq!(heads.len(), 2);
        assert_eq!(heads[0].kind, "ConfigMap");
        assert_eq!(heads[0].metadata.name, "test-cm");
        assert_eq!(heads[0].metadata.namespace.as_deref(), Some("default"));
        assert_eq!(heads[1].kind, "Service");
        assert_eq!(heads[1].metadata.namespace, None);
    }
}
