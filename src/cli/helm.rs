//! Helm rendering commands

use crate::cli::display::{table::ManifestRow, TableRenderer};
use crate::domain::config::{KubectlOptions, Options, RenderConf};
use crate::domain::render::{
    extract_version_token, manifest_heads, HelmVersion, TemplateRenderer,
};
use clap::Parser;
use std::collections::BTreeMap;

#[derive(Parser, Debug, Clone)]
pub struct RenderCommand {
    /// Path to the chart directory
    #[arg(long, short = 'c')]
    pub chart_dir: String,

    /// Release name assigned to the rendered chart
    #[arg(long, short = 'r')]
    pub release_name: String,

    /// Kubernetes namespace passed to helm
    #[arg(long, short = 'n')]
    pub namespace: Option<String>,

    /// Path to kubeconfig file
    /// If not specified, helm uses its default kubeconfig resolution
    #[arg(long)]
    pub kubeconfig: Option<String>,

    /// Kubernetes context to use
    #[arg(long)]
    pub context: Option<String>,

    /// Value overrides (--set key=value), repeatable
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub set: Vec<String>,

    /// String value overrides (--set-string key=value), repeatable
    #[arg(long = "set-string", value_name = "KEY=VALUE")]
    pub set_string: Vec<String>,

    /// Values files passed to helm (-f), repeatable
    #[arg(long = "values", short = 'f')]
    pub values: Vec<String>,

    /// Render only these template files (relative to the chart), repeatable
    #[arg(long = "show-only", short = 's', value_name = "TEMPLATE")]
    pub show_only: Vec<String>,

    /// Pin the helm major version ("v2" or "v3") instead of detecting it
    #[arg(long)]
    pub helm_version: Option<String>,

    /// Helm binary to invoke
    #[arg(long)]
    pub binary: Option<String>,

    /// Path to a chart-render.toml configuration file
    /// If not provided, CHART_RENDER_CONF_FILE is consulted, then defaults
    #[arg(long, value_name = "PATH")]
    pub config_file: Option<String>,

    /// Print a table of rendered resources instead of the raw manifests
    #[arg(long)]
    pub summary: bool,
}

#[derive(Parser, Debug)]
pub struct VersionCommand {
    /// Helm binary to invoke
    #[arg(long)]
    pub binary: Option<String>,

    /// Path to a chart-render.toml configuration file
    #[arg(long, value_name = "PATH")]
    pub config_file: Option<String>,
}

#[derive(Parser, Debug)]
pub struct InspectCommand {
    /// Path to a file holding rendered manifests
    #[arg(long, short = 'f')]
    pub file: String,
}

impl RenderCommand {
    pub async fn execute(&self) -> anyhow::Result<()> {
        let conf = load_conf(self.config_file.as_deref())?;

        // Resolve binary and version pin: command line > config file
        let binary = self
            .binary
            .clone()
            .unwrap_or_else(|| conf.helm.binary.clone());
        let pinned_version = self
            .helm_version
            .clone()
            .or_else(|| conf.helm.version.clone());

        let options = self.build_options(&conf)?;

        let renderer = TemplateRenderer::with_binary(&binary);

        // An explicit pin skips detection; anything unrecognized fails
        // before helm is ever invoked.
        let version = match pinned_version {
            Some(ref pin) => {
                let version: HelmVersion = pin.parse().unwrap_or(HelmVersion::Unknown);
                if !version.is_known() {
                    anyhow::bail!("Invalid helm version '{}' (expected v2 or v3)", pin);
                }
                version
            }
            None => renderer
                .detect_version()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to detect helm version: {}", e))?,
        };

        let output = renderer
            .render(
                &options,
                &self.chart_dir,
                &self.release_name,
                &self.show_only,
                version,
            )
            .await
            .map_err(|e| anyhow::anyhow!("Failed to render chart: {}", e))?;

        if self.summary {
            let rows: Vec<ManifestRow> = manifest_heads(&output)
                .into_iter()
                .map(|head| ManifestRow {
                    kind: head.kind,
                    name: head.metadata.name,
                    api_version: head.api_version,
                    namespace: head.metadata.namespace,
                })
                .collect();

            let table = TableRenderer::new();
            println!("{}", table.render_manifest_summary(&rows));
        } else {
            println!("{}", output);
        }

        Ok(())
    }

    /// Merge config-file defaults with command-line flags.
    /// Priority: command line > config file.
    fn build_options(&self, conf: &RenderConf) -> anyhow::Result<Options> {
        let namespace = self
            .namespace
            .clone()
            .or_else(|| conf.kubernetes.namespace.clone());
        let kubeconfig = self
            .kubeconfig
            .clone()
            .or_else(|| conf.kubernetes.kubeconfig.clone());
        let context = self
            .context
            .clone()
            .or_else(|| conf.kubernetes.context.clone());

        let kubectl = if namespace.is_some() || kubeconfig.is_some() || context.is_some() {
            Some(KubectlOptions {
                namespace,
                kubeconfig,
                context,
            })
        } else {
            None
        };

        let mut set_values = conf.values.set.clone();
        for (key, value) in parse_set_values(&self.set)
            .map_err(|e| anyhow::anyhow!("Failed to parse --set values: {}", e))?
        {
            set_values.insert(key, value);
        }

        let mut set_str_values = conf.values.set_string.clone();
        for (key, value) in parse_set_values(&self.set_string)
            .map_err(|e| anyhow::anyhow!("Failed to parse --set-string values: {}", e))?
        {
            set_str_values.insert(key, value);
        }

        let mut values_files = conf.values.files.clone();
        values_files.extend(self.values.iter().cloned());

        Ok(Options {
            kubectl,
            set_values,
            set_str_values,
            values_files,
            env_vars: Default::default(),
        })
    }
}

impl VersionCommand {
    pub async fn execute(&self) -> anyhow::Result<()> {
        let conf = load_conf(self.config_file.as_deref())?;
        let binary = self
            .binary
            .clone()
            .unwrap_or_else(|| conf.helm.binary.clone());

        let renderer = TemplateRenderer::with_binary(&binary);
        let output = renderer
            .version_output()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to query helm version: {}", e))?;

        let version = HelmVersion::classify(&output);
        let token = extract_version_token(&output);

        let table = TableRenderer::new();
        println!("{}", table.render_version(version, token.as_deref()));

        if !version.is_known() {
            anyhow::bail!("Unable to determine helm version from: {}", output.trim());
        }

        Ok(())
    }
}

impl InspectCommand {
    pub async fn execute(&self) -> anyhow::Result<()> {
        let rendered = std::fs::read_to_string(&self.file)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", self.file, e))?;

        let rows: Vec<ManifestRow> = manifest_heads(&rendered)
            .into_iter()
            .map(|head| ManifestRow {
                kind: head.kind,
                name: head.metadata.name,
                api_version: head.api_version,
                namespace: head.metadata.namespace,
            })
            .collect();

        let table = TableRenderer::new();
        println!("{}", table.render_manifest_summary(&rows));

        Ok(())
    }
}

fn load_conf(config_file: Option<&str>) -> anyhow::Result<RenderConf> {
    if let Some(path) = config_file {
        return RenderConf::from(path)
            .map_err(|e| anyhow::anyhow!("Failed to load configuration from {}: {}", path, e));
    }
    if let Ok(env_path) = std::env::var("CHART_RENDER_CONF_FILE") {
        return RenderConf::from(&env_path).map_err(|e| {
            anyhow::anyhow!("Failed to load configuration from {}: {}", env_path, e)
        });
    }
    Ok(RenderConf::default())
}

/// Parse override values from KEY=VALUE format
fn parse_set_values(pairs: &[String]) -> Result<BTreeMap<String, String>, String> {
    let mut map = BTreeMap::new();

    for pair in pairs {
        let parts: Vec<&str> = pair.splitn(2, '=').collect();
        if parts.len() != 2 {
            return Err(format!(
                "Invalid value format: '{}'. Expected 'key=value'",
                pair
            ));
        }

        let key = parts[0].trim();
        let value = parts[1].trim();

        if key.is_empty() {
            return Err(format!("Empty key in value: '{}'", pair));
        }

        map.insert(key.to_string(), value.to_string());
    }

    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_set_values() {
        let pairs = vec!["a=1".to_string(), "image.tag=1.21".to_string()];
        let map = parse_set_values(&pairs).unwrap();
        assert_eq!(map.get("a"), Some(&"1".to_string()));
        assert_eq!(map.get("image.tag"), Some(&"1.21".to_string()));
    }

    #[test]
    fn test_parse_set_values_rejects_bad_input() {
        assert!(parse_set_values(&["no-equals".to_string()]).is_err());
        assert!(parse_set_values(&["=value".to_string()]).is_err());
    }

    #[test]
    fn test_parse_set_values_keeps_equals_in_value() {
        let map = parse_set_values(&["query=a=b".to_string()]).unwrap();
        assert_eq!(map.get("query"), Some(&"a=b".to_string()));
    }
}
