//! Table rendering for CLI output

use super::ColorTheme;
use crate::domain::render::HelmVersion;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, ContentArrangement, Table};

/// Manifest information for summary display
#[derive(Debug, Clone)]
pub struct ManifestRow {
    pub kind: String,
    pub name: String,
    pub api_version: String,
    pub namespace: Option<String>,
}

/// Table renderer for formatted output
pub struct TableRenderer {
    theme: ColorTheme,
}

impl Default for TableRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TableRenderer {
    /// Create a new table renderer with default theme
    pub fn new() -> Self {
        Self {
            theme: ColorTheme::default(),
        }
    }

    /// Render the resources of a rendered chart as a formatted table
    pub fn render_manifest_summary(&self, manifests: &[ManifestRow]) -> String {
        if manifests.is_empty() {
            return "No Kubernetes resources found in rendered output".to_string();
        }

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![
                Cell::new("KIND").set_alignment(CellAlignment::Left),
                Cell::new("NAME").set_alignment(CellAlignment::Left),
                Cell::new("API VERSION").set_alignment(CellAlignment::Left),
                Cell::new("NAMESPACE").set_alignment(CellAlignment::Left),
            ]);

        for manifest in manifests {
            let namespace = manifest.namespace.as_deref().unwrap_or("-");
            table.add_row(vec![
                Cell::new(&manifest.kind).fg(self.theme.get_kind_color(&manifest.kind)),
                Cell::new(&manifest.name),
                Cell::new(&manifest.api_version),
                Cell::new(namespace),
            ]);
        }

        let mut output = String::new();
        output.push_str(&format!(
            "╭─ Rendered Resources {} ─╮\n",
            format!("[{} resources]", manifests.len())
                .bright_black()
                .to_string()
        ));
        output.push_str(&table.to_string());
        output.push('\n');

        output
    }

    /// Render the detected helm version as a status line
    pub fn render_version(&self, version: HelmVersion, token: Option<&str>) -> String {
        let label = match token {
            Some(token) => format!("helm {} ({})", version, token),
            None => format!("helm {}", version),
        };

        match version {
            HelmVersion::V3 | HelmVersion::V2 => format!("✓ {}", label.green()),
            HelmVersion::Unknown => format!("✗ {}", "helm version unknown".red()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty_summary() {
        let renderer = TableRenderer::new();
        let output = renderer.render_manifest_summary(&[]);
        assert!(output.contains("No Kubernetes resources found"));
    }

    #[test]
    fn test_render_single_manifest() {
        let renderer = TableRenderer::new();
        let manifests = vec![ManifestRow {
            kind: "ConfigMap".to_string(),
            name: "test-cm".to_string(),
            api_version: "v1".to_string(),
            namespace: Some("default".to_string()),
        }];

        let output = renderer.render_manifest_summary(&manifests);
        assert!(output.contains("ConfigMap"));
        assert!(output.contains("test-cm"));
        assert!(output.contains("default"));
        assert!(output.contains("[1 resources]"));
    }

    #[test]
    fn test_render_version_line() {
        let renderer = TableRenderer::new();
        let output = renderer.render_version(HelmVersion::V3, Some("v3.12.3"));
        assert!(output.contains("v3.12.3"));

        let output = renderer.render_version(HelmVersion::Unknown, None);
        assert!(output.contains("unknown"));
    }
}
