//! Color theme for CLI output

use crate::domain::render::HelmVersion;
use comfy_table::Color as TableColor;

/// Color theme for terminal output
#[derive(Debug, Clone)]
pub struct ColorTheme {
    pub success: TableColor,
    pub warning: TableColor,
    pub error: TableColor,
    pub info: TableColor,
    pub muted: TableColor,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            success: TableColor::Green,
            warning: TableColor::Yellow,
            error: TableColor::Red,
            info: TableColor::Cyan,
            muted: TableColor::DarkGrey,
        }
    }
}

impl ColorTheme {
    /// Get color for a detected helm version
    pub fn get_version_color(&self, version: HelmVersion) -> TableColor {
        match version {
            HelmVersion::V3 => self.success,
            HelmVersion::V2 => self.warning,
            HelmVersion::Unknown => self.error,
        }
    }

    /// Get color for a manifest kind cell
    pub fn get_kind_color(&self, kind: &str) -> TableColor {
        if kind.is_empty() {
            self.muted
        } else {
            self.info
        }
    }
}
