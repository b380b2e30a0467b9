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

use thiserror::Error;
pub type Result<T> = std::result::Result<T, HelmError>;

#[derive(Error, Debug)]
pub enum HelmError {
    #[error("Failed to resolve chart path '{path}': {source}")]
    PathResolution {
        path: String,
        source: std::io::Error,
    },

    #[error("Chart not found: {path}")]
    ChartNotFound { path: String },

    #[error("Template file '{path}' not found under chart directory '{chart_dir}'")]
    TemplateFileNotFound { path: String, chart_dir: String },

    #[error("Values file not found: {path}")]
    ValuesFileNotFound { path: String },

    #[error("Unsupported helm version: {version}")]
    UnsupportedVersion { version: String },

    #[error("Unable to determine helm version from output: {output}")]
    UnknownVersion { output: String },

    #[error("helm {subcommand} exited with {status}: {output}")]
    CommandFailed {
        subcommand: String,
        status: String,
        output: String,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML conversion error: {0}")]
    Conversion(#[from] serde_yaml::Error),

    #[error("Structured decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl HelmError {
    pub fn config_error(context: impl Into<String>) -> Self {
        Self::ConfigError(context.into())
    }

    pub fn chart_not_found(path: impl Into<String>) -> Self {
        Self::ChartNotFound { path: path.into() }
    }

    pub fn template_file_not_found(
        path: impl Into<String>,
        chart_dir: impl Into<String>,
    ) -> Self {
        Self::TemplateFileNotFound {
            path: path.into(),
            chart_dir: chart_dir.into(),
        }
    }
}
