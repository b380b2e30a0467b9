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

use crate::domain::config::options::Options;
use crate::domain::render::args::{build_v2_args, build_v3_args};
use crate::domain::render::version::{extract_version_token, HelmVersion};
use crate::infrastructure::files;
use crate::infrastructure::process::runner::{HelmRunner, ProcessHelmRunner};
use crate::shared::error::{HelmError, Result};
use tracing::{debug, info};

/// Drives `helm template` and `helm version` through the runner seam.
pub struct TemplateRenderer {
    runner: Box<dyn HelmRunner>,
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer {
    /// Renderer backed by the `helm` binary on PATH.
    pub fn new() -> Self {
        Self {
            runner: Box::new(ProcessHelmRunner::default()),
        }
    }

    /// Renderer backed by a specific helm binary.
    pub fn with_binary(binary: impl Into<String>) -> Self {
        Self {
            runner: Box::new(ProcessHelmRunner::new(binary)),
        }
    }

    /// Renderer backed by an arbitrary runner implementation.
    pub fn with_runner(runner: Box<dyn HelmRunner>) -> Self {
        Self { runner }
    }

    /// Raw output of the client-only version query.
    ///
    /// The query never contacts a cluster and prints the same `vX.Y.Z`
    /// marker on both majors.
    pub async fn version_output(&self) -> Result<String> {
        self.runner
            .run(&Options::default(), "version", &["-c".to_string()])
            .await
    }

    /// Detect the installed Helm major version.
    ///
    /// Output that matches neither major's marker is an error, not a
    /// silent default.
    pub async fn detect_version(&self) -> Result<HelmVersion> {
        let output = self.version_output().await?;

        debug!("helm version output: {}", output.trim());

        match HelmVersion::classify(&output) {
            HelmVersion::Unknown => Err(HelmError::UnknownVersion {
                output: output.trim().to_string(),
            }),
            version => {
                if let Some(token) = extract_version_token(&output) {
                    info!("Detected helm {} ({})", version, token);
                }
                Ok(version)
            }
        }
    }

    /// Render a chart with `helm template` and return combined stdout/stderr.
    ///
    /// An empty `template_files` slice renders every template in the chart.
    /// The chart directory must exist before any argument building happens,
    /// and a version outside {V2, V3} is refused up front.
    pub async fn render(
        &self,
        options: &Options,
        chart_dir: &str,
        release_name: &str,
        template_files: &[String],
        version: HelmVersion,
    ) -> Result<String> {
        let abs_chart_dir =
            std::path::absolute(chart_dir).map_err(|e| HelmError::PathResolution {
                path: chart_dir.to_string(),
                source: e,
            })?;

        if !files::file_exists(chart_dir) {
            return Err(HelmError::chart_not_found(chart_dir));
        }

        let args = match version {
            HelmVersion::V2 => build_v2_args(release_name, options, template_files, chart_dir)?,
            HelmVersion::V3 => build_v3_args(release_name, options, template_files, chart_dir)?,
            HelmVersion::Unknown => {
                return Err(HelmError::UnsupportedVersion {
                    version: version.to_string(),
                })
            }
        };

        info!(
            "Rendering chart {} as release '{}' with helm {}",
            abs_chart_dir.display(),
            release_name,
            version
        );
        debug!("helm template args: {}", args.join(" "));

        self.runner.run(options, "template", &args).await
    }
}
