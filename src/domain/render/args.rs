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

//! Version-specific argument construction for `helm template`
//!
//! Helm 2 and Helm 3 expect different argument shapes:
//! - v2: `helm template --name NAME [flags] CHART`
//! - v3: `helm template NAME CHART [flags]`
//!
//! Argument order is significant; each builder produces exactly the list
//! its major expects and nothing else.

use crate::domain::config::options::Options;
use crate::infrastructure::files;
use crate::shared::error::{HelmError, Result};
use std::path::Path;

/// Build the argument list for a Helm 2 `template` invocation.
///
/// Selector entries are validated to exist under the chart directory
/// before anything is returned; the first missing file aborts the build.
pub fn build_v2_args(
    release_name: &str,
    options: &Options,
    template_files: &[String],
    chart_dir: &str,
) -> Result<Vec<String>> {
    let abs_chart_dir = absolute_chart_dir(chart_dir)?;

    let mut args = vec!["--name".to_string(), release_name.to_string()];
    args.push(chart_dir.to_string());

    if let Some(namespace) = options.namespace() {
        args.push("--namespace".to_string());
        args.push(namespace.to_string());
    }

    append_values_args(options, &mut args)?;

    for template_file in template_files {
        validate_template_file(template_file, &abs_chart_dir)?;
        args.push("-x".to_string());
        args.push(template_file.clone());
    }

    // Helm 2 expects the chart as the trailing positional as well.
    args.push(chart_dir.to_string());

    Ok(args)
}

/// Build the argument list for a Helm 3 `template` invocation.
pub fn build_v3_args(
    release_name: &str,
    options: &Options,
    template_files: &[String],
    chart_dir: &str,
) -> Result<Vec<String>> {
    let abs_chart_dir = absolute_chart_dir(chart_dir)?;

    let mut args = vec![release_name.to_string(), chart_dir.to_string()];

    for template_file in template_files {
        validate_template_file(template_file, &abs_chart_dir)?;
        args.push("-s".to_string());
        args.push(template_file.clone());
    }

    if let Some(namespace) = options.namespace() {
        args.push("--namespace".to_string());
        args.push(namespace.to_string());
    }

    append_values_args(options, &mut args)?;

    Ok(args)
}

/// Append `--set`, `--set-string` and `-f` arguments from the options bag.
///
/// Values files must exist at build time; override pairs are appended in
/// key order.
pub fn append_values_args(options: &Options, args: &mut Vec<String>) -> Result<()> {
    for (key, value) in &options.set_values {
        args.push("--set".to_string());
        args.push(format!("{}={}", key, value));
    }

    for (key, value) in &options.set_str_values {
        args.push("--set-string".to_string());
        args.push(format!("{}={}", key, value));
    }

    for file in &options.values_files {
        if !files::file_exists(file) {
            return Err(HelmError::ValuesFileNotFound { path: file.clone() });
        }
        args.push("-f".to_string());
        args.push(file.clone());
    }

    Ok(())
}

fn absolute_chart_dir(chart_dir: &str) -> Result<String> {
    let abs = std::path::absolute(chart_dir).map_err(|e| HelmError::PathResolution {
        path: chart_dir.to_string(),
        source: e,
    })?;
    Ok(abs.to_string_lossy().to_string())
}

/// The selector entry is checked against its absolute location, but the
/// argument list keeps the relative path: helm resolves `-x`/`-s` values
/// relative to the chart itself.
fn validate_template_file(template_file: &str, abs_chart_dir: &str) -> Result<()> {
    let abs_template_file = Path::new(abs_chart_dir).join(template_file);
    if !files::file_exists(&abs_template_file) {
        return Err(HelmError::template_file_not_found(
            template_file,
            abs_chart_dir,
        ));
    }
    Ok(())
}
