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
use crate::shared::error::{HelmError, Result};
use tokio::process::Command;
use tracing::debug;

/// Seam for invoking the helm binary.
///
/// The renderer only ever talks to this trait, so tests substitute a
/// recording mock and never spawn a real process.
#[async_trait::async_trait]
pub trait HelmRunner: Send + Sync {
    /// Run `helm <subcommand> <args...>` and return combined stdout/stderr.
    async fn run(&self, options: &Options, subcommand: &str, args: &[String]) -> Result<String>;
}

/// Runs the real helm binary via tokio's process API.
pub struct ProcessHelmRunner {
    binary: String,
}

impl Default for ProcessHelmRunner {
    fn default() -> Self {
        Self::new("helm")
    }
}

impl ProcessHelmRunner {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    pub fn binary(&self) -> &str {
        &self.binary
    }

    /// Global connection flags shared by every subcommand.
    fn connection_args(options: &Options) -> Vec<String> {
        let mut args = Vec::new();
        if let Some(kubectl) = &options.kubectl {
            if let Some(kubeconfig) = &kubectl.kubeconfig {
                args.push("--kubeconfig".to_string());
                args.push(kubeconfig.clone());
            }
            if let Some(context) = &kubectl.context {
                args.push("--kube-context".to_string());
                args.push(context.clone());
            }
        }
        args
    }
}

#[async_trait::async_trait]
impl HelmRunner for ProcessHelmRunner {
    async fn run(&self, options: &Options, subcommand: &str, args: &[String]) -> Result<String> {
        let connection_args = Self::connection_args(options);

        debug!(
            "Invoking {} {} {} {}",
            self.binary,
            subcommand,
            connection_args.join(" "),
            args.join(" ")
        );

        let mut cmd = Command::new(&self.binary);
        cmd.arg(subcommand);
        cmd.args(&connection_args);
        cmd.args(args);
        for (key, value) in &options.env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().await?;

        let mut text = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stderr.trim().is_empty() {
            if !text.is_empty() {
                text.push('\n');
            }
            text.push_str(stderr.trim_end());
        }

        if !output.status.success() {
            return Err(HelmError::CommandFailed {
                subcommand: subcommand.to_string(),
                status: output.status.to_string(),
                output: text,
            });
        }

        Ok(text)
    }
}
