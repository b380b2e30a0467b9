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

//! Helm major version model and version-output classification

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The Helm major versions this tool knows how to drive.
///
/// Helm 2 and Helm 3 take incompatible argument lists for `helm template`,
/// so every render is keyed by one of these variants. `Unknown` is a
/// first-class member of the set: callers match on it instead of comparing
/// against a sentinel, and the renderer rejects it explicitly.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum HelmVersion {
    #[serde(rename = "v2")]
    V2,
    #[serde(rename = "v3")]
    V3,
    #[serde(rename = "unknown")]
    Unknown,
}

impl HelmVersion {
    /// Classify the text printed by `helm version -c`.
    ///
    /// Both majors embed their semver as `vX.Y.Z` somewhere in the output,
    /// so a substring check is sufficient and stable across the wildly
    /// different formats the two majors print.
    pub fn classify(output: &str) -> Self {
        if output.contains("v3.") {
            Self::V3
        } else if output.contains("v2.") {
            Self::V2
        } else {
            Self::Unknown
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for HelmVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::V2 => "v2",
            Self::V3 => "v3",
            Self::Unknown => "unknown",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for HelmVersion {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let version = match s.trim().to_lowercase().as_str() {
            "v2" | "2" => Self::V2,
            "v3" | "3" => Self::V3,
            _ => Self::Unknown,
        };
        Ok(version)
    }
}

/// Pull the full `vX.Y.Z` token out of a `helm version` output line.
///
/// Display-only: classification never depends on this, and output that
/// carries no such token simply yields `None`.
pub fn extract_version_token(output: &str) -> Option<String> {
    let re = Regex::new(r"v\d+\.\d+[\.\d\w\-+]*").ok()?;
    re.find(output).map(|m| m.as_str().to_string())
}
