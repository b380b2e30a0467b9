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

// Core modules
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod shared;

// Re-export commonly used types
pub use domain::config::{
    HelmConf, KubectlOptions, KubernetesConf, Options, RenderConf, ValuesConf,
};
pub use domain::render::{
    append_values_args, build_v2_args, build_v3_args, extract_version_token, from_rendered_yaml,
    manifest_heads, split_documents, HelmVersion, ManifestHead, TemplateRenderer,
};
pub use infrastructure::process::{HelmRunner, ProcessHelmRunner};
pub use shared::{HelmError, Result};
