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

//! Template rendering domain

pub mod args;
pub mod convert;
pub mod renderer;
pub mod version;

pub use self::args::{append_values_args, build_v2_args, build_v3_args};
pub use self::convert::{from_rendered_yaml, manifest_heads, split_documents, ManifestHead};
pub use self::renderer::TemplateRenderer;
pub use self::version::{extract_version_token, HelmVersion};
