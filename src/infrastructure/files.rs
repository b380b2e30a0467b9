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

//! Filesystem existence checks shared by the render path

use std::path::Path;

/// Returns true if the path exists, whether file or directory.
pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().exists()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_existing_and_missing_paths() {
        let dir = tempfile::tempdir().unwrap();
        assert!(file_exists(dir.path()));

        let file = dir.path().join("values.yaml");
        assert!(!file_exists(&file));

        std::fs::write(&file, "replicas: 3\n").unwrap();
        assert!(file_exists(&file));
    }
}
