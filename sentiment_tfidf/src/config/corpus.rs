// Copyright 2024 Felix Engl
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

use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};
use crate::corpus::MalformedRecordPolicy;

/// Where the reviews come from and how broken records are treated.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(rename(serialize = "Corpus"))]
pub struct CorpusConfig {
    /// A json lines file with one review per line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews: Option<Utf8PathBuf>,
    #[serde(default)]
    pub malformed_records: MalformedRecordPolicy,
}
