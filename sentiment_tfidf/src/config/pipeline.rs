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

use serde::{Deserialize, Serialize};
use crate::pipeline::score::{TfIdfScorer, ThresholdBasis, DEFAULT_THRESHOLD};

/// Config of the scoring.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(rename(serialize = "Pipeline"))]
pub struct PipelineConfig {
    /// Only scores strictly above the threshold are kept.
    #[serde(default = "_default_threshold")]
    pub threshold: f64,
    /// If the rounded or the raw score is compared against the threshold.
    #[serde(default)]
    pub threshold_basis: ThresholdBasis,
}

const fn _default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            threshold: _default_threshold(),
            threshold_basis: ThresholdBasis::default(),
        }
    }
}

impl PipelineConfig {
    pub fn scorer(&self) -> TfIdfScorer {
        TfIdfScorer::new(self.threshold, self.threshold_basis)
    }
}
