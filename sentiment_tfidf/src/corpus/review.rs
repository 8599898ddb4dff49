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
use crate::sentiment::Sentiment;

/// A single rated review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub text: String,
    pub ratings: Ratings,
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ratings {
    pub overall: f64,
}

impl Review {
    pub fn new(text: impl Into<String>, overall: f64) -> Self {
        Self {
            text: text.into(),
            ratings: Ratings { overall }
        }
    }

    #[inline]
    pub fn sentiment(&self) -> Sentiment {
        Sentiment::from_rating(self.ratings.overall)
    }
}
