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

use std::fmt::{Display, Formatter};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use crate::corpus::review::Review;
use crate::sentiment::Sentiment;

/// The number of reviews per sentiment over the whole corpus.
/// Computed once before the stages run and then only read.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct CorpusSentimentCounts {
    positive: u64,
    negative: u64,
}

impl CorpusSentimentCounts {
    pub const fn new(positive: u64, negative: u64) -> Self {
        Self { positive, negative }
    }

    /// Counts the reviews per sentiment in parallel.
    pub fn tally(reviews: &[Review]) -> Self {
        reviews
            .par_iter()
            .fold(Self::default, |counts, review| counts.with(review.sentiment()))
            .reduce(Self::default, Self::merge)
    }

    #[inline]
    pub fn get(&self, sentiment: Sentiment) -> u64 {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Negative => self.negative,
        }
    }

    pub fn total(&self) -> u64 {
        self.positive.saturating_add(self.negative)
    }

    fn with(mut self, sentiment: Sentiment) -> Self {
        match sentiment {
            Sentiment::Positive => self.positive = self.positive.saturating_add(1),
            Sentiment::Negative => self.negative = self.negative.saturating_add(1),
        }
        self
    }

    fn merge(self, other: Self) -> Self {
        Self {
            positive: self.positive.saturating_add(other.positive),
            negative: self.negative.saturating_add(other.negative),
        }
    }
}

impl Display for CorpusSentimentCounts {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}, {}: {}", Sentiment::Positive, self.positive, Sentiment::Negative, self.negative)
    }
}
