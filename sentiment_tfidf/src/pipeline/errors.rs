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

use thiserror::Error;
use crate::pipeline::records::Word;
use crate::pipeline::stage::StageName;
use crate::sentiment::Sentiment;

/// A broken invariant between two stages. Never caused by legitimate input.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ComputationError {
    #[error("'{word}' was counted for {sentiment} but the sentiment has no words in total!")]
    ZeroTotalWords {
        word: Word,
        sentiment: Sentiment,
    },
    #[error("'{word}' was counted for {sentiment} but there are no reviews with this sentiment!")]
    ZeroReviewCount {
        word: Word,
        sentiment: Sentiment,
    },
    #[error("The reviews of {sentiment} are counted as {expected} and {found} at the same time!")]
    InconsistentReviewCount {
        sentiment: Sentiment,
        expected: u64,
        found: u64,
    },
    #[error("'{word}' appears in {spread} sentiments, expected 1 or 2!")]
    SpreadOutOfRange {
        word: Word,
        spread: usize,
    },
    #[error("'{word}' was grouped more than once for {sentiment}!")]
    DuplicateSentiment {
        word: Word,
        sentiment: Sentiment,
    },
    #[error("The score of '{word}' for {sentiment} is {score}!")]
    NonFiniteScore {
        word: Word,
        sentiment: Sentiment,
        score: f64,
    },
}

/// A failed stage, the run has no usable output.
#[derive(Debug, Error, Clone, PartialEq)]
#[error("The stage '{stage}' failed: {source}")]
pub struct PipelineError {
    pub stage: StageName,
    #[source]
    pub source: ComputationError,
}

impl PipelineError {
    pub fn new(stage: StageName, source: ComputationError) -> Self {
        Self { stage, source }
    }
}
