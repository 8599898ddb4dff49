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
use strum::{Display, EnumString};
use crate::pipeline::errors::ComputationError;
use crate::pipeline::records::{ScoreKey, ScoredWord, SpreadWordCount, Word};
use crate::pipeline::stage::{MapReduceStage, StageName};
use crate::sentiment::Sentiment;

/// Scores have to be strictly above this value to be significant.
pub const DEFAULT_THRESHOLD: f64 = 0.01;

/// Which score is compared against the threshold.
/// The emitted score is always the rounded one.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ThresholdBasis {
    /// The score rounded to four decimal places.
    #[default]
    Rounded,
    /// The exact score.
    Unrounded,
}

/// Computes `frequency / total_words_in_sentiment * log10(review_count / sentiment_spread)`.
pub fn tf_idf(record: &SpreadWordCount) -> Result<f64, ComputationError> {
    if record.total_words_in_sentiment == 0 {
        return Err(ComputationError::ZeroTotalWords { word: record.word.clone(), sentiment: record.sentiment })
    }
    if record.sentiment_spread == 0 {
        return Err(ComputationError::SpreadOutOfRange { word: record.word.clone(), spread: 0 })
    }
    if record.review_count == 0 {
        return Err(ComputationError::ZeroReviewCount { word: record.word.clone(), sentiment: record.sentiment })
    }
    let tf = record.frequency as f64 / record.total_words_in_sentiment as f64;
    let idf = (record.review_count as f64 / record.sentiment_spread as f64).log10();
    let score = tf * idf;
    if score.is_finite() {
        Ok(score)
    } else {
        Err(ComputationError::NonFiniteScore { word: record.word.clone(), sentiment: record.sentiment, score })
    }
}

/// Stage 4: scores every record, groups by rounded score and keeps the
/// records above the threshold.
#[derive(Debug, Copy, Clone)]
pub struct TfIdfScorer {
    threshold: f64,
    basis: ThresholdBasis,
}

impl Default for TfIdfScorer {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD, ThresholdBasis::default())
    }
}

impl TfIdfScorer {
    pub const fn new(threshold: f64, basis: ThresholdBasis) -> Self {
        Self { threshold, basis }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn basis(&self) -> ThresholdBasis {
        self.basis
    }

    #[inline]
    fn is_significant(&self, key: ScoreKey, score: f64) -> bool {
        match self.basis {
            ThresholdBasis::Rounded => key.value() > self.threshold,
            ThresholdBasis::Unrounded => score > self.threshold,
        }
    }
}

impl MapReduceStage for TfIdfScorer {
    type Input = SpreadWordCount;
    type Key = ScoreKey;
    type Value = (Word, Sentiment, f64);
    type Output = ScoredWord;

    fn name(&self) -> StageName {
        StageName::TfIdfScore
    }

    fn map(&self, input: SpreadWordCount) -> Result<(ScoreKey, Self::Value), ComputationError> {
        let score = tf_idf(&input)?;
        Ok((ScoreKey::from_score(score), (input.word, input.sentiment, score)))
    }

    fn reduce(&self, key: ScoreKey, values: Vec<Self::Value>) -> Result<Vec<ScoredWord>, ComputationError> {
        Ok(
            values
                .into_iter()
                .filter(|(_, _, score)| self.is_significant(key, *score))
                .map(|(word, sentiment, _)| ScoredWord { word, sentiment, score: key.value() })
                .collect()
        )
    }
}
