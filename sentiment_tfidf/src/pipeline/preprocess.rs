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

use rayon::prelude::*;
use text_processing::tokenizer::Tokenizer;
use crate::corpus::{CorpusSentimentCounts, Review};
use crate::pipeline::records::WordOccurrence;

/// Turns reviews into tagged word occurrences.
#[derive(Debug, Clone)]
pub struct CorpusPreprocessor {
    tokenizer: Tokenizer,
    counts: CorpusSentimentCounts,
}

impl CorpusPreprocessor {
    pub fn new(tokenizer: Tokenizer, counts: CorpusSentimentCounts) -> Self {
        Self { tokenizer, counts }
    }

    /// One occurrence per surviving token, in text order.
    pub fn process(&self, review: &Review) -> Vec<WordOccurrence> {
        let sentiment = review.sentiment();
        let review_count = self.counts.get(sentiment);
        self.tokenizer
            .tokenize(&review.text)
            .into_iter()
            .map(|word| WordOccurrence { word, sentiment, review_count })
            .collect()
    }

    pub fn process_all(&self, reviews: &[Review]) -> Vec<WordOccurrence> {
        reviews
            .par_iter()
            .flat_map_iter(|review| self.process(review))
            .collect()
    }
}
