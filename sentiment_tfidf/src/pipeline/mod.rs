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

//! The four stage pipeline.
//!
//! ```text
//! reviews -> pre-pass (reviews per sentiment)
//!         -> preprocessor          (word, sentiment, review_count)
//!         -> word-sentiment count  + frequency
//!         -> sentiment totals      + total_words_in_sentiment
//!         -> cross-sentiment freq. + sentiment_spread
//!         -> tf-idf score          (word, sentiment, score) above threshold
//! ```
//!
//! Every stage is a [stage::MapReduceStage] run by [stage::run_stage]. A stage
//! only starts after the previous one completely finished, so a failed run can
//! be restarted from any stage boundary.

use std::time::Instant;
use text_processing::tokenizer::Tokenizer;
use crate::corpus::{CorpusSentimentCounts, Review};
use crate::pipeline::count::WordSentimentCounter;
use crate::pipeline::errors::PipelineError;
use crate::pipeline::preprocess::CorpusPreprocessor;
use crate::pipeline::records::ScoredWord;
use crate::pipeline::score::TfIdfScorer;
use crate::pipeline::spread::CrossSentimentCounter;
use crate::pipeline::stage::run_stage;
use crate::pipeline::totals::SentimentTotalizer;

pub mod count;
pub mod errors;
pub mod preprocess;
pub mod records;
pub mod score;
pub mod spread;
pub mod stage;
pub mod totals;

/// The number of records leaving each step.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct StageStatistics {
    pub occurrences: usize,
    pub word_counts: usize,
    pub sentiment_totals: usize,
    pub sentiment_spreads: usize,
    pub significant: usize,
}

/// The result of a complete run.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub counts: CorpusSentimentCounts,
    pub statistics: StageStatistics,
    /// Unordered.
    pub scored: Vec<ScoredWord>,
}

/// Runs the pre-pass and all four stages on the current rayon pool.
#[derive(Debug, Clone)]
pub struct SentimentPipeline {
    tokenizer: Tokenizer,
    scorer: TfIdfScorer,
}

impl SentimentPipeline {
    pub fn new(tokenizer: Tokenizer, scorer: TfIdfScorer) -> Self {
        Self { tokenizer, scorer }
    }

    pub fn run(&self, reviews: &[Review]) -> Result<PipelineOutput, PipelineError> {
        let started = Instant::now();

        let counts = CorpusSentimentCounts::tally(reviews);
        log::info!("Reviews per sentiment: {counts}");

        let occurrences = CorpusPreprocessor::new(self.tokenizer.clone(), counts).process_all(reviews);
        let mut statistics = StageStatistics {
            occurrences: occurrences.len(),
            ..StageStatistics::default()
        };

        let word_counts = run_stage(&WordSentimentCounter, occurrences)?;
        statistics.word_counts = word_counts.len();

        let totals = run_stage(&SentimentTotalizer, word_counts)?;
        statistics.sentiment_totals = totals.len();

        let spreads = run_stage(&CrossSentimentCounter, totals)?;
        statistics.sentiment_spreads = spreads.len();

        log::debug!("Keeping scores above {} ({}).", self.scorer.threshold(), self.scorer.basis());
        let scored = run_stage(&self.scorer, spreads)?;
        statistics.significant = scored.len();

        log::info!(
            "Scored {} (word, sentiment) pairs from {} words, {} are significant. Took {:?}.",
            statistics.sentiment_spreads,
            statistics.occurrences,
            statistics.significant,
            started.elapsed()
        );

        Ok(PipelineOutput { counts, statistics, scored })
    }
}

#[cfg(test)]
mod test {
    use text_processing::tokenizer::Tokenizer;
    use crate::corpus::Review;
    use crate::pipeline::score::TfIdfScorer;
    use crate::pipeline::SentimentPipeline;
    use crate::sentiment::Sentiment;

    #[test]
    fn statistics_follow_the_records(){
        let pipeline = SentimentPipeline::new(Tokenizer::plain(), TfIdfScorer::default());
        let output = pipeline.run(&[
            Review::new("great room great staff", 5.0),
            Review::new("dirty room bad smell", 2.0),
        ]).unwrap();
        assert_eq!(1, output.counts.get(Sentiment::Positive));
        assert_eq!(1, output.counts.get(Sentiment::Negative));
        assert_eq!(8, output.statistics.occurrences);
        assert_eq!(7, output.statistics.word_counts);
        assert_eq!(7, output.statistics.sentiment_totals);
        assert_eq!(7, output.statistics.sentiment_spreads);
        assert_eq!(0, output.statistics.significant);
        assert!(output.scored.is_empty());
    }

    #[test]
    fn empty_corpus_yields_empty_output(){
        let pipeline = SentimentPipeline::new(Tokenizer::plain(), TfIdfScorer::default());
        let output = pipeline.run(&[]).unwrap();
        assert!(output.scored.is_empty());
        assert_eq!(0, output.statistics.occurrences);
    }
}
