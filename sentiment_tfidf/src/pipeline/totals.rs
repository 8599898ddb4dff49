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

use crate::pipeline::errors::ComputationError;
use crate::pipeline::records::{SentimentWordCount, Word, WordCount};
use crate::pipeline::stage::{MapReduceStage, StageName};
use crate::sentiment::Sentiment;

/// Stage 2: sums the word counts per sentiment and attaches the sum to
/// every word of that sentiment.
#[derive(Debug, Copy, Clone, Default)]
pub struct SentimentTotalizer;

/// The part of a [WordCount] that travels with the sentiment key.
#[derive(Debug, Clone)]
pub struct TotalsPayload {
    word: Word,
    frequency: u64,
    review_count: u64,
}

impl SentimentTotalizer {
    fn total_words(sentiment: Sentiment, values: &[TotalsPayload]) -> Result<u64, ComputationError> {
        let mut total = 0u64;
        let expected = values.first().map(|value| value.review_count);
        for value in values {
            if let Some(expected) = expected.filter(|expected| *expected != value.review_count) {
                return Err(ComputationError::InconsistentReviewCount {
                    sentiment,
                    expected,
                    found: value.review_count,
                })
            }
            total = total.saturating_add(value.frequency);
        }
        Ok(total)
    }
}

impl MapReduceStage for SentimentTotalizer {
    type Input = WordCount;
    type Key = Sentiment;
    type Value = TotalsPayload;
    type Output = SentimentWordCount;

    fn name(&self) -> StageName {
        StageName::SentimentTotals
    }

    #[inline]
    fn map(&self, WordCount { word, sentiment, review_count, frequency }: WordCount) -> Result<(Sentiment, TotalsPayload), ComputationError> {
        Ok((sentiment, TotalsPayload { word, frequency, review_count }))
    }

    fn reduce(&self, sentiment: Sentiment, values: Vec<TotalsPayload>) -> Result<Vec<SentimentWordCount>, ComputationError> {
        let total_words_in_sentiment = Self::total_words(sentiment, &values)?;
        if total_words_in_sentiment == 0 {
            if let Some(first) = values.first() {
                return Err(ComputationError::ZeroTotalWords { word: first.word.clone(), sentiment })
            }
        }
        Ok(
            values
                .into_iter()
                .map(|TotalsPayload { word, frequency, review_count }| SentimentWordCount {
                    word,
                    sentiment,
                    review_count,
                    frequency,
                    total_words_in_sentiment,
                })
                .collect()
        )
    }
}

#[cfg(test)]
mod test {
    use crate::pipeline::errors::ComputationError;
    use crate::pipeline::records::WordCount;
    use crate::pipeline::stage::{run_stage, StageName};
    use crate::pipeline::totals::SentimentTotalizer;
    use crate::sentiment::Sentiment;

    fn count(word: &str, sentiment: Sentiment, frequency: u64) -> WordCount {
        WordCount { word: word.into(), sentiment, review_count: 1, frequency }
    }

    #[test]
    fn every_word_gets_the_total_of_its_sentiment(){
        let totals = run_stage(&SentimentTotalizer, vec![
            count("great", Sentiment::Positive, 2),
            count("room", Sentiment::Positive, 1),
            count("staff", Sentiment::Positive, 1),
            count("dirty", Sentiment::Negative, 1),
            count("room", Sentiment::Negative, 1),
            count("bad", Sentiment::Negative, 1),
            count("smell", Sentiment::Negative, 1),
        ]).unwrap();

        assert_eq!(7, totals.len());
        for sentiment in [Sentiment::Positive, Sentiment::Negative] {
            let of_sentiment = totals.iter().filter(|value| value.sentiment == sentiment).collect::<Vec<_>>();
            let sum = of_sentiment.iter().map(|value| value.frequency).sum::<u64>();
            assert!(of_sentiment.iter().all(|value| value.total_words_in_sentiment == sum));
            assert_eq!(4, sum);
        }
    }

    #[test]
    fn inconsistent_review_counts_fail(){
        let mut broken = count("room", Sentiment::Negative, 1);
        broken.review_count = 5;
        let err = run_stage(&SentimentTotalizer, vec![count("bad", Sentiment::Negative, 1), broken]).unwrap_err();
        assert_eq!(StageName::SentimentTotals, err.stage);
        assert!(matches!(err.source, ComputationError::InconsistentReviewCount { sentiment: Sentiment::Negative, .. }));
    }

    #[test]
    fn zero_totals_fail(){
        let err = run_stage(&SentimentTotalizer, vec![count("bad", Sentiment::Negative, 0)]).unwrap_err();
        assert_eq!(
            ComputationError::ZeroTotalWords { word: "bad".into(), sentiment: Sentiment::Negative },
            err.source
        );
    }
}
