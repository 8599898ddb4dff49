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

use itertools::Itertools;
use strum::EnumCount;
use crate::pipeline::errors::ComputationError;
use crate::pipeline::records::{SentimentWordCount, SpreadWordCount, Word};
use crate::pipeline::stage::{MapReduceStage, StageName};
use crate::sentiment::Sentiment;

/// Stage 3: counts in how many sentiments a word appears and attaches the
/// count to every record of the word.
#[derive(Debug, Copy, Clone, Default)]
pub struct CrossSentimentCounter;

/// The part of a [SentimentWordCount] that travels with the word key.
#[derive(Debug, Clone)]
pub struct SpreadPayload {
    sentiment: Sentiment,
    frequency: u64,
    total_words_in_sentiment: u64,
    review_count: u64,
}

impl CrossSentimentCounter {
    /// After stage 1 a word has at most one record per sentiment.
    fn sentiment_spread(word: &Word, values: &[SpreadPayload]) -> Result<u8, ComputationError> {
        if let Some(sentiment) = values.iter().map(|value| value.sentiment).duplicates().next() {
            return Err(ComputationError::DuplicateSentiment { word: word.clone(), sentiment })
        }
        if values.is_empty() || values.len() > Sentiment::COUNT {
            return Err(ComputationError::SpreadOutOfRange { word: word.clone(), spread: values.len() })
        }
        Ok(values.len() as u8)
    }
}

impl MapReduceStage for CrossSentimentCounter {
    type Input = SentimentWordCount;
    type Key = Word;
    type Value = SpreadPayload;
    type Output = SpreadWordCount;

    fn name(&self) -> StageName {
        StageName::CrossSentimentFrequency
    }

    #[inline]
    fn map(&self, input: SentimentWordCount) -> Result<(Word, SpreadPayload), ComputationError> {
        let SentimentWordCount { word, sentiment, review_count, frequency, total_words_in_sentiment } = input;
        Ok((word, SpreadPayload { sentiment, frequency, total_words_in_sentiment, review_count }))
    }

    fn reduce(&self, word: Word, values: Vec<SpreadPayload>) -> Result<Vec<SpreadWordCount>, ComputationError> {
        let sentiment_spread = Self::sentiment_spread(&word, &values)?;
        Ok(
            values
                .into_iter()
                .map(|SpreadPayload { sentiment, frequency, total_words_in_sentiment, review_count }| SpreadWordCount {
                    word: word.clone(),
                    sentiment,
                    review_count,
                    frequency,
                    total_words_in_sentiment,
                    sentiment_spread,
                })
                .collect()
        )
    }
}

#[cfg(test)]
mod test {
    use crate::pipeline::errors::ComputationError;
    use crate::pipeline::records::SentimentWordCount;
    use crate::pipeline::spread::CrossSentimentCounter;
    use crate::pipeline::stage::run_stage;
    use crate::sentiment::Sentiment;

    fn count(word: &str, sentiment: Sentiment) -> SentimentWordCount {
        SentimentWordCount { word: word.into(), sentiment, review_count: 1, frequency: 1, total_words_in_sentiment: 4 }
    }

    #[test]
    fn words_in_both_sentiments_have_spread_two(){
        let spread = run_stage(&CrossSentimentCounter, vec![
            count("great", Sentiment::Positive),
            count("room", Sentiment::Positive),
            count("room", Sentiment::Negative),
            count("dirty", Sentiment::Negative),
        ]).unwrap();
        assert_eq!(4, spread.len());
        for record in spread {
            let expected = if record.word == "room" { 2 } else { 1 };
            assert_eq!(expected, record.sentiment_spread, "Failed for {}", record.word);
            assert!((1..=2).contains(&record.sentiment_spread));
        }
    }

    #[test]
    fn duplicate_sentiments_fail(){
        let err = run_stage(&CrossSentimentCounter, vec![
            count("room", Sentiment::Positive),
            count("room", Sentiment::Positive),
        ]).unwrap_err();
        assert_eq!(
            ComputationError::DuplicateSentiment { word: "room".into(), sentiment: Sentiment::Positive },
            err.source
        );
    }
}
