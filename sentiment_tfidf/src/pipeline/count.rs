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
use crate::pipeline::records::{Word, WordCount, WordOccurrence};
use crate::pipeline::stage::{MapReduceStage, StageName};
use crate::sentiment::Sentiment;

/// Stage 1: counts the occurrences of every (word, sentiment) pair.
#[derive(Debug, Copy, Clone, Default)]
pub struct WordSentimentCounter;

impl MapReduceStage for WordSentimentCounter {
    type Input = WordOccurrence;
    type Key = (Word, Sentiment, u64);
    type Value = u64;
    type Output = WordCount;

    fn name(&self) -> StageName {
        StageName::WordSentimentCount
    }

    #[inline]
    fn map(&self, WordOccurrence { word, sentiment, review_count }: WordOccurrence) -> Result<(Self::Key, u64), ComputationError> {
        Ok(((word, sentiment, review_count), 1))
    }

    fn reduce(&self, (word, sentiment, review_count): Self::Key, values: Vec<u64>) -> Result<Vec<WordCount>, ComputationError> {
        let frequency = values.into_iter().sum();
        Ok(vec![WordCount { word, sentiment, review_count, frequency }])
    }
}

#[cfg(test)]
mod test {
    use crate::pipeline::count::WordSentimentCounter;
    use crate::pipeline::records::WordOccurrence;
    use crate::pipeline::stage::run_stage;
    use crate::sentiment::Sentiment;

    fn occurrence(word: &str, sentiment: Sentiment) -> WordOccurrence {
        WordOccurrence { word: word.into(), sentiment, review_count: 2 }
    }

    #[test]
    fn counts_per_word_and_sentiment(){
        let mut counted = run_stage(&WordSentimentCounter, vec![
            occurrence("room", Sentiment::Positive),
            occurrence("great", Sentiment::Positive),
            occurrence("room", Sentiment::Negative),
            occurrence("great", Sentiment::Positive),
        ]).unwrap();
        counted.sort_by(|a, b| (&a.word, a.sentiment).cmp(&(&b.word, b.sentiment)));
        let as_tuples = counted
            .iter()
            .map(|value| (value.word.as_str(), value.sentiment, value.frequency, value.review_count))
            .collect::<Vec<_>>();
        assert_eq!(
            vec![
                ("great", Sentiment::Positive, 2, 2),
                ("room", Sentiment::Positive, 1, 2),
                ("room", Sentiment::Negative, 1, 2),
            ],
            as_tuples
        );
    }
}
