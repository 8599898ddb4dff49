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

use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use crate::sentiment::Sentiment;

/// A normalized word of a review.
pub type Word = CompactString;

/// A surviving token of a review, tagged with the sentiment of the review.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct WordOccurrence {
    pub word: Word,
    pub sentiment: Sentiment,
    /// The number of reviews with this sentiment in the whole corpus.
    pub review_count: u64,
}

/// Output of the word-sentiment count.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct WordCount {
    pub word: Word,
    pub sentiment: Sentiment,
    pub review_count: u64,
    /// Raw number of occurrences of the word under the sentiment.
    pub frequency: u64,
}

/// Output of the sentiment totals.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct SentimentWordCount {
    pub word: Word,
    pub sentiment: Sentiment,
    pub review_count: u64,
    pub frequency: u64,
    /// Sum of all frequencies under the sentiment.
    pub total_words_in_sentiment: u64,
}

/// Output of the cross sentiment frequency count.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct SpreadWordCount {
    pub word: Word,
    pub sentiment: Sentiment,
    pub review_count: u64,
    pub frequency: u64,
    pub total_words_in_sentiment: u64,
    /// In how many sentiments the word appears at all, 1 or 2.
    pub sentiment_spread: u8,
}

/// A significant word for a sentiment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredWord {
    pub word: Word,
    pub sentiment: Sentiment,
    /// Rounded to four decimal places.
    pub score: f64,
}

impl Display for ScoredWord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{},{:.4}", self.word, self.sentiment, self.score)
    }
}

/// A score rounded to four decimal places, stored as ten-thousandths.
/// Unlike a float it can be used as a key for grouping.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct ScoreKey(i64);

impl ScoreKey {
    pub const DECIMAL_PLACES: i32 = 4;
    const SCALE: f64 = 10_000.0;

    /// Rounds the exact value of `score` to the nearest ten-thousandth,
    /// ties go to the even neighbour.
    pub fn from_score(score: f64) -> Self {
        let scaled = score * Self::SCALE;
        let floor = scaled.floor();
        let rounded = if scaled - floor == 0.5 {
            // the product may only have been rounded onto the tie, the
            // residual of the multiplication is exact
            match score.mul_add(Self::SCALE, -scaled).partial_cmp(&0.0) {
                Some(Ordering::Greater) => floor + 1.0,
                Some(Ordering::Less) => floor,
                _ => scaled.round_ties_even(),
            }
        } else {
            scaled.round()
        };
        Self(rounded as i64)
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0 as f64 / Self::SCALE
    }
}

#[cfg(test)]
mod test {
    use crate::pipeline::records::{ScoreKey, ScoredWord};
    use crate::sentiment::Sentiment;

    #[test]
    fn rounds_to_four_places(){
        assert_eq!(0.4737, ScoreKey::from_score(0.47368421).value());
        assert_eq!(0.01, ScoreKey::from_score(0.0100343).value());
        assert_eq!(-0.0753, ScoreKey::from_score(-0.0752575).value());
        assert_eq!(ScoreKey::from_score(0.01), ScoreKey::from_score(0.01004));
    }

    #[test]
    fn exact_ties_round_to_even(){
        assert_eq!(0.0312, ScoreKey::from_score(0.03125).value());
        assert_eq!(0.0938, ScoreKey::from_score(0.09375).value());
        assert_eq!(0.1562, ScoreKey::from_score(0.15625).value());
        assert_eq!(-0.0312, ScoreKey::from_score(-0.03125).value());
    }

    #[test]
    fn near_ties_follow_the_exact_value(){
        // both products are rounded onto x.5, the stored doubles lie above and below
        assert_eq!(0.0003, ScoreKey::from_score(0.00025).value());
        assert_eq!(0.0003, ScoreKey::from_score(0.00035).value());
        assert_eq!(0.0006, ScoreKey::from_score(0.00055).value());
        assert_eq!(0.0006, ScoreKey::from_score(0.00065).value());
    }

    #[test]
    fn renders_as_csv_line(){
        let scored = ScoredWord { word: "clean".into(), sentiment: Sentiment::Positive, score: 0.05 };
        assert_eq!("clean,+,0.0500", scored.to_string());
    }
}
