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
use strum::{AsRefStr, Display, EnumCount, EnumIter, EnumString};

/// Ratings above this value are positive, everything else is negative.
pub const POSITIVE_RATING_BOUNDARY: f64 = 3.0;

/// The binary sentiment of a review, rendered as `+` or `-`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[derive(Serialize, Deserialize, Display, AsRefStr, EnumString, EnumIter, EnumCount)]
pub enum Sentiment {
    #[strum(serialize = "+")]
    #[serde(rename = "+")]
    Positive,
    #[strum(serialize = "-")]
    #[serde(rename = "-")]
    Negative,
}

impl Sentiment {
    /// There is no neutral class, a rating of exactly 3 is negative.
    #[inline]
    pub fn from_rating(rating: f64) -> Self {
        if rating > POSITIVE_RATING_BOUNDARY {
            Sentiment::Positive
        } else {
            Sentiment::Negative
        }
    }
}

#[cfg(test)]
mod test {
    use std::str::FromStr;
    use strum::IntoEnumIterator;
    use crate::sentiment::Sentiment;

    #[test]
    fn classifies_by_single_boundary(){
        assert_eq!(Sentiment::Positive, Sentiment::from_rating(5.0));
        assert_eq!(Sentiment::Positive, Sentiment::from_rating(3.5));
        assert_eq!(Sentiment::Negative, Sentiment::from_rating(3.0));
        assert_eq!(Sentiment::Negative, Sentiment::from_rating(1.0));
        assert_eq!(Sentiment::Negative, Sentiment::from_rating(0.0));
    }

    #[test]
    fn only_two_classes_exist(){
        for rating in 0..=50 {
            let rating = rating as f64 / 10.0;
            let sentiment = Sentiment::from_rating(rating);
            assert_eq!(rating > 3.0, sentiment == Sentiment::Positive, "Failed for {rating}");
        }
        assert_eq!(2, Sentiment::iter().count());
    }

    #[test]
    fn tags_round_trip(){
        assert_eq!("+", Sentiment::Positive.to_string());
        assert_eq!("-", Sentiment::Negative.as_ref());
        assert_eq!(Sentiment::Negative, Sentiment::from_str("-").unwrap());
        assert!(Sentiment::from_str("0").is_err());
    }
}
