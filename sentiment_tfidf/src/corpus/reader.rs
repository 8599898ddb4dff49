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

use std::fs::File;
use std::io;
use std::io::{BufRead, BufReader};
use camino::Utf8Path;
use serde::{Deserialize, Serialize};
use crate::corpus::errors::{CorpusError, MalformedReason, MalformedRecordError};
use crate::corpus::review::{Ratings, Review};

/// What happens with a record that is not a proper review.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MalformedRecordPolicy {
    /// Log and skip the record.
    #[default]
    Skip,
    /// Fail on the first malformed record.
    Abort,
}

#[derive(Deserialize)]
struct ReviewDev {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    ratings: Option<RatingsDev>,
}

#[derive(Deserialize)]
struct RatingsDev {
    #[serde(default)]
    overall: Option<f64>,
}

/// Parses a single json record, `line` is only used for the error.
pub fn parse_review(line: usize, content: &str) -> Result<Review, MalformedRecordError> {
    fn validate(content: &str) -> Result<Review, MalformedReason> {
        let ReviewDev { text, ratings } = serde_json::from_str(content)?;
        let text = text.ok_or(MalformedReason::MissingField("text"))?;
        let overall = ratings
            .and_then(|value| value.overall)
            .ok_or(MalformedReason::MissingField("ratings.overall"))?;
        if !overall.is_finite() {
            return Err(MalformedReason::NonFiniteRating(overall))
        }
        Ok(Review { text, ratings: Ratings { overall } })
    }
    validate(content).map_err(|reason| MalformedRecordError { line, reason })
}

/// Reads one review per line. Blank lines are ignored, invalid utf-8 is replaced.
#[derive(Debug)]
pub struct JsonLinesReader<R> {
    reader: R,
    line: usize,
    buffer: Vec<u8>,
}

impl<R: BufRead> JsonLinesReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: 0,
            buffer: Vec::new()
        }
    }
}

impl JsonLinesReader<BufReader<File>> {
    pub fn open<P: AsRef<Utf8Path>>(path: P) -> io::Result<Self> {
        Ok(Self::new(BufReader::new(File::open(path.as_ref())?)))
    }
}

impl<R: BufRead> Iterator for JsonLinesReader<R> {
    type Item = Result<Review, CorpusError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buffer.clear();
            match self.reader.read_until(b'\n', &mut self.buffer) {
                Ok(0) => return None,
                Ok(_) => {
                    self.line += 1;
                    let content = String::from_utf8_lossy(&self.buffer);
                    let content = content.trim();
                    if content.is_empty() {
                        continue
                    }
                    return Some(parse_review(self.line, content).map_err(CorpusError::from))
                }
                Err(err) => return Some(Err(err.into()))
            }
        }
    }
}

/// The reviews that survived reading.
#[derive(Debug, Default)]
pub struct LoadedCorpus {
    pub reviews: Vec<Review>,
    pub skipped: usize,
}

/// Collects the records, malformed ones are handled according to `policy`.
/// IO errors always abort.
pub fn load_corpus<I>(records: I, policy: MalformedRecordPolicy) -> Result<LoadedCorpus, CorpusError>
where
    I: IntoIterator<Item=Result<Review, CorpusError>>
{
    let mut corpus = LoadedCorpus::default();
    for record in records {
        match record {
            Ok(review) => corpus.reviews.push(review),
            Err(CorpusError::Malformed(err)) if policy == MalformedRecordPolicy::Skip => {
                log::warn!("Skipping: {err}");
                corpus.skipped += 1;
            }
            Err(err) => return Err(err)
        }
    }
    log::info!("Loaded {} reviews, skipped {} malformed records.", corpus.reviews.len(), corpus.skipped);
    Ok(corpus)
}

#[cfg(test)]
mod test {
    use std::io::Cursor;
    use crate::corpus::errors::{CorpusError, MalformedReason};
    use crate::corpus::reader::{load_corpus, parse_review, JsonLinesReader, MalformedRecordPolicy};

    const CORPUS: &str = r#"{"text":"great room great staff","ratings":{"overall":5, "service": 4},"author":"x"}

{"text":"dirty room bad smell","ratings":{"overall":2}}
{"ratings":{"overall":2}}
{"text":"no rating","ratings":{}}
not json at all
{"text":"fine","ratings":{"overall":3.0}}
"#;

    #[test]
    fn parses_required_fields(){
        let review = parse_review(1, r#"{"text":"nice","ratings":{"overall":4.5}}"#).unwrap();
        assert_eq!("nice", review.text);
        assert_eq!(4.5, review.ratings.overall);

        let err = parse_review(7, r#"{"ratings":{"overall":1}}"#).unwrap_err();
        assert_eq!(7, err.line);
        assert!(matches!(err.reason, MalformedReason::MissingField("text")));

        let err = parse_review(8, r#"{"text":"x"}"#).unwrap_err();
        assert!(matches!(err.reason, MalformedReason::MissingField("ratings.overall")));

        let err = parse_review(9, r#"{"text":"x","ratings":{"overall":null}}"#).unwrap_err();
        assert!(matches!(err.reason, MalformedReason::MissingField("ratings.overall")));

        let err = parse_review(10, "[1, 2]").unwrap_err();
        assert!(matches!(err.reason, MalformedReason::Json(_)));
    }

    #[test]
    fn skips_malformed_records(){
        let corpus = load_corpus(
            JsonLinesReader::new(Cursor::new(CORPUS)),
            MalformedRecordPolicy::Skip
        ).unwrap();
        assert_eq!(3, corpus.reviews.len());
        assert_eq!(3, corpus.skipped);
        assert_eq!("fine", corpus.reviews[2].text);
    }

    #[test]
    fn aborts_on_first_malformed_record(){
        let result = load_corpus(
            JsonLinesReader::new(Cursor::new(CORPUS)),
            MalformedRecordPolicy::Abort
        );
        match result {
            Err(CorpusError::Malformed(err)) => assert_eq!(4, err.line),
            other => panic!("Expected a malformed record, got {other:?}")
        }
    }
}
