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

//! Renders the significant words as `word,sentiment,score` lines.

use std::cmp::Ordering;
use std::fs::File;
use std::io;
use std::io::{BufWriter, Write};
use camino::{Utf8Path, Utf8PathBuf};
use thiserror::Error;
use crate::pipeline::records::{ScoreKey, ScoredWord};

#[derive(Debug, Error)]
pub enum OutputError {
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("Failed to create the output file '{path}' with:\n{source}")]
    Create {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },
}

/// The order of the written lines: highest score first, ties by word and sentiment.
pub fn ranking(a: &ScoredWord, b: &ScoredWord) -> Ordering {
    b.score.total_cmp(&a.score)
        .then_with(|| a.word.cmp(&b.word))
        .then_with(|| a.sentiment.cmp(&b.sentiment))
}

pub fn rank(scores: &mut [ScoredWord]) {
    scores.sort_unstable_by(ranking);
}

/// Writes the scores in the given order, without a header.
pub fn write_scores<W: Write>(writer: W, scores: &[ScoredWord]) -> Result<(), OutputError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    for scored in scores {
        let score = format!("{:.*}", ScoreKey::DECIMAL_PLACES as usize, scored.score);
        let tag: &str = scored.sentiment.as_ref();
        writer.write_record([scored.word.as_str(), tag, score.as_str()])?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes to `file`, replacing it, or to stdout if no file is set.
pub fn write_to(file: Option<&Utf8Path>, scores: &[ScoredWord]) -> Result<(), OutputError> {
    match file {
        None => {
            write_scores(io::stdout().lock(), scores)
        }
        Some(path) => {
            replace_file(path, |writer| write_scores(writer, scores))?;
            log::info!("Wrote {} scores to {}.", scores.len(), path);
            Ok(())
        }
    }
}

/// Writes into a temporary file next to `path` that replaces `path` only
/// after `write` succeeded. On failure `path` is left untouched.
pub fn replace_file<F>(path: &Utf8Path, write: F) -> Result<(), OutputError>
where
    F: FnOnce(BufWriter<&mut File>) -> Result<(), OutputError>
{
    let create_error = |source: io::Error| OutputError::Create {
        path: path.to_path_buf(),
        source
    };
    let folder = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or(Utf8Path::new("."));
    std::fs::create_dir_all(folder).map_err(create_error)?;

    let mut temp = camino_tempfile::Builder::new()
        .prefix(".scores")
        .suffix(".tmp")
        .tempfile_in(folder)
        .map_err(create_error)?;
    write(BufWriter::new(temp.as_file_mut()))?;
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|err| create_error(err.error))?;
    Ok(())
}

#[cfg(test)]
mod test {
    use std::io;
    use std::io::Write;
    use camino_tempfile::tempdir;
    use crate::output::{rank, replace_file, write_scores, write_to, OutputError};
    use crate::pipeline::records::ScoredWord;
    use crate::sentiment::Sentiment;

    fn scored(word: &str, sentiment: Sentiment, score: f64) -> ScoredWord {
        ScoredWord { word: word.into(), sentiment, score }
    }

    #[test]
    fn ranks_by_score_then_word_then_sentiment(){
        let mut scores = vec![
            scored("staff", Sentiment::Negative, 0.05),
            scored("noisy", Sentiment::Positive, 0.05),
            scored("rude", Sentiment::Negative, 0.1003),
            scored("staff", Sentiment::Positive, 0.05),
        ];
        rank(&mut scores);
        let lines: Vec<String> = scores.iter().map(ToString::to_string).collect();
        assert_eq!(
            vec!["rude,-,0.1003", "noisy,+,0.0500", "staff,+,0.0500", "staff,-,0.0500"],
            lines
        );
    }

    #[test]
    fn writes_lines_without_header(){
        let mut buffer = Vec::new();
        write_scores(&mut buffer, &[
            scored("friendly", Sentiment::Positive, 0.4737),
            scored("rude", Sentiment::Negative, 0.1),
        ]).unwrap();
        assert_eq!("friendly,+,0.4737\nrude,-,0.1000\n", String::from_utf8(buffer).unwrap());
    }

    #[test]
    fn empty_output_is_empty(){
        let mut buffer = Vec::new();
        write_scores(&mut buffer, &[]).unwrap();
        assert!(buffer.is_empty());
    }

    #[test]
    fn writes_into_new_folders(){
        let dir = tempdir().unwrap();
        let path = dir.path().join("out").join("scores.csv");
        write_to(Some(&path), &[scored("clean", Sentiment::Positive, 0.02)]).unwrap();
        assert_eq!("clean,+,0.0200\n", std::fs::read_to_string(&path).unwrap());

        write_to(Some(&path), &[]).unwrap();
        assert_eq!("", std::fs::read_to_string(&path).unwrap());
    }

    #[test]
    fn failed_writes_keep_the_old_file(){
        let dir = tempdir().unwrap();
        let path = dir.path().join("scores.csv");
        write_to(Some(&path), &[scored("clean", Sentiment::Positive, 0.02)]).unwrap();

        let result = replace_file(&path, |mut writer| {
            writer.write_all(b"dirty,-,0.5000\n")?;
            Err(OutputError::Io(io::Error::other("disk full")))
        });
        assert!(result.is_err());
        assert_eq!("clean,+,0.0200\n", std::fs::read_to_string(&path).unwrap());
        assert_eq!(1, std::fs::read_dir(dir.path()).unwrap().count());
    }
}
