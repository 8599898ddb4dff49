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

use std::io;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Logger, Root};
use log4rs::encode::pattern::PatternEncoder;
use log4rs::Config;
use thiserror::Error;
use crate::config::Configs;

const PATTERN: &str = "{l}@Thread{I} - {d} - {m}{n}";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Failed to open the log file with:\n{0}")]
    File(#[from] io::Error),
    #[error("The logging config is invalid: {0}")]
    Config(String),
    #[error(transparent)]
    Init(#[from] log::SetLoggerError),
}

/// Configure the logging
pub fn configure_logging(configs: &Configs) -> Result<(), LoggingError> {
    let config = Config::builder();

    // stdout is reserved for the scores
    let config = if configs.system.log_to_file {
        let file_logger = FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new(PATTERN)))
            .build(&configs.system.log_file)?;
        config.appender(Appender::builder().build("out", Box::new(file_logger)))
    } else {
        let console_logger = ConsoleAppender::builder()
            .target(Target::Stderr)
            .encoder(Box::new(PatternEncoder::new(PATTERN)))
            .build();
        config.appender(Appender::builder().build("out", Box::new(console_logger)))
    };

    let config = config
        .logger(Logger::builder().build("sentiment_tfidf", configs.system.log_level))
        .logger(Logger::builder().build("text_processing", configs.system.log_level))
        .build(Root::builder().appender("out").build(LevelFilter::Warn))
        .map_err(|err| LoggingError::Config(err.to_string()))?;

    log4rs::init_config(config)?;
    Ok(())
}
