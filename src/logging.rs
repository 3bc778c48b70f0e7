//! log4rs setup.

use crate::BoxError;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::path::Path;

const STDERR_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {h({l:5})} {M} - {m}{n}";

/// Load `config_file`, falling back to info level logging on stderr.
pub fn init_logging(config_file: &Path) -> Result<(), BoxError> {
    if let Err(e) = log4rs::init_file(config_file, Default::default()) {
        log4rs::init_config(stderr_config()?)
            .map_err(|e| format!("Error initializing log4rs: {e}"))?;
        log::warn!(
            "Could not load {}: {e}, logging to stderr",
            config_file.display()
        );
    }
    Ok(())
}

fn stderr_config() -> Result<Config, BoxError> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(STDERR_PATTERN)))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Info))
        .map_err(|e| format!("Invalid log4rs config: {e}"))?;
    Ok(config)
}
