mod capture;
mod output;

use std::path::PathBuf;

use capture::{DirectorySource, ReplayActuator};
use tracing::{error, info};
use transition_common::config::{Config, ConfigError};
use transition_detector::{
    press_and_wait, wait_for_transition_to_end, TracingSink, TransitionError, TransitionRequest,
    TransitionResult,
};

#[derive(Debug, thiserror::Error)]
pub enum ReplayError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to read capture directory {0}: {1}")]
    ReadDir(String, std::io::Error),
    #[error("capture file name is not a millisecond timestamp: {0}")]
    BadFileName(String),
    #[error("two captured frames share timestamp {0}")]
    DuplicateTimestamp(i64),
    #[error("failed to decode frame {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: image::ImageError,
    },
    #[error("no frame was captured before the press at {0}")]
    NoFrameBeforePress(i64),
    #[error(transparent)]
    Transition(#[from] TransitionError),
    #[error("unknown output format {0:?}, expected \"text\" or \"json\"")]
    UnknownOutput(String),
    #[error("failed to encode result: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() {
    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("config.toml"));

    let config = match Config::load(&config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config from {}: {e}", config_path.display());
            std::process::exit(2);
        }
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.level.parse().unwrap_or_default()),
        )
        .init();

    info!(
        frames_dir = %config.replay.frames_dir.display(),
        press_at_ms = ?config.replay.press_at_ms,
        timeout_secs = config.transition.timeout_secs,
        stable_secs = config.transition.stable_secs,
        "starting transition replay"
    );

    let rendered = run(&config).and_then(|result| {
        let text = output::render(&result, &config.replay.output)?;
        Ok((result, text))
    });
    match rendered {
        Ok((result, text)) => {
            info!(status = %result.status(), "replay finished");
            println!("{text}");
            // Timeouts exit non-zero so the replay can gate a script.
            std::process::exit(if result.is_complete() { 0 } else { 1 });
        }
        Err(e) => {
            error!(error = %e, "replay failed");
            std::process::exit(2);
        }
    }
}

/// Measure the transition recorded in `config.replay.frames_dir`.
fn run(config: &Config) -> Result<TransitionResult, ReplayError> {
    let request = TransitionRequest::from_config(&config.transition)?;
    let captured = capture::scan(&config.replay.frames_dir)?;
    info!(frames = captured.len(), "scanned capture directory");

    let mut source = DirectorySource::new(captured.clone());
    let mut sink = TracingSink;
    let result = match config.replay.press_at_ms {
        Some(press_at_ms) => {
            let mut actuator = ReplayActuator::new(captured, press_at_ms);
            press_and_wait(
                &mut actuator,
                &mut source,
                &config.replay.action,
                &request,
                &mut sink,
            )?
        }
        None => wait_for_transition_to_end(&mut source, None, &request, &mut sink)?,
    };
    Ok(result)
}
