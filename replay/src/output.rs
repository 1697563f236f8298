use chrono::{DateTime, Utc};
use transition_detector::TransitionResult;

use crate::ReplayError;

/// UTC wall-clock rendering, or `None` when `secs` is outside chrono's range.
fn fmt_ts(secs: f64) -> Option<String> {
    let dt: DateTime<Utc> = DateTime::from_timestamp_millis((secs * 1000.0).round() as i64)?;
    Some(dt.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string())
}

fn fmt_time(t: Option<f64>) -> String {
    match t {
        Some(t) => match fmt_ts(t) {
            Some(ts) => format!("{t:.3} ({ts})"),
            None => format!("{t:.3}"),
        },
        None => "-".into(),
    }
}

fn fmt_duration(d: Option<f64>) -> String {
    match d {
        Some(d) => format!("{d:.3}s"),
        None => "-".into(),
    }
}

/// Render a result as `text` (one field per line) or `json`.
pub fn render(result: &TransitionResult, format: &str) -> Result<String, ReplayError> {
    match format {
        "text" => Ok([
            format!("status:               {}", result.status()),
            format!("frame:                {}", fmt_time(Some(result.frame().time))),
            format!("press_time:           {}", fmt_time(result.press_time())),
            format!("animation_start_time: {}", fmt_time(result.animation_start_time())),
            format!("end_time:             {}", fmt_time(result.end_time())),
            format!("duration:             {}", fmt_duration(result.duration())),
            format!("animation_duration:   {}", fmt_duration(result.animation_duration())),
        ]
        .join("\n")),
        "json" => Ok(serde_json::to_string_pretty(result)?),
        other => Err(ReplayError::UnknownOutput(other.to_string())),
    }
}
