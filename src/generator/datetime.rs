//! `now` and `time` generators.

use super::GenerateError;
use crate::source::{Clock, RandomSource};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Utc};
use std::fmt::Write;

/// Default layout, also used for `now`
pub const SIMPLE: &str = "%Y-%m-%d %H:%M:%S";
pub const SIMPLE_TZ: &str = "%Y-%m-%d %H:%M:%S %z";
pub const RFC3339: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// Map a `format` option to a strftime layout, checking it can render.
pub fn resolve_layout(value: &str) -> Result<String, String> {
    let layout = match value {
        "simple" => SIMPLE,
        "simpletz" => SIMPLE_TZ,
        "rfc3339" => RFC3339,
        other => other,
    };
    if layout.is_empty() {
        return Err("format must not be empty".to_string());
    }
    if StrftimeItems::new(layout).any(|item| matches!(item, Item::Error)) {
        return Err(format!("`{}` is not a valid strftime layout", value));
    }
    // Some specifiers parse but cannot render a UTC timestamp
    let mut probe = String::new();
    if write!(probe, "{}", DateTime::<Utc>::default().format(layout)).is_err() {
        return Err(format!("`{}` cannot render a timestamp", value));
    }
    Ok(layout.to_string())
}

pub fn now(clock: &dyn Clock) -> Result<String, GenerateError> {
    render(clock.now(), SIMPLE)
}

/// Random instant in `[min, max]` Unix seconds; `max` defaults to the clock.
pub fn time(
    rng: &mut dyn RandomSource,
    clock: &dyn Clock,
    min: i64,
    max: Option<i64>,
    format: &str,
) -> Result<String, GenerateError> {
    let max = max.unwrap_or_else(|| clock.now().timestamp());
    if min > max {
        return Err(GenerateError::EmptyTimeRange { min, max });
    }
    let secs = rng.int(min, max)?;
    let at = DateTime::from_timestamp(secs, 0).ok_or(GenerateError::TimestampOutOfRange(secs))?;
    render(at, format)
}

fn render(at: DateTime<Utc>, layout: &str) -> Result<String, GenerateError> {
    let mut out = String::new();
    write!(out, "{}", at.format(layout)).map_err(|_| GenerateError::Format(layout.to_string()))?;
    Ok(out)
}
