//! Request timeouts written as `15s` or `500ms`.

use std::time::Duration;

use crate::error::{PlotError, Result};

/// Parse a timeout such as `"15s"`, `"2.5s"` or `"500ms"`.
pub fn parse_duration(text: &str) -> Result<Duration> {
    let text = text.trim();
    let bad = |reason: &str| PlotError::Config(format!("timeout {:?}: {}", text, reason));

    let (value, millis) = if let Some(value) = text.strip_suffix("ms") {
        (value, true)
    } else if let Some(value) = text.strip_suffix('s') {
        (value, false)
    } else {
        return Err(bad("expected a `s` or `ms` suffix"));
    };

    let value: f64 = value.trim().parse().map_err(|_| bad("not a number"))?;
    if !value.is_finite() || value < 0.0 {
        return Err(bad("must be a non-negative number"));
    }
    let secs = if millis { value / 1_000.0 } else { value };
    Ok(Duration::from_secs_f64(secs))
}

/// Format a timeout the way [`parse_duration`] reads it back.
pub fn format_duration(d: Duration) -> String {
    if d.subsec_nanos() == 0 {
        format!("{}s", d.as_secs())
    } else if d < Duration::from_secs(1) {
        format!("{}ms", d.as_secs_f64() * 1_000.0)
    } else {
        format!("{}s", d.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_netdata_default_timeout() {
        assert_eq!(parse_duration("15s").unwrap(), Duration::from_secs(15));
        assert_eq!(parse_duration(" 2.5s ").unwrap(), Duration::from_millis(2500));
    }

    #[test]
    fn test_parse_milliseconds() {
        assert_eq!(parse_duration("500ms").unwrap(), Duration::from_millis(500));
    }

    #[test]
    fn test_parse_rejects_bad_timeouts() {
        for text in ["15", "15m", "fast", "-1s", "ms", "infs"] {
            let err = parse_duration(text).unwrap_err();
            assert!(matches!(err, PlotError::Config(_)), "{text}");
        }
    }

    #[test]
    fn test_format_reads_back() {
        assert_eq!(format_duration(Duration::from_secs(15)), "15s");
        assert_eq!(format_duration(Duration::from_millis(500)), "500ms");
        assert_eq!(format_duration(Duration::from_millis(2500)), "2.5s");
        for d in [Duration::from_secs(15), Duration::from_millis(500)] {
            assert_eq!(parse_duration(&format_duration(d)).unwrap(), d);
        }
    }
}
