use std::fmt;

/// A parsed volume argument: either an absolute level or a signed delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeSpec {
    /// Set the mixer to this level (0-100).
    Absolute(u8),
    /// Adjust the mixer by this many steps (`+N` / `-N` on the command line).
    Relative(i64),
}

impl fmt::Display for VolumeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VolumeSpec::Absolute(v) => write!(f, "{}", v),
            VolumeSpec::Relative(d) => write!(f, "{:+}", d),
        }
    }
}

/// Parses a volume argument for clap.
///
/// A leading `+` or `-` marks a relative adjustment; a bare number is an
/// absolute level and must be within 0-100. Anything else is rejected at
/// parse time.
pub fn parse_volume_spec(s: &str) -> Result<VolumeSpec, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("volume cannot be empty".to_string());
    }
    if s.starts_with('+') || s.starts_with('-') {
        let delta: i64 = s
            .parse()
            .map_err(|_| format!("invalid volume adjustment '{}'", s))?;
        return Ok(VolumeSpec::Relative(delta));
    }
    let level: u8 = s
        .parse()
        .map_err(|_| format!("invalid volume level '{}'", s))?;
    if level > 100 {
        return Err(format!("volume level {} out of range (0-100)", level));
    }
    Ok(VolumeSpec::Absolute(level))
}

/// Formats a track time in seconds as `M:SS`, or `?:??` when unknown.
///
/// Fractional seconds are truncated, never rounded up, so `3599.9`
/// renders as `59:59`.
pub fn fmt_time(seconds: Option<f64>) -> String {
    match seconds {
        Some(s) if s.is_finite() && s >= 0.0 => {
            let s = s as u64;
            format!("{}:{:02}", s / 60, s % 60)
        }
        _ => "?:??".to_string(),
    }
}

/// Formats a playlist position as 1-indexed `current/total`, with `?`
/// standing in for whichever half the server did not report.
pub fn fmt_track_position(index: Option<u64>, total: Option<u64>) -> String {
    let current = index.map_or_else(|| "?".to_string(), |i| (i + 1).to_string());
    let total = total.map_or_else(|| "?".to_string(), |t| t.to_string());
    format!("{}/{}", current, total)
}

/// Joins free-text query words into the single search term the server
/// expects, preserving word order.
pub fn join_query(parts: &[String]) -> String {
    parts.join(" ")
}
