use lmscli::utils::*;

#[test]
fn test_fmt_time_unknown() {
    assert_eq!(fmt_time(None), "?:??");

    // Garbage from the server should never panic
    assert_eq!(fmt_time(Some(f64::NAN)), "?:??");
    assert_eq!(fmt_time(Some(-3.0)), "?:??");
}

#[test]
fn test_fmt_time_formatting() {
    assert_eq!(fmt_time(Some(0.0)), "0:00");
    assert_eq!(fmt_time(Some(5.0)), "0:05");
    assert_eq!(fmt_time(Some(65.0)), "1:05");
    assert_eq!(fmt_time(Some(600.0)), "10:00");

    // Fractional seconds are truncated, not rounded up
    assert_eq!(fmt_time(Some(3599.9)), "59:59");
    assert_eq!(fmt_time(Some(59.999)), "0:59");

    // Long tracks roll past the hour without special casing
    assert_eq!(fmt_time(Some(3661.0)), "61:01");
}

#[test]
fn test_parse_volume_spec_relative() {
    assert_eq!(parse_volume_spec("+5"), Ok(VolumeSpec::Relative(5)));
    assert_eq!(parse_volume_spec("-10"), Ok(VolumeSpec::Relative(-10)));

    // Relative changes are not range-limited; the mixer clamps server-side
    assert_eq!(parse_volume_spec("+200"), Ok(VolumeSpec::Relative(200)));
}

#[test]
fn test_parse_volume_spec_absolute() {
    assert_eq!(parse_volume_spec("0"), Ok(VolumeSpec::Absolute(0)));
    assert_eq!(parse_volume_spec("10"), Ok(VolumeSpec::Absolute(10)));
    assert_eq!(parse_volume_spec("100"), Ok(VolumeSpec::Absolute(100)));
}

#[test]
fn test_parse_volume_spec_invalid() {
    let result = parse_volume_spec("101");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("out of range"));

    assert!(parse_volume_spec("").is_err());
    assert!(parse_volume_spec("   ").is_err());
    assert!(parse_volume_spec("loud").is_err());
    assert!(parse_volume_spec("+loud").is_err());
    assert!(parse_volume_spec("1.5").is_err());
}

#[test]
fn test_volume_spec_display() {
    assert_eq!(VolumeSpec::Absolute(40).to_string(), "40");
    assert_eq!(VolumeSpec::Relative(5).to_string(), "+5");
    assert_eq!(VolumeSpec::Relative(-5).to_string(), "-5");
}

#[test]
fn test_join_query() {
    let parts = vec!["foo".to_string(), "bar".to_string()];
    assert_eq!(join_query(&parts), "foo bar");

    // Order is preserved exactly as given
    let parts = vec!["bar".to_string(), "foo".to_string()];
    assert_eq!(join_query(&parts), "bar foo");

    assert_eq!(join_query(&["beatles".to_string()]), "beatles");
    assert_eq!(join_query(&[]), "");
}

#[test]
fn test_fmt_track_position() {
    // Server index is 0-based, display is 1-based
    assert_eq!(fmt_track_position(Some(0), Some(12)), "1/12");
    assert_eq!(fmt_track_position(Some(2), Some(10)), "3/10");

    assert_eq!(fmt_track_position(None, Some(10)), "?/10");
    assert_eq!(fmt_track_position(Some(2), None), "3/?");
    assert_eq!(fmt_track_position(None, None), "?/?");
}
