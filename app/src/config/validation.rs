//! Setting value validation.

use sampling::SearchStrategy;

/// Validate a setting value. Returns `Ok(())` if valid, or an error message.
pub fn validate_setting(key: &str, value: &str) -> Result<(), String> {
    match key {
        "STIPPLE_INPUT" | "STIPPLE_OUTPUT" => {
            if value.trim().is_empty() {
                return Err("path must not be empty".into());
            }
        }
        "STIPPLE_DOTS" => validate_int_range(value, 1, 10_000_000)?,
        "STIPPLE_MIN_RADIUS" | "STIPPLE_MAX_RADIUS" => validate_int_range(value, 0, 512)?,
        "STIPPLE_JITTER" => validate_int_range(value, 0, 64)?,
        "STIPPLE_BIAS" => validate_int_range(value, -255, 255)?,
        "STIPPLE_SEED" => {
            value
                .parse::<u64>()
                .map_err(|_| "must be an unsigned 64-bit integer")?;
        }
        "STIPPLE_SEARCH" => {
            value
                .parse::<SearchStrategy>()
                .map_err(|_| "must be 'standard' or 'converging'")?;
        }
        // Boolean settings
        k if is_boolean_setting(k) => {
            if value != "true" && value != "false" {
                return Err("must be 'true' or 'false'".into());
            }
        }
        _ => {}
    }
    Ok(())
}

fn validate_int_range(value: &str, min: i64, max: i64) -> Result<(), String> {
    let v: i64 = value.parse().map_err(|_| "must be an integer")?;
    if v < min || v > max {
        return Err(format!("must be between {min} and {max}"));
    }
    Ok(())
}

fn is_boolean_setting(key: &str) -> bool {
    matches!(key, "STIPPLE_RANDOM_COLORS")
}
