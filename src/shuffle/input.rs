//! Command-line input handling for the shuffle: sequence parsing, seeding
//! and output formatting.

use super::lcg::Lcg;
use anyhow::{anyhow, Result};
use std::time::{SystemTime, UNIX_EPOCH};

/// Environment variable holding the explicit seed
pub const SEED_ENV: &str = "RAND_SEED";

/// Where the generator seed came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedSource {
    /// Parsed from `RAND_SEED`
    Explicit(String),
    /// Wall-clock seconds since the epoch; not reproducible
    Clock(u64),
}

impl std::fmt::Display for SeedSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeedSource::Explicit(s) => write!(f, "{}={}", SEED_ENV, s),
            SeedSource::Clock(secs) => write!(f, "clock={}", secs),
        }
    }
}

/// Parse comma-separated integers. Whitespace around each token is ignored.
pub fn parse_sequence(text: &str) -> Result<Vec<i64>> {
    text.split(',')
        .map(|token| {
            let token = token.trim();
            token
                .parse::<i64>()
                .map_err(|_| anyhow!("invalid integer '{}'", token))
        })
        .collect()
}

/// Build a generator from the `RAND_SEED` value, falling back to the clock.
pub fn resolve_seed(env_value: Option<String>) -> Result<(Lcg, SeedSource)> {
    match env_value {
        Some(raw) => {
            let rng = Lcg::from_decimal(&raw)
                .map_err(|_| anyhow!("invalid {} value: {}", SEED_ENV, raw))?;
            Ok((rng, SeedSource::Explicit(raw)))
        }
        None => {
            let secs = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0);
            Ok((Lcg::new(secs as i64), SeedSource::Clock(secs)))
        }
    }
}

/// Read `RAND_SEED` from the process environment.
///
/// A value that is not valid unicode is passed through lossily so it fails
/// seed parsing instead of silently falling back to the clock.
pub fn seed_from_env() -> Option<String> {
    std::env::var_os(SEED_ENV).map(|v| v.to_string_lossy().into_owned())
}

pub fn format_sequence(values: &[i64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sequence() {
        assert_eq!(parse_sequence("5,3,8,1,9").unwrap(), vec![5, 3, 8, 1, 9]);
        assert_eq!(parse_sequence(" -1 , 2,\t3 ").unwrap(), vec![-1, 2, 3]);
        assert_eq!(parse_sequence("7").unwrap(), vec![7]);
    }

    #[test]
    fn test_parse_sequence_names_bad_token() {
        let err = parse_sequence("1,two,3").unwrap_err();
        assert!(err.to_string().contains("'two'"), "{}", err);

        let err = parse_sequence("1,,3").unwrap_err();
        assert!(err.to_string().contains("''"), "{}", err);
    }

    #[test]
    fn test_parse_sequence_rejects_empty_argument() {
        assert!(parse_sequence("").is_err());
    }

    #[test]
    fn test_parse_sequence_rejects_overflow() {
        assert!(parse_sequence("99999999999999999999").is_err());
    }

    #[test]
    fn test_resolve_seed_explicit() {
        let (mut rng, source) = resolve_seed(Some("42".to_string())).unwrap();
        assert_eq!(source, SeedSource::Explicit("42".to_string()));
        assert_eq!(rng.next(), 1250496027);
    }

    #[test]
    fn test_resolve_seed_invalid() {
        let err = resolve_seed(Some("forty-two".to_string())).unwrap_err();
        assert_eq!(err.to_string(), "invalid RAND_SEED value: forty-two");
    }

    #[test]
    fn test_resolve_seed_clock_fallback() {
        let (rng, source) = resolve_seed(None).unwrap();
        match source {
            SeedSource::Clock(secs) => assert_eq!(rng, Lcg::new(secs as i64)),
            other => panic!("unexpected seed source {:?}", other),
        }
    }

    #[test]
    fn test_format_sequence() {
        assert_eq!(format_sequence(&[3, 1, 9, 5, 8]), "3,1,9,5,8");
        assert_eq!(format_sequence(&[-4]), "-4");
        assert_eq!(format_sequence(&[]), "");
    }
}
