//! Static table of generator definitions.
//!
//! A definition lists the option keys its type accepts and converts a raw
//! option list into a typed [`GeneratorConfig`]. `ordinal` is accepted by
//! every type; the option resolver handles it before the definition sees
//! the options.

use super::datetime;
use super::unicode::MAX_UNICODE_LENGTH;
use super::{Case, GeneratorConfig, GeneratorKind};
use crate::template::placeholder::RawOptions;

/// Key shared by every generator type.
pub const ORDINAL_KEY: &str = "ordinal";

/// Conversion failure for a single placeholder, before the raw text is attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionError {
    Invalid { key: &'static str, reason: String },
    Range { min: String, max: String },
}

type Resolve = fn(&RawOptions<'_>) -> Result<GeneratorConfig, OptionError>;

/// Everything the compiler knows about one placeholder type.
pub struct GeneratorDefinition {
    pub kind: GeneratorKind,
    /// Recognized option keys, `ordinal` included
    pub keys: &'static [&'static str],
    resolve: Resolve,
}

impl GeneratorDefinition {
    pub fn accepts(&self, key: &str) -> bool {
        self.keys.contains(&key)
    }

    /// Convert and validate the type-specific options.
    pub fn resolve(&self, options: &RawOptions<'_>) -> Result<GeneratorConfig, OptionError> {
        (self.resolve)(options)
    }
}

pub static REGISTRY: [GeneratorDefinition; 7] = [
    GeneratorDefinition {
        kind: GeneratorKind::Guid,
        keys: &[ORDINAL_KEY],
        resolve: resolve_guid,
    },
    GeneratorDefinition {
        kind: GeneratorKind::Now,
        keys: &[ORDINAL_KEY],
        resolve: resolve_now,
    },
    GeneratorDefinition {
        kind: GeneratorKind::Time,
        keys: &["min", "max", "format", ORDINAL_KEY],
        resolve: resolve_time,
    },
    GeneratorDefinition {
        kind: GeneratorKind::Int,
        keys: &["min", "max", ORDINAL_KEY],
        resolve: resolve_int,
    },
    GeneratorDefinition {
        kind: GeneratorKind::Float,
        keys: &["min", "max", ORDINAL_KEY],
        resolve: resolve_float,
    },
    GeneratorDefinition {
        kind: GeneratorKind::Country,
        keys: &["case", ORDINAL_KEY],
        resolve: resolve_country,
    },
    GeneratorDefinition {
        kind: GeneratorKind::Unicode,
        keys: &["length", "case", ORDINAL_KEY],
        resolve: resolve_unicode,
    },
];

/// Find the definition for a template type name.
pub fn lookup(type_name: &str) -> Option<&'static GeneratorDefinition> {
    let kind = GeneratorKind::from_name(type_name)?;
    REGISTRY.iter().find(|def| def.kind == kind)
}

const DEFAULT_INT_MIN: i64 = 0;
const DEFAULT_INT_MAX: i64 = 100;
const DEFAULT_FLOAT_MIN: f64 = 0.0;
const DEFAULT_FLOAT_MAX: f64 = 100.0;
const DEFAULT_UNICODE_LENGTH: usize = 2;

fn resolve_guid(_: &RawOptions<'_>) -> Result<GeneratorConfig, OptionError> {
    Ok(GeneratorConfig::Guid)
}

fn resolve_now(_: &RawOptions<'_>) -> Result<GeneratorConfig, OptionError> {
    Ok(GeneratorConfig::Now)
}

fn resolve_int(options: &RawOptions<'_>) -> Result<GeneratorConfig, OptionError> {
    let min = int_option(options, "min")?.unwrap_or(DEFAULT_INT_MIN);
    let max = int_option(options, "max")?.unwrap_or(DEFAULT_INT_MAX);
    if min > max {
        return Err(OptionError::Range {
            min: min.to_string(),
            max: max.to_string(),
        });
    }
    Ok(GeneratorConfig::Int { min, max })
}

fn resolve_float(options: &RawOptions<'_>) -> Result<GeneratorConfig, OptionError> {
    let min = float_option(options, "min")?.unwrap_or(DEFAULT_FLOAT_MIN);
    let max = float_option(options, "max")?.unwrap_or(DEFAULT_FLOAT_MAX);
    if min > max {
        return Err(OptionError::Range {
            min: min.to_string(),
            max: max.to_string(),
        });
    }
    if !(max - min).is_finite() {
        return Err(OptionError::Invalid {
            key: "max",
            reason: format!("range {}..={} is too wide", min, max),
        });
    }
    Ok(GeneratorConfig::Float { min, max })
}

fn resolve_time(options: &RawOptions<'_>) -> Result<GeneratorConfig, OptionError> {
    let min = timestamp_option(options, "min")?.unwrap_or(0);
    let max = timestamp_option(options, "max")?;
    if let Some(max) = max {
        if min > max {
            return Err(OptionError::Range {
                min: min.to_string(),
                max: max.to_string(),
            });
        }
    }
    let format = match options.get("format") {
        Some(value) => datetime::resolve_layout(value).map_err(|reason| OptionError::Invalid {
            key: "format",
            reason,
        })?,
        None => datetime::SIMPLE.to_string(),
    };
    Ok(GeneratorConfig::Time { min, max, format })
}

fn resolve_country(options: &RawOptions<'_>) -> Result<GeneratorConfig, OptionError> {
    let case = case_option(options)?;
    Ok(GeneratorConfig::Country { case })
}

fn resolve_unicode(options: &RawOptions<'_>) -> Result<GeneratorConfig, OptionError> {
    let length = match options.get("length") {
        Some(value) => parse_length(value)?,
        None => DEFAULT_UNICODE_LENGTH,
    };
    let case = case_option(options)?;
    Ok(GeneratorConfig::Unicode { length, case })
}

fn int_option(options: &RawOptions<'_>, key: &'static str) -> Result<Option<i64>, OptionError> {
    options
        .get(key)
        .map(|value| {
            value.parse::<i64>().map_err(|_| OptionError::Invalid {
                key,
                reason: format!("`{}` is not an integer", value),
            })
        })
        .transpose()
}

fn float_option(options: &RawOptions<'_>, key: &'static str) -> Result<Option<f64>, OptionError> {
    options
        .get(key)
        .map(|value| match value.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(v),
            _ => Err(OptionError::Invalid {
                key,
                reason: format!("`{}` is not a finite number", value),
            }),
        })
        .transpose()
}

fn timestamp_option(
    options: &RawOptions<'_>,
    key: &'static str,
) -> Result<Option<i64>, OptionError> {
    let Some(secs) = int_option(options, key)? else {
        return Ok(None);
    };
    if chrono::DateTime::from_timestamp(secs, 0).is_none() {
        return Err(OptionError::Invalid {
            key,
            reason: format!("{} is not a representable Unix timestamp", secs),
        });
    }
    Ok(Some(secs))
}

fn case_option(options: &RawOptions<'_>) -> Result<Case, OptionError> {
    match options.get("case") {
        Some(value) => value
            .parse::<Case>()
            .map_err(|reason| OptionError::Invalid { key: "case", reason }),
        None => Ok(Case::AsIs),
    }
}

fn parse_length(value: &str) -> Result<usize, OptionError> {
    match value.parse::<usize>() {
        Ok(0) => Err(OptionError::Invalid {
            key: "length",
            reason: "length must be greater than 0".to_string(),
        }),
        Ok(length) if length > MAX_UNICODE_LENGTH => Err(OptionError::Invalid {
            key: "length",
            reason: format!("length must be at most {}", MAX_UNICODE_LENGTH),
        }),
        Ok(length) => Ok(length),
        Err(_) => Err(OptionError::Invalid {
            key: "length",
            reason: format!("`{}` is not a positive integer", value),
        }),
    }
}

/// Parse an `ordinal` value: a non-negative position.
pub fn parse_ordinal(value: &str) -> Result<usize, OptionError> {
    value.parse::<usize>().map_err(|_| OptionError::Invalid {
        key: ORDINAL_KEY,
        reason: format!("`{}` is not a non-negative integer", value),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options<'a>(pairs: &[(&'a str, &'a str)]) -> RawOptions<'a> {
        RawOptions::from(pairs.to_vec())
    }

    #[test]
    fn test_every_kind_is_registered() {
        for kind in GeneratorKind::ALL {
            let def = lookup(kind.name()).expect("registered");
            assert_eq!(def.kind, kind);
            assert!(def.accepts(ORDINAL_KEY));
        }
        assert!(lookup("badtype").is_none());
    }

    #[test]
    fn test_int_defaults_and_bounds() {
        let def = lookup("int").unwrap();
        assert_eq!(
            def.resolve(&options(&[])).unwrap(),
            GeneratorConfig::Int { min: 0, max: 100 }
        );
        assert_eq!(
            def.resolve(&options(&[("min", "-2000"), ("max", "0")]))
                .unwrap(),
            GeneratorConfig::Int { min: -2000, max: 0 }
        );
        assert_eq!(
            def.resolve(&options(&[("min", "10"), ("max", "1")])),
            Err(OptionError::Range {
                min: "10".to_string(),
                max: "1".to_string()
            })
        );
        assert!(matches!(
            def.resolve(&options(&[("min", "ten")])),
            Err(OptionError::Invalid { key: "min", .. })
        ));
    }

    #[test]
    fn test_float_rejects_non_finite() {
        let def = lookup("float").unwrap();
        assert_eq!(
            def.resolve(&options(&[("min", "-1000.0"), ("max", "-540.0")]))
                .unwrap(),
            GeneratorConfig::Float {
                min: -1000.0,
                max: -540.0
            }
        );
        assert!(def.resolve(&options(&[("max", "inf")])).is_err());
        assert!(def.resolve(&options(&[("min", "NaN")])).is_err());
        assert!(def
            .resolve(&options(&[("min", "-1e308"), ("max", "1e308")]))
            .is_err());
    }

    #[test]
    fn test_duplicate_keys_last_wins() {
        let def = lookup("int").unwrap();
        assert_eq!(
            def.resolve(&options(&[("max", "1"), ("max", "9")])).unwrap(),
            GeneratorConfig::Int { min: 0, max: 9 }
        );
    }

    #[test]
    fn test_time_options() {
        let def = lookup("time").unwrap();
        assert_eq!(
            def.resolve(&options(&[
                ("min", "1"),
                ("max", "1"),
                ("format", "%Y-%m-%d")
            ]))
            .unwrap(),
            GeneratorConfig::Time {
                min: 1,
                max: Some(1),
                format: "%Y-%m-%d".to_string()
            }
        );
        assert!(matches!(
            def.resolve(&options(&[("format", "")])),
            Err(OptionError::Invalid { key: "format", .. })
        ));
        assert!(matches!(
            def.resolve(&options(&[("min", "5"), ("max", "4")])),
            Err(OptionError::Range { .. })
        ));
        assert!(matches!(
            def.resolve(&options(&[("max", "9223372036854775807")])),
            Err(OptionError::Invalid { key: "max", .. })
        ));
    }

    #[test]
    fn test_unicode_length() {
        let def = lookup("unicode").unwrap();
        assert_eq!(
            def.resolve(&options(&[("length", "2"), ("case", "up")]))
                .unwrap(),
            GeneratorConfig::Unicode {
                length: 2,
                case: Case::Up
            }
        );
        assert!(def.resolve(&options(&[("length", "0")])).is_err());
        assert!(def.resolve(&options(&[("length", "-3")])).is_err());
        assert!(def.resolve(&options(&[("case", "title")])).is_err());
    }

    #[test]
    fn test_unicode_length_cap() {
        let def = lookup("unicode").unwrap();
        let at_cap = MAX_UNICODE_LENGTH.to_string();
        assert_eq!(
            def.resolve(&options(&[("length", at_cap.as_str())])).unwrap(),
            GeneratorConfig::Unicode {
                length: MAX_UNICODE_LENGTH,
                case: Case::AsIs
            }
        );
        let over_cap = (MAX_UNICODE_LENGTH + 1).to_string();
        assert!(matches!(
            def.resolve(&options(&[("length", over_cap.as_str())])),
            Err(OptionError::Invalid { key: "length", .. })
        ));
        assert!(matches!(
            def.resolve(&options(&[("length", "18446744073709551615")])),
            Err(OptionError::Invalid { key: "length", .. })
        ));
    }

    #[test]
    fn test_parse_ordinal() {
        assert_eq!(parse_ordinal("0"), Ok(0));
        assert_eq!(parse_ordinal("12"), Ok(12));
        assert!(parse_ordinal("-1").is_err());
        assert!(parse_ordinal("first").is_err());
    }
}
