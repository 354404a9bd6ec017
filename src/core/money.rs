use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

pub const MAN_WON: f64 = 10_000.0;

/// A user-entered amount in man-won (units of 10,000 won). Conversion to
/// base currency units happens in exactly one place, `won()`.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd)]
pub struct ManWon(i64);

impl ManWon {
    pub const ZERO: ManWon = ManWon(0);

    pub fn new(amount: i64) -> ManWon {
        ManWon(amount.max(0))
    }

    pub fn amount(self) -> i64 {
        self.0
    }

    pub fn won(self) -> f64 {
        self.0 as f64 * MAN_WON
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    fn from_lenient(value: f64) -> ManWon {
        if value.is_finite() {
            ManWon::new(value.trunc() as i64)
        } else {
            ManWon::ZERO
        }
    }
}

impl fmt::Display for ManWon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ManWon {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<ManWon, ParseIntError> {
        s.trim().parse::<i64>().map(ManWon::new)
    }
}

impl Serialize for ManWon {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(self.0)
    }
}

impl<'de> Deserialize<'de> for ManWon {
    fn deserialize<D>(deserializer: D) -> Result<ManWon, D::Error>
    where
        D: Deserializer<'de>,
    {
        Lenient::deserialize(deserializer).map(|v| ManWon::from_lenient(v.0))
    }
}

/// Form clients send amounts as numbers or digit strings interchangeably;
/// anything non-numeric counts as zero rather than an error.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Lenient(pub f64);

fn parse_lenient(raw: &str) -> f64 {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return 0.0;
    }
    cleaned.parse::<f64>().unwrap_or(0.0)
}

impl<'de> Deserialize<'de> for Lenient {
    fn deserialize<D>(deserializer: D) -> Result<Lenient, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct LenientVisitor;

        impl<'de> Visitor<'de> for LenientVisitor {
            type Value = Lenient;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a number, a numeric string, or null")
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Lenient, E> {
                Ok(Lenient(v as f64))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Lenient, E> {
                Ok(Lenient(v as f64))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Lenient, E> {
                Ok(Lenient(v))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Lenient, E> {
                Ok(Lenient(parse_lenient(v)))
            }

            fn visit_bool<E: de::Error>(self, _: bool) -> Result<Lenient, E> {
                Ok(Lenient(0.0))
            }

            fn visit_unit<E: de::Error>(self) -> Result<Lenient, E> {
                Ok(Lenient(0.0))
            }

            fn visit_none<E: de::Error>(self) -> Result<Lenient, E> {
                Ok(Lenient(0.0))
            }

            fn visit_some<D2>(self, deserializer: D2) -> Result<Lenient, D2::Error>
            where
                D2: Deserializer<'de>,
            {
                Lenient::deserialize(deserializer)
            }
        }

        deserializer.deserialize_any(LenientVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_negative_amounts_to_zero() {
        assert_eq!(ManWon::new(-500), ManWon::ZERO);
        assert_eq!(ManWon::new(500).amount(), 500);
    }

    #[test]
    fn won_scales_by_ten_thousand() {
        assert_eq!(ManWon::new(30_000).won(), 300_000_000.0);
        assert_eq!(ManWon::ZERO.won(), 0.0);
    }

    #[test]
    fn deserializes_numbers_and_digit_strings() {
        assert_eq!(serde_json::from_str::<ManWon>("30000").unwrap(), ManWon::new(30_000));
        assert_eq!(serde_json::from_str::<ManWon>("\"30000\"").unwrap(), ManWon::new(30_000));
        assert_eq!(serde_json::from_str::<ManWon>("\"1,250\"").unwrap(), ManWon::new(1_250));
    }

    #[test]
    fn deserializes_garbage_as_zero() {
        for raw in ["\"\"", "\"  \"", "\"abc\"", "\"12만원\"", "null", "true"] {
            assert_eq!(
                serde_json::from_str::<ManWon>(raw).unwrap(),
                ManWon::ZERO,
                "raw input {raw}"
            );
        }
    }

    #[test]
    fn deserializes_fractions_and_negatives_truncated_and_clamped() {
        assert_eq!(serde_json::from_str::<ManWon>("30000.7").unwrap(), ManWon::new(30_000));
        assert_eq!(serde_json::from_str::<ManWon>("\"-500\"").unwrap(), ManWon::ZERO);
        assert_eq!(serde_json::from_str::<ManWon>("-500").unwrap(), ManWon::ZERO);
    }

    #[test]
    fn serializes_as_plain_integer() {
        assert_eq!(serde_json::to_string(&ManWon::new(4_500)).unwrap(), "4500");
    }

    #[test]
    fn parses_cli_values_strictly() {
        assert_eq!("30000".parse::<ManWon>().unwrap(), ManWon::new(30_000));
        assert_eq!(" 42 ".parse::<ManWon>().unwrap(), ManWon::new(42));
        assert!("12만원".parse::<ManWon>().is_err());
    }
}
