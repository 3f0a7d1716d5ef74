//! Custom serde helpers for on-chain integer wire formats.

/// (De)serializes an `i128` as a decimal string.
///
/// Contract integers (`int256`/`uint256`) exceed JSON's safe number range, so
/// chain clients hand them over as strings. Plain JSON numbers are accepted
/// on input as well.
pub mod int_str {
    use serde::{de, Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StrOrNum {
        Str(String),
        Num(i64),
        U64(u64),
    }

    pub fn serialize<S>(value: &i128, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<i128, D::Error>
    where
        D: Deserializer<'de>,
    {
        match StrOrNum::deserialize(deserializer)? {
            StrOrNum::Str(s) => s
                .trim()
                .parse::<i128>()
                .map_err(|e| de::Error::custom(format!("Invalid integer '{}': {}", s, e))),
            StrOrNum::Num(n) => Ok(i128::from(n)),
            StrOrNum::U64(n) => Ok(i128::from(n)),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Raw {
        #[serde(with = "super::int_str")]
        amount: i128,
    }

    #[test]
    fn test_int_str_accepts_string_and_number() {
        let a: Raw = serde_json::from_str(r#"{"amount":"1500000000000000000000"}"#).unwrap();
        assert_eq!(a.amount, 1_500_000_000_000_000_000_000);
        let b: Raw = serde_json::from_str(r#"{"amount":-42}"#).unwrap();
        assert_eq!(b.amount, -42);
    }

    #[test]
    fn test_int_str_accepts_numbers_above_i64() {
        // 10.0 at 18 decimals
        let a: Raw = serde_json::from_str(r#"{"amount":10000000000000000000}"#).unwrap();
        assert_eq!(a.amount, 10_000_000_000_000_000_000);
        let max: Raw = serde_json::from_str(r#"{"amount":18446744073709551615}"#).unwrap();
        assert_eq!(max.amount, u64::MAX as i128);
    }

    #[test]
    fn test_int_str_serializes_as_string() {
        let json = serde_json::to_string(&Raw { amount: 7 }).unwrap();
        assert_eq!(json, r#"{"amount":"7"}"#);
    }

    #[test]
    fn test_int_str_rejects_garbage() {
        assert!(serde_json::from_str::<Raw>(r#"{"amount":"12ab"}"#).is_err());
    }
}
