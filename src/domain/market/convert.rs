//! Conversion: CountryTuple → Country (TryFrom + validation).

use super::wire::CountryTuple;
use super::{Country, CountryKey, ValidationError};

fn is_address(s: &str) -> bool {
    s.strip_prefix("0x")
        .map(|hex| hex.len() == 40 && hex.chars().all(|c| c.is_ascii_hexdigit()))
        .unwrap_or(false)
}

impl TryFrom<CountryTuple> for Country {
    type Error = ValidationError;

    fn try_from(source: CountryTuple) -> Result<Self, Self::Error> {
        let mut errors: Vec<ValidationError> = Vec::new();

        let key = source
            .country_code
            .parse::<CountryKey>()
            .unwrap_or_else(|e| {
                errors.push(ValidationError::InvalidKey(e));
                CountryKey::default()
            });

        if source.name.trim().is_empty() {
            errors.push(ValidationError::NameMissing);
        }

        if !is_address(&source.price_feed) {
            errors.push(ValidationError::InvalidPriceFeed(source.price_feed.clone()));
        }

        if !errors.is_empty() {
            return Err(ValidationError::Multiple(source.country_code, errors));
        }

        Ok(Country {
            key,
            name: source.name,
            price_feed: source.price_feed.to_lowercase(),
            is_active: source.is_active,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tuple(code: &str, name: &str, feed: &str) -> CountryTuple {
        CountryTuple {
            country_code: code.to_string(),
            name: name.to_string(),
            price_feed: feed.to_string(),
            is_active: true,
        }
    }

    #[test]
    fn test_valid_tuple() {
        let key = CountryKey::encode("ID").unwrap();
        let country = Country::try_from(tuple(
            &key.to_hex(),
            "Indonesia",
            "0xAbCdEf0123456789aBcDeF0123456789abcdef01",
        ))
        .unwrap();
        assert_eq!(country.key, key);
        assert_eq!(country.price_feed, "0xabcdef0123456789abcdef0123456789abcdef01");
        assert_eq!(country.short_code(), "IN");
    }

    #[test]
    fn test_invalid_tuple_collects_all_errors() {
        let err = Country::try_from(tuple("0x12", " ", "not-an-address")).unwrap_err();
        match err {
            ValidationError::Multiple(code, errors) => {
                assert_eq!(code, "0x12");
                assert_eq!(errors.len(), 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_tuple_from_json() {
        let json = r#"{"countryCode":"0x0783b66b75b3ec46e8e9e7694059adf60d701de8fbaa12f566a6b52c64f77f90","name":"Indonesia","priceFeed":"0x0000000000000000000000000000000000000001","isActive":false}"#;
        let t: CountryTuple = serde_json::from_str(json).unwrap();
        let country = Country::try_from(t).unwrap();
        assert_eq!(country.key, CountryKey::encode("ID").unwrap());
        assert!(!country.is_active);
    }
}
