//! Melon catalog records.

use serde::{Deserialize, Serialize};

use crate::types::id::MelonId;
use crate::types::price::Price;
use crate::types::record::{RecordError, parse_flag, split_fields};

/// A melon Ubermelon has for sale.
///
/// Record format: `id|melon_type|common_name|price|image_url|color|seedless`,
/// where `price` is in dollars and `seedless` is `1` or `0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Melon {
    pub id: MelonId,
    pub melon_type: String,
    pub common_name: String,
    pub price: Price,
    pub image_url: String,
    pub color: String,
    pub seedless: bool,
}

impl Melon {
    /// Number of fields in a melon record.
    pub const FIELD_COUNT: usize = 7;

    /// Parse one line of the melon catalog file.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::FieldCount` for a wrong number of fields,
    /// `RecordError::Price` for an unparsable price, and `RecordError::Flag`
    /// for an unparsable seedless flag.
    pub fn parse_record(line: &str) -> Result<Self, RecordError> {
        let [id, melon_type, common_name, price, image_url, color, seedless] =
            split_fields::<{ Melon::FIELD_COUNT }>(line)?;

        Ok(Self {
            id: MelonId::new(id),
            melon_type: melon_type.to_owned(),
            common_name: common_name.to_owned(),
            price: Price::parse(price)?,
            image_url: image_url.to_owned(),
            color: color.to_owned(),
            seedless: parse_flag(seedless)?,
        })
    }

    /// Unit price formatted for display, e.g. `$2.95`.
    #[must_use]
    pub fn price_str(&self) -> String {
        self.price.to_string()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const CRENSHAW: &str = "cren|Crenshaw|Crenshaw|2.00|http://img/cren.jpg|green|0";

    #[test]
    fn test_parse_record() {
        let melon = Melon::parse_record(CRENSHAW).unwrap();
        assert_eq!(melon.id, MelonId::new("cren"));
        assert_eq!(melon.common_name, "Crenshaw");
        assert_eq!(melon.price, Price::from_cents(200));
        assert_eq!(melon.price_str(), "$2.00");
        assert_eq!(melon.color, "green");
        assert!(!melon.seedless);
    }

    #[test]
    fn test_parse_record_bad_price() {
        let err = Melon::parse_record("cren|Crenshaw|Crenshaw|two|x|green|0").unwrap_err();
        assert!(matches!(err, RecordError::Price(_)));
    }

    #[test]
    fn test_parse_record_bad_flag() {
        let err = Melon::parse_record("cren|Crenshaw|Crenshaw|2.00|x|green|yes").unwrap_err();
        assert!(matches!(err, RecordError::Flag(_)));
    }

    #[test]
    fn test_parse_record_field_count() {
        let err = Melon::parse_record("cren|Crenshaw|2.00").unwrap_err();
        assert_eq!(
            err,
            RecordError::FieldCount {
                expected: 7,
                found: 3
            }
        );
    }
}
