//! Tokenizing the INFO column against an [`InfoSchema`].

use fxhash::FxHashMap;
use log::debug;
use percent_encoding::percent_decode_str;

use crate::consts::MISSING_VALUE;
use crate::error::{ParseError, Result};
use crate::header::{InfoSchema, InfoType};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InfoValue {
    Flag,
    Values(Vec<String>),
}

impl InfoValue {
    ///
    /// First value of the field, if it is present and not the `.` placeholder.
    ///
    pub fn first(&self) -> Option<&str> {
        match self {
            InfoValue::Flag => None,
            InfoValue::Values(values) => values
                .first()
                .map(String::as_str)
                .filter(|v| !v.is_empty() && *v != MISSING_VALUE),
        }
    }
}

///
/// InfoField struct, the parsed INFO column of one data line.
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InfoField {
    entries: FxHashMap<String, InfoValue>,
}

impl InfoField {
    ///
    /// Parse an INFO column.
    ///
    /// # Arguments
    /// - raw: the INFO column text, e.g. `GENE=CYP2D6;STAR=*4;DP=31`
    /// - schema: INFO grammar from the header
    /// - line: line number for error reporting
    pub fn parse(raw: &str, schema: &InfoSchema, line: usize) -> Result<Self> {
        let mut entries = FxHashMap::default();
        if raw.is_empty() || raw == MISSING_VALUE {
            return Ok(InfoField { entries });
        }

        for entry in raw.split(';').filter(|e| !e.is_empty()) {
            let (key, value) = match entry.split_once('=') {
                Some((key, value)) => (key, Some(value)),
                None => (entry, None),
            };
            if key.is_empty() {
                return Err(ParseError::MalformedInfo {
                    line,
                    entry: entry.to_string(),
                });
            }

            let definition = schema.definition_for(key);
            let parsed = match value {
                None => InfoValue::Flag,
                Some(_) if definition.info_type == InfoType::Flag => InfoValue::Flag,
                Some(value) => {
                    let values: Vec<String> = value.split(',').map(decode_value).collect();
                    if let Some(bad) = mismatched_value(definition.info_type, &values) {
                        debug!(
                            "Line {}: INFO {} is declared {} but has value '{}', keeping it as text",
                            line, key, definition.info_type, bad
                        );
                    }
                    InfoValue::Values(values)
                }
            };
            entries.insert(key.to_string(), parsed);
        }

        Ok(InfoField { entries })
    }

    pub fn get(&self, key: &str) -> Option<&InfoValue> {
        self.entries.get(key)
    }

    /// First usable value of `key`.
    pub fn first(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(InfoValue::first)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Undo `%XX` escapes, e.g. `%3B` for `;` and `%2C` for `,`.
fn decode_value(raw: &str) -> String {
    percent_decode_str(raw).decode_utf8_lossy().into_owned()
}

/// First value that does not fit the declared type. Mismatches are not fatal.
fn mismatched_value(info_type: InfoType, values: &[String]) -> Option<&String> {
    values
        .iter()
        .filter(|v| v.as_str() != MISSING_VALUE)
        .find(|v| match info_type {
            InfoType::Integer => v.parse::<i64>().is_err(),
            InfoType::Float => v.parse::<f64>().is_err(),
            InfoType::Character => v.chars().count() != 1,
            InfoType::String | InfoType::Flag => false,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn schema() -> InfoSchema {
        InfoSchema::from_header_lines(vec![
            (1, "##INFO=<ID=GENE,Number=1,Type=String,Description=\"Gene\">"),
            (2, "##INFO=<ID=DP,Number=1,Type=Integer,Description=\"Depth\">"),
            (3, "##INFO=<ID=AF,Number=A,Type=Float,Description=\"Allele freq\">"),
            (4, "##INFO=<ID=PGX,Number=0,Type=Flag,Description=\"PGx site\">"),
        ])
        .unwrap()
    }

    #[rstest]
    fn test_parse_info_values(schema: InfoSchema) {
        let info = InfoField::parse("GENE=CYP2D6;STAR=*4,*10;DP=31;AF=0.5,0.25;PGX", &schema, 3)
            .unwrap();

        assert_eq!(info.len(), 5);
        assert_eq!(info.first("GENE"), Some("CYP2D6"));
        assert_eq!(
            info.get("STAR"),
            Some(&InfoValue::Values(vec!["*4".to_string(), "*10".to_string()]))
        );
        assert_eq!(info.first("STAR"), Some("*4"));
        assert_eq!(info.get("PGX"), Some(&InfoValue::Flag));
        assert_eq!(info.first("PGX"), None);
        assert_eq!(info.first("RS"), None);
    }

    #[rstest]
    fn test_declared_scalar_is_still_split(schema: InfoSchema) {
        let info = InfoField::parse("GENE=CYP2D6,CYP2D7;STAR=*4,*10", &schema, 3).unwrap();
        assert_eq!(info.first("GENE"), Some("CYP2D6"));
        assert_eq!(info.first("STAR"), Some("*4"));
    }

    #[rstest]
    fn test_values_are_percent_decoded(schema: InfoSchema) {
        let info = InfoField::parse("GENE=CYP2D6;NOTE=a%3Bb%2Cc,d%3De", &schema, 3).unwrap();
        assert_eq!(
            info.get("NOTE"),
            Some(&InfoValue::Values(vec!["a;b,c".to_string(), "d=e".to_string()]))
        );
    }

    #[rstest]
    #[case("")]
    #[case(".")]
    fn test_empty_info(schema: InfoSchema, #[case] raw: &str) {
        let info = InfoField::parse(raw, &schema, 3).unwrap();
        assert!(info.is_empty());
    }

    #[rstest]
    fn test_missing_placeholder_is_not_a_value(schema: InfoSchema) {
        let info = InfoField::parse("STAR=.;DP=.", &schema, 3).unwrap();
        assert_eq!(info.first("STAR"), None);
        assert_eq!(info.first("DP"), None);
    }

    #[rstest]
    #[case("GENE=TPMT;DP=NA")]
    #[case("GENE=TPMT;AF=high")]
    fn test_type_mismatch_keeps_raw_value(schema: InfoSchema, #[case] raw: &str) {
        let info = InfoField::parse(raw, &schema, 12).unwrap();
        assert_eq!(info.first("GENE"), Some("TPMT"));
        assert_eq!(info.len(), 2);
    }

    #[rstest]
    fn test_mismatched_value() {
        let values = vec!["31".to_string(), ".".to_string(), "NA".to_string()];
        assert_eq!(mismatched_value(InfoType::Integer, &values), Some(&values[2]));
        assert_eq!(mismatched_value(InfoType::String, &values), None);
    }

    #[rstest]
    fn test_empty_key(schema: InfoSchema) {
        let err = InfoField::parse("GENE=TPMT;=oops", &schema, 4).unwrap_err();
        assert!(matches!(err, ParseError::MalformedInfo { line: 4, .. }));
    }
}
