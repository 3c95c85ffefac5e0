//! Query filter construction.
//!
//! Three input modes all produce the same [`FilterExpression`]: the
//! structured keyword/category form, the legacy comma/colon-delimited string
//! form, and a generic JSON-object form. Constraints combine with logical
//! AND; an empty expression renders as the match-all document.
//!
//! The delimited format has no escaping, so a value containing `,` or `:`
//! misparses. That is a documented limitation of the legacy format; such
//! input is rejected with [`AppError::InvalidFilter`] rather than parsed
//! wrongly or panicked on.

use mongodb::bson::{doc, Document};

use crate::error::{AppError, AppResult};

/// Characters stripped from both ends of the delimited filter string and of
/// every key and value token, matching the legacy format.
const TRIM_CHARS: &[char] = &['"', '{', '}', '\\', ' '];

/// Comparison mode for the delimited-string filter form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    /// Exact match, like SQL `WHERE field = value`
    Equal,
    /// Case-insensitive substring match, like SQL `WHERE field LIKE %value%`
    Like,
}

/// A single field-level constraint
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constraint {
    /// Field equals the value exactly
    Equals(String),
    /// Field contains the value as a case-insensitive substring
    Contains(String),
}

/// An AND-combined set of field constraints, built fresh per request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterExpression {
    constraints: Vec<(String, Constraint)>,
}

impl FilterExpression {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from the structured keyword/category form: keyword constrains
    /// `name` as a case-insensitive substring, category constrains
    /// `category` exactly. Absent inputs add no constraint.
    pub fn structured(keyword: Option<&str>, category: Option<&str>) -> Self {
        let mut filter = Self::new();
        if let Some(keyword) = keyword {
            filter.contains("name", keyword);
        }
        if let Some(category) = category {
            filter.equals("category", category);
        }
        filter
    }

    /// Build from a delimited `key:value,key:value` string in the given mode
    pub fn delimited(input: &str, mode: FilterMode) -> AppResult<Self> {
        let mut filter = Self::new();
        filter.push_delimited(input, mode)?;
        Ok(filter)
    }

    /// Build from a generic JSON object string
    pub fn from_json(input: &str) -> AppResult<Self> {
        let mut filter = Self::new();
        filter.push_json(input)?;
        Ok(filter)
    }

    pub fn equals(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.constraints
            .push((field.into(), Constraint::Equals(value.into())));
    }

    pub fn contains(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.constraints
            .push((field.into(), Constraint::Contains(value.into())));
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    pub fn constraints(&self) -> &[(String, Constraint)] {
        &self.constraints
    }

    /// Parse a delimited filter string and append its constraints.
    ///
    /// The legacy algorithm, reproduced exactly: strip `"{}\ ` and space from
    /// the ends of the whole string, split on `,` discarding empty tokens,
    /// split each token on every `:` discarding empty parts, then strip the
    /// same character set from key and value. A token that does not yield
    /// exactly a key and a value is malformed.
    pub fn push_delimited(&mut self, input: &str, mode: FilterMode) -> AppResult<()> {
        let stripped = input.trim_matches(TRIM_CHARS);
        for token in stripped.split(',').filter(|t| !t.is_empty()) {
            let parts: Vec<&str> = token.split(':').filter(|p| !p.is_empty()).collect();
            if parts.len() != 2 {
                return Err(AppError::InvalidFilter(format!(
                    "expected key:value, got '{}'",
                    token
                )));
            }
            let key = parts[0].trim_matches(TRIM_CHARS);
            let value = parts[1].trim_matches(TRIM_CHARS);
            match mode {
                FilterMode::Equal => self.equals(key, value),
                FilterMode::Like => self.contains(key, value),
            }
        }
        Ok(())
    }

    /// Parse a JSON object string and append an exact-match constraint for
    /// every field. Values are compared by their textual representation, not
    /// by native type (a preserved simplification of the original API).
    pub fn push_json(&mut self, input: &str) -> AppResult<()> {
        let value: serde_json::Value = serde_json::from_str(input)
            .map_err(|e| AppError::InvalidFilter(format!("invalid JSON filter: {}", e)))?;
        let serde_json::Value::Object(fields) = value else {
            return Err(AppError::InvalidFilter(
                "JSON filter must be an object".to_string(),
            ));
        };
        for (key, value) in fields {
            let text = match value {
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            };
            self.equals(key, text);
        }
        Ok(())
    }

    /// Render as a MongoDB filter document. Substring constraints become
    /// `$regex` with the `i` option; the pattern is used unescaped, as the
    /// legacy API did.
    pub fn to_document(&self) -> Document {
        let mut filter = Document::new();
        for (field, constraint) in &self.constraints {
            match constraint {
                Constraint::Equals(value) => {
                    filter.insert(field.as_str(), value.as_str());
                }
                Constraint::Contains(value) => {
                    filter.insert(
                        field.as_str(),
                        doc! { "$regex": value.as_str(), "$options": "i" },
                    );
                }
            }
        }
        filter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_keyword_and_category() {
        let filter = FilterExpression::structured(Some("war"), Some("Fantasy"));
        assert_eq!(
            filter.to_document(),
            doc! {
                "name": { "$regex": "war", "$options": "i" },
                "category": "Fantasy",
            }
        );
    }

    #[test]
    fn test_structured_empty_is_match_all() {
        let filter = FilterExpression::structured(None, None);
        assert!(filter.is_empty());
        assert_eq!(filter.to_document(), doc! {});
    }

    #[test]
    fn test_delimited_equal_pairs() {
        let filter =
            FilterExpression::delimited("category:Fiction,author:Tolkien", FilterMode::Equal)
                .unwrap();
        assert_eq!(
            filter.constraints(),
            &[
                (
                    "category".to_string(),
                    Constraint::Equals("Fiction".to_string())
                ),
                (
                    "author".to_string(),
                    Constraint::Equals("Tolkien".to_string())
                ),
            ]
        );
        assert_eq!(
            filter.to_document(),
            doc! { "category": "Fiction", "author": "Tolkien" }
        );
    }

    #[test]
    fn test_delimited_like_is_case_insensitive_substring() {
        let filter = FilterExpression::delimited("name:Harry", FilterMode::Like).unwrap();
        assert_eq!(
            filter.to_document(),
            doc! { "name": { "$regex": "Harry", "$options": "i" } }
        );
    }

    #[test]
    fn test_delimited_strips_quotes_braces_and_spaces() {
        let filter = FilterExpression::delimited(
            "{\"category\": \"Fiction\", \"author\": \"Tolkien\"}",
            FilterMode::Equal,
        )
        .unwrap();
        assert_eq!(
            filter.to_document(),
            doc! { "category": "Fiction", "author": "Tolkien" }
        );
    }

    #[test]
    fn test_delimited_discards_empty_tokens() {
        let filter =
            FilterExpression::delimited("category:Fiction,,author:Tolkien,", FilterMode::Equal)
                .unwrap();
        assert_eq!(filter.constraints().len(), 2);
    }

    #[test]
    fn test_delimited_missing_colon_is_invalid() {
        let err = FilterExpression::delimited("category", FilterMode::Equal).unwrap_err();
        assert!(matches!(err, AppError::InvalidFilter(_)));
    }

    #[test]
    fn test_delimited_colon_in_value_is_invalid() {
        // No escaping in the legacy format; a colon inside a value misparses.
        let err = FilterExpression::delimited("name:a:b", FilterMode::Equal).unwrap_err();
        assert!(matches!(err, AppError::InvalidFilter(_)));
    }

    #[test]
    fn test_json_stringifies_values() {
        let filter =
            FilterExpression::from_json(r#"{"category":"Fiction","price":42}"#).unwrap();
        assert_eq!(
            filter.to_document(),
            doc! { "category": "Fiction", "price": "42" }
        );
    }

    #[test]
    fn test_json_rejects_non_object() {
        assert!(matches!(
            FilterExpression::from_json("[1,2]").unwrap_err(),
            AppError::InvalidFilter(_)
        ));
        assert!(matches!(
            FilterExpression::from_json("not json").unwrap_err(),
            AppError::InvalidFilter(_)
        ));
    }
}
