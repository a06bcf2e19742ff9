use sea_orm::Value;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Amenity data attached to a room. Two storage shapes exist in the wild and
/// both must round-trip: a plain list of names, or a map from name to an
/// enabled flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amenities {
    /// Ordered list of amenity names
    List(Vec<String>),
    /// Map from amenity name to whether the room offers it
    Flags(HashMap<String, bool>),
}

impl Amenities {
    /// Whether a single amenity is offered. For the map shape, a key present
    /// with `false` counts the same as an absent key.
    pub fn has(&self, name: &str) -> bool {
        match self {
            Self::List(names) => names.iter().any(|n| n == name),
            Self::Flags(flags) => flags.get(name).copied().unwrap_or(false),
        }
    }

    /// ALL-match: every requested name must be offered
    pub fn has_all<S: AsRef<str>>(&self, requested: &[S]) -> bool {
        requested.iter().all(|name| self.has(name.as_ref()))
    }
}

/// Split a comma-separated amenity request into trimmed, non-empty tokens
pub fn parse_amenity_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

impl sea_orm::sea_query::ValueType for Amenities {
    fn try_from(v: Value) -> Result<Self, sea_orm::sea_query::ValueTypeErr> {
        match v {
            Value::String(Some(s)) => {
                // Try to deserialize from JSON string
                serde_json::from_str(&s).map_err(|_| sea_orm::sea_query::ValueTypeErr)
            }
            _ => Err(sea_orm::sea_query::ValueTypeErr),
        }
    }

    fn type_name() -> String {
        "Amenities".to_string()
    }

    fn array_type() -> sea_orm::sea_query::ArrayType {
        sea_orm::sea_query::ArrayType::String
    }

    fn column_type() -> sea_orm::sea_query::ColumnType {
        sea_orm::sea_query::ColumnType::Text
    }
}

impl From<Amenities> for Value {
    fn from(amenities: Amenities) -> Self {
        // Serialize to JSON string for database storage
        Value::String(Some(Box::new(
            serde_json::to_string(&amenities).unwrap(),
        )))
    }
}

impl sea_orm::TryGetable for Amenities {
    fn try_get_by<I: sea_orm::ColIdx>(
        res: &sea_orm::QueryResult,
        index: I,
    ) -> Result<Self, sea_orm::TryGetError> {
        let val: String = res.try_get_by(index)?;

        serde_json::from_str(&val).map_err(|e| {
            sea_orm::TryGetError::DbErr(sea_orm::DbErr::Type(format!(
                "Failed to deserialize Amenities: {e}"
            )))
        })
    }
}

impl sea_orm::sea_query::Nullable for Amenities {
    fn null() -> Value {
        Value::String(None)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn list(names: &[&str]) -> Amenities {
        Amenities::List(names.iter().map(|n| n.to_string()).collect())
    }

    fn flags(entries: &[(&str, bool)]) -> Amenities {
        Amenities::Flags(
            entries
                .iter()
                .map(|(name, enabled)| (name.to_string(), *enabled))
                .collect(),
        )
    }

    #[test]
    fn test_list_membership() {
        let amenities = list(&["wifi", "tv"]);
        assert!(amenities.has("wifi"));
        assert!(amenities.has("tv"));
        assert!(!amenities.has("minibar"));
    }

    #[test]
    fn test_flags_require_true_value() {
        let amenities = flags(&[("wifi", true), ("minibar", false)]);
        assert!(amenities.has("wifi"));
        // A key present with `false` does not count
        assert!(!amenities.has("minibar"));
        assert!(!amenities.has("tv"));
    }

    #[test]
    fn test_has_all_is_conjunctive() {
        let amenities = list(&["wifi", "tv"]);
        assert!(amenities.has_all(&["wifi"]));
        assert!(amenities.has_all(&["wifi", "tv"]));
        assert!(!amenities.has_all(&["wifi", "minibar"]));

        let amenities = flags(&[("wifi", true), ("tv", true), ("minibar", false)]);
        assert!(amenities.has_all(&["wifi", "tv"]));
        assert!(!amenities.has_all(&["wifi", "minibar"]));
    }

    #[test]
    fn test_parse_amenity_list_trims_and_drops_empty_tokens() {
        assert_eq!(
            parse_amenity_list(" wifi, tv ,minibar"),
            vec!["wifi", "tv", "minibar"]
        );
        assert_eq!(parse_amenity_list("wifi,,  ,tv"), vec!["wifi", "tv"]);
        assert!(parse_amenity_list("  ").is_empty());
    }

    #[test]
    fn test_untagged_serde_round_trip() {
        let parsed: Amenities = serde_json::from_str(r#"["wifi","tv"]"#).unwrap();
        assert_eq!(parsed, list(&["wifi", "tv"]));

        let parsed: Amenities = serde_json::from_str(r#"{"wifi":true,"minibar":false}"#).unwrap();
        assert_eq!(parsed, flags(&[("wifi", true), ("minibar", false)]));
    }
}
