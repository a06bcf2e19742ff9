use sea_orm::Value;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Photo gallery attached to a room: a plain list of URLs, or a map from a
/// caption/label to a URL
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Gallery {
    List(Vec<String>),
    Labeled(HashMap<String, String>),
}

impl Gallery {
    pub fn urls(&self) -> Vec<&str> {
        match self {
            Self::List(urls) => urls.iter().map(String::as_str).collect(),
            Self::Labeled(entries) => entries.values().map(String::as_str).collect(),
        }
    }
}

impl sea_orm::sea_query::ValueType for Gallery {
    fn try_from(v: Value) -> Result<Self, sea_orm::sea_query::ValueTypeErr> {
        match v {
            Value::String(Some(s)) => {
                serde_json::from_str(&s).map_err(|_| sea_orm::sea_query::ValueTypeErr)
            }
            _ => Err(sea_orm::sea_query::ValueTypeErr),
        }
    }

    fn type_name() -> String {
        "Gallery".to_string()
    }

    fn array_type() -> sea_orm::sea_query::ArrayType {
        sea_orm::sea_query::ArrayType::String
    }

    fn column_type() -> sea_orm::sea_query::ColumnType {
        sea_orm::sea_query::ColumnType::Text
    }
}

impl From<Gallery> for Value {
    fn from(gallery: Gallery) -> Self {
        Value::String(Some(Box::new(serde_json::to_string(&gallery).unwrap())))
    }
}

impl sea_orm::TryGetable for Gallery {
    fn try_get_by<I: sea_orm::ColIdx>(
        res: &sea_orm::QueryResult,
        index: I,
    ) -> Result<Self, sea_orm::TryGetError> {
        let val: String = res.try_get_by(index)?;

        serde_json::from_str(&val).map_err(|e| {
            sea_orm::TryGetError::DbErr(sea_orm::DbErr::Type(format!(
                "Failed to deserialize Gallery: {e}"
            )))
        })
    }
}

impl sea_orm::sea_query::Nullable for Gallery {
    fn null() -> Value {
        Value::String(None)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_untagged_serde_round_trip() {
        let parsed: Gallery = serde_json::from_str(r#"["https://a/1.jpg"]"#).unwrap();
        assert_eq!(parsed, Gallery::List(vec!["https://a/1.jpg".to_string()]));

        let parsed: Gallery = serde_json::from_str(r#"{"lobby":"https://a/2.jpg"}"#).unwrap();
        assert_eq!(parsed.urls(), vec!["https://a/2.jpg"]);
    }
}
