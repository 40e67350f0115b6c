use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

// ============================================================================
// ID Type
// ============================================================================

/// Category identifier as assigned by the API.
///
/// The backend owns the id type, so both JSON numbers and JSON strings are
/// accepted and kept in their textual form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CategoryId(String);

impl CategoryId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<i64> for CategoryId {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCategoryId {
    Signed(i64),
    Unsigned(u64),
    Text(String),
}

impl<'de> Deserialize<'de> for CategoryId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawCategoryId::deserialize(deserializer)?;
        Ok(match raw {
            RawCategoryId::Signed(v) => CategoryId(v.to_string()),
            RawCategoryId::Unsigned(v) => CategoryId(v.to_string()),
            RawCategoryId::Text(v) => CategoryId(v),
        })
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Category record as returned by `GET /api/Category`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

// ============================================================================
// DTO
// ============================================================================

/// Request body for create (`POST`) and update (`PUT`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDto {
    pub name: String,
    pub description: String,
}

impl CategoryDto {
    /// Both fields are required; like an HTML `required` field, any
    /// non-empty value counts
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.description.is_empty()
    }
}

impl From<&Category> for CategoryDto {
    fn from(c: &Category) -> Self {
        Self {
            name: c.name.clone(),
            description: c.description.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_id_accepts_number_and_string() {
        let items: Vec<Category> = serde_json::from_str(
            r#"[
                {"id": 3, "name": "Books", "description": "Paper"},
                {"id": "7f0c", "name": "Games", "description": "Boards"}
            ]"#,
        )
        .unwrap();

        assert_eq!(items[0].id, CategoryId::from(3));
        assert_eq!(items[1].id.as_str(), "7f0c");
        assert_eq!(items[0].id.to_string(), "3");
    }

    #[test]
    fn test_missing_or_null_fields_become_empty() {
        let item: Category =
            serde_json::from_str(r#"{"id": 1, "description": null}"#).unwrap();
        assert_eq!(item.name, "");
        assert_eq!(item.description, "");
    }

    #[test]
    fn test_dto_body_has_only_name_and_description() {
        let dto = CategoryDto {
            name: "Books".to_string(),
            description: "Paper".to_string(),
        };
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "Books", "description": "Paper"})
        );
    }

    #[test]
    fn test_dto_completeness() {
        let mut dto = CategoryDto::default();
        assert!(!dto.is_complete());
        dto.name = "Books".to_string();
        assert!(!dto.is_complete());
        dto.description = "   ".to_string();
        assert!(dto.is_complete());
    }
}
