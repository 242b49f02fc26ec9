use serde::{Deserialize, Serialize};

/// `{ "id": .., "name": .. }` reference used for teams, conferences,
/// divisions and leagues throughout the stats API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct NamedRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub code: String,
    pub name: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub position_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abbreviation: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_ref_defaults() {
        let named: NamedRef = serde_json::from_str(r#"{"id": 6}"#).unwrap();
        assert_eq!(named.id, Some(6));
        assert_eq!(named.name, "");

        let json = serde_json::to_string(&NamedRef {
            id: None,
            name: "Eastern".to_string(),
        })
        .unwrap();
        assert_eq!(json, r#"{"name":"Eastern"}"#);
    }
}
