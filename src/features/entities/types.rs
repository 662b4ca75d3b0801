use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Entity {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub entity_type: String,
    pub display_name: String,
    /// Key of the TDS setting applied to this entity's payouts.
    pub tds_type: String,
    pub description: String,
    pub status: bool,
}

impl Entity {
    /// Blank editor values for the add form.
    pub fn reference() -> Self {
        Self {
            status: true,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Entity;

    #[test]
    fn the_type_field_round_trips_under_its_wire_name() {
        let entity: Entity = serde_json::from_str(
            r#"{"type":"vendor","displayName":"Vendor","tdsType":"194C","description":"","status":true}"#,
        )
        .expect("valid entity");
        assert_eq!(entity.entity_type, "vendor");

        let json = serde_json::to_string(&entity).expect("serializes");
        assert!(json.contains(r#""type":"vendor""#));
        assert!(!json.contains("entityType"));
    }
}
