use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Professional {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    pub status: bool,
}

impl Professional {
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
    use super::Professional;

    #[test]
    fn deserializes_with_sparse_fields() {
        let professional: Professional =
            serde_json::from_str(r#"{"_id":"p1","name":"Pandit Rao","status":true}"#)
                .expect("valid professional");
        assert_eq!(professional.name, "Pandit Rao");
        assert!(professional.city.is_none());
    }
}
