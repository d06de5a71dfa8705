use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::id::EntityId;

/// A persistable entity. Implementors carry business fields only; the identifier
/// lives on [`Stored`], so nothing a client sends can set it.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Table or collection name, also the route prefix.
    const COLLECTION: &'static str;

    /// Serialized field names the store keeps unique within the collection.
    const UNIQUE_FIELDS: &'static [&'static str] = &[];
}

/// A record as handed back by a repository, with its store-assigned id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stored<T> {
    pub id: EntityId,
    #[serde(flatten)]
    pub record: T,
}

impl<T> Stored<T> {
    pub fn new(id: EntityId, record: T) -> Self {
        Self { id, record }
    }

    pub fn into_record(self) -> T {
        self.record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Note {
        body_text: String,
    }

    #[test]
    fn test_stored_flattens_record_next_to_id() {
        let stored = Stored::new(EntityId::from(3), Note { body_text: "hi".to_string() });
        let value = serde_json::to_value(&stored).unwrap();
        assert_eq!(value, json!({ "id": "3", "bodyText": "hi" }));

        let parsed: Stored<Note> = serde_json::from_value(json!({ "id": 3, "bodyText": "hi" })).unwrap();
        assert_eq!(parsed, stored);
    }

    #[test]
    fn test_client_supplied_id_is_ignored_by_record() {
        let note: Note = serde_json::from_value(json!({ "id": "999", "bodyText": "x" })).unwrap();
        assert_eq!(note.body_text, "x");
    }
}
