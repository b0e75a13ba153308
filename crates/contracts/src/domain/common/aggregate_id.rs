use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Identifier of a client-side aggregate (upload record, chat message).
///
/// Ids are generated on the client when the entity is created and never
/// leave the browser; the string form is used as a render key.
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Convert the id to its string form
    fn as_string(&self) -> String;

    /// Parse the id from its string form
    fn from_string(s: &str) -> Result<Self, String>;
}

impl AggregateId for uuid::Uuid {
    fn as_string(&self) -> String {
        ToString::to_string(self)
    }

    fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s).map_err(|e| format!("Invalid UUID: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uuid::Uuid;

    #[test]
    fn test_uuid_round_trip_through_string() {
        let id = Uuid::new_v4();
        let parsed = <Uuid as AggregateId>::from_string(&id.as_string()).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_invalid_string_is_rejected() {
        let err = <Uuid as AggregateId>::from_string("not-a-uuid").unwrap_err();
        assert!(err.starts_with("Invalid UUID"));
    }
}
