//! Owned chat list loading and validation
//!
//! The chatlist is a JSON array of `{ "id": <integer>, "options": { ... } }`
//! records naming the chats the bot is responsible for. It is read once at
//! startup; any problem with it aborts the process.

use std::collections::HashMap;
use std::path::Path;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, info};
use crate::utils::errors::{ChatlistError, ValidationError};

/// Free-form per-chat configuration consumed by feature code
pub type ChatOptions = Map<String, Value>;

/// One validated chatlist record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatlistEntry {
    pub id: i64,
    pub options: ChatOptions,
}

/// Read, parse and validate the chatlist at `path`
pub fn load_chatlist(path: impl AsRef<Path>) -> Result<Vec<ChatlistEntry>, ChatlistError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "Loading chatlist");

    let contents = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            ChatlistError::Missing { path: path.to_path_buf() }
        } else {
            ChatlistError::Unreadable { path: path.to_path_buf(), source }
        }
    })?;

    let document: Value = serde_json::from_str(&contents).map_err(|source| ChatlistError::Malformed {
        path: path.to_path_buf(),
        source,
    })?;

    let entries = validate_chatlist(document)?;
    info!(path = %path.display(), count = entries.len(), "Chatlist loaded");
    Ok(entries)
}

/// Check that `document` is a list of `{ id: integer, options: object }`
///
/// Entries come back in their original order with options untouched.
pub fn validate_chatlist(document: Value) -> Result<Vec<ChatlistEntry>, ValidationError> {
    let items = match document {
        Value::Array(items) => items,
        other => return Err(ValidationError::NotAList { found: json_kind(&other) }),
    };

    let mut seen: HashMap<i64, usize> = HashMap::with_capacity(items.len());
    let mut entries = Vec::with_capacity(items.len());

    for (index, item) in items.into_iter().enumerate() {
        let mut record = match item {
            Value::Object(record) => record,
            other => {
                return Err(ValidationError::NotAnObject { index, found: json_kind(&other) })
            }
        };

        let id = match record.get("id") {
            None => return Err(ValidationError::MissingField { index, field: "id" }),
            Some(value) => value.as_i64().ok_or(ValidationError::InvalidField {
                index,
                field: "id",
                expected: "an integer",
                found: json_kind(value),
            })?,
        };

        let options = match record.remove("options") {
            None => return Err(ValidationError::MissingField { index, field: "options" }),
            Some(Value::Object(options)) => options,
            Some(other) => {
                return Err(ValidationError::InvalidField {
                    index,
                    field: "options",
                    expected: "an object",
                    found: json_kind(&other),
                })
            }
        };

        if let Some(&first) = seen.get(&id) {
            return Err(ValidationError::DuplicateId { index, id, first });
        }
        seen.insert(id, index);

        entries.push(ChatlistEntry { id, options });
    }

    Ok(entries)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(n) if n.is_i64() || n.is_u64() => "an integer",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn test_well_formed_chatlist_is_preserved() {
        let document = json!([
            { "id": -1001, "options": { "welcome": "hi", "rules": ["be nice"] } },
            { "id": -1002, "options": {} },
            { "id": -1003, "options": { "nested": { "deep": true } } }
        ]);

        let entries = validate_chatlist(document.clone()).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].id, -1001);
        assert_eq!(entries[1].id, -1002);
        assert_eq!(entries[2].id, -1003);
        assert_eq!(serde_json::to_value(&entries).unwrap(), document);
    }

    #[test]
    fn test_missing_id_names_entry_index() {
        let document = json!([
            { "id": -1001, "options": {} },
            { "options": {} }
        ]);

        let err = validate_chatlist(document).unwrap_err();
        assert_eq!(err, ValidationError::MissingField { index: 1, field: "id" });
        assert_eq!(err.index(), Some(1));
        assert!(err.to_string().contains("#1"));
    }

    #[test]
    fn test_non_integer_id_rejected() {
        let err = validate_chatlist(json!([{ "id": "-1001", "options": {} }])).unwrap_err();
        assert_matches!(
            err,
            ValidationError::InvalidField { index: 0, field: "id", found: "a string", .. }
        );

        let err = validate_chatlist(json!([{ "id": 1.5, "options": {} }])).unwrap_err();
        assert_matches!(err, ValidationError::InvalidField { field: "id", found: "a number", .. });
    }

    #[test]
    fn test_options_must_be_object() {
        let err = validate_chatlist(json!([{ "id": 1 }])).unwrap_err();
        assert_eq!(err, ValidationError::MissingField { index: 0, field: "options" });

        let err = validate_chatlist(json!([{ "id": 1, "options": [1, 2] }])).unwrap_err();
        assert_matches!(
            err,
            ValidationError::InvalidField { index: 0, field: "options", found: "an array", .. }
        );
    }

    #[test]
    fn test_document_shape_errors() {
        assert_eq!(
            validate_chatlist(json!({ "id": 1 })).unwrap_err(),
            ValidationError::NotAList { found: "an object" }
        );
        assert_eq!(
            validate_chatlist(json!([{ "id": 1, "options": {} }, 42])).unwrap_err(),
            ValidationError::NotAnObject { index: 1, found: "an integer" }
        );
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let err = validate_chatlist(json!([
            { "id": 7, "options": {} },
            { "id": 8, "options": {} },
            { "id": 7, "options": {} }
        ]))
        .unwrap_err();
        assert_eq!(err, ValidationError::DuplicateId { index: 2, id: 7, first: 0 });
    }

    #[test]
    fn test_empty_chatlist_is_valid() {
        assert!(validate_chatlist(json!([])).unwrap().is_empty());
    }

    #[test]
    fn test_load_distinguishes_missing_and_malformed() {
        let dir = tempfile::tempdir().unwrap();

        let missing = dir.path().join("absent.json");
        assert_matches!(load_chatlist(&missing), Err(ChatlistError::Missing { .. }));

        let malformed = dir.path().join("broken.json");
        std::fs::write(&malformed, "[{ \"id\": 1, ").unwrap();
        assert_matches!(load_chatlist(&malformed), Err(ChatlistError::Malformed { .. }));

        let invalid = dir.path().join("invalid.json");
        std::fs::write(&invalid, r#"[{ "options": {} }]"#).unwrap();
        assert_matches!(
            load_chatlist(&invalid),
            Err(ChatlistError::Invalid(ValidationError::MissingField { index: 0, field: "id" }))
        );
    }

    #[test]
    fn test_load_valid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{ "id": -100123, "options": {{ "lang": "ru" }} }}]"#).unwrap();

        let entries = load_chatlist(file.path()).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, -100123);
        assert_eq!(entries[0].options.get("lang"), Some(&json!("ru")));
    }
}
