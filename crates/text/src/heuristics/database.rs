use serde::Serialize;

/// Fields listed per entity before the list is cut.
pub const MAX_DATABASE_FIELDS: usize = 16;

/// One entity of a flattened database description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatabaseEntry {
    pub name: String,
    pub fields: Vec<String>,
    /// More than [`MAX_DATABASE_FIELDS`] fields were present.
    pub truncated: bool,
}

/// Re-split `"User: id, email; Tag"` into entities and their field lists.
#[must_use]
pub fn split_database(text: &str) -> Vec<DatabaseEntry> {
    text.split(';')
        .filter_map(|part| {
            let part = part.trim();
            if part.is_empty() {
                return None;
            }
            let (name, rest) = part.split_once(':').unwrap_or((part, ""));
            let fields: Vec<String> = rest
                .split(',')
                .map(str::trim)
                .filter(|field| !field.is_empty())
                .map(str::to_string)
                .collect();
            let name = name.trim();
            if name.is_empty() && fields.is_empty() {
                return None;
            }
            let truncated = fields.len() > MAX_DATABASE_FIELDS;
            Some(DatabaseEntry {
                name: name.to_string(),
                fields: fields.into_iter().take(MAX_DATABASE_FIELDS).collect(),
                truncated,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn splits_entities_and_fields() {
        assert_eq!(
            split_database("User: id, email ; Tag;; Order: id: uuid, total"),
            vec![
                DatabaseEntry {
                    name: "User".into(),
                    fields: vec!["id".into(), "email".into()],
                    truncated: false,
                },
                DatabaseEntry {
                    name: "Tag".into(),
                    fields: vec![],
                    truncated: false,
                },
                DatabaseEntry {
                    name: "Order".into(),
                    fields: vec!["id: uuid".into(), "total".into()],
                    truncated: false,
                },
            ]
        );
    }

    #[test]
    fn long_field_lists_are_truncated() {
        let fields = (0..20).map(|i| format!("f{i}")).collect::<Vec<_>>().join(", ");
        let entries = split_database(&format!("Wide: {fields}"));
        assert_eq!(entries[0].fields.len(), MAX_DATABASE_FIELDS);
        assert_eq!(entries[0].fields.last().map(String::as_str), Some("f15"));
        assert!(entries[0].truncated);
    }

    #[test]
    fn blank_text_has_no_entries() {
        assert!(split_database("  ; ").is_empty());
    }
}
