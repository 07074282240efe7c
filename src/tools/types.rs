//! Common types shared across tools

use serde::{Serialize, Serializer};

/// Ordered field map for one school.
///
/// Keys keep the position of their first insertion; setting an existing key
/// replaces its value in place. Column order in the export follows this order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record(Vec<(String, String)>);

impl Record {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Insert or overwrite `key`.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Fold `other` into `self`; values from `other` win on collision.
    pub fn merge(&mut self, other: Record) {
        for (k, v) in other.0 {
            self.set(k, v);
        }
    }
}

impl FromIterator<(String, String)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (k, v) in iter {
            record.set(k, v);
        }
        record
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_overwrites_in_place() {
        let mut record = Record::new();
        record.set("a", "1");
        record.set("b", "2");
        record.set("a", "3");

        assert_eq!(record.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(record.get("a"), Some("3"));
    }

    #[test]
    fn test_merge_appends_new_keys_after_existing() {
        let mut summary = Record::new();
        summary.set("name", "Maple");
        summary.set("school_name", "Maple Elementary");

        let mut table = Record::new();
        table.set("gr4_reading_2022", "80");
        table.set("name", "Maple (table)");

        summary.merge(table);

        assert_eq!(
            summary.keys().collect::<Vec<_>>(),
            vec!["name", "school_name", "gr4_reading_2022"]
        );
        assert_eq!(summary.get("name"), Some("Maple (table)"));
    }

    #[test]
    fn test_serializes_as_ordered_json_object() {
        let record: Record = vec![
            ("z".to_string(), "1".to_string()),
            ("a".to_string(), "2".to_string()),
        ]
        .into_iter()
        .collect();

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"z":"1","a":"2"}"#);
    }
}
