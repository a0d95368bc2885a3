//! The address book: contact records keyed by name.
//!
//! Records are kept in insertion order. Adding a record whose name is
//! already present replaces the stored record in place.

use crate::models::Record;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A collection of contact records keyed by name.
///
/// # Example
///
/// ```
/// use contact_book::{AddressBook, Record};
///
/// let mut book = AddressBook::new();
/// let mut john = Record::new("John").unwrap();
/// john.add_phone("1234567890").unwrap();
/// book.add_record(john);
///
/// assert!(book.find("John").is_some());
/// book.delete("John");
/// assert!(book.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: IndexMap<String, Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` under its name, returning the record it replaced.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        let name = record.name().as_str().to_string();
        let previous = self.records.insert(name.clone(), record);
        if previous.is_some() {
            tracing::warn!(name = %name, "Replaced existing record");
        } else {
            tracing::debug!(name = %name, "Added record");
        }
        previous
    }

    /// Look up a record by name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        let found = self.records.get(name);
        tracing::trace!(name = %name, found = found.is_some(), "Record lookup");
        found
    }

    /// Look up a record by name for editing its phones.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove a record by name. Absent names are a no-op.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let removed = self.records.shift_remove(name);
        if removed.is_some() {
            tracing::debug!(name = %name, "Deleted record");
        }
        removed
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Contact names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = indexmap::map::Values<'a, String, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.values()
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut book = AddressBook::new();
        for record in iter {
            book.add_record(record);
        }
        book
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, record) in self.records.values().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", record)?;
        }
        Ok(())
    }
}

// Serde support - serialize as an array of records
impl Serialize for AddressBook {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.records.values())
    }
}

// Serde support - rebuild the name index from the records
impl<'de> Deserialize<'de> for AddressBook {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let records: Vec<Record> = Vec::deserialize(deserializer)?;
        Ok(records.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, phones: &[&str]) -> Record {
        let mut record = Record::new(name).unwrap();
        for phone in phones {
            record.add_phone(*phone).unwrap();
        }
        record
    }

    #[test]
    fn test_new_book_is_empty() {
        let book = AddressBook::new();
        assert!(book.is_empty());
        assert_eq!(book.len(), 0);
        assert!(book.find("John").is_none());
    }

    #[test]
    fn test_add_and_find() {
        let mut book = AddressBook::new();
        assert!(book.add_record(record("John", &["1234567890"])).is_none());

        let found = book.find("John").unwrap();
        assert_eq!(found.name().as_str(), "John");
        assert_eq!(found.phones().len(), 1);
    }

    #[test]
    fn test_find_is_case_sensitive() {
        let mut book = AddressBook::new();
        book.add_record(record("John", &[]));
        assert!(book.find("john").is_none());
    }

    #[test]
    fn test_add_overwrites_same_name() {
        let mut book = AddressBook::new();
        book.add_record(record("John", &["1234567890"]));
        book.add_record(record("Jane", &[]));

        let previous = book.add_record(record("John", &["5555555555"])).unwrap();
        assert_eq!(previous.phones()[0].as_str(), "1234567890");

        assert_eq!(book.len(), 2);
        assert_eq!(
            book.find("John").unwrap().phones()[0].as_str(),
            "5555555555"
        );
        // overwrite keeps the original slot
        assert_eq!(book.names().collect::<Vec<_>>(), vec!["John", "Jane"]);
    }

    #[test]
    fn test_delete() {
        let mut book = AddressBook::new();
        book.add_record(record("John", &[]));
        book.add_record(record("Jane", &[]));

        assert!(book.delete("Jane").is_some());
        assert!(book.find("Jane").is_none());
        assert!(book.find("John").is_some());

        assert!(book.delete("Jane").is_none());
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_delete_preserves_order() {
        let mut book: AddressBook = ["Alice", "Bob", "Carol", "Dave"]
            .iter()
            .map(|name| record(name, &[]))
            .collect();

        book.delete("Bob");
        book.add_record(record("Eve", &[]));

        assert_eq!(
            book.names().collect::<Vec<_>>(),
            vec!["Alice", "Carol", "Dave", "Eve"]
        );
    }

    #[test]
    fn test_find_mut_edits_in_place() {
        let mut book = AddressBook::new();
        book.add_record(record("John", &["1234567890"]));

        book.find_mut("John")
            .unwrap()
            .edit_phone("1234567890", "1112223333")
            .unwrap();

        assert!(book.find("John").unwrap().find_phone("1112223333").is_some());
    }

    #[test]
    fn test_iteration() {
        let mut book = AddressBook::new();
        book.add_record(record("John", &[]));
        book.add_record(record("Jane", &[]));

        let names: Vec<&str> = (&book).into_iter().map(|r| r.name().as_str()).collect();
        assert_eq!(names, vec!["John", "Jane"]);
        assert_eq!(book.iter().count(), 2);
    }

    #[test]
    fn test_display() {
        let mut book = AddressBook::new();
        book.add_record(record("John", &["1234567890"]));
        book.add_record(record("Jane", &[]));

        assert_eq!(
            book.to_string(),
            "Contact name: John, phones: 1234567890\nContact name: Jane, phones: "
        );
    }

    #[test]
    fn test_serialization() {
        let mut book = AddressBook::new();
        book.add_record(record("John", &["1234567890"]));
        book.add_record(record("Jane", &["9876543210"]));

        let json = serde_json::to_string(&book).unwrap();
        assert_eq!(
            json,
            r#"[{"name":"John","phones":["1234567890"]},{"name":"Jane","phones":["9876543210"]}]"#
        );

        let parsed: AddressBook = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, book);
    }

    #[test]
    fn test_deserialization_last_duplicate_wins() {
        let json = r#"[
            {"name":"John","phones":["1234567890"]},
            {"name":"John","phones":["5555555555"]}
        ]"#;
        let book: AddressBook = serde_json::from_str(json).unwrap();
        assert_eq!(book.len(), 1);
        assert!(book.find("John").unwrap().find_phone("5555555555").is_some());
    }

    #[test]
    fn test_deserialization_rejects_invalid_name() {
        let result: Result<AddressBook, _> =
            serde_json::from_str(r#"[{"name":"J0hn","phones":[]}]"#);
        assert!(result.is_err());
    }
}
