//! Delimited log records
//!
//! A [`Record`] is one input line split on the run's delimiter. Fields keep
//! whatever the line carried, including the trailing newline inside the last
//! field, so that joining an untouched record reproduces the line byte for byte.

use std::borrow::Cow;

/// Identifier used to name a record in diagnostics
pub const INDEX_FIELD: usize = 0;

/// Username, replaced by the hash field
pub const USERNAME_FIELD: usize = 1;

/// IPv4 address, last octet randomized
pub const IP_FIELD: usize = 5;

/// Precomputed user hash
pub const HASH_FIELD: usize = 12;

/// Minimum field count for a record to be anonymizable
pub const MIN_FIELDS: usize = HASH_FIELD + 1;

/// One delimited line of the log file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record<'a> {
    fields: Vec<Cow<'a, str>>,
}

impl<'a> Record<'a> {
    /// Split a line on `delimiter`, keeping empty fields
    pub fn split(line: &'a str, delimiter: &str) -> Self {
        Self {
            fields: line.split(delimiter).map(Cow::Borrowed).collect(),
        }
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no fields (never true for a split line)
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field at `position`, if present
    pub fn field(&self, position: usize) -> Option<&str> {
        self.fields.get(position).map(|f| f.as_ref())
    }

    /// Field 0, or an empty string for an empty record
    pub fn index(&self) -> &str {
        self.field(INDEX_FIELD).unwrap_or_default()
    }

    /// Whether every required position is present
    pub fn has_required_fields(&self) -> bool {
        self.len() >= MIN_FIELDS
    }

    /// Replace the field at `position`, returning the previous value
    ///
    /// Returns `None` and leaves the record untouched when the position is absent.
    pub fn replace(
        &mut self,
        position: usize,
        value: impl Into<Cow<'a, str>>,
    ) -> Option<Cow<'a, str>> {
        self.fields
            .get_mut(position)
            .map(|slot| std::mem::replace(slot, value.into()))
    }

    /// Rejoin the fields with `delimiter`
    pub fn join(&self, delimiter: &str) -> String {
        self.fields.join(delimiter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_keeps_empty_fields() {
        let record = Record::split("a\t\tc\t", "\t");
        assert_eq!(record.len(), 4);
        assert_eq!(record.field(1), Some(""));
        assert_eq!(record.field(3), Some(""));
    }

    #[test]
    fn test_trailing_newline_stays_in_last_field() {
        let record = Record::split("a,b,c\n", ",");
        assert_eq!(record.field(2), Some("c\n"));
        assert_eq!(record.join(","), "a,b,c\n");
    }

    #[test]
    fn test_multi_character_delimiter() {
        let record = Record::split("a::b::c", "::");
        assert_eq!(record.len(), 3);
        assert_eq!(record.join("::"), "a::b::c");
    }

    #[test]
    fn test_replace() {
        let mut record = Record::split("7,alice,x", ",");
        let old = record.replace(USERNAME_FIELD, "HASH".to_string());
        assert_eq!(old.as_deref(), Some("alice"));
        assert_eq!(record.join(","), "7,HASH,x");
    }

    #[test]
    fn test_replace_out_of_range() {
        let mut record = Record::split("7,alice", ",");
        assert!(record.replace(IP_FIELD, "10.0.0.1").is_none());
        assert_eq!(record.join(","), "7,alice");
    }

    #[test]
    fn test_required_fields() {
        let short = Record::split("0,1,2,3,4,5,6,7,8,9,10,11", ",");
        assert!(!short.has_required_fields());

        let full = Record::split("0,1,2,3,4,5,6,7,8,9,10,11,12", ",");
        assert!(full.has_required_fields());
        assert_eq!(full.field(HASH_FIELD), Some("12"));
    }

    #[test]
    fn test_index() {
        let record = Record::split("", ",");
        assert_eq!(record.index(), "");
        assert_eq!(record.len(), 1);

        let record = Record::split("17\tbob", "\t");
        assert_eq!(record.index(), "17");
    }
}
