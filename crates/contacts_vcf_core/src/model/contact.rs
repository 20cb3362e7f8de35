//! Per-contact aggregate and the insertion-ordered contact book.
//!
//! # Responsibility
//! - Collect typed attribute values that share one owner identifier.
//! - Preserve first-seen order of owner identifiers for output.
//!
//! # Invariants
//! - `name` and `note` are plain overwritable slots (last write wins).
//! - List attributes keep row encounter order.
//! - Each owner identifier maps to exactly one aggregate.

use crate::model::attribute::{
    AddressInfo, AttributeValue, EmailInfo, EventInfo, NameInfo, NoteInfo, PhoneInfo,
};
use std::collections::HashMap;

/// All attributes collected for one contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactAggregate {
    /// Owner identifier (`lookup`).
    pub lookup: String,
    pub name: Option<NameInfo>,
    pub phones: Vec<PhoneInfo>,
    pub emails: Vec<EmailInfo>,
    pub addresses: Vec<AddressInfo>,
    pub events: Vec<EventInfo>,
    pub note: Option<NoteInfo>,
}

impl ContactAggregate {
    pub fn new(lookup: impl Into<String>) -> Self {
        Self {
            lookup: lookup.into(),
            name: None,
            phones: Vec::new(),
            emails: Vec::new(),
            addresses: Vec::new(),
            events: Vec::new(),
            note: None,
        }
    }

    /// Stores one typed value using overwrite or append semantics.
    pub fn apply(&mut self, value: AttributeValue) {
        match value {
            AttributeValue::Name(name) => self.name = Some(name),
            AttributeValue::Event(event) => self.events.push(event),
            AttributeValue::Email(email) => self.emails.push(email),
            AttributeValue::Phone(phone) => self.phones.push(phone),
            AttributeValue::Address(address) => self.addresses.push(address),
            AttributeValue::Note(note) => self.note = Some(note),
        }
    }
}

/// Mapping from owner identifier to aggregate, iterated in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactBook {
    contacts: Vec<ContactAggregate>,
    index: HashMap<String, usize>,
}

impl ContactBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the aggregate for `lookup`, creating it on first use.
    pub fn entry(&mut self, lookup: &str) -> &mut ContactAggregate {
        let position = match self.index.get(lookup) {
            Some(position) => *position,
            None => {
                let position = self.contacts.len();
                self.contacts.push(ContactAggregate::new(lookup));
                self.index.insert(lookup.to_owned(), position);
                position
            }
        };
        &mut self.contacts[position]
    }

    pub fn get(&self, lookup: &str) -> Option<&ContactAggregate> {
        self.index
            .get(lookup)
            .and_then(|position| self.contacts.get(*position))
    }

    /// Iterates aggregates in first-seen order.
    pub fn iter(&self) -> std::slice::Iter<'_, ContactAggregate> {
        self.contacts.iter()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}

impl<'a> IntoIterator for &'a ContactBook {
    type Item = &'a ContactAggregate;
    type IntoIter = std::slice::Iter<'a, ContactAggregate>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::{ContactAggregate, ContactBook};
    use crate::model::attribute::{AttributeValue, NameInfo, NoteInfo};

    #[test]
    fn entry_preserves_first_seen_order() {
        let mut book = ContactBook::new();
        book.entry("b");
        book.entry("a");
        book.entry("b");

        let order: Vec<&str> = book.iter().map(|contact| contact.lookup.as_str()).collect();
        assert_eq!(order, ["b", "a"]);
        assert_eq!(book.len(), 2);
        assert!(book.get("c").is_none());
    }

    #[test]
    fn singleton_attributes_are_overwritten() {
        let mut contact = ContactAggregate::new("a");
        for full in ["First", "Second"] {
            contact.apply(AttributeValue::Name(NameInfo {
                full: full.to_string(),
                ..NameInfo::default()
            }));
        }
        contact.apply(AttributeValue::Note(NoteInfo {
            text: "old".to_string(),
        }));
        contact.apply(AttributeValue::Note(NoteInfo {
            text: "new".to_string(),
        }));

        assert_eq!(contact.name.map(|name| name.full).as_deref(), Some("Second"));
        assert_eq!(contact.note.map(|note| note.text).as_deref(), Some("new"));
    }
}
