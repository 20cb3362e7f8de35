//! Typed contact attribute values and their card line rendering.
//!
//! # Responsibility
//! - Dispatch a raw row on its `mimetype` into one typed attribute value.
//! - Read each kind's fixed payload columns with empty-string defaults.
//! - Render each value into vCard 2.1 property lines.
//!
//! # Invariants
//! - Values are immutable once built from a row.
//! - Rendered lines never contain a line terminator.
//! - Unknown mimetypes produce no value rather than an error.

use crate::model::row::AttributeRow;
use crate::model::type_code::{address_suffix, email_suffix, phone_suffix, EVENT_TYPE_BIRTHDAY};
use crate::vcard::encoding::encode_escaped;
use std::fmt::{Display, Formatter};

pub const MIMETYPE_NAME: &str = "vnd.android.cursor.item/name";
pub const MIMETYPE_EVENT: &str = "vnd.android.cursor.item/contact_event";
pub const MIMETYPE_EMAIL: &str = "vnd.android.cursor.item/email_v2";
pub const MIMETYPE_PHONE: &str = "vnd.android.cursor.item/phone_v2";
pub const MIMETYPE_POSTAL_ADDRESS: &str = "vnd.android.cursor.item/postal-address_v2";
pub const MIMETYPE_NOTE: &str = "vnd.android.cursor.item/note";

/// Recognized row kinds, keyed by the row's `mimetype` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeKind {
    Name,
    Event,
    Email,
    Phone,
    PostalAddress,
    Note,
}

impl AttributeKind {
    pub fn from_mimetype(mimetype: &str) -> Option<Self> {
        match mimetype {
            MIMETYPE_NAME => Some(Self::Name),
            MIMETYPE_EVENT => Some(Self::Event),
            MIMETYPE_EMAIL => Some(Self::Email),
            MIMETYPE_PHONE => Some(Self::Phone),
            MIMETYPE_POSTAL_ADDRESS => Some(Self::PostalAddress),
            MIMETYPE_NOTE => Some(Self::Note),
            _ => None,
        }
    }
}

/// One typed attribute built from a recognized row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    Name(NameInfo),
    Event(EventInfo),
    Email(EmailInfo),
    Phone(PhoneInfo),
    Address(AddressInfo),
    Note(NoteInfo),
}

impl AttributeValue {
    /// Builds the typed value for `row`, or `None` for unknown or `NULL`
    /// mimetypes.
    pub fn from_row(row: &AttributeRow) -> Option<Self> {
        let value = match AttributeKind::from_mimetype(row.mimetype.as_deref()?)? {
            AttributeKind::Name => Self::Name(NameInfo::from_row(row)),
            AttributeKind::Event => Self::Event(EventInfo::from_row(row)),
            AttributeKind::Email => Self::Email(EmailInfo::from_row(row)),
            AttributeKind::Phone => Self::Phone(PhoneInfo::from_row(row)),
            AttributeKind::PostalAddress => Self::Address(AddressInfo::from_row(row)),
            AttributeKind::Note => Self::Note(NoteInfo::from_row(row)),
        };
        Some(value)
    }
}

/// Structured name (`StructuredName`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameInfo {
    pub full: String,
    pub first: String,
    pub last: String,
    pub prefix: String,
    pub middle: String,
    pub suffix: String,
}

impl NameInfo {
    pub fn from_row(row: &AttributeRow) -> Self {
        Self {
            full: row.text_or_empty(1),
            first: row.text_or_empty(2),
            last: row.text_or_empty(3),
            prefix: row.text_or_empty(4),
            middle: row.text_or_empty(5),
            suffix: row.text_or_empty(6),
        }
    }

    /// `N:` line with components in vCard order.
    pub fn structured_line(&self) -> String {
        format!(
            "N:{};{};{};{};{}",
            self.last, self.first, self.middle, self.prefix, self.suffix
        )
    }

    /// `FN:` line.
    pub fn formatted_line(&self) -> String {
        format!("FN:{}", self.full)
    }
}

/// Contact event such as a birthday or anniversary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventInfo {
    pub date: String,
    /// Raw type code; `None` when absent or not numeric.
    pub type_code: Option<i64>,
    pub label: String,
}

impl EventInfo {
    pub fn from_row(row: &AttributeRow) -> Self {
        Self {
            date: row.text_or_empty(1),
            type_code: row.int(2),
            label: row.text_or_empty(3),
        }
    }
}

impl Display for EventInfo {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.type_code == Some(EVENT_TYPE_BIRTHDAY) {
            return write!(f, "BDAY:{}", self.date);
        }
        let code = self.type_code.map(|code| code.to_string()).unwrap_or_default();
        write!(
            f,
            "X-ANDROID-CUSTOM:{MIMETYPE_EVENT};{};{code};{};;;;;;;;;;;;0",
            self.date, self.label
        )
    }
}

/// Email address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailInfo {
    pub address: String,
    pub type_code: Option<i64>,
    pub label: String,
}

impl EmailInfo {
    pub fn from_row(row: &AttributeRow) -> Self {
        Self {
            address: row.text_or_empty(1),
            type_code: row.int(2),
            label: row.text_or_empty(3),
        }
    }
}

impl Display for EmailInfo {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "EMAIL{}:{}",
            email_suffix(self.type_code, &self.label),
            self.address
        )
    }
}

/// Phone number. Spaces are stripped when the value is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneInfo {
    pub number: String,
    pub type_code: Option<i64>,
    pub label: String,
}

impl PhoneInfo {
    pub fn from_row(row: &AttributeRow) -> Self {
        Self {
            number: strip_spaces(&row.text_or_empty(1)),
            type_code: row.int(2),
            label: row.text_or_empty(3),
        }
    }
}

impl Display for PhoneInfo {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "TEL{}:{}",
            phone_suffix(self.type_code, &self.label),
            self.number
        )
    }
}

/// Removes every U+0020 space; tabs and other characters are kept.
pub fn strip_spaces(number: &str) -> String {
    number.replace(' ', "")
}

/// Structured postal address.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressInfo {
    /// Formatted address (`data1`). Kept for completeness; not rendered.
    pub full: String,
    pub type_code: Option<i64>,
    pub label: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
}

impl AddressInfo {
    pub fn from_row(row: &AttributeRow) -> Self {
        Self {
            full: row.text_or_empty(1),
            type_code: row.int(2),
            label: row.text_or_empty(3),
            street: row.text_or_empty(4),
            city: row.text_or_empty(7),
            state: row.text_or_empty(8),
            zip: row.text_or_empty(9),
            country: row.text_or_empty(10),
        }
    }
}

impl Display for AddressInfo {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ADR{};CHARSET=UTF-8;ENCODING=QUOTED-PRINTABLE:;;{};{};{};{};{}",
            address_suffix(self.type_code, &self.label),
            encode_escaped(&self.street),
            encode_escaped(&self.city),
            encode_escaped(&self.state),
            encode_escaped(&self.zip),
            encode_escaped(&self.country)
        )
    }
}

/// Free-text note.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteInfo {
    pub text: String,
}

impl NoteInfo {
    pub fn from_row(row: &AttributeRow) -> Self {
        Self {
            text: row.text_or_empty(1),
        }
    }
}

impl Display for NoteInfo {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "NOTE;ENCODING=QUOTED-PRINTABLE:{}",
            encode_escaped(&self.text)
        )
    }
}
