//! Integer type-code tables for typed contact attributes.
//!
//! # Responsibility
//! - Map the provider's integer `TYPE_*` codes to card parameter suffixes.
//! - Keep each attribute kind's table separate and auditable.
//!
//! # Invariants
//! - Code `0` is always the label-driven custom type (`;X-<label>`).
//! - Unknown codes produce an empty suffix, never an error.

/// Type code shared by every kind for the label-driven custom type.
pub const TYPE_CUSTOM: i64 = 0;

/// Renders the type suffix for a table lookup result.
///
/// `None` means the code is not in the kind's table.
fn render_suffix(code: Option<i64>, token: Option<&'static str>, label: &str) -> String {
    if code == Some(TYPE_CUSTOM) {
        return format!(";X-{label}");
    }
    token.map(str::to_owned).unwrap_or_default()
}

/// Phone number type (`ContactsContract.CommonDataKinds.Phone.TYPE_*`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneType {
    Custom,
    Home,
    Mobile,
    Work,
    FaxWork,
    FaxHome,
    Pager,
    Voice,
    Callback,
}

const PHONE_TYPES: &[(i64, PhoneType, &str)] = &[
    (0, PhoneType::Custom, ""),
    (1, PhoneType::Home, ";HOME"),
    (2, PhoneType::Mobile, ";CELL"),
    (3, PhoneType::Work, ";WORK"),
    (4, PhoneType::FaxWork, ";WORK;FAX"),
    (5, PhoneType::FaxHome, ";HOME;FAX"),
    (6, PhoneType::Pager, ";PAGER"),
    (7, PhoneType::Voice, ";VOICE"),
    (8, PhoneType::Callback, ";CALLBACK"),
];

impl PhoneType {
    pub fn from_code(code: i64) -> Option<Self> {
        PHONE_TYPES
            .iter()
            .find(|(known, _, _)| *known == code)
            .map(|(_, kind, _)| *kind)
    }

    /// Fixed suffix token; empty for `Custom`, whose suffix is label-driven.
    pub fn token(self) -> &'static str {
        PHONE_TYPES
            .iter()
            .find(|(_, kind, _)| *kind == self)
            .map_or("", |(_, _, token)| *token)
    }
}

/// Email address type (`Email.TYPE_*`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmailType {
    Custom,
    Home,
    Work,
    Other,
}

const EMAIL_TYPES: &[(i64, EmailType, &str)] = &[
    (0, EmailType::Custom, ""),
    (1, EmailType::Home, ";HOME"),
    (2, EmailType::Work, ";WORK"),
    (3, EmailType::Other, ""),
];

impl EmailType {
    pub fn from_code(code: i64) -> Option<Self> {
        EMAIL_TYPES
            .iter()
            .find(|(known, _, _)| *known == code)
            .map(|(_, kind, _)| *kind)
    }

    pub fn token(self) -> &'static str {
        EMAIL_TYPES
            .iter()
            .find(|(_, kind, _)| *kind == self)
            .map_or("", |(_, _, token)| *token)
    }
}

/// Postal address type (`StructuredPostal.TYPE_*`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressType {
    Custom,
    Home,
    Work,
    Other,
}

const ADDRESS_TYPES: &[(i64, AddressType, &str)] = &[
    (0, AddressType::Custom, ""),
    (1, AddressType::Home, ";HOME"),
    (2, AddressType::Work, ";WORK"),
    (3, AddressType::Other, ""),
];

impl AddressType {
    pub fn from_code(code: i64) -> Option<Self> {
        ADDRESS_TYPES
            .iter()
            .find(|(known, _, _)| *known == code)
            .map(|(_, kind, _)| *kind)
    }

    pub fn token(self) -> &'static str {
        ADDRESS_TYPES
            .iter()
            .find(|(_, kind, _)| *kind == self)
            .map_or("", |(_, _, token)| *token)
    }
}

/// Birthday code of `Event.TYPE_*`; every other event code renders as a
/// custom event line.
pub const EVENT_TYPE_BIRTHDAY: i64 = 3;

/// Suffix for a phone row's type code and label.
pub fn phone_suffix(code: Option<i64>, label: &str) -> String {
    let token = code.and_then(PhoneType::from_code).map(PhoneType::token);
    render_suffix(code, token, label)
}

/// Suffix for an email row's type code and label.
pub fn email_suffix(code: Option<i64>, label: &str) -> String {
    let token = code.and_then(EmailType::from_code).map(EmailType::token);
    render_suffix(code, token, label)
}

/// Suffix for a postal address row's type code and label.
pub fn address_suffix(code: Option<i64>, label: &str) -> String {
    let token = code.and_then(AddressType::from_code).map(AddressType::token);
    render_suffix(code, token, label)
}
