//! Card record assembly for contact aggregates.
//!
//! # Invariants
//! - Property order is name, phones, emails, addresses, events, note.
//! - Every line, including `END:VCARD`, ends with exactly one `\n`.
//! - Rendering is deterministic for the same contact book.
//! - Under `MissingNamePolicy::Fail`, nothing reaches the writer when any
//!   contact lacks a name.

use super::{FormatError, FormatResult};
use crate::config::MissingNamePolicy;
use crate::model::attribute::NameInfo;
use crate::model::contact::{ContactAggregate, ContactBook};
use log::{debug, warn};
use std::io::Write;

pub const BEGIN_LINE: &str = "BEGIN:VCARD";
pub const VERSION_LINE: &str = "VERSION:2.1";
pub const END_LINE: &str = "END:VCARD";

/// Renders one contact as a complete card record.
///
/// # Errors
/// - `FormatError::MissingName` when the contact has no name and `policy`
///   is `MissingNamePolicy::Fail`.
pub fn render_card(contact: &ContactAggregate, policy: MissingNamePolicy) -> FormatResult<String> {
    let fallback_name;
    let name = match (&contact.name, policy) {
        (Some(name), _) => name,
        (None, MissingNamePolicy::Fail) => {
            return Err(FormatError::MissingName {
                lookup: contact.lookup.clone(),
            });
        }
        (None, MissingNamePolicy::EmitEmpty) => {
            warn!("event=card_render module=vcard status=degraded reason=missing_name");
            debug!(
                "event=card_render module=vcard reason=missing_name lookup={}",
                contact.lookup
            );
            fallback_name = NameInfo::default();
            &fallback_name
        }
    };

    let mut lines = vec![
        BEGIN_LINE.to_string(),
        VERSION_LINE.to_string(),
        name.structured_line(),
        name.formatted_line(),
    ];
    lines.extend(contact.phones.iter().map(ToString::to_string));
    lines.extend(contact.emails.iter().map(ToString::to_string));
    lines.extend(contact.addresses.iter().map(ToString::to_string));
    lines.extend(contact.events.iter().map(ToString::to_string));
    if let Some(note) = &contact.note {
        lines.push(note.to_string());
    }
    lines.push(END_LINE.to_string());

    let mut card = String::new();
    for line in lines {
        card.push_str(&line);
        card.push('\n');
    }
    Ok(card)
}

/// Renders every contact in book order and concatenates the records.
pub fn render_cards(book: &ContactBook, policy: MissingNamePolicy) -> FormatResult<String> {
    let mut output = String::new();
    for contact in book {
        output.push_str(&render_card(contact, policy)?);
    }
    Ok(output)
}

/// Fails with `FormatError::MissingName` for the first nameless contact when
/// `policy` is `MissingNamePolicy::Fail`.
pub fn check_names(book: &ContactBook, policy: MissingNamePolicy) -> FormatResult<()> {
    if policy == MissingNamePolicy::EmitEmpty {
        return Ok(());
    }
    match book.iter().find(|contact| contact.name.is_none()) {
        Some(contact) => Err(FormatError::MissingName {
            lookup: contact.lookup.clone(),
        }),
        None => Ok(()),
    }
}

/// Renders every contact into `writer`, returning the number of bytes written.
///
/// Names are checked before the first write.
pub fn write_cards<W: Write>(
    book: &ContactBook,
    policy: MissingNamePolicy,
    writer: &mut W,
) -> FormatResult<usize> {
    check_names(book, policy)?;
    let mut written = 0;
    for contact in book {
        let card = render_card(contact, policy)?;
        writer.write_all(card.as_bytes())?;
        written += card.len();
    }
    writer.flush()?;
    Ok(written)
}
