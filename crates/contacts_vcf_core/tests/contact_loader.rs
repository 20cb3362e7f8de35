use contacts_vcf_core::model::attribute::{
    MIMETYPE_EMAIL, MIMETYPE_EVENT, MIMETYPE_NAME, MIMETYPE_NOTE, MIMETYPE_PHONE,
    MIMETYPE_POSTAL_ADDRESS,
};
use contacts_vcf_core::{load_contacts, render_card, AttributeRow, ExportConfig, MissingNamePolicy};

const ACCOUNT: &str = "com.osp.app.signin";

fn accepted(lookup: &str, mimetype: &str) -> AttributeRow {
    AttributeRow::new(Some(ACCOUNT), lookup, mimetype)
}

#[test]
fn rows_from_other_accounts_create_nothing() {
    let rows = vec![
        AttributeRow::new(Some("com.google"), "g1", MIMETYPE_NAME).with_text(1, "Google Only"),
        AttributeRow::new(None::<String>, "local", MIMETYPE_PHONE).with_text(1, "1"),
        AttributeRow::new(Some("com.google"), "shared", MIMETYPE_PHONE).with_text(1, "2"),
        accepted("shared", MIMETYPE_NAME).with_text(1, "Shared"),
    ];

    let outcome = load_contacts(&rows, &ExportConfig::default()).unwrap();

    assert_eq!(outcome.book.len(), 1);
    assert!(outcome.book.get("g1").is_none());
    assert!(outcome.book.get("local").is_none());
    let shared = outcome.book.get("shared").unwrap();
    assert!(shared.phones.is_empty());
    assert_eq!(outcome.stats.skipped_provenance, 3);
}

#[test]
fn list_attributes_keep_count_and_encounter_order() {
    let rows = vec![
        accepted("a", MIMETYPE_PHONE).with_text(1, "1").with_int(2, 1),
        accepted("b", MIMETYPE_PHONE).with_text(1, "9").with_int(2, 1),
        accepted("a", MIMETYPE_EMAIL).with_text(1, "first@x").with_int(2, 1),
        accepted("a", MIMETYPE_PHONE).with_text(1, "2").with_int(2, 2),
        accepted("a", MIMETYPE_EVENT).with_text(1, "2001").with_int(2, 1),
        accepted("a", MIMETYPE_EMAIL).with_text(1, "second@x").with_int(2, 2),
        accepted("a", MIMETYPE_POSTAL_ADDRESS).with_int(2, 1).with_text(4, "s"),
        accepted("a", MIMETYPE_NAME).with_text(1, "Ann"),
    ];

    let outcome = load_contacts(&rows, &ExportConfig::default()).unwrap();
    let order: Vec<&str> = outcome
        .book
        .iter()
        .map(|contact| contact.lookup.as_str())
        .collect();
    assert_eq!(order, ["a", "b"]);

    let a = outcome.book.get("a").unwrap();
    let numbers: Vec<&str> = a.phones.iter().map(|phone| phone.number.as_str()).collect();
    let emails: Vec<&str> = a.emails.iter().map(|email| email.address.as_str()).collect();
    assert_eq!(numbers, ["1", "2"]);
    assert_eq!(emails, ["first@x", "second@x"]);
    assert_eq!(a.events.len(), 1);
    assert_eq!(a.addresses.len(), 1);

    let card = render_card(a, MissingNamePolicy::Fail).unwrap();
    assert_eq!(card.lines().filter(|line| line.starts_with("TEL")).count(), 2);
    assert_eq!(card.lines().filter(|line| line.starts_with("EMAIL")).count(), 2);
    assert_eq!(card.lines().filter(|line| line.starts_with("ADR")).count(), 1);
    assert_eq!(
        card.lines()
            .filter(|line| line.starts_with("X-ANDROID-CUSTOM"))
            .count(),
        1
    );
    assert!(card.find("TEL;HOME:1").unwrap() < card.find("TEL;CELL:2").unwrap());
}

#[test]
fn last_name_and_note_rows_win() {
    let rows = vec![
        accepted("a", MIMETYPE_NAME).with_text(1, "Old Name"),
        accepted("a", MIMETYPE_NOTE).with_text(1, "old"),
        accepted("a", MIMETYPE_NAME).with_text(1, "New Name"),
        accepted("a", MIMETYPE_NOTE).with_text(1, "new"),
    ];

    let outcome = load_contacts(&rows, &ExportConfig::default()).unwrap();
    let a = outcome.book.get("a").unwrap();

    assert_eq!(a.name.as_ref().map(|name| name.full.as_str()), Some("New Name"));
    assert_eq!(a.note.as_ref().map(|note| note.text.as_str()), Some("new"));
}

#[test]
fn unknown_mimetype_is_dropped_but_owner_is_kept() {
    let rows = vec![accepted("p", "vnd.android.cursor.item/photo")];

    let outcome = load_contacts(&rows, &ExportConfig::default()).unwrap();
    let p = outcome.book.get("p").unwrap();

    assert!(p.name.is_none());
    assert!(p.phones.is_empty() && p.emails.is_empty() && p.events.is_empty());
    assert_eq!(outcome.stats.ignored_mimetype, 1);
}

#[test]
fn widened_allow_set_accepts_additional_accounts() {
    let rows = vec![
        AttributeRow::new(Some("com.google"), "g", MIMETYPE_NAME).with_text(1, "G"),
        accepted("s", MIMETYPE_NAME).with_text(1, "S"),
    ];
    let mut config = ExportConfig::default();
    config
        .accepted_account_types
        .insert("com.google".to_string());

    let outcome = load_contacts(&rows, &config).unwrap();

    assert_eq!(outcome.book.len(), 2);
    assert_eq!(outcome.stats.skipped_provenance, 0);
}
