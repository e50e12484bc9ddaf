mod common;

use common::{body, person_bag, INVALID_PATHS};
use databag::{DataBag, Error};
use pretty_assertions::assert_eq;
use serde::Deserialize;
use serde_json::json;

// ── Grammar ──────────────────────────────────────────────────────

#[test]
fn invalid_paths_are_rejected() {
    let mut bag = person_bag();
    for (name, path) in INVALID_PATHS {
        match bag.get(path, "default") {
            Err(Error::InvalidPath(p)) => assert_eq!(&p, path, "{name}"),
            other => panic!("{name}: expected InvalidPath, got {other:?}"),
        }
    }
}

// ── Resolution ───────────────────────────────────────────────────

#[test]
fn resolves_documented_paths() {
    let cases = [
        ("not.existing", json!("default")),
        ("person.firstName", json!("John")),
        (
            "person.emailAddresses.0",
            json!({"emailAddress": "john@doe.com", "type": "private"}),
        ),
        ("person.emailAddresses.0.emailAddress", json!("john@doe.com")),
        ("person.emailAddresses.privateGsm.emailAddress", json!("john@doe2.com")),
        ("person.addresses.test", json!("default")),
        ("person.emailAddresses.test", json!("default")),
    ];
    for (path, expected) in cases {
        let mut bag = person_bag();
        assert_eq!(bag.get(path, "default").unwrap(), expected, "{path}");
    }
}

#[test]
fn tag_without_field_returns_whole_element() {
    let mut bag = person_bag();
    assert_eq!(
        bag.get("person.emailAddresses.privateGsm", json!(null)).unwrap(),
        json!({"emailAddress": "john@doe2.com", "type": "privateGsm"})
    );
}

#[test]
fn first_tag_match_wins() {
    let mut bag = DataBag::from_entity_data(
        "person",
        body(json!({"phones": [
            {"type": "work", "number": "1"},
            {"type": "work", "number": "2"}
        ]})),
    );
    assert_eq!(bag.get("person.phones.work.number", json!(null)).unwrap(), json!("1"));
}

#[test]
fn position_out_of_range_gives_default() {
    let mut bag = person_bag();
    assert_eq!(bag.get("person.emailAddresses.5", "none").unwrap(), json!("none"));
    assert_eq!(bag.get("person.emailAddresses.5.emailAddress", "none").unwrap(), json!("none"));
}

#[test]
fn missing_field_gives_default() {
    let mut bag = person_bag();
    assert_eq!(bag.get("person.emailAddresses.private.street", 0).unwrap(), json!(0));
}

#[test]
fn null_property_gives_default() {
    let mut bag = DataBag::from_entity_data("person", body(json!({"nickName": null})));
    assert_eq!(bag.get("person.nickName", "n/a").unwrap(), json!("n/a"));
}

#[test]
fn empty_list_gives_default_when_indexed() {
    let mut bag = DataBag::from_entity_data("person", body(json!({"emailAddresses": []})));
    assert_eq!(bag.get("person.emailAddresses.0", "none").unwrap(), json!("none"));
    assert_eq!(bag.get("person.emailAddresses", "none").unwrap(), json!([]));
}

#[test]
fn sub_path_drills_into_plain_object() {
    let mut bag = DataBag::from_entity_data(
        "company",
        body(json!({"settings": {"locale": "nl", "mail": {"from": "a@b.c"}}})),
    );
    assert_eq!(bag.get("company.settings.locale", json!(null)).unwrap(), json!("nl"));
    assert_eq!(bag.get("company.settings.mail.from", json!(null)).unwrap(), json!("a@b.c"));
    assert_eq!(bag.get("company.settings.currency", "EUR").unwrap(), json!("EUR"));
}

#[test]
fn tag_lookup_inside_keyed_object() {
    let mut bag = DataBag::from_entity_data(
        "company",
        body(json!({"contacts": {"first": {"type": "billing", "name": "Ann"}}})),
    );
    assert_eq!(bag.get("company.contacts.billing.name", json!(null)).unwrap(), json!("Ann"));
}

#[test]
fn scalar_property_acts_as_single_element() {
    let mut bag = DataBag::from_entity_data("person", body(json!({"title": "dr"})));
    assert_eq!(bag.get("person.title.0", json!(null)).unwrap(), json!("dr"));
    assert_eq!(bag.get("person.title.1", "x").unwrap(), json!("x"));
}

// ── Typed access ─────────────────────────────────────────────────

#[derive(Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
struct Email {
    email_address: String,
    #[serde(rename = "type")]
    kind: String,
}

#[test]
fn get_as_deserializes() {
    let mut bag = person_bag();
    let email: Option<Email> = bag.get_as("person.emailAddresses.private").unwrap();
    assert_eq!(
        email,
        Some(Email {
            email_address: "john@doe.com".into(),
            kind: "private".into()
        })
    );
}

#[test]
fn get_as_absent_is_none() {
    let mut bag = person_bag();
    let missing: Option<String> = bag.get_as("person.lastName").unwrap();
    assert_eq!(missing, None);
}

#[test]
fn get_as_type_mismatch_is_serialization_error() {
    let mut bag = person_bag();
    let err = bag.get_as::<u32>("person.firstName").unwrap_err();
    assert!(matches!(err, Error::Serialization(_)));
}

#[test]
fn get_does_not_mutate() {
    let mut bag = person_bag();
    let before = bag.state().clone();
    let _ = bag.get("person.addresses.visit.street", json!(null)).unwrap();
    let _ = bag.get("company.name", json!(null)).unwrap();
    assert_eq!(bag.state(), &before);
}
