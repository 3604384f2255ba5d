#![allow(clippy::unwrap_used, clippy::arithmetic_side_effects)]

//! Scenario tests for login and secure-note translation, driven from
//! Enpass-shaped JSON through the in-memory migration entry point.

use serde_json::{json, Value};
use vaultshift_convert::{migrate_documents, Labels, MigrateError};

const TARGET: &str = r#"{"accounts":[{"vaults":[{"items":[]}]}]}"#;

fn migrate(items: &[Value]) -> Vec<Value> {
    let source = json!({ "items": items }).to_string();
    let migrated = migrate_documents(&source, TARGET, &Labels::default()).unwrap();
    let doc: Value = serde_json::from_str(&migrated.json).unwrap();
    doc["accounts"][0]["vaults"][0]["items"]
        .as_array()
        .unwrap()
        .clone()
}

fn login(fields: Value) -> Value {
    json!({ "uuid": "L", "category": "login", "title": "Site", "fields": fields })
}

#[test]
fn empty_password_does_not_overwrite_earlier_one() {
    let items = migrate(&[login(json!([
        {"type": "username", "value": "alice"},
        {"type": "email", "value": "alice@x.com"},
        {"type": "password", "value": "p1"},
        {"type": "password", "value": ""}
    ]))]);

    assert_eq!(
        items[0]["details"]["loginFields"],
        json!([
            {"value": "alice", "id": "", "name": "username", "fieldType": "T", "designation": "username"},
            {"value": "p1", "id": "", "name": "password", "fieldType": "p", "designation": "password"}
        ])
    );
}

#[test]
fn email_only_login_uses_email_as_username() {
    let items = migrate(&[login(json!([{"type": "email", "value": "bob@x.com"}]))]);

    let fields = &items[0]["details"]["loginFields"];
    assert_eq!(fields.as_array().unwrap().len(), 1);
    assert_eq!(fields[0]["value"], "bob@x.com");
    assert_eq!(fields[0]["designation"], "username");

    let section_fields = &items[0]["details"]["sections"][0]["fields"];
    assert_eq!(section_fields[0]["value"]["email"]["email_address"], "bob@x.com");
}

#[test]
fn empty_note_scenario() {
    let items = migrate(&[json!({"uuid": "N", "category": "note", "title": "n", "note": ""})]);

    assert_eq!(items[0]["details"]["notesPlain"], "");
    assert_eq!(items[0]["categoryUuid"], "003");
    assert_eq!(items[0]["details"]["loginFields"], json!([]));
    assert_eq!(items[0]["details"]["sections"], json!([]));
}

#[test]
fn note_without_note_key_has_empty_body() {
    let items = migrate(&[json!({"uuid": "N", "category": "note"})]);
    assert_eq!(items[0]["details"]["notesPlain"], "");
}

#[test]
fn login_without_fields_key_still_translates() {
    let items = migrate(&[json!({"uuid": "L", "category": "login", "title": "bare"})]);

    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["details"]["loginFields"], json!([]));
    assert_eq!(items[0]["details"]["sections"][0]["name"], "add more");
    assert_eq!(items[0]["overview"]["urls"][0]["url"], "");
}

#[test]
fn last_url_and_totp_win() {
    let items = migrate(&[login(json!([
        {"type": "url", "value": "https://old.example"},
        {"type": "totp", "value": "OLDSECRET"},
        {"type": "url", "value": "https://new.example"},
        {"type": "totp", "value": "NEWSECRET"},
        {"type": "url", "value": ""}
    ]))]);

    assert_eq!(items[0]["overview"]["url"], "https://new.example");
    let totp = &items[0]["details"]["sections"][0]["fields"][0];
    assert_eq!(totp["value"]["totp"], "NEWSECRET");
    assert_eq!(totp["id"], vaultshift_convert::totp_field_id("NEWSECRET"));
}

#[test]
fn identical_secrets_share_an_id_across_items() {
    let items = migrate(&[
        login(json!([{"type": "totp", "value": "SHARED"}])),
        login(json!([{"type": "totp", "value": "SHARED"}])),
    ]);

    let first = &items[0]["details"]["sections"][0]["fields"][0]["id"];
    let second = &items[1]["details"]["sections"][0]["fields"][0]["id"];
    assert_eq!(first, second);
}

#[test]
fn unsupported_categories_are_dropped() {
    let items = migrate(&[
        json!({"uuid": "1", "category": "creditcard"}),
        json!({"uuid": "2", "category": "note", "note": "keep"}),
        json!({"uuid": "3"}),
        json!("not an item"),
    ]);

    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["uuid"], "2");
}

#[test]
fn pre_existing_items_are_discarded() {
    let target = r#"{"accounts":[{"vaults":[{"items":[{"uuid":"x"},{"uuid":"y"}]}]}]}"#;
    let source = json!({"items": []}).to_string();

    let migrated = migrate_documents(&source, target, &Labels::default()).unwrap();

    assert_eq!(migrated.replaced, 2);
    assert_eq!(migrated.json, r#"{"accounts":[{"vaults":[{"items":[]}]}]}"#);
}

#[test]
fn target_without_accounts_fails() {
    let err = migrate_documents(r#"{"items":[]}"#, r#"{"accounts":[]}"#, &Labels::default())
        .unwrap_err();
    assert!(matches!(err, MigrateError::Substitution(_)));
}
