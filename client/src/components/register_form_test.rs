use super::*;

#[test]
fn register_fields_have_expected_kinds() {
    let fields = RegisterFields::new();
    assert_eq!(fields.username.kind(), InputKind::Text);
    assert_eq!(fields.email.kind(), InputKind::Email);
    assert_eq!(fields.password.kind(), InputKind::Password);
}

#[test]
fn register_fields_start_empty() {
    let fields = RegisterFields::new();
    assert_eq!(
        fields.submission(),
        RegisterSubmission { username: String::new(), email: String::new(), password: String::new() }
    );
}

#[test]
fn typing_then_clearing_username_leaves_other_fields_alone() {
    let fields = RegisterFields::new();
    fields.email.set("alice@example.com".to_owned());
    fields.password.set("pw".to_owned());

    fields.username.bind().on_change.run("alice".to_owned());
    assert_eq!(fields.username.value(), "alice");

    fields.username.clear();
    assert_eq!(fields.username.value(), "");
    assert_eq!(fields.email.value(), "alice@example.com");
    assert_eq!(fields.password.value(), "pw");
}

#[test]
fn separate_forms_do_not_share_fields() {
    let first = RegisterFields::new();
    let second = RegisterFields::new();
    first.username.set("alice".to_owned());
    assert_eq!(second.username.value(), "");
}

#[test]
fn register_submission_debug_redacts_password() {
    let submission = RegisterSubmission {
        username: "alice".to_owned(),
        email: "a@b.c".to_owned(),
        password: "hunter2".to_owned(),
    };
    let rendered = format!("{submission:?}");
    assert!(rendered.contains("a@b.c"));
    assert!(!rendered.contains("hunter2"));
}
