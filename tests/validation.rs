//! Tests for field rules, phone handling and presentation state.
mod common;
use quote_form::prelude::*;
use quote_form::validation::{KeyPress, is_allowed_phone_key};

#[test]
fn test_email_shape() {
    assert!(is_valid_email("a@b.co"));
    assert!(!is_valid_email("ab.co"));
    assert!(!is_valid_email("a@bco"));
    assert!(!is_valid_email("a.b@co"));
    assert!(!is_valid_email("a @b.co"));
    assert!(!is_valid_email("@b.co"));
    assert!(!is_valid_email("a@b."));
}

#[test]
fn test_phone_validity_by_prefix_and_length() {
    assert!(is_valid_phone("0790256695"));
    assert!(is_valid_phone("079 025 6695"));
    assert!(is_valid_phone("012345678"));
    assert!(!is_valid_phone("071234"));
    assert!(!is_valid_phone("07902566951"));
    assert!(is_valid_phone("27821234567"));
    assert!(is_valid_phone("+27 82 123 4567"));
    assert!(is_valid_phone("2782123456"));
    assert!(!is_valid_phone("278212345"));
    assert!(!is_valid_phone("1234567890"));
    assert!(!is_valid_phone(""));
}

#[test]
fn test_format_phone_groups() {
    assert_eq!(format_phone("0790256695"), "079 025 6695");
    assert_eq!(format_phone("27821234567"), "27 821 234 567");
    assert_eq!(format_phone("079"), "079");
    assert_eq!(format_phone("07902"), "079 02");
    assert_eq!(format_phone("0790256"), "079 025 6");
    assert_eq!(format_phone("27"), "27");
    assert_eq!(format_phone("2782"), "27 82");
    assert_eq!(format_phone("278212"), "27 821 2");
    assert_eq!(format_phone("278212345"), "27 821 234 5");
    assert_eq!(format_phone("(079) 025-6695"), "079 025 6695");
}

#[test]
fn test_format_phone_passes_other_prefixes_through() {
    assert_eq!(format_phone("1234567890"), "1234567890");
    assert_eq!(format_phone("+1 (555) 010"), "1555010");
    assert_eq!(format_phone("abc"), "");
}

#[test]
fn test_format_phone_truncates_long_input() {
    assert_eq!(format_phone("0790256695123"), "079 025 6695");
    assert_eq!(format_phone("2782123456789"), "27 821 234 567");
}

#[test]
fn test_format_phone_is_idempotent() {
    let mut inputs: Vec<String> = Vec::new();
    for prefix in ["0", "27", "1", "9", "2"] {
        for len in 0..14 {
            let tail: String = (0..len).map(|i| char::from(b'0' + (i * 7 % 10) as u8)).collect();
            inputs.push(format!("{}{}", prefix, tail));
        }
    }

    for x in inputs {
        let once = format_phone(&x);
        let twice = format_phone(&strip_non_digits(&once));
        assert_eq!(once, twice, "formatting '{}' is not idempotent", x);
    }
}

#[test]
fn test_required_and_optional_empty_fields() {
    let required = FieldDescriptor::new("name", FieldKind::Text, true);
    let verdict = validate(&required, "   ");
    assert!(!verdict.valid);
    assert_eq!(verdict.message, "This field is required");

    let optional = FieldDescriptor::new("name", FieldKind::Text, false);
    let verdict = validate(&optional, "");
    assert!(verdict.valid);
    assert_eq!(verdict.message, "");
}

#[test]
fn test_kind_specific_messages() {
    let email = FieldDescriptor::new("email", FieldKind::Email, false);
    assert_eq!(
        validate(&email, "jane@x").message,
        "Please enter a valid email address"
    );
    assert!(validate(&email, "  jane@x.com  ").valid);

    let phone = FieldDescriptor::new("phone", FieldKind::Tel, true);
    assert_eq!(
        validate(&phone, "071234").message,
        "Please enter a valid phone number"
    );
}

#[test]
fn test_select_rejects_values_outside_its_options() {
    let service = FormDefinition::quote_request().field("service").unwrap().clone();
    assert!(validate(&service, "Carpet Cleaning").valid);

    let verdict = validate(&service, "Choose a service");
    assert!(!verdict.valid);
    assert_eq!(verdict.message, "Please select a service");

    assert_eq!(validate(&service, "").message, "This field is required");

    let open = FieldDescriptor::new("service", FieldKind::Select, false);
    assert!(validate(&open, "Anything").valid);
}

#[test]
fn test_field_states_are_exclusive() {
    let field = FieldDescriptor::new("email", FieldKind::Email, false);

    let bad = validate(&field, "nope");
    assert_eq!(FieldState::from_verdict(&bad, "nope"), FieldState::Error);

    let good = validate(&field, "a@b.co");
    assert_eq!(FieldState::from_verdict(&good, "a@b.co"), FieldState::Valid);

    let empty = validate(&field, "");
    assert_eq!(FieldState::from_verdict(&empty, ""), FieldState::Neutral);
}

#[test]
fn test_phone_key_mask() {
    assert!(is_allowed_phone_key(KeyPress::plain(48)));
    assert!(is_allowed_phone_key(KeyPress::plain(57)));
    assert!(is_allowed_phone_key(KeyPress::plain(100)));
    assert!(is_allowed_phone_key(KeyPress::plain(8)));
    assert!(is_allowed_phone_key(KeyPress::plain(37)));
    assert!(is_allowed_phone_key(KeyPress {
        key_code: 65,
        ctrl: true,
        shift: false
    }));

    assert!(!is_allowed_phone_key(KeyPress::plain(65)));
    assert!(!is_allowed_phone_key(KeyPress::plain(32)));
    assert!(!is_allowed_phone_key(KeyPress {
        key_code: 51,
        ctrl: false,
        shift: true
    }));
    assert!(is_allowed_phone_key(KeyPress {
        key_code: 99,
        ctrl: false,
        shift: true
    }));
}
