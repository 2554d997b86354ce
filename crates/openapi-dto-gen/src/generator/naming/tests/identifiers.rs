use std::collections::BTreeSet;

use crate::generator::naming::identifiers::{
  ensure_unique, to_enum_member_name, to_type_name, to_upper_camel_case, to_valid_member_name,
};

#[test]
fn test_upper_camel_case() {
  let cases = [
    ("name", true, "Name"),
    ("some-property", true, "SomeProperty"),
    ("first name", true, "First_name"),
    ("a/b", true, "A_b"),
    ("1st", true, "_1st"),
    ("1st", false, "1st"),
    ("alreadyCamel", false, "AlreadyCamel"),
    ("-", true, ""),
    ("", true, ""),
  ];
  for (input, alpha_first, expected) in cases {
    assert_eq!(
      to_upper_camel_case(input, alpha_first),
      expected,
      "failed for input {input:?} (alpha_first={alpha_first})"
    );
  }
}

#[test]
fn test_type_names() {
  let cases = [
    ("Pet", "Pet"),
    ("pet_status", "PetStatus"),
    ("petStatus", "PetStatus"),
    ("user-profile.v2", "UserProfileV2"),
    ("HTTPError", "HTTPError"),
    ("Café", "Cafe"),
    ("2fa", "_2fa"),
    ("", "Anonymous"),
    ("___", "Anonymous"),
  ];
  for (input, expected) in cases {
    assert_eq!(to_type_name(input), expected, "failed for input {input:?}");
  }
}

#[test]
fn test_enum_member_names() {
  let cases = [
    ("available", "Available"),
    ("in-progress", "InProgress"),
    ("in_progress", "In_progress"),
    ("urn:x", "UrnX"),
    ("a.b", "A_b"),
    ("hello world", "Hello_world"),
    ("1", "_1"),
    ("-1", "_1"),
    ("+", "Empty"),
    ("", "Empty"),
  ];
  for (input, expected) in cases {
    assert_eq!(to_enum_member_name(input), expected, "failed for input {input:?}");
  }
}

#[test]
fn test_valid_member_names() {
  assert_eq!(to_valid_member_name(String::new(), "Pet"), "Property");
  assert_eq!(to_valid_member_name("1stPlace".to_string(), "Pet"), "_1stPlace");
  assert_eq!(to_valid_member_name("Pet".to_string(), "Pet"), "PetValue");
  assert_eq!(to_valid_member_name("Name".to_string(), "Pet"), "Name");
}

#[test]
fn test_ensure_unique() {
  let mut used = BTreeSet::new();
  assert_eq!(ensure_unique("UserId", &used), "UserId");

  used.insert("UserId".to_string());
  assert_eq!(ensure_unique("UserId", &used), "UserId2");

  used.insert("UserId2".to_string());
  assert_eq!(ensure_unique("UserId", &used), "UserId3");
}
