use std::{collections::BTreeSet, sync::LazyLock};

use any_ascii::any_ascii;
use regex::Regex;

static WORD_BOUNDARY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^A-Za-z0-9]+").unwrap());

/// Upper-camel-cases an identifier candidate.
///
/// # Rules:
/// 1. The first character is uppercased, the rest keeps its case.
/// 2. Spaces and `/` become `_`.
/// 3. Every `-` is removed and the character following it is uppercased.
/// 4. With `first_char_must_be_alpha`, a result starting with a digit is prefixed with `_`.
pub(crate) fn to_upper_camel_case(input: &str, first_char_must_be_alpha: bool) -> String {
  let mut chars = input.chars();
  let Some(first) = chars.next() else {
    return String::new();
  };

  let capitalized: String = first
    .to_uppercase()
    .chain(chars)
    .map(|c| if c == ' ' || c == '/' { '_' } else { c })
    .collect();

  let converted = convert_dashes_to_camel_case(&capitalized);
  if first_char_must_be_alpha && converted.starts_with(char::is_numeric) {
    return format!("_{converted}");
  }

  converted
}

fn convert_dashes_to_camel_case(input: &str) -> String {
  let mut output = String::with_capacity(input.len());
  let mut capitalize_next = false;

  for c in input.chars() {
    if c == '-' {
      capitalize_next = true;
    } else if capitalize_next {
      output.extend(c.to_uppercase());
      capitalize_next = false;
    } else {
      output.push(c);
    }
  }

  output
}

/// Converts a schema key or inline type hint into a C# type name.
///
/// The input is transliterated to ASCII, split on any run of non-alphanumeric
/// characters, and every word is upper-camel-cased. Existing inner capitals are
/// kept, so `petStatus` and `pet_status` both become `PetStatus`.
pub(crate) fn to_type_name(raw: &str) -> String {
  let ascii = any_ascii(raw);
  let ident: String = WORD_BOUNDARY_RE
    .split(&ascii)
    .filter(|word| !word.is_empty())
    .map(|word| to_upper_camel_case(word, false))
    .collect();

  if ident.is_empty() {
    return "Anonymous".to_string();
  }

  if ident.starts_with(|c: char| c.is_ascii_digit()) {
    return format!("_{ident}");
  }

  ident
}

/// Converts an enum value into a C# enum member name.
pub(crate) fn to_enum_member_name(value: &str) -> String {
  let prepared = value.replace(':', "-").replace('"', "");
  let name: String = to_upper_camel_case(&prepared, true)
    .chars()
    .map(|c| match c {
      '.' | ',' | '#' | '&' | '-' | '\\' => '_',
      other => other,
    })
    .filter(|c| c.is_alphanumeric() || *c == '_')
    .collect();

  if name.is_empty() {
    return "Empty".to_string();
  }

  if name.starts_with(char::is_numeric) {
    return format!("_{name}");
  }

  name
}

/// Adjusts a generated member name so it is a legal C# member of `type_name`.
///
/// Empty names become `Property`, names starting with a digit get a `_` prefix,
/// and a member named after its enclosing type gets a `Value` suffix.
pub(crate) fn to_valid_member_name(name: String, type_name: &str) -> String {
  if name.is_empty() {
    return "Property".to_string();
  }

  if name.starts_with(char::is_numeric) {
    return format!("_{name}");
  }

  if name == type_name {
    return format!("{name}Value");
  }

  name
}

/// Ensures a name is unique within a set of used names, appending a numeric suffix if needed.
pub(crate) fn ensure_unique(base_name: &str, used_names: &BTreeSet<String>) -> String {
  if !used_names.contains(base_name) {
    return base_name.to_string();
  }
  let mut i = 2;
  loop {
    let new_name = format!("{base_name}{i}");
    if !used_names.contains(&new_name) {
      return new_name;
    }
    i += 1;
  }
}
