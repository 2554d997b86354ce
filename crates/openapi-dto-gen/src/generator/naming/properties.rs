//! Property naming policies for generated DTO members.
//!
//! Every policy starts from [`default_property_name`], the baseline rule that
//! turns a raw schema property name into an upper-camel-case C# identifier.
//! [`UnderscoreFreePropertyNameGenerator`] then removes the underscores the
//! baseline leaves behind, so `user_id` becomes `UserId` instead of `User_id`.

use super::identifiers::to_upper_camel_case;

/// Derives a member identifier from a schema property's declared name.
///
/// Implementations never fail: any input, including the empty string, yields
/// a best-effort identifier.
pub trait PropertyNameGenerator {
  fn generate(&self, property_name: &str) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultPropertyNameGenerator;

impl PropertyNameGenerator for DefaultPropertyNameGenerator {
  fn generate(&self, property_name: &str) -> String {
    default_property_name(property_name)
  }
}

/// Baseline naming followed by an underscore split where every segment is
/// upper-camel-cased and the segments are joined without a separator.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnderscoreFreePropertyNameGenerator;

impl PropertyNameGenerator for UnderscoreFreePropertyNameGenerator {
  fn generate(&self, property_name: &str) -> String {
    recase_segments(&default_property_name(property_name))
  }
}

/// Splits on `_`, upper-camel-cases every segment and concatenates them.
///
/// Empty segments (from consecutive, leading or trailing underscores)
/// contribute nothing.
pub(crate) fn recase_segments(identifier: &str) -> String {
  identifier
    .split('_')
    .map(|segment| to_upper_camel_case(segment, false))
    .collect()
}

/// Converts a raw property name into the baseline C# property identifier.
///
/// # Rules:
/// 1. `"`, `@`, `?`, `$`, `[`, `]` and `)` are removed; `(` becomes `_`.
/// 2. `.` and `=` become `-`, `+` becomes `plus`.
/// 3. The result is upper-camel-cased (dashes fold into capitals, a leading digit gets a `_` prefix).
/// 4. `*` becomes `Star`; `:`, `-` and `#` become `_`.
pub(crate) fn default_property_name(name: &str) -> String {
  let prepared = name
    .replace(['"', '@', '?', '$', '[', ']', ')'], "")
    .replace('(', "_")
    .replace(['.', '='], "-")
    .replace('+', "plus");

  to_upper_camel_case(&prepared, true)
    .replace('*', "Star")
    .replace([':', '-', '#'], "_")
}
