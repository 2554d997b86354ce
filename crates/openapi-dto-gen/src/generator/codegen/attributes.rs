use crate::generator::{
  ast::{Constraints, EnumDecl, PropertyDecl},
  settings::{GeneratorSettings, JsonLibrary},
};

pub(crate) const OBSOLETE: &str = "[System.Obsolete]";

const STJ: &str = "System.Text.Json.Serialization";
const NEWTONSOFT: &str = "Newtonsoft.Json";
const ANNOTATIONS: &str = "System.ComponentModel.DataAnnotations";

/// Quotes `value` as a regular C# string literal.
pub(crate) fn string_literal(value: &str) -> String {
  let mut out = String::with_capacity(value.len() + 2);
  out.push('"');
  for ch in value.chars() {
    match ch {
      '"' => out.push_str("\\\""),
      '\\' => out.push_str("\\\\"),
      '\n' => out.push_str("\\n"),
      '\r' => out.push_str("\\r"),
      '\t' => out.push_str("\\t"),
      '\0' => out.push_str("\\0"),
      c => out.push(c),
    }
  }
  out.push('"');
  out
}

/// Quotes `value` as a verbatim (`@"..."`) C# string literal.
pub(crate) fn verbatim_literal(value: &str) -> String {
  format!("@\"{}\"", value.replace('"', "\"\""))
}

/// Attributes for a DTO property, in emission order.
pub(crate) fn property_attributes(property: &PropertyDecl, settings: &GeneratorSettings) -> Vec<String> {
  let mut attributes = Vec::new();
  let omit_when_null = !property.required && property.is_nullable();

  match settings.json_library {
    JsonLibrary::SystemTextJson => {
      attributes.push(format!(
        "[{STJ}.JsonPropertyName({})]",
        string_literal(&property.json_name)
      ));
      if omit_when_null {
        attributes.push(format!("[{STJ}.JsonIgnore(Condition = {STJ}.JsonIgnoreCondition.WhenWritingNull)]"));
      }
    }
    JsonLibrary::NewtonsoftJson => {
      let required = match (property.required, property.is_nullable()) {
        (true, false) => "Always",
        (true, true) => "AllowNull",
        (false, false) => "DisallowNull",
        (false, true) => "Default",
      };
      let mut args = format!(
        "{}, Required = {NEWTONSOFT}.Required.{required}",
        string_literal(&property.json_name)
      );
      if omit_when_null {
        args.push_str(&format!(", NullValueHandling = {NEWTONSOFT}.NullValueHandling.Ignore"));
      }
      attributes.push(format!("[{NEWTONSOFT}.JsonProperty({args})]"));
    }
  }

  if settings.data_annotations {
    if property.required && !property.is_nullable() {
      if property.ty.is_string() {
        attributes.push(format!("[{ANNOTATIONS}.Required(AllowEmptyStrings = true)]"));
      } else {
        attributes.push(format!("[{ANNOTATIONS}.Required]"));
      }
    }
    attributes.extend(constraint_attributes(&property.constraints));
  }

  attributes
}

fn constraint_attributes(constraints: &Constraints) -> Vec<String> {
  let mut attributes = Vec::new();
  if constraints.is_empty() {
    return attributes;
  }

  match (constraints.min_length, constraints.max_length) {
    (Some(min), Some(max)) => {
      attributes.push(format!("[{ANNOTATIONS}.StringLength({max}, MinimumLength = {min})]"));
    }
    (None, Some(max)) => attributes.push(format!("[{ANNOTATIONS}.StringLength({max})]")),
    (Some(min), None) => attributes.push(format!("[{ANNOTATIONS}.MinLength({min})]")),
    (None, None) => {}
  }

  if let Some(pattern) = &constraints.pattern {
    attributes.push(format!("[{ANNOTATIONS}.RegularExpression({})]", verbatim_literal(pattern)));
  }

  attributes
}

/// Type-level attributes for an enum; string enums need a converter.
pub(crate) fn enum_attributes(decl: &EnumDecl, settings: &GeneratorSettings) -> Vec<String> {
  if !decl.is_string_enum() {
    return Vec::new();
  }

  let converter = match settings.json_library {
    JsonLibrary::SystemTextJson => format!("[{STJ}.JsonConverter(typeof({STJ}.JsonStringEnumConverter))]"),
    JsonLibrary::NewtonsoftJson => {
      format!("[{NEWTONSOFT}.JsonConverter(typeof({NEWTONSOFT}.Converters.StringEnumConverter))]")
    }
  };
  vec![converter]
}

pub(crate) fn enum_member_attribute(value: &str) -> String {
  format!(
    "[System.Runtime.Serialization.EnumMember(Value = {})]",
    verbatim_literal(value)
  )
}

pub(crate) fn extension_data_attribute(settings: &GeneratorSettings) -> String {
  match settings.json_library {
    JsonLibrary::SystemTextJson => format!("[{STJ}.JsonExtensionData]"),
    JsonLibrary::NewtonsoftJson => format!("[{NEWTONSOFT}.JsonExtensionData]"),
  }
}
