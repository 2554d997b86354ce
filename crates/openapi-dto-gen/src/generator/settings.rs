use strum::Display;

use super::naming::properties::{
  DefaultPropertyNameGenerator, PropertyNameGenerator, UnderscoreFreePropertyNameGenerator,
};

/// Shape of the generated type declarations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum ClassStyle {
  /// `partial record` with `init` accessors.
  #[default]
  Record,
  /// `partial class` with `get; set;` accessors.
  #[cfg_attr(not(test), allow(dead_code))]
  Poco,
}

/// Serializer whose attributes decorate the generated members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum JsonLibrary {
  #[default]
  #[strum(to_string = "System.Text.Json")]
  SystemTextJson,
  #[strum(to_string = "Newtonsoft.Json")]
  #[cfg_attr(not(test), allow(dead_code))]
  NewtonsoftJson,
}

/// Policy used to turn schema property names into member names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum NamingStrategy {
  #[strum(to_string = "default")]
  #[cfg_attr(not(test), allow(dead_code))]
  Default,
  #[default]
  #[strum(to_string = "underscore-free")]
  UnderscoreFree,
}

impl NamingStrategy {
  #[must_use]
  pub fn generator(self) -> &'static dyn PropertyNameGenerator {
    match self {
      Self::Default => &DefaultPropertyNameGenerator,
      Self::UnderscoreFree => &UnderscoreFreePropertyNameGenerator,
    }
  }
}

/// Generation options. The CLI always runs with [`GeneratorSettings::dto_defaults`].
#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
#[allow(clippy::struct_excessive_bools)]
pub struct GeneratorSettings {
  #[builder(default = true)]
  pub dto_only: bool,
  #[builder(default)]
  pub class_style: ClassStyle,
  #[builder(default)]
  pub json_library: JsonLibrary,
  #[builder(default = true)]
  pub optional_properties_as_nullable: bool,
  #[builder(default = true)]
  pub nullable_reference_types: bool,
  #[builder(default)]
  pub data_annotations: bool,
  #[builder(default)]
  pub naming_strategy: NamingStrategy,
}

impl GeneratorSettings {
  /// DTO-only records with System.Text.Json attributes, nullable optional
  /// properties, nullable reference types, no data annotations and
  /// underscore-free property names.
  #[must_use]
  pub fn dto_defaults() -> Self {
    Self::builder().build()
  }
}

impl Default for GeneratorSettings {
  fn default() -> Self {
    Self::dto_defaults()
  }
}
