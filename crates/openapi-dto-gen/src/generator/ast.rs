//! C# declaration model produced by the schema converter and consumed by the emitter.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Documentation {
  lines: Vec<String>,
}

impl Documentation {
  #[must_use]
  pub fn from_raw(input: &str) -> Self {
    Self {
      lines: input
        .replace("\\n", "\n")
        .lines()
        .map(|line| line.trim_end().to_string())
        .collect(),
    }
  }

  #[must_use]
  pub fn from_optional(desc: Option<&String>) -> Self {
    desc.map_or_else(Self::default, |d| Self::from_raw(d))
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.lines.iter().all(|line| line.trim().is_empty())
  }

  #[must_use]
  pub fn lines(&self) -> &[String] {
    &self.lines
  }
}

/// A C# type as it appears at a use site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsType {
  pub name: String,
  pub value_type: bool,
  pub nullable: bool,
}

impl CsType {
  pub fn reference(name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      value_type: false,
      nullable: false,
    }
  }

  pub fn value(name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      value_type: true,
      nullable: false,
    }
  }

  #[must_use]
  pub fn object() -> Self {
    Self::reference("object")
  }

  #[must_use]
  pub fn string() -> Self {
    Self::reference("string")
  }

  #[must_use]
  pub fn collection(item: &Self, nullable_reference_types: bool) -> Self {
    Self::reference(format!(
      "System.Collections.Generic.ICollection<{}>",
      item.render(nullable_reference_types)
    ))
  }

  #[must_use]
  pub fn dictionary(value: &Self, nullable_reference_types: bool) -> Self {
    Self::reference(format!(
      "System.Collections.Generic.IDictionary<string, {}>",
      value.render(nullable_reference_types)
    ))
  }

  #[must_use]
  pub fn with_nullable(mut self, nullable: bool) -> Self {
    self.nullable |= nullable;
    self
  }

  /// Renders the type, adding `?` for nullable value types and, when nullable
  /// reference types are enabled, for nullable reference types.
  #[must_use]
  pub fn render(&self, nullable_reference_types: bool) -> String {
    if self.nullable && (self.value_type || nullable_reference_types) {
      format!("{}?", self.name)
    } else {
      self.name.clone()
    }
  }

  #[must_use]
  pub fn is_string(&self) -> bool {
    self.name == "string"
  }
}

/// Validation constraints carried over from the property schema.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constraints {
  pub min_length: Option<u64>,
  pub max_length: Option<u64>,
  pub pattern: Option<String>,
}

impl Constraints {
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.min_length.is_none() && self.max_length.is_none() && self.pattern.is_none()
  }
}

#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
pub struct PropertyDecl {
  #[builder(into)]
  pub json_name: String,
  #[builder(into)]
  pub name: String,
  pub ty: CsType,
  #[builder(default)]
  pub required: bool,
  #[builder(default)]
  pub docs: Documentation,
  #[builder(default)]
  pub deprecated: bool,
  #[builder(default)]
  pub constraints: Constraints,
}

impl PropertyDecl {
  #[must_use]
  pub fn is_nullable(&self) -> bool {
    self.ty.nullable
  }
}

/// Dictionary member collecting JSON properties the schema does not declare.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionData {
  pub name: String,
  pub value: CsType,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordDecl {
  pub name: String,
  pub base: Option<String>,
  pub docs: Documentation,
  pub deprecated: bool,
  pub properties: Vec<PropertyDecl>,
  /// Present when the schema allows additional properties.
  pub extension_data: Option<ExtensionData>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnumValue {
  String(String),
  Integer(i64),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumMember {
  pub name: String,
  pub value: EnumValue,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnumDecl {
  pub name: String,
  pub docs: Documentation,
  pub deprecated: bool,
  pub members: Vec<EnumMember>,
}

impl EnumDecl {
  #[must_use]
  pub fn is_string_enum(&self) -> bool {
    self.members.iter().any(|m| matches!(m.value, EnumValue::String(_)))
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDecl {
  Record(RecordDecl),
  Enum(EnumDecl),
}

impl TypeDecl {
  #[must_use]
  pub fn name(&self) -> &str {
    match self {
      Self::Record(record) => &record.name,
      Self::Enum(decl) => &decl.name,
    }
  }
}
