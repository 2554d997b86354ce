use std::collections::{BTreeMap, BTreeSet};

use anyhow::Context;
use indexmap::IndexMap;
use oas3::{
  Spec,
  spec::{ObjectOrReference, ObjectSchema, Schema, SchemaType, SchemaTypeSet},
};
use tracing::{debug, warn};

use super::{
  ast::{
    Constraints, CsType, Documentation, EnumDecl, EnumMember, EnumValue, ExtensionData, PropertyDecl, RecordDecl,
    TypeDecl,
  },
  naming::identifiers::{ensure_unique, to_enum_member_name, to_type_name, to_valid_member_name},
  settings::GeneratorSettings,
};

const SCHEMA_REF_PREFIX: &str = "#/components/schemas/";
const MAX_ALIAS_DEPTH: usize = 32;
const EXTENSION_DATA_MEMBER: &str = "AdditionalProperties";

#[derive(Debug, Clone)]
struct DeclaredType {
  name: String,
  is_enum: bool,
}

#[derive(Debug, Default)]
pub(crate) struct SchemaConversion {
  pub types: Vec<TypeDecl>,
  pub warnings: Vec<String>,
}

#[derive(Default)]
struct MergeAccumulator {
  properties: IndexMap<String, ObjectOrReference<ObjectSchema>>,
  required: BTreeSet<String>,
}

impl MergeAccumulator {
  fn merge_from(&mut self, source: &ObjectSchema) {
    for (name, prop) in &source.properties {
      self.properties.entry(name.clone()).or_insert_with(|| prop.clone());
    }
    self.required.extend(source.required.iter().cloned());
  }
}

/// Converts `components.schemas` into C# declarations.
///
/// Names for every declared component are reserved up front so forward
/// references resolve regardless of key order. Inline object and enum
/// property schemas become extra declarations named after their parent.
pub(crate) struct SchemaConverter<'a> {
  spec: &'a Spec,
  settings: &'a GeneratorSettings,
  declared: BTreeMap<String, DeclaredType>,
  used_type_names: BTreeSet<String>,
  resolving: BTreeSet<String>,
  /// Resolved types of referenced schemas that are not declared themselves.
  alias_types: BTreeMap<String, CsType>,
  inline_types: Vec<TypeDecl>,
  warnings: Vec<String>,
}

impl<'a> SchemaConverter<'a> {
  pub(crate) fn new(spec: &'a Spec, settings: &'a GeneratorSettings) -> Self {
    let mut declared = BTreeMap::new();
    let mut used_type_names = BTreeSet::new();

    for (key, schema_ref) in component_schemas(spec) {
      let ObjectOrReference::Object(schema) = schema_ref else {
        continue;
      };

      let is_enum = enum_values(schema).is_some();
      if !is_enum && !is_record_schema(schema, true) {
        continue;
      }

      let name = ensure_unique(&to_type_name(key), &used_type_names);
      used_type_names.insert(name.clone());
      declared.insert(key.clone(), DeclaredType { name, is_enum });
    }

    Self {
      spec,
      settings,
      declared,
      used_type_names,
      resolving: BTreeSet::new(),
      alias_types: BTreeMap::new(),
      inline_types: vec![],
      warnings: vec![],
    }
  }

  pub(crate) fn convert_all(mut self) -> anyhow::Result<SchemaConversion> {
    let mut types = vec![];

    for (key, schema_ref) in component_schemas(self.spec) {
      let Some(declared) = self.declared.get(key).cloned() else {
        debug!(schema = %key, "schema is not declared as a type");
        continue;
      };
      let ObjectOrReference::Object(schema) = schema_ref else {
        continue;
      };

      let decl = if declared.is_enum {
        TypeDecl::Enum(self.convert_enum(&declared.name, schema)?)
      } else {
        TypeDecl::Record(
          self
            .convert_record(&declared.name, schema)
            .with_context(|| format!("failed to convert schema '{key}'"))?,
        )
      };

      debug!(schema = %key, name = decl.name(), inline = self.inline_types.len(), "declared type");
      types.push(decl);
      types.append(&mut self.inline_types);
    }

    Ok(SchemaConversion {
      types,
      warnings: self.warnings,
    })
  }

  fn convert_record(&mut self, type_name: &str, schema: &ObjectSchema) -> anyhow::Result<RecordDecl> {
    let mut base = None;
    let mut merged = MergeAccumulator::default();

    for member in &schema.all_of {
      if base.is_none()
        && let ObjectOrReference::Ref { ref_path, .. } = member
        && let Some(declared) = self.declared_for_ref(ref_path)
        && !declared.is_enum
      {
        base = Some(declared.name.clone());
        continue;
      }
      self.merge_member(member, &mut merged, 0)?;
    }
    merged.merge_from(schema);

    let mut used_members = BTreeSet::new();
    let extension_name = allows_additional_properties(schema).then(|| {
      let name = to_valid_member_name(EXTENSION_DATA_MEMBER.to_string(), type_name);
      used_members.insert(name.clone());
      name
    });

    let mut properties = Vec::with_capacity(merged.properties.len());
    for (json_name, prop_schema) in &merged.properties {
      let required = merged.required.contains(json_name);
      let property = self.convert_property(type_name, json_name, prop_schema, required, &used_members)?;
      used_members.insert(property.name.clone());
      properties.push(property);
    }

    let extension_data = match extension_name {
      Some(name) => {
        let value = match &schema.additional_properties {
          Some(Schema::Object(value_schema)) => {
            self.schema_type(value_schema, &format!("{type_name}AdditionalProperty"))?
          }
          _ => CsType::object(),
        };
        Some(ExtensionData { name, value })
      }
      None => None,
    };

    Ok(RecordDecl {
      name: type_name.to_string(),
      base,
      docs: Documentation::from_optional(schema.description.as_ref()),
      deprecated: schema.deprecated.unwrap_or(false),
      properties,
      extension_data,
    })
  }

  /// Flattens an `allOf` member that is not used as the base type.
  fn merge_member(
    &self,
    member: &ObjectOrReference<ObjectSchema>,
    merged: &mut MergeAccumulator,
    depth: usize,
  ) -> anyhow::Result<()> {
    if depth > MAX_ALIAS_DEPTH {
      anyhow::bail!("allOf nesting exceeds {MAX_ALIAS_DEPTH} levels");
    }

    let resolved = match member {
      ObjectOrReference::Ref { ref_path, .. } => member
        .resolve(self.spec)
        .with_context(|| format!("unresolvable reference '{ref_path}'"))?,
      ObjectOrReference::Object(schema) => schema.clone(),
    };

    for nested in &resolved.all_of {
      self.merge_member(nested, merged, depth + 1)?;
    }
    merged.merge_from(&resolved);
    Ok(())
  }

  fn convert_property(
    &mut self,
    type_name: &str,
    json_name: &str,
    prop_schema: &ObjectOrReference<ObjectSchema>,
    required: bool,
    used_members: &BTreeSet<String>,
  ) -> anyhow::Result<PropertyDecl> {
    let generated = self.settings.naming_strategy.generator().generate(json_name);
    let name = ensure_unique(&to_valid_member_name(generated, type_name), used_members);

    let hint = format!("{type_name}{}", to_type_name(json_name));
    let optional_nullable = !required && self.settings.optional_properties_as_nullable;
    let ty = self.schema_type(prop_schema, &hint)?.with_nullable(optional_nullable);

    let builder = PropertyDecl::builder()
      .json_name(json_name)
      .name(name)
      .ty(ty)
      .required(required);

    let property = match prop_schema {
      ObjectOrReference::Object(schema) => builder
        .docs(Documentation::from_optional(schema.description.as_ref()))
        .deprecated(schema.deprecated.unwrap_or(false))
        .constraints(Constraints {
          min_length: schema.min_length,
          max_length: schema.max_length,
          pattern: schema.pattern.clone(),
        })
        .build(),
      ObjectOrReference::Ref { .. } => builder.build(),
    };

    Ok(property)
  }

  /// Resolves the C# type of a schema at a use site, declaring inline types as needed.
  pub(crate) fn schema_type(
    &mut self,
    schema_ref: &ObjectOrReference<ObjectSchema>,
    hint: &str,
  ) -> anyhow::Result<CsType> {
    match schema_ref {
      ObjectOrReference::Ref { ref_path, .. } => self.ref_type(ref_path),
      ObjectOrReference::Object(schema) => self.inline_type(schema, hint),
    }
  }

  fn ref_type(&mut self, ref_path: &str) -> anyhow::Result<CsType> {
    let Some(key) = ref_path.strip_prefix(SCHEMA_REF_PREFIX) else {
      self.warn(format!("unsupported reference '{ref_path}' mapped to object"));
      return Ok(CsType::object());
    };

    if let Some(declared) = self.declared.get(key) {
      return Ok(if declared.is_enum {
        CsType::value(&declared.name)
      } else {
        CsType::reference(&declared.name)
      });
    }

    let Some(target) = component_schemas(self.spec).get(key) else {
      anyhow::bail!("reference '{ref_path}' points to a missing schema");
    };

    if let Some(resolved) = self.alias_types.get(key) {
      return Ok(resolved.clone());
    }

    if self.resolving.len() > MAX_ALIAS_DEPTH || !self.resolving.insert(key.to_string()) {
      self.warn(format!("circular schema alias '{key}' mapped to object"));
      return Ok(CsType::object());
    }
    let resolved = self.schema_type(target, &to_type_name(key));
    self.resolving.remove(key);

    let resolved = resolved?;
    self.alias_types.insert(key.to_string(), resolved.clone());
    Ok(resolved)
  }

  fn inline_type(&mut self, schema: &ObjectSchema, hint: &str) -> anyhow::Result<CsType> {
    if let Some(variant) = nullable_union_variant(schema) {
      return Ok(self.schema_type(variant, hint)?.with_nullable(true));
    }

    if !schema.one_of.is_empty() || !schema.any_of.is_empty() {
      return Ok(CsType::object());
    }

    if schema.properties.is_empty()
      && let [single] = schema.all_of.as_slice()
    {
      return self.schema_type(single, hint);
    }

    let (_, nullable) = effective_type(schema);

    if enum_values(schema).is_some() {
      let name = self.reserve_type_name(hint);
      let decl = self.convert_enum(&name, schema)?;
      self.inline_types.push(TypeDecl::Enum(decl));
      return Ok(CsType::value(name).with_nullable(nullable));
    }

    if is_record_schema(schema, false) {
      let name = self.reserve_type_name(hint);
      let decl = self.convert_record(&name, schema)?;
      self.inline_types.push(TypeDecl::Record(decl));
      return Ok(CsType::reference(name).with_nullable(nullable));
    }

    self.primitive_type(schema, hint)
  }

  fn primitive_type(&mut self, schema: &ObjectSchema, hint: &str) -> anyhow::Result<CsType> {
    let (schema_type, nullable) = effective_type(schema);
    let format = schema.format.as_deref();

    let ty = match schema_type {
      Some(SchemaType::String) => string_type(format),
      Some(SchemaType::Integer) => match format {
        Some("int64") => CsType::value("long"),
        _ => CsType::value("int"),
      },
      Some(SchemaType::Number) => match format {
        Some("float") => CsType::value("float"),
        Some("decimal") => CsType::value("decimal"),
        _ => CsType::value("double"),
      },
      Some(SchemaType::Boolean) => CsType::value("bool"),
      Some(SchemaType::Array) => {
        let item = match schema.items.as_deref() {
          Some(Schema::Object(item_ref)) => self.schema_type(item_ref, &format!("{hint}Item"))?,
          Some(Schema::Boolean(_)) | None => CsType::object(),
        };
        CsType::collection(&item, self.settings.nullable_reference_types)
      }
      Some(SchemaType::Object | SchemaType::Null) | None => match &schema.additional_properties {
        Some(Schema::Object(value_ref)) => {
          let value = self.schema_type(value_ref, &format!("{hint}Value"))?;
          CsType::dictionary(&value, self.settings.nullable_reference_types)
        }
        _ => CsType::object(),
      },
    };

    Ok(ty.with_nullable(nullable))
  }

  fn convert_enum(&mut self, type_name: &str, schema: &ObjectSchema) -> anyhow::Result<EnumDecl> {
    let Some(values) = enum_values(schema) else {
      anyhow::bail!("schema '{type_name}' has no string or integer enum values");
    };

    let mut used_members = BTreeSet::new();
    let mut members = Vec::with_capacity(values.len());
    for value in values {
      let raw = match &value {
        EnumValue::String(s) => s.clone(),
        EnumValue::Integer(i) => i.to_string(),
      };
      let name = ensure_unique(&to_enum_member_name(&raw), &used_members);
      used_members.insert(name.clone());
      members.push(EnumMember { name, value });
    }

    Ok(EnumDecl {
      name: type_name.to_string(),
      docs: Documentation::from_optional(schema.description.as_ref()),
      deprecated: schema.deprecated.unwrap_or(false),
      members,
    })
  }

  fn reserve_type_name(&mut self, hint: &str) -> String {
    let name = ensure_unique(&to_type_name(hint), &self.used_type_names);
    self.used_type_names.insert(name.clone());
    name
  }

  fn declared_for_ref(&self, ref_path: &str) -> Option<&DeclaredType> {
    ref_path
      .strip_prefix(SCHEMA_REF_PREFIX)
      .and_then(|key| self.declared.get(key))
  }

  fn warn(&mut self, message: String) {
    warn!("{message}");
    self.warnings.push(message);
  }
}

fn component_schemas(spec: &Spec) -> &BTreeMap<String, ObjectOrReference<ObjectSchema>> {
  static EMPTY: BTreeMap<String, ObjectOrReference<ObjectSchema>> = BTreeMap::new();
  spec.components.as_ref().map_or(&EMPTY, |components| &components.schemas)
}

fn string_type(format: Option<&str>) -> CsType {
  match format {
    Some("date-time" | "date") => CsType::value("System.DateTimeOffset"),
    Some("time" | "duration") => CsType::value("System.TimeSpan"),
    Some("uuid" | "guid") => CsType::value("System.Guid"),
    Some("uri") => CsType::reference("System.Uri"),
    Some("byte" | "binary") => CsType::reference("byte[]"),
    _ => CsType::string(),
  }
}

/// Returns the single non-null type of a schema and whether `null` is allowed.
fn effective_type(schema: &ObjectSchema) -> (Option<SchemaType>, bool) {
  match &schema.schema_type {
    Some(SchemaTypeSet::Single(SchemaType::Null)) => (None, true),
    Some(SchemaTypeSet::Single(schema_type)) => (Some(*schema_type), false),
    Some(SchemaTypeSet::Multiple(types)) => {
      let nullable = types.contains(&SchemaType::Null);
      let mut non_null = types.iter().filter(|t| **t != SchemaType::Null);
      match (non_null.next(), non_null.next()) {
        (Some(single), None) => (Some(*single), nullable),
        _ => (None, nullable),
      }
    }
    None => (None, false),
  }
}

/// Returns the non-null variant of a `oneOf`/`anyOf` made of one schema and `null`.
fn nullable_union_variant(schema: &ObjectSchema) -> Option<&ObjectOrReference<ObjectSchema>> {
  let variants = if schema.one_of.is_empty() {
    &schema.any_of
  } else {
    &schema.one_of
  };
  let [first, second] = variants.as_slice() else {
    return None;
  };

  let is_null = |variant: &ObjectOrReference<ObjectSchema>| {
    matches!(
      variant,
      ObjectOrReference::Object(s) if s.schema_type == Some(SchemaTypeSet::Single(SchemaType::Null))
    )
  };

  match (is_null(first), is_null(second)) {
    (true, false) => Some(second),
    (false, true) => Some(first),
    _ => None,
  }
}

/// Extracts enum values when they are all strings or all integers (nulls ignored).
fn enum_values(schema: &ObjectSchema) -> Option<Vec<EnumValue>> {
  let values: Vec<&serde_json::Value> = schema.enum_values.iter().filter(|v| !v.is_null()).collect();
  if values.is_empty() {
    return None;
  }

  if let Some(strings) = values
    .iter()
    .map(|v| v.as_str().map(|s| EnumValue::String(s.to_string())))
    .collect::<Option<Vec<_>>>()
  {
    return Some(strings);
  }

  values
    .iter()
    .map(|v| v.as_i64().map(EnumValue::Integer))
    .collect::<Option<Vec<_>>>()
}

fn allows_additional_properties(schema: &ObjectSchema) -> bool {
  match &schema.additional_properties {
    Some(Schema::Boolean(allowed)) => allowed.0,
    Some(Schema::Object(_)) => true,
    None => false,
  }
}

/// Returns true when the schema becomes a record declaration.
///
/// Top-level `{ "type": "object" }` schemas without properties still get an
/// (empty) record; inline ones map to `object`. Dictionaries and unions are
/// never records.
fn is_record_schema(schema: &ObjectSchema, top_level: bool) -> bool {
  if !schema.properties.is_empty() {
    return true;
  }

  if !schema.one_of.is_empty() || !schema.any_of.is_empty() {
    return false;
  }

  if !schema.all_of.is_empty() {
    return top_level || schema.all_of.len() > 1;
  }

  top_level
    && effective_type(schema).0 == Some(SchemaType::Object)
    && !matches!(schema.additional_properties, Some(Schema::Object(_)))
}

#[cfg(test)]
pub(crate) fn convert_spec(spec: &Spec, settings: &GeneratorSettings) -> anyhow::Result<SchemaConversion> {
  SchemaConverter::new(spec, settings).convert_all()
}
