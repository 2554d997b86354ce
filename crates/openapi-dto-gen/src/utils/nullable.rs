//! OpenAPI 3.0 `nullable` keyword support. `oas3` drops the keyword while
//! parsing, so it is read from the untyped document and applied afterwards.

use oas3::{
  Spec,
  spec::{ObjectOrReference, ObjectSchema, Schema, SchemaType, SchemaTypeSet},
};
use serde_json::Value;

/// Applies `nullable: true` from the raw document to the parsed component schemas.
///
/// # Rules:
/// 1. A typed schema gains `null` in its type set.
/// 2. A `$ref`, or an untyped schema wrapping a single `allOf` member, becomes
///    a `oneOf` of the wrapped schema and `null`.
/// 3. Schemas that already allow `null` are left alone.
///
/// Returns the number of schemas rewritten.
pub(crate) fn apply_nullable_keyword(raw: &Value, spec: &mut Spec) -> usize {
  let Some(components) = spec.components.as_mut() else {
    return 0;
  };
  let Some(raw_schemas) = raw.pointer("/components/schemas").and_then(Value::as_object) else {
    return 0;
  };

  let mut marked = 0;
  for (key, schema) in &mut components.schemas {
    if let Some(raw_schema) = raw_schemas.get(key) {
      marked += visit(raw_schema, schema);
    }
  }
  marked
}

fn visit(raw: &Value, schema: &mut ObjectOrReference<ObjectSchema>) -> usize {
  let mut marked = 0;
  if let ObjectOrReference::Object(object) = schema {
    marked += visit_children(raw, object);
  }
  if raw.get("nullable").and_then(Value::as_bool) == Some(true) && mark_nullable(schema) {
    marked += 1;
  }
  marked
}

fn visit_children(raw: &Value, schema: &mut ObjectSchema) -> usize {
  let mut marked = 0;

  if let Some(raw_properties) = raw.get("properties").and_then(Value::as_object) {
    for (name, property) in &mut schema.properties {
      if let Some(raw_property) = raw_properties.get(name) {
        marked += visit(raw_property, property);
      }
    }
  }

  let compositions = [
    ("allOf", &mut schema.all_of),
    ("oneOf", &mut schema.one_of),
    ("anyOf", &mut schema.any_of),
  ];
  for (keyword, members) in compositions {
    if let Some(raw_members) = raw.get(keyword).and_then(Value::as_array) {
      for (raw_member, member) in raw_members.iter().zip(members.iter_mut()) {
        marked += visit(raw_member, member);
      }
    }
  }

  let nested = [
    ("items", schema.items.as_deref_mut()),
    ("additionalProperties", schema.additional_properties.as_mut()),
  ];
  for (keyword, nested) in nested {
    if let (Some(raw_nested), Some(Schema::Object(nested))) = (raw.get(keyword), nested) {
      marked += visit(raw_nested, nested);
    }
  }

  marked
}

fn mark_nullable(schema: &mut ObjectOrReference<ObjectSchema>) -> bool {
  if matches!(schema, ObjectOrReference::Ref { .. }) {
    let target = std::mem::replace(schema, ObjectOrReference::Object(ObjectSchema::default()));
    *schema = nullable_union(target);
    return true;
  }

  let ObjectOrReference::Object(object) = schema else {
    return false;
  };

  match object.schema_type {
    Some(SchemaTypeSet::Single(SchemaType::Null)) => false,
    Some(SchemaTypeSet::Single(single)) => {
      object.schema_type = Some(SchemaTypeSet::Multiple(vec![single, SchemaType::Null]));
      true
    }
    Some(SchemaTypeSet::Multiple(ref mut types)) => {
      if types.contains(&SchemaType::Null) {
        return false;
      }
      types.push(SchemaType::Null);
      true
    }
    None
      if object.all_of.len() == 1
        && object.properties.is_empty()
        && object.one_of.is_empty()
        && object.any_of.is_empty() =>
    {
      let wrapped = object.all_of.remove(0);
      object.one_of = vec![wrapped, null_schema()];
      true
    }
    None => false,
  }
}

fn nullable_union(target: ObjectOrReference<ObjectSchema>) -> ObjectOrReference<ObjectSchema> {
  ObjectOrReference::Object(ObjectSchema {
    one_of: vec![target, null_schema()],
    ..ObjectSchema::default()
  })
}

fn null_schema() -> ObjectOrReference<ObjectSchema> {
  ObjectOrReference::Object(ObjectSchema {
    schema_type: Some(SchemaTypeSet::Single(SchemaType::Null)),
    ..ObjectSchema::default()
  })
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  fn document(schemas: Value) -> Value {
    json!({
      "openapi": "3.0.3",
      "info": { "title": "Nullable", "version": "1.0.0" },
      "paths": {},
      "components": { "schemas": schemas }
    })
  }

  fn object(schema: &ObjectOrReference<ObjectSchema>) -> &ObjectSchema {
    match schema {
      ObjectOrReference::Object(object) => object,
      ObjectOrReference::Ref { ref_path, .. } => panic!("unexpected reference {ref_path}"),
    }
  }

  #[test]
  fn test_nullable_properties_gain_null_type() {
    let raw = document(json!({
      "User": {
        "type": "object",
        "required": ["nick", "age"],
        "properties": {
          "nick": { "type": "string", "nullable": true },
          "age": { "type": "integer", "nullable": true },
          "name": { "type": "string" },
          "tags": { "type": "array", "items": { "type": "string", "nullable": true } }
        }
      }
    }));
    let mut spec: Spec = serde_json::from_value(raw.clone()).unwrap();

    assert_eq!(apply_nullable_keyword(&raw, &mut spec), 3);

    let user = object(&spec.components.as_ref().unwrap().schemas["User"]);
    let nullable = |name: &str| object(&user.properties[name]).is_nullable();
    assert_eq!(nullable("nick"), Some(true));
    assert_eq!(nullable("age"), Some(true));
    assert_eq!(nullable("name"), Some(false));

    let Some(Schema::Object(item)) = object(&user.properties["tags"]).items.as_deref() else {
      panic!("tags items missing");
    };
    assert_eq!(object(item).is_nullable(), Some(true));
  }

  #[test]
  fn test_nullable_wrappers_become_unions() {
    let raw = document(json!({
      "Owner": { "type": "object", "properties": { "id": { "type": "string" } } },
      "Pet": {
        "type": "object",
        "properties": {
          "owner": { "allOf": [{ "$ref": "#/components/schemas/Owner" }], "nullable": true },
          "previous": { "$ref": "#/components/schemas/Owner", "nullable": true }
        }
      }
    }));
    let mut spec: Spec = serde_json::from_value(raw.clone()).unwrap();

    assert_eq!(apply_nullable_keyword(&raw, &mut spec), 2);

    let pet = object(&spec.components.as_ref().unwrap().schemas["Pet"]);
    for name in ["owner", "previous"] {
      let union = object(&pet.properties[name]);
      assert!(union.all_of.is_empty(), "{name} still wraps allOf");
      assert_eq!(union.one_of.len(), 2, "{name} is not a union");
      assert!(matches!(&union.one_of[0], ObjectOrReference::Ref { ref_path, .. } if ref_path.ends_with("/Owner")));
      assert_eq!(object(&union.one_of[1]).is_nullable(), Some(true));
    }
  }

  #[test]
  fn test_documents_without_the_keyword_are_untouched() {
    let raw = document(json!({
      "Tag": { "type": ["string", "null"], "nullable": true },
      "Name": { "type": "string", "nullable": false }
    }));
    let mut spec: Spec = serde_json::from_value(raw.clone()).unwrap();
    let before = spec.clone();

    assert_eq!(apply_nullable_keyword(&raw, &mut spec), 0);
    assert_eq!(spec, before);
  }
}
