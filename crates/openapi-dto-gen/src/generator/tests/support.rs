use oas3::Spec;
use serde_json::json;

use crate::generator::ast::{EnumDecl, PropertyDecl, RecordDecl, TypeDecl};

pub(super) fn spec_with_schemas(schemas: serde_json::Value) -> Spec {
  serde_json::from_value(json!({
    "openapi": "3.1.0",
    "info": { "title": "Test API", "version": "1.0.0" },
    "paths": {},
    "components": { "schemas": schemas }
  }))
  .expect("valid test document")
}

pub(super) fn type_names(types: &[TypeDecl]) -> Vec<&str> {
  types.iter().map(TypeDecl::name).collect()
}

pub(super) fn record<'a>(types: &'a [TypeDecl], name: &str) -> &'a RecordDecl {
  types
    .iter()
    .find_map(|decl| match decl {
      TypeDecl::Record(record) if record.name == name => Some(record),
      _ => None,
    })
    .unwrap_or_else(|| panic!("record {name} not declared"))
}

pub(super) fn enum_decl<'a>(types: &'a [TypeDecl], name: &str) -> &'a EnumDecl {
  types
    .iter()
    .find_map(|decl| match decl {
      TypeDecl::Enum(decl) if decl.name == name => Some(decl),
      _ => None,
    })
    .unwrap_or_else(|| panic!("enum {name} not declared"))
}

pub(super) fn property<'a>(record: &'a RecordDecl, json_name: &str) -> &'a PropertyDecl {
  record
    .properties
    .iter()
    .find(|p| p.json_name == json_name)
    .unwrap_or_else(|| panic!("property {json_name} missing from {}", record.name))
}
