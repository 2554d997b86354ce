//! C# emission for the declaration model.
//!
//! [`render_file`] produces a complete compilation unit: the auto-generated
//! header, the `#nullable` directive, and every declaration inside a single
//! namespace block, separated by blank lines.

mod attributes;
mod enums;
mod records;
mod writer;


use itertools::Itertools;
use writer::CodeWriter;

use super::{ast::TypeDecl, orchestrator::CodeMetadata, settings::GeneratorSettings};

const GENERATOR_NAME: &str = env!("CARGO_PKG_NAME");
const GENERATOR_VERSION: &str = env!("CARGO_PKG_VERSION");

pub(crate) fn render_file(
  metadata: &CodeMetadata,
  namespace: &str,
  types: &[TypeDecl],
  settings: &GeneratorSettings,
) -> String {
  let mut writer = CodeWriter::default();
  write_header(&mut writer, metadata, settings);

  if settings.nullable_reference_types {
    writer.line("#nullable enable");
    writer.blank();
  }

  let namespace = namespace.trim();
  if namespace.is_empty() {
    write_types(&mut writer, types, settings);
  } else {
    writer.line(format!("namespace {namespace}"));
    writer.open_block();
    writer.line("using System = global::System;");
    if !types.is_empty() {
      writer.blank();
    }
    write_types(&mut writer, types, settings);
    writer.close_block();
  }

  writer.finish()
}

fn write_header(writer: &mut CodeWriter, metadata: &CodeMetadata, settings: &GeneratorSettings) {
  writer.line("//----------------------");
  writer.line("// <auto-generated>");
  writer.line(format!(
    "//     Generated by {GENERATOR_NAME} v{GENERATOR_VERSION} ({})",
    settings.json_library
  ));
  writer.line(format!(
    "//     Source: {} {}",
    single_line(&metadata.title),
    single_line(&metadata.version)
  ));
  writer.line("// </auto-generated>");
  writer.line("//----------------------");
  writer.blank();
}

fn write_types(writer: &mut CodeWriter, types: &[TypeDecl], settings: &GeneratorSettings) {
  for (index, decl) in types.iter().enumerate() {
    if index > 0 {
      writer.blank();
    }
    match decl {
      TypeDecl::Record(record) => records::write_record(writer, record, settings),
      TypeDecl::Enum(decl) => enums::write_enum(writer, decl, settings),
    }
  }
}

fn single_line(text: &str) -> String {
  text.split_whitespace().join(" ")
}
