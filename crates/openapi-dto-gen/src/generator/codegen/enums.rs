use super::{
  attributes::{OBSOLETE, enum_attributes, enum_member_attribute},
  writer::CodeWriter,
};
use crate::generator::{
  ast::{EnumDecl, EnumValue},
  settings::GeneratorSettings,
};

/// String enums number their members by position and carry the wire value in
/// an `EnumMember` attribute; integer enums use the value itself.
pub(crate) fn write_enum(writer: &mut CodeWriter, decl: &EnumDecl, settings: &GeneratorSettings) {
  writer.docs(&decl.docs);
  if decl.deprecated {
    writer.line(OBSOLETE);
  }
  for attribute in enum_attributes(decl, settings) {
    writer.line(attribute);
  }
  writer.line(format!("public enum {}", decl.name));

  writer.open_block();
  for (index, member) in decl.members.iter().enumerate() {
    match &member.value {
      EnumValue::String(value) => {
        if index > 0 {
          writer.blank();
        }
        writer.line(enum_member_attribute(value));
        writer.line(format!("{} = {index},", member.name));
      }
      EnumValue::Integer(value) => writer.line(format!("{} = {value},", member.name)),
    }
  }
  writer.close_block();
}
