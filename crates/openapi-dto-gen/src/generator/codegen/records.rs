use super::{
  attributes::{OBSOLETE, extension_data_attribute, property_attributes},
  writer::CodeWriter,
};
use crate::generator::{
  ast::{ExtensionData, PropertyDecl, RecordDecl},
  settings::{ClassStyle, GeneratorSettings},
};

pub(crate) fn write_record(writer: &mut CodeWriter, record: &RecordDecl, settings: &GeneratorSettings) {
  writer.docs(&record.docs);
  if record.deprecated {
    writer.line(OBSOLETE);
  }

  let keyword = match settings.class_style {
    ClassStyle::Record => "record",
    ClassStyle::Poco => "class",
  };
  match &record.base {
    Some(base) => writer.line(format!("public partial {keyword} {} : {base}", record.name)),
    None => writer.line(format!("public partial {keyword} {}", record.name)),
  }

  writer.open_block();
  for (index, property) in record.properties.iter().enumerate() {
    if index > 0 {
      writer.blank();
    }
    write_property(writer, property, settings);
  }

  if let Some(extension) = &record.extension_data {
    if !record.properties.is_empty() {
      writer.blank();
    }
    write_extension_data(writer, extension, settings);
  }
  writer.close_block();
}

fn write_property(writer: &mut CodeWriter, property: &PropertyDecl, settings: &GeneratorSettings) {
  writer.docs(&property.docs);
  if property.deprecated {
    writer.line(OBSOLETE);
  }
  for attribute in property_attributes(property, settings) {
    writer.line(attribute);
  }

  let nrt = settings.nullable_reference_types;
  let initializer = if nrt && !property.ty.value_type && !property.is_nullable() {
    " = default!;"
  } else {
    ""
  };
  writer.line(format!(
    "public {} {} {}{initializer}",
    property.ty.render(nrt),
    property.name,
    accessors(settings.class_style)
  ));
}

fn write_extension_data(writer: &mut CodeWriter, extension: &ExtensionData, settings: &GeneratorSettings) {
  let value = extension.value.render(settings.nullable_reference_types);
  writer.line(extension_data_attribute(settings));
  writer.line(format!(
    "public System.Collections.Generic.IDictionary<string, {value}> {} {} = new System.Collections.Generic.Dictionary<string, {value}>();",
    extension.name,
    accessors(settings.class_style)
  ));
}

const fn accessors(style: ClassStyle) -> &'static str {
  match style {
    ClassStyle::Record => "{ get; init; }",
    ClassStyle::Poco => "{ get; set; }",
  }
}
