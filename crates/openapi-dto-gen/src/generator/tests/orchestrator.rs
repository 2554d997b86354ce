use crate::generator::{orchestrator::Orchestrator, settings::GeneratorSettings};

fn petstore() -> oas3::Spec {
  oas3::from_json(include_str!("../../../fixtures/petstore.json")).unwrap()
}

#[test]
fn test_metadata() {
  let settings = GeneratorSettings::dto_defaults();
  let metadata = Orchestrator::new(petstore(), &settings).metadata();
  assert_eq!(metadata.title, "Swagger Petstore");
  assert_eq!(metadata.version, "1.0.0");
}

#[test]
fn test_generate_petstore() {
  let settings = GeneratorSettings::dto_defaults();
  let output = Orchestrator::new(petstore(), &settings)
    .generate("Petstore.Contracts")
    .unwrap();

  assert_eq!(output.stats.types_generated, 7);
  assert_eq!(output.stats.records_generated, 5);
  assert_eq!(output.stats.enums_generated, 2);
  assert_eq!(output.stats.properties_generated, 19);
  assert!(output.stats.warnings.is_empty());

  let code = output.code;
  let expected = [
    "//     Source: Swagger Petstore 1.0.0",
    "#nullable enable",
    "namespace Petstore.Contracts",
    "    using System = global::System;",
    "    /// A pet for sale in the pet store.",
    "    public partial record Dog : Pet",
    "        public int PackSize { get; init; }",
    "        public bool? Bark { get; init; }",
    "        public string Name { get; init; } = default!;",
    "        public System.Collections.Generic.ICollection<string> PhotoUrls { get; init; } = default!;",
    "        public System.Collections.Generic.ICollection<Tag>? Tags { get; init; }",
    "        public PetStatus? Status { get; init; }",
    "        public System.DateTimeOffset? BirthDate { get; init; }",
    "        public Category? Category { get; init; }",
    "    public enum PetStatus",
    "        [System.Runtime.Serialization.EnumMember(Value = @\"pending\")]",
    "        public long UserId { get; init; }",
    "        public string? FirstName { get; init; }",
    "        public System.Collections.Generic.IDictionary<string, string>? Preferences { get; init; }",
    "        [System.Obsolete]\n        [System.Text.Json.Serialization.JsonPropertyName(\"user_status\")]",
  ];
  for snippet in expected {
    assert!(code.contains(snippet), "missing {snippet:?} in:\n{code}");
  }
  assert!(!code.contains("User_id"));
}

#[test]
fn test_declaration_order() {
  let settings = GeneratorSettings::dto_defaults();
  let code = Orchestrator::new(petstore(), &settings).generate("Api").unwrap().code;

  let positions: Vec<usize> = [
    "record Category",
    "record Dog",
    "enum OrderStatus",
    "record Pet\n",
    "enum PetStatus",
    "record Tag",
    "record User",
  ]
  .iter()
  .map(|decl| code.find(decl).unwrap_or_else(|| panic!("{decl} not emitted")))
  .collect();
  assert!(positions.is_sorted(), "unexpected order: {positions:?}");
}

#[test]
fn test_generation_is_deterministic() {
  let settings = GeneratorSettings::dto_defaults();
  let first = Orchestrator::new(petstore(), &settings).generate("Api").unwrap();
  let second = Orchestrator::new(petstore(), &settings).generate("Api").unwrap();
  assert_eq!(first.code, second.code);
  assert_eq!(first.stats, second.stats);
}

#[test]
fn test_client_generation_is_rejected() {
  let settings = GeneratorSettings::builder().dto_only(false).build();
  let err = Orchestrator::new(petstore(), &settings).generate("Api").unwrap_err();
  assert!(err.to_string().contains("only DTO generation is supported"));
}
