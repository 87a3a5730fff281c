use assert_fs::prelude::*;
use predicates::prelude::*;
use rollout_schema::{
    Config, FileSource, GroupVersionKind, RolloutSchema, RolloutSchemaError, SchemaDocument,
};
use rstest::rstest;
use serde_json::json;
use std::path::Path;

const MINIMAL_CRD: &str =
    "spec: {validation: {openAPIV3Schema: {type: object, required: [foo], properties: {foo: {type: string}}}}}";

const ROLLOUT_CRD: &str = r#"
apiVersion: apiextensions.k8s.io/v1beta1
kind: CustomResourceDefinition
metadata:
  name: rollouts.argoproj.io
spec:
  group: argoproj.io
  names:
    kind: Rollout
    listKind: RolloutList
    plural: rollouts
    shortNames:
      - ro
  scope: Namespaced
  subresources:
    status: {}
  validation:
    openAPIV3Schema:
      properties:
        apiVersion:
          type: string
        kind:
          type: string
        spec:
          properties:
            replicas:
              format: int32
              type: integer
            strategy:
              properties:
                canary:
                  properties:
                    maxSurge:
                      anyOf:
                        - type: integer
                        - type: string
                      x-kubernetes-int-or-string: true
                  type: object
              type: object
          required:
            - selector
            - template
          type: object
      required:
        - spec
      type: object
  version: v1alpha1
  versions:
    - name: v1alpha1
      served: true
      storage: true
"#;

fn app_writing_to(path: &Path) -> RolloutSchema {
    let mut config = Config::default();
    config.output.path = path.to_path_buf();
    RolloutSchema::new(config).unwrap()
}

#[tokio::test]
async fn test_minimal_document_produces_expected_envelope() {
    let temp = assert_fs::TempDir::new().unwrap();
    let input = temp.child("crd.yaml");
    input.write_str(MINIMAL_CRD).unwrap();
    let output = temp.child("schema.json");

    let app = app_writing_to(output.path());
    let result = app.generate(&FileSource::new(input.path())).await.unwrap();

    let written: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(output.path()).unwrap()).unwrap();
    let expected: serde_json::Value = serde_json::from_str(
        r#"{"definitions":{"v1alpha1.Rollout":{"properties":{"foo":{"type":"string"}},"required":["foo"],"type":"object","x-kubernetes-group-version-kind":[{"group":"argoproj.io","kind":"Rollout","version":"v1alpha1"}]}}}"#,
    )
    .unwrap();

    assert_eq!(written, expected);
    assert_eq!(result.definition_key, "v1alpha1.Rollout");
    assert_eq!(result.output_path.as_deref(), Some(output.path()));
}

#[tokio::test]
async fn test_absent_schema_fields_get_empty_values() {
    let temp = assert_fs::TempDir::new().unwrap();
    let input = temp.child("crd.yaml");
    input.write_str("spec: {validation: {openAPIV3Schema: {type: object}}}").unwrap();
    let output = temp.child("schema.json");

    let app = app_writing_to(output.path());
    app.generate(&FileSource::new(input.path())).await.unwrap();

    let written: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(output.path()).unwrap()).unwrap();
    let def = &written["definitions"]["v1alpha1.Rollout"];
    assert_eq!(def["properties"], serde_json::Value::Null);
    assert_eq!(def["required"], json!([]));
    assert_eq!(def["type"], "object");
}

#[tokio::test]
async fn test_rollout_schema_copied_unchanged() {
    let temp = assert_fs::TempDir::new().unwrap();
    let input = temp.child("rollout-crd.yaml");
    input.write_str(ROLLOUT_CRD).unwrap();
    let output = temp.child("schema.json");

    let app = app_writing_to(output.path());
    app.generate(&FileSource::new(input.path())).await.unwrap();

    let doc: SchemaDocument =
        serde_json::from_str(&std::fs::read_to_string(output.path()).unwrap()).unwrap();
    let def = doc.get("v1alpha1.Rollout").unwrap();

    assert_eq!(def.schema_type, "object");
    assert_eq!(def.required, vec!["spec"]);
    assert_eq!(def.group_version_kind, vec![GroupVersionKind::rollout()]);
    assert_eq!(
        def.properties["spec"]["properties"]["strategy"]["properties"]["canary"]["properties"]
            ["maxSurge"],
        json!({
            "anyOf": [{"type": "integer"}, {"type": "string"}],
            "x-kubernetes-int-or-string": true
        })
    );
    assert_eq!(
        def.properties["spec"]["required"],
        json!(["selector", "template"])
    );
    // Nothing outside openAPIV3Schema leaks into the output
    assert!(def.properties.get("names").is_none());
    assert_eq!(doc.definitions.len(), 1);
}

#[tokio::test]
async fn test_written_file_round_trips() {
    let temp = assert_fs::TempDir::new().unwrap();
    let input = temp.child("crd.yaml");
    input.write_str(ROLLOUT_CRD).unwrap();
    let output = temp.child("schema.json");

    let app = app_writing_to(output.path());
    let source = FileSource::new(input.path());
    let in_memory = app.build_document(&source).await.unwrap();
    app.generate(&source).await.unwrap();

    let reparsed: SchemaDocument =
        serde_json::from_str(&std::fs::read_to_string(output.path()).unwrap()).unwrap();
    assert_eq!(reparsed, in_memory);
}

#[tokio::test]
async fn test_repeated_runs_are_byte_identical() {
    let temp = assert_fs::TempDir::new().unwrap();
    let input = temp.child("crd.yaml");
    input.write_str(ROLLOUT_CRD).unwrap();
    let output = temp.child("schema.json");

    let app = app_writing_to(output.path());
    let source = FileSource::new(input.path());

    let first = app.generate(&source).await.unwrap();
    let first_bytes = std::fs::read(output.path()).unwrap();
    let second = app.generate(&source).await.unwrap();
    let second_bytes = std::fs::read(output.path()).unwrap();

    assert_eq!(first_bytes, second_bytes);
    assert_eq!(first.content_hash, second.content_hash);
}

#[tokio::test]
async fn test_output_is_two_space_indented() {
    let temp = assert_fs::TempDir::new().unwrap();
    let input = temp.child("crd.yaml");
    input.write_str(MINIMAL_CRD).unwrap();
    let output = temp.child("schema.json");

    let app = app_writing_to(output.path());
    app.generate(&FileSource::new(input.path())).await.unwrap();

    output.assert(predicate::str::starts_with(
        "{\n  \"definitions\": {\n    \"v1alpha1.Rollout\": {\n      \"properties\": {",
    ));
}

#[tokio::test]
async fn test_dry_run_does_not_write() {
    let temp = assert_fs::TempDir::new().unwrap();
    let input = temp.child("crd.yaml");
    input.write_str(MINIMAL_CRD).unwrap();
    let output = temp.child("schema.json");

    let app = app_writing_to(output.path());
    let result = app.dry_run(&FileSource::new(input.path())).await.unwrap();

    output.assert(predicate::path::missing());
    assert!(result.is_dry_run());
    assert_eq!(result.bytes_written(), 0);
    assert!(result.content.contains("\"x-kubernetes-group-version-kind\""));
}

#[rstest]
#[case::empty("", "parse")]
#[case::whitespace("\n\n", "parse")]
#[case::invalid_yaml("spec: {validation: [", "parse")]
#[case::missing_validation("spec: {group: argoproj.io}", "parse")]
#[case::missing_schema("spec: {validation: {}}", "parse")]
#[case::non_string_required(
    "spec: {validation: {openAPIV3Schema: {required: {a: b}}}}",
    "conversion"
)]
#[tokio::test]
async fn test_bad_input_leaves_output_untouched(#[case] manifest: &str, #[case] stage: &str) {
    let temp = assert_fs::TempDir::new().unwrap();
    let input = temp.child("crd.yaml");
    input.write_str(manifest).unwrap();
    let output = temp.child("schema.json");
    output.write_str("previous contents").unwrap();

    let app = app_writing_to(output.path());
    let err = app
        .generate(&FileSource::new(input.path()))
        .await
        .unwrap_err();

    assert_eq!(err.stage(), stage);
    assert!(err.to_string().starts_with(&format!("{stage} failed: ")));
    output.assert("previous contents");
}

#[tokio::test]
async fn test_missing_input_is_fetch_error() {
    let temp = assert_fs::TempDir::new().unwrap();
    let output = temp.child("schema.json");

    let app = app_writing_to(output.path());
    let err = app
        .generate(&FileSource::new(temp.path().join("absent.yaml")))
        .await
        .unwrap_err();

    assert!(matches!(err, RolloutSchemaError::Fetch(_)));
    output.assert(predicate::path::missing());
}

#[tokio::test]
async fn test_unwritable_output_is_write_error() {
    let temp = assert_fs::TempDir::new().unwrap();
    let input = temp.child("crd.yaml");
    input.write_str(MINIMAL_CRD).unwrap();

    let app = app_writing_to(&temp.path().join("no-such-dir").join("schema.json"));
    let err = app
        .generate(&FileSource::new(input.path()))
        .await
        .unwrap_err();

    assert_eq!(err.stage(), "write");
}

#[test]
fn test_invalid_config_is_rejected() {
    let mut config = Config::default();
    config.definition.group = String::new();

    let err = RolloutSchema::new(config).err().unwrap();
    assert_eq!(err.stage(), "config");
}
