//! Validator behavior over whole descriptor batches.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use modelpick_core::{
    PackagingToolLocation, SchemaViolation, ToolProbePort, ToolStatus, ValidatorSettings,
    WorkflowValidator,
};
use serde_json::{Value, json};

struct NothingInstalled;

#[async_trait]
impl ToolProbePort for NothingInstalled {
    async fn probe_tool(&self, _tool: &str) -> ToolStatus {
        ToolStatus::Missing
    }

    fn locate_packaging_tool(&self, _name: &str, _relative_path: &Path) -> PackagingToolLocation {
        PackagingToolLocation::NotFound
    }
}

fn validator(settings: ValidatorSettings) -> WorkflowValidator {
    WorkflowValidator::new(Arc::new(NothingInstalled), settings)
}

fn descriptor(id: &str, size_gb: Value) -> Value {
    json!({
        "id": id,
        "family": "llama",
        "arch": "transformer",
        "format": "safetensors",
        "param_size": "1.1B",
        "size_gb": size_gb,
        "downloads": 0,
        "likes": 0
    })
}

#[test]
fn test_missing_param_size_fails_batch_of_otherwise_valid_models() {
    let mut broken = descriptor("org/broken", json!(1.0));
    broken.as_object_mut().unwrap().remove("param_size");
    let document = json!([
        descriptor("org/first", json!(1.0)),
        descriptor("org/second", json!(2.0)),
        broken,
    ]);

    let err = validator(ValidatorSettings::default())
        .validate(&document)
        .unwrap_err();

    assert_eq!(
        err,
        SchemaViolation::MissingField {
            index: 2,
            model_id: "org/broken".to_string(),
            field: "param_size",
        }
    );
    assert!(err.to_string().contains("param_size"));
}

#[tokio::test]
async fn test_missing_tools_do_not_block_validation() {
    let validator = validator(ValidatorSettings::default());
    assert!(!validator.check_prerequisites().await.all_available());

    let report = validator
        .validate(&json!([descriptor("org/model", json!(1.0))]))
        .unwrap();
    assert_eq!(report.schema.models.len(), 1);
}

#[test]
fn test_custom_registry_flows_into_commands_and_matrix() {
    let settings = ValidatorSettings::default().with_registry("registry.example.com/team/");
    let document = json!([
        descriptor("TinyLlama/TinyLlama-1.1B-Chat-v1.0", json!(2.05)),
        descriptor("org/other", Value::Null),
    ]);

    let report = validator(settings).validate(&document).unwrap();

    let commands = report.commands.unwrap();
    assert!(commands.build.contains(
        "-t registry.example.com/team/tinyllama-tinyllama-1.1b-chat-v1.0:latest"
    ));
    assert_eq!(commands.size, "2.05");
    assert_eq!(
        report.matrix.entries[1].image,
        "registry.example.com/team/org-other:latest"
    );
}

#[test]
fn test_storage_estimate_adds_overhead() {
    let document = json!([
        descriptor("org/a", json!(4.0)),
        descriptor("org/b", json!(6.0)),
        descriptor("org/c", Value::Null),
    ]);

    let report = validator(ValidatorSettings::default())
        .validate(&document)
        .unwrap();

    assert!((report.storage.total_gb - 10.0).abs() < 1e-9);
    assert!((report.storage.registry_gb - 11.0).abs() < 1e-9);
    assert_eq!(report.storage.image_count, 3);
    assert_eq!(report.schema.warnings.len(), 1);
}
