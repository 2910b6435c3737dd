//! Offline dry-run validation of a selection artifact.
//!
//! Nothing here downloads a model or runs the packaging tool. The validator
//! probes prerequisites through [`ToolProbePort`], checks the descriptor
//! schema, then renders the commands, build matrix and storage estimate the
//! packaging workflow would produce.

mod schema;
mod simulation;
mod storage;

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info, warn};

pub use schema::{
    FieldCheck, ModelCheck, REQUIRED_FIELDS, SchemaReport, SchemaViolation, SchemaWarning,
    check_schema,
};
pub use simulation::{BuildMatrix, MatrixEntry, SimulatedCommands, image_name, image_reference};
pub use storage::{OCI_OVERHEAD, StorageEstimate};

use crate::ports::ToolProbePort;
use crate::settings::ValidatorSettings;
use crate::utils::system::{PackagingToolLocation, Prerequisite};

/// Result of probing the workflow's external tools. Advisory only.
#[derive(Debug, Clone)]
pub struct PrerequisiteReport {
    pub tools: Vec<Prerequisite>,
    pub packaging_tool: String,
    pub packaging_tool_location: PackagingToolLocation,
}

impl PrerequisiteReport {
    pub fn all_available(&self) -> bool {
        self.tools.iter().all(|tool| tool.status.is_available())
            && self.packaging_tool_location.is_found()
    }
}

/// Everything the dry run derived from a valid descriptor batch.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationReport {
    pub schema: SchemaReport,
    /// Commands for the first descriptor; `None` for an empty batch.
    pub commands: Option<SimulatedCommands>,
    pub matrix: BuildMatrix,
    pub storage: StorageEstimate,
}

/// Offline validator for selection artifacts.
pub struct WorkflowValidator {
    probe: Arc<dyn ToolProbePort>,
    settings: ValidatorSettings,
}

impl WorkflowValidator {
    pub fn new(probe: Arc<dyn ToolProbePort>, settings: ValidatorSettings) -> Self {
        Self { probe, settings }
    }

    pub const fn settings(&self) -> &ValidatorSettings {
        &self.settings
    }

    /// Probe the prerequisite tools and locate the packaging tool.
    pub async fn check_prerequisites(&self) -> PrerequisiteReport {
        let mut tools = Vec::with_capacity(self.settings.prerequisites.len());
        for (name, description) in &self.settings.prerequisites {
            let status = self.probe.probe_tool(name).await;
            debug!(tool = %name, available = status.is_available(), "Probed tool");
            tools.push(Prerequisite::new(name, description).with_status(status));
        }

        let location = self.probe.locate_packaging_tool(
            &self.settings.packaging_tool,
            &self.settings.packaging_tool_path,
        );
        if !location.is_found() {
            warn!(
                tool = %self.settings.packaging_tool,
                "Packaging tool not found; it will need to be built"
            );
        }

        PrerequisiteReport {
            tools,
            packaging_tool: self.settings.packaging_tool.clone(),
            packaging_tool_location: location,
        }
    }

    /// Validate a descriptor document and simulate the packaging workflow.
    ///
    /// A schema violation fails the whole batch; nothing is simulated.
    pub fn validate(&self, document: &Value) -> Result<ValidationReport, SchemaViolation> {
        let schema = check_schema(document)?;
        info!(
            models = schema.models.len(),
            warnings = schema.warnings.len(),
            "Descriptor schema is valid"
        );

        let registry = self.settings.registry.as_str();
        let commands = schema.models.first().map(|model| {
            SimulatedCommands::for_model(&self.settings.packaging_tool, registry, model)
        });
        let matrix = BuildMatrix::plan(
            registry,
            &schema.models,
            self.settings.max_parallel_builds,
        );
        let storage = StorageEstimate::for_models(&schema.models);

        Ok(ValidationReport {
            schema,
            commands,
            matrix,
            storage,
        })
    }
}
