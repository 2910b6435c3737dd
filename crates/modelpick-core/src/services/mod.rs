//! Core services - the selection pipeline and the offline validator.
//!
//! Services orchestrate between ports (trait interfaces) and domain logic.
//! They never know about concrete adapters.

mod evaluator;
mod selector;
mod validator;

pub use evaluator::{CompatibilityEvaluator, Evaluation, RejectReason, detect_format};
pub use selector::{
    OVERFETCH_MULTIPLIER, Rejection, SelectionError, SelectionOutcome, TopModelSelector,
};
pub use validator::{
    BuildMatrix, FieldCheck, MatrixEntry, ModelCheck, OCI_OVERHEAD, PrerequisiteReport,
    REQUIRED_FIELDS, SchemaReport, SchemaViolation, SchemaWarning, SimulatedCommands,
    StorageEstimate, ValidationReport, WorkflowValidator, check_schema, image_name,
    image_reference,
};
