//! Terminal rendering of the validation report.

use modelpick_core::services::{
    BuildMatrix, ModelCheck, OCI_OVERHEAD, SimulatedCommands, StorageEstimate,
};
use modelpick_core::{PackagingToolLocation, PrerequisiteReport, SchemaViolation, ToolStatus};

// ANSI color codes
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

const RULE_WIDTH: usize = 60;

pub fn print_banner(title: &str) {
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("{BOLD}{title}{RESET}");
    println!("{}", "=".repeat(RULE_WIDTH));
}

pub fn print_step(number: usize, title: &str) {
    println!("\n{BOLD}[{number}] {title}{RESET}");
    println!("{}", "-".repeat(RULE_WIDTH));
}

pub fn print_ok(message: &str) {
    println!("{GREEN}✓{RESET} {message}");
}

pub fn print_failure(message: &str) {
    println!("{RED}✗{RESET} {message}");
}

/// One row per probed tool, then the packaging tool's location.
pub fn print_prerequisites(report: &PrerequisiteReport) {
    for tool in &report.tools {
        let status = match &tool.status {
            ToolStatus::Available { version } if version.is_empty() => {
                format!("{GREEN}✓ available{RESET}")
            }
            ToolStatus::Available { version } => format!("{GREEN}✓ {version}{RESET}"),
            ToolStatus::Missing => format!("{RED}✗ not available{RESET}"),
        };
        println!("  {:<10} {:<40} {}", tool.name, status, tool.description);
    }

    let name = &report.packaging_tool;
    match &report.packaging_tool_location {
        PackagingToolLocation::Relative(path) => {
            println!("  {GREEN}✓{RESET} {name} binary found ({})", path.display());
        }
        PackagingToolLocation::OnPath(path) => {
            println!("  {GREEN}✓{RESET} {name} found in PATH ({})", path.display());
        }
        PackagingToolLocation::NotFound => {
            println!("  {YELLOW}⚠{RESET}  {name} not found (will need to be built)");
        }
    }
}

/// Per-field check lines for one descriptor.
pub fn print_model_check(check: &ModelCheck) {
    println!("\nModel {}: {}", check.index + 1, check.model_id);
    for field in &check.fields {
        if field.warning {
            println!(
                "  {YELLOW}⚠{RESET}  {}: {} (may need manual specification)",
                field.field, field.value
            );
        } else {
            println!("  {GREEN}✓{RESET} {}: {}", field.field, field.value);
        }
    }
    match check.size_gb {
        Some(size) => println!("  {GREEN}✓{RESET} size_gb: {size}GB"),
        None => println!("  {YELLOW}⚠{RESET}  size_gb: not available"),
    }
}

pub fn print_violation(violation: &SchemaViolation) {
    print_failure(&violation.to_string());
}

pub fn print_commands(commands: &SimulatedCommands) {
    println!("\nModel: {}", commands.model_id);
    println!("Family: {}", commands.family);
    println!("Format: {}", commands.format);
    println!("Param size: {}", commands.param_size);
    println!("Size: {}GB", commands.size);

    println!("\nModelfile generation command:");
    println!("{}", commands.generate);

    println!("\nBuild & push command:");
    println!("{}", commands.build);
}

pub fn print_matrix(matrix: &BuildMatrix) {
    println!(
        "Would build {} models in parallel (max {} concurrent)",
        matrix.entries.len(),
        matrix.max_parallel
    );
    for (i, entry) in matrix.entries.iter().enumerate() {
        println!("  [{}] {} → {}", i + 1, entry.model_id, entry.image);
    }
    println!("{}", waves_line(matrix));
}

fn waves_line(matrix: &BuildMatrix) -> String {
    format!("Build waves: {}", matrix.waves())
}

pub fn print_storage(storage: &StorageEstimate) {
    let overhead_pct = (OCI_OVERHEAD - 1.0) * 100.0;
    println!("Total model size: {:.2}GB", storage.total_gb);
    println!(
        "Estimated registry storage: {:.2}GB (+{overhead_pct:.0}% OCI overhead)",
        storage.registry_gb
    );
    println!("Number of images: {}", storage.image_count);
}

pub fn print_summary(warning_count: usize, prerequisites_ok: bool) {
    println!();
    print_banner("Validation Summary");
    print_ok("Model selection works");
    print_ok("Model data is valid");
    print_ok("Workflow logic is sound");
    if warning_count > 0 {
        println!("{YELLOW}⚠{RESET}  {warning_count} field(s) need attention before packaging");
    }
    if !prerequisites_ok {
        println!("{YELLOW}⚠{RESET}  Some prerequisites are missing on this machine");
    }

    println!("\nNext steps:");
    println!("  1. Set the HF_TOKEN secret for the packaging workflow");
    println!("  2. Trigger the workflow manually with limit=3");
    println!("  3. Monitor the first run for issues");
    println!("  4. Adjust limit and size ceiling based on the results");
    println!();
}
