//! Dry-run rendering of the packaging commands and the CI build matrix.

use super::schema::ModelCheck;
use crate::domain::AUTO_DETECTED_ARCH;

/// Image name for a repository id: lower-cased, `/` replaced by `-`.
pub fn image_name(model_id: &str) -> String {
    model_id.to_lowercase().replace('/', "-")
}

/// Fully qualified image reference under a registry prefix.
pub fn image_reference(registry: &str, model_id: &str) -> String {
    format!("{registry}/{}:latest", image_name(model_id))
}

/// Commands the packaging job would run for one descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatedCommands {
    pub model_id: String,
    pub family: String,
    pub format: String,
    pub param_size: String,
    /// `size_gb` as displayed, or `"unknown"`.
    pub size: String,
    /// Modelfile generation command.
    pub generate: String,
    /// Build and push command.
    pub build: String,
}

impl SimulatedCommands {
    pub(super) fn for_model(tool: &str, registry: &str, model: &ModelCheck) -> Self {
        let field = |name: &str| model.value(name).unwrap_or_default().to_string();
        let family = field("family");
        let format = field("format");
        let param_size = field("param_size");

        let generate = format!(
            "{tool} modelfile generate \\\n  --arch {AUTO_DETECTED_ARCH} \\\n  --family {family} \\\n  --format {format} \\\n  --param-size {param_size} \\\n  ."
        );
        let build = format!(
            "{tool} build -f Modelfile \\\n  -t {} \\\n  --raw --output-remote --log-level debug \\\n  .",
            image_reference(registry, &model.model_id)
        );

        Self {
            model_id: model.model_id.clone(),
            family,
            format,
            param_size,
            size: model
                .size_gb
                .map_or_else(|| "unknown".to_string(), |size| size.to_string()),
            generate,
            build,
        }
    }
}

/// One job of the simulated build matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixEntry {
    pub model_id: String,
    pub image: String,
}

/// The simulated CI build matrix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildMatrix {
    pub entries: Vec<MatrixEntry>,
    /// Maximum concurrent jobs.
    pub max_parallel: usize,
}

impl BuildMatrix {
    pub(super) fn plan(registry: &str, models: &[ModelCheck], max_parallel: usize) -> Self {
        Self {
            entries: models
                .iter()
                .map(|model| MatrixEntry {
                    model_id: model.model_id.clone(),
                    image: image_reference(registry, &model.model_id),
                })
                .collect(),
            max_parallel,
        }
    }

    /// Number of sequential waves the matrix needs.
    pub const fn waves(&self) -> usize {
        if self.max_parallel == 0 {
            return self.entries.len();
        }
        self.entries.len().div_ceil(self.max_parallel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::validator::schema::FieldCheck;

    fn model(id: &str, size_gb: Option<f64>) -> ModelCheck {
        let fields = [
            ("id", id),
            ("family", "qwen2"),
            ("arch", "transformer"),
            ("format", "safetensors"),
            ("param_size", "0.5B"),
        ]
        .into_iter()
        .map(|(field, value)| FieldCheck {
            field,
            value: value.to_string(),
            warning: false,
        })
        .collect();

        ModelCheck {
            index: 0,
            model_id: id.to_string(),
            fields,
            size_gb,
        }
    }

    #[test]
    fn test_image_name() {
        assert_eq!(image_name("Qwen/Qwen2-0.5B"), "qwen-qwen2-0.5b");
        assert_eq!(
            image_reference("ghcr.io/YOUR_ORG", "Qwen/Qwen2-0.5B"),
            "ghcr.io/YOUR_ORG/qwen-qwen2-0.5b:latest"
        );
    }

    #[test]
    fn test_commands_for_first_model() {
        let commands =
            SimulatedCommands::for_model("modctl", "ghcr.io/acme", &model("Qwen/Qwen2-0.5B", None));

        assert_eq!(
            commands.generate,
            "modctl modelfile generate \\\n  --arch transformer \\\n  --family qwen2 \\\n  --format safetensors \\\n  --param-size 0.5B \\\n  ."
        );
        assert!(
            commands
                .build
                .contains("-t ghcr.io/acme/qwen-qwen2-0.5b:latest")
        );
        assert!(commands.build.starts_with("modctl build -f Modelfile"));
        assert!(commands.build.contains("--raw --output-remote --log-level debug"));
        assert_eq!(commands.size, "unknown");
    }

    #[test]
    fn test_matrix_waves() {
        let models: Vec<ModelCheck> = (0..4)
            .map(|i| model(&format!("org/m{i}"), Some(1.0)))
            .collect();
        let matrix = BuildMatrix::plan("ghcr.io/YOUR_ORG", &models, 3);

        assert_eq!(matrix.entries.len(), 4);
        assert_eq!(matrix.entries[3].image, "ghcr.io/YOUR_ORG/org-m3:latest");
        assert_eq!(matrix.waves(), 2);
    }
}
