//! Registry storage estimate.

use super::schema::ModelCheck;

/// OCI layer overhead applied on top of raw weight size.
pub const OCI_OVERHEAD: f64 = 1.1;

/// Estimated registry footprint of a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StorageEstimate {
    /// Sum of known `size_gb` values; unknown sizes count as zero.
    pub total_gb: f64,
    /// `total_gb` with OCI overhead.
    pub registry_gb: f64,
    pub image_count: usize,
}

impl StorageEstimate {
    pub(super) fn for_models(models: &[ModelCheck]) -> Self {
        let total_gb = models
            .iter()
            .filter_map(|m| m.size_gb)
            .fold(0.0, |acc, size| acc + size);
        Self {
            total_gb,
            registry_gb: total_gb * OCI_OVERHEAD,
            image_count: models.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sized(size_gb: Option<f64>) -> ModelCheck {
        ModelCheck {
            index: 0,
            model_id: "org/m".to_string(),
            fields: Vec::new(),
            size_gb,
        }
    }

    #[test]
    fn test_unknown_sizes_count_as_zero() {
        let estimate = StorageEstimate::for_models(&[sized(Some(2.0)), sized(None), sized(Some(3.0))]);

        assert!((estimate.total_gb - 5.0).abs() < 1e-9);
        assert!((estimate.registry_gb - 5.5).abs() < 1e-9);
        assert_eq!(estimate.image_count, 3);
    }

    #[test]
    fn test_empty_batch() {
        let estimate = StorageEstimate::for_models(&[]);
        assert_eq!(estimate, StorageEstimate::default());
    }
}
