//! Domain types for candidate selection.
//!
//! These are pure data types with no infrastructure dependencies.

mod descriptor;
mod family;
mod param_size;
mod raw;

pub use descriptor::{AUTO_DETECTED_ARCH, CatalogDescriptor, UNKNOWN, WeightFormat};
pub use family::{DEFAULT_FAMILIES, FamilyVocabulary};
pub use param_size::extract_param_size;
pub use raw::{CONFIG_FILE_NAME, CatalogListing, RawModelInfo, RepoFile};
