// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for echogen.
//!
//! Pure logic only: validating feature names, deriving the model name, and
//! rendering the fixed template catalog. All I/O goes through the ports
//! defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable values**: `FeatureName`, `RenderContext` and `TemplateSet`
//!   are never mutated after construction
pub mod error;
pub mod feature;
pub mod render;
pub mod template;

// Re-exports for convenience
pub use error::DomainError;
pub use feature::FeatureName;
pub use render::RenderContext;
pub use template::{EXTENSION, Layer, TemplateFile, TemplateSet};

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Cross-module properties
    // ========================================================================

    #[test]
    fn model_file_and_directory_share_the_feature_name() {
        for raw in ["order", "invoice", "userProfile", "État"] {
            let feature = FeatureName::parse(raw).unwrap();
            let set = TemplateSet::for_feature(&feature);

            let model = set.by_layer(Layer::Model);
            assert_eq!(model.filename, format!("{raw}.{EXTENSION}"));
            assert!(
                model
                    .content
                    .contains(&format!("type {} struct", feature.model_name())),
                "model for {raw} declares the wrong type"
            );
        }
    }

    #[test]
    fn six_layer_files_never_depend_on_the_feature_name() {
        let a = TemplateSet::for_feature(&FeatureName::parse("order").unwrap());
        let b = TemplateSet::for_feature(&FeatureName::parse("invoice").unwrap());

        for layer in Layer::ALL.into_iter().filter(|l| *l != Layer::Model) {
            assert_eq!(a.by_layer(layer).filename, b.by_layer(layer).filename);
        }
    }

    #[test]
    fn empty_feature_never_reaches_rendering() {
        // The only way to build a TemplateSet is through a FeatureName.
        assert_eq!(FeatureName::parse(""), Err(DomainError::EmptyFeatureName));
    }
}
