use std::collections::BTreeMap;

use super::FeatureName;

/// Placeholder for the Go package name (the feature name, verbatim).
pub const PACKAGE: &str = "PACKAGE";
/// Placeholder for the model type name (the capitalized feature name).
pub const MODEL_NAME: &str = "MODEL_NAME";

/// Context for template rendering.
///
/// A value object holding the variables a template may reference as
/// `{{VARIABLE}}`. Built once per feature; rendering never mutates it.
///
/// | Variable     | Example (`order`) |
/// |--------------|-------------------|
/// | `PACKAGE`    | `order`           |
/// | `MODEL_NAME` | `Order`           |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    variables: BTreeMap<&'static str, String>,
}

impl RenderContext {
    pub fn new(feature: &FeatureName) -> Self {
        let mut variables = BTreeMap::new();
        variables.insert(PACKAGE, feature.as_str().to_string());
        variables.insert(MODEL_NAME, feature.model_name());
        Self { variables }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// Render a template string by replacing `{{VARIABLE}}` placeholders.
    ///
    /// Single left-to-right pass: substituted values are never rescanned, so
    /// a feature name that itself looks like a placeholder is emitted as-is.
    /// Unknown placeholders are kept literally.
    pub fn render(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len() + 64);
        let mut rest = template;

        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after_open = &rest[start + 2..];

            match after_open.find("}}") {
                Some(end) => {
                    let key = &after_open[..end];
                    match self.get(key) {
                        Some(value) => out.push_str(value),
                        None => {
                            out.push_str("{{");
                            out.push_str(key);
                            out.push_str("}}");
                        }
                    }
                    rest = &after_open[end + 2..];
                }
                None => {
                    out.push_str(&rest[start..]);
                    rest = "";
                }
            }
        }

        out.push_str(rest);
        out
    }
}
