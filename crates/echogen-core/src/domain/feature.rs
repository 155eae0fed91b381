use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::{DomainError, Layer};

/// A validated feature name.
///
/// Invariant: never empty, contains no path separators, does not start with
/// `.`, has no whitespace or control characters, and is not the stem of a
/// layer file (the model file would otherwise replace `router.go` and
/// friends). Enforced at construction, so directory naming, package
/// substitution and model capitalization can rely on it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct FeatureName(String);

impl FeatureName {
    /// Validate and wrap a raw feature name.
    pub fn parse(raw: impl Into<String>) -> Result<Self, DomainError> {
        let name = raw.into();

        if name.is_empty() {
            return Err(DomainError::EmptyFeatureName);
        }
        if name.contains('/') || name.contains('\\') {
            return Err(DomainError::InvalidFeatureName {
                name,
                reason: "name cannot contain path separators",
            });
        }
        if name.starts_with('.') {
            return Err(DomainError::InvalidFeatureName {
                name,
                reason: "name cannot start with '.'",
            });
        }
        if name.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(DomainError::InvalidFeatureName {
                name,
                reason: "name cannot contain whitespace or control characters",
            });
        }
        if Layer::ALL.iter().any(|l| l.fixed_stem() == Some(name.as_str())) {
            return Err(DomainError::InvalidFeatureName {
                name,
                reason: "name collides with a layer file of the slice",
            });
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Type name declared by the model file.
    ///
    /// Upper-cases the first character only. Characters whose upper-case form
    /// is more than one character (e.g. `ß`) are left as-is, so the result
    /// always has the same number of characters as the feature name.
    pub fn model_name(&self) -> String {
        let mut chars = self.0.chars();
        let Some(first) = chars.next() else {
            return String::new();
        };

        let mut upper = first.to_uppercase();
        let head = match (upper.next(), upper.next()) {
            (Some(single), None) => single,
            _ => first,
        };

        let mut model = String::with_capacity(self.0.len());
        model.push(head);
        model.push_str(chars.as_str());
        model
    }
}

impl AsRef<str> for FeatureName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for FeatureName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for FeatureName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl fmt::Display for FeatureName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_is_rejected() {
        assert_eq!(FeatureName::parse(""), Err(DomainError::EmptyFeatureName));
    }

    #[test]
    fn path_separators_are_rejected() {
        for name in ["a/b", "a\\b", "/abs", "../up"] {
            assert!(
                matches!(
                    FeatureName::parse(name),
                    Err(DomainError::InvalidFeatureName { .. })
                ),
                "accepted: {name}"
            );
        }
    }

    #[test]
    fn dot_names_are_rejected() {
        assert!(FeatureName::parse(".").is_err());
        assert!(FeatureName::parse("..").is_err());
        assert!(FeatureName::parse(".hidden").is_err());
    }

    #[test]
    fn whitespace_is_rejected() {
        assert!(FeatureName::parse("my feature").is_err());
        assert!(FeatureName::parse("order\n").is_err());
        assert!(FeatureName::parse("\t").is_err());
    }

    #[test]
    fn layer_stems_are_reserved() {
        for name in ["datasource", "handler", "provider", "repository", "router", "usecase"] {
            assert!(
                matches!(
                    FeatureName::parse(name),
                    Err(DomainError::InvalidFeatureName { .. })
                ),
                "accepted: {name}"
            );
        }
        assert!(FeatureName::parse("model").is_ok());
        assert!(FeatureName::parse("Router").is_ok());
    }

    #[test]
    fn valid_names_pass() {
        for name in ["order", "userProfile", "user_profile", "v2", "Order"] {
            assert!(FeatureName::parse(name).is_ok(), "rejected: {name}");
        }
    }

    // The directory is still well-formed; Go validity is the caller's concern.
    #[test]
    fn non_identifier_names_are_accepted() {
        for name in ["my-feature", "9lives"] {
            let feature = FeatureName::parse(name).unwrap();
            assert_eq!(feature.as_str(), name);
        }
    }

    #[test]
    fn model_name_capitalizes_first_character_only() {
        let name = FeatureName::parse("order").unwrap();
        assert_eq!(name.model_name(), "Order");

        let name = FeatureName::parse("userProfile").unwrap();
        assert_eq!(name.model_name(), "UserProfile");

        let name = FeatureName::parse("user_profile").unwrap();
        assert_eq!(name.model_name(), "User_profile");
    }

    #[test]
    fn model_name_keeps_already_capitalized_input() {
        let name = FeatureName::parse("Order").unwrap();
        assert_eq!(name.model_name(), "Order");
    }

    #[test]
    fn model_name_single_character() {
        let name = FeatureName::parse("x").unwrap();
        assert_eq!(name.model_name(), "X");
    }

    #[test]
    fn model_name_preserves_length() {
        for raw in ["order", "état", "ßtraße", "9lives", "über"] {
            let name = FeatureName::parse(raw).unwrap();
            assert_eq!(
                name.model_name().chars().count(),
                raw.chars().count(),
                "length changed for {raw}"
            );
        }
    }

    #[test]
    fn model_name_handles_multibyte_first_character() {
        let name = FeatureName::parse("état").unwrap();
        assert_eq!(name.model_name(), "État");
    }

    #[test]
    fn from_str_and_display_round_trip() {
        let name: FeatureName = "order".parse().unwrap();
        assert_eq!(name.to_string(), "order");
        assert_eq!(name.as_ref(), "order");
    }
}
