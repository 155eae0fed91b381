//! Implementation of the `echogen list` command.

use serde::Serialize;

use echogen_core::domain::{EXTENSION, FeatureName, Layer};

use crate::{
    cli::{ListArgs, ListFormat},
    error::{CliError, CliResult},
    output::OutputManager,
};

#[derive(Debug, Serialize)]
struct Entry {
    filename: String,
    layer: Layer,
}

pub fn execute(args: ListArgs, output: OutputManager) -> CliResult<()> {
    let feature = args
        .feature
        .as_deref()
        .map(FeatureName::parse)
        .transpose()
        .map_err(|e| CliError::Core(e.into()))?;

    let entries = entries(feature.as_ref());

    match args.format {
        ListFormat::Table => {
            output.header("Feature slice files:")?;
            for entry in &entries {
                output.print(&format!("  {:<16} {}", entry.filename, entry.layer))?;
            }
        }
        ListFormat::List => {
            for entry in &entries {
                output.print(&entry.filename)?;
            }
        }
        ListFormat::Json => output.json(&entries)?,
    }

    Ok(())
}

/// One entry per layer, in the order they are generated. The model file is
/// shown as `<feature>.go` when no feature is given.
fn entries(feature: Option<&FeatureName>) -> Vec<Entry> {
    Layer::ALL
        .iter()
        .map(|&layer| {
            let filename = match (feature, layer.fixed_stem()) {
                (Some(f), _) => layer.filename(f),
                (None, Some(stem)) => format!("{stem}.{EXTENSION}"),
                (None, None) => format!("<feature>.{EXTENSION}"),
            };
            Entry { filename, layer }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seven_entries_with_placeholder_model() {
        let list = entries(None);
        assert_eq!(list.len(), 7);
        assert!(list.iter().any(|e| e.filename == "<feature>.go"));
        assert!(list.iter().any(|e| e.filename == "handler.go"));
    }

    #[test]
    fn feature_resolves_model_filename() {
        let feature = FeatureName::parse("order").unwrap();
        let list = entries(Some(&feature));
        assert!(list.iter().any(|e| e.filename == "order.go"));
        assert!(!list.iter().any(|e| e.filename.starts_with('<')));
    }
}
