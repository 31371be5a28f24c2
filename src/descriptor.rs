use crate::error::UpdateError;
use crate::types::FieldChange;
use anyhow::{Context, Result};
use serde_yaml::{Mapping, Value};
use std::path::Path;

pub const CHART_APP_VERSION: &[&str] = &["appVersion"];
pub const VALUES_IMAGE_TAG: &[&str] = &["image", "tag"];

/// Set the scalar at `field_path` in a YAML file and write the whole document back.
///
/// Missing intermediate keys are created as empty mappings. Sibling keys keep
/// their order; formatting and comments do not survive the round trip.
pub fn update_field<P: AsRef<Path>>(
    path: P,
    field_path: &[&str],
    new_value: &str,
) -> Result<FieldChange> {
    let path = path.as_ref();
    let (last, parents) = field_path
        .split_last()
        .context("field path must contain at least one key")?;

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let mut document: Value = serde_yaml::from_str(&contents)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    let mut node = as_mapping(&mut document, path, "<root>")?;
    for key in parents {
        let child = node
            .entry(Value::from(*key))
            .or_insert_with(|| Value::Mapping(Mapping::new()));
        node = as_mapping(child, path, key)?;
    }

    let old = node.insert(Value::from(*last), Value::from(new_value));

    let rendered = serde_yaml::to_string(&document)
        .with_context(|| format!("Failed to serialize {}", path.display()))?;
    std::fs::write(path, rendered)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(FieldChange {
        file: path.to_path_buf(),
        field: field_path.join("."),
        old,
        new: new_value.to_string(),
    })
}

fn as_mapping<'a>(value: &'a mut Value, file: &Path, key: &str) -> Result<&'a mut Mapping> {
    if value.is_null() {
        *value = Value::Mapping(Mapping::new());
    }
    match value {
        Value::Mapping(mapping) => Ok(mapping),
        _ => Err(UpdateError::NotAMapping {
            file: file.to_path_buf(),
            key: key.to_string(),
        }
        .into()),
    }
}
