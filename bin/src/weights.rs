//! Weight resolution from presets, files and command-line entries.

use anyhow::{Context, Result};
use ronda_combine::{FactorWeights, WeightPreset};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::warn;

/// Parses a `name=value` weight entry.
pub(crate) fn parse_weight(entry: &str) -> std::result::Result<(String, f64), String> {
    let (name, value) = entry
        .split_once('=')
        .ok_or_else(|| format!("expected name=value, got '{entry}'"))?;
    let value: f64 = value
        .trim()
        .parse()
        .map_err(|e| format!("invalid weight '{value}': {e}"))?;
    Ok((name.trim().to_string(), value))
}

/// Reads a JSON object of standardized column names to weights.
fn read_weights_file(path: &Path) -> Result<BTreeMap<String, f64>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading weights file {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing weights file {}", path.display()))
}

/// Combines the weight sources into one mapping.
///
/// Layers apply in order: the preset, then the file, then individual
/// entries, each overriding the weights of the columns it names. Returns
/// `None` when no source is given, which means equal weights.
pub(crate) fn resolve_weights(
    preset: Option<WeightPreset>,
    file: Option<&Path>,
    entries: &[(String, f64)],
) -> Result<Option<FactorWeights>> {
    if preset.is_none() && file.is_none() && entries.is_empty() {
        return Ok(None);
    }

    let mut weights = preset.map(WeightPreset::weights).unwrap_or_default();

    let mut layers = Vec::new();
    if let Some(path) = file {
        layers.push(read_weights_file(path)?.into_iter().collect::<Vec<_>>());
    }
    layers.push(entries.to_vec());

    for layer in layers {
        let parsed = FactorWeights::from_names(layer);
        for name in &parsed.ignored {
            warn!(key = %name, "Ignoring weight that does not name a standardized factor");
        }
        for (factor, weight) in parsed.weights.iter() {
            weights.set(factor, weight);
        }
    }

    if weights.is_empty() {
        warn!("No weight names a standardized factor; every composite score will be zero");
    }

    Ok(Some(weights))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ronda_traits::Factor;

    #[test]
    fn test_parse_weight() {
        assert_eq!(
            parse_weight("momentum_6m_z=0.5").unwrap(),
            ("momentum_6m_z".to_string(), 0.5)
        );
        assert_eq!(
            parse_weight(" vol_3m_z = -1 ").unwrap(),
            ("vol_3m_z".to_string(), -1.0)
        );
        assert!(parse_weight("momentum_6m_z").is_err());
        assert!(parse_weight("momentum_6m_z=abc").is_err());
    }

    #[test]
    fn test_no_sources_means_equal_weights() {
        assert!(resolve_weights(None, None, &[]).unwrap().is_none());
    }

    #[test]
    fn test_entries_override_preset() {
        let entries = vec![
            ("momentum_6m_z".to_string(), 1.0),
            ("bogus_z".to_string(), 9.0),
        ];
        let weights = resolve_weights(Some(WeightPreset::Tilted), None, &entries)
            .unwrap()
            .unwrap();
        assert_eq!(weights.get(Factor::Momentum6m), 1.0);
        assert_eq!(weights.get(Factor::Vol3m), -0.15);
        assert_eq!(weights.len(), 5);
    }

    #[test]
    fn test_only_unknown_names_gives_empty_weights() {
        let entries = vec![("bogus_z".to_string(), 1.0)];
        let weights = resolve_weights(None, None, &entries).unwrap().unwrap();
        assert!(weights.is_empty());
    }

    #[test]
    fn test_weights_file() {
        let path = std::env::temp_dir().join(format!("ronda-weights-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"value_pe_z": 0.4, "size_z": 0.1}"#).unwrap();

        let entries = vec![("size_z".to_string(), 0.2)];
        let weights = resolve_weights(None, Some(&path), &entries).unwrap().unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(weights.len(), 2);
        assert_eq!(weights.get(Factor::ValuePe), 0.4);
        assert_eq!(weights.get(Factor::Size), 0.2);
    }
}
