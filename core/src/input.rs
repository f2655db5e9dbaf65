use std::collections::HashMap;
use anyhow::{anyhow, Result};

use crate::service::series_service::PointPatch;

pub const PATCH_KEYS: [&str; 4] = ["predicted", "actual", "target", "business"];

#[derive(Debug, PartialEq)]
pub struct ParsedInput {
    pub name: String,
    pub metadata: HashMap<String, String>,
}

/// Splits `key:value` tokens from free words.
pub fn parse_args(args: &[String]) -> ParsedInput {
    let mut name_parts = Vec::new();
    let mut metadata = HashMap::new();

    for arg in args {
        if let Some((key, value)) = arg.split_once(':') {
            if !key.is_empty() {
                metadata.insert(key.to_string(), value.to_string());
                continue;
            }
        }
        name_parts.push(arg.as_str());
    }

    ParsedInput {
        name: name_parts.join(" "),
        metadata,
    }
}

pub fn expand_key(key: &str, candidates: &[&str]) -> Result<String> {
    // 1. Exact match
    if candidates.contains(&key) {
        return Ok(key.to_string());
    }

    // 2. Prefix match
    let matches: Vec<&str> = candidates
        .iter()
        .filter(|&&c| c.starts_with(key))
        .cloned()
        .collect();

    match matches.len() {
        1 => Ok(matches[0].to_string()),
        0 => Err(anyhow!("Unknown key: '{}'", key)),
        _ => Err(anyhow!("Ambiguous key: '{}' matches {:?}", key, matches)),
    }
}

/// Builds a patch from `key:value` metadata, keys abbreviated as in `expand_key`.
pub fn parse_patch(metadata: &HashMap<String, String>) -> Result<PointPatch> {
    let mut patch = PointPatch::default();
    for (key, value) in metadata {
        match expand_key(key, &PATCH_KEYS)?.as_str() {
            "predicted" => patch.predicted = Some(parse_volume(key, value)?),
            "actual" => patch.actual = Some(parse_volume(key, value)?),
            "target" => patch.target = Some(parse_volume(key, value)?),
            "business" => patch.business_day = Some(parse_flag(value)?),
            other => return Err(anyhow!("Unhandled key: '{}'", other)),
        }
    }
    Ok(patch)
}

fn parse_volume(key: &str, value: &str) -> Result<f64> {
    let v: f64 = value
        .parse()
        .map_err(|_| anyhow!("Invalid number for '{}': {}", key, value))?;
    if !v.is_finite() || v < 0.0 {
        return Err(anyhow!("'{}' must be a non-negative number, got {}", key, value));
    }
    Ok(v)
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "y" | "1" => Ok(true),
        "false" | "no" | "n" | "0" | "off" | "holiday" => Ok(false),
        _ => Err(anyhow!("Invalid business flag: {}", value)),
    }
}
