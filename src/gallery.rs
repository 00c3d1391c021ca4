//! Gallery scenario definitions
//!
//! The gallery sheet renders the same roster under several seeds (or
//! focused sub-rosters) side by side. Scenarios are declared in TOML.

use std::fs;
use std::path::Path;

use log::info;
use serde::Deserialize;

/// Path to the scenario definitions
pub const GALLERY_FILE: &str = "config/gallery.toml";

/// One gallery cell: a named seed, optionally restricted to a sub-roster.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub seed: String,
    /// Empty means "use the full enabled roster"
    #[serde(default)]
    pub names: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct GalleryConfig {
    #[serde(default)]
    scenario: Vec<Scenario>,
}

/// Parse scenario definitions from TOML text
pub fn parse_scenarios(content: &str) -> Result<Vec<Scenario>, String> {
    let config: GalleryConfig =
        toml::from_str(content).map_err(|e| format!("Failed to parse gallery config: {}", e))?;
    Ok(config.scenario)
}

/// Load scenarios from file, falling back to the built-in set
pub fn load_scenarios(path: &str) -> Vec<Scenario> {
    if Path::new(path).exists() {
        match fs::read_to_string(path).map_err(|e| e.to_string()).and_then(|c| parse_scenarios(&c)) {
            Ok(scenarios) if !scenarios.is_empty() => {
                info!("Loaded {} gallery scenarios from {}", scenarios.len(), path);
                return scenarios;
            }
            Ok(_) => info!("{} defines no scenarios, using defaults", path),
            Err(e) => log::warn!("{}", e),
        }
    }
    default_scenarios()
}

/// Built-in scenarios: the stock roster under four seeds
pub fn default_scenarios() -> Vec<Scenario> {
    ["dugout", "pennant", "rookie", "october"]
        .iter()
        .map(|seed| Scenario {
            name: seed.to_string(),
            seed: seed.to_string(),
            names: Vec::new(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scenarios() {
        let content = r#"
[[scenario]]
name = "Legends"
seed = "legends-1"
names = ["Babe Ruth", "Lou Gehrig"]

[[scenario]]
name = "Full roster"
seed = "everyone"
"#;
        let scenarios = parse_scenarios(content).unwrap();
        assert_eq!(scenarios.len(), 2);
        assert_eq!(scenarios[0].names.len(), 2);
        assert!(scenarios[1].names.is_empty());
    }

    #[test]
    fn test_parse_rejects_bad_toml() {
        assert!(parse_scenarios("[[scenario]\nname=").is_err());
    }

    #[test]
    fn test_default_scenarios_have_distinct_seeds() {
        let scenarios = default_scenarios();
        assert_eq!(scenarios.len(), 4);
        let mut seeds: Vec<_> = scenarios.iter().map(|s| s.seed.clone()).collect();
        seeds.dedup();
        assert_eq!(seeds.len(), 4);
    }
}
