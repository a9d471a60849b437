//! Configuration schema definitions.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use wingskills_protocols::HostSettings;

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub settings: HostSettings,

    #[serde(default)]
    pub skills: SkillsConfig,
}

/// Skills configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillsConfig {
    /// Skill IDs to load, in load order.
    #[serde(default = "default_enabled_skills")]
    pub enabled: Vec<String>,

    /// Custom properties per skill ID, handed to the skill at initialization.
    #[serde(default)]
    pub custom: HashMap<String, serde_json::Value>,
}

impl Default for SkillsConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled_skills(),
            custom: HashMap::new(),
        }
    }
}

fn default_enabled_skills() -> Vec<String> {
    vec!["api_request".to_string()]
}

impl Config {
    /// Whether `skill_id` is listed in `skills.enabled`.
    pub fn is_enabled(&self, skill_id: &str) -> bool {
        self.skills.enabled.iter().any(|id| id == skill_id)
    }

    /// Custom properties for `skill_id`, `null` when none are configured.
    pub fn skill_config(&self, skill_id: &str) -> serde_json::Value {
        self.skills
            .custom
            .get(skill_id)
            .cloned()
            .unwrap_or(serde_json::Value::Null)
    }
}
