//! Subcommand handlers for wingskills.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use wingskills_config::{Config, ConfigLoader, ConfigValidator, ValidationError, ValidationResult};
use wingskills_core::SkillHost;
use wingskills_protocols::Extension;
use wingskills_skill_api_request::ApiRequestExtension;
use wingskills_skill_nms_assistant::NmsAssistantExtension;

use crate::cli::ToolFormat;

/// Skill ids this binary can load.
pub(crate) const KNOWN_SKILLS: &[&str] = &["api_request", "nms_assistant"];

type CommandResult<T> = Result<T, Box<dyn std::error::Error>>;

fn create_skill(id: &str) -> Option<Box<dyn Extension>> {
    match id {
        "api_request" => Some(Box::new(ApiRequestExtension::new())),
        "nms_assistant" => Some(Box::new(NmsAssistantExtension::new())),
        _ => None,
    }
}

/// `--config` with a leading `~` expanded.
pub(crate) fn config_path(path: &Path) -> PathBuf {
    PathBuf::from(ConfigLoader::expand_path(&path.to_string_lossy()))
}

/// Load the config file, forcing debug mode when requested.
pub(crate) fn load_config(path: &Path, force_debug: bool) -> CommandResult<Config> {
    let mut config = ConfigLoader::load_or_default(&config_path(path))?;
    if force_debug {
        config.settings.debug_mode = true;
    }
    Ok(config)
}

/// Build a host with every enabled skill loaded.
///
/// Unknown or failing skills are skipped with a warning.
pub(crate) async fn build_host(config: &Config) -> SkillHost {
    let host = SkillHost::new(config.settings);

    for id in &config.skills.enabled {
        let Some(skill) = create_skill(id) else {
            warn!("Unknown skill '{}', skipping", id);
            continue;
        };
        if let Err(e) = host.load_skill(skill, config.skill_config(id)).await {
            warn!("Failed to load skill {}: {}", id, e);
        }
    }

    info!(
        skills = host.list_skills().len(),
        tools = host.tool_definitions().len(),
        "Skill host ready"
    );
    host
}

/// Tool schemas of every loaded skill, as a JSON array.
pub(crate) fn render_tools(host: &SkillHost, format: ToolFormat) -> CommandResult<String> {
    let schemas: Vec<serde_json::Value> = host
        .tool_definitions()
        .iter()
        .map(|def| match format {
            ToolFormat::Openai => def.to_openai_function(),
            ToolFormat::Anthropic => def.to_anthropic_tool(),
        })
        .collect();
    Ok(serde_json::to_string_pretty(&schemas)?)
}

/// Invoke `tool` with JSON-encoded `params`.
pub(crate) async fn call_tool(
    host: &SkillHost,
    tool: &str,
    params: &str,
) -> CommandResult<(String, String)> {
    let params: serde_json::Value = serde_json::from_str(params)?;
    Ok(host.execute_tool(tool, params).await)
}

/// Validate the host config and the custom properties of each enabled skill.
pub(crate) async fn check_config(config: &Config) -> ValidationResult {
    let mut result = ConfigValidator::validate(config, KNOWN_SKILLS);
    if !result.is_valid() {
        return result;
    }

    let host = SkillHost::new(config.settings);
    for id in &config.skills.enabled {
        let Some(skill) = create_skill(id) else {
            continue;
        };
        if let Err(e) = host.load_skill(skill, config.skill_config(id)).await {
            result.add_error(ValidationError::new(
                format!("skills.custom.{}", id),
                e.to_string(),
            ));
        }
    }
    host.shutdown().await;

    result
}

pub(crate) async fn handle_tools(config: &Config, format: ToolFormat) -> CommandResult<()> {
    let host = build_host(config).await;
    println!("{}", render_tools(&host, format)?);
    host.shutdown().await;
    Ok(())
}

pub(crate) async fn handle_call(config: &Config, tool: &str, params: &str) -> CommandResult<()> {
    let host = build_host(config).await;
    let (function_response, instant_response) = call_tool(&host, tool, params).await?;
    println!("{}", function_response);
    if !instant_response.is_empty() {
        println!("Instant response: {}", instant_response);
    }
    host.shutdown().await;
    Ok(())
}

pub(crate) async fn handle_check(config: &Config) -> CommandResult<()> {
    let result = check_config(config).await;
    for warning in &result.warnings {
        println!("warning: {}", warning);
    }
    for error in &result.errors {
        println!("error: {}", error);
    }

    if result.is_valid() {
        println!("Configuration OK");
        Ok(())
    } else {
        Err(format!("Configuration has {} error(s)", result.errors.len()).into())
    }
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
