use super::*;

fn sample_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "object",
        "properties": {
            "url": {"type": "string"}
        },
        "required": ["url"]
    })
}

#[test]
fn test_tool_definition_new() {
    let def = ToolDefinition::new("get_news", "Get News", "Fetch news");
    assert_eq!(def.id, "get_news");
    assert_eq!(def.name, "Get News");
    assert_eq!(def.risk_level, RiskLevel::Low);
    assert!(def.parameters_schema.is_none());
    assert!(def.extension_id.is_none());
}

#[test]
fn test_tool_definition_builders() {
    let def = ToolDefinition::new("send_api_request", "Send API Request", "Send a request")
        .with_parameters_schema(sample_schema())
        .with_risk_level(RiskLevel::Medium)
        .with_extension_id("api_request");
    assert_eq!(def.risk_level, RiskLevel::Medium);
    assert_eq!(def.extension_id.as_deref(), Some("api_request"));
    assert!(def.parameters_schema.is_some());
}

#[test]
fn test_to_openai_function_with_parameters() {
    let def = ToolDefinition::new("send_api_request", "Send API Request", "Send a request")
        .with_parameters_schema(sample_schema());
    let value = def.to_openai_function();
    assert_eq!(value["type"], "function");
    assert_eq!(value["function"]["name"], "send_api_request");
    assert_eq!(value["function"]["description"], "Send a request");
    assert_eq!(value["function"]["parameters"]["required"][0], "url");
}

#[test]
fn test_to_openai_function_without_parameters() {
    let def = ToolDefinition::new("get_news", "Get News", "Fetch news");
    let value = def.to_openai_function();
    assert_eq!(value["function"]["name"], "get_news");
    assert!(value["function"].get("parameters").is_none());
}

#[test]
fn test_to_anthropic_tool_defaults_to_empty_schema() {
    let def = ToolDefinition::new("get_news", "Get News", "Fetch news");
    let value = def.to_anthropic_tool();
    assert_eq!(value["name"], "get_news");
    assert_eq!(value["input_schema"]["type"], "object");
}

#[test]
fn test_tool_definition_serialization_skips_empty_options() {
    let def = ToolDefinition::new("get_news", "Get News", "Fetch news");
    let json = serde_json::to_string(&def).unwrap();
    assert!(!json.contains("parameters_schema"));
    assert!(!json.contains("extension_id"));
}
