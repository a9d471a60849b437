//! The NMS Assistant endpoints exposed as tools.

use serde_json::{json, Map, Value};

/// One API endpoint, and the tool that calls it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NmsEndpoint {
    ReleaseInfo,
    News,
    CommunityMission,
    LatestExpedition,
    ItemInfoByName,
    ExtraItemInfo,
    RefinerRecipesByInput,
    RefinerRecipesByOutput,
    CookingRecipesByInput,
    CookingRecipesByOutput,
}

const NAME_PARAM: (&str, &str) = ("name", "The name of the item.");
const APP_ID_PARAM: (&str, &str) = ("appId", "The AppId of the item.");
const LANGUAGE_PARAM: (&str, &str) = (
    "languageCode",
    "The language code (e.g., 'en' for English)",
);

impl NmsEndpoint {
    pub const ALL: [NmsEndpoint; 10] = [
        NmsEndpoint::ReleaseInfo,
        NmsEndpoint::News,
        NmsEndpoint::CommunityMission,
        NmsEndpoint::LatestExpedition,
        NmsEndpoint::ItemInfoByName,
        NmsEndpoint::ExtraItemInfo,
        NmsEndpoint::RefinerRecipesByInput,
        NmsEndpoint::RefinerRecipesByOutput,
        NmsEndpoint::CookingRecipesByInput,
        NmsEndpoint::CookingRecipesByOutput,
    ];

    pub fn tool_id(self) -> &'static str {
        match self {
            NmsEndpoint::ReleaseInfo => "get_release_info",
            NmsEndpoint::News => "get_news",
            NmsEndpoint::CommunityMission => "get_community_mission_info",
            NmsEndpoint::LatestExpedition => "get_latest_expedition_info",
            NmsEndpoint::ItemInfoByName => "get_item_info_by_name",
            NmsEndpoint::ExtraItemInfo => "get_extra_item_info",
            NmsEndpoint::RefinerRecipesByInput => "get_refiner_recipes_by_input",
            NmsEndpoint::RefinerRecipesByOutput => "get_refiner_recipes_by_output",
            NmsEndpoint::CookingRecipesByInput => "get_cooking_recipes_by_input",
            NmsEndpoint::CookingRecipesByOutput => "get_cooking_recipes_by_output",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            NmsEndpoint::ReleaseInfo => "Fetch release information from No Man's Sky website.",
            NmsEndpoint::News => "Fetch news from No Man's Sky website.",
            NmsEndpoint::CommunityMission => "Fetch current community mission information.",
            NmsEndpoint::LatestExpedition => "Fetch latest expedition information.",
            NmsEndpoint::ItemInfoByName => "Fetch game item details based on name and language.",
            NmsEndpoint::ExtraItemInfo => "Fetch extra item details using AppId.",
            NmsEndpoint::RefinerRecipesByInput => "Fetch refiner recipes by input item using AppId.",
            NmsEndpoint::RefinerRecipesByOutput => {
                "Fetch refiner recipes by output item using AppId."
            }
            NmsEndpoint::CookingRecipesByInput => "Fetch cooking recipes by input item using AppId.",
            NmsEndpoint::CookingRecipesByOutput => {
                "Fetch cooking recipes by output item using AppId."
            }
        }
    }

    /// Fixed leading path segments. `Outut` is the API's own spelling.
    pub fn path_prefix(self) -> &'static [&'static str] {
        match self {
            NmsEndpoint::ReleaseInfo => &["HelloGames", "Release"],
            NmsEndpoint::News => &["HelloGames", "News"],
            NmsEndpoint::CommunityMission => &["HelloGames", "CommunityMission"],
            NmsEndpoint::LatestExpedition => &["HelloGames", "Expedition"],
            NmsEndpoint::ItemInfoByName => &["ItemInfo", "Name"],
            NmsEndpoint::ExtraItemInfo => &["ItemInfo", "ExtraProperties"],
            NmsEndpoint::RefinerRecipesByInput => &["ItemInfo", "RefinerByInput"],
            NmsEndpoint::RefinerRecipesByOutput => &["ItemInfo", "RefinerByOutut"],
            NmsEndpoint::CookingRecipesByInput => &["ItemInfo", "CookingByInput"],
            NmsEndpoint::CookingRecipesByOutput => &["ItemInfo", "CookingByOutut"],
        }
    }

    /// Parameters appended to the path, in order, with their descriptions.
    pub fn parameters(self) -> &'static [(&'static str, &'static str)] {
        match self {
            NmsEndpoint::ReleaseInfo
            | NmsEndpoint::News
            | NmsEndpoint::CommunityMission
            | NmsEndpoint::LatestExpedition => &[],
            NmsEndpoint::ItemInfoByName => &[NAME_PARAM, LANGUAGE_PARAM],
            _ => &[APP_ID_PARAM, LANGUAGE_PARAM],
        }
    }

    /// Recipe endpoints get an item-name key appended to their response.
    pub fn returns_recipes(self) -> bool {
        matches!(
            self,
            NmsEndpoint::RefinerRecipesByInput
                | NmsEndpoint::RefinerRecipesByOutput
                | NmsEndpoint::CookingRecipesByInput
                | NmsEndpoint::CookingRecipesByOutput
        )
    }

    /// JSON schema for the tool's arguments, `None` for parameterless tools.
    pub fn parameters_schema(self) -> Option<Value> {
        let params = self.parameters();
        if params.is_empty() {
            return None;
        }

        let properties: Map<String, Value> = params
            .iter()
            .map(|(name, description)| {
                (
                    name.to_string(),
                    json!({"type": "string", "description": description}),
                )
            })
            .collect();
        let required: Vec<&str> = params.iter().map(|(name, _)| *name).collect();

        Some(json!({
            "type": "object",
            "properties": properties,
            "required": required
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_ids_are_unique() {
        let mut ids: Vec<&str> = NmsEndpoint::ALL.iter().map(|e| e.tool_id()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 10);
    }

    #[test]
    fn test_parameterless_endpoints_have_no_schema() {
        assert!(NmsEndpoint::News.parameters_schema().is_none());
        assert_eq!(NmsEndpoint::News.path_prefix(), &["HelloGames", "News"]);
    }

    #[test]
    fn test_item_by_name_schema() {
        let schema = NmsEndpoint::ItemInfoByName.parameters_schema().unwrap();
        assert_eq!(schema["required"], json!(["name", "languageCode"]));
        assert_eq!(schema["properties"]["name"]["type"], "string");
    }

    #[test]
    fn test_recipe_endpoints() {
        let recipes: Vec<_> = NmsEndpoint::ALL
            .iter()
            .filter(|e| e.returns_recipes())
            .collect();
        assert_eq!(recipes.len(), 4);
        assert_eq!(
            NmsEndpoint::CookingRecipesByOutput.path_prefix(),
            &["ItemInfo", "CookingByOutut"]
        );
        assert_eq!(
            NmsEndpoint::RefinerRecipesByInput.parameters()[0].0,
            "appId"
        );
    }
}
