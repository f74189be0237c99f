//! In-memory recipe book loaded from the JSON export

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{CraftError, CraftResult};
use crate::models::{IngredientRow, ItemId, RecipeRow, TAG_PREFIX};

#[derive(Debug, Deserialize)]
struct RawRecipe {
    id: u32,
    #[serde(rename = "type", default)]
    craft_type: String,
    #[serde(default)]
    ingredients: Vec<RawIngredient>,
    result: RawResult,
}

#[derive(Debug, Deserialize)]
struct RawIngredient {
    #[serde(default)]
    position: u32,
    #[serde(default)]
    item: Option<String>,
    #[serde(default)]
    tag: Option<String>,
    #[serde(default = "default_count")]
    count: u64,
}

#[derive(Debug, Deserialize)]
struct RawResult {
    id: String,
    #[serde(default = "default_count")]
    count: u64,
}

#[derive(Debug, Deserialize)]
struct RawTag {
    tag: String,
    #[serde(default)]
    items: Vec<String>,
}

fn default_count() -> u64 {
    1
}

/// Recipes indexed by result item, ingredient rows by recipe, tag members by tag
#[derive(Debug, Clone, Default)]
pub struct RecipeBook {
    by_result: HashMap<String, Vec<RecipeRow>>,
    ingredients: HashMap<u32, Vec<IngredientRow>>,
    tags: HashMap<String, Vec<String>>,
}

impl RecipeBook {
    /// Load `recipe.json` (required) and `tag.json` (optional) from `dir`
    pub fn load_dir(dir: &Path) -> CraftResult<Self> {
        let mut book = RecipeBook::default();

        let recipe_path = dir.join("recipe.json");
        let content = fs::read_to_string(&recipe_path)?;
        let recipes: Vec<RawRecipe> =
            serde_json::from_str(&content).map_err(|e| CraftError::Json {
                file: recipe_path.clone(),
                message: e.to_string(),
            })?;
        for raw in recipes {
            book.add_raw(raw);
        }

        let tag_path = dir.join("tag.json");
        if tag_path.exists() {
            let content = fs::read_to_string(&tag_path)?;
            let tags: Vec<RawTag> =
                serde_json::from_str(&content).map_err(|e| CraftError::Json {
                    file: tag_path.clone(),
                    message: e.to_string(),
                })?;
            for raw in tags {
                book.add_tag(&raw.tag, raw.items);
            }
        }

        Ok(book)
    }

    fn add_raw(&mut self, raw: RawRecipe) {
        let mut slots = raw.ingredients;
        slots.sort_by_key(|slot| slot.position);
        let rows = slots
            .into_iter()
            .map(|slot| IngredientRow {
                item: slot.item,
                tag: slot.tag,
                quantity: slot.count,
            })
            .collect();
        self.add_recipe_rows(raw.id, &raw.craft_type, &raw.result.id, raw.result.count, rows);
    }

    /// Register a recipe with `(ingredient, quantity)` slots in position order
    pub fn add_recipe(
        &mut self,
        id: u32,
        craft_type: &str,
        result: &str,
        result_count: u64,
        ingredients: Vec<(ItemId, u64)>,
    ) {
        let rows = ingredients
            .into_iter()
            .map(|(id, quantity)| match id {
                ItemId::Item(name) => IngredientRow {
                    item: Some(name),
                    tag: None,
                    quantity,
                },
                ItemId::Tag(name) => IngredientRow {
                    item: None,
                    tag: Some(name),
                    quantity,
                },
            })
            .collect();
        self.add_recipe_rows(id, craft_type, result, result_count, rows);
    }

    fn add_recipe_rows(
        &mut self,
        id: u32,
        craft_type: &str,
        result: &str,
        result_count: u64,
        rows: Vec<IngredientRow>,
    ) {
        let result_count = if result_count == 0 {
            log::warn!("recipe {} produces 0 {}; treating as 1", id, result);
            1
        } else {
            result_count
        };
        let recipes = self.by_result.entry(result.to_string()).or_default();
        recipes.push(RecipeRow {
            id,
            craft_type: craft_type.to_string(),
            result_count,
        });
        recipes.sort_by_key(|r| r.id);
        self.ingredients.insert(id, rows);
    }

    /// Register tag members; the tag may be given with or without `#`
    pub fn add_tag(&mut self, tag: &str, items: Vec<String>) {
        let name = tag.strip_prefix(TAG_PREFIX).unwrap_or(tag);
        let members = self.tags.entry(name.to_string()).or_default();
        members.extend(items);
        members.sort();
        members.dedup();
    }

    pub fn recipes_for(&self, item: &str) -> Vec<RecipeRow> {
        self.by_result.get(item).cloned().unwrap_or_default()
    }

    pub fn ingredients_for(&self, recipe_id: u32) -> Vec<IngredientRow> {
        self.ingredients.get(&recipe_id).cloned().unwrap_or_default()
    }

    pub fn items_for_tag(&self, tag: &str) -> Vec<String> {
        let name = tag.strip_prefix(TAG_PREFIX).unwrap_or(tag);
        self.tags.get(name).cloned().unwrap_or_default()
    }

    pub fn recipe_count(&self) -> usize {
        self.ingredients.len()
    }

    pub fn tag_count(&self) -> usize {
        self.tags.len()
    }
}
