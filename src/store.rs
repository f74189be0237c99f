//! Recipe, tag and plan lookups
//!
//! The crafting tree only talks to [`RecipeSource`]. [`JsonStore`] is the
//! shipped implementation: recipes and tags come from a JSON export
//! (`recipe.json`, `tag.json`), saved plans from a TOML file.

mod plans;
mod recipes;

use std::path::{Path, PathBuf};

use crate::error::{CraftError, CraftResult};
use crate::models::{IngredientRow, ItemId, RecipeRow};

pub use plans::PlanRepository;
pub use recipes::RecipeBook;

/// Lookup contract consumed by the tree node model.
///
/// Every call may fail; failures are not recovered by callers.
pub trait RecipeSource {
    /// Recipes producing `item`, ascending by recipe id
    fn recipes_for(&self, item: &str) -> CraftResult<Vec<RecipeRow>>;

    /// Ingredient slots of a recipe, in slot position order
    fn ingredients_for(&self, recipe_id: u32) -> CraftResult<Vec<IngredientRow>>;

    /// Items carrying `tag` (name without `#`), lexicographic
    fn items_for_tag(&self, tag: &str) -> CraftResult<Vec<String>>;

    fn plan_names(&self) -> CraftResult<Vec<String>>;

    fn plan_items(&self, plan: &str) -> CraftResult<Vec<(ItemId, u64)>>;

    /// Create or overwrite a plan
    fn save_plan(&self, name: &str, items: &[(ItemId, u64)]) -> CraftResult<()>;

    /// Replace the items of an existing plan
    fn replace_plan_items(&self, name: &str, items: &[(ItemId, u64)]) -> CraftResult<()>;
}

/// Recipe data held in memory plus a plans file on disk
pub struct JsonStore {
    book: RecipeBook,
    plans: PlanRepository,
}

impl JsonStore {
    pub fn new(book: RecipeBook, plans_path: PathBuf) -> Self {
        Self {
            book,
            plans: PlanRepository::with_path(plans_path),
        }
    }

    /// Load `recipe.json` and `tag.json` from `dir`.
    ///
    /// A missing `tag.json` is treated as "no tags".
    pub fn open(dir: &Path, plans_path: PathBuf) -> CraftResult<Self> {
        if !dir.is_dir() {
            return Err(CraftError::DataDirNotFound {
                path: dir.to_path_buf(),
            });
        }
        let book = RecipeBook::load_dir(dir)?;
        log::info!(
            "loaded {} recipes and {} tags from {}",
            book.recipe_count(),
            book.tag_count(),
            dir.display()
        );
        Ok(Self::new(book, plans_path))
    }

    pub fn plans(&self) -> &PlanRepository {
        &self.plans
    }
}

impl RecipeSource for JsonStore {
    fn recipes_for(&self, item: &str) -> CraftResult<Vec<RecipeRow>> {
        log::debug!("recipes_for {}", item);
        Ok(self.book.recipes_for(item))
    }

    fn ingredients_for(&self, recipe_id: u32) -> CraftResult<Vec<IngredientRow>> {
        log::debug!("ingredients_for {}", recipe_id);
        Ok(self.book.ingredients_for(recipe_id))
    }

    fn items_for_tag(&self, tag: &str) -> CraftResult<Vec<String>> {
        log::debug!("items_for_tag #{}", tag);
        Ok(self.book.items_for_tag(tag))
    }

    fn plan_names(&self) -> CraftResult<Vec<String>> {
        self.plans.names()
    }

    fn plan_items(&self, plan: &str) -> CraftResult<Vec<(ItemId, u64)>> {
        self.plans.items(plan)
    }

    fn save_plan(&self, name: &str, items: &[(ItemId, u64)]) -> CraftResult<()> {
        self.plans.save(name, items)
    }

    fn replace_plan_items(&self, name: &str, items: &[(ItemId, u64)]) -> CraftResult<()> {
        self.plans.replace_items(name, items)
    }
}
