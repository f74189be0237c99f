//! Tree nodes
//!
//! A [`Node`] pairs the expansion flag and the lazily built child cache
//! with a [`NodeKind`] that decides what the children are. Children are
//! rebuilt from scratch whenever the node's own choice or split changes.

use crate::aggregate::Requirements;
use crate::error::{CraftError, CraftResult};
use crate::models::{IngredientRow, ItemId, RecipeRow};
use crate::units::UnitTable;

use super::chooser::Chooser;
use super::title::{SpanStyle, Title};
use super::{Input, Prompter, TreeContext, SPLIT_KEY};

/// `(item, quantity)`
pub type Pair = (ItemId, u64);

/// `(required, leftover)` pairs contributed by a subtree
pub type Contribution = (Vec<Pair>, Vec<Pair>);

/// Depth limit for [`Node::expand_all`]; recipe graphs are assumed acyclic
/// but real data sets are not always.
pub const AUTO_EXPAND_DEPTH: usize = 32;

/// A demanded item or tag, optionally split into two independent halves
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientNode {
    pub item: ItemId,
    pub count: u64,
    pub split: Option<[u64; 2]>,
}

/// The recipes that can produce `item`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeNode {
    pub item: String,
    pub count: u64,
    pub recipes: Chooser<RecipeRow>,
    /// Deduplicated, execution-scaled ingredients of the chosen recipe
    ingredients: Option<Vec<Pair>>,
}

/// The concrete items carrying `tag`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagNode {
    pub tag: String,
    pub count: u64,
    pub items: Chooser<String>,
}

/// A saved plan's demand list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanNode {
    pub name: String,
    pub entries: Vec<Pair>,
}

/// A labelled group of amounts in the requirements view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingNode {
    pub label: String,
    pub entries: Vec<Pair>,
}

/// A plain item amount
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmountNode {
    pub item: ItemId,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Ingredient(IngredientNode),
    Recipe(RecipeNode),
    Tag(TagNode),
    Plan(PlanNode),
    Requirements(Requirements),
    Heading(HeadingNode),
    Amount(AmountNode),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub expanded: bool,
    /// `None` means "needs recompute"
    children: Option<Vec<Node>>,
    kind: NodeKind,
}

impl Node {
    fn with_kind(kind: NodeKind) -> Self {
        Self {
            expanded: false,
            children: None,
            kind,
        }
    }

    /// An item or tag demand; no lookup happens until it is expanded
    pub fn ingredient(item: ItemId, count: u64) -> Self {
        Self::with_kind(NodeKind::Ingredient(IngredientNode {
            item,
            count,
            split: None,
        }))
    }

    /// Recipe chooser for `item`, candidates ordered by recipe id
    pub fn recipe(ctx: &TreeContext<'_>, item: &str, count: u64) -> CraftResult<Self> {
        let recipes = ctx.source.recipes_for(item)?;
        Ok(Self::with_kind(NodeKind::Recipe(RecipeNode {
            item: item.to_string(),
            count,
            recipes: Chooser::new(recipes),
            ingredients: None,
        })))
    }

    /// Item chooser for `tag` (name without `#`)
    pub fn tag(ctx: &TreeContext<'_>, tag: &str, count: u64) -> CraftResult<Self> {
        let items = ctx.source.items_for_tag(tag)?;
        Ok(Self::with_kind(NodeKind::Tag(TagNode {
            tag: tag.to_string(),
            count,
            items: Chooser::new(items),
        })))
    }

    /// Root for a saved plan; an empty plan yields a node with no children
    pub fn plan(ctx: &TreeContext<'_>, name: &str) -> CraftResult<Self> {
        let entries = ctx.source.plan_items(name)?;
        Ok(Self::plan_with_entries(name, entries))
    }

    pub fn plan_with_entries(name: &str, entries: Vec<Pair>) -> Self {
        let mut node = Self::with_kind(NodeKind::Plan(PlanNode {
            name: name.to_string(),
            entries,
        }));
        node.expanded = true;
        node
    }

    /// Root of the requirements view: "Required" and "Leftover" groups
    pub fn requirements(requirements: Requirements) -> Self {
        let mut node = Self::with_kind(NodeKind::Requirements(requirements));
        node.expanded = true;
        node
    }

    pub fn heading(label: impl Into<String>, entries: Vec<Pair>) -> Self {
        let mut node = Self::with_kind(NodeKind::Heading(HeadingNode {
            label: label.into(),
            entries,
        }));
        node.expanded = true;
        node
    }

    pub fn amount(item: ItemId, count: u64) -> Self {
        Self::with_kind(NodeKind::Amount(AmountNode { item, count }))
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// Cached children, if computed and still valid
    pub fn cached_children(&self) -> Option<&[Node]> {
        self.children.as_deref()
    }

    /// Drop cached children so the next read rebuilds them
    pub fn invalidate(&mut self) {
        self.children = None;
        if let NodeKind::Recipe(recipe) = &mut self.kind {
            recipe.ingredients = None;
        }
    }

    /// Children, computing and caching them first if needed
    pub fn children(&mut self, ctx: &TreeContext<'_>) -> CraftResult<&mut Vec<Node>> {
        let children = match self.children.take() {
            Some(children) => children,
            None => self.compute_children(ctx)?,
        };
        Ok(self.children.insert(children))
    }

    fn compute_children(&mut self, ctx: &TreeContext<'_>) -> CraftResult<Vec<Node>> {
        match &mut self.kind {
            NodeKind::Ingredient(ingredient) => match ingredient.split {
                Some(parts) => Ok(parts
                    .iter()
                    .map(|&part| Node::ingredient(ingredient.item.clone(), part))
                    .collect()),
                None => match &ingredient.item {
                    ItemId::Tag(tag) => Ok(vec![Node::tag(ctx, tag, ingredient.count)?]),
                    ItemId::Item(item) => Ok(vec![Node::recipe(ctx, item, ingredient.count)?]),
                },
            },
            NodeKind::Recipe(recipe) => {
                let scaled = recipe.scaled_ingredients(ctx)?;
                let children = scaled
                    .iter()
                    .map(|(item, count)| Node::ingredient(item.clone(), *count))
                    .collect();
                recipe.ingredients = Some(scaled);
                Ok(children)
            }
            NodeKind::Tag(tag) => Ok(tag
                .items
                .chosen()
                .map(|item| Node::ingredient(ItemId::item(item.clone()), tag.count))
                .into_iter()
                .collect()),
            NodeKind::Plan(plan) => Ok(plan
                .entries
                .iter()
                .map(|(item, count)| Node::ingredient(item.clone(), *count))
                .collect()),
            NodeKind::Requirements(requirements) => Ok(vec![
                Node::heading("Required", into_pairs(&requirements.required)),
                Node::heading("Leftover", into_pairs(&requirements.leftover)),
            ]),
            NodeKind::Heading(heading) => Ok(heading
                .entries
                .iter()
                .map(|(item, count)| Node::amount(item.clone(), *count))
                .collect()),
            NodeKind::Amount(_) => Ok(Vec::new()),
        }
    }

    /// Flip `expanded`. A split node stays expanded while split.
    pub fn toggle(&mut self) {
        if let NodeKind::Ingredient(IngredientNode { split: Some(_), .. }) = self.kind {
            self.expanded = true;
            return;
        }
        self.expanded = !self.expanded;
    }

    /// React to a non-navigation input addressed to this node
    pub fn input(&mut self, input: &Input, prompt: &mut dyn Prompter) {
        let changed = match (&mut self.kind, input) {
            (NodeKind::Recipe(recipe), Input::Left) => recipe.recipes.cycle(-1),
            (NodeKind::Recipe(recipe), Input::Right) => recipe.recipes.cycle(1),
            (NodeKind::Tag(tag), Input::Left) => tag.items.cycle(-1),
            (NodeKind::Tag(tag), Input::Right) => tag.items.cycle(1),
            (NodeKind::Ingredient(ingredient), Input::Char(SPLIT_KEY)) => {
                ingredient.toggle_split(prompt)
            }
            _ => false,
        };
        if changed {
            if let NodeKind::Ingredient(IngredientNode { split: Some(_), .. }) = self.kind {
                self.expanded = true;
            }
            self.invalidate();
        }
    }

    /// Whether expanding can reveal anything, judged without a lookup
    pub fn is_expandable(&self) -> bool {
        match &self.kind {
            NodeKind::Recipe(recipe) => !recipe.recipes.is_empty(),
            NodeKind::Tag(tag) => !tag.items.is_empty(),
            NodeKind::Plan(plan) => !plan.entries.is_empty(),
            NodeKind::Heading(heading) => !heading.entries.is_empty(),
            NodeKind::Amount(_) => false,
            NodeKind::Ingredient(_) | NodeKind::Requirements(_) => true,
        }
    }

    pub fn title(&self, units: &UnitTable) -> Title {
        match &self.kind {
            NodeKind::Ingredient(ingredient) => {
                let mut title = amount_title(&ingredient.item, ingredient.count, units);
                if let Some([a, b]) = ingredient.split {
                    title.push(format!("  (split {} + {})", a, b), SpanStyle::Dim);
                }
                title
            }
            NodeKind::Recipe(recipe) => match recipe.recipes.chosen() {
                None => Title::styled("(no recipes)", SpanStyle::Missing),
                Some(row) => {
                    let label = format!("[{} via {}]", row.id, row.craft_type);
                    chooser_title(label, recipe.recipes.is_cyclable())
                }
            },
            NodeKind::Tag(tag) => match tag.items.chosen() {
                None => Title::styled("(no items)", SpanStyle::Missing),
                Some(item) => chooser_title(item.clone(), tag.items.is_cyclable()),
            },
            NodeKind::Plan(plan) => Title::styled("Plan: ", SpanStyle::Dim)
                .with(plan.name.clone(), SpanStyle::Heading),
            NodeKind::Requirements(_) => Title::styled("Requirements", SpanStyle::Heading),
            NodeKind::Heading(heading) => Title::styled(heading.label.clone(), SpanStyle::Heading)
                .with(format!(" ({})", heading.entries.len()), SpanStyle::Dim),
            NodeKind::Amount(amount) => amount_title(&amount.item, amount.count, units),
        }
    }

    /// Required and leftover pairs for this subtree.
    ///
    /// An unexpanded crafting node is obtained directly: it contributes
    /// `(item, count)` as required and nothing left over. An expanded one
    /// concatenates its children's contributions; a recipe additionally
    /// reports the surplus of its last batch.
    pub fn ingredients(&mut self, ctx: &TreeContext<'_>) -> CraftResult<Contribution> {
        let leaf = match &self.kind {
            NodeKind::Ingredient(ingredient) => {
                Some((ingredient.item.clone(), ingredient.count))
            }
            NodeKind::Recipe(recipe) => Some((ItemId::item(recipe.item.clone()), recipe.count)),
            NodeKind::Tag(tag) => Some((ItemId::tag(tag.tag.clone()), tag.count)),
            NodeKind::Plan(_) => None,
            NodeKind::Requirements(_) | NodeKind::Heading(_) | NodeKind::Amount(_) => {
                return Ok((Vec::new(), Vec::new()))
            }
        };

        let unresolvable = match &self.kind {
            NodeKind::Recipe(recipe) => recipe.recipes.is_empty(),
            NodeKind::Tag(tag) => tag.items.is_empty(),
            _ => false,
        };
        if let Some(pair) = leaf {
            if !self.expanded || unresolvable {
                return Ok((vec![pair], Vec::new()));
            }
        }

        let (required, mut leftover) = self.composite(ctx)?;

        if let NodeKind::Recipe(recipe) = &self.kind {
            if let Some(row) = recipe.recipes.chosen() {
                let surplus = batch_surplus(recipe.count, row.result_count)
                    .ok_or_else(|| overflow(&recipe.item))?;
                if surplus > 0 {
                    leftover.push((ItemId::item(recipe.item.clone()), surplus));
                }
            }
        }

        Ok((required, leftover))
    }

    fn composite(&mut self, ctx: &TreeContext<'_>) -> CraftResult<Contribution> {
        let mut required = Vec::new();
        let mut leftover = Vec::new();
        for child in self.children(ctx)?.iter_mut() {
            let (child_required, child_leftover) = child.ingredients(ctx)?;
            required.extend(child_required);
            leftover.extend(child_leftover);
        }
        Ok((required, leftover))
    }

    /// The demand this root stands for, undivided by splits
    pub fn demands(&self) -> Vec<Pair> {
        match &self.kind {
            NodeKind::Plan(plan) => plan.entries.clone(),
            NodeKind::Ingredient(ingredient) => vec![(ingredient.item.clone(), ingredient.count)],
            NodeKind::Recipe(recipe) => vec![(ItemId::item(recipe.item.clone()), recipe.count)],
            NodeKind::Tag(tag) => vec![(ItemId::tag(tag.tag.clone()), tag.count)],
            NodeKind::Requirements(_) | NodeKind::Heading(_) | NodeKind::Amount(_) => Vec::new(),
        }
    }

    /// Expand this subtree with the current choices, down to `max_depth` levels
    pub fn expand_all(&mut self, ctx: &TreeContext<'_>, max_depth: usize) -> CraftResult<()> {
        if max_depth == 0 || !self.is_expandable() {
            return Ok(());
        }
        self.expanded = true;
        for child in self.children(ctx)?.iter_mut() {
            child.expand_all(ctx, max_depth - 1)?;
        }
        Ok(())
    }

    /// Descendant at `path` (child indices), using cached children only
    pub fn node_at_path_mut(&mut self, path: &[usize]) -> Option<&mut Node> {
        match path.split_first() {
            None => Some(self),
            Some((&idx, rest)) => self.children.as_mut()?.get_mut(idx)?.node_at_path_mut(rest),
        }
    }

    pub fn node_at_path(&self, path: &[usize]) -> Option<&Node> {
        match path.split_first() {
            None => Some(self),
            Some((&idx, rest)) => self.children.as_ref()?.get(idx)?.node_at_path(rest),
        }
    }
}

impl IngredientNode {
    /// Clear an existing split, or ask for a split point and apply it
    fn toggle_split(&mut self, prompt: &mut dyn Prompter) -> bool {
        if self.split.take().is_some() {
            return true;
        }
        if self.count < 2 {
            return false;
        }
        let Some(raw) = prompt.split_point(&self.item, self.count) else {
            return false;
        };
        match parse_split_point(&raw, self.count) {
            Some(point) => {
                self.split = Some([point, self.count - point]);
                true
            }
            None => {
                log::warn!(
                    "ignoring split point '{}' for {} {}",
                    raw.trim(),
                    self.count,
                    self.item
                );
                false
            }
        }
    }
}

impl RecipeNode {
    /// Ingredients of the chosen recipe, summed per distinct ingredient in
    /// first-seen order and multiplied by the number of executions
    fn scaled_ingredients(&self, ctx: &TreeContext<'_>) -> CraftResult<Vec<Pair>> {
        let Some(row) = self.recipes.chosen() else {
            return Ok(Vec::new());
        };
        let runs = executions(self.count, row.result_count);
        let rows = ctx.source.ingredients_for(row.id)?;
        dedup_rows(row.id, &rows)?
            .into_iter()
            .map(|(item, per_craft)| match per_craft.checked_mul(runs) {
                Some(total) => Ok((item, total)),
                None => Err(overflow(&item)),
            })
            .collect()
    }

    /// Cached scaled ingredients, present once children were built
    pub fn ingredients(&self) -> Option<&[Pair]> {
        self.ingredients.as_deref()
    }
}

fn dedup_rows(recipe_id: u32, rows: &[IngredientRow]) -> CraftResult<Vec<Pair>> {
    let mut merged: Vec<Pair> = Vec::new();
    for row in rows {
        let Some(id) = row.id() else {
            log::warn!("recipe {} has an ingredient with neither item nor tag", recipe_id);
            continue;
        };
        match merged.iter_mut().find(|(existing, _)| *existing == id) {
            Some((_, quantity)) => {
                *quantity = quantity
                    .checked_add(row.quantity)
                    .ok_or_else(|| overflow(&id))?
            }
            None => merged.push((id, row.quantity)),
        }
    }
    Ok(merged)
}

/// Recipe runs needed so that `runs * result_count >= count`
pub fn executions(count: u64, result_count: u64) -> u64 {
    count.div_ceil(result_count.max(1))
}

/// Units produced beyond `count` by whole batches of `result_count`;
/// `None` when the batches would hold more than `u64::MAX`
pub fn batch_surplus(count: u64, result_count: u64) -> Option<u64> {
    let produced = executions(count, result_count).checked_mul(result_count.max(1))?;
    Some(produced - count)
}

fn overflow(item: impl std::fmt::Display) -> CraftError {
    CraftError::QuantityOverflow {
        item: item.to_string(),
    }
}

/// A split point must be an integer strictly between 0 and `count`
fn parse_split_point(raw: &str, count: u64) -> Option<u64> {
    let point: u64 = raw.trim().parse().ok()?;
    (point > 0 && point < count).then_some(point)
}

fn amount_title(item: &ItemId, count: u64, units: &UnitTable) -> Title {
    let style = if item.is_tag() {
        SpanStyle::Tag
    } else {
        SpanStyle::Plain
    };
    Title::styled(count.to_string(), SpanStyle::Quantity)
        .with(format!(" ({}) ", units.render(count)), SpanStyle::Dim)
        .with(item.to_string(), style)
}

fn chooser_title(label: String, cyclable: bool) -> Title {
    if cyclable {
        Title::styled(format!("< {} >", label), SpanStyle::Cyclable)
    } else {
        Title::plain(label)
    }
}

fn into_pairs(totals: &std::collections::BTreeMap<ItemId, u64>) -> Vec<Pair> {
    totals
        .iter()
        .map(|(item, count)| (item.clone(), *count))
        .collect()
}
