//! Expandable list widget
//!
//! Owns a root [`Node`], flattens its expanded part into rows, keeps a
//! cursor and scroll offset, and routes input either to the cursor or to
//! the node under it. Rows are re-flattened after every delegated input.

use std::io;

use crate::error::CraftResult;
use crate::tree::{Input, Node, Prompter, SpanStyle, Title, TreeContext};

use super::theme::expansion_icon;

/// One visible row: where the node sits in the tree and how it looks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatRow {
    /// Child indices from the root
    pub path: Vec<usize>,
    pub depth: usize,
    pub title: Title,
    pub expanded: bool,
    pub expandable: bool,
}

/// Depth-first, pre-order rows of the expanded part of `root`.
///
/// Children of expanded nodes are computed on demand and cached.
pub fn flatten(root: &mut Node, ctx: &TreeContext<'_>) -> CraftResult<Vec<FlatRow>> {
    let mut rows = Vec::new();
    let mut path = Vec::new();
    flatten_into(root, ctx, 0, &mut path, &mut rows)?;
    Ok(rows)
}

fn flatten_into(
    node: &mut Node,
    ctx: &TreeContext<'_>,
    depth: usize,
    path: &mut Vec<usize>,
    rows: &mut Vec<FlatRow>,
) -> CraftResult<()> {
    rows.push(FlatRow {
        path: path.clone(),
        depth,
        title: node.title(ctx.units),
        expanded: node.expanded,
        expandable: node.is_expandable(),
    });

    if node.expanded {
        for (i, child) in node.children(ctx)?.iter_mut().enumerate() {
            path.push(i);
            flatten_into(child, ctx, depth + 1, path, rows)?;
            path.pop();
        }
    }

    Ok(())
}

/// Something rows can be drawn onto
pub trait Surface {
    /// Visible rows
    fn height(&self) -> usize;

    fn clear(&mut self) -> io::Result<()>;

    fn draw_row(
        &mut self,
        row: usize,
        indent: usize,
        title: &Title,
        highlighted: bool,
    ) -> io::Result<()>;
}

/// In-memory surface; highlighted rows are marked with `> `
#[derive(Debug, Clone)]
pub struct TextSurface {
    height: usize,
    lines: Vec<String>,
}

impl TextSurface {
    pub fn new(height: usize) -> Self {
        Self {
            height,
            lines: Vec::new(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_string(self) -> String {
        self.lines.join("\n")
    }
}

impl Surface for TextSurface {
    fn height(&self) -> usize {
        self.height
    }

    fn clear(&mut self) -> io::Result<()> {
        self.lines.clear();
        Ok(())
    }

    fn draw_row(
        &mut self,
        row: usize,
        indent: usize,
        title: &Title,
        highlighted: bool,
    ) -> io::Result<()> {
        if self.lines.len() <= row {
            self.lines.resize(row + 1, String::new());
        }
        let cursor = if highlighted { "> " } else { "  " };
        self.lines[row] = format!("{}{}{}", cursor, " ".repeat(indent), title);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListStyle {
    /// Columns per depth level
    pub indent: usize,
    pub unicode: bool,
}

impl Default for ListStyle {
    fn default() -> Self {
        Self {
            indent: 2,
            unicode: true,
        }
    }
}

pub struct ListWidget {
    root: Node,
    items: Vec<FlatRow>,
    cursor: usize,
    scroll: usize,
    style: ListStyle,
}

impl ListWidget {
    pub fn new(root: Node, ctx: &TreeContext<'_>) -> CraftResult<Self> {
        Self::with_style(root, ctx, ListStyle::default())
    }

    pub fn with_style(root: Node, ctx: &TreeContext<'_>, style: ListStyle) -> CraftResult<Self> {
        let mut widget = Self {
            root,
            items: Vec::new(),
            cursor: 0,
            scroll: 0,
            style,
        };
        widget.refresh(ctx)?;
        Ok(widget)
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Node {
        &mut self.root
    }

    pub fn items(&self) -> &[FlatRow] {
        &self.items
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    /// Node under the cursor
    pub fn selected(&self) -> Option<&Node> {
        let row = self.items.get(self.cursor)?;
        self.root.node_at_path(&row.path)
    }

    /// Swap in a new root, keeping the cursor where possible
    pub fn replace_root(&mut self, root: Node, ctx: &TreeContext<'_>) -> CraftResult<()> {
        self.root = root;
        self.refresh(ctx)
    }

    /// Re-flatten the tree
    pub fn refresh(&mut self, ctx: &TreeContext<'_>) -> CraftResult<()> {
        self.items = flatten(&mut self.root, ctx)?;
        if !self.items.is_empty() && self.cursor >= self.items.len() {
            self.cursor = self.items.len() - 1;
        }
        Ok(())
    }

    /// Scroll the least amount that brings `line` into a window of `height` rows
    pub fn scroll_to(&mut self, height: usize, line: usize) {
        let height = height.max(1);
        if line < self.scroll {
            self.scroll = line;
        } else if line >= self.scroll + height {
            self.scroll = line + 1 - height;
        }
    }

    /// Handle one input; `height` is the viewport the list is shown in
    pub fn input(
        &mut self,
        input: Input,
        height: usize,
        ctx: &TreeContext<'_>,
        prompt: &mut dyn Prompter,
    ) -> CraftResult<()> {
        match input {
            Input::Up => {
                self.cursor = self.cursor.saturating_sub(1);
                return Ok(());
            }
            Input::Down => {
                if self.cursor + 1 < self.items.len() {
                    self.cursor += 1;
                }
                return Ok(());
            }
            _ => {}
        }

        let Some(path) = self.items.get(self.cursor).map(|row| row.path.clone()) else {
            return Ok(());
        };
        let Some(node) = self.root.node_at_path_mut(&path) else {
            return Ok(());
        };

        if input == Input::Select {
            node.toggle();
            // Show the revealed subtree if it fits, but never push the node itself off the top.
            let visible = flatten(node, ctx)?.len();
            self.scroll_to(height, self.cursor + visible - 1);
            self.scroll_to(height, self.cursor);
        } else {
            node.input(&input, prompt);
        }

        self.refresh(ctx)
    }

    fn row_title(&self, row: &FlatRow) -> Title {
        let icon = expansion_icon(row.expandable, row.expanded, self.style.unicode);
        let mut title = Title::styled(format!("{} ", icon), SpanStyle::Dim);
        for span in row.title.spans() {
            title.push(span.text.clone(), span.style);
        }
        title
    }

    /// Draw the visible window, keeping the cursor row on screen
    pub fn draw(&mut self, surface: &mut dyn Surface, focused: bool) -> io::Result<()> {
        let height = surface.height();
        self.scroll_to(height, self.cursor);
        surface.clear()?;

        for (row, item) in self
            .items
            .iter()
            .skip(self.scroll)
            .take(height)
            .enumerate()
        {
            let title = self.row_title(item);
            let highlighted = focused && row + self.scroll == self.cursor;
            surface.draw_row(row, item.depth * self.style.indent, &title, highlighted)?;
        }

        Ok(())
    }

    /// Draw into a [`TextSurface`] of `height` rows and return its text
    pub fn render(&mut self, height: usize, focused: bool) -> String {
        let mut surface = TextSurface::new(height);
        match self.draw(&mut surface, focused) {
            Ok(()) => surface.into_string(),
            Err(_) => String::new(),
        }
    }
}
