//! Interactive browser: crafting tree on the left, requirements on the right.

use std::io::{self, Write};

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::style::{Print, ResetColor, SetForegroundColor};
use crossterm::{cursor, queue, terminal};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Editor, FuzzySelect, Input as TextInput};

use crate::aggregate::Requirements;
use crate::error::CraftResult;
use crate::models::ItemId;
use crate::tree::{parse_plan_text, plan_to_text, Input, Node, NodeKind, Prompter, TreeContext};

use super::list::{ListStyle, ListWidget};
use super::terminal::{key_to_input, Region, TerminalGuard, TerminalSurface};
use super::theme::{colors, vertical_rule};

const HELP: &str = "arrows move/cycle  enter expand  s split  tab focus  o open  e edit  w save  q quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Tree,
    Summary,
}

impl Focus {
    fn other(self) -> Self {
        match self {
            Focus::Tree => Focus::Summary,
            Focus::Summary => Focus::Tree,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Everything the browser has to ask the user outside the list widgets
pub trait Dialogs: Prompter {
    /// Choose one of `names`; `None` when cancelled
    fn pick_plan(&mut self, names: &[String]) -> Option<String>;

    /// Let the user edit plan text; `None` when unchanged or cancelled
    fn edit_plan(&mut self, text: &str) -> Option<String>;

    /// Name to save the current demands under
    fn plan_name(&mut self) -> Option<String>;
}

pub struct App<'a> {
    ctx: TreeContext<'a>,
    tree: ListWidget,
    summary: ListWidget,
    focus: Focus,
    /// Name of the plan shown in the tree, if any
    plan: Option<String>,
    status: String,
    /// Rows available to each list
    viewport: usize,
    unicode: bool,
}

impl<'a> App<'a> {
    pub fn new(
        ctx: TreeContext<'a>,
        root: Node,
        plan: Option<String>,
        style: ListStyle,
    ) -> CraftResult<Self> {
        let tree = ListWidget::with_style(root, &ctx, style)?;
        let summary =
            ListWidget::with_style(Node::requirements(Requirements::default()), &ctx, style)?;
        let mut app = Self {
            ctx,
            tree,
            summary,
            focus: Focus::Tree,
            plan,
            status: String::new(),
            viewport: 1,
            unicode: style.unicode,
        };
        app.refresh_summary()?;
        Ok(app)
    }

    pub fn tree(&self) -> &ListWidget {
        &self.tree
    }

    pub fn summary(&self) -> &ListWidget {
        &self.summary
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn plan(&self) -> Option<&str> {
        self.plan.as_deref()
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Snapshot currently shown in the requirements list
    pub fn requirements(&self) -> Option<&Requirements> {
        match self.summary.root().kind() {
            NodeKind::Requirements(requirements) => Some(requirements),
            _ => None,
        }
    }

    /// Rebuild the requirements list from the tree, keeping which groups are open
    fn refresh_summary(&mut self) -> CraftResult<()> {
        let (required, leftover) = self.tree.root_mut().ingredients(&self.ctx)?;

        let previous = self.summary.root();
        let open: Vec<bool> = previous
            .cached_children()
            .map(|groups| groups.iter().map(|g| g.expanded).collect())
            .unwrap_or_default();

        let mut root = Node::requirements(Requirements::from_pairs(required, leftover)?);
        root.expanded = previous.expanded;
        for (group, &was_open) in root.children(&self.ctx)?.iter_mut().zip(&open) {
            group.expanded = was_open;
        }

        self.summary.replace_root(root, &self.ctx)
    }

    fn replace_tree(&mut self, root: Node) -> CraftResult<()> {
        self.tree.replace_root(root, &self.ctx)?;
        self.refresh_summary()
    }

    /// Apply one input
    pub fn handle<D: Dialogs>(&mut self, input: Input, dialogs: &mut D) -> CraftResult<Flow> {
        self.status.clear();

        match input {
            Input::Quit => return Ok(Flow::Quit),
            Input::Char('\t') => self.focus = self.focus.other(),
            Input::Char('o') => self.open_plan(dialogs)?,
            Input::Char('e') => self.edit_plan(dialogs)?,
            Input::Char('w') => self.save_plan(dialogs)?,
            _ => match self.focus {
                Focus::Tree => {
                    self.tree.input(input, self.viewport, &self.ctx, dialogs)?;
                    self.refresh_summary()?;
                }
                Focus::Summary => {
                    self.summary.input(input, self.viewport, &self.ctx, dialogs)?;
                }
            },
        }

        Ok(Flow::Continue)
    }

    fn open_plan<D: Dialogs>(&mut self, dialogs: &mut D) -> CraftResult<()> {
        let names = self.ctx.source.plan_names()?;
        if names.is_empty() {
            self.status = "no saved plans".to_string();
            return Ok(());
        }
        let Some(name) = dialogs.pick_plan(&names) else {
            return Ok(());
        };

        let root = Node::plan(&self.ctx, &name)?;
        self.replace_tree(root)?;
        self.status = format!("opened plan '{}'", name);
        self.plan = Some(name);
        Ok(())
    }

    fn edit_plan<D: Dialogs>(&mut self, dialogs: &mut D) -> CraftResult<()> {
        let Some(name) = self.plan.clone() else {
            self.status = "no plan open (w saves one)".to_string();
            return Ok(());
        };

        let text = plan_to_text(&self.ctx.source.plan_items(&name)?);
        let Some(edited) = dialogs.edit_plan(&text) else {
            return Ok(());
        };

        let items = parse_plan_text(&edited);
        self.ctx.source.replace_plan_items(&name, &items)?;
        self.replace_tree(Node::plan_with_entries(&name, items))?;
        self.status = format!("updated plan '{}'", name);
        Ok(())
    }

    fn save_plan<D: Dialogs>(&mut self, dialogs: &mut D) -> CraftResult<()> {
        let Some(name) = dialogs.plan_name() else {
            return Ok(());
        };

        let items: Vec<(ItemId, u64)> = self.tree.root().demands();
        self.ctx.source.save_plan(&name, &items)?;
        self.status = format!("saved {} item(s) as '{}'", items.len(), name);
        self.plan = Some(name);
        Ok(())
    }

    /// Paint both lists and the status line into a `width` x `height` screen
    pub fn draw<W: Write>(
        &mut self,
        out: &mut W,
        width: u16,
        height: u16,
        color: bool,
    ) -> io::Result<()> {
        let body = height.saturating_sub(1);
        self.viewport = usize::from(body).max(1);

        let tree_width = width.saturating_mul(2) / 3;
        let tree_region = Region {
            x: 0,
            y: 0,
            width: tree_width,
            height: body,
        };
        let summary_region = Region {
            x: tree_width.saturating_add(1),
            y: 0,
            width: width.saturating_sub(tree_width).saturating_sub(1),
            height: body,
        };

        self.tree.draw(
            &mut TerminalSurface::new(out, tree_region, color),
            self.focus == Focus::Tree,
        )?;
        self.summary.draw(
            &mut TerminalSurface::new(out, summary_region, color),
            self.focus == Focus::Summary,
        )?;

        let rule = vertical_rule(self.unicode);
        for row in 0..body {
            queue!(out, cursor::MoveTo(tree_width, row))?;
            if color {
                queue!(out, SetForegroundColor(colors::DIM), Print(rule), ResetColor)?;
            } else {
                queue!(out, Print(rule))?;
            }
        }

        let status = if self.status.is_empty() {
            HELP
        } else {
            self.status.as_str()
        };
        let status: String = status.chars().take(usize::from(width)).collect();
        queue!(
            out,
            cursor::MoveTo(0, body),
            terminal::Clear(terminal::ClearType::CurrentLine),
            Print(status)
        )?;
        out.flush()
    }
}

/// Dialogs shown on the normal screen while the browser is suspended
pub struct TerminalDialogs {
    guard: TerminalGuard,
    theme: ColorfulTheme,
}

impl TerminalDialogs {
    pub fn new(guard: TerminalGuard) -> Self {
        Self {
            guard,
            theme: ColorfulTheme::default(),
        }
    }

    fn suspended<T>(
        &mut self,
        dialog: impl FnOnce(&ColorfulTheme) -> Result<Option<T>, dialoguer::Error>,
    ) -> Option<T> {
        if let Err(err) = self.guard.suspend() {
            log::error!("could not leave raw mode: {}", err);
            return None;
        }
        let result = dialog(&self.theme);
        if let Err(err) = self.guard.resume() {
            log::error!("could not restore raw mode: {}", err);
        }

        match result {
            Ok(value) => value,
            Err(err) => {
                log::warn!("dialog failed: {}", err);
                None
            }
        }
    }
}

impl Prompter for TerminalDialogs {
    fn split_point(&mut self, item: &ItemId, count: u64) -> Option<String> {
        self.suspended(|theme| {
            TextInput::<String>::with_theme(theme)
                .with_prompt(format!("Split {} {} after", count, item))
                .allow_empty(true)
                .interact_text()
                .map(Some)
        })
    }
}

impl Dialogs for TerminalDialogs {
    fn pick_plan(&mut self, names: &[String]) -> Option<String> {
        self.suspended(|theme| {
            FuzzySelect::with_theme(theme)
                .with_prompt("Open plan")
                .items(names)
                .default(0)
                .interact_opt()
                .map(|choice| choice.and_then(|i| names.get(i).cloned()))
        })
    }

    fn edit_plan(&mut self, text: &str) -> Option<String> {
        self.suspended(|_| Editor::new().edit(text).map_err(dialoguer::Error::from))
    }

    fn plan_name(&mut self) -> Option<String> {
        self.suspended(|theme| {
            TextInput::<String>::with_theme(theme)
                .with_prompt("Save plan as")
                .interact_text()
                .map(|name| Some(name.trim().to_string()).filter(|n| !n.is_empty()))
        })
    }
}

/// Run the browser until the user quits. The terminal is restored on every exit path.
pub fn run_interactive(
    ctx: TreeContext<'_>,
    root: Node,
    plan: Option<String>,
    style: ListStyle,
    color: bool,
) -> CraftResult<()> {
    let mut app = App::new(ctx, root, plan, style)?;
    let mut dialogs = TerminalDialogs::new(TerminalGuard::enter()?);
    let mut stdout = io::stdout();

    loop {
        let (width, height) = terminal::size()?;
        app.draw(&mut stdout, width, height, color)?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        let Some(input) = key_to_input(key) else {
            continue;
        };
        if app.handle(input, &mut dialogs)? == Flow::Quit {
            break;
        }
    }

    log::debug!("browser closed");
    Ok(())
}
