//! Plan item lists as editable text, one `<count> <item>` per line

use crate::models::ItemId;

use super::node::Pair;

pub fn plan_to_text(items: &[Pair]) -> String {
    let mut out = String::new();
    for (item, count) in items {
        out.push_str(&format!("{} {}\n", count, item));
    }
    out
}

/// Parse edited plan text. Lines without a positive count or an item are dropped.
pub fn parse_plan_text(text: &str) -> Vec<Pair> {
    text.lines().filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<Pair> {
    let line = line.trim();
    if line.is_empty() || line.starts_with("//") {
        return None;
    }
    let mut words = line.split_whitespace();
    let count: u64 = words.next()?.parse().ok()?;
    let item = words.next()?;
    if count == 0 {
        return None;
    }
    Some((ItemId::parse(item), count))
}
