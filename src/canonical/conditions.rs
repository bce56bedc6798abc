//! Order-insensitive comparison of `WHERE` predicates.
//!
//! The clause is cut into `AND` groups and `OR` alternatives purely by text,
//! so `BETWEEN 1 AND 5` or a nested subquery are split as well. Both sides of
//! a comparison get the same treatment, which is all exact matching needs.

use std::sync::LazyLock;

use regex::Regex;
use smallvec::SmallVec;

/// From `where` up to the next `group`, `order`, `limit` or the end.
static WHERE_CLAUSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bwhere\s+(.*?)(?:\s+(?:group|order|limit)\b|$)").expect("valid regex")
});

const AND: &str = " and ";
const OR: &str = " or ";

/// Stage 14: sort the conditions of the first `WHERE` clause.
pub fn order_where_conditions(text: &str) -> String {
    let Some(clause) = WHERE_CLAUSE.captures(text).and_then(|caps| caps.get(1)) else {
        return text.to_string();
    };
    if clause.is_empty() {
        return text.to_string();
    }
    let mut result = String::with_capacity(text.len());
    result.push_str(&text[..clause.start()]);
    result.push_str(&sort_conditions(clause.as_str()));
    result.push_str(&text[clause.end()..]);
    result
}

/// Sort alternatives inside each `AND` group, then the groups themselves.
pub fn sort_conditions(clause: &str) -> String {
    let mut groups: SmallVec<[String; 4]> = clause
        .split(AND)
        .map(|group| {
            let mut alternatives: SmallVec<[&str; 4]> = group.split(OR).collect();
            alternatives.sort_unstable();
            alternatives.join(OR)
        })
        .collect();
    groups.sort_unstable();
    groups.join(AND)
}
