//! Text layout helpers for the bordered report blocks.
//!
//! Every multi-line report (online summary, player detail) is drawn the same
//! way: a titled top rule, a spacer, `│ `-prefixed content rows, a spacer and
//! a bottom rule. Keeping the glyphs here keeps the CLI and the core in sync.

/// Left edge of every content row.
pub const ROW_PREFIX: &str = "│ ";

/// Empty row used as a spacer between sections.
pub const SPACER: &str = "│";

/// Bottom rule closing a block.
pub const BOTTOM_RULE: &str = "╰───────────────────────";

/// Top rule carrying a block title.
///
/// # Examples
/// ```
/// use rosterwatch_types::formatting::top_rule;
/// assert_eq!(top_rule("Player Info"), "╭──                  Player Info");
/// ```
pub fn top_rule(title: &str) -> String {
    format!("╭──                  {title}")
}

/// Prefix a content row with the block edge.
///
/// # Examples
/// ```
/// use rosterwatch_types::formatting::row;
/// assert_eq!(row("Clan: abc"), "│ Clan: abc");
/// ```
pub fn row(content: &str) -> String {
    format!("{ROW_PREFIX}{content}")
}

/// Wrap content rows in a titled block.
///
/// Rows are emitted verbatim, so callers can mix [`row`] output with
/// [`SPACER`] lines.
pub fn framed(title: &str, rows: Vec<String>) -> Vec<String> {
    let mut lines = Vec::with_capacity(rows.len() + 4);
    lines.push(top_rule(title));
    lines.push(SPACER.to_string());
    lines.extend(rows);
    lines.push(SPACER.to_string());
    lines.push(BOTTOM_RULE.to_string());
    lines
}

/// Render a yes/no flag the way the reports spell it.
#[inline]
pub fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

/// Quote a player name for confirmation messages.
///
/// # Examples
/// ```
/// use rosterwatch_types::formatting::quoted;
/// assert_eq!(quoted("nameless tee"), "\"nameless tee\"");
/// ```
pub fn quoted(name: &str) -> String {
    format!("\"{name}\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_framed_surrounds_rows() {
        let lines = framed("Info", vec![row("a"), row("b")]);
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], top_rule("Info"));
        assert_eq!(lines[1], SPACER);
        assert_eq!(lines[2], "│ a");
        assert_eq!(lines[3], "│ b");
        assert_eq!(lines[4], SPACER);
        assert_eq!(lines[5], BOTTOM_RULE);
    }

    #[test]
    fn test_framed_empty() {
        let lines = framed("Empty", Vec::new());
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_yes_no() {
        assert_eq!(yes_no(true), "Yes");
        assert_eq!(yes_no(false), "No");
    }
}
