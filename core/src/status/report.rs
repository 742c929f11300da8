//! Text rendering of status results.

use rosterwatch_types::formatting::{SPACER, framed, row, yes_no};

use super::online::OnlineCounts;
use super::player::PlayerDetail;

const ONLINE_TITLE: &str = "Info";
const PLAYER_TITLE: &str = "Player Info";

/// Render online counts.
///
/// `compact` emits only the two count lines, for embedding in a larger report.
pub fn render_online(counts: &OnlineCounts, compact: bool) -> Vec<String> {
    let online = row(&format!(
        "[online] {} Teams | {} Wars | {} Helpers | {} Mutes",
        counts.teams.total, counts.wars.total, counts.helpers.total, counts.mutes.total
    ));
    let active = row(&format!(
        "[active] {} Teams | {} Wars | {} Helpers | {} Mutes",
        counts.teams.active(),
        counts.wars.active(),
        counts.helpers.active(),
        counts.mutes.active()
    ));

    if compact {
        vec![online, active]
    } else {
        framed(ONLINE_TITLE, vec![online, active])
    }
}

pub fn render_player(detail: &PlayerDetail) -> Vec<String> {
    let mut rows = vec![
        row(&format!("Name: {}", detail.name)),
        row(&format!("Clan: {}", detail.clan)),
        SPACER.to_string(),
        row(&format!("Custom Color: {}", yes_no(detail.custom_color.is_some()))),
    ];
    if let Some(color) = detail.custom_color {
        rows.push(row(&format!("Body Color: {}", color.body)));
        rows.push(row(&format!("Feet Color: {}", color.feet)));
    }
    rows.push(SPACER.to_string());
    rows.push(row(&format!("Skin Name: {}", detail.skin)));
    rows.push(SPACER.to_string());
    if detail.is_authed() {
        rows.push(row(&format!("Authed: Yes, Auth Level {}", detail.auth_level)));
    } else {
        rows.push(row("Authed: No"));
    }

    framed(PLAYER_TITLE, rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::online::CategoryCount;
    use crate::status::player::CustomColor;

    fn counts() -> OnlineCounts {
        OnlineCounts {
            teams: CategoryCount { total: 3, afk: 1 },
            wars: CategoryCount { total: 2, afk: 1 },
            helpers: CategoryCount { total: 1, afk: 0 },
            mutes: CategoryCount { total: 0, afk: 0 },
        }
    }

    #[test]
    fn test_compact_online_is_two_lines() {
        let lines = render_online(&counts(), true);
        assert_eq!(
            lines,
            vec![
                "│ [online] 3 Teams | 2 Wars | 1 Helpers | 0 Mutes",
                "│ [active] 2 Teams | 1 Wars | 1 Helpers | 0 Mutes",
            ]
        );
    }

    #[test]
    fn test_full_online_is_framed() {
        let lines = render_online(&counts(), false);
        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with("╭──"));
        assert_eq!(lines[2], "│ [online] 3 Teams | 2 Wars | 1 Helpers | 0 Mutes");
        assert!(lines[5].starts_with("╰"));
    }

    #[test]
    fn test_player_block_with_colors_and_auth() {
        let detail = PlayerDetail {
            name: "Alice".to_string(),
            clan: "Tee".to_string(),
            custom_color: Some(CustomColor { body: 1, feet: 2 }),
            skin: "santa".to_string(),
            auth_level: 2,
        };
        let lines = render_player(&detail);
        assert!(lines.contains(&"│ Custom Color: Yes".to_string()));
        assert!(lines.contains(&"│ Body Color: 1".to_string()));
        assert!(lines.contains(&"│ Feet Color: 2".to_string()));
        assert!(lines.contains(&"│ Authed: Yes, Auth Level 2".to_string()));
    }

    #[test]
    fn test_player_block_plain() {
        let detail = PlayerDetail {
            name: "Bob".to_string(),
            clan: String::new(),
            custom_color: None,
            skin: "default".to_string(),
            auth_level: 0,
        };
        let lines = render_player(&detail);
        assert!(lines.contains(&"│ Custom Color: No".to_string()));
        assert!(!lines.iter().any(|l| l.contains("Body Color")));
        assert!(lines.contains(&"│ Authed: No".to_string()));
    }
}
