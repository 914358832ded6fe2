//! Group seeding: deal players into groups by seed ranking.

use crate::models::{Player, PlayerId};

/// Distribute players across `group_count` groups by snake draft.
///
/// Players are ordered by `ranking` ascending (ties keep input order), then dealt
/// left-to-right, right-to-left, and so on, so every group gets a similar spread of seeds.
/// `group_count` is clamped to `1..=players.len()`; no players means no groups.
pub fn snake_draft(players: &[Player], group_count: usize) -> Vec<Vec<PlayerId>> {
    if players.is_empty() {
        return Vec::new();
    }
    let group_count = group_count.clamp(1, players.len());

    let mut seeded: Vec<&Player> = players.iter().collect();
    seeded.sort_by_key(|p| p.ranking);

    let mut groups: Vec<Vec<PlayerId>> = vec![Vec::new(); group_count];
    for (round, chunk) in seeded.chunks(group_count).enumerate() {
        for (i, p) in chunk.iter().enumerate() {
            let slot = if round % 2 == 0 { i } else { group_count - 1 - i };
            groups[slot].push(p.id);
        }
    }
    groups
}

/// "Group A", "Group B", ... then "Group 27" and on past the alphabet.
pub fn group_name(index: usize) -> String {
    match u8::try_from(index) {
        Ok(i) if i < 26 => format!("Group {}", char::from(b'A' + i)),
        _ => format!("Group {}", index + 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(rankings: &[u32]) -> Vec<Player> {
        rankings
            .iter()
            .enumerate()
            .map(|(i, &r)| Player::new(format!("P{i}"), "Test", "Court", r))
            .collect()
    }

    #[test]
    fn snake_draft_alternates_direction() {
        let players = seeded(&[1, 2, 3, 4, 5, 6]);
        let groups = snake_draft(&players, 2);
        assert_eq!(groups.len(), 2);
        // seeds 1,4,5 and 2,3,6
        assert_eq!(groups[0], vec![players[0].id, players[3].id, players[4].id]);
        assert_eq!(groups[1], vec![players[1].id, players[2].id, players[5].id]);
    }

    #[test]
    fn snake_draft_orders_by_ranking_not_input() {
        let players = seeded(&[3, 1, 2]);
        let groups = snake_draft(&players, 3);
        assert_eq!(groups[0], vec![players[1].id]);
        assert_eq!(groups[1], vec![players[2].id]);
        assert_eq!(groups[2], vec![players[0].id]);
    }

    #[test]
    fn snake_draft_clamps_group_count() {
        let players = seeded(&[1, 2]);
        assert_eq!(snake_draft(&players, 5).len(), 2);
        assert_eq!(snake_draft(&players, 0).len(), 1);
        assert!(snake_draft(&[], 3).is_empty());
    }

    #[test]
    fn snake_draft_uneven_last_round() {
        let players = seeded(&[1, 2, 3, 4, 5]);
        let groups = snake_draft(&players, 2);
        let sizes: Vec<usize> = groups.iter().map(Vec::len).collect();
        assert_eq!(sizes, vec![3, 2]);
        // seed 5 starts the third round from the left
        assert_eq!(groups[0].last(), Some(&players[4].id));
    }

    #[test]
    fn group_names() {
        assert_eq!(group_name(0), "Group A");
        assert_eq!(group_name(4), "Group E");
        assert_eq!(group_name(26), "Group 27");
    }
}
