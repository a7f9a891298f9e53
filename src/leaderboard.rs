use hashbrown::HashMap;
use log::debug;

use crate::models::{DamageResult, LeaderboardEntry, PartyMember, PlayerBurst};
use crate::window::{best_window, start_timestamp};

pub fn calc_damage(member: &PartyMember, burst: &PlayerBurst, window_size: usize) -> DamageResult {
    let best = best_window(&burst.buckets, window_size);

    debug!(
        "{} best window {}..{} of {} buckets: {}",
        member.name,
        best.start,
        best.end,
        burst.buckets.len(),
        best.sum
    );

    DamageResult {
        name: member.name.clone(),
        job: member.job.clone(),
        total_damage: best.sum,
        start_timestamp: start_timestamp(&burst.buckets, best.start),
    }
}

/// Ranks every player with attributed damage by their best window.
///
/// Players are visited in roster order and the sort is stable, so equal
/// totals keep roster order.
pub fn rank(
    roster: &[PartyMember],
    bursts: &HashMap<i64, PlayerBurst>,
    window_size: usize,
) -> Vec<LeaderboardEntry> {
    let mut results: Vec<DamageResult> = roster
        .iter()
        .filter_map(|member| {
            bursts
                .get(&member.id)
                .filter(|burst| !burst.buckets.is_empty())
                .map(|burst| calc_damage(member, burst, window_size))
        })
        .collect();

    results.sort_by(|a, b| b.total_damage.cmp(&a.total_damage));

    results
        .into_iter()
        .enumerate()
        .map(|(index, result)| LeaderboardEntry { rank: index + 1, result })
        .collect()
}
