use hashbrown::HashMap;
use hashbrown::hash_map::Entry;
use log::debug;

use crate::models::{DamageEvent, PartyMember, PlayerBurst};

/// Maps every damage source of a roster (players and their pets) to the
/// owning player id.
pub struct Roster {
    owners: HashMap<i64, i64>,
}

impl Roster {
    pub fn new(members: &[PartyMember]) -> Self {
        let mut owners = HashMap::new();

        for member in members {
            for pet in &member.pets {
                owners.entry(pet.id).or_insert(member.id);
            }
        }

        // a player's own id always resolves to that player
        for member in members {
            owners.insert(member.id, member.id);
        }

        Self { owners }
    }

    pub fn owner_of(&self, source_id: i64) -> Option<i64> {
        self.owners.get(&source_id).copied()
    }
}

/// Groups time ordered damage events into per player bursts.
///
/// Events whose source belongs to nobody in the roster (limit breaks,
/// environment) are dropped. Players without a single attributed event
/// have no entry in the result.
pub fn bucket(
    events: &[DamageEvent],
    roster: &[PartyMember],
    adjacency_ms: i64,
) -> HashMap<i64, PlayerBurst> {
    let roster = Roster::new(roster);
    let mut bursts: HashMap<i64, PlayerBurst> = HashMap::new();
    let mut discarded = 0usize;

    for event in events {
        let Some(player_id) = roster.owner_of(event.source_id) else {
            discarded += 1;
            continue;
        };

        match bursts.entry(player_id) {
            Entry::Occupied(mut entry) => entry.get_mut().push(*event, adjacency_ms),
            Entry::Vacant(entry) => {
                entry.insert(PlayerBurst::new(*event));
            }
        }
    }

    debug!(
        "bucketed {} events for {} players, discarded {}",
        events.len() - discarded,
        bursts.len(),
        discarded
    );

    bursts
}
