use anyhow::{Result, anyhow};

use crate::models::{CardDraw, DamageEvent, Fight, PartyMember};

#[cfg(test)]
use mockall::automock;

/// Source of raw encounter data. Damage events and draws come back sorted by
/// timestamp, callers rely on that and never re-sort.
#[cfg_attr(test, automock)]
pub trait LogDataProvider: Send + Sync + 'static {
    async fn get_fight(&self, report: &str, fight_id: u32) -> Result<Fight>;
    async fn get_party(&self, report: &str, start: i64, end: i64) -> Result<Vec<PartyMember>>;
    async fn get_draws(&self, report: &str, start: i64, end: i64) -> Result<Vec<CardDraw>>;
    async fn get_damage_events(&self, report: &str, start: i64, end: i64) -> Result<Vec<DamageEvent>>;
}

/// Serves a single captured report from memory.
pub struct MemoryLogDataProvider {
    fights: Vec<Fight>,
    party: Vec<PartyMember>,
    draws: Vec<CardDraw>,
    events: Vec<DamageEvent>,
}

impl LogDataProvider for MemoryLogDataProvider {
    async fn get_fight(&self, _report: &str, fight_id: u32) -> Result<Fight> {
        self.fights
            .iter()
            .find(|fight| fight.id == fight_id)
            .copied()
            .ok_or_else(|| anyhow!("Fight not found: {}", fight_id))
    }

    async fn get_party(&self, _report: &str, _start: i64, _end: i64) -> Result<Vec<PartyMember>> {
        Ok(self.party.clone())
    }

    async fn get_draws(&self, _report: &str, start: i64, end: i64) -> Result<Vec<CardDraw>> {
        Ok(self
            .draws
            .iter()
            .filter(|draw| draw.timestamp >= start && draw.timestamp <= end)
            .copied()
            .collect())
    }

    async fn get_damage_events(&self, _report: &str, start: i64, end: i64) -> Result<Vec<DamageEvent>> {
        Ok(self
            .events
            .iter()
            .filter(|event| event.timestamp >= start && event.timestamp <= end)
            .copied()
            .collect())
    }
}

impl MemoryLogDataProvider {
    pub fn new(
        fights: Vec<Fight>,
        party: Vec<PartyMember>,
        draws: Vec<CardDraw>,
        events: Vec<DamageEvent>,
    ) -> Self {
        Self {
            fights,
            party,
            draws,
            events,
        }
    }
}
