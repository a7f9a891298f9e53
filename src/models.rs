use serde::{Deserialize, Serialize};

use crate::constants::*;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DamageEvent {
    pub timestamp: i64,
    pub source_id: i64,
    pub amount: i64,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    pub id: i64,
    pub guid: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartyMember {
    pub id: i64,
    pub guid: i64,
    pub name: String,
    pub job: String,
    pub pets: Vec<Pet>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Card {
    Balance,
    Bole,
    Arrow,
    Spear,
    Ewer,
    Spire,
    Other(u32),
}

impl Card {
    pub fn from_guid(guid: u32) -> Self {
        match guid {
            BALANCE_DRAWN_ID => Card::Balance,
            BOLE_DRAWN_ID => Card::Bole,
            ARROW_DRAWN_ID => Card::Arrow,
            SPEAR_DRAWN_ID => Card::Spear,
            EWER_DRAWN_ID => Card::Ewer,
            SPIRE_DRAWN_ID => Card::Spire,
            other => Card::Other(other),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDraw {
    pub timestamp: i64,
    pub card: Card,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fight {
    pub id: u32,
    pub start_time: i64,
    pub end_time: i64,
}

/// Damage events merged by time adjacency, approximating one combat tick.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Bucket {
    pub events: Vec<DamageEvent>,
}

impl Bucket {
    pub fn new(event: DamageEvent) -> Self {
        Self { events: vec![event] }
    }

    pub fn total(&self) -> i64 {
        self.events.iter().map(|event| event.amount).sum()
    }

    pub fn start_timestamp(&self) -> Option<i64> {
        self.events.first().map(|event| event.timestamp)
    }
}

/// Ordered buckets of a single player.
///
/// `last_bucket_start` is the timestamp of the first event of the most recent
/// bucket, adjacency is measured against it rather than the previous event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerBurst {
    pub buckets: Vec<Bucket>,
    last_bucket_start: i64,
}

impl PlayerBurst {
    pub fn new(event: DamageEvent) -> Self {
        Self {
            buckets: vec![Bucket::new(event)],
            last_bucket_start: event.timestamp,
        }
    }

    pub fn push(&mut self, event: DamageEvent, adjacency_ms: i64) {
        if event.timestamp - self.last_bucket_start <= adjacency_ms {
            if let Some(bucket) = self.buckets.last_mut() {
                bucket.events.push(event);
                return;
            }
        }

        self.buckets.push(Bucket::new(event));
        self.last_bucket_start = event.timestamp;
    }

    pub fn event_count(&self) -> usize {
        self.buckets.iter().map(|bucket| bucket.events.len()).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DamageResult {
    pub name: String,
    pub job: String,
    pub total_damage: i64,
    pub start_timestamp: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub rank: usize,
    #[serde(flatten)]
    pub result: DamageResult,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawReport {
    pub index: usize,
    pub draw: CardDraw,
    pub offset_ms: i64,
    pub leaderboard: Vec<LeaderboardEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub adjacency_ms: i64,
    pub window_ticks: usize,
    pub draw_window_ms: i64,
    pub api_url: String,
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            adjacency_ms: ADJACENCY_MS,
            window_ticks: CARD_WINDOW_TICKS,
            draw_window_ms: DRAW_WINDOW_MS,
            api_url: API_URL.to_string(),
            log_level: "info".to_string(),
        }
    }
}
