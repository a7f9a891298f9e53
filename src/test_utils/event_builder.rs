use crate::models::DamageEvent;

pub struct EventBuilder {
    events: Vec<DamageEvent>,
}

impl EventBuilder {
    pub fn new() -> Self {
        Self { events: vec![] }
    }

    pub fn hit(mut self, timestamp: i64, source_id: i64, amount: i64) -> Self {
        self.events.push(DamageEvent {
            timestamp,
            source_id,
            amount,
        });
        self
    }

    /// `count` hits from one source, `interval_ms` apart.
    pub fn rotation(
        mut self,
        source_id: i64,
        start: i64,
        count: i64,
        interval_ms: i64,
        amount: i64,
    ) -> Self {
        for index in 0..count {
            self = self.hit(start + index * interval_ms, source_id, amount + index % 7);
        }
        self
    }

    pub fn build(mut self) -> Vec<DamageEvent> {
        self.events.sort_by_key(|event| event.timestamp);
        self.events
    }
}
