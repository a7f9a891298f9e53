use std::sync::Arc;

use anyhow::Result;
use chrono::Duration;
use log::info;

use crate::abstractions::{LogDataProvider, SettingsManager};
use crate::bucketer::bucket;
use crate::leaderboard::rank;
use crate::models::{CardDraw, DamageEvent, DrawReport, PartyMember, Settings};
use crate::utils::format_offset;

pub struct AnalysisOptions {
    pub adjacency: Duration,
    /// Window size counted in buckets, each bucket standing in for one tick.
    pub window_ticks: usize,
    pub draw_window: Duration,
}

impl AnalysisOptions {
    pub fn load<SM: SettingsManager>(settings_manager: &mut SM) -> Result<Self> {
        let settings = settings_manager.get_or_create()?;
        Ok(Self::from(&settings))
    }
}

impl From<&Settings> for AnalysisOptions {
    fn from(settings: &Settings) -> Self {
        Self {
            adjacency: Duration::milliseconds(settings.adjacency_ms),
            window_ticks: settings.window_ticks,
            draw_window: Duration::milliseconds(settings.draw_window_ms),
        }
    }
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self::from(&Settings::default())
    }
}

pub struct CardAnalyzer<LP: LogDataProvider> {
    provider: Arc<LP>,
    options: AnalysisOptions,
}

impl<LP: LogDataProvider> CardAnalyzer<LP> {
    pub fn new(provider: Arc<LP>, options: AnalysisOptions) -> Self {
        Self { provider, options }
    }

    /// Ranks the party for every card drawn during a fight.
    pub async fn analyze(&self, report: &str, fight_id: u32) -> Result<Vec<DrawReport>> {
        let fight = self.provider.get_fight(report, fight_id).await?;
        let party = self
            .provider
            .get_party(report, fight.start_time, fight.end_time)
            .await?;
        let draws = self
            .provider
            .get_draws(report, fight.start_time, fight.end_time)
            .await?;

        info!(
            "report {} fight {}: {} party members, {} draws",
            report,
            fight_id,
            party.len(),
            draws.len()
        );

        let draw_window = self.options.draw_window.num_milliseconds();
        let mut reports = Vec::with_capacity(draws.len());

        for (index, draw) in draws.into_iter().enumerate() {
            let events = self
                .provider
                .get_damage_events(report, draw.timestamp, draw.timestamp + draw_window)
                .await?;

            reports.push(self.report_draw(index + 1, draw, fight.start_time, &party, &events));
        }

        Ok(reports)
    }

    pub fn report_draw(
        &self,
        index: usize,
        draw: CardDraw,
        fight_start: i64,
        party: &[PartyMember],
        events: &[DamageEvent],
    ) -> DrawReport {
        let bursts = bucket(events, party, self.options.adjacency.num_milliseconds());
        let leaderboard = rank(party, &bursts, self.options.window_ticks);
        let offset_ms = draw.timestamp - fight_start;

        info!(
            "draw {} ({:?}) @ {}: {} players ranked",
            index,
            draw.card,
            format_offset(offset_ms),
            leaderboard.len()
        );

        DrawReport {
            index,
            draw,
            offset_ms,
            leaderboard,
        }
    }
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;

    use super::*;
    use crate::abstractions::{MemoryLogDataProvider, MockLogDataProvider, MockSettingsManager};
    use crate::models::{Card, Fight};
    use crate::test_utils::*;

    fn create_party() -> Vec<PartyMember> {
        vec![
            PLAYER_TEMPLATE_SAMURAI.to_member(),
            PLAYER_TEMPLATE_DANCER.to_member(),
            PLAYER_TEMPLATE_SUMMONER.to_member(),
            PLAYER_TEMPLATE_ASTROLOGIAN.to_member(),
        ]
    }

    #[tokio::test]
    async fn should_rank_party_for_each_draw() {
        let mut provider = MockLogDataProvider::new();

        provider
            .expect_get_fight()
            .withf(|_, fight_id| *fight_id == 2)
            .returning(|_, id| Ok(Fight { id, start_time: 1000, end_time: 200_000 }));
        provider
            .expect_get_party()
            .returning(|_, _, _| Ok(create_party()));
        provider.expect_get_draws().returning(|_, _, _| {
            Ok(vec![
                CardDraw { timestamp: 11_000, card: Card::Balance },
                CardDraw { timestamp: 71_000, card: Card::Spear },
            ])
        });
        provider
            .expect_get_damage_events()
            .times(2)
            .returning(|_, start, end| {
                assert_eq!(end - start, 45_000);

                let events = if start == 11_000 {
                    EventBuilder::new()
                        .hit(11_000, PLAYER_TEMPLATE_SAMURAI.id, 100)
                        .hit(11_500, PLAYER_TEMPLATE_DANCER.id, 150)
                        .hit(12_000, 8, 100_000)
                } else {
                    EventBuilder::new()
                        .hit(71_000, PET_TEMPLATE_CARBUNCLE.id, 500)
                        .hit(72_000, PLAYER_TEMPLATE_SAMURAI.id, 300)
                };

                Ok(events.build())
            });

        let analyzer = CardAnalyzer::new(Arc::new(provider), AnalysisOptions::default());
        let reports = analyzer.analyze("abc", 2).await.unwrap();

        assert_eq!(reports.len(), 2);

        let first = &reports[0];
        assert_eq!(first.index, 1);
        assert_eq!(first.offset_ms, 10_000);
        assert_eq!(first.leaderboard.len(), 2);
        assert_eq!(first.leaderboard[0].result.name, PLAYER_TEMPLATE_DANCER.name);
        assert_eq!(first.leaderboard[0].result.total_damage, 150);
        assert_eq!(first.leaderboard[1].result.name, PLAYER_TEMPLATE_SAMURAI.name);

        let second = &reports[1];
        assert_eq!(second.index, 2);
        assert_eq!(second.draw.card, Card::Spear);
        assert_eq!(second.leaderboard[0].rank, 1);
        assert_eq!(second.leaderboard[0].result.name, PLAYER_TEMPLATE_SUMMONER.name);
        assert_eq!(second.leaderboard[0].result.start_timestamp, Some(71_000));
        assert_eq!(second.leaderboard[1].result.total_damage, 300);
    }

    #[tokio::test]
    async fn should_propagate_provider_errors() {
        let mut provider = MockLogDataProvider::new();

        provider
            .expect_get_fight()
            .returning(|_, id| Err(anyhow!("Fight {} not found", id)));
        provider.expect_get_party().never();

        let analyzer = CardAnalyzer::new(Arc::new(provider), AnalysisOptions::default());

        assert!(analyzer.analyze("abc", 9).await.is_err());
    }

    #[tokio::test]
    async fn should_analyze_captured_report() {
        let fights = vec![Fight { id: 1, start_time: 0, end_time: 120_000 }];
        let draws = vec![
            CardDraw { timestamp: 5_000, card: Card::Arrow },
            CardDraw { timestamp: 60_000, card: Card::Ewer },
        ];
        let events = EventBuilder::new()
            .rotation(PLAYER_TEMPLATE_SAMURAI.id, 0, 120, 1000, 900)
            .rotation(PLAYER_TEMPLATE_DANCER.id, 60_000, 30, 1000, 2000)
            .build();
        let provider = MemoryLogDataProvider::new(fights, create_party(), draws, events);

        let analyzer = CardAnalyzer::new(Arc::new(provider), AnalysisOptions::default());
        let reports = analyzer.analyze("captured", 1).await.unwrap();

        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].leaderboard.len(), 1);
        assert_eq!(reports[0].leaderboard[0].result.name, PLAYER_TEMPLATE_SAMURAI.name);
        assert_eq!(reports[1].leaderboard[0].result.name, PLAYER_TEMPLATE_DANCER.name);

        let again = analyzer.analyze("captured", 1).await.unwrap();
        assert_eq!(reports, again);
    }

    #[test]
    fn should_load_options_from_settings() {
        let mut settings_manager = MockSettingsManager::new();
        settings_manager.expect_get_or_create().returning(|| {
            Ok(Settings {
                adjacency_ms: 500,
                window_ticks: 10,
                draw_window_ms: 30_000,
                ..Default::default()
            })
        });

        let options = AnalysisOptions::load(&mut settings_manager).unwrap();

        assert_eq!(options.adjacency, Duration::milliseconds(500));
        assert_eq!(options.window_ticks, 10);
        assert_eq!(options.draw_window, Duration::seconds(30));
    }
}
