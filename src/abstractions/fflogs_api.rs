use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use log::{debug, info};
use moka::sync::Cache;
use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::constants::{CARD_DRAWN_IDS, FIGHTS_CACHE_CAPACITY, UNKNOWN_JOB};
use crate::jobs::JobTable;
use crate::models::{Card, CardDraw, DamageEvent, Fight, PartyMember, Pet};

use super::LogDataProvider;

#[derive(Debug, Clone, Deserialize)]
struct FightsResponse {
    fights: Vec<RawFight>,
}

#[derive(Debug, Clone, Deserialize)]
struct RawFight {
    id: u32,
    start_time: i64,
    end_time: i64,
}

#[derive(Debug, Deserialize)]
struct TableResponse {
    entries: Vec<RawEntry>,
}

#[derive(Debug, Deserialize)]
struct RawEntry {
    id: i64,
    guid: i64,
    name: String,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    pets: Vec<RawPet>,
}

#[derive(Debug, Deserialize)]
struct RawPet {
    id: i64,
    guid: i64,
    name: String,
    #[serde(rename = "type")]
    kind: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EventsPage {
    events: Vec<RawEvent>,
    next_page_timestamp: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct RawEvent {
    timestamp: i64,
    #[serde(rename = "sourceID")]
    source_id: Option<i64>,
    amount: Option<i64>,
    ability: Option<RawAbility>,
}

#[derive(Debug, Deserialize)]
struct RawAbility {
    guid: u32,
}

/// FFLogs v1 REST client.
pub struct FflogsApi {
    client: Client,
    api_url: String,
    api_key: String,
    jobs: Arc<JobTable>,
    fights_cache: Cache<String, Vec<Fight>>,
}

impl LogDataProvider for FflogsApi {
    async fn get_fight(&self, report: &str, fight_id: u32) -> Result<Fight> {
        let fights = match self.fights_cache.get(report) {
            Some(fights) => fights,
            None => {
                let response: FightsResponse = self.fetch("fights", report, &[]).await?;
                let fights: Vec<Fight> = response.fights.into_iter().map(map_fight).collect();
                self.fights_cache.insert(report.to_string(), fights.clone());
                fights
            }
        };

        fights
            .into_iter()
            .find(|fight| fight.id == fight_id)
            .ok_or_else(|| anyhow!("Fight {} not found in report {}", fight_id, report))
    }

    async fn get_party(&self, report: &str, start: i64, end: i64) -> Result<Vec<PartyMember>> {
        let params = [("start", start.to_string()), ("end", end.to_string())];
        let response: TableResponse = self.fetch("tables/damage-done", report, &params).await?;

        Ok(map_party(response.entries, &self.jobs))
    }

    async fn get_draws(&self, report: &str, start: i64, end: i64) -> Result<Vec<CardDraw>> {
        let filter = card_draw_filter();
        let events = self
            .fetch_events("events/summary", report, start, end, Some(&filter))
            .await?;

        Ok(map_draws(events))
    }

    async fn get_damage_events(&self, report: &str, start: i64, end: i64) -> Result<Vec<DamageEvent>> {
        let events = self
            .fetch_events("events/damage-done", report, start, end, None)
            .await?;

        Ok(map_damage_events(events))
    }
}

impl FflogsApi {
    pub fn new(api_url: String, api_key: String, jobs: Arc<JobTable>) -> Self {
        Self {
            client: Client::new(),
            api_url,
            api_key,
            jobs,
            fights_cache: Cache::builder().max_capacity(FIGHTS_CACHE_CAPACITY).build(),
        }
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        call: &str,
        report: &str,
        params: &[(&str, String)],
    ) -> Result<T> {
        let url = format!("{}/report/{}/{}", self.api_url, call, report);
        debug!("GET {} {:?}", url, params);

        let response = self
            .client
            .get(&url)
            .query(params)
            .query(&[("api_key", self.api_key.as_str()), ("translate", "true")])
            .send()
            .await
            .with_context(|| format!("failed to call {}", call))?
            .error_for_status()?;

        let data = response
            .json::<T>()
            .await
            .with_context(|| format!("failed to parse {} response", call))?;

        Ok(data)
    }

    /// Collects every page of an event query by following `nextPageTimestamp`.
    async fn fetch_events(
        &self,
        call: &str,
        report: &str,
        start: i64,
        end: i64,
        filter: Option<&str>,
    ) -> Result<Vec<RawEvent>> {
        let mut events = Vec::new();
        let mut cursor = Some(start);

        while let Some(page_start) = cursor {
            let mut params = vec![("start", page_start.to_string()), ("end", end.to_string())];
            if let Some(filter) = filter {
                params.push(("filter", filter.to_string()));
            }

            let page: EventsPage = self.fetch(call, report, &params).await?;
            events.extend(page.events);

            // a cursor that does not advance would loop forever
            cursor = page.next_page_timestamp.filter(|next| *next > page_start);
            if let Some(next) = cursor {
                debug!("{} continues at {}", call, next);
            }
        }

        info!("fetched {} events from {}", events.len(), call);

        Ok(events)
    }
}

fn card_draw_filter() -> String {
    let abilities = CARD_DRAWN_IDS
        .iter()
        .map(|id| format!("ability.id={}", id))
        .collect::<Vec<_>>()
        .join(" or ");

    format!("type=\"applybuff\" and ({})", abilities)
}

fn map_fight(fight: RawFight) -> Fight {
    Fight {
        id: fight.id,
        start_time: fight.start_time,
        end_time: fight.end_time,
    }
}

fn map_party(entries: Vec<RawEntry>, jobs: &JobTable) -> Vec<PartyMember> {
    entries
        .into_iter()
        .map(|entry| PartyMember {
            id: entry.id,
            guid: entry.guid,
            job: jobs
                .resolve_type(&entry.kind)
                .map_or(UNKNOWN_JOB.to_string(), |job| job.name_short.to_string()),
            name: entry.name,
            pets: entry
                .pets
                .into_iter()
                .map(|pet| Pet {
                    id: pet.id,
                    guid: pet.guid,
                    name: pet.name,
                    kind: pet.kind,
                })
                .collect(),
        })
        .collect()
}

fn map_draws(events: Vec<RawEvent>) -> Vec<CardDraw> {
    events
        .into_iter()
        .filter_map(|event| {
            event.ability.map(|ability| CardDraw {
                timestamp: event.timestamp,
                card: Card::from_guid(ability.guid),
            })
        })
        .collect()
}

fn map_damage_events(events: Vec<RawEvent>) -> Vec<DamageEvent> {
    let total = events.len();

    let events: Vec<DamageEvent> = events
        .into_iter()
        .filter_map(|event| {
            Some(DamageEvent {
                timestamp: event.timestamp,
                source_id: event.source_id?,
                amount: event.amount?,
            })
        })
        .collect();

    if events.len() < total {
        debug!("skipped {} events without source or amount", total - events.len());
    }

    events
}
