//! The frab → HackerTracker transformation pipeline
//!
//! Four collection builders, one per output collection. The location and
//! event-type builders must run first: they populate the two id registries
//! the event builder resolves against. All builders are pure over their
//! inputs; the only mutation is registry population, and the registries are
//! passed in explicitly so the pipeline stays composable and testable.

use chrono::{DateTime, Duration, FixedOffset};

use crate::frab::{Conference, FrabSchedule, FrabSpeakers};
use crate::hackertracker::{Event, EventType, Location, Speaker};
use crate::registry::IdRegistry;
use crate::{Error, Result};

/// The absolute-timestamp format used by frab event dates, the computed end
/// dates, and the run-wide `updated_at` stamp.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// Run-wide context shared by every builder: the configured base id offset
/// and the `updated_at` stamp captured once at process start.
#[derive(Debug, Clone)]
pub struct RunContext {
    pub base_id: i64,
    pub updated_at: String,
}

/// The four output collections of one run.
#[derive(Debug, Clone)]
pub struct Outputs {
    pub event_types: Vec<EventType>,
    pub locations: Vec<Location>,
    pub speakers: Vec<Speaker>,
    pub events: Vec<Event>,
}

/// Run the whole pipeline over the two parsed source documents.
pub fn convert(
    schedule: &FrabSchedule,
    speakers: &FrabSpeakers,
    ctx: &RunContext,
) -> Result<Outputs> {
    let conference = &schedule.schedule.conference;

    let mut event_type_registry = IdRegistry::new(ctx.base_id);
    let mut location_registry = IdRegistry::new(ctx.base_id);

    // Registries must be fully populated before the event builder runs.
    let event_types = build_event_types(conference, &mut event_type_registry, ctx);
    let locations = build_locations(conference, &mut location_registry, ctx);
    let speakers = build_speakers(conference, speakers, ctx);
    let events = build_events(conference, &location_registry, &event_type_registry, ctx)?;

    Ok(Outputs {
        event_types,
        locations,
        speakers,
        events,
    })
}

/// Scan every event for its type tag, register each distinct tag, then emit
/// one record per registered tag. Emission order is unspecified.
pub fn build_event_types(
    conference: &Conference,
    registry: &mut IdRegistry,
    ctx: &RunContext,
) -> Vec<EventType> {
    for day in &conference.days {
        for events in day.rooms.values() {
            for event in events {
                registry.assign(&event.event_type);
            }
        }
    }

    registry
        .entries()
        .map(|(name, id)| EventType {
            id,
            name: normalize_type_name(name),
            conference: conference.acronym.clone(),
            updated_at: ctx.updated_at.clone(),
        })
        .collect()
}

/// Scan every day for its room names, register each distinct room, then emit
/// one record per registered room. Emission order is unspecified.
pub fn build_locations(
    conference: &Conference,
    registry: &mut IdRegistry,
    ctx: &RunContext,
) -> Vec<Location> {
    for day in &conference.days {
        for room in day.rooms.keys() {
            registry.assign(room);
        }
    }

    registry
        .entries()
        .map(|(name, id)| Location {
            id,
            name: name.to_string(),
            conference: conference.acronym.clone(),
            updated_at: ctx.updated_at.clone(),
        })
        .collect()
}

/// One output speaker per source speaker. Ids are `base + source id`; no
/// deduplication and no back-references to events.
pub fn build_speakers(
    conference: &Conference,
    speakers: &FrabSpeakers,
    ctx: &RunContext,
) -> Vec<Speaker> {
    speakers
        .schedule_speakers
        .speakers
        .iter()
        .map(|speaker| Speaker {
            id: ctx.base_id + speaker.id,
            name: speaker.public_name.clone(),
            description: speaker.r#abstract.clone(),
            link: first_link(&speaker.links),
            conference: conference.acronym.clone(),
            updated_at: ctx.updated_at.clone(),
        })
        .collect()
}

/// One output event per source event, in source-document order within each
/// room. Both registries must already be fully populated; a miss is an
/// internal invariant violation, not a user error.
pub fn build_events(
    conference: &Conference,
    locations: &IdRegistry,
    event_types: &IdRegistry,
    ctx: &RunContext,
) -> Result<Vec<Event>> {
    let mut out = Vec::new();

    for day in &conference.days {
        for events in day.rooms.values() {
            for event in events {
                let start = parse_timestamp(&event.date)?;
                let duration = parse_duration(&event.duration)?;
                // A duration that pushes the end past the representable
                // date range is reported, not panicked on.
                let end = start
                    .checked_add_signed(duration)
                    .ok_or_else(|| Error::MalformedDuration(event.duration.clone()))?;

                let location = locations.get(&event.room).ok_or_else(|| {
                    Error::Internal(format!("room {:?} missing from location registry", event.room))
                })?;
                let event_type = event_types.get(&event.event_type).ok_or_else(|| {
                    Error::Internal(format!(
                        "type {:?} missing from event type registry",
                        event.event_type
                    ))
                })?;

                out.push(Event {
                    id: ctx.base_id + event.id,
                    title: event.title.clone(),
                    description: event.r#abstract.clone(),
                    start_date: event.date.clone(),
                    end_date: end.format(TIMESTAMP_FORMAT).to_string(),
                    link: first_link(&event.links),
                    location,
                    event_type,
                    speakers: event
                        .persons
                        .iter()
                        .map(|person| ctx.base_id + person.id)
                        .collect(),
                    conference: conference.acronym.clone(),
                    updated_at: ctx.updated_at.clone(),
                });
            }
        }
    }

    Ok(out)
}

fn parse_timestamp(raw: &str) -> Result<DateTime<FixedOffset>> {
    DateTime::parse_from_str(raw, TIMESTAMP_FORMAT).map_err(|source| Error::MalformedTimestamp {
        value: raw.to_string(),
        source,
    })
}

/// Parse an `H:MM` / `HH:MM` elapsed-time string. Exactly two `:`-separated
/// unsigned integer parts; anything else is malformed.
fn parse_duration(raw: &str) -> Result<Duration> {
    let malformed = || Error::MalformedDuration(raw.to_string());

    let mut parts = raw.split(':');
    let (hours, minutes) = match (parts.next(), parts.next(), parts.next()) {
        (Some(h), Some(m), None) => (
            h.parse::<u32>().map_err(|_| malformed())?,
            m.parse::<u32>().map_err(|_| malformed())?,
        ),
        _ => return Err(malformed()),
    };

    Ok(Duration::hours(i64::from(hours)) + Duration::minutes(i64::from(minutes)))
}

fn first_link(links: &[crate::frab::Link]) -> String {
    links.first().map(|link| link.url.clone()).unwrap_or_default()
}

/// Cosmetic normalization for event type names: underscores become spaces,
/// then each word's first letter is capitalized.
fn normalize_type_name(raw: &str) -> String {
    let spaced = raw.replace('_', " ");
    let mut out = String::with_capacity(spaced.len());
    let mut word_start = true;
    for c in spaced.chars() {
        if word_start {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        word_start = c.is_whitespace();
    }
    out
}
