//! Source model reader for the frab JSON schema
//!
//! Deserializes the two source documents (`schedule.json` and
//! `speakers.json`) into an in-memory representation. Only the fields the
//! transformation consumes are modeled; everything else in the documents is
//! ignored. No transformation logic lives here.

use std::collections::HashMap;

use serde::Deserialize;

use crate::{Error, Result};

/// Top-level shape of `schedule.json`
#[derive(Debug, Clone, Deserialize)]
pub struct FrabSchedule {
    pub schedule: Schedule,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Schedule {
    pub conference: Conference,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Conference {
    /// Short tag carried verbatim onto every output record
    pub acronym: String,
    pub title: String,
    pub days: Vec<Day>,
}

/// One conference day: room name → events held in that room, in
/// document order
#[derive(Debug, Clone, Deserialize)]
pub struct Day {
    pub rooms: HashMap<String, Vec<Event>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Event {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub r#abstract: String,
    /// Talk category, e.g. "talk" or "lightning_talk"
    #[serde(rename = "type")]
    pub event_type: String,
    /// Absolute start timestamp, `YYYY-MM-DDThh:mm:ss±hh:mm`
    pub date: String,
    /// Elapsed time as `H:MM` / `HH:MM`
    pub duration: String,
    pub room: String,
    #[serde(default)]
    pub links: Vec<Link>,
    #[serde(default)]
    pub persons: Vec<Person>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Link {
    pub url: String,
}

/// Reference to a speaker by its source id
#[derive(Debug, Clone, Deserialize)]
pub struct Person {
    pub id: i64,
}

/// Top-level shape of `speakers.json`
#[derive(Debug, Clone, Deserialize)]
pub struct FrabSpeakers {
    pub schedule_speakers: ScheduleSpeakers,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleSpeakers {
    pub speakers: Vec<Speaker>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Speaker {
    pub id: i64,
    pub public_name: String,
    #[serde(default)]
    pub r#abstract: String,
    #[serde(default)]
    pub links: Vec<Link>,
}

/// Parse raw `schedule.json` bytes
pub fn parse_schedule(body: &[u8]) -> Result<FrabSchedule> {
    serde_json::from_slice(body).map_err(|e| Error::MalformedSource(format!("schedule: {}", e)))
}

/// Parse raw `speakers.json` bytes
pub fn parse_speakers(body: &[u8]) -> Result<FrabSpeakers> {
    serde_json::from_slice(body).map_err(|e| Error::MalformedSource(format!("speakers: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_schedule_minimal() {
        let body = br#"{
            "schedule": {
                "conference": {
                    "acronym": "tc24",
                    "title": "TestConf 2024",
                    "days": [
                        {
                            "rooms": {
                                "Main": [
                                    {
                                        "id": 7,
                                        "title": "Opening",
                                        "abstract": "Welcome",
                                        "type": "talk",
                                        "date": "2024-06-01T09:00:00+00:00",
                                        "duration": "0:45",
                                        "room": "Main",
                                        "links": [{"url": "https://example.org", "title": "slides"}],
                                        "persons": [{"id": 5, "public_name": "Ada"}]
                                    }
                                ]
                            }
                        }
                    ]
                }
            }
        }"#;

        let schedule = parse_schedule(body).unwrap();
        assert_eq!(schedule.schedule.conference.acronym, "tc24");
        assert_eq!(schedule.schedule.conference.days.len(), 1);

        let events = &schedule.schedule.conference.days[0].rooms["Main"];
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, 7);
        assert_eq!(events[0].event_type, "talk");
        assert_eq!(events[0].links[0].url, "https://example.org");
        assert_eq!(events[0].persons[0].id, 5);
    }

    #[test]
    fn test_parse_schedule_missing_links_and_persons_default_empty() {
        let body = br#"{
            "schedule": {
                "conference": {
                    "acronym": "tc24",
                    "title": "TestConf 2024",
                    "days": [
                        {
                            "rooms": {
                                "Main": [
                                    {
                                        "id": 1,
                                        "title": "Untracked",
                                        "type": "workshop",
                                        "date": "2024-06-01T10:00:00+00:00",
                                        "duration": "1:00",
                                        "room": "Main"
                                    }
                                ]
                            }
                        }
                    ]
                }
            }
        }"#;

        let schedule = parse_schedule(body).unwrap();
        let event = &schedule.schedule.conference.days[0].rooms["Main"][0];
        assert!(event.links.is_empty());
        assert!(event.persons.is_empty());
        assert_eq!(event.r#abstract, "");
    }

    #[test]
    fn test_parse_speakers() {
        let body = br#"{
            "schedule_speakers": {
                "speakers": [
                    {
                        "id": 5,
                        "public_name": "Ada",
                        "abstract": "Pioneer",
                        "links": []
                    }
                ]
            }
        }"#;

        let speakers = parse_speakers(body).unwrap();
        assert_eq!(speakers.schedule_speakers.speakers.len(), 1);
        assert_eq!(speakers.schedule_speakers.speakers[0].public_name, "Ada");
    }

    #[test]
    fn test_parse_schedule_rejects_wrong_shape() {
        let err = parse_schedule(b"{\"not_a_schedule\": true}").unwrap_err();
        assert!(matches!(err, Error::MalformedSource(_)));
    }

    #[test]
    fn test_parse_speakers_rejects_invalid_json() {
        let err = parse_speakers(b"{").unwrap_err();
        assert!(matches!(err, Error::MalformedSource(_)));
    }
}
