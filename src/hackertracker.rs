//! HackerTracker output records and the document emitter
//!
//! Each output file is a single-keyed JSON envelope holding one record
//! array. Record ids are either `base + source id` (events, speakers) or
//! registry-assigned (locations, event types); see `convert`.

use serde::Serialize;

use crate::Result;

#[derive(Debug, Clone, Serialize)]
pub struct EventType {
    pub id: i64,
    pub name: String,
    pub conference: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Location {
    pub id: i64,
    pub name: String,
    pub conference: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Speaker {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub link: String,
    pub conference: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    pub link: String,
    pub location: i64,
    pub event_type: i64,
    pub speakers: Vec<i64>,
    pub conference: String,
    pub updated_at: String,
}

/// Wrap `records` under a single JSON object key equal to `collection` and
/// serialize. An empty record list still produces a well-formed envelope.
pub fn emit<T: Serialize>(collection: &str, records: &[T]) -> Result<Vec<u8>> {
    let mut envelope = serde_json::Map::with_capacity(1);
    envelope.insert(collection.to_string(), serde_json::to_value(records)?);
    Ok(serde_json::to_vec(&envelope)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emit_wraps_records_under_collection_key() {
        let locations = vec![Location {
            id: 101,
            name: "Main".to_string(),
            conference: "tc24".to_string(),
            updated_at: "2024-06-01T00:00:00+00:00".to_string(),
        }];

        let bytes = emit("locations", &locations).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(value["locations"][0]["id"], 101);
        assert_eq!(value["locations"][0]["name"], "Main");
        assert_eq!(value["locations"][0]["conference"], "tc24");
    }

    #[test]
    fn test_emit_empty_collection_is_well_formed() {
        let bytes = emit("schedule", &Vec::<Event>::new()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(value, serde_json::json!({ "schedule": [] }));
    }

    #[test]
    fn test_emit_event_fields() {
        let events = vec![Event {
            id: 107,
            title: "Opening".to_string(),
            description: "Welcome".to_string(),
            start_date: "2024-06-01T09:00:00+00:00".to_string(),
            end_date: "2024-06-01T09:45:00+00:00".to_string(),
            link: String::new(),
            location: 101,
            event_type: 101,
            speakers: vec![105],
            conference: "tc24".to_string(),
            updated_at: "2024-06-01T00:00:00+00:00".to_string(),
        }];

        let bytes = emit("schedule", &events).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        let event = &value["schedule"][0];

        assert_eq!(event["end_date"], "2024-06-01T09:45:00+00:00");
        assert_eq!(event["speakers"], serde_json::json!([105]));
        assert_eq!(event["link"], "");
    }
}
