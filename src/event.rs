use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Meetup hands out event ids as strings, older payloads as numbers.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum EventId {
    Number(u64),
    Text(String),
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EventId::Number(n) => write!(f, "{}", n),
            EventId::Text(s) => write!(f, "{}", s),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EventSummary {
    pub id: EventId,

    pub name: String,

    // Milliseconds since the epoch.
    #[serde(default)]
    pub time: Option<i64>,

    #[serde(default)]
    pub utc_offset: Option<i64>,
}

impl EventSummary {
    pub fn starts_at(&self) -> Option<DateTime<Utc>> {
        let time = self.time?;
        Utc.timestamp_millis_opt(time).single()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_accepts_string_and_number() {
        let event: EventSummary =
            serde_json::from_str(r#"{"id": "qxbnrlyxpbhb", "name": "Monthly Meetup"}"#).unwrap();
        assert_eq!(event.id, EventId::Text("qxbnrlyxpbhb".to_string()));
        assert_eq!(event.id.to_string(), "qxbnrlyxpbhb");
        assert_eq!(event.starts_at(), None);

        let event: EventSummary =
            serde_json::from_str(r#"{"id": 123, "name": "Monthly Meetup"}"#).unwrap();
        assert_eq!(event.id, EventId::Number(123));
        assert_eq!(event.id.to_string(), "123");
    }

    #[test]
    fn starts_at_reads_milliseconds() {
        let event: EventSummary = serde_json::from_str(
            r#"{"id": "1", "name": "n", "time": 1500000000000, "utc_offset": 7200000}"#,
        )
        .unwrap();
        let starts_at = event.starts_at().unwrap();
        assert_eq!(starts_at.timestamp(), 1_500_000_000);
        assert_eq!(event.utc_offset, Some(7_200_000));
    }
}
