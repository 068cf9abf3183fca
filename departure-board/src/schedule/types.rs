//! Schedule document model.
//!
//! Mirrors the JSON schedule file. Optional fields that are absent or
//! `null` are filled with their defaults here, at deserialization time.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::ClockTime;

/// Default walking time to a station, in minutes.
pub const DEFAULT_WALK_MINS: u32 = 10;

/// Default cycling time to a station, in minutes.
pub const DEFAULT_BIKE_MINS: u32 = 5;

/// A whole schedule file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleDocument {
    pub stops: Vec<Stop>,
}

impl ScheduleDocument {
    /// Find a stop by exact name.
    pub fn stop(&self, name: &str) -> Option<&Stop> {
        self.stops.iter().find(|s| s.name == name)
    }
}

/// A named station and its departures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stop {
    pub name: String,

    /// Departures keyed by direction label (e.g. "上り").
    #[serde(default, deserialize_with = "null_as_default")]
    pub departures: HashMap<String, Vec<Departure>>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub access: Access,
}

impl Stop {
    /// Departures for a direction label, or an empty slice if there are none.
    pub fn departures_for(&self, label: &str) -> &[Departure] {
        self.departures.get(label).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Travel times from home to a stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Access {
    #[serde(default = "default_walk_mins", deserialize_with = "walk_mins")]
    pub walk: u32,

    #[serde(default = "default_bike_mins", deserialize_with = "bike_mins")]
    pub bike: u32,
}

impl Default for Access {
    fn default() -> Self {
        Self {
            walk: DEFAULT_WALK_MINS,
            bike: DEFAULT_BIKE_MINS,
        }
    }
}

fn default_walk_mins() -> u32 {
    DEFAULT_WALK_MINS
}

fn default_bike_mins() -> u32 {
    DEFAULT_BIKE_MINS
}

fn walk_mins<'de, D: Deserializer<'de>>(d: D) -> Result<u32, D::Error> {
    Ok(Option::<u32>::deserialize(d)?.unwrap_or(DEFAULT_WALK_MINS))
}

fn bike_mins<'de, D: Deserializer<'de>>(d: D) -> Result<u32, D::Error> {
    Ok(Option::<u32>::deserialize(d)?.unwrap_or(DEFAULT_BIKE_MINS))
}

/// Treat an explicit `null` the same as a missing field.
fn null_as_default<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(d)?.unwrap_or_default())
}

/// One scheduled train at a stop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Departure {
    pub time: ClockTime,

    /// Train category, e.g. "普通" or "快速".
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    pub destination: String,

    /// Identifier passed to the train details page. Empty when absent.
    #[serde(default, deserialize_with = "null_as_default")]
    pub train_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "stops": [
            {
                "name": "長野",
                "departures": {
                    "上り": [
                        { "time": "08:10", "type": "普通", "destination": "松本", "trainId": "1234M" },
                        { "time": "08:30", "destination": "篠ノ井" }
                    ]
                },
                "access": { "walk": 12, "bike": 4 }
            },
            {
                "name": "北長野",
                "departures": {},
                "access": { "walk": 20 }
            },
            { "name": "三才" }
        ]
    }"#;

    fn sample() -> ScheduleDocument {
        serde_json::from_str(SAMPLE).unwrap()
    }

    #[test]
    fn parses_full_departure() {
        let doc = sample();
        let stop = doc.stop("長野").unwrap();
        let deps = stop.departures_for("上り");
        assert_eq!(deps.len(), 2);

        assert_eq!(deps[0].time, ClockTime::parse_hhmm("08:10").unwrap());
        assert_eq!(deps[0].kind.as_deref(), Some("普通"));
        assert_eq!(deps[0].destination, "松本");
        assert_eq!(deps[0].train_id, "1234M");
    }

    #[test]
    fn optional_departure_fields_default() {
        let doc = sample();
        let dep = &doc.stop("長野").unwrap().departures_for("上り")[1];
        assert_eq!(dep.kind, None);
        assert_eq!(dep.train_id, "");
    }

    #[test]
    fn access_defaults() {
        let doc = sample();
        assert_eq!(doc.stop("長野").unwrap().access, Access { walk: 12, bike: 4 });
        // Partial record: only the missing field defaults
        assert_eq!(doc.stop("北長野").unwrap().access, Access { walk: 20, bike: 5 });
        // Missing record
        assert_eq!(doc.stop("三才").unwrap().access, Access::default());
        assert_eq!(Access::default(), Access { walk: 10, bike: 5 });
    }

    #[test]
    fn null_fields_take_defaults() {
        let json = r#"{ "stops": [
            { "name": "a", "departures": { "上り": [
                { "time": "08:10", "type": null, "destination": "松本", "trainId": null }
            ] }, "access": null },
            { "name": "b", "departures": null, "access": { "walk": null, "bike": 2 } },
            { "name": "c", "access": { "walk": 0, "bike": null } }
        ] }"#;
        let doc: ScheduleDocument = serde_json::from_str(json).unwrap();

        let a = doc.stop("a").unwrap();
        let dep = &a.departures_for("上り")[0];
        assert_eq!(dep.kind, None);
        assert_eq!(dep.train_id, "");
        assert_eq!(a.access, Access::default());

        let b = doc.stop("b").unwrap();
        assert!(b.departures_for("上り").is_empty());
        assert_eq!(b.access, Access { walk: 10, bike: 2 });

        // Zero is a real value, only null falls back
        assert_eq!(doc.stop("c").unwrap().access, Access { walk: 0, bike: 5 });
    }

    #[test]
    fn wrong_types_are_still_rejected() {
        let json = r#"{ "stops": [ { "name": "a", "access": { "walk": "ten" } } ] }"#;
        assert!(serde_json::from_str::<ScheduleDocument>(json).is_err());
    }

    #[test]
    fn missing_direction_is_empty() {
        let doc = sample();
        assert!(doc.stop("長野").unwrap().departures_for("下り").is_empty());
        assert!(doc.stop("三才").unwrap().departures_for("上り").is_empty());
    }

    #[test]
    fn stop_lookup_is_exact() {
        let doc = sample();
        assert!(doc.stop("長野").is_some());
        assert!(doc.stop("長野 ").is_none());
        assert!(doc.stop("Nagano").is_none());
    }

    #[test]
    fn malformed_time_is_rejected() {
        let json = r#"{ "stops": [ { "name": "x", "departures": { "上り": [
            { "time": "25:00", "destination": "y" }
        ] } } ] }"#;
        assert!(serde_json::from_str::<ScheduleDocument>(json).is_err());
    }

    #[test]
    fn missing_stops_is_rejected() {
        assert!(serde_json::from_str::<ScheduleDocument>("{}").is_err());
    }

    #[test]
    fn serializes_with_original_field_names() {
        let dep = Departure {
            time: ClockTime::parse_hhmm("09:00").unwrap(),
            kind: Some("快速".into()),
            destination: "長野".into(),
            train_id: "42".into(),
        };
        let json = serde_json::to_value(&dep).unwrap();
        assert_eq!(json["time"], "09:00");
        assert_eq!(json["type"], "快速");
        assert_eq!(json["trainId"], "42");
    }
}
