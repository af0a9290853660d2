// services/rollcall-dash/src/mock.rs
//
// Roll Call Dashboard - Demo Document Generator
// Produces a summary shaped like the upstream output.json for UI development and demos
//

use std::collections::BTreeSet;

use async_trait::async_trait;
use dashkit::types::{CountMap, SpecialStudents};
use dashkit::{DashError, Document, DocumentSource, ViewData};
use indexmap::IndexMap;
use rand::prelude::*;
use serde_json::{json, Value};

const ATTENDEES: [&str; 12] = [
    "Ada Lovelace",
    "Alan Turing",
    "Barbara Liskov",
    "Claude Shannon",
    "Donald Knuth",
    "Edsger Dijkstra",
    "Frances Allen",
    "Grace Hopper",
    "John Backus",
    "Ken Thompson",
    "Margaret Hamilton",
    "Radia Perlman",
];

const SESSION_DATES: [&str; 4] = ["2024/09/03", "2024/09/10", "2024/09/17", "2024/09/24"];

const SPECIAL_STUDENTS: [&str; 3] = ["Alan Turing", "Grace Hopper", "Radia Perlman"];

/// Ten-minute buckets of a one-hour session
const BUCKETS: usize = 6;

/// Serves a freshly generated document instead of fetching one
pub struct DemoSource;

#[async_trait(?Send)]
impl DocumentSource for DemoSource {
    async fn fetch_document(&self) -> Result<Document, DashError> {
        Ok(generate_document(&mut thread_rng()))
    }
}

fn bucket_label(index: usize) -> String {
    let minutes = index * 10;
    format!("{:02}:{:02}:00", minutes / 60, minutes % 60)
}

/// One session: who showed up, who spoke how often, and how many spoke per bucket
fn generate_session(rng: &mut impl Rng) -> (Vec<&'static str>, ViewData) {
    let present: Vec<&'static str> = ATTENDEES
        .iter()
        .copied()
        .filter(|_| rng.gen_bool(0.8))
        .collect();

    let mut interaction_counts = CountMap::new();
    let mut non_participants = Vec::new();
    for name in &present {
        // Roughly a third of the room stays silent
        if rng.gen_bool(0.35) {
            non_participants.push(name.to_string());
        } else {
            interaction_counts.insert(name.to_string(), rng.gen_range(1..=9));
        }
    }

    let speakers = interaction_counts.len() as u64;
    let participation_over_time = (0..BUCKETS)
        .map(|i| (bucket_label(i), rng.gen_range(0..=speakers)))
        .collect();

    let data = ViewData {
        total_participants: speakers,
        total_non_participants: non_participants.len() as u64,
        interaction_counts,
        non_participants,
        participation_over_time,
    };
    (present, data)
}

pub fn generate_document(rng: &mut impl Rng) -> Document {
    let mut by_date = IndexMap::new();
    let mut seen: BTreeSet<&'static str> = BTreeSet::new();
    let mut aggregate_counts = CountMap::new();
    let mut aggregate_buckets = CountMap::new();
    let mut special: IndexMap<String, IndexMap<String, u64>> = IndexMap::new();

    for date in SESSION_DATES {
        let (present, data) = generate_session(rng);
        seen.extend(present);

        for (name, count) in &data.interaction_counts {
            *aggregate_counts.entry(name.clone()).or_insert(0) += count;
            if SPECIAL_STUDENTS.contains(&name.as_str()) {
                special
                    .entry(name.clone())
                    .or_default()
                    .insert(date.to_string(), *count);
            }
        }
        for (bucket, count) in &data.participation_over_time {
            let total = aggregate_buckets.entry(bucket.clone()).or_insert(0);
            *total = (*total).max(*count);
        }

        by_date.insert(date.to_string(), data);
    }

    let non_participants: Vec<String> = seen
        .iter()
        .filter(|name| !aggregate_counts.contains_key(**name))
        .map(|name| name.to_string())
        .collect();

    let aggregate = ViewData {
        total_participants: aggregate_counts.len() as u64,
        total_non_participants: non_participants.len() as u64,
        interaction_counts: aggregate_counts,
        non_participants,
        participation_over_time: aggregate_buckets,
    };

    let special_students: SpecialStudents = special
        .into_iter()
        .map(|(name, sessions)| (name, json!(sessions)))
        .collect::<IndexMap<String, Value>>();

    Document {
        aggregate: Some(aggregate),
        by_date,
        special_students,
    }
}
