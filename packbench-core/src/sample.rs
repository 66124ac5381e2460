// SPDX-License-Identifier: Apache-2.0

//! Built-in sample payload.
//!
//! A deterministic ~1 MB JSON document of synthetic user records. The text
//! repeats enough for the DEFLATE-family codecs to achieve a ratio above 1,
//! which the end-to-end tests rely on.

use serde_json::{json, Value};

use crate::payload::Payload;

const RECORD_COUNT: usize = 1800;

const CITIES: [&str; 8] = [
    "Springfield",
    "Riverton",
    "Lakewood",
    "Fairview",
    "Greenville",
    "Bristol",
    "Clinton",
    "Ashland",
];

const TAGS: [&str; 6] = ["alpha", "beta", "gamma", "delta", "epsilon", "zeta"];

const BIO: &str = "Enjoys reading, long-distance running, and open source. \
                   Maintains a small garden and a large backlog of side projects.";

/// Generate the default sample payload (~1 MB of canonical JSON).
pub fn default_sample() -> Payload {
    let records: Vec<Value> = (0..RECORD_COUNT).map(record).collect();

    Payload::new(json!({
        "dataset": "packbench-sample",
        "version": 1,
        "records": records,
    }))
}

fn record(i: usize) -> Value {
    json!({
        "id": i,
        "name": format!("User {:05}", i),
        "email": format!("user{:05}@example.com", i),
        "active": i % 3 != 0,
        "score": (i % 100) as f64 / 10.0,
        "address": {
            "street": format!("{} Main St", 100 + i % 900),
            "city": CITIES[i % CITIES.len()],
            "zip": format!("{:05}", 10000 + i % 80000),
        },
        "tags": [
            TAGS[i % TAGS.len()],
            TAGS[(i + 2) % TAGS.len()],
            TAGS[(i + 4) % TAGS.len()],
        ],
        "bio": BIO,
        "history": (0..4).map(|j| json!({
            "event": "login",
            "session": format!("{:08x}", i * 31 + j * 7),
            "duration_s": (i * 13 + j * 97) % 3600,
        })).collect::<Vec<_>>(),
    })
}
