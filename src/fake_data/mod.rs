// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Random record generators for the fake-data endpoints.
//!
//! Every generator takes the random source explicitly so tests can use a
//! seeded one; handlers pass `rand::thread_rng()`. Record ids are UUID v4
//! strings built from the same source.

mod names;

use chrono::{Duration, NaiveTime, Utc};
use rand::{seq::SliceRandom, Rng};
use uuid::Builder;

use crate::models::{Control, Incident, Policy, Risk, User};
use names::*;

/// Records returned by a list endpoint.
pub const LIST_SIZE: usize = 10;

/// Furthest back a generated policy publication date can be.
const MAX_PUBLISHED_DAYS_AGO: i64 = 365;

fn pick<R: Rng + ?Sized>(rng: &mut R, values: &[&str]) -> String {
    values.choose(rng).copied().unwrap_or_default().to_string()
}

fn random_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    Builder::from_random_bytes(rng.gen()).into_uuid().to_string()
}

fn lorem_sentence<R: Rng + ?Sized>(rng: &mut R) -> String {
    let len = rng.gen_range(6..=12);
    let words: Vec<&str> = (0..len)
        .filter_map(|_| LOREM_WORDS.choose(&mut *rng).copied())
        .collect();
    format!("{}.", capitalize(&words.join(" ")))
}

fn lorem_paragraph<R: Rng + ?Sized>(rng: &mut R) -> String {
    let sentences = rng.gen_range(3..=5);
    (0..sentences)
        .map(|_| lorem_sentence(&mut *rng))
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn user<R: Rng + ?Sized>(rng: &mut R) -> User {
    let first_name = pick(rng, FIRST_NAMES);
    let last_name = pick(rng, LAST_NAMES);
    let email = format!(
        "{}.{}@{}",
        first_name.to_lowercase(),
        last_name.to_lowercase(),
        pick(rng, EMAIL_DOMAINS)
    );
    User {
        id: random_id(rng),
        first_name,
        last_name,
        email,
        status: pick(rng, ACTIVE_STATUSES),
    }
}

pub fn policy<R: Rng + ?Sized>(rng: &mut R) -> Policy {
    let days_ago = rng.gen_range(1..=MAX_PUBLISHED_DAYS_AGO);
    let published_at = (Utc::now().date_naive() - Duration::days(days_ago))
        .and_time(NaiveTime::MIN)
        .and_utc();
    Policy {
        id: random_id(rng),
        name: pick(rng, POLICY_NAMES),
        description: lorem_paragraph(rng),
        status: pick(rng, ACTIVE_STATUSES),
        published_at,
    }
}

pub fn risk<R: Rng + ?Sized>(rng: &mut R) -> Risk {
    Risk {
        id: random_id(rng),
        title: pick(rng, RISK_TITLES),
        severity: pick(rng, RISK_RATINGS),
        impact: pick(rng, RISK_RATINGS),
    }
}

pub fn incident<R: Rng + ?Sized>(rng: &mut R) -> Incident {
    Incident {
        id: random_id(rng),
        title: pick(rng, INCIDENT_TITLES),
        status: pick(rng, INCIDENT_STATUSES),
        priority: pick(rng, INCIDENT_PRIORITIES),
    }
}

pub fn control<R: Rng + ?Sized>(rng: &mut R) -> Control {
    Control {
        id: random_id(rng),
        name: pick(rng, CONTROL_NAMES),
        policy_id: random_id(rng),
        status: pick(rng, CONTROL_STATUSES),
    }
}

/// Generate `count` records with `generate`.
pub fn many<T, R, F>(rng: &mut R, count: usize, mut generate: F) -> Vec<T>
where
    R: Rng + ?Sized,
    F: FnMut(&mut R) -> T,
{
    (0..count).map(|_| generate(&mut *rng)).collect()
}
