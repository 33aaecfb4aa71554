// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    lowest = { 1 },
    typical = { 88 },
    highest = { 100 },
)]
fn score_accepts_closed_range(value: i64) {
    let score = Score::new(value).unwrap();
    assert_eq!(i64::from(score.value()), value);
}

#[parameterized(
    zero = { 0 },
    negative = { -5 },
    just_above = { 101 },
    huge = { 1_000_000 },
)]
fn score_rejects_outside_range(value: i64) {
    let err = Score::new(value).unwrap_err();
    assert!(matches!(err, Error::ScoreOutOfRange(v) if v == value));
}

#[test]
fn score_from_str() {
    assert_eq!("92".parse::<Score>().unwrap().value(), 92);
    assert_eq!(" 7 ".parse::<Score>().unwrap().value(), 7);
    assert!(matches!(
        "ninety".parse::<Score>(),
        Err(Error::InvalidInput(_))
    ));
    assert!(matches!(
        "150".parse::<Score>(),
        Err(Error::ScoreOutOfRange(150))
    ));
}

#[test]
fn score_serde_is_a_plain_number() {
    let score = Score::new(85).unwrap();
    assert_eq!(serde_json::to_string(&score).unwrap(), "85");

    let back: Score = serde_json::from_str("85").unwrap();
    assert_eq!(back, score);

    assert!(serde_json::from_str::<Score>("0").is_err());
}

#[test]
fn score_display() {
    assert_eq!(Score::new(42).unwrap().to_string(), "42");
}
