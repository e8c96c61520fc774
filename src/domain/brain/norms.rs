//! Age-bracketed norm tables and the two canonical bracket scorers.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ChronologicalAge, Percentile};

/// Age range used to pick norm thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeBracket {
    #[serde(rename = "18-29")]
    Twenties,
    #[serde(rename = "30-39")]
    Thirties,
    #[serde(rename = "40-49")]
    Forties,
    #[serde(rename = "50-59")]
    Fifties,
    #[serde(rename = "60-69")]
    Sixties,
    #[serde(rename = "70+")]
    SeventyPlus,
}

impl AgeBracket {
    pub fn for_age(age: ChronologicalAge) -> Self {
        match age.years() {
            0..=29 => AgeBracket::Twenties,
            30..=39 => AgeBracket::Thirties,
            40..=49 => AgeBracket::Forties,
            50..=59 => AgeBracket::Fifties,
            60..=69 => AgeBracket::Sixties,
            _ => AgeBracket::SeventyPlus,
        }
    }
}

/// Excellent / good / average / poor cut points for one metric and bracket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub excellent: f64,
    pub good: f64,
    pub average: f64,
    pub poor: f64,
}

const fn t(excellent: f64, good: f64, average: f64, poor: f64) -> Thresholds {
    Thresholds {
        excellent,
        good,
        average,
        poor,
    }
}

/// Metrics with a norm table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NormMetric {
    /// Trimmed mean reaction time, ms. Lower is better.
    ReactionTime,
    /// Stroop interference, ms. Lower is better.
    StroopInterference,
    /// Forward + 1.5 x backward span. Higher is better.
    WeightedSpan,
    /// Go/no-go composite, 0-100. Higher is better.
    GoNoGoComposite,
    /// Trail B minus A, ms. Lower is better.
    TrailSwitchCost,
}

impl NormMetric {
    pub fn thresholds(&self, bracket: AgeBracket) -> Thresholds {
        use AgeBracket::*;
        match (self, bracket) {
            (NormMetric::ReactionTime, Twenties) => t(250.0, 290.0, 340.0, 400.0),
            (NormMetric::ReactionTime, Thirties) => t(265.0, 305.0, 355.0, 420.0),
            (NormMetric::ReactionTime, Forties) => t(280.0, 320.0, 375.0, 440.0),
            (NormMetric::ReactionTime, Fifties) => t(300.0, 345.0, 400.0, 470.0),
            (NormMetric::ReactionTime, Sixties) => t(325.0, 370.0, 430.0, 510.0),
            (NormMetric::ReactionTime, SeventyPlus) => t(350.0, 400.0, 470.0, 560.0),

            (NormMetric::StroopInterference, Twenties) => t(60.0, 100.0, 150.0, 220.0),
            (NormMetric::StroopInterference, Thirties) => t(70.0, 110.0, 165.0, 240.0),
            (NormMetric::StroopInterference, Forties) => t(80.0, 125.0, 180.0, 260.0),
            (NormMetric::StroopInterference, Fifties) => t(95.0, 140.0, 200.0, 290.0),
            (NormMetric::StroopInterference, Sixties) => t(110.0, 160.0, 225.0, 320.0),
            (NormMetric::StroopInterference, SeventyPlus) => t(130.0, 185.0, 255.0, 360.0),

            (NormMetric::WeightedSpan, Twenties) => t(15.0, 13.0, 11.0, 9.0),
            (NormMetric::WeightedSpan, Thirties) => t(14.5, 12.5, 10.5, 8.5),
            (NormMetric::WeightedSpan, Forties) => t(14.0, 12.0, 10.0, 8.0),
            (NormMetric::WeightedSpan, Fifties) => t(13.0, 11.0, 9.0, 7.5),
            (NormMetric::WeightedSpan, Sixties) => t(12.0, 10.0, 8.5, 7.0),
            (NormMetric::WeightedSpan, SeventyPlus) => t(11.0, 9.0, 7.5, 6.0),

            (NormMetric::GoNoGoComposite, Twenties) => t(92.0, 85.0, 75.0, 62.0),
            (NormMetric::GoNoGoComposite, Thirties) => t(90.0, 83.0, 73.0, 60.0),
            (NormMetric::GoNoGoComposite, Forties) => t(88.0, 80.0, 70.0, 57.0),
            (NormMetric::GoNoGoComposite, Fifties) => t(85.0, 77.0, 67.0, 54.0),
            (NormMetric::GoNoGoComposite, Sixties) => t(82.0, 74.0, 63.0, 50.0),
            (NormMetric::GoNoGoComposite, SeventyPlus) => t(78.0, 70.0, 60.0, 46.0),

            (NormMetric::TrailSwitchCost, Twenties) => t(2000.0, 3500.0, 5500.0, 8000.0),
            (NormMetric::TrailSwitchCost, Thirties) => t(2300.0, 3900.0, 6000.0, 8800.0),
            (NormMetric::TrailSwitchCost, Forties) => t(2700.0, 4400.0, 6800.0, 9800.0),
            (NormMetric::TrailSwitchCost, Fifties) => t(3200.0, 5100.0, 7800.0, 11000.0),
            (NormMetric::TrailSwitchCost, Sixties) => t(3900.0, 6000.0, 9000.0, 12800.0),
            (NormMetric::TrailSwitchCost, SeventyPlus) => t(4800.0, 7200.0, 10800.0, 15000.0),
        }
    }
}

/// Offset and percentile for one metric value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BracketScore {
    pub age_offset: f64,
    pub percentile: Percentile,
}

const fn score(age_offset: f64, percentile: u8) -> BracketScore {
    BracketScore {
        age_offset,
        percentile: Percentile::new(percentile),
    }
}

const EXCELLENT: BracketScore = score(-4.0, 90);
const GOOD: BracketScore = score(-2.0, 72);
const AVERAGE: BracketScore = score(0.0, 50);
const POOR: BracketScore = score(3.0, 28);
const VERY_POOR: BracketScore = score(5.0, 10);

/// Scores a metric where smaller values are better. Non-finite values score worst.
pub fn score_lower_is_better(value: f64, thresholds: &Thresholds) -> BracketScore {
    if !value.is_finite() {
        VERY_POOR
    } else if value <= thresholds.excellent {
        EXCELLENT
    } else if value <= thresholds.good {
        GOOD
    } else if value <= thresholds.average {
        AVERAGE
    } else if value <= thresholds.poor {
        POOR
    } else {
        VERY_POOR
    }
}

/// Scores a metric where larger values are better. Non-finite values score worst.
pub fn score_higher_is_better(value: f64, thresholds: &Thresholds) -> BracketScore {
    if !value.is_finite() {
        VERY_POOR
    } else if value >= thresholds.excellent {
        EXCELLENT
    } else if value >= thresholds.good {
        GOOD
    } else if value >= thresholds.average {
        AVERAGE
    } else if value >= thresholds.poor {
        POOR
    } else {
        VERY_POOR
    }
}
