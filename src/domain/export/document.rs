//! Shareable JSON summary of a finished assessment.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::brain::{BrainAgeResult, CognitiveDomain};
use crate::domain::foundation::{AssessmentId, Driver, Percentile, Timestamp};
use crate::domain::functional::AssessmentResult;
use crate::domain::session::{AssessmentKind, BrainSession, FunctionalSession};

use super::errors::ExportError;

/// Version written into every new summary.
pub const SCHEMA_VERSION: u32 = 1;

fn default_schema_version() -> u32 {
    SCHEMA_VERSION
}

/// Top-level export document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    pub assessment: ExportedAssessment,
    pub scores: ExportedScores,
}

/// Raw answers as they were recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedAssessment {
    pub id: AssessmentId,
    #[serde(rename = "type")]
    pub kind: AssessmentKind,
    /// ISO-8601 export time.
    pub date: String,
    pub profile: Value,
    pub results: Value,
}

/// Scores block; the variant is recognised by its age field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExportedScores {
    Functional(FunctionalScores),
    Brain(BrainScores),
}

impl ExportedScores {
    pub fn kind(&self) -> AssessmentKind {
        match self {
            ExportedScores::Functional(_) => AssessmentKind::Functional,
            ExportedScores::Brain(_) => AssessmentKind::Brain,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionalScores {
    pub functional_age: u8,
    pub chronological_age: u8,
    pub gap: i16,
    pub top_drivers: Vec<Driver>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrainScores {
    pub brain_age: u8,
    pub chronological_age: u8,
    pub gap: i16,
    pub top_drivers: Vec<Driver>,
    pub domain_percentiles: Vec<DomainPercentile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contextual_note: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainPercentile {
    pub domain: CognitiveDomain,
    pub percentile: Percentile,
}

impl From<&AssessmentResult> for FunctionalScores {
    fn from(result: &AssessmentResult) -> Self {
        Self {
            functional_age: result.functional_age,
            chronological_age: result.chronological_age,
            gap: result.gap,
            top_drivers: result.top_drivers.clone(),
        }
    }
}

impl From<&BrainAgeResult> for BrainScores {
    fn from(result: &BrainAgeResult) -> Self {
        Self {
            brain_age: result.brain_age,
            chronological_age: result.chronological_age,
            gap: result.gap,
            top_drivers: result.top_drivers.clone(),
            domain_percentiles: result
                .domain_scores
                .iter()
                .map(|s| DomainPercentile {
                    domain: s.domain,
                    percentile: s.percentile,
                })
                .collect(),
            contextual_note: result.contextual_note.clone(),
        }
    }
}

impl ExportDocument {
    pub fn functional(
        session: &FunctionalSession,
        result: &AssessmentResult,
        at: Timestamp,
    ) -> Result<Self, ExportError> {
        let (profile, results) = split_profile(serde_json::to_value(session.data())?);
        Ok(Self {
            schema_version: SCHEMA_VERSION,
            assessment: ExportedAssessment {
                id: *session.id(),
                kind: AssessmentKind::Functional,
                date: at.to_iso8601(),
                profile,
                results,
            },
            scores: ExportedScores::Functional(result.into()),
        })
    }

    pub fn brain(
        session: &BrainSession,
        result: &BrainAgeResult,
        at: Timestamp,
    ) -> Result<Self, ExportError> {
        let (profile, results) = split_profile(serde_json::to_value(session.data())?);
        Ok(Self {
            schema_version: SCHEMA_VERSION,
            assessment: ExportedAssessment {
                id: *session.id(),
                kind: AssessmentKind::Brain,
                date: at.to_iso8601(),
                profile,
                results,
            },
            scores: ExportedScores::Brain(result.into()),
        })
    }

    /// Parsed `assessment.date`.
    pub fn date(&self) -> Result<Timestamp, ExportError> {
        Timestamp::parse_iso8601(&self.assessment.date)
            .map_err(|_| ExportError::InvalidDate(self.assessment.date.clone()))
    }

    pub fn to_json(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Pulls the profile out of a serialized data record, leaving only the slots.
fn split_profile(data: Value) -> (Value, Value) {
    match data {
        Value::Object(mut map) => {
            let profile = map.remove("profile").unwrap_or(Value::Null);
            (profile, Value::Object(map))
        }
        other => (Value::Null, other),
    }
}

/// Serializes a functional summary to pretty JSON.
pub fn export_functional_summary(
    session: &FunctionalSession,
    result: &AssessmentResult,
    at: Timestamp,
) -> Result<String, ExportError> {
    ExportDocument::functional(session, result, at)?.to_json()
}

/// Serializes a brain age summary to pretty JSON.
pub fn export_brain_summary(
    session: &BrainSession,
    result: &BrainAgeResult,
    at: Timestamp,
) -> Result<String, ExportError> {
    ExportDocument::brain(session, result, at)?.to_json()
}

/// Reads a summary back, checking version, date and type.
pub fn parse_summary(json: &str) -> Result<ExportDocument, ExportError> {
    let document: ExportDocument = serde_json::from_str(json)?;

    if document.schema_version > SCHEMA_VERSION {
        return Err(ExportError::UnsupportedSchemaVersion(document.schema_version));
    }
    document.date()?;
    if document.scores.kind() != document.assessment.kind {
        return Err(ExportError::KindMismatch {
            kind: document.assessment.kind.to_string(),
        });
    }

    Ok(document)
}
