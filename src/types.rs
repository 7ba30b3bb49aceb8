// Shared types used across the codebase

use serde::{Deserialize, Serialize};

/// A stored patient record, as returned by every patient endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: String,
    pub name: String,
    pub birth_date: String,
    pub condition: Option<String>,
}

/// Body of `POST /v2/patients`.
///
/// Every field is optional at the wire level so that presence can be
/// checked by the store and reported as a validation error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPatient {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub birth_date: Option<String>,
    #[serde(default)]
    pub condition: Option<String>,
}

impl NewPatient {
    pub fn new(name: impl Into<String>, birth_date: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            birth_date: Some(birth_date.into()),
            condition: None,
        }
    }

    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }
}
