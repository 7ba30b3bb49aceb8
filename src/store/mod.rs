// In-memory patient store
//
// Records live for the lifetime of the process. Ids come from a monotonic
// counter that is advanced under the same write lock as the append, so two
// concurrent creates can never observe the same id.

use thiserror::Error;
use tokio::sync::RwLock;

use crate::types::{NewPatient, Patient};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("name and birthDate are required")]
    MissingRequiredFields,

    #[error("patient '{0}' not found")]
    NotFound(String),
}

#[derive(Debug)]
struct Inner {
    patients: Vec<Patient>,
    next_id: u64,
}

#[derive(Debug)]
pub struct PatientStore {
    inner: RwLock<Inner>,
}

impl PatientStore {
    /// Empty store; the first created patient gets id "1"
    pub fn new() -> Self {
        Self::with_patients(Vec::new())
    }

    /// Store pre-populated with the demo records
    pub fn seeded() -> Self {
        Self::with_patients(vec![
            Patient {
                id: "1".to_string(),
                name: "Alice Smith".to_string(),
                birth_date: "1980-05-10".to_string(),
                condition: Some("Hypertension".to_string()),
            },
            Patient {
                id: "2".to_string(),
                name: "Bob Lee".to_string(),
                birth_date: "1975-09-22".to_string(),
                condition: Some("Diabetes".to_string()),
            },
        ])
    }

    fn with_patients(patients: Vec<Patient>) -> Self {
        let next_id = patients.len() as u64 + 1;
        Self {
            inner: RwLock::new(Inner { patients, next_id }),
        }
    }

    /// All records in insertion order
    pub async fn list(&self) -> Vec<Patient> {
        self.inner.read().await.patients.clone()
    }

    pub async fn get_by_id(&self, id: &str) -> Option<Patient> {
        self.inner
            .read()
            .await
            .patients
            .iter()
            .find(|p| p.id == id)
            .cloned()
    }

    /// Like [`get_by_id`](Self::get_by_id) but reports absence as an error
    pub async fn find(&self, id: &str) -> Result<Patient, StoreError> {
        self.get_by_id(id)
            .await
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    pub async fn create(&self, new: NewPatient) -> Result<Patient, StoreError> {
        let name = non_empty(new.name).ok_or(StoreError::MissingRequiredFields)?;
        let birth_date = non_empty(new.birth_date).ok_or(StoreError::MissingRequiredFields)?;

        let mut inner = self.inner.write().await;
        let patient = Patient {
            id: inner.next_id.to_string(),
            name,
            birth_date,
            condition: non_empty(new.condition),
        };
        inner.next_id += 1;
        inner.patients.push(patient.clone());

        tracing::debug!("Created patient {} ({} total)", patient.id, inner.patients.len());
        Ok(patient)
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.patients.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for PatientStore {
    fn default() -> Self {
        Self::seeded()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
