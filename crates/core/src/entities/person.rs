use clinic_types::{Amount, NonEmptyText};
use serde::Serialize;

/// Fields shared by every person the clinic records.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Person {
    name: String,
    age: u32,
    gender: String,
}

impl Person {
    pub fn new(name: impl Into<String>, age: u32, gender: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            gender: gender.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn gender(&self) -> &str {
        &self.gender
    }
}

/// A registered patient.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Patient {
    #[serde(flatten)]
    person: Person,
    patient_id: NonEmptyText,
    disease: String,
}

impl Patient {
    pub fn new(person: Person, patient_id: NonEmptyText, disease: impl Into<String>) -> Self {
        Self {
            person,
            patient_id,
            disease: disease.into(),
        }
    }

    pub fn person(&self) -> &Person {
        &self.person
    }

    pub fn patient_id(&self) -> &NonEmptyText {
        &self.patient_id
    }

    pub fn disease(&self) -> &str {
        &self.disease
    }
}

/// A registered doctor and the fee they charge per consultation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Doctor {
    #[serde(flatten)]
    person: Person,
    doctor_id: NonEmptyText,
    specialization: String,
    consultation_fee: Amount,
}

impl Doctor {
    pub fn new(
        person: Person,
        doctor_id: NonEmptyText,
        specialization: impl Into<String>,
        consultation_fee: Amount,
    ) -> Self {
        Self {
            person,
            doctor_id,
            specialization: specialization.into(),
            consultation_fee,
        }
    }

    pub fn person(&self) -> &Person {
        &self.person
    }

    pub fn doctor_id(&self) -> &NonEmptyText {
        &self.doctor_id
    }

    pub fn specialization(&self) -> &str {
        &self.specialization
    }

    pub fn consultation_fee(&self) -> Amount {
        self.consultation_fee
    }
}
