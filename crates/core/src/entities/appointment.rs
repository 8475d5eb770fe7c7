use clinic_types::NonEmptyText;
use serde::Serialize;

use super::{Doctor, DoctorKey, Medicine, MedicineKey, Patient, PatientKey};

/// A consultation linking one patient to one doctor, with the medicines bought
/// during it in prescription order.
#[derive(Debug, Clone, PartialEq)]
pub struct Appointment {
    appointment_id: NonEmptyText,
    patient: PatientKey,
    doctor: DoctorKey,
    date: String,
    medicines: Vec<MedicineKey>,
}

impl Appointment {
    pub(crate) fn new(
        appointment_id: NonEmptyText,
        patient: PatientKey,
        doctor: DoctorKey,
        date: String,
        medicines: Vec<MedicineKey>,
    ) -> Self {
        Self {
            appointment_id,
            patient,
            doctor,
            date,
            medicines,
        }
    }

    pub fn appointment_id(&self) -> &NonEmptyText {
        &self.appointment_id
    }

    pub fn patient(&self) -> PatientKey {
        self.patient
    }

    pub fn doctor(&self) -> DoctorKey {
        self.doctor
    }

    /// Free-form date text, conventionally `dd-mm-yyyy`.
    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn medicines(&self) -> &[MedicineKey] {
        &self.medicines
    }
}

/// An appointment joined with the records it references.
#[derive(Debug, Clone, Serialize)]
pub struct AppointmentView<'a> {
    pub appointment_id: &'a NonEmptyText,
    pub date: &'a str,
    pub patient: &'a Patient,
    pub doctor: &'a Doctor,
    pub medicines: Vec<&'a Medicine>,
}
