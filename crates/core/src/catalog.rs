//! In-memory catalogue of clinic records.
//!
//! The [`CatalogStore`] owns every collection for the lifetime of the process:
//!
//! - patients and doctors, added through [`CatalogStore::add_patient`] and
//!   [`CatalogStore::add_doctor`]
//! - the medicine catalogue, preloaded from [`CoreConfig`] and never modified
//! - appointments and payments, added by the [`appointments`](crate::appointments)
//!   and [`billing`](crate::billing) workflows
//!
//! Each collection is an append-only arena. Records refer to each other by typed
//! keys minted here, so a key stays valid for as long as the store lives.
//!
//! Lookups by identifier scan in insertion order and return the first match. With
//! [`IdPolicy::Shadow`] that means a later record sharing an identifier is never
//! returned by a lookup, although it still appears in listings.

use std::sync::Arc;

use crate::config::{CoreConfig, IdPolicy};
use crate::entities::{
    Appointment, AppointmentKey, AppointmentView, Doctor, DoctorKey, Medicine, MedicineKey,
    Patient, PatientKey, Payment, PaymentBreakdown,
};
use crate::error::{ClinicError, ClinicResult, RecordKind};

#[derive(Debug)]
pub struct CatalogStore {
    cfg: Arc<CoreConfig>,
    patients: Vec<Patient>,
    doctors: Vec<Doctor>,
    medicines: Vec<Medicine>,
    appointments: Vec<Appointment>,
    payments: Vec<Payment>,
}

impl CatalogStore {
    /// Creates an empty store with the configured medicine catalogue preloaded.
    pub fn new(cfg: Arc<CoreConfig>) -> Self {
        let medicines = cfg.medicines().to_vec();
        tracing::debug!(medicines = medicines.len(), "catalogue initialised");
        Self {
            cfg,
            patients: Vec::new(),
            doctors: Vec::new(),
            medicines,
            appointments: Vec::new(),
            payments: Vec::new(),
        }
    }

    pub fn config(&self) -> &CoreConfig {
        &self.cfg
    }

    // ------------------------------------------------------------------------
    // Patients and doctors
    // ------------------------------------------------------------------------

    /// Stores a new patient.
    ///
    /// # Errors
    ///
    /// Returns [`ClinicError::DuplicateId`] under [`IdPolicy::Unique`] when another
    /// patient already uses the same identifier. The store is left unchanged.
    pub fn add_patient(&mut self, patient: Patient) -> ClinicResult<&Patient> {
        self.ensure_new_id(RecordKind::Patient, patient.patient_id().as_str())?;
        tracing::info!(patient_id = %patient.patient_id(), "patient added");
        self.patients.push(patient);
        Ok(&self.patients[self.patients.len() - 1])
    }

    /// Stores a new doctor.
    ///
    /// # Errors
    ///
    /// Returns [`ClinicError::DuplicateId`] under [`IdPolicy::Unique`] when another
    /// doctor already uses the same identifier. The store is left unchanged.
    pub fn add_doctor(&mut self, doctor: Doctor) -> ClinicResult<&Doctor> {
        self.ensure_new_id(RecordKind::Doctor, doctor.doctor_id().as_str())?;
        tracing::info!(doctor_id = %doctor.doctor_id(), "doctor added");
        self.doctors.push(doctor);
        Ok(&self.doctors[self.doctors.len() - 1])
    }

    pub fn find_patient_by_id(&self, id: &str) -> Option<&Patient> {
        self.find_patient_key(id).and_then(|key| self.patient(key))
    }

    pub fn find_doctor_by_id(&self, id: &str) -> Option<&Doctor> {
        self.find_doctor_key(id).and_then(|key| self.doctor(key))
    }

    pub fn find_appointment_by_id(&self, id: &str) -> Option<&Appointment> {
        self.find_appointment_key(id)
            .and_then(|key| self.appointment(key))
    }

    pub fn find_payment_by_id(&self, id: &str) -> Option<&Payment> {
        self.payments.iter().find(|p| p.payment_id() == id)
    }

    pub(crate) fn find_patient_key(&self, id: &str) -> Option<PatientKey> {
        self.patients
            .iter()
            .position(|p| p.patient_id() == id)
            .map(PatientKey)
    }

    pub(crate) fn find_doctor_key(&self, id: &str) -> Option<DoctorKey> {
        self.doctors
            .iter()
            .position(|d| d.doctor_id() == id)
            .map(DoctorKey)
    }

    pub(crate) fn find_appointment_key(&self, id: &str) -> Option<AppointmentKey> {
        self.appointments
            .iter()
            .position(|a| a.appointment_id() == id)
            .map(AppointmentKey)
    }

    // ------------------------------------------------------------------------
    // Key resolution
    // ------------------------------------------------------------------------

    pub fn patient(&self, key: PatientKey) -> Option<&Patient> {
        self.patients.get(key.0)
    }

    pub fn doctor(&self, key: DoctorKey) -> Option<&Doctor> {
        self.doctors.get(key.0)
    }

    pub fn medicine(&self, key: MedicineKey) -> Option<&Medicine> {
        self.medicines.get(key.0)
    }

    pub fn appointment(&self, key: AppointmentKey) -> Option<&Appointment> {
        self.appointments.get(key.0)
    }

    // ------------------------------------------------------------------------
    // Medicine catalogue
    // ------------------------------------------------------------------------

    /// The preloaded catalogue in display order.
    pub fn medicines(&self) -> &[Medicine] {
        &self.medicines
    }

    /// Resolves a 1-based display position to a catalogue key.
    ///
    /// # Errors
    ///
    /// Returns [`ClinicError::InvalidSelection`] if `position` is outside
    /// `1..=catalogue size`.
    pub fn select_medicine(&self, position: i64) -> ClinicResult<MedicineKey> {
        let in_range = usize::try_from(position)
            .ok()
            .filter(|p| (1..=self.medicines.len()).contains(p));
        match in_range {
            Some(p) => Ok(MedicineKey(p - 1)),
            None => Err(ClinicError::InvalidSelection {
                position,
                catalogue_size: self.medicines.len(),
            }),
        }
    }

    /// The medicine shown at a 1-based display position.
    pub fn medicine_at(&self, position: i64) -> ClinicResult<&Medicine> {
        let key = self.select_medicine(position)?;
        Ok(&self.medicines[key.0])
    }

    // ------------------------------------------------------------------------
    // Listings
    // ------------------------------------------------------------------------

    pub fn patients(&self) -> std::slice::Iter<'_, Patient> {
        self.patients.iter()
    }

    pub fn doctors(&self) -> std::slice::Iter<'_, Doctor> {
        self.doctors.iter()
    }

    pub fn appointments(&self) -> std::slice::Iter<'_, Appointment> {
        self.appointments.iter()
    }

    pub fn payments(&self) -> std::slice::Iter<'_, Payment> {
        self.payments.iter()
    }

    // ------------------------------------------------------------------------
    // Joined views
    // ------------------------------------------------------------------------

    /// Joins an appointment with its patient, doctor and prescribed medicines.
    ///
    /// # Errors
    ///
    /// Returns [`ClinicError::UnknownKey`] if the appointment came from a different store.
    pub fn appointment_view<'a>(
        &'a self,
        appointment: &'a Appointment,
    ) -> ClinicResult<AppointmentView<'a>> {
        let patient = self
            .patient(appointment.patient())
            .ok_or(ClinicError::UnknownKey {
                kind: RecordKind::Patient,
            })?;
        let doctor = self
            .doctor(appointment.doctor())
            .ok_or(ClinicError::UnknownKey {
                kind: RecordKind::Doctor,
            })?;

        Ok(AppointmentView {
            appointment_id: appointment.appointment_id(),
            date: appointment.date(),
            patient,
            doctor,
            medicines: self.prescribed_medicines(appointment)?,
        })
    }

    /// Joins a payment with the appointment details a receipt shows.
    ///
    /// The doctor fee and medicine lines are read from the referenced records; the
    /// total is the amount frozen on the payment.
    pub fn payment_breakdown<'a>(
        &'a self,
        payment: &'a Payment,
    ) -> ClinicResult<PaymentBreakdown<'a>> {
        let appointment = self
            .appointment(payment.appointment())
            .ok_or(ClinicError::UnknownKey {
                kind: RecordKind::Appointment,
            })?;
        let view = self.appointment_view(appointment)?;

        Ok(PaymentBreakdown {
            payment_id: payment.payment_id(),
            appointment_id: view.appointment_id,
            patient_name: view.patient.person().name(),
            doctor_fee: view.doctor.consultation_fee(),
            medicines: view.medicines,
            total_amount: payment.total_amount(),
            payment_date: payment.payment_date(),
        })
    }

    pub(crate) fn prescribed_medicines<'a>(
        &'a self,
        appointment: &Appointment,
    ) -> ClinicResult<Vec<&'a Medicine>> {
        appointment
            .medicines()
            .iter()
            .map(|key| {
                self.medicine(*key).ok_or(ClinicError::UnknownKey {
                    kind: RecordKind::Medicine,
                })
            })
            .collect()
    }

    pub(crate) fn find_payment_for_appointment(&self, key: AppointmentKey) -> Option<&Payment> {
        self.payments.iter().find(|p| p.appointment() == key)
    }

    /// Fails with [`ClinicError::DuplicateId`] if `id` is taken and identifiers must be unique.
    ///
    /// Every create operation runs this check itself. Callers collecting input
    /// field by field can run it as soon as the identifier is known.
    pub fn ensure_new_id(&self, kind: RecordKind, id: &str) -> ClinicResult<()> {
        if self.cfg.id_policy() == IdPolicy::Shadow {
            return Ok(());
        }

        let taken = match kind {
            RecordKind::Patient => self.find_patient_key(id).is_some(),
            RecordKind::Doctor => self.find_doctor_key(id).is_some(),
            RecordKind::Appointment => self.find_appointment_key(id).is_some(),
            RecordKind::Payment => self.find_payment_by_id(id).is_some(),
            RecordKind::Medicine => false,
        };

        if taken {
            tracing::warn!(%kind, id, "rejected duplicate identifier");
            return Err(ClinicError::DuplicateId {
                kind,
                id: id.to_owned(),
            });
        }
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Insertion used by the workflows
    // ------------------------------------------------------------------------

    pub(crate) fn push_appointment(&mut self, appointment: Appointment) -> &Appointment {
        self.appointments.push(appointment);
        &self.appointments[self.appointments.len() - 1]
    }

    pub(crate) fn push_payment(&mut self, payment: Payment) -> &Payment {
        self.payments.push(payment);
        &self.payments[self.payments.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BillingPolicy;
    use crate::entities::Person;
    use clinic_types::{Amount, NonEmptyText};

    fn store_with(id_policy: IdPolicy) -> CatalogStore {
        CatalogStore::new(Arc::new(CoreConfig::with_policies(
            id_policy,
            BillingPolicy::Permissive,
        )))
    }

    fn patient(name: &str, id: &str) -> Patient {
        Patient::new(
            Person::new(name, 30, "F"),
            NonEmptyText::new(id).unwrap(),
            "Flu",
        )
    }

    fn doctor(name: &str, id: &str, fee: f64) -> Doctor {
        Doctor::new(
            Person::new(name, 45, "M"),
            NonEmptyText::new(id).unwrap(),
            "General",
            Amount::new(fee).unwrap(),
        )
    }

    #[test]
    fn test_add_patient_then_find_returns_same_fields() {
        let mut store = store_with(IdPolicy::Unique);
        store
            .add_patient(patient("Alice", "PID1"))
            .expect("add_patient should succeed");

        let found = store
            .find_patient_by_id("PID1")
            .expect("patient should be found");
        assert_eq!(found.person().name(), "Alice");
        assert_eq!(found.person().age(), 30);
        assert_eq!(found.person().gender(), "F");
        assert_eq!(found.patient_id().as_str(), "PID1");
        assert_eq!(found.disease(), "Flu");
    }

    #[test]
    fn test_find_unknown_ids_return_none() {
        let store = store_with(IdPolicy::Unique);
        assert!(store.find_patient_by_id("nope").is_none());
        assert!(store.find_doctor_by_id("nope").is_none());
        assert!(store.find_appointment_by_id("nope").is_none());
    }

    #[test]
    fn test_listings_preserve_insertion_order() {
        let mut store = store_with(IdPolicy::Unique);
        for (i, name) in ["Ann", "Ben", "Cid"].iter().enumerate() {
            store
                .add_doctor(doctor(name, &format!("D{i}"), 10.0))
                .expect("add_doctor should succeed");
            store
                .add_patient(patient(name, &format!("P{i}")))
                .expect("add_patient should succeed");
        }

        let doctors: Vec<&str> = store.doctors().map(|d| d.person().name()).collect();
        let patients: Vec<&str> = store.patients().map(|p| p.person().name()).collect();
        assert_eq!(doctors, vec!["Ann", "Ben", "Cid"]);
        assert_eq!(patients, vec!["Ann", "Ben", "Cid"]);

        // Listing again enumerates the same records.
        assert_eq!(store.doctors().len(), 3);
        assert_eq!(store.patients().len(), 3);
    }

    #[test]
    fn test_unique_policy_rejects_duplicate_patient_id() {
        let mut store = store_with(IdPolicy::Unique);
        store.add_patient(patient("Alice", "PID1")).unwrap();

        let err = store
            .add_patient(patient("Eve", "PID1"))
            .expect_err("duplicate id should be rejected");

        assert_eq!(
            err,
            ClinicError::DuplicateId {
                kind: RecordKind::Patient,
                id: "PID1".into()
            }
        );
        assert_eq!(store.patients().len(), 1);
    }

    #[test]
    fn test_shadow_policy_keeps_first_record_visible() {
        let mut store = store_with(IdPolicy::Shadow);
        store.add_doctor(doctor("First", "DID1", 100.0)).unwrap();
        store
            .add_doctor(doctor("Second", "DID1", 200.0))
            .expect("shadow policy accepts duplicates");

        assert_eq!(store.doctors().len(), 2);
        let found = store.find_doctor_by_id("DID1").unwrap();
        assert_eq!(found.person().name(), "First");
    }

    #[test]
    fn test_select_medicine_uses_one_based_positions() {
        let store = store_with(IdPolicy::Unique);

        assert_eq!(store.medicine_at(1).unwrap().name(), "Paracetamol");
        assert_eq!(store.medicine_at(4).unwrap().name(), "Pain Killer");

        for position in [0, 5, -1, 99] {
            let err = store
                .select_medicine(position)
                .expect_err("out of range position should fail");
            assert_eq!(
                err,
                ClinicError::InvalidSelection {
                    position,
                    catalogue_size: 4
                }
            );
        }
    }

    #[test]
    fn test_appointment_view_rejects_foreign_keys() {
        let store = store_with(IdPolicy::Unique);
        let foreign = Appointment::new(
            NonEmptyText::new("A1").unwrap(),
            PatientKey(7),
            DoctorKey(7),
            "01-01-2025".into(),
            vec![],
        );

        let err = store
            .appointment_view(&foreign)
            .expect_err("keys from another store should not resolve");
        assert_eq!(
            err,
            ClinicError::UnknownKey {
                kind: RecordKind::Patient
            }
        );
    }
}
