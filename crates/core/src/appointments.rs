//! Appointment workflow.
//!
//! Links an existing patient and doctor and attaches the medicines bought during
//! the consultation. Medicine selections are 1-based catalogue positions; a bad
//! position is skipped and reported without aborting the appointment.

use clinic_types::NonEmptyText;

use crate::catalog::CatalogStore;
use crate::entities::Appointment;
use crate::error::{ClinicError, ClinicResult, RecordKind};

/// Input for [`schedule_appointment`].
#[derive(Clone, Debug)]
pub struct AppointmentRequest {
    pub appointment_id: NonEmptyText,
    pub patient_id: String,
    pub doctor_id: String,
    pub date: String,
    /// 1-based catalogue positions in the order they were entered.
    pub selections: Vec<i64>,
}

/// The stored appointment plus one [`ClinicError::InvalidSelection`] per skipped selection.
#[derive(Debug)]
pub struct ScheduledAppointment<'a> {
    pub appointment: &'a Appointment,
    pub rejected: Vec<ClinicError>,
}

/// Creates an appointment and appends it to the store.
///
/// The patient is resolved first, then the doctor. Valid selections keep their
/// entry order and may repeat.
///
/// # Errors
///
/// Returns `ClinicError` if:
/// - the patient or doctor identifier does not resolve ([`ClinicError::NotFound`]),
/// - the appointment identifier is already in use under
///   [`IdPolicy::Unique`](crate::IdPolicy::Unique) ([`ClinicError::DuplicateId`]).
///
/// Nothing is stored when an error is returned.
pub fn schedule_appointment(
    store: &mut CatalogStore,
    request: AppointmentRequest,
) -> ClinicResult<ScheduledAppointment<'_>> {
    let patient = store
        .find_patient_key(&request.patient_id)
        .ok_or_else(|| not_found(RecordKind::Patient, &request.patient_id))?;
    let doctor = store
        .find_doctor_key(&request.doctor_id)
        .ok_or_else(|| not_found(RecordKind::Doctor, &request.doctor_id))?;
    store.ensure_new_id(RecordKind::Appointment, request.appointment_id.as_str())?;

    let mut medicines = Vec::with_capacity(request.selections.len());
    let mut rejected = Vec::new();
    for position in request.selections {
        match store.select_medicine(position) {
            Ok(key) => medicines.push(key),
            Err(e) => {
                tracing::warn!(position, "skipping invalid medicine selection");
                rejected.push(e);
            }
        }
    }

    tracing::info!(
        appointment_id = %request.appointment_id,
        medicines = medicines.len(),
        skipped = rejected.len(),
        "appointment created"
    );

    let appointment = Appointment::new(
        request.appointment_id,
        patient,
        doctor,
        request.date,
        medicines,
    );
    let appointment = store.push_appointment(appointment);

    Ok(ScheduledAppointment {
        appointment,
        rejected,
    })
}

fn not_found(kind: RecordKind, id: &str) -> ClinicError {
    tracing::warn!(%kind, id, "lookup failed");
    ClinicError::NotFound {
        kind,
        id: id.to_owned(),
    }
}
