//! Billing.
//!
//! A payment's total is the doctor's consultation fee plus the price of every
//! prescribed medicine, summed in prescription order with plain `f64` addition.
//! The total is frozen into the [`Payment`] when it is recorded.

use clinic_types::{Amount, NonEmptyText};

use crate::catalog::CatalogStore;
use crate::config::BillingPolicy;
use crate::entities::{Appointment, Payment};
use crate::error::{ClinicError, ClinicResult, RecordKind};

/// Input for [`record_payment`].
#[derive(Clone, Debug)]
pub struct PaymentRequest {
    pub payment_id: NonEmptyText,
    pub appointment_id: String,
    pub payment_date: String,
}

/// Computes what an appointment costs right now.
pub fn appointment_total(
    store: &CatalogStore,
    appointment: &Appointment,
) -> ClinicResult<Amount> {
    let doctor = store
        .doctor(appointment.doctor())
        .ok_or(ClinicError::UnknownKey {
            kind: RecordKind::Doctor,
        })?;

    let total = store
        .prescribed_medicines(appointment)?
        .iter()
        .fold(doctor.consultation_fee().value(), |acc, m| {
            acc + m.price().value()
        });

    tracing::debug!(appointment_id = %appointment.appointment_id(), total, "computed total");
    Ok(Amount::new(total)?)
}

/// Records a payment for an existing appointment.
///
/// # Errors
///
/// Returns `ClinicError` if:
/// - the appointment identifier does not resolve ([`ClinicError::NotFound`]),
/// - the payment identifier is already in use under
///   [`IdPolicy::Unique`](crate::IdPolicy::Unique) ([`ClinicError::DuplicateId`]),
/// - the appointment was already paid under [`BillingPolicy::SinglePayment`]
///   ([`ClinicError::AlreadyBilled`]).
///
/// Nothing is stored when an error is returned.
pub fn record_payment(
    store: &mut CatalogStore,
    request: PaymentRequest,
) -> ClinicResult<&Payment> {
    let Some(key) = store.find_appointment_key(&request.appointment_id) else {
        tracing::warn!(appointment_id = %request.appointment_id, "lookup failed");
        return Err(ClinicError::NotFound {
            kind: RecordKind::Appointment,
            id: request.appointment_id,
        });
    };
    store.ensure_new_id(RecordKind::Payment, request.payment_id.as_str())?;

    if store.config().billing_policy() == BillingPolicy::SinglePayment {
        if let Some(existing) = store.find_payment_for_appointment(key) {
            tracing::warn!(
                appointment_id = %request.appointment_id,
                payment_id = %existing.payment_id(),
                "appointment already billed"
            );
            return Err(ClinicError::AlreadyBilled {
                appointment_id: request.appointment_id,
                payment_id: existing.payment_id().to_string(),
            });
        }
    }

    let appointment = store.appointment(key).ok_or(ClinicError::UnknownKey {
        kind: RecordKind::Appointment,
    })?;
    let total = appointment_total(store, appointment)?;

    tracing::info!(
        payment_id = %request.payment_id,
        appointment_id = %request.appointment_id,
        total = %total,
        "payment recorded"
    );

    Ok(store.push_payment(Payment::new(
        request.payment_id,
        key,
        total,
        request.payment_date,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appointments::{schedule_appointment, AppointmentRequest};
    use crate::config::{CoreConfig, IdPolicy};
    use crate::entities::{Doctor, Medicine, Patient, Person};
    use std::sync::Arc;

    fn store(cfg: CoreConfig) -> CatalogStore {
        let mut store = CatalogStore::new(Arc::new(cfg));
        store
            .add_patient(Patient::new(
                Person::new("Alice", 30, "F"),
                NonEmptyText::new("PID1").unwrap(),
                "Flu",
            ))
            .unwrap();
        store
            .add_doctor(Doctor::new(
                Person::new("Bob", 45, "M"),
                NonEmptyText::new("DID1").unwrap(),
                "General",
                Amount::new(100.0).unwrap(),
            ))
            .unwrap();
        store
    }

    fn schedule(store: &mut CatalogStore, id: &str, selections: Vec<i64>) {
        schedule_appointment(
            store,
            AppointmentRequest {
                appointment_id: NonEmptyText::new(id).unwrap(),
                patient_id: "PID1".into(),
                doctor_id: "DID1".into(),
                date: "01-01-2025".into(),
                selections,
            },
        )
        .expect("schedule should succeed");
    }

    fn pay(
        store: &mut CatalogStore,
        payment_id: &str,
        appointment_id: &str,
    ) -> ClinicResult<Amount> {
        record_payment(
            store,
            PaymentRequest {
                payment_id: NonEmptyText::new(payment_id).unwrap(),
                appointment_id: appointment_id.into(),
                payment_date: "02-01-2025".into(),
            },
        )
        .map(|p| p.total_amount())
    }

    #[test]
    fn test_total_is_fee_plus_medicine_prices() {
        let mut store = store(CoreConfig::default());
        // Antibiotic (50) and Paracetamol (10).
        schedule(&mut store, "A1", vec![2, 1]);

        let total = pay(&mut store, "PAY1", "A1").expect("payment should succeed");
        assert_eq!(total.value(), 160.0);
    }

    #[test]
    fn test_total_without_medicines_is_the_fee() {
        let mut store = store(CoreConfig::default());
        schedule(&mut store, "A1", vec![]);

        let total = pay(&mut store, "PAY1", "A1").unwrap();
        assert_eq!(total.value(), 100.0);
    }

    #[test]
    fn test_total_uses_configured_catalogue() {
        let cfg = CoreConfig::new(
            IdPolicy::Unique,
            BillingPolicy::SinglePayment,
            vec![Medicine::new("Drops", Amount::new(0.1).unwrap())],
        )
        .unwrap();
        let mut store = store(cfg);
        schedule(&mut store, "A1", vec![1, 1]);

        let total = pay(&mut store, "PAY1", "A1").unwrap();
        assert_eq!(total.value(), 100.0 + 0.1 + 0.1);
    }

    #[test]
    fn test_unknown_appointment_adds_no_payment() {
        let mut store = store(CoreConfig::default());

        let err = pay(&mut store, "PAY1", "A404").expect_err("unknown appointment should fail");
        assert_eq!(
            err,
            ClinicError::NotFound {
                kind: RecordKind::Appointment,
                id: "A404".into()
            }
        );
        assert_eq!(store.payments().len(), 0);
    }

    #[test]
    fn test_single_payment_policy_blocks_double_billing() {
        let mut store = store(CoreConfig::default());
        schedule(&mut store, "A1", vec![1]);
        pay(&mut store, "PAY1", "A1").unwrap();

        let err = pay(&mut store, "PAY2", "A1").expect_err("second payment should fail");
        assert_eq!(
            err,
            ClinicError::AlreadyBilled {
                appointment_id: "A1".into(),
                payment_id: "PAY1".into()
            }
        );
        assert_eq!(store.payments().len(), 1);
    }

    #[test]
    fn test_permissive_policy_records_independent_payments() {
        let mut store = store(CoreConfig::with_policies(
            IdPolicy::Unique,
            BillingPolicy::Permissive,
        ));
        schedule(&mut store, "A1", vec![1]);

        pay(&mut store, "PAY1", "A1").unwrap();
        pay(&mut store, "PAY2", "A1").expect("permissive policy allows double billing");

        let ids: Vec<&str> = store.payments().map(|p| p.payment_id().as_str()).collect();
        assert_eq!(ids, vec!["PAY1", "PAY2"]);
    }

    #[test]
    fn test_duplicate_payment_id_rejected_when_unique() {
        let mut store = store(CoreConfig::with_policies(
            IdPolicy::Unique,
            BillingPolicy::Permissive,
        ));
        schedule(&mut store, "A1", vec![]);
        schedule(&mut store, "A2", vec![]);
        pay(&mut store, "PAY1", "A1").unwrap();

        let err = pay(&mut store, "PAY1", "A2").expect_err("reused payment id should fail");
        assert!(matches!(
            err,
            ClinicError::DuplicateId {
                kind: RecordKind::Payment,
                ..
            }
        ));
    }

    #[test]
    fn test_breakdown_reports_frozen_total_and_lines() {
        let mut store = store(CoreConfig::default());
        schedule(&mut store, "A1", vec![1]);
        pay(&mut store, "PAY1", "A1").unwrap();

        let payment = store.payments().next().cloned().unwrap();
        let breakdown = store.payment_breakdown(&payment).unwrap();

        assert_eq!(breakdown.appointment_id.as_str(), "A1");
        assert_eq!(breakdown.patient_name, "Alice");
        assert_eq!(breakdown.doctor_fee.value(), 100.0);
        assert_eq!(breakdown.medicines.len(), 1);
        assert_eq!(breakdown.medicines[0].name(), "Paracetamol");
        assert_eq!(breakdown.total_amount.value(), 110.0);
        assert_eq!(breakdown.payment_date, "02-01-2025");
    }
}
