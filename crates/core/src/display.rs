//! Text summaries for records.
//!
//! Every record kind renders to a list of lines through [`Displayable`]. Patient
//! and doctor summaries start with the shared [`Person`] line and add their own.

use crate::entities::{AppointmentView, Doctor, Medicine, Patient, PaymentBreakdown, Person};

pub trait Displayable {
    /// The summary as individual lines, without trailing newlines.
    fn summary_lines(&self) -> Vec<String>;

    fn display_summary(&self) -> String {
        self.summary_lines().join("\n")
    }
}

impl Displayable for Person {
    fn summary_lines(&self) -> Vec<String> {
        vec![format!(
            "Name: {}, Age: {}, Gender: {}",
            self.name(),
            self.age(),
            self.gender()
        )]
    }
}

impl Displayable for Patient {
    fn summary_lines(&self) -> Vec<String> {
        let mut lines = self.person().summary_lines();
        lines.push(format!(
            "Patient ID: {}, Disease: {}",
            self.patient_id(),
            self.disease()
        ));
        lines
    }
}

impl Displayable for Doctor {
    fn summary_lines(&self) -> Vec<String> {
        let mut lines = self.person().summary_lines();
        lines.push(format!(
            "Doctor ID: {}, Specialization: {}, Consultation Fee: ${}",
            self.doctor_id(),
            self.specialization(),
            self.consultation_fee()
        ));
        lines
    }
}

impl Displayable for Medicine {
    fn summary_lines(&self) -> Vec<String> {
        vec![format!("{} - ${}", self.name(), self.price())]
    }
}

impl Displayable for AppointmentView<'_> {
    fn summary_lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Appointment ID: {}", self.appointment_id),
            format!("Date: {}", self.date),
            "Patient Details:".to_string(),
        ];
        lines.extend(self.patient.summary_lines());
        lines.push("Doctor Details:".to_string());
        lines.extend(self.doctor.summary_lines());
        lines
    }
}

impl Displayable for PaymentBreakdown<'_> {
    fn summary_lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Payment ID: {}", self.payment_id),
            format!("Appointment ID: {}", self.appointment_id),
            format!("Patient Name: {}", self.patient_name),
            format!("Doctor Fee: ${}", self.doctor_fee),
            "Medicines:".to_string(),
        ];
        lines.extend(
            self.medicines
                .iter()
                .map(|m| format!("- {}: ${}", m.name(), m.price())),
        );
        lines.push(format!("Total Amount Paid: ${}", self.total_amount));
        lines.push(format!("Payment Date: {}", self.payment_date));
        lines
    }
}

/// Numbered catalogue lines as shown when choosing medicines, e.g. `1. Paracetamol - $10.0`.
pub fn medicine_menu_lines(medicines: &[Medicine]) -> Vec<String> {
    medicines
        .iter()
        .enumerate()
        .map(|(i, m)| format!("{}. {}", i + 1, m.display_summary()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appointments::{schedule_appointment, AppointmentRequest};
    use crate::billing::{record_payment, PaymentRequest};
    use crate::{CatalogStore, CoreConfig};
    use clinic_types::{Amount, NonEmptyText};
    use std::sync::Arc;

    fn alice() -> Patient {
        Patient::new(
            Person::new("Alice", 30, "F"),
            NonEmptyText::new("PID1").unwrap(),
            "Flu",
        )
    }

    fn bob() -> Doctor {
        Doctor::new(
            Person::new("Bob", 45, "M"),
            NonEmptyText::new("DID1").unwrap(),
            "General",
            Amount::new(100.0).unwrap(),
        )
    }

    #[test]
    fn test_patient_summary() {
        assert_eq!(
            alice().display_summary(),
            "Name: Alice, Age: 30, Gender: F\nPatient ID: PID1, Disease: Flu"
        );
    }

    #[test]
    fn test_doctor_summary_shows_fee() {
        assert_eq!(
            bob().summary_lines(),
            vec![
                "Name: Bob, Age: 45, Gender: M",
                "Doctor ID: DID1, Specialization: General, Consultation Fee: $100.0",
            ]
        );
    }

    #[test]
    fn test_medicine_menu_is_numbered_from_one() {
        let store = CatalogStore::new(Arc::new(CoreConfig::default()));
        let lines = medicine_menu_lines(store.medicines());
        assert_eq!(lines[0], "1. Paracetamol - $10.0");
        assert_eq!(lines[3], "4. Pain Killer - $40.0");
    }

    #[test]
    fn test_appointment_and_payment_summaries() {
        let mut store = CatalogStore::new(Arc::new(CoreConfig::default()));
        store.add_patient(alice()).unwrap();
        store.add_doctor(bob()).unwrap();
        schedule_appointment(
            &mut store,
            AppointmentRequest {
                appointment_id: NonEmptyText::new("A1").unwrap(),
                patient_id: "PID1".into(),
                doctor_id: "DID1".into(),
                date: "01-01-2025".into(),
                selections: vec![1],
            },
        )
        .unwrap();
        record_payment(
            &mut store,
            PaymentRequest {
                payment_id: NonEmptyText::new("PAY1").unwrap(),
                appointment_id: "A1".into(),
                payment_date: "02-01-2025".into(),
            },
        )
        .unwrap();

        let appointment = store.appointments().next().unwrap();
        let view = store.appointment_view(appointment).unwrap();
        assert_eq!(
            view.summary_lines(),
            vec![
                "Appointment ID: A1",
                "Date: 01-01-2025",
                "Patient Details:",
                "Name: Alice, Age: 30, Gender: F",
                "Patient ID: PID1, Disease: Flu",
                "Doctor Details:",
                "Name: Bob, Age: 45, Gender: M",
                "Doctor ID: DID1, Specialization: General, Consultation Fee: $100.0",
            ]
        );

        let payment = store.payments().next().unwrap();
        let breakdown = store.payment_breakdown(payment).unwrap();
        assert_eq!(
            breakdown.display_summary(),
            "Payment ID: PAY1\n\
             Appointment ID: A1\n\
             Patient Name: Alice\n\
             Doctor Fee: $100.0\n\
             Medicines:\n\
             - Paracetamol: $10.0\n\
             Total Amount Paid: $110.0\n\
             Payment Date: 02-01-2025"
        );
    }
}
