use clinic_types::{Amount, NonEmptyText};
use serde::Serialize;

use super::{AppointmentKey, Medicine};

/// A recorded payment. `total_amount` is fixed when the payment is taken.
#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    payment_id: NonEmptyText,
    appointment: AppointmentKey,
    total_amount: Amount,
    payment_date: String,
}

impl Payment {
    pub(crate) fn new(
        payment_id: NonEmptyText,
        appointment: AppointmentKey,
        total_amount: Amount,
        payment_date: String,
    ) -> Self {
        Self {
            payment_id,
            appointment,
            total_amount,
            payment_date,
        }
    }

    pub fn payment_id(&self) -> &NonEmptyText {
        &self.payment_id
    }

    pub fn appointment(&self) -> AppointmentKey {
        self.appointment
    }

    pub fn total_amount(&self) -> Amount {
        self.total_amount
    }

    pub fn payment_date(&self) -> &str {
        &self.payment_date
    }
}

/// Everything a receipt shows for one payment.
#[derive(Debug, Clone, Serialize)]
pub struct PaymentBreakdown<'a> {
    pub payment_id: &'a NonEmptyText,
    pub appointment_id: &'a NonEmptyText,
    pub patient_name: &'a str,
    pub doctor_fee: Amount,
    pub medicines: Vec<&'a Medicine>,
    pub total_amount: Amount,
    pub payment_date: &'a str,
}
