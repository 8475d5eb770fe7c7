//! The numbered text menu.
//!
//! Options 1-4 create records, 5-8 list them, 0 exits. Core failures are reported
//! and the menu is shown again; only I/O failures leave the loop early.

use std::io::{BufRead, Write};

use clinic_core::display::medicine_menu_lines;
use clinic_core::entities::{Doctor, Patient, Person};
use clinic_core::{
    record_payment, schedule_appointment, Amount, AppointmentRequest, CatalogStore, ClinicError,
    PaymentRequest, RecordKind,
};

use crate::error::{CliError, CliResult};
use crate::prompt::Prompter;
use crate::render::{self, OutputFormat};

const MENU_LINES: [&str; 10] = [
    "*** Hospital Management System ***",
    "1. Add Patient",
    "2. Add Doctor",
    "3. Create Appointment + Buy Medicines",
    "4. Make Payment",
    "5. View Patients",
    "6. View Doctors",
    "7. View Appointments",
    "8. View Payments",
    "0. Exit",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum MenuChoice {
    Exit,
    AddPatient,
    AddDoctor,
    CreateAppointment,
    MakePayment,
    ViewPatients,
    ViewDoctors,
    ViewAppointments,
    ViewPayments,
}

impl TryFrom<i64> for MenuChoice {
    type Error = i64;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Ok(match value {
            0 => MenuChoice::Exit,
            1 => MenuChoice::AddPatient,
            2 => MenuChoice::AddDoctor,
            3 => MenuChoice::CreateAppointment,
            4 => MenuChoice::MakePayment,
            5 => MenuChoice::ViewPatients,
            6 => MenuChoice::ViewDoctors,
            7 => MenuChoice::ViewAppointments,
            8 => MenuChoice::ViewPayments,
            other => return Err(other),
        })
    }
}

pub struct Menu<R, W> {
    store: CatalogStore,
    prompter: Prompter<R, W>,
    format: OutputFormat,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(store: CatalogStore, prompter: Prompter<R, W>, format: OutputFormat) -> Self {
        Self {
            store,
            prompter,
            format,
        }
    }

    pub fn into_parts(self) -> (CatalogStore, W) {
        (self.store, self.prompter.into_output())
    }

    /// Runs until the user picks 0 or input ends.
    pub fn run(&mut self) -> CliResult<()> {
        match self.run_until_exit() {
            Err(CliError::InputClosed) => {
                tracing::debug!("input closed, leaving menu");
                Ok(())
            }
            other => other,
        }
    }

    fn run_until_exit(&mut self) -> CliResult<()> {
        loop {
            self.prompter.say("")?;
            for line in MENU_LINES {
                self.prompter.say(line)?;
            }
            let choice: i64 = self.prompter.number("Enter choice: ")?;

            match MenuChoice::try_from(choice) {
                Ok(MenuChoice::Exit) => {
                    self.prompter.say("Exiting System...")?;
                    return Ok(());
                }
                Ok(choice) => self.dispatch(choice)?,
                Err(other) => {
                    tracing::debug!(choice = other, "unknown menu choice");
                    self.prompter.say("Invalid choice. Try again.")?;
                }
            }
        }
    }

    fn dispatch(&mut self, choice: MenuChoice) -> CliResult<()> {
        match choice {
            MenuChoice::Exit => Ok(()),
            MenuChoice::AddPatient => self.add_patient(),
            MenuChoice::AddDoctor => self.add_doctor(),
            MenuChoice::CreateAppointment => self.create_appointment(),
            MenuChoice::MakePayment => self.make_payment(),
            MenuChoice::ViewPatients => {
                render::write_patients(self.prompter.output(), &self.store, self.format)
            }
            MenuChoice::ViewDoctors => {
                render::write_doctors(self.prompter.output(), &self.store, self.format)
            }
            MenuChoice::ViewAppointments => {
                render::write_appointments(self.prompter.output(), &self.store, self.format)
            }
            MenuChoice::ViewPayments => {
                render::write_payments(self.prompter.output(), &self.store, self.format)
            }
        }
    }

    fn read_person(&mut self) -> CliResult<Person> {
        let name = self.prompter.text("Enter Name: ")?;
        let age: u32 = self.prompter.number("Enter Age: ")?;
        let gender = self.prompter.text("Enter Gender: ")?;
        Ok(Person::new(name, age, gender))
    }

    fn add_patient(&mut self) -> CliResult<()> {
        let person = self.read_person()?;
        let patient_id = self.prompter.identifier("Enter Patient ID: ")?;
        if let Err(e) = self.store.ensure_new_id(RecordKind::Patient, patient_id.as_str()) {
            return self.report(&e);
        }
        let disease = self.prompter.text("Enter Disease: ")?;

        match self
            .store
            .add_patient(Patient::new(person, patient_id, disease))
        {
            Ok(_) => self.prompter.say("Patient added successfully!\n"),
            Err(e) => self.report(&e),
        }
    }

    fn add_doctor(&mut self) -> CliResult<()> {
        let person = self.read_person()?;
        let doctor_id = self.prompter.identifier("Enter Doctor ID: ")?;
        if let Err(e) = self.store.ensure_new_id(RecordKind::Doctor, doctor_id.as_str()) {
            return self.report(&e);
        }
        let specialization = self.prompter.text("Enter Specialization: ")?;
        let fee: Amount = self.prompter.number("Enter Consultation Fee: ")?;

        match self
            .store
            .add_doctor(Doctor::new(person, doctor_id, specialization, fee))
        {
            Ok(_) => self.prompter.say("Doctor added successfully!\n"),
            Err(e) => self.report(&e),
        }
    }

    fn create_appointment(&mut self) -> CliResult<()> {
        let appointment_id = self.prompter.identifier("Enter Appointment ID: ")?;
        if let Err(e) = self
            .store
            .ensure_new_id(RecordKind::Appointment, appointment_id.as_str())
        {
            return self.report(&e);
        }

        let patient_id = self.prompter.text("Enter Patient ID: ")?.trim().to_string();
        if self.store.find_patient_by_id(&patient_id).is_none() {
            return self.report(&not_found(RecordKind::Patient, patient_id));
        }

        let doctor_id = self.prompter.text("Enter Doctor ID: ")?.trim().to_string();
        if self.store.find_doctor_by_id(&doctor_id).is_none() {
            return self.report(&not_found(RecordKind::Doctor, doctor_id));
        }

        let date = self.prompter.text("Enter Date (dd-mm-yyyy): ")?;

        self.prompter.say("Available Medicines:")?;
        for line in medicine_menu_lines(self.store.medicines()) {
            self.prompter.say(line)?;
        }

        let count: i64 = self.prompter.number("How many medicines to buy? ")?;
        let mut selections: Vec<i64> = Vec::new();
        for _ in 0..count.max(0) {
            selections.push(self.prompter.number("Enter medicine number: ")?);
        }

        let request = AppointmentRequest {
            appointment_id,
            patient_id,
            doctor_id,
            date,
            selections,
        };
        let rejected = match schedule_appointment(&mut self.store, request) {
            Ok(scheduled) => scheduled.rejected,
            Err(e) => return self.report(&e),
        };

        for e in &rejected {
            self.report(e)?;
        }
        self.prompter.say("Appointment created successfully!\n")
    }

    fn make_payment(&mut self) -> CliResult<()> {
        let payment_id = self.prompter.identifier("Enter Payment ID: ")?;
        if let Err(e) = self.store.ensure_new_id(RecordKind::Payment, payment_id.as_str()) {
            return self.report(&e);
        }

        let appointment_id = self
            .prompter
            .text("Enter Appointment ID: ")?
            .trim()
            .to_string();
        if self.store.find_appointment_by_id(&appointment_id).is_none() {
            return self.report(&not_found(RecordKind::Appointment, appointment_id));
        }

        let payment_date = self.prompter.text("Enter Payment Date (dd-mm-yyyy): ")?;

        let request = PaymentRequest {
            payment_id,
            appointment_id,
            payment_date,
        };
        match record_payment(&mut self.store, request) {
            Ok(_) => self.prompter.say("Payment recorded successfully!\n"),
            Err(e) => self.report(&e),
        }
    }

    fn report(&mut self, err: &ClinicError) -> CliResult<()> {
        let message = match err {
            ClinicError::NotFound { kind, .. } => match kind {
                RecordKind::Patient => "Patient not found!".to_string(),
                RecordKind::Doctor => "Doctor not found!".to_string(),
                RecordKind::Appointment => "Appointment not found!".to_string(),
                other => format!("{other} not found!"),
            },
            ClinicError::InvalidSelection { .. } => "Invalid medicine selection.".to_string(),
            other => format!("Error: {other}"),
        };
        self.prompter.say(message)
    }
}

fn not_found(kind: RecordKind, id: String) -> ClinicError {
    ClinicError::NotFound { kind, id }
}
