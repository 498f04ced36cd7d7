//! The record store
//!
//! Owns the five entity collections and the audit log behind an
//! encapsulated API; nothing outside this module mutates the underlying
//! containers. Every mutating operation validates first and touches state
//! only on success, then appends exactly one audit entry.

use crate::adapters::persistence::snapshot::{StateSnapshot, SCHEMA_VERSION};
use crate::core::audit::AuditLog;
use crate::core::store::sequence::IdSequence;
use crate::core::validation;
use crate::domain::{
    Appointment, AppointmentId, AppointmentStatus, AuditAction, Bed, BedDraft, BedId, BedStatus,
    BookingDraft, BookingId, BookingStatus, HospitalError, Patient, PatientDraft, PatientId,
    PatientStatus, Professional, ProfessionalDraft, ProfessionalId, ProfessionalStatus, Result,
    TelemedicineBooking, DEFAULT_INSURANCE_PLAN,
};
use chrono::{DateTime, Utc};

/// In-memory store for all hospital records
///
/// Single-writer: callers that share a store across tasks must serialize
/// access (the background runtime wraps it in a mutex). Collections keep
/// insertion order; `list` accessors expose them as slices.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    patients: Vec<Patient>,
    professionals: Vec<Professional>,
    beds: Vec<Bed>,
    appointments: Vec<Appointment>,
    bookings: Vec<TelemedicineBooking>,
    audit: AuditLog,
    sequence: IdSequence,
}

impl RecordStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self {
            patients: Vec::new(),
            professionals: Vec::new(),
            beds: Vec::new(),
            appointments: Vec::new(),
            bookings: Vec::new(),
            audit: AuditLog::new(),
            sequence: IdSequence::new(),
        }
    }

    // ------------------------------------------------------------------
    // Patients
    // ------------------------------------------------------------------

    /// Registers a new patient
    ///
    /// Requires name and a checksum-valid CPF; the CPF must not already be
    /// registered. An empty insurance plan falls back to "Particular".
    ///
    /// # Errors
    ///
    /// `Validation` for missing/malformed fields, `Conflict` for a
    /// duplicate CPF. On error no state changes.
    pub fn register_patient(&mut self, draft: PatientDraft) -> Result<Patient> {
        validation::require_field(&draft.name, "nome")?;
        validation::require_field(&draft.cpf, "CPF")?;
        if !validation::validate_cpf(&draft.cpf) {
            return Err(HospitalError::Validation("CPF inválido".to_string()));
        }
        validation::check_optional_email(&draft.email)?;

        let cpf = validation::normalize_cpf(&draft.cpf);
        if self.duplicate_cpf(&cpf, None) {
            return Err(HospitalError::Conflict("CPF já cadastrado".to_string()));
        }

        let insurance_plan = if draft.insurance_plan.trim().is_empty() {
            DEFAULT_INSURANCE_PLAN.to_string()
        } else {
            draft.insurance_plan.trim().to_string()
        };

        let patient = Patient {
            id: PatientId::new(self.sequence.next_id()),
            name: draft.name.trim().to_string(),
            cpf,
            birth_date: draft.birth_date,
            phone: draft.phone.trim().to_string(),
            email: draft.email.trim().to_string(),
            insurance_plan,
            registered_at: Utc::now(),
            status: PatientStatus::Active,
            last_visit: None,
        };
        self.patients.push(patient.clone());
        self.audit.append(
            AuditAction::Registration,
            format!(
                "Paciente cadastrado: {} (CPF: {})",
                patient.name,
                patient.formatted_cpf()
            ),
        );
        tracing::info!(patient_id = %patient.id, name = %patient.name, "patient registered");
        Ok(patient)
    }

    /// Updates a patient atomically in place
    ///
    /// Re-runs the registration validators; the duplicate-CPF check
    /// excludes the record's own current value, so saving a patient with
    /// an unchanged CPF is not a conflict. Identifier, registration time,
    /// status and last visit are preserved.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown id, `Validation`/`Conflict` as on insert.
    pub fn update_patient(&mut self, id: PatientId, draft: PatientDraft) -> Result<Patient> {
        let position = self
            .patients
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| HospitalError::NotFound(format!("Paciente {id}")))?;

        validation::require_field(&draft.name, "nome")?;
        validation::require_field(&draft.cpf, "CPF")?;
        if !validation::validate_cpf(&draft.cpf) {
            return Err(HospitalError::Validation("CPF inválido".to_string()));
        }
        validation::check_optional_email(&draft.email)?;

        let cpf = validation::normalize_cpf(&draft.cpf);
        if self.duplicate_cpf(&cpf, Some(id)) {
            return Err(HospitalError::Conflict("CPF já cadastrado".to_string()));
        }

        let insurance_plan = if draft.insurance_plan.trim().is_empty() {
            DEFAULT_INSURANCE_PLAN.to_string()
        } else {
            draft.insurance_plan.trim().to_string()
        };

        let patient = &mut self.patients[position];
        patient.name = draft.name.trim().to_string();
        patient.cpf = cpf;
        patient.birth_date = draft.birth_date;
        patient.phone = draft.phone.trim().to_string();
        patient.email = draft.email.trim().to_string();
        patient.insurance_plan = insurance_plan;

        let updated = patient.clone();
        self.audit.append(
            AuditAction::Update,
            format!("Paciente atualizado: {}", updated.name),
        );
        tracing::info!(patient_id = %updated.id, "patient updated");
        Ok(updated)
    }

    /// Removes a patient
    ///
    /// Blocked while any appointment or telemedicine booking still
    /// references the patient; remove those first.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown id, `Conflict` while referenced.
    pub fn remove_patient(&mut self, id: PatientId) -> Result<Patient> {
        let position = self
            .patients
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| HospitalError::NotFound(format!("Paciente {id}")))?;

        if self.patient_referenced(id) {
            return Err(HospitalError::Conflict(
                "Paciente possui consultas ou agendamentos vinculados".to_string(),
            ));
        }

        let patient = self.patients.remove(position);
        self.audit.append(
            AuditAction::Deletion,
            format!("Paciente excluído: {}", patient.name),
        );
        tracing::info!(patient_id = %patient.id, "patient removed");
        Ok(patient)
    }

    /// All patients in insertion order
    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    /// Looks up a patient by id
    pub fn patient(&self, id: PatientId) -> Option<&Patient> {
        self.patients.iter().find(|p| p.id == id)
    }

    /// Case-insensitive patient search over name, CPF and e-mail
    ///
    /// An empty term matches every patient.
    pub fn search_patients(&self, term: &str) -> Vec<&Patient> {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return self.patients.iter().collect();
        }
        self.patients
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&term)
                    || p.cpf.contains(&term)
                    || p.email.to_lowercase().contains(&term)
            })
            .collect()
    }

    // ------------------------------------------------------------------
    // Professionals
    // ------------------------------------------------------------------

    /// Registers a new professional
    ///
    /// # Errors
    ///
    /// `Validation` for missing name/registry or malformed e-mail,
    /// `Conflict` for a duplicate registry number.
    pub fn register_professional(&mut self, draft: ProfessionalDraft) -> Result<Professional> {
        validation::require_field(&draft.name, "nome")?;
        validation::require_field(&draft.registry, "registro")?;
        validation::check_optional_email(&draft.email)?;

        let registry = draft.registry.trim().to_string();
        if self.duplicate_registry(&registry, None) {
            return Err(HospitalError::Conflict("Registro já cadastrado".to_string()));
        }

        let professional = Professional {
            id: ProfessionalId::new(self.sequence.next_id()),
            name: draft.name.trim().to_string(),
            registry,
            specialty: draft.specialty,
            phone: draft.phone.trim().to_string(),
            email: draft.email.trim().to_string(),
            facility: draft.facility,
            registered_at: Utc::now(),
            status: ProfessionalStatus::Active,
        };
        self.professionals.push(professional.clone());
        self.audit.append(
            AuditAction::Registration,
            format!(
                "Profissional cadastrado: {} ({})",
                professional.name, professional.registry
            ),
        );
        tracing::info!(
            professional_id = %professional.id,
            registry = %professional.registry,
            "professional registered"
        );
        Ok(professional)
    }

    /// Updates a professional atomically in place
    ///
    /// The duplicate-registry check excludes the record's own value.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown id, `Validation`/`Conflict` as on insert.
    pub fn update_professional(
        &mut self,
        id: ProfessionalId,
        draft: ProfessionalDraft,
    ) -> Result<Professional> {
        let position = self
            .professionals
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| HospitalError::NotFound(format!("Profissional {id}")))?;

        validation::require_field(&draft.name, "nome")?;
        validation::require_field(&draft.registry, "registro")?;
        validation::check_optional_email(&draft.email)?;

        let registry = draft.registry.trim().to_string();
        if self.duplicate_registry(&registry, Some(id)) {
            return Err(HospitalError::Conflict("Registro já cadastrado".to_string()));
        }

        let professional = &mut self.professionals[position];
        professional.name = draft.name.trim().to_string();
        professional.registry = registry;
        professional.specialty = draft.specialty;
        professional.phone = draft.phone.trim().to_string();
        professional.email = draft.email.trim().to_string();
        professional.facility = draft.facility;

        let updated = professional.clone();
        self.audit.append(
            AuditAction::Update,
            format!("Profissional atualizado: {}", updated.name),
        );
        tracing::info!(professional_id = %updated.id, "professional updated");
        Ok(updated)
    }

    /// Removes a professional
    ///
    /// Blocked while any telemedicine booking still references them.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown id, `Conflict` while referenced.
    pub fn remove_professional(&mut self, id: ProfessionalId) -> Result<Professional> {
        let position = self
            .professionals
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| HospitalError::NotFound(format!("Profissional {id}")))?;

        if self.bookings.iter().any(|b| b.professional_id == id) {
            return Err(HospitalError::Conflict(
                "Profissional possui agendamentos vinculados".to_string(),
            ));
        }

        let professional = self.professionals.remove(position);
        self.audit.append(
            AuditAction::Deletion,
            format!("Profissional excluído: {}", professional.name),
        );
        tracing::info!(professional_id = %professional.id, "professional removed");
        Ok(professional)
    }

    /// All professionals in insertion order
    pub fn professionals(&self) -> &[Professional] {
        &self.professionals
    }

    /// Looks up a professional by id
    pub fn professional(&self, id: ProfessionalId) -> Option<&Professional> {
        self.professionals.iter().find(|p| p.id == id)
    }

    /// Professionals eligible to hold telemedicine consultations
    pub fn telemedicine_physicians(&self) -> Vec<&Professional> {
        self.professionals
            .iter()
            .filter(|p| p.specialty.is_physician())
            .collect()
    }

    // ------------------------------------------------------------------
    // Beds
    // ------------------------------------------------------------------

    /// Registers a new bed
    ///
    /// # Errors
    ///
    /// `Validation` for a missing bed number, `Conflict` for a duplicate.
    pub fn register_bed(&mut self, draft: BedDraft) -> Result<Bed> {
        validation::require_field(&draft.number, "número do leito")?;

        let number = draft.number.trim().to_string();
        if self.duplicate_bed_number(&number, None) {
            return Err(HospitalError::Conflict(
                "Número de leito já cadastrado".to_string(),
            ));
        }

        let bed = Bed {
            id: BedId::new(self.sequence.next_id()),
            number,
            sector: draft.sector,
            status: draft.status,
            occupant: draft.occupant,
            registered_at: Utc::now(),
        };
        self.beds.push(bed.clone());
        self.audit.append(
            AuditAction::Registration,
            format!("Leito cadastrado: {} - {}", bed.number, bed.sector),
        );
        tracing::info!(bed_id = %bed.id, number = %bed.number, "bed registered");
        Ok(bed)
    }

    /// Advances a bed one step in the fixed status cycle
    ///
    /// Available → Occupied → Maintenance → Available; no other
    /// transitions exist. Returns the new status.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown id.
    pub fn advance_bed_status(&mut self, id: BedId) -> Result<BedStatus> {
        let bed = self
            .beds
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| HospitalError::NotFound(format!("Leito {id}")))?;

        bed.status = bed.status.next_in_cycle();
        let number = bed.number.clone();
        let status = bed.status;
        self.audit.append(
            AuditAction::StatusChange,
            format!("Status do leito {number} alterado para: {status}"),
        );
        tracing::info!(bed_id = %id, status = %status, "bed status advanced");
        Ok(status)
    }

    /// Removes a bed
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown id.
    pub fn remove_bed(&mut self, id: BedId) -> Result<Bed> {
        let position = self
            .beds
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| HospitalError::NotFound(format!("Leito {id}")))?;

        let bed = self.beds.remove(position);
        self.audit.append(
            AuditAction::Deletion,
            format!("Leito excluído: {}", bed.number),
        );
        tracing::info!(bed_id = %bed.id, "bed removed");
        Ok(bed)
    }

    /// All beds in insertion order
    pub fn beds(&self) -> &[Bed] {
        &self.beds
    }

    // ------------------------------------------------------------------
    // Appointments
    // ------------------------------------------------------------------

    /// Schedules an in-person appointment for an existing patient
    ///
    /// An empty kind label defaults to "Consulta".
    ///
    /// # Errors
    ///
    /// `NotFound` when the patient does not exist.
    pub fn schedule_appointment(
        &mut self,
        patient_id: PatientId,
        scheduled_for: DateTime<Utc>,
        kind: &str,
    ) -> Result<Appointment> {
        let patient_name = self
            .patient(patient_id)
            .map(|p| p.name.clone())
            .ok_or_else(|| HospitalError::NotFound(format!("Paciente {patient_id}")))?;

        let kind = if kind.trim().is_empty() {
            "Consulta".to_string()
        } else {
            kind.trim().to_string()
        };

        let appointment = Appointment {
            id: AppointmentId::new(self.sequence.next_id()),
            patient_id,
            scheduled_for,
            kind,
            status: AppointmentStatus::Scheduled,
        };
        self.appointments.push(appointment.clone());
        self.audit.append(
            AuditAction::Scheduling,
            format!("Consulta agendada para {patient_name}"),
        );
        tracing::info!(appointment_id = %appointment.id, patient_id = %patient_id, "appointment scheduled");
        Ok(appointment)
    }

    /// All appointments in insertion order
    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    // ------------------------------------------------------------------
    // Telemedicine bookings
    // ------------------------------------------------------------------

    /// Schedules a telemedicine booking
    ///
    /// Patient and professional must exist, and the professional must hold
    /// a physician specialty.
    ///
    /// # Errors
    ///
    /// `NotFound` for a missing patient/professional, `Validation` when
    /// the professional cannot hold telemedicine consultations.
    pub fn schedule_booking(&mut self, draft: BookingDraft) -> Result<TelemedicineBooking> {
        let patient_name = self
            .patient(draft.patient_id)
            .map(|p| p.name.clone())
            .ok_or_else(|| HospitalError::NotFound(format!("Paciente {}", draft.patient_id)))?;
        let professional = self
            .professional(draft.professional_id)
            .ok_or_else(|| {
                HospitalError::NotFound(format!("Profissional {}", draft.professional_id))
            })?;

        if !professional.specialty.is_physician() {
            return Err(HospitalError::Validation(format!(
                "Profissional {} não atende telemedicina",
                professional.name
            )));
        }
        let professional_name = professional.name.clone();

        let booking = TelemedicineBooking {
            id: BookingId::new(self.sequence.next_id()),
            patient_id: draft.patient_id,
            professional_id: draft.professional_id,
            scheduled_for: draft.scheduled_for,
            kind: draft.kind,
            notes: draft.notes,
            status: BookingStatus::Scheduled,
            booked_at: Utc::now(),
        };
        self.bookings.push(booking.clone());
        self.audit.append(
            AuditAction::Telemedicine,
            format!("Telemedicina agendada: {patient_name} com {professional_name}"),
        );
        tracing::info!(booking_id = %booking.id, "telemedicine booking scheduled");
        Ok(booking)
    }

    /// Starts a scheduled booking (Scheduled → InProgress)
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown id, `Conflict` when the booking is not in
    /// the Scheduled status.
    pub fn start_booking(&mut self, id: BookingId) -> Result<TelemedicineBooking> {
        let booking = self
            .bookings
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| HospitalError::NotFound(format!("Agendamento {id}")))?;

        if booking.status != BookingStatus::Scheduled {
            return Err(HospitalError::Conflict(format!(
                "Agendamento {id} não está agendado"
            )));
        }
        booking.status = BookingStatus::InProgress;
        let started = booking.clone();

        let detail = self.booking_detail(&started);
        self.audit
            .append(AuditAction::Telemedicine, format!("Consulta iniciada: {detail}"));
        tracing::info!(booking_id = %id, "telemedicine consultation started");
        Ok(started)
    }

    /// Completes a booking in progress (InProgress → Completed)
    ///
    /// Also stamps the patient's last-visit timestamp.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown id, `Conflict` when the booking is not in
    /// progress.
    pub fn complete_booking(&mut self, id: BookingId) -> Result<TelemedicineBooking> {
        let booking = self
            .bookings
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| HospitalError::NotFound(format!("Agendamento {id}")))?;

        if booking.status != BookingStatus::InProgress {
            return Err(HospitalError::Conflict(format!(
                "Agendamento {id} não está em andamento"
            )));
        }
        booking.status = BookingStatus::Completed;
        let completed = booking.clone();

        // A completed consultation counts as the patient's latest visit.
        if let Some(patient) = self
            .patients
            .iter_mut()
            .find(|p| p.id == completed.patient_id)
        {
            patient.last_visit = Some(Utc::now());
        }

        let detail = self.booking_detail(&completed);
        self.audit
            .append(AuditAction::Telemedicine, format!("Consulta realizada: {detail}"));
        tracing::info!(booking_id = %id, "telemedicine consultation completed");
        Ok(completed)
    }

    /// Cancels a booking, removing it from the store
    ///
    /// Allowed from Scheduled or InProgress; a completed consultation
    /// cannot be cancelled.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown id, `Conflict` for a completed booking.
    pub fn cancel_booking(&mut self, id: BookingId) -> Result<TelemedicineBooking> {
        let position = self
            .bookings
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| HospitalError::NotFound(format!("Agendamento {id}")))?;

        if self.bookings[position].status == BookingStatus::Completed {
            return Err(HospitalError::Conflict(
                "Consulta realizada não pode ser cancelada".to_string(),
            ));
        }

        let booking = self.bookings.remove(position);
        let patient_name = self
            .patient(booking.patient_id)
            .map(|p| p.name.clone())
            .unwrap_or_else(|| booking.patient_id.to_string());
        self.audit.append(
            AuditAction::Cancellation,
            format!("Telemedicina cancelada: {patient_name}"),
        );
        tracing::info!(booking_id = %id, "telemedicine booking cancelled");
        Ok(booking)
    }

    /// All bookings in insertion order
    pub fn bookings(&self) -> &[TelemedicineBooking] {
        &self.bookings
    }

    /// Resolves the display names for a booking at read time
    ///
    /// Returns `(patient_name, professional_name)`. Referenced records
    /// always exist because deletion is blocked while referenced; the
    /// fallback to the raw id covers restored legacy snapshots.
    pub fn booking_names(&self, booking: &TelemedicineBooking) -> (String, String) {
        let patient = self
            .patient(booking.patient_id)
            .map(|p| p.name.clone())
            .unwrap_or_else(|| booking.patient_id.to_string());
        let professional = self
            .professional(booking.professional_id)
            .map(|p| p.name.clone())
            .unwrap_or_else(|| booking.professional_id.to_string());
        (patient, professional)
    }

    fn booking_detail(&self, booking: &TelemedicineBooking) -> String {
        let (patient, professional) = self.booking_names(booking);
        format!("{patient} com {professional}")
    }

    // ------------------------------------------------------------------
    // Audit
    // ------------------------------------------------------------------

    /// Read access to the audit log
    pub fn audit(&self) -> &AuditLog {
        &self.audit
    }

    /// Records an event on behalf of an external collaborator
    ///
    /// The presentation layer uses this for navigation/view events; the
    /// persistence gateway for backup/export events.
    pub fn record_event(&mut self, action: AuditAction, detail: impl Into<String>) {
        self.audit.append(action, detail);
    }

    // ------------------------------------------------------------------
    // Snapshot / restore
    // ------------------------------------------------------------------

    /// Captures the full store state as a versioned snapshot
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            schema_version: SCHEMA_VERSION.to_string(),
            saved_at: Utc::now(),
            next_id: self.sequence.watermark(),
            patients: self.patients.clone(),
            professionals: self.professionals.clone(),
            beds: self.beds.clone(),
            appointments: self.appointments.clone(),
            bookings: self.bookings.clone(),
            audit_entries: self.audit.entries().to_vec(),
        }
    }

    /// Rebuilds a store from a snapshot without auditing
    ///
    /// Used for routine startup loads; an explicit backup restore goes
    /// through [`RecordStore::restore`], which also records the event.
    ///
    /// # Errors
    ///
    /// `Restore` for a missing/unsupported version tag.
    pub fn hydrate(snapshot: StateSnapshot) -> Result<Self> {
        let mut store = RecordStore::new();
        store.apply_snapshot(snapshot)?;
        Ok(store)
    }

    /// Wholesale-replaces the store state from a snapshot
    ///
    /// The snapshot is validated before anything is touched; a rejected
    /// document leaves the current state unchanged. On success the id
    /// sequence resumes above both the snapshot watermark and the highest
    /// restored id, and one audit entry records the restore with the
    /// snapshot's own save timestamp.
    ///
    /// # Errors
    ///
    /// `Restore` for a missing/unsupported version tag.
    pub fn restore(&mut self, snapshot: StateSnapshot) -> Result<()> {
        let saved_at = snapshot.saved_at;
        self.apply_snapshot(snapshot)?;
        self.audit.append(
            AuditAction::Restore,
            format!("Backup restaurado: {}", saved_at.to_rfc3339()),
        );
        tracing::info!(saved_at = %saved_at, "state restored from snapshot");
        Ok(())
    }

    fn apply_snapshot(&mut self, snapshot: StateSnapshot) -> Result<()> {
        snapshot.validate()?;

        let highest_restored = snapshot
            .patients
            .iter()
            .map(|p| p.id.value())
            .chain(snapshot.professionals.iter().map(|p| p.id.value()))
            .chain(snapshot.beds.iter().map(|b| b.id.value()))
            .chain(snapshot.appointments.iter().map(|a| a.id.value()))
            .chain(snapshot.bookings.iter().map(|b| b.id.value()))
            .max()
            .unwrap_or(0);

        self.sequence = IdSequence::starting_at(snapshot.next_id.max(highest_restored + 1));
        self.patients = snapshot.patients;
        self.professionals = snapshot.professionals;
        self.beds = snapshot.beds;
        self.appointments = snapshot.appointments;
        self.bookings = snapshot.bookings;
        self.audit = AuditLog::from_entries(snapshot.audit_entries);
        Ok(())
    }

    /// Whether every collection is empty (a fresh, unseeded store)
    pub fn is_empty(&self) -> bool {
        self.patients.is_empty()
            && self.professionals.is_empty()
            && self.beds.is_empty()
            && self.appointments.is_empty()
            && self.bookings.is_empty()
    }

    // ------------------------------------------------------------------
    // Uniqueness and reference checks
    // ------------------------------------------------------------------

    fn duplicate_cpf(&self, cpf: &str, exclude: Option<PatientId>) -> bool {
        self.patients
            .iter()
            .any(|p| p.cpf == cpf && Some(p.id) != exclude)
    }

    fn duplicate_registry(&self, registry: &str, exclude: Option<ProfessionalId>) -> bool {
        self.professionals
            .iter()
            .any(|p| p.registry == registry && Some(p.id) != exclude)
    }

    fn duplicate_bed_number(&self, number: &str, exclude: Option<BedId>) -> bool {
        self.beds
            .iter()
            .any(|b| b.number == number && Some(b.id) != exclude)
    }

    fn patient_referenced(&self, id: PatientId) -> bool {
        self.appointments.iter().any(|a| a.patient_id == id)
            || self.bookings.iter().any(|b| b.patient_id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ConsultationKind, Facility, Sector, Specialty};

    fn patient_draft(name: &str, cpf: &str) -> PatientDraft {
        PatientDraft {
            name: name.to_string(),
            cpf: cpf.to_string(),
            ..Default::default()
        }
    }

    fn physician_draft(registry: &str) -> ProfessionalDraft {
        ProfessionalDraft {
            name: "Dr. Carlos Oliveira".to_string(),
            registry: registry.to_string(),
            specialty: Specialty::Cardiology,
            phone: String::new(),
            email: String::new(),
            facility: Facility::CentralHospital,
        }
    }

    #[test]
    fn test_register_patient_assigns_id_and_defaults() {
        let mut store = RecordStore::new();
        let patient = store
            .register_patient(patient_draft("Ana Lima", "529.982.247-25"))
            .unwrap();

        assert_eq!(patient.status, PatientStatus::Active);
        assert_eq!(patient.insurance_plan, DEFAULT_INSURANCE_PLAN);
        assert_eq!(patient.cpf, "52998224725");
        assert!(patient.last_visit.is_none());
        assert_eq!(store.patients().len(), 1);
        assert_eq!(store.audit().len(), 1);
    }

    #[test]
    fn test_duplicate_cpf_rejected_without_mutation() {
        let mut store = RecordStore::new();
        store
            .register_patient(patient_draft("Ana Lima", "52998224725"))
            .unwrap();

        let err = store
            .register_patient(patient_draft("Outra Pessoa", "529.982.247-25"))
            .unwrap_err();
        assert!(matches!(err, HospitalError::Conflict(_)));
        assert_eq!(store.patients().len(), 1);
        // Only the first registration was audited.
        assert_eq!(store.audit().len(), 1);
    }

    #[test]
    fn test_invalid_cpf_rejected() {
        let mut store = RecordStore::new();
        let err = store
            .register_patient(patient_draft("Ana", "11111111111"))
            .unwrap_err();
        assert!(matches!(err, HospitalError::Validation(_)));
        assert!(store.patients().is_empty());
    }

    #[test]
    fn test_missing_required_fields_rejected() {
        let mut store = RecordStore::new();
        assert!(store
            .register_patient(patient_draft("", "52998224725"))
            .is_err());
        assert!(store.register_patient(patient_draft("Ana", "")).is_err());
    }

    #[test]
    fn test_update_patient_keeps_own_cpf() {
        let mut store = RecordStore::new();
        let patient = store
            .register_patient(patient_draft("Ana Lima", "52998224725"))
            .unwrap();

        // Same CPF, new name: must not be flagged as a duplicate.
        let updated = store
            .update_patient(patient.id, patient_draft("Ana L. Souza", "52998224725"))
            .unwrap();
        assert_eq!(updated.id, patient.id);
        assert_eq!(updated.name, "Ana L. Souza");
        assert_eq!(updated.registered_at, patient.registered_at);
        assert_eq!(store.patients().len(), 1);
    }

    #[test]
    fn test_update_patient_detects_foreign_duplicate() {
        let mut store = RecordStore::new();
        store
            .register_patient(patient_draft("Ana", "52998224725"))
            .unwrap();
        let other = store
            .register_patient(patient_draft("Beto", "12345678909"))
            .unwrap();

        let err = store
            .update_patient(other.id, patient_draft("Beto", "52998224725"))
            .unwrap_err();
        assert!(matches!(err, HospitalError::Conflict(_)));
    }

    #[test]
    fn test_remove_unknown_patient_is_an_error() {
        let mut store = RecordStore::new();
        let err = store.remove_patient(PatientId::new(99)).unwrap_err();
        assert!(matches!(err, HospitalError::NotFound(_)));
    }

    #[test]
    fn test_remove_patient_blocked_while_referenced() {
        let mut store = RecordStore::new();
        let patient = store
            .register_patient(patient_draft("Ana", "52998224725"))
            .unwrap();
        store
            .schedule_appointment(patient.id, Utc::now(), "Consulta")
            .unwrap();

        let err = store.remove_patient(patient.id).unwrap_err();
        assert!(matches!(err, HospitalError::Conflict(_)));
        assert_eq!(store.patients().len(), 1);
    }

    #[test]
    fn test_duplicate_registry_rejected() {
        let mut store = RecordStore::new();
        store.register_professional(physician_draft("CRM12345")).unwrap();
        let err = store
            .register_professional(physician_draft("CRM12345"))
            .unwrap_err();
        assert!(matches!(err, HospitalError::Conflict(_)));
        assert_eq!(store.professionals().len(), 1);
    }

    #[test]
    fn test_bed_cycle_returns_to_origin() {
        let mut store = RecordStore::new();
        let bed = store
            .register_bed(BedDraft {
                number: "101".to_string(),
                sector: Sector::Ward,
                status: BedStatus::Available,
                occupant: None,
            })
            .unwrap();

        assert_eq!(store.advance_bed_status(bed.id).unwrap(), BedStatus::Occupied);
        assert_eq!(
            store.advance_bed_status(bed.id).unwrap(),
            BedStatus::Maintenance
        );
        assert_eq!(store.advance_bed_status(bed.id).unwrap(), BedStatus::Available);
    }

    #[test]
    fn test_duplicate_bed_number_rejected() {
        let mut store = RecordStore::new();
        let draft = BedDraft {
            number: "101".to_string(),
            sector: Sector::Icu,
            status: BedStatus::Available,
            occupant: None,
        };
        store.register_bed(draft.clone()).unwrap();
        assert!(matches!(
            store.register_bed(draft).unwrap_err(),
            HospitalError::Conflict(_)
        ));
    }

    #[test]
    fn test_booking_lifecycle() {
        let mut store = RecordStore::new();
        let patient = store
            .register_patient(patient_draft("Ana", "52998224725"))
            .unwrap();
        let physician = store.register_professional(physician_draft("CRM1")).unwrap();

        let booking = store
            .schedule_booking(BookingDraft {
                patient_id: patient.id,
                professional_id: physician.id,
                scheduled_for: Utc::now(),
                kind: ConsultationKind::Consultation,
                notes: String::new(),
            })
            .unwrap();
        assert_eq!(booking.status, BookingStatus::Scheduled);

        let started = store.start_booking(booking.id).unwrap();
        assert_eq!(started.status, BookingStatus::InProgress);

        // Starting twice is a conflict, not a silent no-op.
        assert!(matches!(
            store.start_booking(booking.id).unwrap_err(),
            HospitalError::Conflict(_)
        ));

        let completed = store.complete_booking(booking.id).unwrap();
        assert_eq!(completed.status, BookingStatus::Completed);
        assert!(store.patient(patient.id).unwrap().last_visit.is_some());

        // A completed consultation cannot be cancelled.
        assert!(matches!(
            store.cancel_booking(booking.id).unwrap_err(),
            HospitalError::Conflict(_)
        ));
    }

    #[test]
    fn test_booking_requires_physician() {
        let mut store = RecordStore::new();
        let patient = store
            .register_patient(patient_draft("Ana", "52998224725"))
            .unwrap();
        let nurse = store
            .register_professional(ProfessionalDraft {
                specialty: Specialty::Nursing,
                ..physician_draft("COREN9")
            })
            .unwrap();

        let err = store
            .schedule_booking(BookingDraft {
                patient_id: patient.id,
                professional_id: nurse.id,
                scheduled_for: Utc::now(),
                kind: ConsultationKind::Consultation,
                notes: String::new(),
            })
            .unwrap_err();
        assert!(matches!(err, HospitalError::Validation(_)));
        assert!(store.bookings().is_empty());
    }

    #[test]
    fn test_cancel_booking_removes_and_audits() {
        let mut store = RecordStore::new();
        let patient = store
            .register_patient(patient_draft("Ana", "52998224725"))
            .unwrap();
        let physician = store.register_professional(physician_draft("CRM1")).unwrap();
        let booking = store
            .schedule_booking(BookingDraft {
                patient_id: patient.id,
                professional_id: physician.id,
                scheduled_for: Utc::now(),
                kind: ConsultationKind::FollowUp,
                notes: String::new(),
            })
            .unwrap();

        store.cancel_booking(booking.id).unwrap();
        assert!(store.bookings().is_empty());
        let last = store.audit().entries().last().unwrap();
        assert_eq!(last.action, AuditAction::Cancellation);
        assert!(last.detail.contains("Ana"));
    }

    #[test]
    fn test_booking_names_resolved_at_read_time() {
        let mut store = RecordStore::new();
        let patient = store
            .register_patient(patient_draft("Ana", "52998224725"))
            .unwrap();
        let physician = store.register_professional(physician_draft("CRM1")).unwrap();
        let booking = store
            .schedule_booking(BookingDraft {
                patient_id: patient.id,
                professional_id: physician.id,
                scheduled_for: Utc::now(),
                kind: ConsultationKind::Consultation,
                notes: String::new(),
            })
            .unwrap();

        // Rename the patient; the booking must reflect the new name.
        store
            .update_patient(patient.id, patient_draft("Ana Souza", "52998224725"))
            .unwrap();
        let (patient_name, professional_name) =
            store.booking_names(store.bookings().first().unwrap());
        assert_eq!(patient_name, "Ana Souza");
        assert_eq!(professional_name, "Dr. Carlos Oliveira");
        let _ = booking;
    }

    #[test]
    fn test_search_patients() {
        let mut store = RecordStore::new();
        store
            .register_patient(PatientDraft {
                email: "maria@email.com".to_string(),
                ..patient_draft("Maria da Silva", "52998224725")
            })
            .unwrap();
        store
            .register_patient(patient_draft("João Santos", "12345678909"))
            .unwrap();

        assert_eq!(store.search_patients("maria").len(), 1);
        assert_eq!(store.search_patients("123456").len(), 1);
        assert_eq!(store.search_patients("@email.com").len(), 1);
        assert_eq!(store.search_patients("").len(), 2);
        assert!(store.search_patients("ninguem").is_empty());
    }

    #[test]
    fn test_snapshot_restore_roundtrip() {
        let mut store = RecordStore::new();
        let patient = store
            .register_patient(patient_draft("Ana", "52998224725"))
            .unwrap();
        let snapshot = store.snapshot();

        let mut other = RecordStore::new();
        other.restore(snapshot.clone()).unwrap();
        assert_eq!(other.patients().len(), 1);
        assert_eq!(other.patients()[0].id, patient.id);

        // Restore appended one audit entry on top of the restored log.
        assert_eq!(other.audit().len(), snapshot.audit_entries.len() + 1);
        let last = other.audit().entries().last().unwrap();
        assert_eq!(last.action, AuditAction::Restore);
        assert!(last.detail.contains(&snapshot.saved_at.to_rfc3339()));
    }

    #[test]
    fn test_restore_resumes_id_sequence_above_restored_ids() {
        let mut store = RecordStore::new();
        store
            .register_patient(patient_draft("Ana", "52998224725"))
            .unwrap();
        let snapshot = store.snapshot();

        let mut other = RecordStore::new();
        other.restore(snapshot).unwrap();
        let new_patient = other
            .register_patient(patient_draft("Beto", "12345678909"))
            .unwrap();
        assert!(new_patient.id.value() > other.patients()[0].id.value());
    }

    #[test]
    fn test_restore_rejects_bad_version_without_mutation() {
        let mut store = RecordStore::new();
        store
            .register_patient(patient_draft("Ana", "52998224725"))
            .unwrap();
        let before = store.snapshot();

        let mut bad = store.snapshot();
        bad.schema_version = String::new();
        assert!(store.restore(bad).is_err());

        let after = store.snapshot();
        assert_eq!(after.patients.len(), before.patients.len());
        assert_eq!(after.audit_entries.len(), before.audit_entries.len());
    }
}
