use std::collections::{HashMap, HashSet};

use tracing::{debug, info, warn};

use shared_models::error::{AppError, AppResult};

use crate::models::{CreateDoctorRequest, Doctor};

/// Speciality catalog plus the doctor registry. Both keep insertion order for
/// enumeration and an index for lookups.
#[derive(Debug, Default)]
pub struct DoctorService {
    specialties: Vec<String>,
    specialty_index: HashSet<String>,
    doctors: Vec<Doctor>,
    doctor_index: HashMap<String, usize>,
}

impl DoctorService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add specialities to the catalog, ignoring ones already present.
    /// Returns how many were new.
    pub fn add_specialties<I, S>(&mut self, names: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut added = 0;
        for name in names {
            let name = name.into();
            if self.specialty_index.insert(name.clone()) {
                debug!("Adding speciality: {}", name);
                self.specialties.push(name);
                added += 1;
            }
        }
        added
    }

    pub fn specialties(&self) -> &[String] {
        &self.specialties
    }

    pub fn has_specialty(&self, specialty: &str) -> bool {
        self.specialty_index.contains(specialty)
    }

    /// Register a doctor. The id must be new and the speciality already in the catalog.
    pub fn create_doctor(&mut self, request: CreateDoctorRequest) -> AppResult<&Doctor> {
        debug!("Registering doctor: {}", request.id);

        if self.doctor_index.contains_key(&request.id) {
            warn!("Rejected duplicate doctor id: {}", request.id);
            return Err(AppError::DuplicateId(request.id));
        }

        if !self.has_specialty(&request.specialty) {
            warn!("Rejected doctor {} with unknown speciality {}", request.id, request.specialty);
            return Err(AppError::UnknownSpeciality(request.specialty));
        }

        let position = self.doctors.len();
        self.doctor_index.insert(request.id.clone(), position);
        self.doctors.push(Doctor {
            id: request.id,
            first_name: request.first_name,
            last_name: request.last_name,
            specialty: request.specialty,
        });

        let doctor = &self.doctors[position];
        info!("Doctor {} registered as {}", doctor.id, doctor.specialty);
        Ok(doctor)
    }

    pub fn get_doctor(&self, doctor_id: &str) -> Option<&Doctor> {
        self.doctor_index
            .get(doctor_id)
            .map(|&position| &self.doctors[position])
    }

    pub fn first_name(&self, doctor_id: &str) -> Option<&str> {
        self.get_doctor(doctor_id).map(|doctor| doctor.first_name.as_str())
    }

    pub fn last_name(&self, doctor_id: &str) -> Option<&str> {
        self.get_doctor(doctor_id).map(|doctor| doctor.last_name.as_str())
    }

    /// Ids of doctors practising `specialty`, in registration order.
    pub fn specialists(&self, specialty: &str) -> Vec<&str> {
        self.doctors
            .iter()
            .filter(|doctor| doctor.specialty == specialty)
            .map(|doctor| doctor.id.as_str())
            .collect()
    }

    /// All doctors in registration order.
    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }
}
