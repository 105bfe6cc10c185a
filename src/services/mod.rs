// src/services/mod.rs
//! Business logic: attestation verification and the creation/update
//! orchestration services.

pub mod attestation;
pub mod creation;
pub mod update;
