//! Stakeholder domain layer: chat entities and the responder seam

pub mod entities;
pub mod responder;
