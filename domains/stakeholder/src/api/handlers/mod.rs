//! HTTP handlers for the Stakeholder domain

pub mod chat;
