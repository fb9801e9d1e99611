//! Support Triage - Customer support message classification
//!
//! This crate classifies incoming support messages by issue type and tone,
//! suggests a next step, and logs each message as a ticket in a document
//! database.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
