//! Pure validation logic — no I/O, no subprocesses.
//!
//! Every function in this layer takes data in and returns data out; the
//! filesystem and the host interpreter live in `crate::infra`.

pub mod agent;
pub mod error;
pub mod metadata;
pub mod readme;
pub mod report;
pub mod rules;
pub mod structure;
pub mod unit;
