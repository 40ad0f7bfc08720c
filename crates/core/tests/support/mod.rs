//! Shared test helpers for `salestrail-core` integration tests.
//!
//! An in-memory CRM backend that implements every entity port, plus record
//! builders, so timeline tests can focus on behaviour instead of plumbing.

#![allow(dead_code)]

pub mod crm;
pub mod fixtures;
