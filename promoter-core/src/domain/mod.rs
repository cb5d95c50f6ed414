//! Core domain types
//!
//! This module contains the structures shared by every stage of pipeline
//! generation. Descriptors are the input records, jobs are derived from them
//! on every run and never persisted.

pub mod descriptor;
pub mod environment;
pub mod job;
