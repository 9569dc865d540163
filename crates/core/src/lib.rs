//! Core library for genprobe
//!
//! This crate implements the **Functional Core** of the genprobe application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! - **`genprobe_core`** (this crate): Pure transformation functions with zero I/O
//! - **`genprobe`**: I/O operations and orchestration (the Imperative Shell)
//!
//! All functions in this crate adhere to these principles:
//!
//! - **Pure functions**: Same input always produces the same output
//! - **No side effects**: No I/O operations, no external state mutations
//! - **Deterministic**: Behavior is predictable and reproducible
//! - **Testable**: Can be tested with simple fixture data, no mocking required
//!
//! Determinism is load-bearing here, not just a testing convenience: the wire
//! payload built by [`generate`] must be byte-identical across invocations.
//!
//! # Module Organization
//!
//! - [`generate`]: Payload construction and diagnostics for the generation endpoint
//!
//! Each module contains:
//!
//! - **Domain models**: Structured types representing requests and outputs
//! - **Transformation functions**: Pure functions that build wire data
//! - **Comprehensive tests**: Unit tests using fixture data (no mocking)

pub mod generate;
