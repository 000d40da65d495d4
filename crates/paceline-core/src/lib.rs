//! Paceline Core Types and Computation
//!
//! This crate provides the foundational types and the timeline computation
//! for the Paceline workout visualizer. It includes:
//!
//! - **Workout model**: intervals, repetitions, and workout metadata
//!   ([`workout`] module)
//! - **Durations**: normalization of duration expressions into canonical
//!   hours ([`duration`] module)
//! - **Timeline**: flattening and cumulative-offset layout ([`timeline`]
//!   module)
//! - **Colors**: color handling with CSS color support ([`color::Color`])
//!
//! Everything here is pure computation: no I/O, no shared state, and the
//! same input always produces the same output.

pub mod color;
pub mod duration;
pub mod timeline;
pub mod workout;
