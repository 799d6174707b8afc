//! Companion Core - Usage Metering and Request Routing Engine
//!
//! This crate implements admission control and intent dispatch for a metered
//! conversational companion: tiered daily quotas with a one-time grace reply,
//! keyword-based domain routing, and autonomy mode resolution.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
