//! Wayfarer - Conversational Travel Planning Assistant
//!
//! This crate implements a stage-driven travel planning conversation:
//! destination research and flight search are delegated to LLM agent
//! backends behind narrow ports, while the conversation stage machine
//! stays pure and deterministic.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
