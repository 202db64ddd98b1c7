//! Cycle Budget - terminal budget tracker built around spending cycles
//!
//! A budget period (cycle) is an inclusive date range with a fixed income and
//! fixed expenses. Everything left over is spread evenly over the remaining
//! days, giving a rolling daily spending limit that adjusts as money is spent.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Paths, settings and diagnostic logging
//! - `error`: Custom error types
//! - `models`: Core data models (periods, transactions, money, ids)
//! - `cycle`: The cycle calculator (stats, daily status, history)
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer
//! - `audit`: Audit logging system
//! - `reports`: Calendar, day detail, history and snapshot reports
//! - `display`: Terminal formatting
//! - `export`: CSV, JSON and YAML export
//! - `setup`: Initialization and demo data
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use cycle_budget::cycle::compute_cycle_stats;
//!
//! let stats = compute_cycle_stats(&period, &transactions, today)?;
//! println!("You can spend {} today", stats.daily_limit);
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod cycle;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod setup;
pub mod storage;

pub use error::{CycleError, CycleResult};
