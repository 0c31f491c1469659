//! # frab2ht
//!
//! One-shot converter from the frab conference-schedule JSON schema to the
//! HackerTracker format: fetch `schedule.json` and `speakers.json`, derive
//! id mappings, emit four collection files (event types, locations,
//! speakers, events), exit.

pub mod convert;
pub mod error;
pub mod fetch;
pub mod frab;
pub mod hackertracker;
pub mod registry;

pub use error::{Error, Result};
