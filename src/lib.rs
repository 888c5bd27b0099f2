#![doc(test(attr(deny(warnings))))]

//! Adoption Core offers the application-wizard state machine, catalog data
//! shapes, and storage primitives that power adoption workflows and CLIs.

pub mod application;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod errors;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Adoption Core tracing initialized.");
    });
}
