//! Preview run orchestration.
//!
//! The pipeline is a straight sequence of phases over an explicit
//! [`RunState`]; see [`run_preview`].

pub mod pipeline;
pub mod state;

pub use pipeline::{
    install, pick_for_removal, plan, publish, render, run_preview, Services, PICK_KEY,
    PREVIEW_INSTALLED_KEY,
};
pub use state::{PreviewOutcome, RunState};
