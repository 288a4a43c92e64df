//! Test support: scripted collaborators and response fixtures.
//!
//! Available to downstream crates as well as this one's own tests.

mod fixtures;
mod mocks;

pub use fixtures::{
    generate_logical_failure, generate_success, health_ok, health_placeholder, pipeline_steps,
    render_scene_failure, render_scene_success,
};
pub use mocks::{ScriptedAssetLoader, ScriptedBackend};
