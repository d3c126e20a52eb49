//! Application layer: service orchestration over the repositories.

pub mod services;
