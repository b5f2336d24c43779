//! Crowdfund application orchestration layer
//!
//! This crate contains the use cases that drive the ports defined in
//! `cf-core`: campaign reads, request submission and review, and the
//! donor/owner actions on a campaign.

pub mod deps;
pub mod usecases;

pub use deps::{AppDeps, AppTunables};
pub use usecases::UseCases;
