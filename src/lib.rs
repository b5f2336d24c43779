//! Crowdfunding client library.
//!
//! Loads configuration, initialises tracing and assembles the adapters from
//! `cf-infra` behind the ports declared in `cf-core`, so callers only deal
//! with the use cases exposed by `cf-app`.

pub mod bootstrap;

pub use bootstrap::{create_runtime, init_tracing_subscriber, load_config, AppRuntime};
pub use cf_app::{AppDeps, UseCases};
pub use cf_core::AppConfig;
