pub mod config;
pub mod runtime;
pub mod tracing;
pub mod wiring;

pub use config::load_config;
pub use runtime::{create_runtime, AppRuntime};
pub use self::tracing::init_tracing_subscriber;
pub use wiring::{wire_dependencies, WiringError, WiringResult};
