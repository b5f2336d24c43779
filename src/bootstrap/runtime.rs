//! # Application Runtime
//!
//! `AppRuntime` owns the wired `AppDeps` and hands out use cases through the
//! `UseCases` accessor:
//!
//! ```rust,no_run
//! # async fn demo(runtime: &crowdfund::AppRuntime) -> anyhow::Result<()> {
//! use cf_core::listing::{ListingQuery, Window};
//!
//! let window = Window::Page { number: 1, size: runtime.deps().tunables.page_size };
//! let page = runtime
//!     .usecases()
//!     .list_campaigns()
//!     .execute(&ListingQuery::default(), window)
//!     .await?;
//! # let _ = page;
//! # Ok(())
//! # }
//! ```

use cf_app::{AppDeps, UseCases};
use cf_core::{AppConfig, Chain, ReadContext};
use tracing::info;

use super::wiring::{wire_dependencies, WiringResult};

/// Application runtime with dependencies.
pub struct AppRuntime {
    deps: AppDeps,
}

impl AppRuntime {
    pub fn new(deps: AppDeps) -> Self {
        Self { deps }
    }

    pub fn deps(&self) -> &AppDeps {
        &self.deps
    }

    /// Use case accessor, borrowing the runtime's dependencies.
    pub fn usecases(&self) -> UseCases<'_> {
        UseCases::new(&self.deps)
    }

    /// Switch the active chain. Reads issued before the switch come back
    /// as stale and are discarded.
    pub fn switch_chain(&self, chain: Chain) -> ReadContext {
        let context = self.deps.read_context.switch_chain(chain);
        info!(
            %chain,
            chain_id = chain.chain_id(),
            generation = context.generation,
            "Active chain switched"
        );
        context
    }

    /// Mark in-flight reads stale without changing chain (account change).
    pub fn invalidate_reads(&self) -> ReadContext {
        self.deps.read_context.invalidate()
    }
}

/// Wire every dependency from configuration and build the runtime.
pub fn create_runtime(config: &AppConfig) -> WiringResult<AppRuntime> {
    Ok(AppRuntime::new(wire_dependencies(config)?))
}
