//! Chain selection and read-context tracking.

pub mod chain;
pub mod read_context;

pub use chain::Chain;
pub use read_context::{ReadContext, ReadContextTracker, Tagged};
