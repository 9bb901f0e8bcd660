pub mod site;
pub mod tracing;

pub use site::{TestSite, decode};
pub use tracing::{CapturedEvent, init_test_tracing};
