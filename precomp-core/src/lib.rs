pub mod assets;
pub mod conf;
pub mod filter;
pub mod logging;
pub mod negotiation;

#[cfg(feature = "producer")]
pub mod producer;
