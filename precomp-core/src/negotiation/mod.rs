mod accept;
mod decision;
mod encoding;
mod negotiator;
#[cfg(test)]
mod tests;

pub use accept::*;
pub use decision::Decision;
pub use encoding::*;
pub use negotiator::Negotiator;
