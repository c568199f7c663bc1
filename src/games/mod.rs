//! Game rule engines.

pub mod bowling;
