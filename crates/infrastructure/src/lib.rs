//! ferrous-dig Infrastructure Layer
pub mod dns;
