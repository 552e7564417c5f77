//! Error taxonomy for the router and its collaborators

pub mod router_error;

pub use router_error::*;
