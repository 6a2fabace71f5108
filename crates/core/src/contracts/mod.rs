//! Boundary contracts for the remote collaborators
//!
//! The planner talks to two hosted services: a text-generation service that
//! writes the narrative report, and a weather service that estimates weekly
//! ET and rainfall for a location. The core never performs the I/O; it
//! defines what goes over the wire in each direction and parses what comes
//! back. A collaborator failing leaves the session untouched and fully
//! usable with manually entered values.

pub mod report;
pub mod weather;

pub use report::*;
pub use weather::*;

/// Errors surfaced from a collaborator response
///
/// These are the only fallible paths in the crate; everything inside the
/// calculation itself degrades to a defined fallback instead.
#[derive(Debug)]
pub enum ContractError {
    /// The service returned nothing usable
    EmptyResponse,
    /// The service returned text that does not match the contract
    MalformedResponse(String),
}

impl std::fmt::Display for ContractError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContractError::EmptyResponse => write!(f, "Service returned an empty response"),
            ContractError::MalformedResponse(msg) => {
                write!(f, "Service response did not match the contract: {msg}")
            }
        }
    }
}

impl std::error::Error for ContractError {}
