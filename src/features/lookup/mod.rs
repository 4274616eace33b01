//! External lookup clients consulted by the report workflow.
//!
//! Two third-party services are involved: an email deliverability verifier
//! keyed by address plus API token, and a postal code (CEP) resolver. Both
//! are called synchronously with a bounded timeout; transport and parse
//! failures are distinguished from well-formed negative answers.

pub mod clients;

pub use clients::{
    Address, EmailVerdict, EmailVerifier, PostalCodeLookup, VerifierClient, ViaCepClient,
};
