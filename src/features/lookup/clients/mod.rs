mod email_verifier;
mod postal_code;

pub use email_verifier::{EmailVerdict, EmailVerifier, VerifierClient};
pub use postal_code::{Address, PostalCodeLookup, ViaCepClient};
