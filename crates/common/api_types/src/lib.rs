pub mod attestation;
pub mod error;
pub mod pubkey;
pub mod request;
pub mod responses;
pub mod slot;
pub mod validator;
