// trolley_api/src/services/mod.rs

//! Password hashing, bearer token issuing/verification and the user flows
//! built on them.

pub mod auth_service;
pub mod token_service;
pub mod user_service;
