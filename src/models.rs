//! Data models for the generic fraud-check request.
//!
//! These types describe a transaction the way the facade sees it,
//! independent of any vendor. The adapter maps them onto the vendor's
//! wire fields at submission time.

mod account;
mod address;
mod payment;
mod purchase;
mod request;
mod session;

#[cfg(test)]
pub(crate) use request::test_request;

pub use account::Account;
pub use address::Address;
pub use payment::Payment;
pub use purchase::{Product, Purchase};
pub use request::FraudRequest;
pub use session::Session;
