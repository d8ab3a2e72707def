//! Kount RIS backend for the omnifraud anti-fraud facade.
//!
//! This crate translates generic fraud-check requests into Kount RIS
//! inquiries and RIS responses back into the facade's generic response
//! view. The whole backend is field mapping: request data is copied onto
//! the vendor's wire tags, AVS/CVV verification codes are translated
//! between code spaces, and the vendor's score is inverted into the
//! facade's direction.
//!
//! # Example
//!
//! ```no_run
//! use omnifraud_kount::config::{Config, ConfigOverlay};
//! use omnifraud_kount::contract::FraudService as _;
//! use omnifraud_kount::service::KountService;
//!
//! # fn main() -> omnifraud_kount::Result<()> {
//! let config = Config::builder()
//!     .layer(ConfigOverlay::from_env())
//!     .layer(ConfigOverlay {
//!         testing: Some(true),
//!         ..ConfigOverlay::default()
//!     })
//!     .build();
//! let service = KountService::new(config)?;
//! # let request = unimplemented!();
//! let response = service.validate_request(&request)?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod contract;
pub mod error;
pub mod models;
pub mod response;
pub mod ris;
pub mod score;
pub mod service;

pub use error::{Error, Result};
