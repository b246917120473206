//! Digital I/O capability interfaces.
//!
//! This crate defines the vendor-agnostic contracts the rest of the firmware
//! is written against:
//! - [`digital`] – the [`DigitalInput`]/[`DigitalOutput`] capability traits
//!   and the two-valued [`DigitalState`].
//! - [`error`]   – the error surface shared by every implementation.
//! - [`mock`]    – an in-memory test double for host-side tests.
//!
//! Concrete pin drivers live in vendor backend crates and only this crate's
//! traits cross the boundary between application logic and hardware glue.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod digital;
pub mod error;
pub mod mock;

pub use digital::{DigitalInput, DigitalOutput, DigitalState};
pub use error::{DioError, DioResult};

#[cfg(test)]
mod tests;
