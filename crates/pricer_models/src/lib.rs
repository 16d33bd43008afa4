//! # Pricer Models (L2: Business Logic)
//!
//! Fixed-income instruments and the analytical formulas that value them.
//!
//! This crate provides:
//! - [`instruments::Bond`]: fixed-coupon bond with a generated cashflow schedule
//! - [`instruments::Caplet`]: single-period caplet
//! - [`analytical::Black76Caplet`]: Black model price and Greeks for caplets
//! - [`instruments::Valuable`]: the one capability the risk layer relies on
//!
//! ## Design Principles
//!
//! - **Enum-based instruments** for static dispatch ([`instruments::Instrument`])
//! - **Validated construction**: invalid contract terms never reach a pricer
//! - **Typed errors** per module, converted into
//!   [`pricer_core::types::PricingError`] at the boundary

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
