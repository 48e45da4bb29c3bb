//! Tax calculation modules for shop quotes and invoices.
//!
//! This module provides the sales tax pipeline applied to labor/parts
//! amounts under a tenant's tax settings, plus the shared rounding and rate
//! helpers it is built on.

pub mod common;
pub mod sales_tax;

pub use sales_tax::SalesTaxCalculator;
