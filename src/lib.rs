//! Rank contact lists by sales relevance.
//!
//! Each contact's role, company size and country are mapped to scores through
//! lookup tables, combined with fixed weights, and the contacts are sorted by
//! the result (highest first, ties in input order).

pub mod config;
pub mod contact;
pub mod output;
pub mod ranking;
pub mod scoring;
