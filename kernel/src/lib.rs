//! Set-cover kernel: the immutable instance model shared by every solver.
//!
//! # API Surface
//!
//! - [`parse::parse_instance`] / [`parse::read_instance`] -- text format to [`instance::Instance`]
//! - [`instance::Instance`] -- universe `{1..=n}` plus ordered subsets
//! - [`element_set::ElementSet`] -- bitset of elements, the unit of all set algebra
//! - [`digest::canonical_hash`] -- SHA-256 fingerprints with domain separation
//!
//! # Module Dependency Direction
//!
//! `element_set` ← `instance` ← `parse`, `digest`
//!
//! One-way only. The kernel performs no search and holds no mutable state.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod digest;
pub mod element_set;
pub mod instance;
pub mod parse;
