//! Core library for the part-lookup command line application.
//!
//! A search takes free-form text, pulls out every 6- or 10-digit part number,
//! and resolves each one against a price list and an inventory report. The
//! matching logic works on already-loaded [`model::Table`] values: token
//! extraction lives in [`extract`], the two indexes under [`index`], and the
//! join plus report rendering in [`lookup`]. Locating and reading workbooks is
//! kept apart under [`io`], and [`search`] ties the pieces together.

pub mod config;
pub mod error;
pub mod extract;
pub mod index;
pub mod io;
pub mod lookup;
pub mod model;
pub mod search;

pub use error::{LookupError, Result};
