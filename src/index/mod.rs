//! Lookup indexes built from freshly loaded tables.
//!
//! Both indexes are constructed once per search and are read-only afterwards.
//! When a key appears more than once the row encountered last wins.

pub mod catalog;
pub mod inventory;

pub use catalog::CatalogIndex;
pub use inventory::InventoryIndex;
