//! Display helpers for SOS identifiers, units and values.
//!
//! - [`names`]: URN → name → display name → title case, and back
//! - [`uom`]: UCUM unit display strings
//! - [`format`]: fixed/exponential value formatting and stats tables
//! - [`config`]: the display settings bundle passed to renderers
//!
//! Nothing in this crate keeps global state; tables and formats are values
//! owned by the caller.

pub mod config;
pub mod format;
pub mod names;
pub mod uom;
