//! Command implementations for the CLI.
//!
//! Each submodule contains the implementation of one subcommand.

pub mod describe;
pub mod fields;
pub mod kinds;
pub mod set;
pub mod validate;

pub use describe::run_describe;
pub use fields::run_fields;
pub use kinds::run_kinds;
pub use set::run_set;
pub use validate::run_validate;
