//! Script presentation helpers
//!
//! - `asm`: one-line script disassembly for display
//! - `classify`: script template classification and address extraction
//!
//! Script semantics live in the `bitcoin` crate; this module only maps
//! scripts into the strings and address lists the response DTOs carry.

pub mod asm;
pub mod classify;

pub use asm::disassemble;
pub use classify::{classify, extract_addresses, parse_multisig, MultisigTemplate, ScriptClass};
