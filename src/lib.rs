//! The `calculate` function is the kernel of the application.  The `args`
//! module resolves the conventional operand paths, the `operands` module reads
//! the operand files, and the `lines` module holds the `LineSet` structure
//! that `calculate` works on.
//!
//! Current Limitations:
//! * Both operands are read into memory in their entirety, so files larger
//!   than memory are not supported.

#![cfg_attr(debug_assertions, allow(dead_code, unused_imports))]
#![deny(unused_must_use)]
#![deny(clippy::all)]
#![allow(clippy::needless_return)]
#![deny(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![deny(missing_docs)]

pub mod args;
pub mod calculate;
mod lines;
pub mod operands;
