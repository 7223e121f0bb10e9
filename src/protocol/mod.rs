//! # ZPL Command Stream
//!
//! Tokenizer and argument accessors for the caret-delimited label language.
//!
//! ## Command Shape
//!
//! ```text
//! ^FO10,20^FDHello, world^FS
//!  ├┘└─┬─┘ ├┘└─────┬────┘ ├┘
//!  code args code verbatim code
//! ```
//!
//! Every command is a two-character code followed by its arguments. Arguments
//! are comma separated, except for `^FD` whose whole remainder is a single
//! argument.
//!
//! ## Module Structure
//!
//! - [`command`]: [`CommandCode`], [`Command`] and [`tokenize`]
//! - [`args`]: [`Args`] and the typed [`Arg`] outcome

pub mod args;
pub mod command;

pub use args::{Arg, Args};
pub use command::{Command, CommandCode, tokenize};
