//! Shared support for puzzle solutions.
//!
//! A solution is a function taking the puzzle input as an [`IStr`] and
//! returning its answers, annotated with [`entry`] to produce a program.
//!
//! [`IStr`]: crate::input::IStr

pub mod cli;
pub mod env;
pub mod input;

pub use macros::entry;

#[doc(hidden)]
pub mod macro_support {
    pub use anyhow::Error;
}

pub mod prelude {
    //! Helper prelude with useful imports.
    pub use crate::input::IStr;
    pub use anyhow::{anyhow, bail, ensure, Context, Result};
    pub use bstr::BStr;
    pub use macros::entry;
}
