#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "print")]
extern crate alloc;

pub mod bytes;
pub mod error;
pub mod flags;
pub mod macros;
pub mod utils;

#[cfg(feature = "print")]
pub mod printer;
#[cfg(feature = "print")]
pub mod symbols;
