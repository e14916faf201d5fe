//! A library for splitting a byte stream into fixed-size parts
//!
//! The engine is abstracted over a reader and a factory of writers, so the
//! source never has to be resident in memory beyond a single part.
//! [`split_file`] wires it to the filesystem, writing every part next to the
//! source under a predictable name (see [`part_name`]).

#![doc(html_root_url = "https://docs.rs/libfsplit/0.1.0")]
mod name;
mod split;

pub use name::part_name;
pub use split::*;
