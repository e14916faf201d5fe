//! The `fsplit` crate provides a command-line interface for splitting a
//! large file into fixed-size parts.
//!
//! It handles argument parsing, source validation and user-facing reporting.
//! The splitting itself is done by [libfsplit].

#![doc(html_root_url = "https://docs.rs/fsplit/0.1.0")]
#![doc = include_str!("../README.md")]
pub mod cli;
pub mod command;
