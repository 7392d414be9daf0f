//! Demonstration driver for `orivec`: builds vectors, combines them and
//! prints the results.
pub mod config;
pub mod demo;
pub mod inspect;
