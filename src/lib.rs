//! laragen library - YAML schema to Laravel artifact compiler
//!
//! Provides the schema compiler (parse, validate, resolve, order) and the
//! artifact generators (migrations, models, Filament resources) behind the
//! `laragen` CLI.

#[macro_use]
pub mod test_macros;

pub mod cli;
pub mod commands;
pub mod error;
pub mod generate;
pub mod output;
pub mod schema;
pub mod utils;
pub mod writer;
