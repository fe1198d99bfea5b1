// ABOUTME: Library module for db2sqlite
// ABOUTME: Exports the migration procedure for use in the binary and tests

pub mod commands;
pub mod driver;
pub mod migration;
pub mod sqlite;
pub mod typemap;
pub mod utils;
pub mod value;
