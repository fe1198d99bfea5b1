// ABOUTME: Command implementations for the converter binary
// ABOUTME: Exports the one-shot convert command

pub mod convert;

pub use convert::convert;
