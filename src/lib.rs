//! Song list formatter library - shared by the CLI and its tests.

pub mod error;
pub mod formatter;
pub mod logging;
pub mod mapping;
pub mod models;
pub mod normalize;
pub mod output;
pub mod parse;
pub mod romanize;
pub mod safety;
pub mod script;
