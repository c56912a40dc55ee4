//! Parse, bump, and rewrite a project's single-line version file.
//!
//! The library half of the `update-version` binary: [`version`] holds the
//! grammar parser, [`bump`] resolves which components to step, and [`store`]
//! performs the read-modify-write against the file on disk. [`arguments`]
//! and [`releases`] back the CLI surface.

pub mod arguments;
pub mod bump;
pub mod releases;
pub mod store;
pub mod version;
