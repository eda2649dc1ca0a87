//! Library surface of the `board-import` binary, split out so the
//! pipeline can be driven from integration tests.

pub mod cli;
pub mod logging;
pub mod pipeline;
