//! Domains module containing business logic organized by bounded contexts.
//!
//! - `formulas`: pure clinical equations, no knowledge of tools or protocol
//! - `tools`: the tool catalog, schema validation and dispatch

pub mod formulas;
pub mod tools;
