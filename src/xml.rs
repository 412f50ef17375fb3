//! Main module for xmlnodes functionality
//!
//! The pipeline is: source text -> [`lexing`] -> [`parsing`] (syntax tree) -> [`building`]
//! (XmlDocument). Only `building` knows about [`ast`] node types; the syntax layer knows
//! nothing about them.

pub mod ast;
pub mod building;
pub mod config;
pub mod formats;
pub mod lexing;
pub mod parsing;
pub mod testing;
