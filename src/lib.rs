//! # NL2SQL Eval Library
//!
//! Canonicalization of generated SQL and evaluation of text-to-SQL
//! predictions against reference queries.

pub mod app;
pub mod cache;
pub mod canonical;
pub mod cli;
pub mod config;
pub mod dataset;
pub mod error;
pub mod evaluate;
pub mod input;
pub mod output;
pub mod schema;
pub mod similarity;
