//! Missive — compose one markdown document from command-line subcommands.
//!
//! A missive run concatenates the outputs of `say`, `attach`, `insert`,
//! `exec`, and `paste` invocations — separated by comma punctuation — into a
//! single markdown string, ready to paste into an AI chat UI or write to a
//! file. The pipeline is raw tokens → segmenter → dispatcher → entries →
//! renderer, strictly in input order.
//!
//! # Quick start
//!
//! ```
//! use missive::entry::Entry;
//! use missive::markdown;
//! use missive::segment::segment;
//!
//! let tokens: Vec<String> = ["say", "hello,", "say", "world"]
//!     .iter()
//!     .map(|s| s.to_string())
//!     .collect();
//! let segments = segment(&tokens).unwrap();
//! assert_eq!(segments.len(), 2);
//!
//! let doc = markdown::render(&[Entry::message("hello")]);
//! assert_eq!(doc, "hello\n");
//! ```

pub mod build_info;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod entry;
pub mod error;
pub mod markdown;
pub mod process;
pub mod render;
pub mod segment;
pub mod staging;
#[cfg(test)]
pub mod testsupport;
pub mod textutil;
