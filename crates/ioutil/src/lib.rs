#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `ioutil` bundles the file and JSON convenience helpers used around the
//! diagnostics workspace. Every helper swallows its failures into an
//! empty-result sentinel: reads return empty strings, empty buffers, or
//! [`serde_json::Value::Null`]; writes return a plain `bool`. Callers that
//! need to distinguish "absent" from "empty" from "malformed" should use
//! [`std::fs`] and [`serde_json`] directly — these helpers deliberately
//! trade that precision for call-site brevity.
//!
//! # Invariants
//!
//! - No helper panics or propagates an error; the sentinel is the entire
//!   failure contract.
//! - Helpers hold no state and take no locks; they are plain functions
//!   over the filesystem.
//!
//! # Examples
//!
//! ```no_run
//! let config = ioutil::read_json_file("config.json");
//! let servers = ioutil::string_list(&config, "servers");
//! if servers.is_empty() {
//!     // missing file, malformed JSON, and an empty list all land here
//! }
//! ```

mod fs;
mod json;

pub use fs::{read_binary_file, read_text_file, write_binary_file, write_text_file};
pub use json::{array, read_json_file, string_list, write_json_file, write_pretty_json_file};
