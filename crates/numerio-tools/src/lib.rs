// SPDX-FileCopyrightText: 2026 Numerio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tool trait, registry, and the built-in math tools.
//!
//! Every tool is a stateless wrapper around a pure function: it parses the
//! JSON input into typed arguments, runs the computation, and serializes a
//! structured success/failure record into [`tool::ToolOutput`]. In-domain
//! failures (bad expressions, out-of-range inputs) become success-false
//! records; only malformed parameters surface as `Err`.

pub mod builtin;
pub mod tool;

pub use builtin::{default_registry, registry_with_limits};
pub use tool::{Tool, ToolOutput, ToolRegistry};
