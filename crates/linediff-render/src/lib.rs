//! Unified diff rendering.
//!
//! Turns a [`LineDiff`](linediff_core::LineDiff) edit script into unified
//! diff text: common lines prefixed with a space, added lines with `+`,
//! removed lines with `-`. Rendering is pure string construction; the
//! colored variants go through the `colored` crate and honor its global
//! override and `NO_COLOR` handling.

pub mod unified;

pub use unified::{render_summary, render_unified, render_unified_colored};
