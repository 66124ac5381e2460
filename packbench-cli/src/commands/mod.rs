// SPDX-License-Identifier: Apache-2.0

//! CLI command handlers.

pub mod list;
pub mod run;
