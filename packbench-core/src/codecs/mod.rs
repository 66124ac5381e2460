// SPDX-License-Identifier: Apache-2.0

//! Adapters over the external libraries under benchmark.
//!
//! Two shapes exist: text-path codecs (`deflate`, `lz`) compress the
//! payload's canonical JSON text, binary-path codecs (`binary`) serialize
//! the JSON value directly through serde.

pub mod binary;
pub mod deflate;
pub mod lz;
