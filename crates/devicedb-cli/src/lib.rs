//! devicedb-cli
//! ============
//!
//! Command-line interface for the `devicedb-core` device catalog.
//!
//! This crate primarily provides a binary (`devicedb`). The library target
//! only carries this overview for the rendered docs.
//!
//! Basic usage
//! -----------
//!
//! ```text
//! devicedb --help
//! devicedb stats
//! devicedb brands
//! devicedb search "xiaomi 14"
//! devicedb --json brand huawei
//! devicedb classify "Xiaomi Pad 6"
//! ```
//!
//! For programmatic access, use the [`devicedb-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
