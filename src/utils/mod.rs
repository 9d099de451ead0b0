// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Shared helper utilities reused by the catalog and the command-line host.

pub mod fold;

/// Fold a display name into a case- and accent-insensitive search key.
pub use fold::fold_name;
