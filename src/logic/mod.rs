// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Business logic: catalog loading/lookup and bloom forecasting.

pub mod catalog;
pub mod forecast;
