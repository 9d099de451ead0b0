// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Domain layer: plain data types and validation helpers shared by the catalog and forecasts.

pub mod city;
pub mod coordinates;
