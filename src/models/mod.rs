// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Domain layer: pure data types and validation helpers shared between UI and publish logic.

pub mod draft;
pub mod platform;
pub mod schedule;
