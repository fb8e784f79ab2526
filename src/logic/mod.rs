// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Business logic kept free of UI concerns.

pub mod publish;
pub mod suggest;
