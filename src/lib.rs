// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod config;        // config loading + validation
pub mod engine;        // resolve -> convert -> invoke
pub mod errors;        // error handling
pub mod observability;
pub mod registry;      // target/operation descriptors
pub mod shell;         // command line + interactive front end
pub mod targets;       // demonstration targets
pub mod traits;        // unified abstractions
