// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Uses the Fluent localization system with `.ftl` files embedded in the
//! binary.
//!
//! # Features
//!
//! - Locale resolution from CLI, config, then system settings
//! - Message arguments for counts and positions
//! - Fallback to `en-US` when no preferred locale is available

pub mod fluent;
