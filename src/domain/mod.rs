// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core value objects with ZERO external dependencies.
//!
//! # Modules
//!
//! - [`portfolio`]: Portfolio types ([`ImageId`](portfolio::ImageId),
//!   [`Order`](portfolio::Order), [`ImageDescriptor`](portfolio::ImageDescriptor))

pub mod portfolio;
