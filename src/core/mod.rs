// SPDX-License-Identifier: MIT

pub(crate) mod convert;
pub mod error;
pub mod types;
