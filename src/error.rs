// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Rejections raised at the add-entry boundary, before any row is written.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Amount must be greater than zero, got '{0}'")]
    NonPositiveAmount(String),
    #[error("Expense entries require a category")]
    MissingCategory,
    #[error("Credit entries do not take a category")]
    UnexpectedCategory,
    #[error("Unknown category '{0}'")]
    UnknownCategory(String),
}
