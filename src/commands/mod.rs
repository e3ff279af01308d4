// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod entries;
pub mod balance;
pub mod reports;
pub mod logview;
pub mod exporter;
pub mod resetter;
