// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::store::Store;
use anyhow::Result;

pub fn handle(store: &mut Store, m: &clap::ArgMatches) -> Result<()> {
    let keep_log = m.get_flag("keep-log");
    store.reset(keep_log)?;
    if keep_log {
        println!("Cleared ledger and balance assertions (action log retained)");
    } else {
        println!("Cleared ledger, balance assertions, and action log");
    }
    Ok(())
}
