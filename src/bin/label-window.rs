// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! A fixed-size window with a centred greeting

use kas_fixed_window::{app, config};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    app::launch(config::greeting(), std::env::args())
}
