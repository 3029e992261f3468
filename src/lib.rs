// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! KAS GUI / fixed-size window
//!
//! A window is described by a [`WindowDesc`]: a title, a [`FixedSize`] and
//! optionally a [`LabelDesc`]. This is turned into a toolkit window by
//! [`WindowDesc::build`] and run to completion by [`app::run`]:
//! ```no_run
//! use kas_fixed_window::{app, config};
//!
//! let result = app::run(config::greeting(), std::env::args());
//! std::process::exit(app::exit_status(&result).into());
//! ```
//!
//! There is no subclassing of toolkit windows: all configuration is plain
//! data passed to a construction function.

pub mod app;
pub mod config;
mod error;
pub mod label;
pub mod window;

pub use error::{Error, Result};
pub use label::{FontWeight, LabelDesc, LabelStyle};
pub use window::{FixedSize, WindowDesc};
