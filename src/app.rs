// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Application bootstrap
//!
//! Initialise the toolkit, display one window and run the event loop until
//! that window is closed.

use crate::Result;
use crate::window::WindowDesc;
use kas::config::Config;
use kas::runner::Runner;
use kas::theme::FlatTheme;
use std::process::ExitCode;

/// Apply the settings `desc` needs to the toolkit `config`
///
/// A window without a label leaves `config` untouched.
pub fn configure(desc: &WindowDesc, config: &mut Config) {
    if let Some(label) = desc.label() {
        label.style().apply(config);
    }
}

/// Run `desc` to completion
///
/// Process arguments are accepted but not interpreted: KAS reads its options
/// from the environment, not the command line.
///
/// This blocks until the window is closed. The event loop runs on the
/// calling thread and no other threads are started.
pub fn run(desc: WindowDesc, args: impl IntoIterator<Item = String>) -> Result<()> {
    let args: Vec<String> = args.into_iter().collect();
    log::debug!("app::run: arguments {args:?}");

    let theme = FlatTheme::new();
    let mut runner = Runner::with_theme(theme).build(())?;
    configure(&desc, &mut runner.config_mut());

    let id = desc.display(|window| runner.add(window))?;
    log::debug!("app::run: added window {id:?}");

    runner.run()?;
    log::info!("app::run: event loop finished");
    Ok(())
}

/// Process exit status for the outcome of [`run`]
///
/// Zero when the event loop returned normally, one otherwise.
pub fn exit_status(result: &Result<()>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(_) => 1,
    }
}

/// Run `desc` and report the outcome as an [`ExitCode`]
///
/// Errors (including their sources) are logged.
pub fn launch(desc: WindowDesc, args: impl IntoIterator<Item = String>) -> ExitCode {
    let result = run(desc, args);

    if let Err(ref error) = result {
        log::error!("app::launch: {error}");
        let mut source = std::error::Error::source(error);
        while let Some(error) = source {
            log::error!("Source: {error}");
            source = error.source();
        }
    }

    ExitCode::from(exit_status(&result))
}
