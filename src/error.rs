// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Error types

use thiserror::Error;

/// Possible failures from building or running a window
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    /// Failure from the toolkit: runtime initialisation or the event loop
    #[error("toolkit error")]
    Toolkit(#[from] kas::runner::Error),
    /// Label text could not be converted to formatted text
    #[error("invalid label text: {0}")]
    Markup(String),
    /// A window dimension does not fit the toolkit's pixel type
    #[error("window dimension {0} exceeds the supported range")]
    Dimension(u32),
}

/// Result type with [`Error`] as the default error
pub type Result<T, E = Error> = std::result::Result<T, E>;
