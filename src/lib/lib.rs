//This file is part of verstamp
//
//verstamp is free software: you can redistribute it and/or modify
//it under the terms of the GNU General Public License as published by
//the Free Software Foundation, either version 3 of the License, or
//(at your option) any later version.
//
//verstamp is distributed in the hope that it will be useful,
//but WITHOUT ANY WARRANTY; without even the implied warranty of
//MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//GNU General Public License for more details.
//
//You should have received a copy of the GNU General Public License
//along with verstamp.  If not, see <http://www.gnu.org/licenses/>.

//! libverstamp stamps the version of a project, the environment it's built for and the number of
//! the build into a source file. It's meant to be run as a build step, right before bundling.
//!
//! The target file contains the placeholders `_version`, `_env` and `_buildNumber` (case doesn't
//! matter). The first occurrence of each of them gets replaced, the file is overwritten in place.
//!
//! # Usage
//!
//! ```no_run
//! use libverstamp::*;
//! use std::path::Path;
//!
//! // Read the version from the `version` file in the current directory
//! let version = read_version(Path::new(VERSION_FILE)).unwrap();
//! // Pretend the user passed `--params prod,99`
//! let cli_params = CliParams {
//!     params: Some(split_params("prod,99")),
//!     ..CliParams::default()
//! };
//!
//! Stamper::from_substitutions(TARGET_FILE, resolve(&version, &cli_params))
//!     .stamp()
//!     .unwrap();
//! ```

pub mod errors;
pub mod resolver;
pub mod substituter;
pub mod types;
#[cfg(test)]
mod tests;

pub use crate::errors::*;
pub use crate::resolver::*;
pub use crate::substituter::*;
pub use crate::types::*;
