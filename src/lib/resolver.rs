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

use crate::errors::Error;
use crate::types::*;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::debug;

/// Reads the version string from `path`, dropping all newline characters.
///
/// # Errors
///
/// * If the file doesn't exist, can't be read or isn't valid UTF-8
pub fn read_version(path: &Path) -> Result<String, Error> {
    let mut version_file = File::open(path)
        .map_err(|e| Error::VersionFile(format!("{}: {}", path.display(), e)))?;

    let mut version = String::new();
    version_file
        .read_to_string(&mut version)
        .map_err(|e| Error::VersionFile(format!("{}: {}", path.display(), e)))?;

    Ok(version.replace('\r', "").replace('\n', ""))
}

/// Splits the value of `--params` on ','. Empty elements are kept so `",77"` still puts the
/// build number in the second slot.
pub fn split_params(raw: &str) -> Vec<String> {
    raw.split(',').map(str::to_owned).collect()
}

/// Returns `value` if it's set to something non-empty, `fallback` otherwise
fn non_empty_or<'a>(value: Option<&'a String>, fallback: &'a str) -> &'a str {
    match value {
        Some(x) if !x.is_empty() => x.as_str(),
        _ => fallback,
    }
}

/// Resolves the final values for all placeholders.
///
/// Starts out with the defaults, then applies `--environment`/`--buildNumber` and finally the
/// elements of `--params`, so the latter wins if both are given.
pub fn resolve(version: &str, cli_params: &CliParams) -> Substitutions {
    let mut env = non_empty_or(cli_params.environment.as_ref(), DEFAULT_ENV);
    let mut build_number = non_empty_or(cli_params.build_number.as_ref(), DEFAULT_BUILD_NUMBER);

    if let Some(params) = cli_params.params.as_ref() {
        env = non_empty_or(params.get(0), env);
        build_number = non_empty_or(params.get(1), build_number);
    }

    debug!(
        "Resolved version '{}', env '{}', build number '{}'",
        version, env, build_number
    );

    let mut subs = Substitutions::new();
    subs.insert(KEY_VERSION, version)
        .insert(KEY_ENV, env)
        .insert(KEY_BUILD_NUMBER, build_number);
    subs
}
