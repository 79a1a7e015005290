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

use std::path::PathBuf;

/// Name of the file the version string is read from
pub const VERSION_FILE: &str = "version";
/// File that gets stamped if no other target is given
pub const TARGET_FILE: &str = "testVersion.js";
/// Environment used if neither `--environment` nor `--params` set one
pub const DEFAULT_ENV: &str = "dev";
/// Build number used if neither `--buildNumber` nor `--params` set one
pub const DEFAULT_BUILD_NUMBER: &str = "0";

/// Placeholder `_version`
pub const KEY_VERSION: &str = "version";
/// Placeholder `_env`
pub const KEY_ENV: &str = "env";
/// Placeholder `_buildNumber`
pub const KEY_BUILD_NUMBER: &str = "buildNumber";

/// The raw values the user passed on the command line, before defaults are applied
#[derive(Clone, Eq, Ord, PartialOrd, Hash, Default, Debug, PartialEq)]
pub struct CliParams {
    pub environment: Option<String>,
    pub build_number: Option<String>,
    /// `--params`, already split on ','
    pub params: Option<Vec<String>>,
}

/// Ordered mapping of placeholder names to the values they get replaced with.
///
/// Keys are unique, iteration happens in insertion order.
#[derive(Clone, Eq, Ord, PartialOrd, Hash, Default, Debug, PartialEq)]
pub struct Substitutions {
    inner: Vec<(String, String)>,
}

impl Substitutions {
    /// Creates an empty mapping
    pub fn new() -> Substitutions {
        Substitutions { inner: Vec::new() }
    }

    /// Inserts `key` with `value`. If `key` exists already its value is replaced, but it keeps
    /// its position.
    pub fn insert(&mut self, key: &str, value: &str) -> &mut Substitutions {
        match self.inner.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value.to_owned(),
            None => self.inner.push((key.to_owned(), value.to_owned())),
        }
        self
    }

    /// Gets the value for `key`, if there's one
    pub fn get(&self, key: &str) -> Option<&str> {
        self.inner
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Iterates over all (key, value) pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.inner.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of placeholders in the mapping
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

/// The Stamper struct, which is used to write [Substitutions](crate::types::Substitutions)
/// into a target file
pub struct Stamper {
    pub target: PathBuf,
    pub substitutions: Substitutions,
}
