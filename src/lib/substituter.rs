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
use regex::{NoExpand, RegexBuilder};
use std::borrow::Cow;
use std::fs::File;
use std::io::prelude::*;
use std::path::Path;

use log::{info, warn};

/// Replaces the first occurrence of the placeholder `_<key>` in `text` with `value`.
///
/// Matching is case-insensitive, `value` is inserted literally. The returned bool is `false`
/// if the placeholder wasn't found, in which case the text is returned unchanged.
///
/// # Errors
///
/// * If the pattern for `key` can't be compiled
pub fn replace_first(text: &str, key: &str, value: &str) -> Result<(String, bool), Error> {
    let pattern = RegexBuilder::new(&format!("_{}", regex::escape(key)))
        .case_insensitive(true)
        .build()?;

    match pattern.replace(text, NoExpand(value)) {
        Cow::Borrowed(_) => Ok((text.to_owned(), false)),
        Cow::Owned(replaced) => Ok((replaced, true)),
    }
}

impl Stamper {
    /// Initializes a new Stamper for `target` with no substitutions yet.
    pub fn new<P: AsRef<Path>>(target: P) -> Stamper {
        Stamper {
            target: target.as_ref().to_path_buf(),
            substitutions: Substitutions::new(),
        }
    }

    /// Initializes a new Stamper from [Substitutions](crate::types::Substitutions) that have
    /// been resolved already
    pub fn from_substitutions<P: AsRef<Path>>(target: P, substitutions: Substitutions) -> Stamper {
        Stamper {
            target: target.as_ref().to_path_buf(),
            substitutions,
        }
    }

    /// Sets the Substitutions of the Stamper that's passed into the method
    pub fn set_substitutions(&mut self, substitutions: Substitutions) -> &mut Stamper {
        self.substitutions = substitutions;
        self
    }

    /// Applies all substitutions to `text`, in the order they were inserted. Every replacement
    /// works on the output of the previous one.
    ///
    /// # Example
    /// ```
    /// use libverstamp::{Stamper, Substitutions};
    ///
    /// let mut subs = Substitutions::new();
    /// subs.insert("version", "1.2.3").insert("env", "dev");
    ///
    /// let stamped = Stamper::from_substitutions("testVersion.js", subs)
    ///     .stamp_str("V=_VERSION E=_env E2=_env")
    ///     .unwrap();
    ///
    /// assert_eq!(stamped, "V=1.2.3 E=dev E2=_env");
    /// ```
    ///
    /// # Errors
    ///
    /// * If the pattern of one of the keys can't be compiled
    pub fn stamp_str(&self, text: &str) -> Result<String, Error> {
        let mut result = text.to_owned();

        for (key, value) in self.substitutions.iter() {
            let (replaced, found) = replace_first(&result, key, value)?;

            if found {
                info!("Replaced _{} with '{}'", key, value);
            } else {
                warn!(
                    "Placeholder _{} not found in {}, leaving it alone",
                    key,
                    self.target.display()
                );
            }

            result = replaced;
        }

        Ok(result)
    }

    /// Reads the target file, applies all substitutions and writes the result back to the same
    /// path. There's no backup of the original content!
    ///
    /// # Errors
    ///
    /// * If the target file can't be read, in which case nothing is written
    /// * If the target file can't be written
    pub fn stamp(&self) -> Result<(), Error> {
        info!("Replacing environments in {} ...", self.target.display());

        let mut target_string = String::new();
        File::open(&self.target)
            .and_then(|mut f| f.read_to_string(&mut target_string))
            .map_err(|e| Error::TargetFile(format!("{}: {}", self.target.display(), e)))?;

        let stamped = self.stamp_str(&target_string)?;

        File::create(&self.target)
            .and_then(|mut f| f.write_all(stamped.as_bytes()))
            .map_err(|e| Error::TargetFile(format!("{}: {}", self.target.display(), e)))?;

        Ok(())
    }
}
