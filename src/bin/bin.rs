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

use clap::{App, YamlLoader};
use env_logger::Builder;
use libverstamp::*;
use std::path::{Path, PathBuf};

use log::{debug, error, warn};

#[derive(Debug)]
pub(crate) struct BinOptions {
    pub target: PathBuf,
    pub cli_params: CliParams,
    pub verbose: bool,
    pub debug: bool,
}

fn main() {
    // `--version` prints what's in the version file, so it has to be read before parsing the args.
    // Without it there's nothing to do, not even for `--help`.
    let version = match read_version(Path::new(VERSION_FILE)) {
        Ok(version) => version,
        Err(e) => {
            set_up_logging(false, false);
            error!("{}", e.to_string());
            std::process::exit(1);
        }
    };

    let bin_options = help_string(&version);

    set_up_logging(bin_options.debug, bin_options.verbose);

    // We need this for pretty error messages via `env_logger`.
    actual_work(&version, bin_options)
        .map_err(|e| {
            error!("{}", e.to_string());
            std::process::exit(1);
        })
        .unwrap();
}

fn actual_work(version: &str, opts: BinOptions) -> Result<(), Error> {
    debug!("Running with {:?}", opts);

    let substitutions = resolve(version, &opts.cli_params);

    Stamper::from_substitutions(&opts.target, substitutions).stamp()
}

fn set_up_logging(is_debug: bool, is_verbose: bool) {
    let mut builder = Builder::new();

    if is_debug {
        builder
            .filter_module("libverstamp", log::LevelFilter::Debug)
            .filter_module("verstamp", log::LevelFilter::Debug);
    } else if is_verbose {
        builder
            .filter_module("libverstamp", log::LevelFilter::Info)
            .filter_module("verstamp", log::LevelFilter::Info);
    } else {
        builder
            .filter_module("libverstamp", log::LevelFilter::Warn)
            .filter_module("verstamp", log::LevelFilter::Warn);
    }

    builder.default_format_timestamp(false).init();

    if is_debug && is_verbose {
        warn!("Specified both --verbose and --debug! Will ignore --verbose.");
    }
}

// Print the help script if invoked with `--help`/`-h`
fn help_string(version: &str) -> BinOptions {
    let help_yaml = YamlLoader::load_from_str(include_str!("cli.yml")).unwrap();

    let app = App::from_yaml(&help_yaml[0]).version(version);
    let matches = app.get_matches();

    let cli_params = CliParams {
        environment: matches.value_of("environment").map(str::to_owned),
        build_number: matches.value_of("buildNumber").map(str::to_owned),
        params: matches.value_of("params").map(split_params),
    };

    let target = PathBuf::from(matches.value_of("file").unwrap_or(TARGET_FILE));

    let verbose = matches.is_present("verbose");

    let debug = matches.is_present("debug");

    BinOptions {
        target,
        cli_params,
        verbose,
        debug,
    }
}
