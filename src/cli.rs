// SPDX-License-Identifier: MIT

//! CLI definition and argument helpers for service-prefs.
//
// This module only describes the command line; all behavior lives in the
// library and in `main.rs`.
use std::path::PathBuf;

use clap::{Arg, ArgGroup, ArgMatches, Command};

use crate::{
    config::Settings,
    core::types::Domain,
    services::registry::{BackendRegistry, RegistryError, ServiceId},
};

pub fn build_cli() -> Command {
    let service = |req| {
        let mut a = Arg::new("service")
            .help("Service id (e.g. 3) or name (e.g. PeerTube)")
            .index(1);
        if req {
            a = a.required(true)
        }
        a
    };

    let key = Arg::new("key")
        .help("Preference key")
        .required(true)
        .index(1);

    Command::new("sprefs")
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("file")
                .long("file")
                .global(true)
                .value_name("PATH")
                .help("Plist file to use as preference store")
                .conflicts_with("domain"),
        )
        .arg(
            Arg::new("domain")
                .long("domain")
                .global(true)
                .value_name("APP_ID")
                .help("Application domain whose preference file is used"),
        )
        .subcommand(Command::new("services").about("List known services"))
        .subcommand(Command::new("selected").about("Show the selected service"))
        .subcommand(
            Command::new("select")
                .about("Select the active service")
                .arg(service(true)),
        )
        .subcommand(
            Command::new("init")
                .about("Apply stored credentials and show the resulting runtime config")
                .arg(service(false)),
        )
        .subcommand(
            Command::new("info")
                .about("Show static details for a service")
                .arg(service(true)),
        )
        .subcommand(Command::new("read").about("Read a value").arg(&key))
        .subcommand(
            Command::new("write")
                .about("Write value")
                .arg(&key)
                .arg(
                    Arg::new("bool")
                        .short('b')
                        .long("bool")
                        .num_args(1)
                        .value_name("VALUE")
                        .help("Write a boolean value (true/false/1/0/yes/no)"),
                )
                .arg(
                    Arg::new("string")
                        .short('s')
                        .long("string")
                        .num_args(1)
                        .value_name("VALUE")
                        .help("Write a string value"),
                )
                .group(
                    ArgGroup::new("value")
                        .args(["bool", "string"])
                        .required(true),
                ),
        )
        .subcommand(Command::new("delete").about("Delete key").arg(key))
}

/// Applies `--file` / `--domain` on top of the environment settings.
pub fn settings_from_args(matches: &ArgMatches) -> Settings {
    let mut settings = Settings::from_env();
    if let Some(file) = matches.get_one::<String>("file") {
        settings.domain = Domain::Path(PathBuf::from(file));
    } else if let Some(app_id) = matches.get_one::<String>("domain") {
        settings.domain = Domain::User(app_id.clone());
    }
    settings
}

/// Parsed `service` argument: a numeric id or a name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceArg {
    Id(ServiceId),
    Name(String),
}

impl ServiceArg {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().parse::<u32>() {
            Ok(id) => ServiceArg::Id(ServiceId(id)),
            Err(_) => ServiceArg::Name(raw.to_string()),
        }
    }

    /// Looks the argument up in `registry`.
    pub fn resolve(&self, registry: &BackendRegistry) -> Result<ServiceId, RegistryError> {
        match self {
            ServiceArg::Id(id) => registry.resolve_by_id(*id).map(|_| *id),
            ServiceArg::Name(name) => registry.resolve_by_name(name),
        }
    }
}
