// SPDX-License-Identifier: MIT

use anyhow::{Context, Result, anyhow, bail};
use clap::ArgMatches;
use service_prefs::cli::{ServiceArg, build_cli, settings_from_args};
use service_prefs::services::lookup::{
    EnglishLocalizer, Localizer, cache_expiration, icon, import_instructions,
    import_instructions_hint, is_experimental,
};
use service_prefs::{
    BackendRegistry, PlistStore, PrefValue, PreferenceStore, ServiceId, ServicePrefs,
};
use tracing_subscriber::EnvFilter;

fn main() {
    init_logging();

    let matches = build_cli().get_matches();
    if let Err(e) = run(&matches) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(matches: &ArgMatches) -> Result<()> {
    let settings = settings_from_args(matches);
    let store = PlistStore::open(&settings.domain)
        .with_context(|| format!("Failed to open preferences for {}", settings.domain))?;
    let mut prefs = ServicePrefs::new(store, settings.keys);
    let mut registry = BackendRegistry::builtin();

    let Some((cmd, sub_m)) = matches.subcommand() else {
        bail!("Subcommand required");
    };

    match cmd {
        "services" => {
            let selected = prefs.selected_service_id(&registry);
            for entry in registry.entries() {
                let marker = if entry.id == selected { "*" } else { " " };
                println!("{marker} {:>2}  {}", entry.id, entry.name);
            }
        }
        "selected" => {
            let id = prefs.selected_service_id(&registry);
            println!("{id} {}", registry.resolve_by_id(id)?);
        }
        "select" => {
            let raw = required(sub_m, "service")?;
            match ServiceArg::parse(raw) {
                ServiceArg::Id(id) => prefs.set_selected_service_id(&registry, id),
                ServiceArg::Name(name) => prefs.set_selected_service_name(&registry, &name),
            }
            let id = prefs.selected_service_id(&registry);
            println!("{id} {}", registry.resolve_by_id(id)?);
        }
        "init" => {
            let ids = match sub_m.get_one::<String>("service") {
                Some(raw) => vec![resolve_service(raw, &registry)?],
                None => registry.all_services(),
            };
            for id in &ids {
                prefs.init_service(&mut registry, *id);
            }
            for id in ids {
                print_runtime(&registry, id)?;
            }
        }
        "info" => {
            let id = resolve_service(required(sub_m, "service")?, &registry)?;
            print_info(&registry, id)?;
        }
        "read" => {
            let key = required(sub_m, "key")?;
            let value = prefs
                .store()
                .get_value(key)
                .ok_or_else(|| anyhow!("Key `{key}` not found"))?;
            println!("{value}");
        }
        "write" => {
            let key = required(sub_m, "key")?;
            let value = match (
                sub_m.get_one::<String>("string"),
                sub_m.get_one::<String>("bool"),
            ) {
                (Some(s), _) => PrefValue::from_flag("string", s)?,
                (None, Some(b)) => PrefValue::from_flag("bool", b)?,
                (None, None) => bail!("A value is required (-s or -b)"),
            };
            prefs
                .store_mut()
                .set_value(key, value)
                .with_context(|| format!("Failed to write `{key}`"))?;
            println!("OK");
        }
        "delete" => {
            let key = required(sub_m, "key")?;
            prefs
                .store_mut()
                .remove(key)
                .with_context(|| format!("Failed to delete `{key}`"))?;
            println!("OK");
        }
        other => bail!("Unknown subcommand `{other}`"),
    }

    Ok(())
}

fn required<'a>(sub_m: &'a ArgMatches, name: &str) -> Result<&'a str> {
    sub_m
        .get_one::<String>(name)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("{name} required"))
}

fn resolve_service(raw: &str, registry: &BackendRegistry) -> Result<ServiceId> {
    Ok(ServiceArg::parse(raw).resolve(registry)?)
}

fn print_runtime(registry: &BackendRegistry, id: ServiceId) -> Result<()> {
    let name = registry.resolve_by_id(id)?;
    let runtime = registry
        .get(id)
        .ok_or_else(|| anyhow!("Service {id} has no runtime config"))?;
    println!("{id} {name}");
    if let Some(instance) = &runtime.instance {
        println!("    instance = {} ({})", instance.url, instance.name);
    }
    if let Some(token) = &runtime.auth_token {
        println!("    auth_token = <{} chars>", token.chars().count());
    }
    Ok(())
}

fn print_info(registry: &BackendRegistry, id: ServiceId) -> Result<()> {
    let name = registry.resolve_by_id(id)?;
    let localizer = EnglishLocalizer;
    println!("{id} {name}");
    println!("    icon = {}", icon(id).resource_name());
    println!("    cache_expiration = {}s", cache_expiration(id).as_secs());
    println!("    experimental = {}", is_experimental(name));
    match import_instructions(id) {
        Some(res) => println!("    import = {}", localizer.get_string(res)),
        None => println!("    import = unsupported"),
    }
    if let Some(res) = import_instructions_hint(id) {
        println!("    import_hint = {}", localizer.get_string(res));
    }
    Ok(())
}
