use super::logging;
use super::render::{print_config, print_devices, print_messages, print_report};
use super::setup::{Cli, Commands};
use clap::Parser;
use devcat::api::{CatalogApi, ConfigAction, SortOrder};
use devcat::catalog::DeviceEdit;
use devcat::commands;
use devcat::config::DevcatConfig;
use devcat::error::{DevcatError, Result};
use devcat::query::DeviceFilter;
use devcat::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::PathBuf;

const HOME_ENV: &str = "DEVCAT_HOME";

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config_dir = config_dir();
    tracing::debug!(config_dir = %config_dir.display(), "resolved config dir");

    let command = cli.command.unwrap_or(Commands::List);
    let catalog_command = match command {
        Commands::Config { key, value } => return handle_config(config_dir, key, value),
        Commands::List => CatalogCommand::List,
        Commands::Filter(args) => CatalogCommand::Filter(
            args.into_filter()
                .ok_or_else(|| DevcatError::Api("No filter given".into()))?,
        ),
        Commands::Sort { by } => CatalogCommand::Sort(by.into()),
        Commands::Edit {
            index,
            price,
            model,
            add_app,
        } => CatalogCommand::Edit(
            index,
            DeviceEdit {
                price,
                model,
                append_app: add_app,
            },
        ),
        Commands::Delete { index } => CatalogCommand::Delete(index),
        Commands::Report { screen_threshold } => CatalogCommand::Report(screen_threshold),
    };

    let config = DevcatConfig::load(&config_dir)?;
    let mut api = open_api(cli.file, cli.out, &config);
    print_messages(&api.take_load_messages());

    match catalog_command {
        CatalogCommand::List => {
            let result = api.list_devices()?;
            print_devices(&result.listed_devices);
            print_messages(&result.messages);
        }
        CatalogCommand::Filter(filter) => {
            let result = api.filter_devices(&filter)?;
            print_devices(&result.listed_devices);
            print_messages(&result.messages);
        }
        CatalogCommand::Sort(order) => {
            let result = api.sort_devices(order)?;
            print_devices(&result.listed_devices);
            print_messages(&result.messages);
        }
        CatalogCommand::Edit(index, edit) => {
            let result = api.edit_device(index, edit)?;
            print_messages(&result.messages);
        }
        CatalogCommand::Delete(index) => {
            let result = api.delete_device(index)?;
            print_messages(&result.messages);
        }
        CatalogCommand::Report(screen_threshold) => {
            let threshold = screen_threshold.unwrap_or(config.screen_threshold);
            let result = api.report(threshold)?;
            if let Some(report) = &result.report {
                print_report(report);
            }
            print_messages(&result.messages);
        }
    }
    Ok(())
}

/// Commands that run against the loaded catalog.
enum CatalogCommand {
    List,
    Filter(DeviceFilter),
    Sort(SortOrder),
    Edit(usize, DeviceEdit),
    Delete(usize),
    Report(Option<f64>),
}

fn open_api(
    file: Option<PathBuf>,
    out: Option<PathBuf>,
    config: &DevcatConfig,
) -> CatalogApi<FileStore> {
    let target = match (&out, &file) {
        (Some(out), _) => out.clone(),
        (None, Some(file)) => file.clone(),
        (None, None) => PathBuf::from(&config.save_file),
    };
    let source = file.unwrap_or_else(|| PathBuf::from(&config.data_file));
    tracing::debug!(source = %source.display(), target = %target.display(), "opening catalog");

    let store = FileStore::new(source).with_target(target);
    CatalogApi::open(store)
}

fn config_action(key: Option<String>, value: Option<String>) -> ConfigAction {
    match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    }
}

fn handle_config(config_dir: PathBuf, key: Option<String>, value: Option<String>) -> Result<()> {
    let result = commands::config::run(&config_dir, config_action(key, value))?;
    if let Some(config) = &result.config {
        print_config(config);
    }
    print_messages(&result.messages);
    Ok(())
}

fn config_dir() -> PathBuf {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return PathBuf::from(home);
    }
    ProjectDirs::from("com", "devcat", "devcat")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".devcat"))
}
