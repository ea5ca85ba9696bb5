//! List installed applications through the app-list method channel.
//!
//! ```sh
//! app-inventory                      # name<TAB>packageName per line
//! app-inventory --json               # the raw channel response
//! app-inventory --on-label-error skip --locale de_DE.UTF-8
//! RUST_LOG=app_inventory_core=debug app-inventory
//! ```
//!
//! Exit status: 0 on success, 1 when the query fails, 2 when the method is
//! not implemented by the channel.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use app_inventory::{
    app_list_channel, inventory::Locale, method_names, AppInfo, DesktopEntryRegistry,
    LabelFailurePolicy, MethodCall, MethodResult, QueryOptions, RegistryConfig,
};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "app-inventory", version, about = "List installed applications")]
struct Cli {
    /// Print the channel response as JSON
    #[arg(long)]
    json: bool,

    /// Method to invoke on the app-list channel
    #[arg(long, default_value = method_names::GET_INSTALLED_APPS)]
    method: String,

    /// What to do when an application's name cannot be resolved
    /// (abort, skip, use-identifier)
    #[arg(long, default_value = "abort")]
    on_label_error: LabelFailurePolicy,

    /// User data directory (defaults to $XDG_DATA_HOME when absolute)
    #[arg(long)]
    data_home: Option<PathBuf>,

    /// System data directory; repeat to search several (defaults to $XDG_DATA_DIRS)
    #[arg(long = "data-dir")]
    data_dirs: Vec<PathBuf>,

    /// Locale for localized names (defaults to $LC_ALL, $LC_MESSAGES or $LANG)
    #[arg(long)]
    locale: Option<String>,

    /// Log query progress to stderr
    #[arg(long, short = 'v')]
    verbose: bool,
}

impl Cli {
    fn registry_config(&self) -> RegistryConfig {
        let mut config = RegistryConfig::from_env();
        if let Some(data_home) = &self.data_home {
            config.data_home = Some(data_home.clone());
        }
        if !self.data_dirs.is_empty() {
            config.data_dirs = self.data_dirs.clone();
        }
        if let Some(locale) = &self.locale {
            config.locale = Locale::parse(locale);
        }
        config
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    run(&cli).await.map(ExitCode::from)
}

/// Dispatch the requested method and print the outcome; returns the exit status.
async fn run(cli: &Cli) -> anyhow::Result<u8> {
    let config = cli.registry_config();
    debug!(
        data_home = ?config.data_home,
        data_dirs = ?config.data_dirs,
        locale = ?config.locale,
        "registry configuration"
    );

    let registry = DesktopEntryRegistry::new(config);
    let options = QueryOptions::default().with_label_failure(cli.on_label_error);
    let channel = Arc::new(app_list_channel(registry, options));

    let result = channel
        .dispatch(MethodCall::new(cli.method.clone()))
        .await
        .context("dispatching method call")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    }

    match result {
        MethodResult::Success(value) => {
            let apps: Vec<AppInfo> = serde_json::from_value(value).context("decoding app list")?;
            info!(apps = apps.len(), "inventory listed");
            if !cli.json {
                for app in apps {
                    println!("{}\t{}", app.name, app.package_name);
                }
            }
            Ok(0)
        }
        MethodResult::Error(e) => {
            info!(code = %e.code, detail = ?e.detail, "inventory query failed");
            if !cli.json {
                eprintln!("error: {e}");
            }
            Ok(1)
        }
        MethodResult::NotImplemented => {
            info!(method = %cli.method, "method not implemented");
            if !cli.json {
                eprintln!("error: method {:?} is not implemented", cli.method);
            }
            Ok(2)
        }
    }
}
