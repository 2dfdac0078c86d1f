//! Lunch order operator tool
//!
//! Terminal counterpart of the portal: read the lookup sheet, list and delete
//! orders, and apply the daily settings through the backing scripts.

mod client;
mod config;
mod reports;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand, ValueEnum};
use lunch_sheet::view::{LookupMode, LookupView, ManagementView, SettingsView, StatusKind};
use lunch_sheet::{DeleteTarget, Summary};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use client::SheetClient;
use config::{Config, FileConfig};

/// Default config file path
const CONFIG_FILE: &str = "lunch.toml";

/// Load the config file; the default path is optional, an explicit one is not
fn load_config(path: Option<&Path>) -> Result<Config> {
    let file_config = match path {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!(
                    "Config file '{}' not found.\n\n\
                    Copy lunch.toml.example to get started, or drop --config\n\
                    to use the built-in endpoints.",
                    path.display()
                );
            }
            FileConfig::load(path)?
        }
        None if Path::new(CONFIG_FILE).exists() => FileConfig::load(Path::new(CONFIG_FILE))?,
        None => FileConfig::default(),
    };

    Ok(Config::from_file(file_config))
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[derive(Parser, Debug)]
#[command(name = "lunch-admin")]
#[command(about = "Operator tool for the lunch order spreadsheet")]
struct Args {
    /// Config file with endpoint and layout overrides
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the lookup sheet: one buyer's orders, everyone's, or a summary
    Lookup {
        /// Buyer to show, or ALL for every order
        #[arg(long, conflicts_with = "summary")]
        buyer: Option<String>,

        /// Grouped totals instead of order lines
        #[arg(long, value_enum)]
        summary: Option<SummaryArg>,

        /// Also write the table to this CSV file
        #[arg(long)]
        export: Option<PathBuf>,
    },

    /// Orders on the management sheet
    Orders {
        #[command(subcommand)]
        action: OrdersCommand,
    },

    /// Daily settings
    Settings {
        #[command(subcommand)]
        action: SettingsCommand,
    },
}

#[derive(Subcommand, Debug)]
enum OrdersCommand {
    /// List submitted orders with their sheet row
    List,

    /// Delete one order or clear the sheet
    Delete {
        /// Sheet row of the order (as shown by `orders list`)
        #[arg(long, conflicts_with = "all", required_unless_present = "all")]
        row: Option<usize>,

        /// Delete every order
        #[arg(long)]
        all: bool,

        /// Management password
        #[arg(long, env = "LUNCH_ADMIN_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
enum SettingsCommand {
    /// List the stores the settings script accepts
    Stores,

    /// Set the order date and store
    Submit {
        /// Order date (default: today)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Store (default: first store offered)
        #[arg(long)]
        store: Option<String>,

        /// Admin account
        #[arg(long, env = "LUNCH_ADMIN_ACCOUNT")]
        account: Option<String>,

        /// Admin password
        #[arg(long, env = "LUNCH_ADMIN_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SummaryArg {
    /// Amount per buyer
    Buyers,
    /// Quantity per item
    Items,
}

impl From<SummaryArg> for Summary {
    fn from(arg: SummaryArg) -> Self {
        match arg {
            SummaryArg::Buyers => Summary::ByBuyer,
            SummaryArg::Items => Summary::ByItem,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = load_config(args.config.as_deref())?;
    tracing::debug!(lookup = %config.lookup_csv, management = %config.management_csv, "using exports");
    let client = SheetClient::new(config)?;

    match args.command {
        Command::Lookup { buyer, summary, export } => {
            handle_lookup_command(&client, buyer, summary, export.as_deref()).await
        }
        Command::Orders { action } => handle_orders_command(&client, action).await,
        Command::Settings { action } => handle_settings_command(&client, action).await,
    }
}

async fn handle_lookup_command(
    client: &SheetClient,
    buyer: Option<String>,
    summary: Option<SummaryArg>,
    export: Option<&Path>,
) -> Result<()> {
    let Some(sheet) = client.fetch_lookup().await? else {
        println!("目前尚無資料");
        return Ok(());
    };

    for field in sheet.index().missing() {
        eprintln!("Warning: lookup export has no {} column", field);
    }

    let mut view = LookupView::default();
    if let Some(buyer) = &buyer {
        view.select_buyer(buyer);
    }
    if let Some(summary) = summary {
        view.select_summary(Summary::from(summary).selection());
    }

    println!("{}\n", sheet.title());

    match view.mode() {
        LookupMode::Prompt => {
            let buyers = sheet.buyers();
            println!("請選擇購買人 (--buyer) 或統計方式 (--summary)\n");
            println!("Buyers ({}):", buyers.len());
            for name in &buyers {
                println!("  {}", name);
            }
            if export.is_some() {
                eprintln!("Warning: nothing selected, --export ignored");
            }
        }
        LookupMode::Summary(kind) => {
            let totals = sheet.summary(kind);
            println!("{}\n", kind.label());
            reports::print_summary(kind, &totals);
            if let Some(path) = export {
                reports::export_summary(path, kind, &totals)?;
                println!("\nWrote {}", path.display());
            }
        }
        LookupMode::Detail(filter) => {
            let (lines, total) = sheet.detail_lines(filter);
            reports::print_detail(&lines, (!filter.is_all()).then_some(total));
            if let Some(path) = export {
                reports::export_detail(path, &lines, total)?;
                println!("\nWrote {}", path.display());
            }
        }
    }

    Ok(())
}

async fn handle_orders_command(client: &SheetClient, action: OrdersCommand) -> Result<()> {
    match action {
        OrdersCommand::List => {
            let book = client.fetch_orders().await?;
            reports::print_orders(book.orders());
        }
        OrdersCommand::Delete { row, all, password } => {
            let target = match (row, all) {
                (_, true) => DeleteTarget::All,
                (Some(row), false) => DeleteTarget::Row(row),
                (None, false) => anyhow::bail!("Pass --row N or --all"),
            };

            if let DeleteTarget::Row(row) = target {
                let book = client.fetch_orders().await?;
                match book.find(row) {
                    Some(order) => println!("Deleting row {}: {} {} x{}", row, order.staff, order.item, order.quantity),
                    None => eprintln!("Warning: row {} is not a listed order", row),
                }
            }

            let mut dialog = ManagementView::default();
            dialog.open(target);
            dialog.password = password.unwrap_or_default();
            let request = dialog.confirm()?;

            let response = client.delete(&request).await?;
            println!("{}", response.message);
            if !response.is_success() {
                anyhow::bail!("Delete rejected (status: {})", response.status);
            }
        }
    }

    Ok(())
}

async fn handle_settings_command(client: &SheetClient, action: SettingsCommand) -> Result<()> {
    match action {
        SettingsCommand::Stores => {
            let stores = client.store_options().await?;
            if stores.is_empty() {
                println!("No stores offered.");
            }
            for store in stores {
                println!("{}", store);
            }
        }
        SettingsCommand::Submit {
            date,
            store,
            account,
            password,
        } => {
            let date = date.unwrap_or_else(|| Local::now().date_naive());
            let mut state = SettingsView::new(date.format("%Y-%m-%d").to_string());

            match store {
                Some(store) => state.form.store = store,
                None => state.stores_loaded(client.store_options().await?),
            }
            state.form.account = account.unwrap_or_default();
            state.form.password = password.unwrap_or_default();

            let url = state.begin_submit(&client.config().settings_script)?;
            tracing::info!(date = %state.form.date, store = %state.form.store, "submitting settings");

            match client.submit_settings(&url).await {
                Ok(reply) => state.finish_submit(&reply),
                Err(e) => {
                    tracing::debug!("settings submit failed: {:#}", e);
                    state.submit_failed();
                }
            }

            if let Some(status) = state.status {
                println!("{}", status.message);
                if status.kind != StatusKind::Success {
                    anyhow::bail!("Settings were not applied");
                }
            }
        }
    }

    Ok(())
}
