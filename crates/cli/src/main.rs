use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use clinic_core::{BillingPolicy, CatalogStore, CoreConfig, IdPolicy};

mod error;
mod menu;
mod prompt;
mod render;

use menu::Menu;
use prompt::Prompter;
use render::OutputFormat;

#[derive(Parser)]
#[command(name = "clinic")]
#[command(about = "In-memory clinic record keeping: patients, doctors, appointments and payments")]
struct Cli {
    /// Accept duplicate identifiers; lookups then return the earliest record
    #[arg(long)]
    allow_duplicate_ids: bool,
    /// Allow more than one payment for the same appointment
    #[arg(long)]
    allow_double_billing: bool,
    /// Print listings as JSON instead of text
    #[arg(long)]
    json: bool,
    /// Default log directive, added on top of RUST_LOG
    #[arg(long, default_value = "error")]
    log_level: String,
}

impl Cli {
    fn core_config(&self) -> CoreConfig {
        let id_policy = if self.allow_duplicate_ids {
            IdPolicy::Shadow
        } else {
            IdPolicy::Unique
        };
        let billing_policy = if self.allow_double_billing {
            BillingPolicy::Permissive
        } else {
            BillingPolicy::SinglePayment
        };
        CoreConfig::with_policies(id_policy, billing_policy)
    }

    fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Runs the interactive menu on stdin/stdout.
///
/// Logs go to stderr so they never interleave with menu output on stdout.
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(cli.log_level.parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cfg = Arc::new(cli.core_config());
    tracing::info!(
        id_policy = ?cfg.id_policy(),
        billing_policy = ?cfg.billing_policy(),
        "starting clinic menu"
    );

    let store = CatalogStore::new(cfg);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let prompter = Prompter::new(stdin.lock(), stdout.lock());

    let mut menu = Menu::new(store, prompter, cli.output_format());
    menu.run()?;

    let (store, _) = menu.into_parts();
    tracing::info!(
        patients = store.patients().len(),
        doctors = store.doctors().len(),
        appointments = store.appointments().len(),
        payments = store.payments().len(),
        "session ended, records discarded"
    );

    Ok(())
}
