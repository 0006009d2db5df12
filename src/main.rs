use std::str::FromStr;

use paifu_ledger::config::fan_classifier;
use paifu_ledger::{
    process_directory, AppError, Aggregator, Config, FanCatalog, JsonReporter, Reporter, Roster,
};
use strum_macros::EnumString;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
enum Mode {
    #[strum(serialize = "4")]
    FourPlayer,
    #[strum(serialize = "3")]
    ThreePlayer,
    #[strum(serialize = "all")]
    All,
    #[strum(serialize = "summary")]
    Summary,
}

impl Mode {
    fn brackets(self) -> &'static [usize] {
        match self {
            Mode::FourPlayer => &[4],
            Mode::ThreePlayer => &[3],
            Mode::All | Mode::Summary => &[4, 3],
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "paifu_ledger=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "Aggregation failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    let arg = std::env::args().nth(1).unwrap_or_default();
    let mode = Mode::from_str(&arg)
        .map_err(|_| AppError::InvalidArgument(format!("mode must be 4, 3, all or summary, got {arg:?}")))?;

    let config = Config::from_env();
    info!(?mode, ?config, "Starting tournament aggregation");

    let roster = Roster::load(&config.members_file).await?;
    let catalog = FanCatalog::load(&config.fans_file).await?;
    let aggregator = Aggregator::new(fan_classifier());

    for &player_count in mode.brackets() {
        let run = process_directory(
            &config.paifu_dir_for(player_count),
            player_count,
            &roster,
            &aggregator,
        )
        .await?;
        if run.matches.is_empty() {
            continue;
        }

        let reporter = JsonReporter::new(
            &config.report_dir,
            player_count,
            catalog.clone(),
            fan_classifier(),
        );

        if mode != Mode::Summary {
            for (index, record) in run.matches.iter().enumerate() {
                reporter.publish_match(index + 1, record).await?;
            }
        }
        reporter.publish_standings(&run.matches, &run.table).await?;
        if mode != Mode::Summary {
            reporter.publish_players(&run.table).await?;
        }

        info!(player_count, matches = run.matches.len(), "Bracket complete");
    }

    info!("All processing complete");
    Ok(())
}
