use anyhow::Context;
use countdown::{
    ChannelSurface, Ticker, TickerSet,
    config::{Config, CountdownConfig},
};

mod cli;
mod logging;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = <crate::cli::Cli as clap::Parser>::parse();
    crate::logging::setup(cli.verbosity)?;

    let config = match &cli.config {
        Some(path) => Config::load(path)
            .await
            .with_context(|| format!("Loading configuration from '{path}'"))?,
        None => Config::default(),
    };

    match cli.command {
        cli::Command::Run { targets, id } => {
            let mut config = config;
            if let Some(targets) = targets {
                config.countdowns.push(CountdownConfig { id, targets });
            }
            run(config).await?;
        }
        cli::Command::VerifyConfig => {
            tracing::info!(countdowns = config.countdowns.len(), "Configuration verified");
        }
    }

    Ok(())
}

async fn run(config: Config) -> anyhow::Result<()> {
    if config.countdowns.is_empty() {
        anyhow::bail!("No countdowns configured, pass --targets or a config file");
    }

    let (sender, receiver) = async_channel::unbounded();
    let tickers = TickerSet::new();
    for countdown in config.countdowns {
        let surface = ChannelSurface::new(countdown.id, countdown.targets, sender.clone());
        let ticker = Ticker::new(surface).with_period(config.period)?;
        if !tickers.start(ticker)? {
            tracing::info!("Countdown has no targets, not starting");
        }
    }
    // the printer ends once every ticker dropped its surface
    drop(sender);

    let printer = async {
        while let Ok(update) = receiver.recv().await {
            println!("{}: {}", update.id, update.text);
        }
    };

    tokio::select! {
        (result, ()) = async { tokio::join!(tickers.wait_all(), printer) } => {
            result?;
            tracing::info!("All countdowns finished");
        }

        _ctrl_c = tokio::signal::ctrl_c() => {
            tracing::info!("Ctrl-C received, shutting down");
        }
    }

    Ok(())
}
