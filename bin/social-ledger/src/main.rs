//! # Social Ledger Binary
//!
//! Builds a ledger from the loaded settings, replays a short walkthrough
//! against it and prints the resulting feed as JSON on stdout.

use anyhow::Context;
use configs::{LoggingSettings, Settings};
use ledger_core::{ActivityLedger, LedgerError, SystemClock, User};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let settings = Settings::load().context("failed to load settings")?;
    init_tracing(&settings.logging);

    let mut ledger = ActivityLedger::with_policy(SystemClock, settings.ledger_policy());
    info!(policy = ?ledger.policy(), "ledger ready");

    let john = User::new(1, "John");
    let emily = User::new(2, "Emily");
    ledger.register_user(john.clone())?;
    ledger.register_user(emily.clone())?;

    let post = ledger.create_post(&john, "Hello world!")?;
    ledger.like_post(&emily, post.id)?;
    ledger.add_comment(&john, post.id, "Nice post!")?;

    match ledger.like_post(&emily, post.id) {
        Err(err @ LedgerError::DuplicateLike { .. }) => info!(%err, "second like rejected"),
        other => anyhow::bail!("expected the repeated like to be rejected, got {other:?}"),
    }

    let feed = ledger
        .activity_feed(john.id)
        .with_context(|| format!("failed to build feed for user {}", john.id))?;
    println!("{}", serde_json::to_string_pretty(&feed)?);

    info!(stats = ?ledger.stats(), "walkthrough complete");
    Ok(())
}

/// `RUST_LOG` wins over the configured filter when set.
fn init_tracing(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.filter));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if logging.json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}
