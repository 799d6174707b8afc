//! Development harness: a line-based chat loop over in-memory adapters.
//!
//! Reads messages from stdin, runs each through the full pipeline, and
//! prints the routed domains, effective autonomy mode, and reply. Useful
//! for poking at quotas and warnings without a real backend.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use companion_core::adapters::{
    FixedIdentity, InMemoryCreditStore, MockReplyGenerator, RecordingNotifier, SystemClock,
};
use companion_core::application::{CompanionEngine, EngineDeps, SendMessageCommand};
use companion_core::config::AppConfig;
use companion_core::domain::foundation::UserId;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::load()?;
    config.validate()?;

    let user = UserId::new("dev-user")?;
    let notifier = Arc::new(RecordingNotifier::new());
    let engine = CompanionEngine::new(
        &config,
        EngineDeps {
            store: Arc::new(InMemoryCreditStore::new()),
            notifier: notifier.clone(),
            generator: Arc::new(MockReplyGenerator::new()),
            identity: Arc::new(FixedIdentity::signed_in(user.clone())),
            clock: Arc::new(SystemClock),
        },
    );

    tracing::info!(tier = ?config.engine.default_tier, "engine ready, type a message (ctrl-d to quit)");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let text = line.trim();
        if text.is_empty() {
            continue;
        }

        match engine
            .send_message(SendMessageCommand::reply(user.clone(), text))
            .await
        {
            Ok(result) => {
                let domains: Vec<&str> = result
                    .matches
                    .iter()
                    .map(|m| m.display_name.as_str())
                    .collect();
                println!(
                    "[{} | {:?} | {}% used] {}",
                    domains.join(", "),
                    result.mode,
                    result.verdict.usage_percent,
                    result.reply.text
                );
            }
            Err(err) => println!("!! {err}"),
        }

        for notice in notifier.notices() {
            println!("** {}", notice.message);
        }
        notifier.clear();
    }

    Ok(())
}
