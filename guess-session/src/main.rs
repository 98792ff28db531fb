use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::signal;
use tracing::{debug, info};

use guess_session::{Command, Config, GameSession, HELP, render};

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so the rendered screen on stdout stays readable
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    info!("Starting Under/Over...");

    let config = Config::from_env().context("Failed to read configuration")?;
    let (session, mut events) = GameSession::new(config.timings());

    println!("{}", HELP);
    print!("{}", render(&session.view().await));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read from stdin")? else {
                    info!("Input closed");
                    break;
                };
                if line.trim().is_empty() {
                    continue;
                }

                match line.parse::<Command>() {
                    Ok(Command::Quit) => break,
                    Ok(Command::Help) => println!("{}", HELP),
                    Ok(Command::ShowState) => {
                        let view = session.view().await;
                        println!("{}", serde_json::to_string_pretty(&view)?);
                    }
                    Ok(Command::DismissPosition(position)) => {
                        if session.dismiss_at(position).await.is_none() {
                            println!("No notification at position {}", position);
                        }
                    }
                    Ok(Command::Action(action)) => {
                        if let Err(e) = session.apply(action).await {
                            println!("{}", e);
                        }
                    }
                    Err(e) => println!("{} (type `help`)", e),
                }
            }
            Some(event) = events.recv() => {
                debug!("Session event: {:?}", event);
                print!("{}", render(&session.view().await));
            }
            _ = signal::ctrl_c() => {
                info!("Received Ctrl+C, shutting down gracefully...");
                break;
            }
        }
    }

    session.shutdown().await;
    info!("Under/Over closed.");
    Ok(())
}
