//! Telegram bot probe - check credentials and send a test message.
//!
//! Reads credentials from config.json (or TELEGRAM_BOT_TOKEN /
//! TELEGRAM_CHAT_ID when the file is absent), then sends a test
//! notification to the configured chat.
//!
//! Examples:
//!   cargo run --bin telegram_probe
//!   cargo run --bin telegram_probe -- --config deploy/config.json --bot-info

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use telegram_probe::{
    config::{Credentials, CHAT_ID_ENV, DEFAULT_CONFIG_PATH, TOKEN_ENV},
    probe::{redact_token, BotProbe, DEFAULT_TIMEOUT_SECS},
};

#[derive(Parser, Debug)]
#[command(name = "telegram_probe")]
#[command(about = "Check Telegram bot credentials and send a test message")]
#[command(version)]
struct Args {
    /// Path to the JSON config file
    #[arg(short, long, env = "TELEGRAM_PROBE_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_seconds: u64,

    /// Query getMe and print the bot identity before sending
    #[arg(long)]
    bot_info: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    println!("🤖 Telegram Bot Probe");
    println!("{}", "=".repeat(40));

    let success = run(&args).await;

    if success {
        println!("\n🎉 All checks passed!");
        println!("Your Telegram bot is ready to deliver notifications.");
    } else {
        println!("\n❌ Checks failed!");
        println!("Please check your configuration and try again.");
        std::process::exit(1);
    }

    Ok(())
}

fn print_setup_guidance(args: &Args) {
    println!(
        "Please set bot_token and chat_id in {} or as {} / {} environment variables",
        args.config.display(),
        TOKEN_ENV,
        CHAT_ID_ENV
    );
    println!("\nExample {}:", args.config.display());
    println!("{}", Credentials::example_json());
}

async fn run(args: &Args) -> bool {
    let credentials = match Credentials::resolve(&args.config) {
        Ok(creds) => creds,
        Err(e) => {
            println!("❌ ERROR: {}", e);
            return false;
        }
    };

    let (bot_token, chat_id) = match credentials.require_pair() {
        Ok(pair) => pair,
        Err(e) => {
            println!("❌ ERROR: {}!", e);
            print_setup_guidance(args);
            return false;
        }
    };

    println!("🤖 Testing Telegram bot...");
    println!("Bot Token: {}", redact_token(&bot_token));
    println!("Chat ID: {}", chat_id);

    let probe = match BotProbe::new(bot_token, chat_id, args.timeout_seconds) {
        Ok(probe) => probe,
        Err(e) => {
            println!("❌ ERROR: {}", e);
            return false;
        }
    };

    if args.bot_info {
        match probe.bot_info().await {
            Ok(info) => {
                println!(
                    "✅ Bot Info: {} (@{})",
                    info.first_name,
                    info.username.as_deref().unwrap_or("unknown")
                );
            }
            Err(e) => {
                println!("❌ Failed to get bot info: {}", e);
                return false;
            }
        }
    }

    match probe.send_test_message().await {
        Ok(()) => {
            println!("✅ SUCCESS: Test message sent!");
            println!("Check your Telegram to see the test message.");
            true
        }
        Err(e) => {
            println!("❌ {}", e);
            false
        }
    }
}
