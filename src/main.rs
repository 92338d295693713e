use std::env;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bics_api_rs::{AgentConfig, Credential};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bics_api_rs=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        print_usage(&args[0]);
        std::process::exit(1);
    }

    let config = AgentConfig::from_env();

    match args[1].as_str() {
        "status" => {
            let connect = config.connect()?;
            println!("{}", connect.status().await?);
        }
        "auth" => {
            let cred = authenticate(&config).await?;
            println!("{}", cred.as_str());
        }
        "validate" => {
            let token = args
                .get(2)
                .cloned()
                .context("Usage: validate <access_token>")?;
            let connect = config.connect()?;
            println!(
                "{}",
                connect.validate_token(&Credential::new(token)).await?
            );
        }
        "numbers" => {
            let cred = resolve_credential(&config).await?;
            let country = args.get(2).map(|s| s.as_str());
            let numbers = config.mynumbers()?;
            println!("{}", numbers.numbers(&cred, country).await?);
        }
        "reserve" => {
            let phone = args
                .get(2)
                .cloned()
                .context("Usage: reserve <phone_number>")?;
            let cred = resolve_credential(&config).await?;
            let numbers = config.mynumbers()?;
            println!("{}", numbers.reserve_number(&cred, &phone).await?);
        }
        "sms" => {
            let to = args.get(2).cloned().context("Usage: sms <to> <message>")?;
            let message = args
                .get(3)
                .cloned()
                .context("Usage: sms <to> <message>")?;
            let cred = resolve_credential(&config).await?;
            let sms = config.sms()?;
            println!("{}", sms.send_sms(&cred, &to, &message).await?);
        }
        other => {
            eprintln!("Unknown command: {}", other);
            print_usage(&args[0]);
            std::process::exit(1);
        }
    }

    Ok(())
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} <command> [args]", program);
    eprintln!("  status                 Connect API service status");
    eprintln!("  auth                   Authenticate and print the access token");
    eprintln!("  validate <token>       Validate an access token");
    eprintln!("  numbers [country]      List available numbers");
    eprintln!("  reserve <phone>        Reserve a number");
    eprintln!("  sms <to> <message>     Send an SMS");
    eprintln!();
    eprintln!("Credentials come from BICS_CLIENT_ID / BICS_CLIENT_SECRET,");
    eprintln!("or a pre-issued token from BICS_ACCESS_TOKEN.");
}

async fn authenticate(config: &AgentConfig) -> Result<Credential> {
    let client_id = env::var("BICS_CLIENT_ID").context("BICS_CLIENT_ID not set")?;
    let client_secret = env::var("BICS_CLIENT_SECRET").context("BICS_CLIENT_SECRET not set")?;

    let connect = config.connect()?;
    let cred = connect
        .authenticate(&client_id, &client_secret)
        .await
        .context("Authentication failed")?;
    Ok(cred)
}

/// Use a pre-issued token if one is set, otherwise authenticate.
async fn resolve_credential(config: &AgentConfig) -> Result<Credential> {
    if let Ok(token) = env::var("BICS_ACCESS_TOKEN") {
        return Ok(Credential::new(token));
    }
    authenticate(config).await
}
