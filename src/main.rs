use std::env;

use anyhow::Result;
use signage_client_rs::{CardSignageLink, SignageApiClient, SignageConfig};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "\
Usage:
  signage list
  signage get <cardIDm>
  signage register <cardIDm> <url> <displaySeconds>
  signage update <cardIDm> <url> <displaySeconds>

Environment:
  SIGNAGE_BASE_URL, SIGNAGE_USERNAME, SIGNAGE_PASSWORD";

enum Command {
    List,
    Get { card_idm: String },
    Register { card_idm: String, url: String, display_seconds: u32 },
    Update { card_idm: String, url: String, display_seconds: u32 },
}

impl Command {
    fn parse(args: &[String]) -> Option<Self> {
        let command = args.first()?;
        match (command.as_str(), &args[1..]) {
            ("list", []) => Some(Self::List),
            ("get", [card_idm]) => Some(Self::Get {
                card_idm: card_idm.clone(),
            }),
            ("register", [card_idm, url, seconds]) => Some(Self::Register {
                card_idm: card_idm.clone(),
                url: url.clone(),
                display_seconds: seconds.parse().ok()?,
            }),
            ("update", [card_idm, url, seconds]) => Some(Self::Update {
                card_idm: card_idm.clone(),
                url: url.clone(),
                display_seconds: seconds.parse().ok()?,
            }),
            _ => None,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "signage=info,signage_client_rs=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(command) = Command::parse(&args) else {
        eprintln!("{}", USAGE);
        std::process::exit(1);
    };

    let client = SignageApiClient::with_config(SignageConfig::from_env()?)?;
    tracing::info!(
        "Using signage service at {} as {}",
        client.base_url(),
        client.credentials().username
    );

    match command {
        Command::List => {
            let all = client.get_all_card_idm_and_content_list().await?;
            println!("Status: {} - {}", all.status, all.description);
            for link in &all.links {
                println!(
                    "  {}  {}  ({}s)",
                    link.card_idm, link.url, link.display_seconds
                );
            }
            println!("{} link(s)", all.links.len());
        }
        Command::Get { card_idm } => {
            let link = client.get_content_by_card_idm(&card_idm).await?;
            print_link(&link);
        }
        Command::Register {
            card_idm,
            url,
            display_seconds,
        } => {
            let link = client
                .register_content_by_card_idm(&card_idm, &url, display_seconds)
                .await?;
            print_link(&link);
        }
        Command::Update {
            card_idm,
            url,
            display_seconds,
        } => {
            let link = client
                .update_content_by_card_idm(&card_idm, &url, display_seconds)
                .await?;
            print_link(&link);
        }
    }

    Ok(())
}

fn print_link(link: &CardSignageLink) {
    println!("Status: {} - {}", link.status, link.description);
    println!("  Card: {}", link.card_idm);
    println!("  URL: {}", link.url);
    println!("  Display: {:?}", link.display_duration());
}
