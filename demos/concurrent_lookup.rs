//! Look up several cards at once through one shared client.
//!
//! ```bash
//! cargo run --example concurrent_lookup -- 1234567890123456 0123456789abcdef
//! ```

use std::time::Instant;

use anyhow::Result;
use signage_client_rs::{SignageApiClient, SignageConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let client = SignageApiClient::with_config(SignageConfig::from_env()?)?;

    let card_ids: Vec<String> = std::env::args().skip(1).collect();
    if card_ids.is_empty() {
        eprintln!("Usage: concurrent_lookup <cardIDm>...");
        std::process::exit(1);
    }

    println!("Looking up {} card(s) concurrently...", card_ids.len());
    let start = Instant::now();

    let handles: Vec<_> = card_ids
        .into_iter()
        .map(|card_idm| {
            let client = client.clone(); // Shares the connection pool
            tokio::spawn(async move {
                let result = client.get_content_by_card_idm(&card_idm).await;
                (card_idm, result)
            })
        })
        .collect();

    for handle in handles {
        match handle.await? {
            (_, Ok(link)) => println!(
                "{}: {} ({}s) [{}]",
                link.card_idm, link.url, link.display_seconds, link.status
            ),
            (card_idm, Err(e)) => eprintln!("{}: lookup failed: {}", card_idm, e),
        }
    }

    println!("Done in {:?}", start.elapsed());

    Ok(())
}
