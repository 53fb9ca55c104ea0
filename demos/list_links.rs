//! List every card-to-content link for the configured account.
//!
//! ```bash
//! SIGNAGE_BASE_URL=http://localhost:8080 SIGNAGE_USERNAME=user SIGNAGE_PASSWORD=password \
//!     cargo run --example list_links
//! ```

use anyhow::Result;
use signage_client_rs::{SignageApiClient, SignageConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let client = SignageApiClient::with_config(SignageConfig::from_env()?)?;

    let all = client.get_all_card_idm_and_content_list().await?;

    println!("Status: {} - {}", all.status, all.description);

    for link in &all.links {
        println!("\nCard: {}", link.card_idm);
        println!("  URL: {}", link.url);
        println!("  Display: {}s", link.display_seconds);
    }

    Ok(())
}
