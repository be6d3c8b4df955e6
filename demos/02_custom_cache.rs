use mnb_rs::{CacheKey, CacheMode, MemoryStore, MnbClient, MnbError};
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. --- A client with its own store, prefix and TTL ---
    let store = Arc::new(MemoryStore::new());
    let mut client = MnbClient::builder()
        .cache_store(store.clone())
        .cache_key_prefix("fx")
        .cache_ttl(Duration::from_secs(15 * 60))
        .timeout(Duration::from_secs(20))
        .build()
        .await?;

    let rates = client.current_exchange_rates().await?;
    println!("Fetched {} rates (from network)", rates.len());
    let _ = client.current_exchange_rates().await?;
    println!("Fetched again (from cache); {} entries stored", store.len().await);
    println!("Key in use: {}", client.cache_key(&CacheKey::Current));
    println!();

    // 2. --- Forcing a refresh ---
    client.set_cache_mode(CacheMode::Refresh);
    let _ = client.current_exchange_rates().await?;
    client.set_cache_mode(CacheMode::Use);
    println!("Refreshed the current table");
    println!();

    // 3. --- Error handling ---
    match client.exchange_rate_at("XXX", "2024-01-02").await {
        Ok(rate) => println!("Unexpected rate for XXX: {}", rate.rate),
        Err(MnbError::Format { message, xml }) => {
            println!("No usable data: {message}");
            println!("Raw payload was {} bytes", xml.len());
        }
        Err(e) => println!("Request failed: {e}"),
    }

    client.clear_cache().await;
    println!("Cache cleared; {} entries left", store.len().await);

    Ok(())
}
