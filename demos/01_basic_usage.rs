use mnb_rs::MnbClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // 1. --- Build a client from MNB_* variables (or the defaults) ---
    let client = MnbClient::from_env().await?;
    println!("Connected; caching under '{}' for {:?}", client.key_prefix(), client.cache_ttl());
    println!();

    // 2. --- Supported currencies ---
    let currencies = client.currencies().await?;
    println!("{} currencies published: {}", currencies.len(), currencies.join(", "));
    println!("CHF supported: {}", client.has_currency("CHF").await?);
    println!();

    // 3. --- Today's table ---
    let today = client.current_exchange_rates().await?;
    for code in ["EUR", "USD", "JPY"] {
        if let Some(rate) = today.get(code) {
            println!("  {} {code} = {} HUF", rate.unit, rate.rate);
        }
    }
    println!();

    // 4. --- Historical rates ---
    let first = client.first_opening_date().await?;
    let last = client.last_opening_date().await?;
    println!("Rates are available from {first} to {last}");

    let latest = client.exchange_rate("EUR", None).await?;
    println!("EUR on {last}: {} HUF", latest.per_unit());

    let then = client.exchange_rate_at("EUR", "2020-03-02").await?;
    println!("EUR on 2020-03-02: {} HUF", then.per_unit());

    Ok(())
}
