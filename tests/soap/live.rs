use mnb_rs::MnbClient;

#[tokio::test]
#[ignore]
async fn live_service_answers_every_operation() {
    if !crate::common::live_enabled() {
        return;
    }

    let client = MnbClient::builder().build().await.unwrap();

    let currencies = client.currencies().await.unwrap();
    assert!(currencies.iter().any(|c| c == "EUR"));

    let current = client.current_exchange_rates().await.unwrap();
    assert!(current.contains_key("EUR"));

    let first = client.first_opening_date().await.unwrap();
    let last = client.last_opening_date().await.unwrap();
    assert!(first <= last);

    let eur = client.exchange_rate("EUR", None).await.unwrap();
    assert!(eur.unit >= 1);
}
