use crate::common::{CURRENCIES_XML, ScriptedTransport, client_with};
use mnb_rs::{CacheKey, Operation};

#[tokio::test]
async fn currencies_are_returned_in_document_order() {
    let transport = ScriptedTransport::new();
    transport.respond(Operation::GetCurrencies, CURRENCIES_XML);
    let client = client_with(&transport).await;

    assert_eq!(client.currencies().await.unwrap(), vec!["HUF", "EUR"]);
}

#[tokio::test]
async fn currencies_are_served_from_cache_on_second_call() {
    let transport = ScriptedTransport::new();
    transport.respond(Operation::GetCurrencies, CURRENCIES_XML);
    let client = client_with(&transport).await;

    let first = client.currencies().await.unwrap();
    let second = client.currencies().await.unwrap();

    assert_eq!(first, second);
    assert_eq!(transport.calls(Operation::GetCurrencies), 1);
    assert!(
        client
            .cache()
            .get(&client.cache_key(&CacheKey::Currencies))
            .await
            .is_some()
    );
}

#[tokio::test]
async fn bare_currencies_document_is_accepted() {
    let transport = ScriptedTransport::new();
    transport.respond(
        Operation::GetCurrencies,
        "<Currencies><Curr>HUF</Curr><Curr>EUR</Curr></Currencies>",
    );
    let client = client_with(&transport).await;

    assert_eq!(client.currencies().await.unwrap(), vec!["HUF", "EUR"]);
}

#[tokio::test]
async fn repeated_codes_are_listed_once() {
    let transport = ScriptedTransport::new();
    transport.respond(
        Operation::GetCurrencies,
        "<MNBCurrencies><Currencies><Curr>EUR</Curr><Curr> USD </Curr><Curr>EUR</Curr></Currencies></MNBCurrencies>",
    );
    let client = client_with(&transport).await;

    assert_eq!(client.currencies().await.unwrap(), vec!["EUR", "USD"]);
}

#[tokio::test]
async fn has_currency_shares_the_currency_list_cache() {
    let transport = ScriptedTransport::new();
    transport.respond(Operation::GetCurrencies, CURRENCIES_XML);
    let client = client_with(&transport).await;

    assert!(client.has_currency("HUF").await.unwrap());
    assert!(!client.has_currency("CHF").await.unwrap());
    let _ = client.currencies().await.unwrap();

    assert_eq!(transport.calls(Operation::GetCurrencies), 1);
}
