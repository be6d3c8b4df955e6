use crate::common::{EUR_RATE_XML, INTERVAL_XML, ScriptedTransport, client_with};
use chrono::{FixedOffset, NaiveDate, TimeZone};
use mnb_rs::{CacheKey, ExchangeRate, MnbError, Operation};
use rust_decimal::Decimal;

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn eur_409_24() -> ExchangeRate {
    ExchangeRate {
        rate: Decimal::new(40924, 2),
        unit: 1,
    }
}

#[tokio::test]
async fn rate_for_explicit_date_queries_that_single_day() {
    let transport = ScriptedTransport::new();
    transport.respond(Operation::GetExchangeRates, EUR_RATE_XML);
    let client = client_with(&transport).await;

    let rate = client
        .exchange_rate("EUR", Some(day("2025-04-22")))
        .await
        .unwrap();
    assert_eq!(rate, eur_409_24());

    // Second call is a cache hit.
    let again = client
        .exchange_rate("EUR", Some(day("2025-04-22")))
        .await
        .unwrap();
    assert_eq!(again, rate);

    let calls = transport.recorded();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].operation, Operation::GetExchangeRates);
    assert_eq!(calls[0].get("startDate"), Some("2025-04-22"));
    assert_eq!(calls[0].get("endDate"), Some("2025-04-22"));
    assert_eq!(calls[0].get("currencyNames"), Some("EUR"));
}

#[tokio::test]
async fn omitted_date_resolves_the_last_opening_date_first() {
    let transport = ScriptedTransport::new();
    transport.respond(Operation::GetDateInterval, INTERVAL_XML);
    transport.respond(Operation::GetExchangeRates, EUR_RATE_XML);
    let client = client_with(&transport).await;

    assert_eq!(client.exchange_rate("EUR", None).await.unwrap(), eur_409_24());
    assert_eq!(client.exchange_rate("EUR", None).await.unwrap(), eur_409_24());

    let calls = transport.recorded();
    assert_eq!(calls[0].operation, Operation::GetDateInterval);
    assert_eq!(calls[1].operation, Operation::GetExchangeRates);
    assert_eq!(calls[1].get("startDate"), Some("2025-04-22"));
    assert_eq!(calls[1].get("endDate"), Some("2025-04-22"));
    // Both the opening date and the rate were cached.
    assert_eq!(calls.len(), 2);

    let key = CacheKey::Rate {
        code: "EUR".into(),
        date: day("2025-04-22"),
    };
    assert_eq!(client.cache_key(&key), "mnb.currencies.rate.EUR.2025-04-22");
    assert!(client.cache().get(&client.cache_key(&key)).await.is_some());
}

#[tokio::test]
async fn date_like_inputs_share_one_cache_entry() {
    let transport = ScriptedTransport::new();
    transport.respond(Operation::GetExchangeRates, EUR_RATE_XML);
    let client = client_with(&transport).await;

    let budapest = FixedOffset::east_opt(2 * 3600).unwrap();
    let evening = budapest
        .with_ymd_and_hms(2025, 4, 22, 23, 30, 0)
        .single()
        .unwrap();

    client.exchange_rate_at("EUR", "2025-04-22").await.unwrap();
    client
        .exchange_rate_at("EUR", String::from("2025-04-22T08:15:00+02:00"))
        .await
        .unwrap();
    client.exchange_rate_at("EUR", evening).await.unwrap();
    client
        .exchange_rate_at("EUR", day("2025-04-22").and_hms_opt(12, 0, 0).unwrap())
        .await
        .unwrap();

    assert_eq!(transport.calls(Operation::GetExchangeRates), 1);
}

#[tokio::test]
async fn unreadable_date_fails_before_any_call() {
    let transport = ScriptedTransport::new();
    let client = client_with(&transport).await;

    let err = client.exchange_rate_at("EUR", "22/04/2025").await.unwrap_err();

    assert!(matches!(err, MnbError::InvalidDate(_)), "got {err:?}");
    assert!(transport.recorded().is_empty());
}

#[tokio::test]
async fn rate_for_another_currency_in_payload_is_rejected() {
    let transport = ScriptedTransport::new();
    transport.respond(Operation::GetExchangeRates, EUR_RATE_XML);
    let client = client_with(&transport).await;

    let err = client
        .exchange_rate("USD", Some(day("2025-04-22")))
        .await
        .unwrap_err();

    assert_eq!(err.xml(), Some(EUR_RATE_XML));
}

#[tokio::test]
async fn different_days_use_different_keys() {
    let transport = ScriptedTransport::new();
    transport.respond(Operation::GetExchangeRates, EUR_RATE_XML);
    let client = client_with(&transport).await;

    client
        .exchange_rate("EUR", Some(day("2025-04-22")))
        .await
        .unwrap();
    client
        .exchange_rate("EUR", Some(day("2025-04-23")))
        .await
        .unwrap();

    assert_eq!(transport.calls(Operation::GetExchangeRates), 2);
}
