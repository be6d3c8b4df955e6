use crate::common::{CURRENT_RATES_XML, ScriptedTransport, client_with};
use mnb_rs::{ExchangeRate, Operation};
use rust_decimal::Decimal;

#[tokio::test]
async fn current_rates_are_keyed_by_currency() {
    let transport = ScriptedTransport::new();
    transport.respond(Operation::GetCurrentExchangeRates, CURRENT_RATES_XML);
    let client = client_with(&transport).await;

    let table = client.current_exchange_rates().await.unwrap();

    assert_eq!(table.len(), 2);
    assert_eq!(
        table["EUR"],
        ExchangeRate {
            rate: Decimal::new(40924, 2),
            unit: 1
        }
    );
    assert_eq!(
        table["USD"],
        ExchangeRate {
            rate: Decimal::new(35586, 2),
            unit: 1
        }
    );
}

#[tokio::test]
async fn one_fetch_serves_every_currency() {
    let transport = ScriptedTransport::new();
    transport.respond(Operation::GetCurrentExchangeRates, CURRENT_RATES_XML);
    let client = client_with(&transport).await;

    let eur = client.current_exchange_rate("EUR").await.unwrap();
    let usd = client.current_exchange_rate("USD").await.unwrap();
    let chf = client.current_exchange_rate("CHF").await.unwrap();

    assert_eq!(eur.map(|r| r.rate), Some(Decimal::new(40924, 2)));
    assert_eq!(usd.map(|r| r.rate), Some(Decimal::new(35586, 2)));
    assert_eq!(chf, None);
    assert_eq!(transport.calls(Operation::GetCurrentExchangeRates), 1);
}

#[tokio::test]
async fn units_other_than_one_are_kept() {
    let transport = ScriptedTransport::new();
    transport.respond(
        Operation::GetCurrentExchangeRates,
        r#"<MNBCurrentExchangeRates><Day date="2025-04-22"><Rate unit="100" curr="JPY">248,61</Rate></Day></MNBCurrentExchangeRates>"#,
    );
    let client = client_with(&transport).await;

    let jpy = client.current_exchange_rates().await.unwrap()["JPY"];

    assert_eq!(jpy.unit, 100);
    assert_eq!(jpy.rate, Decimal::new(24861, 2));
    assert_eq!(jpy.per_unit(), Decimal::new(24861, 4));
    assert_eq!(jpy.to_huf(Decimal::from(1000)), Decimal::new(24861, 1));
}
