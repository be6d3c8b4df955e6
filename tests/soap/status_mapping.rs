use crate::common::{mock_wsdl, soap_fault, wsdl_url};
use httpmock::{Method::POST, MockServer};
use mnb_rs::{MnbClient, MnbError, Operation};

#[tokio::test]
async fn soap_fault_maps_to_fault_with_envelope() {
    let server = MockServer::start();
    let _wsdl = mock_wsdl(&server, "urn:GetCurrencies");
    let envelope = soap_fault("Invalid currency name");
    let soap = server.mock(|when, then| {
        when.method(POST).path("/arfolyamok.asmx");
        then.status(500)
            .header("content-type", "text/xml; charset=utf-8")
            .body(envelope.clone());
    });

    let client = MnbClient::builder()
        .wsdl_url(wsdl_url(&server))
        .build()
        .await
        .unwrap();
    let err = client.current_exchange_rates().await.unwrap_err();

    soap.assert();
    match &err {
        MnbError::Fault {
            operation, message, ..
        } => {
            assert_eq!(*operation, Operation::GetCurrentExchangeRates);
            assert_eq!(message, "Invalid currency name");
        }
        other => panic!("expected Fault, got {other:?}"),
    }
    assert_eq!(err.xml(), Some(envelope.as_str()));
}

#[tokio::test]
async fn non_2xx_without_fault_maps_to_status() {
    let server = MockServer::start();
    let _wsdl = mock_wsdl(&server, "urn:GetCurrencies");
    let soap = server.mock(|when, then| {
        when.method(POST).path("/arfolyamok.asmx");
        then.status(503).body("oops");
    });

    let client = MnbClient::builder()
        .wsdl_url(wsdl_url(&server))
        .build()
        .await
        .unwrap();
    let err = client.currencies().await.unwrap_err();

    soap.assert();
    match err {
        MnbError::Status {
            operation,
            status,
            url,
            body,
        } => {
            assert_eq!(operation, Operation::GetCurrencies);
            assert_eq!(status, 503);
            assert!(url.contains("/arfolyamok.asmx"));
            assert_eq!(body.as_deref(), Some("oops"));
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn envelope_without_result_is_a_format_error() {
    let server = MockServer::start();
    let _wsdl = mock_wsdl(&server, "urn:GetCurrencies");
    let body = r#"<s:Envelope xmlns:s="http://schemas.xmlsoap.org/soap/envelope/"><s:Body/></s:Envelope>"#;
    let _soap = server.mock(|when, then| {
        when.method(POST).path("/arfolyamok.asmx");
        then.status(200).body(body);
    });

    let client = MnbClient::builder()
        .wsdl_url(wsdl_url(&server))
        .build()
        .await
        .unwrap();
    let err = client.first_opening_date().await.unwrap_err();

    assert!(matches!(err, MnbError::Format { .. }), "got {err:?}");
    assert_eq!(err.xml(), Some(body));
}
