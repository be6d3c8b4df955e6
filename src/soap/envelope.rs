//! SOAP 1.1 request envelopes and response unwrapping.

use super::{Operation, SERVICE_NS, SoapCall};
use crate::core::{MnbError, wire};
use quick_xml::escape::escape;

pub(crate) const SOAP_ENV_NS: &str = "http://schemas.xmlsoap.org/soap/envelope/";

pub(crate) fn request_body(call: &SoapCall) -> String {
    let mut out = String::with_capacity(256);
    out.push_str(r#"<?xml version="1.0" encoding="utf-8"?>"#);
    out.push_str(r#"<soap:Envelope xmlns:soap=""#);
    out.push_str(SOAP_ENV_NS);
    out.push_str(r#""><soap:Body>"#);

    let name = call.operation.name();
    out.push('<');
    out.push_str(name);
    out.push_str(r#" xmlns=""#);
    out.push_str(SERVICE_NS);
    if call.params.is_empty() {
        out.push_str(r#""/>"#);
    } else {
        out.push_str(r#"">"#);
        for (key, value) in &call.params {
            out.push('<');
            out.push_str(key);
            out.push('>');
            out.push_str(&escape(value.as_str()));
            out.push_str("</");
            out.push_str(key);
            out.push('>');
        }
        out.push_str("</");
        out.push_str(name);
        out.push('>');
    }

    out.push_str("</soap:Body></soap:Envelope>");
    out
}

/// Pulls the `<{Operation}Result>` payload out of a response envelope.
///
/// A result element without content yields an empty payload; deciding whether that is usable is
/// left to the caller.
pub(crate) fn unwrap_result(operation: Operation, envelope: &str) -> Result<String, MnbError> {
    let doc = roxmltree::Document::parse(envelope).map_err(|e| {
        MnbError::format(format!("{operation} response envelope: {e}"), envelope)
    })?;

    if let Some(fault) = wire::descendant(doc.root_element(), "Fault") {
        let message = wire::descendant(fault, "faultstring")
            .and_then(|n| n.text())
            .unwrap_or("unspecified fault")
            .trim()
            .to_string();
        return Err(MnbError::Fault {
            operation,
            message,
            xml: envelope.to_string(),
        });
    }

    let result = wire::descendant(doc.root_element(), operation.result_element())
        .ok_or_else(|| {
            MnbError::format(
                format!("{} element missing from response", operation.result_element()),
                envelope,
            )
        })?;

    Ok(wire::text_content(result))
}
