//! Just enough WSDL reading to find where to POST and which `SOAPAction` to send.

use super::Operation;
use crate::core::{MnbError, wire};
use std::collections::HashMap;
use url::Url;

const WSDL_SOAP11_NS: &str = "http://schemas.xmlsoap.org/wsdl/soap/";

#[derive(Debug, Clone)]
pub(crate) struct ServiceDescription {
    pub(crate) endpoint: Url,
    pub(crate) actions: HashMap<Operation, String>,
}

impl ServiceDescription {
    pub(crate) fn soap_action(&self, operation: Operation) -> String {
        self.actions
            .get(&operation)
            .cloned()
            .unwrap_or_else(|| operation.default_soap_action())
    }

    /// Description used when the endpoint is known up front and no WSDL is consulted.
    pub(crate) fn fixed(endpoint: Url) -> Self {
        Self {
            endpoint,
            actions: HashMap::new(),
        }
    }
}

/// Reads the SOAP 1.1 port address and binding actions out of a WSDL document.
///
/// A document without an address falls back to the WSDL URL itself, minus its query string,
/// which is where ASMX services answer.
pub(crate) fn describe(wsdl_url: &Url, document: &str) -> Result<ServiceDescription, MnbError> {
    let doc = roxmltree::Document::parse(document)
        .map_err(|e| MnbError::connection_with("WSDL document is not valid XML", e))?;

    let root = doc.root_element();
    if root.tag_name().name() != "definitions" {
        return Err(MnbError::connection(format!(
            "expected a WSDL definitions document, found <{}>",
            root.tag_name().name()
        )));
    }

    let location = root
        .descendants()
        .filter(|n| n.is_element() && n.tag_name().name() == "address")
        .find(|n| n.tag_name().namespace() == Some(WSDL_SOAP11_NS))
        .and_then(|n| wire::attr(n, "location"));

    let endpoint = match location {
        Some(loc) => wsdl_url
            .join(loc)
            .map_err(|e| MnbError::connection_with(format!("invalid service address {loc}"), e))?,
        None => {
            let mut url = wsdl_url.clone();
            url.set_query(None);
            url
        }
    };

    let mut actions = HashMap::new();
    for op in root
        .descendants()
        .filter(|n| n.is_element() && n.tag_name().name() == "operation")
    {
        let Some(name) = wire::attr(op, "name") else {
            continue;
        };
        let Some(operation) = Operation::ALL.into_iter().find(|o| o.name() == name) else {
            continue;
        };
        let action = op
            .children()
            .filter(|n| n.is_element() && n.tag_name().name() == "operation")
            .find(|n| n.tag_name().namespace() == Some(WSDL_SOAP11_NS))
            .and_then(|n| wire::attr(n, "soapAction"));
        if let Some(action) = action {
            actions.entry(operation).or_insert_with(|| action.to_string());
        }
    }

    Ok(ServiceDescription { endpoint, actions })
}
