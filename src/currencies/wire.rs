use crate::core::{MnbError, wire};

/// Reads `Currencies/Curr` codes in document order, dropping repeats. An empty `Curr` fails the
/// whole list.
pub(crate) fn parse_currencies(xml: &str) -> Result<Vec<String>, MnbError> {
    let doc = wire::parse(xml, "currency list")?;
    let container = wire::container(&doc, "Currencies")
        .ok_or_else(|| MnbError::format("Currencies element missing from response", xml))?;

    let mut codes: Vec<String> = Vec::new();
    for node in wire::children(container, "Curr") {
        let code = wire::non_empty_text(node)
            .ok_or_else(|| MnbError::format("Curr element has no value", xml))?;
        if !codes.contains(&code) {
            codes.push(code);
        }
    }

    if codes.is_empty() {
        return Err(MnbError::format("Currencies element has no Curr entries", xml));
    }
    Ok(codes)
}
