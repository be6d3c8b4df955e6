use super::model::{ExchangeRate, RateTable};
use crate::core::{MnbError, wire};
use roxmltree::Node;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Reads every `Day/Rate` into a table keyed by the `curr` attribute.
pub(crate) fn parse_rate_table(xml: &str) -> Result<RateTable, MnbError> {
    let doc = wire::parse(xml, "exchange rates")?;
    let day = wire::container(&doc, "Day")
        .ok_or_else(|| MnbError::format("Day element missing from response", xml))?;

    let mut table = RateTable::new();
    for node in wire::children(day, "Rate") {
        let code = wire::attr(node, "curr")
            .ok_or_else(|| MnbError::format("Rate element without curr attribute", xml))?;
        table.insert(code.to_string(), parse_rate(node, xml)?);
    }

    if table.is_empty() {
        return Err(MnbError::format("Day element has no Rate entries", xml));
    }
    Ok(table)
}

/// Reads the `Day/Rate` quoted for `code`.
pub(crate) fn parse_single_rate(xml: &str, code: &str) -> Result<ExchangeRate, MnbError> {
    let doc = wire::parse(xml, "exchange rate")?;
    let day = wire::container(&doc, "Day")
        .ok_or_else(|| MnbError::format("Day element missing from response", xml))?;

    let node = wire::children(day, "Rate")
        .find(|n| wire::attr(*n, "curr").is_some_and(|c| c.eq_ignore_ascii_case(code)))
        .ok_or_else(|| MnbError::format(format!("no Rate element for {code}"), xml))?;

    parse_rate(node, xml)
}

fn parse_rate(node: Node<'_, '_>, xml: &str) -> Result<ExchangeRate, MnbError> {
    let unit = wire::attr(node, "unit")
        .ok_or_else(|| MnbError::format("Rate element without unit attribute", xml))?;
    let unit: u32 = unit
        .parse()
        .ok()
        .filter(|u| *u >= 1)
        .ok_or_else(|| MnbError::format(format!("invalid rate unit {unit:?}"), xml))?;

    let text = wire::non_empty_text(node)
        .ok_or_else(|| MnbError::format("Rate element has no value", xml))?;
    let rate = parse_decimal(&text)
        .filter(|r| !r.is_sign_negative())
        .ok_or_else(|| MnbError::format(format!("invalid rate value {text:?}"), xml))?;

    Ok(ExchangeRate { rate, unit })
}

/// The service writes decimals with a comma (`409,24`).
fn parse_decimal(text: &str) -> Option<Decimal> {
    Decimal::from_str(&text.replace(',', ".")).ok()
}
