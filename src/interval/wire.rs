use super::model::DateInterval;
use crate::core::{MnbError, wire};
use chrono::NaiveDate;

pub(crate) fn parse_interval(xml: &str) -> Result<DateInterval, MnbError> {
    let doc = wire::parse(xml, "date interval")?;
    let node = wire::container(&doc, "DateInterval")
        .ok_or_else(|| MnbError::format("DateInterval element missing from response", xml))?;

    let date = |name: &str| -> Result<NaiveDate, MnbError> {
        let raw = wire::attr(node, name).ok_or_else(|| {
            MnbError::format(format!("DateInterval element without {name} attribute"), xml)
        })?;
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|e| MnbError::format(format!("invalid {name} {raw:?}: {e}"), xml))
    };

    let first = date("startdate")?;
    let last = date("enddate")?;
    if first > last {
        return Err(MnbError::format(
            format!("startdate {first} is after enddate {last}"),
            xml,
        ));
    }
    Ok(DateInterval { first, last })
}
