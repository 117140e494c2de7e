use chrono::Month;
use lazy_static::lazy_static;
use std::collections::HashMap;
use tracing::debug;

lazy_static! {
    /// Full english month names, lowercased
    static ref MONTHS: HashMap<&'static str, Month> = {
        let mut map = HashMap::new();

        map.insert("january", Month::January);
        map.insert("february", Month::February);
        map.insert("march", Month::March);
        map.insert("april", Month::April);
        map.insert("may", Month::May);
        map.insert("june", Month::June);
        map.insert("july", Month::July);
        map.insert("august", Month::August);
        map.insert("september", Month::September);
        map.insert("october", Month::October);
        map.insert("november", Month::November);
        map.insert("december", Month::December);

        map
    };
}

/// Number reported for a month name that is not recognized
pub const UNKNOWN_MONTH: u32 = 0;

/// Look up a month by its full name, ignoring case.
///
/// The name must match exactly after lowercasing: no abbreviations, no
/// prefixes and no surrounding whitespace.
pub fn month_from_name(name: &str) -> Option<Month> {
    let month = MONTHS.get(name.to_lowercase().as_str()).copied();

    if month.is_none() {
        debug!(name, "unrecognized month name");
    }

    month
}

/// Month number 1 through 12, or [`UNKNOWN_MONTH`] when the name is not recognized
pub fn month_number(name: &str) -> u32 {
    month_from_name(name).map_or(UNKNOWN_MONTH, |m| m.number_from_month())
}
