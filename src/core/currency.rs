//! Catalogue of currency codes offered for selection.

pub const CURRENCIES: &[&str] = &[
    "AED", "AFN", "ALL", "AMD", "ANG", "AOA", "ARS", "AUD", "AWG", "AZN", "BAM", "BBD", "BDT",
    "BGN", "BHD", "BIF", "BMD", "BND", "BOB", "BRL", "BSD", "BTC", "BTN", "BWP", "BYN", "BYR",
    "BZD", "CAD", "CDF", "CHF", "CLF", "CLP", "CNY", "CNH", "COP", "CRC", "CUC", "CUP", "CVE",
    "CZK", "DJF", "DKK", "DOP", "DZD", "EGP", "ERN", "ETB", "EUR", "FJD", "FKP", "GBP", "GEL",
    "GGP", "GHS", "GIP", "GMD", "GNF", "GTQ", "GYD", "HKD", "HNL", "HRK", "HTG", "HUF", "IDR",
    "ILS", "IMP", "INR", "IQD", "IRR", "ISK", "JEP", "JMD", "JOD", "JPY", "KES", "KGS", "KHR",
    "KMF", "KPW", "KRW", "KWD", "KYD", "KZT", "LAK", "LBP", "LKR", "LRD", "LSL", "LTL", "LVL",
    "LYD", "MAD", "MDL", "MGA", "MKD", "MMK", "MNT", "MOP", "MRU", "MUR", "MVR", "MWK", "MXN",
    "MYR", "MZN", "NAD", "NGN", "NIO", "NOK", "NPR", "NZD", "OMR", "PAB", "PEN", "PGK", "PHP",
    "PKR", "PLN", "PYG", "QAR", "RON", "RSD", "RUB", "RWF", "SAR", "SBD", "SCR", "SDG", "SEK",
    "SGD", "SHP", "SLE", "SLL", "SOS", "SRD", "STD", "SVC", "SYP", "SZL", "THB", "TJS", "TMT",
    "TND", "TOP", "TRY", "TTD", "TWD", "TZS", "UAH", "UGX", "USD", "UYU", "UZS", "VES", "VND",
    "VUV", "WST", "XAF", "XAG", "XAU", "XCD", "XDR", "XOF", "XPF", "YER", "ZAR", "ZMK", "ZMW",
    "ZWL",
];

/// Codes containing `query`, ignoring case, in catalogue order.
pub fn filter_currencies(query: &str) -> Vec<&'static str> {
    let query = query.trim().to_uppercase();
    CURRENCIES
        .iter()
        .copied()
        .filter(|code| code.contains(query.as_str()))
        .collect()
}

pub fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_returns_all() {
        assert_eq!(filter_currencies("").len(), CURRENCIES.len());
        assert_eq!(filter_currencies("  ").len(), CURRENCIES.len());
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        assert_eq!(filter_currencies("usd"), vec!["USD"]);
        assert_eq!(filter_currencies("eu"), vec!["EUR"]);
        assert_eq!(filter_currencies("GB"), vec!["GBP"]);
    }

    #[test]
    fn test_filter_keeps_catalogue_order() {
        assert_eq!(filter_currencies("BY"), vec!["BYN", "BYR"]);
        assert!(filter_currencies("QQ").is_empty());
    }

    #[test]
    fn test_normalize_code() {
        assert_eq!(normalize_code(" eur "), "EUR");
    }
}
