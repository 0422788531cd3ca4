//! Currency reference table.
//!
//! Currency is a label/symbol only - no rates, no conversion. The table is
//! keyed by ISO-style code; unknown codes resolve to the generic currency
//! sign rather than failing a render.

use serde::Serialize;
use ts_rs::TS;

/// One entry in the currency table.
#[derive(Debug, Clone, Copy, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyInfo {
    pub code: &'static str,
    pub symbol: &'static str,
    pub name: &'static str,
}

/// Fallback symbol for currency codes missing from the table.
pub const GENERIC_CURRENCY_SYMBOL: &str = "¤";

/// All supported currencies.
pub const CURRENCIES: &[CurrencyInfo] = &[
    // Major currencies
    CurrencyInfo { code: "USD", symbol: "$", name: "US Dollar" },
    CurrencyInfo { code: "EUR", symbol: "€", name: "Euro" },
    CurrencyInfo { code: "GBP", symbol: "£", name: "British Pound" },
    CurrencyInfo { code: "JPY", symbol: "¥", name: "Japanese Yen" },
    CurrencyInfo { code: "CHF", symbol: "CHF", name: "Swiss Franc" },
    CurrencyInfo { code: "CNY", symbol: "¥", name: "Chinese Yuan" },
    CurrencyInfo { code: "AUD", symbol: "A$", name: "Australian Dollar" },
    CurrencyInfo { code: "CAD", symbol: "C$", name: "Canadian Dollar" },
    // European currencies
    CurrencyInfo { code: "SEK", symbol: "kr", name: "Swedish Krona" },
    CurrencyInfo { code: "NOK", symbol: "kr", name: "Norwegian Krone" },
    CurrencyInfo { code: "DKK", symbol: "kr", name: "Danish Krone" },
    CurrencyInfo { code: "PLN", symbol: "zł", name: "Polish Zloty" },
    CurrencyInfo { code: "CZK", symbol: "Kč", name: "Czech Koruna" },
    CurrencyInfo { code: "HUF", symbol: "Ft", name: "Hungarian Forint" },
    CurrencyInfo { code: "RON", symbol: "lei", name: "Romanian Leu" },
    CurrencyInfo { code: "BGN", symbol: "лв", name: "Bulgarian Lev" },
    CurrencyInfo { code: "HRK", symbol: "kn", name: "Croatian Kuna" },
    CurrencyInfo { code: "RSD", symbol: "дин", name: "Serbian Dinar" },
    CurrencyInfo { code: "UAH", symbol: "₴", name: "Ukrainian Hryvnia" },
    CurrencyInfo { code: "RUB", symbol: "₽", name: "Russian Ruble" },
    CurrencyInfo { code: "ISK", symbol: "kr", name: "Icelandic Króna" },
    // Middle East & Turkey
    CurrencyInfo { code: "TRY", symbol: "₺", name: "Turkish Lira" },
    CurrencyInfo { code: "AED", symbol: "د.إ", name: "UAE Dirham" },
    CurrencyInfo { code: "SAR", symbol: "﷼", name: "Saudi Riyal" },
    CurrencyInfo { code: "QAR", symbol: "﷼", name: "Qatari Riyal" },
    CurrencyInfo { code: "KWD", symbol: "د.ك", name: "Kuwaiti Dinar" },
    CurrencyInfo { code: "BHD", symbol: "ب.د", name: "Bahraini Dinar" },
    CurrencyInfo { code: "OMR", symbol: "﷼", name: "Omani Rial" },
    CurrencyInfo { code: "JOD", symbol: "د.ا", name: "Jordanian Dinar" },
    CurrencyInfo { code: "ILS", symbol: "₪", name: "Israeli Shekel" },
    CurrencyInfo { code: "EGP", symbol: "E£", name: "Egyptian Pound" },
    CurrencyInfo { code: "LBP", symbol: "ل.ل", name: "Lebanese Pound" },
    CurrencyInfo { code: "IQD", symbol: "ع.د", name: "Iraqi Dinar" },
    CurrencyInfo { code: "IRR", symbol: "﷼", name: "Iranian Rial" },
    // Asia Pacific
    CurrencyInfo { code: "INR", symbol: "₹", name: "Indian Rupee" },
    CurrencyInfo { code: "PKR", symbol: "₨", name: "Pakistani Rupee" },
    CurrencyInfo { code: "BDT", symbol: "৳", name: "Bangladeshi Taka" },
    CurrencyInfo { code: "LKR", symbol: "₨", name: "Sri Lankan Rupee" },
    CurrencyInfo { code: "NPR", symbol: "₨", name: "Nepalese Rupee" },
    CurrencyInfo { code: "KRW", symbol: "₩", name: "South Korean Won" },
    CurrencyInfo { code: "TWD", symbol: "NT$", name: "Taiwan Dollar" },
    CurrencyInfo { code: "HKD", symbol: "HK$", name: "Hong Kong Dollar" },
    CurrencyInfo { code: "SGD", symbol: "S$", name: "Singapore Dollar" },
    CurrencyInfo { code: "MYR", symbol: "RM", name: "Malaysian Ringgit" },
    CurrencyInfo { code: "IDR", symbol: "Rp", name: "Indonesian Rupiah" },
    CurrencyInfo { code: "THB", symbol: "฿", name: "Thai Baht" },
    CurrencyInfo { code: "VND", symbol: "₫", name: "Vietnamese Dong" },
    CurrencyInfo { code: "PHP", symbol: "₱", name: "Philippine Peso" },
    CurrencyInfo { code: "MMK", symbol: "K", name: "Myanmar Kyat" },
    CurrencyInfo { code: "KHR", symbol: "៛", name: "Cambodian Riel" },
    CurrencyInfo { code: "LAK", symbol: "₭", name: "Lao Kip" },
    CurrencyInfo { code: "MNT", symbol: "₮", name: "Mongolian Tugrik" },
    CurrencyInfo { code: "KZT", symbol: "₸", name: "Kazakhstani Tenge" },
    CurrencyInfo { code: "UZS", symbol: "сум", name: "Uzbekistani Som" },
    CurrencyInfo { code: "AZN", symbol: "₼", name: "Azerbaijani Manat" },
    CurrencyInfo { code: "GEL", symbol: "₾", name: "Georgian Lari" },
    CurrencyInfo { code: "AMD", symbol: "֏", name: "Armenian Dram" },
    // Americas
    CurrencyInfo { code: "MXN", symbol: "Mex$", name: "Mexican Peso" },
    CurrencyInfo { code: "BRL", symbol: "R$", name: "Brazilian Real" },
    CurrencyInfo { code: "ARS", symbol: "AR$", name: "Argentine Peso" },
    CurrencyInfo { code: "CLP", symbol: "CL$", name: "Chilean Peso" },
    CurrencyInfo { code: "COP", symbol: "COL$", name: "Colombian Peso" },
    CurrencyInfo { code: "PEN", symbol: "S/", name: "Peruvian Sol" },
    CurrencyInfo { code: "UYU", symbol: "$U", name: "Uruguayan Peso" },
    CurrencyInfo { code: "VES", symbol: "Bs.", name: "Venezuelan Bolívar" },
    CurrencyInfo { code: "BOB", symbol: "Bs.", name: "Bolivian Boliviano" },
    CurrencyInfo { code: "PYG", symbol: "₲", name: "Paraguayan Guarani" },
    CurrencyInfo { code: "DOP", symbol: "RD$", name: "Dominican Peso" },
    CurrencyInfo { code: "CRC", symbol: "₡", name: "Costa Rican Colón" },
    CurrencyInfo { code: "GTQ", symbol: "Q", name: "Guatemalan Quetzal" },
    CurrencyInfo { code: "HNL", symbol: "L", name: "Honduran Lempira" },
    CurrencyInfo { code: "NIO", symbol: "C$", name: "Nicaraguan Córdoba" },
    CurrencyInfo { code: "PAB", symbol: "B/.", name: "Panamanian Balboa" },
    CurrencyInfo { code: "JMD", symbol: "J$", name: "Jamaican Dollar" },
    CurrencyInfo { code: "TTD", symbol: "TT$", name: "Trinidad Dollar" },
    CurrencyInfo { code: "BBD", symbol: "Bds$", name: "Barbadian Dollar" },
    CurrencyInfo { code: "BSD", symbol: "B$", name: "Bahamian Dollar" },
    CurrencyInfo { code: "BZD", symbol: "BZ$", name: "Belize Dollar" },
    // Africa
    CurrencyInfo { code: "ZAR", symbol: "R", name: "South African Rand" },
    CurrencyInfo { code: "NGN", symbol: "₦", name: "Nigerian Naira" },
    CurrencyInfo { code: "KES", symbol: "KSh", name: "Kenyan Shilling" },
    CurrencyInfo { code: "GHS", symbol: "GH₵", name: "Ghanaian Cedi" },
    CurrencyInfo { code: "TZS", symbol: "TSh", name: "Tanzanian Shilling" },
    CurrencyInfo { code: "UGX", symbol: "USh", name: "Ugandan Shilling" },
    CurrencyInfo { code: "ETB", symbol: "Br", name: "Ethiopian Birr" },
    CurrencyInfo { code: "MAD", symbol: "د.م.", name: "Moroccan Dirham" },
    CurrencyInfo { code: "DZD", symbol: "د.ج", name: "Algerian Dinar" },
    CurrencyInfo { code: "TND", symbol: "د.ت", name: "Tunisian Dinar" },
    CurrencyInfo { code: "LYD", symbol: "ل.د", name: "Libyan Dinar" },
    CurrencyInfo { code: "XOF", symbol: "CFA", name: "West African CFA" },
    CurrencyInfo { code: "XAF", symbol: "FCFA", name: "Central African CFA" },
    CurrencyInfo { code: "MUR", symbol: "₨", name: "Mauritian Rupee" },
    CurrencyInfo { code: "SCR", symbol: "₨", name: "Seychellois Rupee" },
    CurrencyInfo { code: "BWP", symbol: "P", name: "Botswana Pula" },
    CurrencyInfo { code: "NAD", symbol: "N$", name: "Namibian Dollar" },
    CurrencyInfo { code: "ZMW", symbol: "ZK", name: "Zambian Kwacha" },
    CurrencyInfo { code: "MWK", symbol: "MK", name: "Malawian Kwacha" },
    CurrencyInfo { code: "RWF", symbol: "FRw", name: "Rwandan Franc" },
    // Oceania
    CurrencyInfo { code: "NZD", symbol: "NZ$", name: "New Zealand Dollar" },
    CurrencyInfo { code: "FJD", symbol: "FJ$", name: "Fijian Dollar" },
    CurrencyInfo { code: "PGK", symbol: "K", name: "Papua New Guinean Kina" },
    CurrencyInfo { code: "WST", symbol: "WS$", name: "Samoan Tala" },
    CurrencyInfo { code: "TOP", symbol: "T$", name: "Tongan Paʻanga" },
    CurrencyInfo { code: "VUV", symbol: "VT", name: "Vanuatu Vatu" },
    CurrencyInfo { code: "SBD", symbol: "SI$", name: "Solomon Islands Dollar" },
    // Crypto (common)
    CurrencyInfo { code: "BTC", symbol: "₿", name: "Bitcoin" },
    CurrencyInfo { code: "ETH", symbol: "Ξ", name: "Ethereum" },
    CurrencyInfo { code: "USDT", symbol: "₮", name: "Tether" },
];

/// Looks up the full table entry for a currency code.
pub fn currency_info(code: &str) -> Option<&'static CurrencyInfo> {
    CURRENCIES.iter().find(|c| c.code == code)
}

/// Resolves a currency code to its display symbol.
///
/// Unknown codes fall back to [`GENERIC_CURRENCY_SYMBOL`] so a stale or
/// hand-edited draft still renders.
pub fn currency_symbol(code: &str) -> &'static str {
    currency_info(code)
        .map(|c| c.symbol)
        .unwrap_or(GENERIC_CURRENCY_SYMBOL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_currency_lookup() {
        assert_eq!(currency_symbol("USD"), "$");
        assert_eq!(currency_symbol("EUR"), "€");
        assert_eq!(currency_symbol("TRY"), "₺");
    }

    #[test]
    fn test_unknown_currency_falls_back_to_generic_symbol() {
        assert_eq!(currency_symbol("XXX"), GENERIC_CURRENCY_SYMBOL);
        assert_eq!(currency_symbol(""), GENERIC_CURRENCY_SYMBOL);
    }

    #[test]
    fn test_codes_are_unique() {
        let mut codes: Vec<&str> = CURRENCIES.iter().map(|c| c.code).collect();
        codes.sort_unstable();
        let before = codes.len();
        codes.dedup();
        assert_eq!(codes.len(), before);
    }
}
