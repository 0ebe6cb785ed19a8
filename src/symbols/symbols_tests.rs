//! Unit tests for symbol normalization and pair lookup.

#[cfg(test)]
mod symbols_tests {
    use crate::symbols::*;

    fn pairs(list: &[&str]) -> Vec<String> {
        list.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn test_clean_symbol() {
        assert_eq!(clean_symbol("btc"), "BTC");
        assert_eq!(clean_symbol("btc-usdt"), "BTC/USDT");
        assert_eq!(clean_symbol("eth_btc"), "ETH/BTC");
        assert_eq!(clean_symbol(" BTC / USDT "), "BTC/USDT");
        assert_eq!(clean_symbol("BTCUSDT"), "BTCUSDT");
    }

    #[test]
    fn test_strip_separators() {
        assert_eq!(strip_separators("btc/usdt"), "BTCUSDT");
        assert_eq!(strip_separators("BTC-USDT"), "BTCUSDT");
        assert_eq!(strip_separators("b t_c"), "BTC");
    }

    #[test]
    fn test_search_symbol_ignores_separators() {
        let known = pairs(&["BTC/USDT", "ETH/BTC"]);
        assert_eq!(search_symbol("btcusdt", &known), Some("BTC/USDT".to_string()));
        assert_eq!(search_symbol("ETH-BTC", &known), Some("ETH/BTC".to_string()));
        assert_eq!(search_symbol("ETH/USDT", &known), None);
    }

    #[test]
    fn test_find_pair_prefers_usdt() {
        let known = pairs(&["SOL/BTC", "SOL/ETH", "SOL/USDT"]);
        assert_eq!(find_pair_with_base_coin("SOL", &known), Some("SOL/USDT".to_string()));
    }

    #[test]
    fn test_find_pair_then_btc_then_eth() {
        let known = pairs(&["SOL/ETH", "SOL/BTC"]);
        assert_eq!(find_pair_with_base_coin("SOL", &known), Some("SOL/BTC".to_string()));

        let known = pairs(&["SOL/EUR", "SOL/ETH"]);
        assert_eq!(find_pair_with_base_coin("SOL", &known), Some("SOL/ETH".to_string()));
    }

    #[test]
    fn test_find_pair_any_quote() {
        let known = pairs(&["ETH/EUR", "SOL/EUR", "SOL/TRY"]);
        assert_eq!(find_pair_with_base_coin("SOL", &known), Some("SOL/EUR".to_string()));
        assert_eq!(find_pair_with_base_coin("ADA", &known), None);
    }

    #[test]
    fn test_find_pair_does_not_match_quote_side() {
        let known = pairs(&["ETH/BTC"]);
        assert_eq!(find_pair_with_base_coin("BTC", &known), None);
    }
}
