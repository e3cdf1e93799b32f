//! Property tests for address parsing.

use proptest::prelude::*;

use kafka_compose::Address;

fn host() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z0-9][a-z0-9.-]{0,30}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Parsing never panics on arbitrary input.
    #[test]
    fn property_parse_never_panics(s in "(?s).{0,128}") {
        let _ = Address::parse(&s, 9092);
    }

    /// PROPERTY: A bare host takes the default port.
    #[test]
    fn property_bare_host_uses_default(h in host(), default in any::<u16>()) {
        let addr = Address::parse(&h, default).unwrap();
        prop_assert_eq!(addr.host(), h.as_str());
        prop_assert_eq!(addr.port(), default);
    }

    /// PROPERTY: `host:port` displays back to the same token.
    #[test]
    fn property_host_port_display_matches_token(h in host(), port in any::<u16>()) {
        let token = format!("{}:{}", h, port);
        let addr = Address::parse(&token, 9092).unwrap();
        prop_assert_eq!(addr.to_string(), token);
    }

    /// PROPERTY: Tokens with more than one ':' are always rejected.
    #[test]
    fn property_two_colons_rejected(h in host(), a in any::<u16>(), b in any::<u16>()) {
        let token = format!("{}:{}:{}", h, a, b);
        prop_assert!(Address::parse(&token, 9092).is_err());
    }
}
