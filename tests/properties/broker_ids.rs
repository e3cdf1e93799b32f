//! Property tests for broker id assignment.

use std::collections::BTreeSet;

use proptest::prelude::*;

use kafka_compose::domain::ports::FixedSecret;
use kafka_compose::{BuildSettings, TargetBuilder};

fn distinct_hosts(max: usize) -> impl Strategy<Value = Vec<String>> {
    proptest::collection::btree_set("[a-z]{1,8}", 1..=max)
        .prop_map(|set: BTreeSet<String>| set.into_iter().collect())
        .prop_shuffle()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The broker id of every host equals its position in the input.
    #[test]
    fn property_broker_id_is_input_position(hosts in distinct_hosts(12)) {
        let settings = BuildSettings::default();
        let layout = TargetBuilder::new(&settings)
            .build(&hosts, &["zk0".to_string()], &[], &FixedSecret("s".into()))
            .unwrap();

        for (index, host) in hosts.iter().enumerate() {
            let kafka = layout.host(host).and_then(|h| h.kafka()).unwrap();
            prop_assert_eq!(kafka.broker_id(), index);
        }
    }

    /// PROPERTY: Appending brokers leaves the existing brokers untouched.
    #[test]
    fn property_append_keeps_existing_brokers(hosts in distinct_hosts(12), split in 1usize..12) {
        let split = split.min(hosts.len());
        let settings = BuildSettings::default();
        let builder = TargetBuilder::new(&settings);
        let zk = ["zk0".to_string()];
        let secret = FixedSecret("s".into());

        let before = builder.build(&hosts[..split], &zk, &[], &secret).unwrap();
        let after = builder.build(&hosts, &zk, &[], &secret).unwrap();

        for host in &hosts[..split] {
            prop_assert_eq!(before.host(host), after.host(host));
        }
    }
}
