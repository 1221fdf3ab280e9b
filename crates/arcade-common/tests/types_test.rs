//! Tests for the core type definitions in arcade-common.
//!
//! This test suite covers:
//! - Newtype wrappers implementing expected traits (Display, Debug, Hash, Serialize)
//! - Topic and resource category parsing from raw user input

use arcade_common::types::*;
use std::collections::HashMap;

mod newtype_trait_tests {
    use super::*;

    #[test]
    fn test_server_id_implements_expected_traits() {
        let server_id = ServerId(123456789);

        assert_eq!(format!("{:?}", server_id), "ServerId(123456789)");
        assert_eq!(format!("{}", server_id), "123456789");

        let mut map = HashMap::new();
        map.insert(server_id, "test_server");
        assert_eq!(map.get(&ServerId(123456789)), Some(&"test_server"));
    }

    #[test]
    fn test_channel_id_mention() {
        let channel_id = ChannelId(42);
        assert_eq!(channel_id.mention(), "<#42>");
        assert_eq!(channel_id.to_string(), "42");
    }
}

mod topic_tests {
    use super::*;

    #[test]
    fn test_topic_parses_every_name() {
        for topic in Topic::ALL {
            assert_eq!(topic.as_str().parse::<Topic>().unwrap(), topic);
        }
    }

    #[test]
    fn test_topic_parse_ignores_case_and_whitespace() {
        assert_eq!("  Deals ".parse::<Topic>().unwrap(), Topic::Deals);
        assert_eq!("DROPS".parse::<Topic>().unwrap(), Topic::Drops);
    }

    #[test]
    fn test_topic_rejects_unknown_value() {
        let err = "news".parse::<Topic>().unwrap_err();
        assert!(err.is_validation());
        assert!("".parse::<Topic>().is_err());
    }

    #[test]
    fn test_topic_choices_are_sorted() {
        assert_eq!(
            Topic::choices(),
            "awards, bundles, deals, drops, free, resources"
        );
    }

    #[test]
    fn test_topic_serializes_lowercase() {
        let yaml = serde_yaml::to_string(&Topic::Resources).unwrap();
        assert_eq!(yaml.trim(), "resources");
    }
}

mod resource_category_tests {
    use super::*;

    #[test]
    fn test_category_parsing() {
        assert_eq!(
            " Magazines".parse::<ResourceCategory>().unwrap(),
            ResourceCategory::Magazines
        );
        assert_eq!(
            "books".parse::<ResourceCategory>().unwrap(),
            ResourceCategory::Books
        );
        assert_eq!(
            "ARCHIVES\n".parse::<ResourceCategory>().unwrap(),
            ResourceCategory::Archives
        );
    }

    #[test]
    fn test_category_rejects_unknown_value() {
        assert!("videos".parse::<ResourceCategory>().is_err());
    }
}

mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_unknown_topics_never_parse(input in "[a-z]{1,12}") {
            let known = Topic::ALL.iter().any(|t| t.as_str() == input);
            prop_assert_eq!(input.parse::<Topic>().is_ok(), known);
        }

        #[test]
        fn test_server_id_display_roundtrip(id in any::<u64>()) {
            let parsed: u64 = ServerId(id).to_string().parse().unwrap();
            prop_assert_eq!(parsed, id);
        }
    }
}
