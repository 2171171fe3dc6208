//! Unit tests for the generators.

#[cfg(test)]
mod fake {
    use crate::FakeRng;
    use crate::fake::*;

    #[test]
    fn luhn_known_numbers() {
        assert!(luhn_valid("4111 1111 1111 1111"));
        assert!(luhn_valid("3782-822463-10005"));
        assert!(!luhn_valid("4111 1111 1111 1112"));
        assert!(!luhn_valid("not a number"));
        assert!(!luhn_valid(""));
    }

    #[test]
    fn card_numbers_pass_luhn() {
        let mut rng = FakeRng::new(7);
        for _ in 0..200 {
            let card = card_number(&mut rng);
            assert!(luhn_valid(&card), "{card} fails Luhn");
        }
    }

    #[test]
    fn national_ids_use_unissued_area() {
        let mut rng = FakeRng::new(7);
        for _ in 0..100 {
            let id = national_id(&mut rng);
            let parts: Vec<_> = id.split('-').collect();
            assert_eq!(parts.len(), 3, "{id}");
            assert!(parts[0].starts_with('9'), "{id}");
            assert_eq!((parts[1].len(), parts[2].len()), (2, 4), "{id}");
        }
    }

    #[test]
    fn email_follows_name() {
        let mut rng = FakeRng::new(1);
        let mail = email(&mut rng, "Jamie O'Brien");
        assert!(mail.starts_with("jamie.obrien"), "{mail}");
        assert!(mail.contains('@'));
        assert!(email(&mut rng, "   ").starts_with("user"));
    }

    #[test]
    fn phone_uses_fictional_exchange() {
        let mut rng = FakeRng::new(3);
        let p = phone(&mut rng);
        assert!(p.contains(") 555-01"), "{p}");
    }

    #[test]
    fn version_is_one_decimal_place() {
        let mut rng = FakeRng::new(9);
        for _ in 0..50 {
            let v = version(&mut rng);
            assert!((1.0..6.0).contains(&v));
            assert!(((v * 10.0).round() - v * 10.0).abs() < 1e-9);
        }
    }

    #[test]
    fn tags_are_distinct() {
        let mut rng = FakeRng::new(11);
        for _ in 0..50 {
            let t = tags(&mut rng);
            let parts: Vec<_> = t.split(';').collect();
            assert!((1..=3).contains(&parts.len()));
            let mut dedup = parts.clone();
            dedup.sort();
            dedup.dedup();
            assert_eq!(dedup.len(), parts.len(), "{t}");
        }
    }
}

#[cfg(test)]
mod produce {
    use crate::schema::{NON_SENSITIVE_FIELDS, SENSITIVE_FIELDS};
    use crate::{FakeRng, SchemaKind, produce};

    #[test]
    fn every_record_shares_the_schema() {
        let mut rng = FakeRng::new(5);
        for kind in [SchemaKind::NonSensitive, SchemaKind::Sensitive] {
            let set = produce(kind, 40, &mut rng).unwrap();
            assert_eq!(set.len(), 40);
            for record in &set {
                let fields: Vec<_> = record.schema().iter().collect();
                assert_eq!(fields, kind.fields());
            }
        }
    }

    #[test]
    fn sensitive_field_order() {
        let set = produce(SchemaKind::Sensitive, 1, &mut FakeRng::new(0)).unwrap();
        assert_eq!(set.schema().fields(), SENSITIVE_FIELDS);
    }

    #[test]
    fn version_is_decimal() {
        let set = produce(SchemaKind::NonSensitive, 3, &mut FakeRng::new(0)).unwrap();
        assert_eq!(set.schema().fields(), NON_SENSITIVE_FIELDS);
        for record in &set {
            assert!(matches!(record.get("Version"), Some(dlp_core::Value::Decimal(_))));
        }
    }

    #[test]
    fn zero_rows_keeps_schema() {
        let set = produce(SchemaKind::Sensitive, 0, &mut FakeRng::new(0)).unwrap();
        assert!(set.is_empty());
        assert_eq!(set.schema().len(), SENSITIVE_FIELDS.len());
    }

    #[test]
    fn same_seed_same_records() {
        let a = produce(SchemaKind::Sensitive, 10, &mut FakeRng::new(99)).unwrap();
        let b = produce(SchemaKind::Sensitive, 10, &mut FakeRng::new(99)).unwrap();
        assert_eq!(a, b);
    }
}

#[cfg(test)]
mod tiers {
    use crate::{GenConfig, GenError, MAX_ROWS, Tier, generate_tier};

    #[test]
    fn parse_slugs() {
        assert_eq!("no_pii".parse::<Tier>().unwrap(), Tier::NoPii);
        assert_eq!("Light-PII".parse::<Tier>().unwrap(), Tier::LightPii);
        assert!(matches!("medium".parse::<Tier>(), Err(GenError::UnknownTier(_))));
    }

    #[test]
    fn default_config_is_valid() {
        GenConfig::default().validate().unwrap();
    }

    #[test]
    fn oversized_tier_rejected() {
        let config = GenConfig { rows_heavy_pii: MAX_ROWS + 1, ..GenConfig::default() };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, GenError::RowCount { tier: Tier::HeavyPii, .. }));
        assert!(generate_tier(Tier::HeavyPii, &config).is_err());
    }

    #[test]
    fn tier_row_counts_and_schemas() {
        let config = GenConfig { rows_no_pii: 4, rows_light_pii: 2, rows_heavy_pii: 6, seed: 1 };
        for tier in Tier::ALL {
            let set = generate_tier(tier, &config).unwrap();
            assert_eq!(set.len(), config.rows(tier));
            assert_eq!(set.schema().len(), tier.schema_kind().fields().len());
        }
    }

    #[test]
    fn tiers_are_independent_streams() {
        let small = GenConfig { rows_no_pii: 1, ..GenConfig::default() };
        let large = GenConfig { rows_no_pii: 200, ..GenConfig::default() };
        assert_eq!(
            generate_tier(Tier::HeavyPii, &small).unwrap(),
            generate_tier(Tier::HeavyPii, &large).unwrap(),
        );
    }
}
