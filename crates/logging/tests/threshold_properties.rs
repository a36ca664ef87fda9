use std::collections::BTreeMap;

use proptest::prelude::*;

use logging::template::{compose, placeholder_count, segments};
use logging::{ALL_NAMESPACES, DEFAULT_NAMESPACE, Level, LevelSpec, Rank, ThresholdTable};

const NAMESPACES: [&str; 5] = ["default", "*", "db", "net", "none"];

fn reference_resolve(entries: &BTreeMap<String, Rank>, namespace: &str) -> Rank {
    entries
        .get(namespace)
        .or_else(|| entries.get(DEFAULT_NAMESPACE))
        .copied()
        .unwrap_or(Level::Info.rank())
}

fn level() -> impl Strategy<Value = Level> {
    (0u8..Level::COUNT as u8).prop_map(|rank| Level::from_rank(rank).unwrap())
}

proptest! {
    #[test]
    fn table_matches_reference_model(
        default in 0u8..=6,
        ops in proptest::collection::vec((0usize..NAMESPACES.len(), 0u8..=6), 0..=24)
    ) {
        let mut table = ThresholdTable::new(default);
        let mut model = BTreeMap::from([(DEFAULT_NAMESPACE.to_owned(), default)]);

        for (index, rank) in ops {
            let namespace = NAMESPACES[index];
            table.set(namespace, &LevelSpec::Rank(rank)).unwrap();
            if namespace == ALL_NAMESPACES {
                model.values_mut().for_each(|entry| *entry = rank);
            } else {
                model.insert(namespace.to_owned(), rank);
            }
        }

        for namespace in NAMESPACES.iter().chain(["unseen"].iter()) {
            prop_assert_eq!(table.resolve(namespace), reference_resolve(&model, namespace));
        }
        prop_assert_eq!(table.len(), model.len());
    }

    #[test]
    fn emission_is_monotonic_in_rank(threshold in 0u8..=6, namespace in "[a-z]{1,8}") {
        let mut table = ThresholdTable::default();
        table.set(&namespace, &LevelSpec::Rank(threshold)).unwrap();

        for candidate in Level::ALL {
            prop_assert_eq!(
                table.should_emit(&namespace, candidate.rank()),
                candidate.rank() <= threshold
            );
        }
    }

    #[test]
    fn failed_batch_changes_nothing(
        good in proptest::collection::vec(("[a-z]{1,6}", 0u8..=6), 0..=6),
        bad in "[A-Z]{3,8}"
    ) {
        let mut table = ThresholdTable::default();
        table.set("db", &LevelSpec::from("warn")).unwrap();
        let before = table.clone();

        let mut batch: Vec<(String, LevelSpec)> = good
            .into_iter()
            .map(|(namespace, rank)| (namespace, LevelSpec::Rank(rank)))
            .collect();
        batch.push(("db".to_owned(), LevelSpec::Name(bad)));

        prop_assert!(table.set_many(batch).is_err());
        prop_assert_eq!(table, before);
    }

    #[test]
    fn template_markers_and_text_survive(
        level in level(),
        namespace in "[a-z:]{1,12}",
        body in "[ -~]{0,40}",
        stamped in any::<bool>()
    ) {
        let stamp = stamped.then_some("1/2/2026 @ 03:04:05.6");
        let template = compose(stamp, level, &namespace, &body);

        prop_assert_eq!(placeholder_count(&template), if stamped { 4 } else { 3 });

        let text: String = segments(&template).map(|segment| segment.text).collect();
        let tail = format!("[{namespace}] : {body}");
        prop_assert!(text.ends_with(&tail));
        let label = format!("({level}) ");
        prop_assert!(text.contains(&label));
    }
}
