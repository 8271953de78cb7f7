//! Randomized operation sequences checked against a `BTreeSet` model.

use std::collections::BTreeSet;

use proptest::prelude::*;

use super::Relation;
use crate::{Error, FnHasher, RelationConfig};

#[derive(Debug, Clone)]
enum Op {
    Put(u8, u8),
    Remove(u8, u8),
    RemoveAllWithX(u8),
    RemoveAllWithY(u8),
    Clear,
}

fn op() -> impl Strategy<Value = Op> {
    // Small key space so puts repeat and removals hit
    prop_oneof![
        6 => (0u8..8, 0u8..8).prop_map(|(x, y)| Op::Put(x, y)),
        3 => (0u8..8, 0u8..8).prop_map(|(x, y)| Op::Remove(x, y)),
        1 => (0u8..8).prop_map(Op::RemoveAllWithX),
        1 => (0u8..8).prop_map(Op::RemoveAllWithY),
        1 => Just(Op::Clear),
    ]
}

/// Applies `ops` to both the relation and the model, checking every step.
fn run<HX, HY>(
    mut relation: Relation<u8, u8, HX, HY>,
    ops: Vec<Op>,
) -> Result<(), TestCaseError>
where
    HX: crate::KeyHasher<u8>,
    HY: crate::KeyHasher<u8>,
{
    let mut model: BTreeSet<(u8, u8)> = BTreeSet::new();

    for op in ops {
        match op {
            Op::Put(x, y) => {
                let inserted = relation.put(x, y);
                prop_assert_eq!(inserted, model.insert((x, y)));
                prop_assert!(relation.contains(&x, &y));
                prop_assert!(relation.project_from_x(&x).contains(&y));
                prop_assert!(relation.project_from_y(&y).contains(&x));
            }
            Op::Remove(x, y) => {
                let before = relation.len();
                match relation.remove(&x, &y) {
                    Ok(pair) => {
                        prop_assert_eq!(pair, (x, y));
                        prop_assert!(model.remove(&(x, y)));
                    }
                    Err(e) => {
                        prop_assert_eq!(e, Error::NotFound);
                        prop_assert!(!model.contains(&(x, y)));
                        prop_assert_eq!(relation.len(), before);
                    }
                }
                prop_assert!(!relation.contains(&x, &y));
            }
            Op::RemoveAllWithX(x) => {
                let expected = model.iter().filter(|(mx, _)| *mx == x).count();
                prop_assert_eq!(relation.remove_all_with_x(&x), expected);
                model.retain(|(mx, _)| *mx != x);
                prop_assert!(relation.project_from_x(&x).is_empty());
            }
            Op::RemoveAllWithY(y) => {
                let expected = model.iter().filter(|(_, my)| *my == y).count();
                prop_assert_eq!(relation.remove_all_with_y(&y), expected);
                model.retain(|(_, my)| *my != y);
                prop_assert!(relation.project_from_y(&y).is_empty());
            }
            Op::Clear => {
                relation.clear();
                model.clear();
            }
        }

        prop_assert_eq!(relation.len(), model.len());
        prop_assert!(relation.validate().is_ok());
        let stored: BTreeSet<(u8, u8)> = relation.iter().map(|(x, y)| (*x, *y)).collect();
        prop_assert_eq!(&stored, &model);
    }
    Ok(())
}

proptest! {
    #[test]
    fn matches_model_default_hashers(
        buckets in 1usize..12,
        ops in prop::collection::vec(op(), 0..96),
    ) {
        run(Relation::new(buckets), ops)?;
    }

    #[test]
    fn matches_model_all_colliding(
        buckets in 1usize..6,
        ops in prop::collection::vec(op(), 0..96),
    ) {
        let constant: fn(&u8) -> i64 = |_| -3;
        let relation = Relation::with_hashers(
            RelationConfig::new(buckets),
            FnHasher::new(constant),
            FnHasher::new(constant),
        )
        .unwrap();
        run(relation, ops)?;
    }

    #[test]
    fn put_twice_same_as_once(
        pairs in prop::collection::vec((any::<u8>(), any::<u8>()), 0..64),
    ) {
        let mut once: Relation<u8, u8> = Relation::new(7);
        let mut twice: Relation<u8, u8> = Relation::new(7);
        for &(x, y) in &pairs {
            once.put(x, y);
            twice.put(x, y);
            twice.put(x, y);
        }

        prop_assert_eq!(once.len(), twice.len());
        prop_assert_eq!(once.render(), twice.render());
    }
}
