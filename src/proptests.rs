use super::*;

use proptest::prelude::*;
use std::collections::BTreeSet;

#[derive(Clone, Debug)]
enum Op {
    Insert(ProductCode),
    Search(ProductCode),
}

fn code_strategy() -> impl Strategy<Value = ProductCode> + Clone {
    // A narrow range so that duplicate inserts and hits are common
    -500..500
}

fn ops_strategy() -> impl Strategy<Value = Vec<Op>> {
    let code = code_strategy();
    let op = prop_oneof![
        60 => code.clone().prop_map(Op::Insert),
        40 => code.prop_map(Op::Search),
    ];
    prop::collection::vec(op, 0..=1000)
}

fn avl_height_bound(len: usize) -> f64 {
    1.44 * ((len + 2) as f64).log2()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_equivalence_btreeset(ops in ops_strategy()) {
        let mut index = Inventory::new();
        let mut model = BTreeSet::new();

        for op in ops {
            match op {
                Op::Insert(code) => {
                    prop_assert_eq!(index.insert(code), model.insert(code));
                    prop_assert!(index.is_balanced());
                    index.check_consistency();
                }
                Op::Search(code) => {
                    prop_assert_eq!(index.search(&code), model.contains(&code));
                }
            }
            prop_assert_eq!(index.len(), model.len());
        }

        let ascending: Vec<_> = index.ascending().copied().collect();
        let expected: Vec<_> = model.iter().copied().collect();
        prop_assert_eq!(&ascending, &expected);

        let descending: Vec<_> = index.descending().copied().collect();
        let reversed: Vec<_> = expected.iter().rev().copied().collect();
        prop_assert_eq!(descending, reversed);
    }

    #[test]
    fn prop_height_bound(codes in prop::collection::vec(any::<ProductCode>(), 0..=2000)) {
        let mut index = Inventory::new();
        for code in codes {
            index.insert(code);
            prop_assert!((index.height() as f64) <= avl_height_bound(index.len()));
        }
        index.check_consistency();
    }

    #[test]
    fn prop_traversals_visit_every_code(codes in prop::collection::vec(code_strategy(), 0..=300)) {
        let index: Inventory = codes.iter().copied().collect();
        let expected: BTreeSet<_> = codes.iter().copied().collect();

        let hierarchical: Vec<_> = index.hierarchical().copied().collect();
        let level_order: Vec<_> = index.level_order().copied().collect();
        prop_assert_eq!(hierarchical.len(), index.len());
        prop_assert_eq!(level_order.len(), index.len());
        prop_assert_eq!(hierarchical.iter().copied().collect::<BTreeSet<_>>(), expected.clone());
        prop_assert_eq!(level_order.iter().copied().collect::<BTreeSet<_>>(), expected);

        // Both start at the root
        prop_assert_eq!(hierarchical.first(), level_order.first());
    }

    #[test]
    fn prop_duplicate_insert_is_idempotent(codes in prop::collection::vec(code_strategy(), 0..=300)) {
        let once: Inventory = codes.iter().copied().collect();

        let mut twice = Inventory::new();
        for &code in &codes {
            twice.insert(code);
            prop_assert!(!twice.insert(code));
        }

        prop_assert_eq!(twice.len(), once.len());
        prop_assert_eq!(twice.height(), once.height());
        prop_assert!(twice.hierarchical().eq(once.hierarchical()));
    }

    #[test]
    fn prop_absent_codes_not_found(
        codes in prop::collection::vec(0..1000 as ProductCode, 0..=300),
        probe in 1000..2000 as ProductCode,
    ) {
        let index: Inventory = codes.iter().copied().collect();
        prop_assert!(!index.search(&probe));
        prop_assert!(!index.search(&-probe));
        for code in &codes {
            prop_assert!(index.search(code));
        }
    }
}
