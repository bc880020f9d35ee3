use std::collections::HashMap;

use proptest::prelude::*;
use waypath::{FibonacciHeap, HeapError};

#[derive(Debug, Clone)]
enum Operation {
    Insert(u8, u16),
    DecreaseKey(u8, u16),
    ExtractMin,
}

proptest! {
    #[test]
    fn test_fibonacci_heap_matches_model(ops in proptest::collection::vec(
        prop_oneof![
            (any::<u8>(), any::<u16>()).prop_map(|(k, p)| Operation::Insert(k, p)),
            (any::<u8>(), any::<u16>()).prop_map(|(k, p)| Operation::DecreaseKey(k, p)),
            Just(Operation::ExtractMin),
        ],
        1..200
    )) {
        let mut model: HashMap<u8, u16> = HashMap::new();
        let mut heap = FibonacciHeap::new();

        for op in ops {
            match op {
                Operation::Insert(k, p) => {
                    let result = heap.insert(k, p);
                    if model.contains_key(&k) {
                        prop_assert_eq!(result, Err(HeapError::DuplicateItem));
                    } else {
                        prop_assert_eq!(result, Ok(()));
                        model.insert(k, p);
                    }
                }
                Operation::DecreaseKey(k, p) => {
                    let result = heap.decrease_key(&k, p);
                    match model.get_mut(&k) {
                        None => prop_assert_eq!(result, Err(HeapError::ItemNotFound)),
                        Some(current) if p < *current => {
                            prop_assert_eq!(result, Ok(()));
                            *current = p;
                        }
                        Some(_) => prop_assert_eq!(result, Err(HeapError::NotImproved)),
                    }
                }
                Operation::ExtractMin => {
                    match model.values().min().copied() {
                        None => prop_assert_eq!(heap.extract_min(), Err(HeapError::Empty)),
                        Some(lowest) => {
                            let (item, priority) = heap.extract_min().unwrap();
                            prop_assert_eq!(priority, lowest);
                            prop_assert_eq!(model.remove(&item), Some(lowest));
                        }
                    }
                }
            }

            prop_assert_eq!(heap.len(), model.len());
            prop_assert!(heap.check_invariants());
        }

        // Drain the rest in order.
        let drained = heap.into_sorted_vec();
        prop_assert_eq!(drained.len(), model.len());
        prop_assert!(drained.windows(2).all(|w| w[0].1 <= w[1].1));
        for (item, priority) in drained {
            prop_assert_eq!(model.get(&item), Some(&priority));
        }
    }
}
