extern crate std;

use std::vec::Vec;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::linked_list::sequential::{ListError, SequentialList};

const STEPS: usize = 5_000;

/// Applies random operations to a list and to a `Vec` that follows the same
/// rules, checking that both agree after every step.
fn run_model(seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut list = SequentialList::new();
    let mut model: Vec<u8> = Vec::new();

    for _ in 0..STEPS {
        let value = rng.random_range(0..16u8);
        let index = rng.random_range(0..model.len() + 3);
        let count = model.len();

        match rng.random_range(0..6) {
            0 => {
                list.prepend(value);
                model.insert(0, value);
            }
            1 => {
                list.add(value);
                model.push(value);
            }
            2 => {
                let result = list.insert(index, value);
                if index < count {
                    assert_eq!(result, Ok(()));
                    model.insert(index, value);
                } else if index == count {
                    assert_eq!(result, Ok(()));
                } else {
                    assert_eq!(result, Err(ListError::OutOfRange { index, count }));
                }
            }
            3 => {
                let expected = model.iter().position(|v| *v == value);
                assert_eq!(list.remove(&value), expected.is_some());
                if let Some(position) = expected {
                    model.remove(position);
                }
            }
            4 => {
                if index < count {
                    assert_eq!(list.remove_at(index), Ok(model.remove(index)));
                } else {
                    assert_eq!(
                        list.remove_at(index),
                        Err(ListError::OutOfRange { index, count })
                    );
                }
            }
            _ => match model.get(index) {
                Some(expected) => assert_eq!(list.get(index), Ok(expected)),
                None => assert_eq!(list.get(index), Err(ListError::OutOfRange { index, count })),
            },
        }

        assert_eq!(list.count(), model.len());
        assert_eq!(list.to_vec(), model);
        assert_eq!(list.last().ok(), model.last());
    }
}

#[test]
fn test_model_agreement() {
    for seed in [1, 7, 42, 2024] {
        run_model(seed);
    }
}

#[test]
fn test_get_matches_to_vec() {
    let mut rng = StdRng::seed_from_u64(99);
    let values: Vec<u32> = (0..256).map(|_| rng.random()).collect();
    let list = SequentialList::from(values.clone());
    let snapshot = list.to_vec();
    for (i, value) in snapshot.iter().enumerate() {
        assert_eq!(list.get(i), Ok(value));
        assert_eq!(values[i], *value);
    }
}
