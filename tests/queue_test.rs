/*!
 * Waiting Queue Tests
 * FIFO ordering and the non-circular capacity rule
 */

use clinic_records::{RecordError, VisitQueue};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::collections::VecDeque;

#[test]
fn test_enqueue_then_dequeue_same_id() {
    let mut queue = VisitQueue::new(10);
    queue.enqueue(42).unwrap();
    assert_eq!(queue.dequeue().unwrap(), 42);
    assert!(queue.is_empty());
}

#[test]
fn test_fill_overflow_and_drain() {
    const C: usize = 5;
    let mut queue = VisitQueue::new(C);
    for id in 0..C as u32 {
        queue.enqueue(id).unwrap();
    }
    assert!(queue.is_full());
    assert_eq!(queue.enqueue(99), Err(RecordError::QueueFull { capacity: C }));

    let drained: Vec<_> = std::iter::from_fn(|| queue.dequeue().ok()).collect();
    assert_eq!(drained, (0..C as u32).collect::<Vec<_>>());
    assert!(queue.is_empty());
    assert_eq!(queue.dequeue(), Err(RecordError::QueueEmpty));
}

#[test]
fn test_no_wraparound_while_pending() {
    let mut queue = VisitQueue::new(3);
    queue.enqueue(1).unwrap();
    queue.enqueue(2).unwrap();
    queue.enqueue(3).unwrap();
    queue.dequeue().unwrap();
    queue.dequeue().unwrap();

    // Two slots are free behind front, but rear is at the end
    assert_eq!(queue.len(), 1);
    assert_eq!(queue.enqueue(4), Err(RecordError::QueueFull { capacity: 3 }));
}

proptest! {
    #[test]
    fn prop_matches_bounded_model(
        capacity in 0usize..16,
        ops in prop::collection::vec(prop::option::of(any::<u32>()), 0..100),
    ) {
        let mut queue = VisitQueue::new(capacity);
        let mut model: VecDeque<u32> = VecDeque::new();
        // Next write position; resets only when the model drains
        let mut rear = 0usize;

        for op in ops {
            match op {
                Some(id) => {
                    let result = queue.enqueue(id);
                    if rear < capacity {
                        prop_assert!(result.is_ok());
                        model.push_back(id);
                        rear += 1;
                    } else {
                        prop_assert_eq!(result, Err(RecordError::QueueFull { capacity }));
                    }
                }
                None => {
                    let result = queue.dequeue();
                    match model.pop_front() {
                        Some(expected) => {
                            prop_assert_eq!(result, Ok(expected));
                            if model.is_empty() {
                                rear = 0;
                            }
                        }
                        None => prop_assert_eq!(result, Err(RecordError::QueueEmpty)),
                    }
                }
            }
            prop_assert_eq!(queue.len(), model.len());
            prop_assert_eq!(queue.is_empty(), model.is_empty());
            prop_assert_eq!(queue.iter().collect::<Vec<_>>(), model.iter().copied().collect::<Vec<_>>());
        }
    }
}
