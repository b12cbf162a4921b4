/*!
 * FIFO Queue
 * Fixed-capacity, non-circular waiting queue of patient IDs
 */

use crate::core::errors::RecordError;
use crate::core::types::{PatientId, RecordResult};
use tracing::debug;

/// Waiting queue for patient visits
///
/// Elements are written at `rear + 1` and read at `front`. Slots before
/// `front` are not reused while the queue still holds pending entries: once
/// `rear` reaches the last slot, enqueues fail with [`RecordError::QueueFull`]
/// until every pending entry has been dequeued, at which point both cursors
/// reset and the full capacity is available again.
///
/// # Example
///
/// ```
/// use clinic_records::queue::VisitQueue;
///
/// let mut queue = VisitQueue::new(2);
/// queue.enqueue(7).unwrap();
/// queue.enqueue(9).unwrap();
/// assert!(queue.enqueue(11).is_err());
///
/// assert_eq!(queue.dequeue().unwrap(), 7);
/// assert_eq!(queue.dequeue().unwrap(), 9);
/// assert!(queue.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct VisitQueue {
    items: Box<[PatientId]>,
    /// `None` is the empty sentinel
    front: Option<usize>,
    rear: Option<usize>,
}

impl VisitQueue {
    /// Create an empty queue with `capacity` slots
    pub fn new(capacity: usize) -> Self {
        Self {
            items: vec![0; capacity].into_boxed_slice(),
            front: None,
            rear: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.items.len()
    }

    /// True iff `front` is the empty sentinel
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.front.is_none()
    }

    /// Number of pending entries
    #[must_use]
    pub fn len(&self) -> usize {
        match (self.front, self.rear) {
            (Some(front), Some(rear)) => rear - front + 1,
            _ => 0,
        }
    }

    /// True when the next enqueue would fail
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.next_rear() >= self.capacity()
    }

    fn next_rear(&self) -> usize {
        self.rear.map_or(0, |rear| rear + 1)
    }

    /// Append a patient ID at the rear
    pub fn enqueue(&mut self, id: PatientId) -> RecordResult<()> {
        let slot = self.next_rear();
        if slot >= self.capacity() {
            return Err(RecordError::QueueFull {
                capacity: self.capacity(),
            });
        }

        if self.front.is_none() {
            self.front = Some(0);
        }
        self.items[slot] = id;
        self.rear = Some(slot);

        debug!(patient_id = id, slot, pending = self.len(), "Patient queued");
        Ok(())
    }

    /// Take the patient ID at the front
    pub fn dequeue(&mut self) -> RecordResult<PatientId> {
        let (front, rear) = match (self.front, self.rear) {
            (Some(front), Some(rear)) => (front, rear),
            _ => return Err(RecordError::QueueEmpty),
        };

        let id = self.items[front];
        if front + 1 > rear {
            self.front = None;
            self.rear = None;
        } else {
            self.front = Some(front + 1);
        }

        debug!(patient_id = id, pending = self.len(), "Patient dequeued");
        Ok(id)
    }

    /// Pending IDs from front to rear
    pub fn iter(&self) -> impl Iterator<Item = PatientId> + '_ {
        let pending: &[PatientId] = match (self.front, self.rear) {
            (Some(front), Some(rear)) => &self.items[front..=rear],
            _ => &[],
        };
        pending.iter().copied()
    }

    /// Drop every pending entry and reset both cursors
    pub fn clear(&mut self) {
        self.front = None;
        self.rear = None;
    }
}
