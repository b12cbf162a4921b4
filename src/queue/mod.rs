/*!
 * Waiting Queue
 * Transient visit ordering used by the queue management session
 */

mod fifo;

pub use fifo::VisitQueue;
