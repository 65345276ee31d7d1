//! Shared queue integration tests - both sides see one piece sequence

use tetris_duel::core::SharedQueue;
use tetris_duel::types::{Side, QUEUE_PRESEED};

#[test]
fn test_both_sides_start_preseeded() {
    let queue = SharedQueue::new(42);
    assert_eq!(queue.pending_len(Side::Human), QUEUE_PRESEED);
    assert_eq!(queue.pending_len(Side::Agent), QUEUE_PRESEED);
}

#[test]
fn test_sides_receive_identical_sequences() {
    let mut queue = SharedQueue::new(42);

    let human: Vec<_> = (0..30).map(|_| queue.consume(Side::Human)).collect();
    let agent: Vec<_> = (0..30).map(|_| queue.consume(Side::Agent)).collect();
    assert_eq!(human, agent);
}

#[test]
fn test_interleaved_consumption_preserves_position() {
    // Consuming at very different rates must not change what either side
    // sees at a given queue position.
    let mut reference = SharedQueue::new(7);
    let expected: Vec<_> = (0..40).map(|_| reference.consume(Side::Human)).collect();

    let mut queue = SharedQueue::new(7);
    let mut human = Vec::new();
    let mut agent = Vec::new();
    for i in 0..40 {
        human.push(queue.consume(Side::Human));
        // The agent side lags: one piece for every four human pieces.
        if i % 4 == 0 {
            agent.push(queue.consume(Side::Agent));
        }
    }

    assert_eq!(human, expected);
    assert_eq!(agent.as_slice(), &expected[..agent.len()]);
}

#[test]
fn test_same_seed_reproduces_the_sequence() {
    let mut a = SharedQueue::new(123);
    let mut b = SharedQueue::new(123);
    for _ in 0..50 {
        assert_eq!(a.consume(Side::Human), b.consume(Side::Human));
    }
}

#[test]
fn test_different_seeds_diverge() {
    let mut a = SharedQueue::new(1);
    let mut b = SharedQueue::new(2);
    let seq_a: Vec<_> = (0..30).map(|_| a.consume(Side::Human)).collect();
    let seq_b: Vec<_> = (0..30).map(|_| b.consume(Side::Human)).collect();
    assert_ne!(seq_a, seq_b);
}
