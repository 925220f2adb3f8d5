//! A generic first-in, first-out queue.
//!
//! [`Queue`] hands elements back in exactly the order they were pushed in.
//! Popping an empty queue is not an error; it reports absence with `None`.

pub mod queue;
#[cfg(feature = "serde")]
mod serde_support;

pub use queue::{IntoIter, Iter, Queue};

#[cfg(test)]
mod tests {
    use crate::Queue;

    #[test]
    fn it_works() {
        let mut numbers = Queue::new();
        numbers.push(0);
        numbers.push(1);
        assert_eq!(numbers.pop(), Some(0));
        assert_eq!(numbers.pop(), Some(1));
        assert_eq!(numbers.pop(), None);

        let mut words = Queue::new();
        words.push("a");
        words.push("b");
        assert_eq!(words.pop(), Some("a"));
        assert_eq!(words.pop(), Some("b"));
        assert_eq!(words.pop(), None);
    }
}
