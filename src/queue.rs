use std::collections::vec_deque;
use std::collections::VecDeque;
use std::iter::FusedIterator;

/// A first-in, first-out queue over a single element type.
///
/// Elements come back out in exactly the order they were pushed in, and
/// popping an empty queue reports absence with `None` instead of failing.
///
/// ```
/// let mut queue = fifo::Queue::new();
/// queue.push(0);
/// queue.push(1);
/// assert_eq!(queue.pop(), Some(0));
/// assert_eq!(queue.pop(), Some(1));
/// assert_eq!(queue.pop(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Queue<T> {
    qdata: VecDeque<T>,
}

impl<T> Queue<T> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Queue {
            qdata: VecDeque::new(),
        }
    }

    /// Creates an empty queue with space for at least `capacity` elements
    /// reserved. This is a preallocation hint only; the queue grows as
    /// needed and never rejects a push.
    pub fn with_capacity(capacity: usize) -> Self {
        Queue {
            qdata: VecDeque::with_capacity(capacity),
        }
    }

    /// Appends `item` at the tail of the queue.
    pub fn push(&mut self, item: T) {
        self.qdata.push_back(item);
    }

    /// Removes and returns the oldest element, or `None` if the queue is
    /// empty.
    pub fn pop(&mut self) -> Option<T> {
        self.qdata.pop_front()
    }

    /// Returns a reference to the oldest element without removing it, or
    /// `None` if the queue is empty.
    pub fn peek(&self) -> Option<&T> {
        self.qdata.front()
    }

    /// Returns the number of elements currently queued.
    pub fn len(&self) -> usize {
        self.qdata.len()
    }

    /// Returns `true` if the queue holds no elements.
    pub fn is_empty(&self) -> bool {
        self.qdata.is_empty()
    }

    /// Drops every queued element, leaving the queue empty.
    pub fn clear(&mut self) {
        self.qdata.clear();
    }

    /// Iterates over the queued elements from oldest to newest.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.qdata.iter(),
        }
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Queue::new()
    }
}

impl<T> From<Vec<T>> for Queue<T> {
    fn from(items: Vec<T>) -> Self {
        Queue {
            qdata: VecDeque::from(items),
        }
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Queue {
            qdata: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.qdata.extend(iter);
    }
}

impl<T> IntoIterator for Queue<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter {
            inner: self.qdata.into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// Borrowing iterator over a [`Queue`], oldest element first.
#[derive(Debug)]
pub struct Iter<'a, T> {
    inner: vec_deque::Iter<'a, T>,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator over a [`Queue`], oldest element first.
#[derive(Debug)]
pub struct IntoIter<T> {
    inner: vec_deque::IntoIter<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
