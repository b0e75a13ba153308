//! Book-keeping of abortable requests keyed by the record they belong to.

use std::collections::HashMap;
use std::hash::Hash;

/// Something that can abort the work it stands for
pub trait Abort {
    fn abort(&self);
}

/// Running requests by key
#[derive(Debug)]
pub struct InFlight<K, H> {
    handles: HashMap<K, H>,
}

impl<K, H> Default for InFlight<K, H> {
    fn default() -> Self {
        Self {
            handles: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash, H: Abort> InFlight<K, H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn track(&mut self, key: K, handle: H) {
        self.handles.insert(key, handle);
    }

    /// Forget a request that finished on its own
    pub fn settle(&mut self, key: &K) {
        self.handles.remove(key);
    }

    /// Abort and forget the request for `key`; false if none was running
    pub fn abort(&mut self, key: &K) -> bool {
        match self.handles.remove(key) {
            Some(handle) => {
                handle.abort();
                true
            }
            None => false,
        }
    }

    pub fn abort_all(&mut self) {
        for (_, handle) in self.handles.drain() {
            handle.abort();
        }
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct FakeHandle(Rc<Cell<bool>>);

    impl Abort for FakeHandle {
        fn abort(&self) {
            self.0.set(true);
        }
    }

    impl FakeHandle {
        fn aborted(&self) -> bool {
            self.0.get()
        }
    }

    #[test]
    fn test_abort_hits_only_that_request() {
        let (a, b) = (FakeHandle::default(), FakeHandle::default());
        let mut in_flight = InFlight::new();
        in_flight.track(1, a.clone());
        in_flight.track(2, b.clone());

        assert!(in_flight.abort(&1));
        assert!(a.aborted());
        assert!(!b.aborted());
        assert_eq!(in_flight.len(), 1);
    }

    #[test]
    fn test_abort_after_settle_is_a_no_op() {
        let handle = FakeHandle::default();
        let mut in_flight = InFlight::new();
        in_flight.track(1, handle.clone());
        in_flight.settle(&1);

        assert!(!in_flight.abort(&1));
        assert!(!handle.aborted());
        assert!(in_flight.is_empty());
    }

    #[test]
    fn test_abort_all_drains() {
        let handles = [FakeHandle::default(), FakeHandle::default()];
        let mut in_flight = InFlight::new();
        for (key, handle) in handles.iter().enumerate() {
            in_flight.track(key, handle.clone());
        }

        in_flight.abort_all();
        assert!(handles.iter().all(FakeHandle::aborted));
        assert!(in_flight.is_empty());
    }
}
