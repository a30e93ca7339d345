//! Handler abstraction for courier.
//!
//! A handler is an opaque unit of behavior invoked once per dispatched
//! message. The router holds handlers behind `Arc<dyn Handler<M>>` and
//! never inspects or constructs them.

/// A subscriber's unit of behavior, invoked during dispatch.
///
/// Implemented automatically for any `Fn(&M) + Send + Sync` closure, so
/// most callers never implement this trait by hand; implement it directly
/// when the subscriber carries its own state or needs a nameable type.
pub trait Handler<M>: Send + Sync {
    /// Process one dispatched message.
    fn handle(&self, message: &M);
}

impl<M, F> Handler<M> for F
where
    F: Fn(&M) + Send + Sync,
{
    fn handle(&self, message: &M) {
        self(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct Counter(Arc<AtomicUsize>);

    impl Handler<u32> for Counter {
        fn handle(&self, _message: &u32) {
            self.0.fetch_add(1, Ordering::Relaxed);
        }
    }

    #[test]
    fn test_struct_handler() {
        let hits = Arc::new(AtomicUsize::new(0));
        let handler = Counter(Arc::clone(&hits));

        handler.handle(&7);
        handler.handle(&8);
        assert_eq!(hits.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn test_closure_handler() {
        let hits = Arc::new(AtomicUsize::new(0));
        let captured = Arc::clone(&hits);
        let handler = move |message: &u32| {
            assert_eq!(*message, 42);
            captured.fetch_add(1, Ordering::Relaxed);
        };

        handler.handle(&42);
        assert_eq!(hits.load(Ordering::Relaxed), 1);
    }
}
