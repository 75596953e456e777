use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

struct Inner<T> {
    value: T,
    subscribers: Vec<Sender<T>>,
}

/// A shared value holder that pushes every new value to its subscribers.
///
/// Subscribers whose receiver has been dropped are pruned on the next `set`.
pub struct Observable<T> {
    inner: Arc<Mutex<Inner<T>>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Clone + Send> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                value,
                subscribers: Vec::new(),
            })),
        }
    }

    pub fn get(&self) -> T {
        self.lock().value.clone()
    }

    pub fn set(&self, value: T) {
        let mut inner = self.lock();
        inner.value = value.clone();
        inner
            .subscribers
            .retain(|subscriber| subscriber.send(value.clone()).is_ok());
    }

    pub fn subscribe(&self) -> Receiver<T> {
        let (sender, receiver) = channel();
        self.lock().subscribers.push(sender);
        receiver
    }

    pub fn subscriber_count(&self) -> usize {
        self.lock().subscribers.len()
    }

    fn lock(&self) -> MutexGuard<'_, Inner<T>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_returns_initial_value() {
        let observable = Observable::new(7);
        assert_eq!(observable.get(), 7);
    }

    #[test]
    fn test_set_notifies_every_subscriber() {
        let observable = Observable::new("idle".to_string());
        let first = observable.subscribe();
        let second = observable.subscribe();

        observable.set("ready".to_string());

        assert_eq!(observable.get(), "ready");
        assert_eq!(first.try_recv().unwrap(), "ready");
        assert_eq!(second.try_recv().unwrap(), "ready");
    }

    #[test]
    fn test_subscriber_only_sees_values_set_after_subscribing() {
        let observable = Observable::new(0);
        observable.set(1);
        let receiver = observable.subscribe();

        assert!(receiver.try_recv().is_err());

        observable.set(2);
        assert_eq!(receiver.try_recv().unwrap(), 2);
    }

    #[test]
    fn test_dropped_subscribers_are_pruned() {
        let observable = Observable::new(0);
        let kept = observable.subscribe();
        drop(observable.subscribe());
        assert_eq!(observable.subscriber_count(), 2);

        observable.set(1);

        assert_eq!(observable.subscriber_count(), 1);
        assert_eq!(kept.try_recv().unwrap(), 1);
    }

    #[test]
    fn test_clones_share_state() {
        let observable = Observable::new(0);
        let clone = observable.clone();
        let receiver = observable.subscribe();

        clone.set(5);

        assert_eq!(observable.get(), 5);
        assert_eq!(receiver.try_recv().unwrap(), 5);
    }
}
