//! Signal - the observable cell the router publishes its state through.
//!
//! `Signal<T>` holds a value and notifies subscribers when it changes.
//! It is deliberately small, with no dependency graph and no effects; the only
//! consumers here are the router's current-path/params/route-name cells,
//! which are recomputed (not transitioned) on every navigation event.
//!
//! ## Example
//!
//! ```
//! use fruit_posts::reactive::Signal;
//!
//! let count = Signal::new(0);
//! assert_eq!(count.get(), 0);
//!
//! count.set(42);
//! assert_eq!(count.get(), 42);
//!
//! count.update(|n| *n += 1);
//! assert_eq!(count.get(), 43);
//! ```

use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

/// Type alias for subscriber callbacks.
type SubscriberFn<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// A reactive cell that holds a value and notifies subscribers on change.
///
/// `Signal<T>` implements `Clone` and shares the value via
/// `Arc<RwLock<T>>`. All clones of the same Signal share the same
/// underlying value and subscriber list.
pub struct Signal<T> {
	/// The current value, shared across clones.
	value: Arc<RwLock<T>>,
	/// Subscribers notified after every `set`/`update`.
	subscribers: Arc<RwLock<Vec<SubscriberFn<T>>>>,
}

impl<T> Clone for Signal<T> {
	fn clone(&self) -> Self {
		Self {
			value: Arc::clone(&self.value),
			subscribers: Arc::clone(&self.subscribers),
		}
	}
}

impl<T> Signal<T> {
	/// Creates a new Signal with the given initial value.
	pub fn new(value: T) -> Self {
		Self {
			value: Arc::new(RwLock::new(value)),
			subscribers: Arc::new(RwLock::new(Vec::new())),
		}
	}

	/// Returns a clone of the current value.
	pub fn get(&self) -> T
	where
		T: Clone,
	{
		self.value.read().clone()
	}

	/// Reads the current value through a closure without cloning.
	pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
		f(&self.value.read())
	}

	/// Sets the signal to a new value and notifies subscribers.
	pub fn set(&self, value: T)
	where
		T: Clone,
	{
		*self.value.write() = value;
		self.notify();
	}

	/// Updates the value in place and notifies subscribers once.
	pub fn update<F>(&self, f: F)
	where
		F: FnOnce(&mut T),
		T: Clone,
	{
		f(&mut self.value.write());
		self.notify();
	}

	/// Registers a callback invoked after every change.
	///
	/// The callback runs synchronously on the thread performing the
	/// change, with a snapshot of the new value taken after the locks are
	/// released. A subscriber may set the signal again.
	pub fn subscribe<F>(&self, f: F)
	where
		F: Fn(&T) + Send + Sync + 'static,
	{
		self.subscribers.write().push(Arc::new(f));
	}

	// Subscribers run against snapshots, never under a lock: a callback
	// that sets this signal again must not self-deadlock.
	fn notify(&self)
	where
		T: Clone,
	{
		let value = self.value.read().clone();
		let subscribers = self.subscribers.read().clone();
		for subscriber in &subscribers {
			subscriber(&value);
		}
	}
}

impl<T: fmt::Debug> fmt::Debug for Signal<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Signal")
			.field("value", &*self.value.read())
			.field("subscribers", &self.subscribers.read().len())
			.finish()
	}
}

impl<T: Default> Default for Signal<T> {
	fn default() -> Self {
		Self::new(T::default())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::sync::atomic::{AtomicUsize, Ordering};

	#[test]
	fn test_signal_creation() {
		let signal = Signal::new(42);
		assert_eq!(signal.get(), 42);
	}

	#[test]
	fn test_signal_set() {
		let signal = Signal::new(0);
		signal.set(100);
		assert_eq!(signal.get(), 100);
	}

	#[test]
	fn test_signal_update() {
		let signal = Signal::new(0);
		signal.update(|n| *n += 1);
		signal.update(|n| *n *= 2);
		assert_eq!(signal.get(), 2);
	}

	#[test]
	fn test_signal_clone_shares_value() {
		let signal1 = Signal::new(42);
		let signal2 = signal1.clone();

		signal1.set(100);
		assert_eq!(signal2.get(), 100);
	}

	#[test]
	fn test_signal_with() {
		let signal = Signal::new("hello".to_string());
		assert_eq!(signal.with(|s| s.len()), 5);
	}

	#[test]
	fn test_subscribers_notified() {
		let signal = Signal::new(0);
		let calls = Arc::new(AtomicUsize::new(0));

		let counter = Arc::clone(&calls);
		signal.subscribe(move |_| {
			counter.fetch_add(1, Ordering::SeqCst);
		});

		signal.set(1);
		signal.update(|n| *n += 1);
		assert_eq!(calls.load(Ordering::SeqCst), 2);
	}

	#[test]
	fn test_subscriber_may_set_again() {
		let signal = Signal::new(0);
		let inner = signal.clone();
		signal.subscribe(move |v| {
			if *v == 1 {
				inner.set(2);
			}
		});

		signal.set(1);
		assert_eq!(signal.get(), 2);
	}

	#[test]
	fn test_subscriber_sees_new_value() {
		let signal = Signal::new(0);
		let seen = Arc::new(AtomicUsize::new(0));

		let sink = Arc::clone(&seen);
		signal.subscribe(move |v| {
			sink.store(*v, Ordering::SeqCst);
		});

		signal.set(7);
		assert_eq!(seen.load(Ordering::SeqCst), 7);
	}
}
