use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex},
    time::Duration,
};

type Release = Box<dyn FnOnce() + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SubscriptionKey(u64);

#[derive(Default)]
pub struct Subscriptions {
    next_key: u64,
    active: BTreeMap<SubscriptionKey, Release>,
    released: bool,
}

pub type SharedSubscriptions = Arc<Mutex<Subscriptions>>;

impl Subscriptions {
    pub fn reserve(&mut self) -> SubscriptionKey {
        let key = SubscriptionKey(self.next_key);
        self.next_key += 1;
        key
    }

    pub fn attach<F>(&mut self, key: SubscriptionKey, release: F)
    where
        F: FnOnce() + Send + Sync + 'static,
    {
        if self.released {
            release();
        } else {
            self.active.insert(key, Box::new(release));
        }
    }

    pub fn hold<F>(&mut self, release: F) -> SubscriptionKey
    where
        F: FnOnce() + Send + Sync + 'static,
    {
        let key = self.reserve();
        self.attach(key, release);
        key
    }

    pub fn forget(&mut self, key: SubscriptionKey) -> bool {
        self.active.remove(&key).is_some()
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn is_released(&self) -> bool {
        self.released
    }

    pub fn release_all(&mut self) {
        self.released = true;
        for (_, release) in std::mem::take(&mut self.active) {
            release();
        }
    }
}

impl Drop for Subscriptions {
    fn drop(&mut self) {
        self.release_all();
    }
}

pub trait Timer {
    type Handle: Send + Sync + 'static;

    fn start<F>(&self, delay: Duration, fire: F) -> Option<Self::Handle>
    where
        F: FnOnce() + 'static;

    fn cancel(handle: Self::Handle);
}

/// Runs `f` after `delay` unless `scope` is released first. A timer that
/// fires drops its own entry.
pub fn schedule<T, F>(scope: &SharedSubscriptions, timer: &T, delay: Duration, f: F)
where
    T: Timer + 'static,
    F: FnOnce() + 'static,
{
    let Ok(mut subs) = scope.lock() else {
        return;
    };
    if subs.is_released() {
        return;
    }
    let key = subs.reserve();
    let fired = Arc::clone(scope);
    let handle = timer.start(delay, move || {
        if let Ok(mut subs) = fired.lock() {
            subs.forget(key);
        }
        f();
    });
    match handle {
        Some(handle) => subs.attach(key, move || T::cancel(handle)),
        None => log::warn!("timer not scheduled"),
    }
}

#[cfg(test)]
pub(crate) use manual::ManualTimer;

#[cfg(test)]
mod manual {
    use std::{
        cell::RefCell,
        rc::Rc,
        sync::{
            atomic::{AtomicBool, Ordering},
            Arc,
        },
        time::Duration,
    };

    use super::Timer;

    struct Pending {
        remaining: Duration,
        cancelled: Arc<AtomicBool>,
        fire: Box<dyn FnOnce()>,
    }

    /// Timer driven by hand: nothing fires until `advance`.
    #[derive(Clone, Default)]
    pub(crate) struct ManualTimer {
        queue: Rc<RefCell<Vec<Pending>>>,
    }

    impl ManualTimer {
        /// Fires every live timer due within `by`, earliest first.
        pub(crate) fn advance(&self, by: Duration) -> usize {
            let mut due = {
                let mut queue = self.queue.borrow_mut();
                let mut due = Vec::new();
                let mut rest = Vec::new();
                for mut p in queue.drain(..) {
                    if p.cancelled.load(Ordering::SeqCst) {
                        continue;
                    }
                    if p.remaining <= by {
                        due.push(p);
                    } else {
                        p.remaining -= by;
                        rest.push(p);
                    }
                }
                *queue = rest;
                due
            };
            due.sort_by_key(|p| p.remaining);
            let fired = due.len();
            for p in due {
                (p.fire)();
            }
            fired
        }

        pub(crate) fn pending(&self) -> usize {
            self.queue
                .borrow()
                .iter()
                .filter(|p| !p.cancelled.load(Ordering::SeqCst))
                .count()
        }
    }

    impl Timer for ManualTimer {
        type Handle = Arc<AtomicBool>;

        fn start<F>(&self, delay: Duration, fire: F) -> Option<Self::Handle>
        where
            F: FnOnce() + 'static,
        {
            let cancelled = Arc::new(AtomicBool::new(false));
            self.queue.borrow_mut().push(Pending {
                remaining: delay,
                cancelled: Arc::clone(&cancelled),
                fire: Box::new(fire),
            });
            Some(cancelled)
        }

        fn cancel(handle: Self::Handle) {
            handle.store(true, Ordering::SeqCst);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicI32, Ordering};

    // stands in for document.addEventListener/removeEventListener
    fn listen(count: &Arc<AtomicI32>) -> impl FnOnce() + Send + Sync + 'static {
        count.fetch_add(1, Ordering::SeqCst);
        let count = count.clone();
        move || {
            count.fetch_sub(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_release_detaches_every_listener() {
        let listeners = Arc::new(AtomicI32::new(0));
        let mut subs = Subscriptions::default();
        for _ in 0..4 {
            subs.hold(listen(&listeners));
        }
        assert_eq!(listeners.load(Ordering::SeqCst), 4);
        assert_eq!(subs.len(), 4);

        subs.release_all();
        assert_eq!(listeners.load(Ordering::SeqCst), 0);
        assert!(subs.is_empty());

        // second release is a no-op
        subs.release_all();
        assert_eq!(listeners.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_drop_releases() {
        let listeners = Arc::new(AtomicI32::new(0));
        {
            let mut subs = Subscriptions::default();
            subs.hold(listen(&listeners));
            subs.hold(listen(&listeners));
        }
        assert_eq!(listeners.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_forgotten_entries_do_not_run() {
        let cancelled = Arc::new(AtomicI32::new(0));
        let mut subs = Subscriptions::default();
        let key = subs.reserve();
        let c = cancelled.clone();
        subs.attach(key, move || {
            c.fetch_add(1, Ordering::SeqCst);
        });
        assert!(subs.forget(key));
        assert!(!subs.forget(key));
        subs.release_all();
        assert_eq!(cancelled.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_attach_after_release_runs_immediately() {
        let listeners = Arc::new(AtomicI32::new(0));
        let mut subs = Subscriptions::default();
        subs.release_all();
        subs.hold(listen(&listeners));
        assert_eq!(listeners.load(Ordering::SeqCst), 0);
        assert!(subs.is_empty());
        assert!(subs.is_released());
    }

    #[test]
    fn test_fired_timer_forgets_itself() {
        let scope = SharedSubscriptions::default();
        let timer = ManualTimer::default();
        let fired = Arc::new(AtomicI32::new(0));

        let f = fired.clone();
        schedule(&scope, &timer, Duration::from_millis(50), move || {
            f.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(scope.lock().unwrap().len(), 1);

        assert_eq!(timer.advance(Duration::from_millis(49)), 0);
        assert_eq!(timer.advance(Duration::from_millis(1)), 1);
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert!(scope.lock().unwrap().is_empty());
    }

    #[test]
    fn test_release_cancels_pending_timers() {
        let scope = SharedSubscriptions::default();
        let timer = ManualTimer::default();
        let fired = Arc::new(AtomicI32::new(0));

        for ms in [50, 150, 1000] {
            let f = fired.clone();
            schedule(&scope, &timer, Duration::from_millis(ms), move || {
                f.fetch_add(1, Ordering::SeqCst);
            });
        }
        assert_eq!(timer.advance(Duration::from_millis(100)), 1);
        assert_eq!(scope.lock().unwrap().len(), 2);

        scope.lock().unwrap().release_all();
        assert_eq!(timer.pending(), 0);
        assert_eq!(timer.advance(Duration::from_secs(5)), 0);
        assert_eq!(fired.load(Ordering::SeqCst), 1);

        // nothing new starts once released
        schedule(&scope, &timer, Duration::from_millis(1), || {});
        assert_eq!(timer.pending(), 0);
    }
}
