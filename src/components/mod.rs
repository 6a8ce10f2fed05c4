pub mod reveal;
pub mod scroll;

/// Owns the release side of a browser subscription (event listener,
/// intersection observer). The release action runs at most once: either
/// through an explicit `cancel` or when the guard is dropped, whichever
/// comes first.
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A guard with nothing to release, for the paths where the browser
    /// surface was never available (e.g. no `window`).
    pub fn empty() -> Self {
        Self { release: None }
    }

    pub fn cancel(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::Subscription;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counting() -> (Subscription, Rc<Cell<u32>>) {
        let released = Rc::new(Cell::new(0));
        let counter = released.clone();
        let sub = Subscription::new(move || counter.set(counter.get() + 1));
        (sub, released)
    }

    #[test]
    fn releases_exactly_once_on_drop() {
        let (sub, released) = counting();
        drop(sub);
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn cancel_is_idempotent() {
        let (mut sub, released) = counting();
        sub.cancel();
        sub.cancel();
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn drop_after_cancel_does_not_release_again() {
        let (mut sub, released) = counting();
        sub.cancel();
        drop(sub);
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn empty_guard_is_a_no_op() {
        let mut sub = Subscription::empty();
        sub.cancel();
    }
}
