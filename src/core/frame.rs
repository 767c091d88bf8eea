/// Opaque handle to a scheduled frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(u64);

impl FrameHandle {
    pub(crate) fn new(id: u64) -> FrameHandle {
        FrameHandle(id)
    }
}

/// Host capability for running a tick on the next display refresh.
/// Abstracting it keeps the loop controller testable without a real
/// refresh source.
pub trait FrameScheduler {
    /// Requests a tick on the next frame and returns a cancellable handle.
    fn schedule_tick(&mut self) -> FrameHandle;

    /// Cancels a previously scheduled tick. Schedulers that cannot revoke
    /// a request may fire it anyway; the controller drops ticks that
    /// arrive with no pending handle.
    fn cancel_tick(&mut self, handle: FrameHandle);
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    use super::{FrameHandle, FrameScheduler};

    #[derive(Default)]
    struct SchedulerState {
        next_id: u64,
        pending: VecDeque<FrameHandle>,
        cancelled: Vec<FrameHandle>,
    }

    /// Manually-driven frame queue. Clones share state, so a test keeps
    /// one handle to fire and inspect frames while the controller owns
    /// another.
    #[derive(Clone, Default)]
    pub struct ManualScheduler {
        state: Rc<RefCell<SchedulerState>>,
    }

    impl ManualScheduler {
        pub fn new() -> ManualScheduler {
            ManualScheduler::default()
        }

        pub fn pending_count(&self) -> usize {
            self.state.borrow().pending.len()
        }

        pub fn cancelled_count(&self) -> usize {
            self.state.borrow().cancelled.len()
        }

        /// Pops the oldest scheduled frame, as if the display refreshed.
        pub fn fire_next(&self) -> Option<FrameHandle> {
            self.state.borrow_mut().pending.pop_front()
        }
    }

    impl FrameScheduler for ManualScheduler {
        fn schedule_tick(&mut self) -> FrameHandle {
            let mut state = self.state.borrow_mut();
            state.next_id += 1;
            let handle = FrameHandle::new(state.next_id);
            state.pending.push_back(handle);
            handle
        }

        fn cancel_tick(&mut self, handle: FrameHandle) {
            let mut state = self.state.borrow_mut();
            state.pending.retain(|pending| *pending != handle);
            state.cancelled.push(handle);
        }
    }
}
