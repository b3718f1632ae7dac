// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Suspension points.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

/// Hand control back to whoever is driving the task.
///
/// `suspend().await` inside a task body is one suspension point: the
/// current `resume()` returns `true`, and the next one continues right
/// after the `.await`.
pub fn suspend() -> Suspend {
    Suspend { yielded: false }
}

/// Future returned by [`suspend`]. Pending on the first poll, ready on
/// the second.
#[derive(Debug)]
#[must_use = "futures do nothing unless awaited"]
pub struct Suspend {
    yielded: bool,
}

impl Future for Suspend {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.yielded {
            return Poll::Ready(());
        }
        self.yielded = true;
        // Ask to be polled again, so the future also behaves under a real
        // executor.
        cx.waker().wake_by_ref();
        Poll::Pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::task::{Wake, Waker};

    struct CountingWaker(AtomicUsize);

    impl Wake for CountingWaker {
        fn wake(self: Arc<Self>) {
            self.wake_by_ref();
        }

        fn wake_by_ref(self: &Arc<Self>) {
            self.0.fetch_add(1, Ordering::Relaxed);
        }
    }

    #[test]
    fn pending_once_then_ready() {
        let counter = Arc::new(CountingWaker(AtomicUsize::new(0)));
        let waker = Waker::from(counter.clone());
        let mut cx = Context::from_waker(&waker);

        let mut fut = suspend();
        assert!(Pin::new(&mut fut).poll(&mut cx).is_pending());
        assert!(Pin::new(&mut fut).poll(&mut cx).is_ready());
        assert!(Pin::new(&mut fut).poll(&mut cx).is_ready());
        assert_eq!(counter.0.load(Ordering::Relaxed), 1);
    }
}
