//! A cancellable periodic task on a background thread.

use std::{
    io,
    sync::mpsc::{self, RecvTimeoutError, Sender},
    thread::{self, JoinHandle},
    time::Duration,
};

use log::warn;

/// Calls a closure at a fixed interval until stopped.
///
/// The cleanup closure runs exactly once on the worker thread after the
/// last tick, also when a tick panics. [`Ticker::stop`] (or dropping the
/// ticker) wakes the worker immediately and waits for it to finish.
pub struct Ticker {
    shutdown: Option<Sender<()>>,
    worker: Option<JoinHandle<()>>,
}

impl Ticker {
    /// Starts ticking. `tick` receives the number of earlier ticks.
    pub fn spawn<T, C>(interval: Duration, mut tick: T, cleanup: C) -> io::Result<Self>
    where
        T: FnMut(usize) + Send + 'static,
        C: FnOnce() + Send + 'static,
    {
        let (shutdown, rx) = mpsc::channel::<()>();
        let worker = thread::Builder::new()
            .name("termprompt-ticker".to_string())
            .spawn(move || {
                let _cleanup = OnExit(Some(cleanup));
                let mut count = 0usize;
                loop {
                    tick(count);
                    count = count.wrapping_add(1);
                    match rx.recv_timeout(interval) {
                        Err(RecvTimeoutError::Timeout) => {}
                        Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    }
                }
            })?;

        Ok(Self {
            shutdown: Some(shutdown),
            worker: Some(worker),
        })
    }

    /// Stops ticking and waits for the cleanup to finish.
    pub fn stop(mut self) {
        self.shutdown_and_join();
    }

    fn shutdown_and_join(&mut self) {
        // Disconnecting wakes the worker even if a send would be missed
        drop(self.shutdown.take());
        if let Some(worker) = self.worker.take()
            && worker.join().is_err()
        {
            warn!("ticker thread panicked");
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.shutdown_and_join();
    }
}

struct OnExit<C: FnOnce()>(Option<C>);

impl<C: FnOnce()> Drop for OnExit<C> {
    fn drop(&mut self) {
        if let Some(cleanup) = self.0.take() {
            cleanup();
        }
    }
}
