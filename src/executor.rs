//! A fixed pool of worker threads servicing a shared FIFO job queue, used
//! to fan a per-seed mining subtree out across threads.
//!
//! Every seed's subtree is independent and roughly equally weighted, so
//! jobs are serviced in plain submission order rather than prioritized by
//! an estimated runtime.

use std::collections::VecDeque;
use std::panic;
use std::sync::{Arc, Condvar, Mutex};
use std::thread;

type Job = Box<dyn FnMut() + Send>;

struct Queue {
    jobs: Mutex<VecDeque<Job>>,
    work_cv: Condvar,
}

/// A bounded pool of worker threads servicing a shared FIFO job queue.
///
/// There is no shutdown signal; worker threads run until the process exits.
/// An `Executor` is built fresh for each parallel `mine` call and dropped
/// at the end of it, so the threads' lifetime is short in practice even
/// without one.
pub struct Executor {
    queue: Arc<Queue>,
}

impl Executor {
    /// Spin up `n_workers` threads, each given `stack_size` bytes of stack
    /// so that a deep recursive mining subtree cannot overflow it.
    pub fn new(n_workers: usize, stack_size: usize) -> Self {
        let queue = Arc::new(Queue {
            jobs: Mutex::new(VecDeque::new()),
            work_cv: Condvar::new(),
        });

        for _ in 0..n_workers {
            let queue = queue.clone();
            thread::Builder::new()
                .stack_size(stack_size)
                .spawn(move || loop {
                    let mut job = {
                        let mut jobs = queue.jobs.lock().unwrap();
                        while jobs.is_empty() {
                            jobs = queue.work_cv.wait(jobs).unwrap();
                        }
                        jobs.pop_front().unwrap()
                    };
                    job();
                })
                .expect("failed to spawn executor worker thread");
        }

        Executor { queue }
    }

    /// Queue `task`, returning a `Promise` for its result.
    ///
    /// If the task panics, the panic is caught here and rethrown from
    /// `Promise::wait` on whichever thread calls it.
    pub fn exec<T, F>(&self, task: F) -> Promise<T>
    where
        F: FnOnce() -> T + Send + 'static,
        T: Send + 'static,
    {
        let parts = Arc::new((Mutex::new(None), Condvar::new()));
        let parts_for_job = parts.clone();
        let mut task = Some(task);

        let job: Job = Box::new(move || {
            let taken = task.take().expect("job invoked more than once");
            let result = panic::catch_unwind(panic::AssertUnwindSafe(taken));
            *parts_for_job.0.lock().unwrap() = Some(result);
            parts_for_job.1.notify_one();
        });

        {
            let mut jobs = self.queue.jobs.lock().unwrap();
            jobs.push_back(job);
        }
        self.queue.work_cv.notify_one();

        Promise { parts }
    }
}

/// A handle for a value a worker thread will produce.
pub struct Promise<T> {
    parts: Arc<(Mutex<Option<thread::Result<T>>>, Condvar)>,
}

impl<T> Promise<T> {
    /// Block until the task completes, rethrowing any panic it raised.
    pub fn wait(self) -> T {
        let mut guard = self.parts.0.lock().unwrap();
        while guard.is_none() {
            guard = self.parts.1.wait(guard).unwrap();
        }
        match guard.take().unwrap() {
            Ok(value) => value,
            Err(payload) => panic::resume_unwind(payload),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_jobs_and_collects_results_in_submission_order() {
        let executor = Executor::new(4, 1024 * 1024);
        let promises: Vec<_> = (0..20).map(|i| executor.exec(move || i * i)).collect();
        let results: Vec<_> = promises.into_iter().map(Promise::wait).collect();
        assert_eq!(results, (0..20).map(|i| i * i).collect::<Vec<_>>());
    }

    #[test]
    #[should_panic(expected = "boom")]
    fn panics_in_a_job_are_rethrown_at_wait() {
        let executor = Executor::new(1, 1024 * 1024);
        let promise = executor.exec(|| -> i32 { panic!("boom") });
        promise.wait();
    }
}
