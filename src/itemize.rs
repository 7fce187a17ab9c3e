//! A pure, monotonic quantization function `u64 -> u64` turning raw
//! timestamps into comparable, discretized interval buckets.
//!
//! Mining treats `itemize` as opaque; it calls it whenever a raw interval
//! needs to be compared against an already-quantized bound. It is wrapped
//! in an enum rather than passed as a bare closure so that the worker pool
//! can distinguish a closure that is safe to move onto a worker thread from
//! one that is not, and fall back to serial execution rather than fail to
//! compile or panic at runtime.

use std::rc::Rc;
use std::sync::Arc;

/// An itemize function, either transferable across threads or not.
///
/// Most callers only ever construct `Itemize::Shared` (via `fixed_bucket`,
/// `log2_bucket`, or `Itemize::shared`); `Itemize::Local` exists for
/// closures that capture non-`Send` state (e.g. an `Rc<RefCell<_>>` cache)
/// and still want to use the engine in serial mode.
#[derive(Clone)]
pub enum Itemize {
    Shared(Arc<dyn Fn(u64) -> u64 + Send + Sync>),
    Local(Rc<dyn Fn(u64) -> u64>),
}

impl Itemize {
    /// Wrap a closure that can be safely shared across worker threads.
    pub fn shared<F>(f: F) -> Self
    where
        F: Fn(u64) -> u64 + Send + Sync + 'static,
    {
        Itemize::Shared(Arc::new(f))
    }

    /// Wrap a closure that must stay on the thread that created it.
    pub fn local<F>(f: F) -> Self
    where
        F: Fn(u64) -> u64 + 'static,
    {
        Itemize::Local(Rc::new(f))
    }

    /// Apply the itemize function to a raw interval.
    pub fn call(&self, raw: u64) -> u64 {
        match self {
            Itemize::Shared(f) => f(raw),
            Itemize::Local(f) => f(raw),
        }
    }

    /// Whether this itemize function can be moved onto a worker thread.
    pub fn is_transferable(&self) -> bool {
        matches!(self, Itemize::Shared(_))
    }

    /// The underlying transferable closure, if any.
    pub(crate) fn shared_fn(&self) -> Option<Arc<dyn Fn(u64) -> u64 + Send + Sync>> {
        match self {
            Itemize::Shared(f) => Some(f.clone()),
            Itemize::Local(_) => None,
        }
    }
}

/// Quantize by flooring division into fixed-size buckets.
///
/// Panics if `bucket_size` is zero.
pub fn fixed_bucket(bucket_size: u64) -> Itemize {
    assert!(bucket_size > 0, "bucket_size must be positive");
    Itemize::shared(move |t| t / bucket_size)
}

/// Quantize by `floor(log2(t + 1))`, giving exponentially widening buckets.
pub fn log2_bucket() -> Itemize {
    Itemize::shared(|t| (t + 1).ilog2() as u64)
}
