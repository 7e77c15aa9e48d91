//! Worker pool whose width follows the sizing policy.
//!
//! Building a Rayon pool spawns OS threads, so the pool is only rebuilt when
//! the requested width actually changes.  With fixed populations that means
//! one build per run.

use tracing::trace;

use crate::SimResult;

/// The thread pool the per-tick engines run on.
///
/// `None` inside means "use Rayon's global pool" (fixed mode without an
/// explicit thread count).  Without the `parallel` feature only the width is
/// tracked and work runs on the calling thread.
pub struct WorkerPool {
    #[cfg(feature = "parallel")]
    pool: Option<rayon::ThreadPool>,
    width: usize,
}

impl WorkerPool {
    /// A pool of exactly `width` workers.
    pub fn sized(width: usize) -> SimResult<Self> {
        Ok(Self {
            #[cfg(feature = "parallel")]
            pool: Some(build_pool(width)?),
            width,
        })
    }

    /// A pool for fixed mode: `Some(n)` builds a dedicated `n`-worker pool,
    /// `None` borrows Rayon's global pool.
    pub fn fixed(num_threads: Option<usize>) -> SimResult<Self> {
        match num_threads {
            Some(n) => Self::sized(n),
            None => Ok(Self {
                #[cfg(feature = "parallel")]
                pool: None,
                width: default_width(),
            }),
        }
    }

    /// Current fan-out.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Ensure the pool is exactly `width` wide.  Returns `true` if it was
    /// rebuilt.
    pub fn resize(&mut self, width: usize) -> SimResult<bool> {
        #[cfg(feature = "parallel")]
        let unchanged = self.width == width && self.pool.is_some();
        #[cfg(not(feature = "parallel"))]
        let unchanged = self.width == width;

        if unchanged {
            return Ok(false);
        }
        trace!(from = self.width, to = width, "resizing worker pool");
        #[cfg(feature = "parallel")]
        {
            self.pool = Some(build_pool(width)?);
        }
        self.width = width;
        Ok(true)
    }

    /// Run `op` with this pool as the current Rayon pool.
    pub fn install<R, OP>(&self, op: OP) -> R
    where
        OP: FnOnce() -> R + Send,
        R: Send,
    {
        #[cfg(feature = "parallel")]
        {
            match &self.pool {
                Some(pool) => pool.install(op),
                None => op(),
            }
        }

        #[cfg(not(feature = "parallel"))]
        {
            op()
        }
    }
}

#[cfg(feature = "parallel")]
fn build_pool(width: usize) -> SimResult<rayon::ThreadPool> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(width)
        .thread_name(|i| format!("ringroad-worker-{i}"))
        .build()?;
    Ok(pool)
}

#[cfg(feature = "parallel")]
fn default_width() -> usize {
    rayon::current_num_threads()
}

#[cfg(not(feature = "parallel"))]
fn default_width() -> usize {
    1
}
