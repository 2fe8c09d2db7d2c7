//! Monotonic timestamps for the measurement harness.
//!
//! The best primitive the host exposes is probed exactly once, at first
//! use, and reused for every later call: on Unix that is
//! `clock_gettime(CLOCK_MONOTONIC)` (nanosecond class), degrading to
//! `gettimeofday` (microsecond class) and finally `time` (second class)
//! if the better calls are unavailable. Other hosts get a
//! `std::time::Instant` anchor, which is monotonic by construction.
//!
//! Timestamps are seconds as `f64`; only differences between two
//! timestamps from the same process are meaningful.

use std::sync::OnceLock;

/// Resolution class of the selected time source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    Nanosecond,
    Microsecond,
    Second,
}

impl Resolution {
    pub fn label(self) -> &'static str {
        match self {
            Resolution::Nanosecond => "ns",
            Resolution::Microsecond => "us",
            Resolution::Second => "s",
        }
    }
}

/// The process-wide time source, fixed after the first probe.
pub struct Clock {
    source: platform::Source,
}

static CLOCK: OnceLock<Clock> = OnceLock::new();

/// The shared clock instance (probed on first use).
pub fn clock() -> &'static Clock {
    CLOCK.get_or_init(Clock::probe)
}

/// Current timestamp in seconds from the shared clock.
#[inline]
pub fn timestamp() -> f64 {
    clock().now()
}

impl Clock {
    fn probe() -> Self {
        Clock {
            source: platform::probe(),
        }
    }

    #[inline]
    pub fn now(&self) -> f64 {
        platform::now(self.source)
    }

    pub fn resolution(&self) -> Resolution {
        platform::resolution(self.source)
    }
}

// ============================================================================
// Unix implementation using libc
// ============================================================================

#[cfg(unix)]
mod platform {
    use super::Resolution;

    #[derive(Clone, Copy)]
    pub enum Source {
        /// clock_gettime(CLOCK_MONOTONIC)
        Monotonic,
        /// gettimeofday
        Realtime,
        /// time(NULL), whole seconds
        Coarse,
    }

    pub fn probe() -> Source {
        let mut ts: libc::timespec = unsafe { std::mem::zeroed() };
        if unsafe { libc::clock_gettime(libc::CLOCK_MONOTONIC, &mut ts) } == 0 {
            return Source::Monotonic;
        }

        let mut tv: libc::timeval = unsafe { std::mem::zeroed() };
        if unsafe { libc::gettimeofday(&mut tv, std::ptr::null_mut()) } == 0 {
            return Source::Realtime;
        }

        Source::Coarse
    }

    pub fn now(source: Source) -> f64 {
        match source {
            Source::Monotonic => {
                let mut ts: libc::timespec = unsafe { std::mem::zeroed() };
                if unsafe { libc::clock_gettime(libc::CLOCK_MONOTONIC, &mut ts) } == 0 {
                    ts.tv_sec as f64 + ts.tv_nsec as f64 / 1e9
                } else {
                    realtime_now()
                }
            }
            Source::Realtime => realtime_now(),
            Source::Coarse => unsafe { libc::time(std::ptr::null_mut()) as f64 },
        }
    }

    fn realtime_now() -> f64 {
        let mut tv: libc::timeval = unsafe { std::mem::zeroed() };
        if unsafe { libc::gettimeofday(&mut tv, std::ptr::null_mut()) } == 0 {
            tv.tv_sec as f64 + tv.tv_usec as f64 / 1e6
        } else {
            unsafe { libc::time(std::ptr::null_mut()) as f64 }
        }
    }

    pub fn resolution(source: Source) -> Resolution {
        match source {
            Source::Monotonic => Resolution::Nanosecond,
            Source::Realtime => Resolution::Microsecond,
            Source::Coarse => Resolution::Second,
        }
    }
}

// ============================================================================
// Fallback implementation for non-Unix hosts
// ============================================================================

#[cfg(not(unix))]
mod platform {
    use super::Resolution;
    use std::sync::OnceLock;
    use std::time::Instant;

    #[derive(Clone, Copy)]
    pub enum Source {
        Anchor,
    }

    static ANCHOR: OnceLock<Instant> = OnceLock::new();

    pub fn probe() -> Source {
        ANCHOR.get_or_init(Instant::now);
        Source::Anchor
    }

    pub fn now(_source: Source) -> f64 {
        ANCHOR.get_or_init(Instant::now).elapsed().as_secs_f64()
    }

    pub fn resolution(_source: Source) -> Resolution {
        Resolution::Nanosecond
    }
}
