//! CPU pinning for stable measurements.
//!
//! Pinning the thread to the core it is already running on keeps the
//! scheduler from migrating it mid-measurement. Linux only; on other
//! platforms the guard is a no-op and measurements simply run unpinned.

// ============================================================================
// Linux implementation using libc
// ============================================================================

#[cfg(target_os = "linux")]
mod platform {
    use std::cell::RefCell;

    thread_local! {
        static ORIGINAL_AFFINITY: RefCell<Option<libc::cpu_set_t>> = const { RefCell::new(None) };
    }

    /// Save the current affinity mask and pin to the current core.
    pub fn pin_to_current_core() -> bool {
        unsafe {
            let cpu = libc::sched_getcpu();
            if cpu < 0 {
                return false;
            }

            let mut original: libc::cpu_set_t = std::mem::zeroed();
            if libc::sched_getaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &mut original)
                != 0
            {
                return false;
            }

            let mut pinned: libc::cpu_set_t = std::mem::zeroed();
            libc::CPU_ZERO(&mut pinned);
            libc::CPU_SET(cpu as usize, &mut pinned);
            if libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &pinned) != 0 {
                return false;
            }

            ORIGINAL_AFFINITY.with(|cell| {
                *cell.borrow_mut() = Some(original);
            });
            true
        }
    }

    /// Restore the affinity mask saved by `pin_to_current_core`.
    pub fn unpin() {
        ORIGINAL_AFFINITY.with(|cell| {
            if let Some(original) = cell.borrow_mut().take() {
                unsafe {
                    libc::sched_setaffinity(
                        0,
                        std::mem::size_of::<libc::cpu_set_t>(),
                        &original,
                    );
                }
            }
        });
    }
}

#[cfg(not(target_os = "linux"))]
mod platform {
    pub fn pin_to_current_core() -> bool {
        false
    }

    pub fn unpin() {}
}

/// RAII guard that pins the calling thread to its current core and
/// restores the previous affinity on drop.
pub struct CpuPinGuard {
    pinned: bool,
}

impl CpuPinGuard {
    pub fn new() -> Self {
        Self {
            pinned: platform::pin_to_current_core(),
        }
    }

    pub fn is_pinned(&self) -> bool {
        self.pinned
    }
}

impl Default for CpuPinGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for CpuPinGuard {
    fn drop(&mut self) {
        if self.pinned {
            platform::unpin();
        }
    }
}
