//! Interrupt-safe one-shot tick countdown
//!
//! Two execution contexts meet here: mainline code arms the countdown and a
//! periodic tick interrupt counts it down. There is no lock. The hold flag
//! lets the mainline reconfigure hardware without the tick handler acting on
//! a half-written state: while held, [`TickCountdown::tick`] skips the whole
//! tick instead of blocking, which costs at most one tick of timing drift.
//!
//! The atomics give the two contexts defined visibility of each other's
//! writes; on the single-core target they mostly constrain the compiler.
//!
//! Only one context may call `tick` (the periodic interrupt), and arming is
//! only valid while a hold is in place.

use core::sync::atomic::{AtomicBool, AtomicU32, Ordering};

/// One-shot countdown decremented from a periodic tick interrupt.
///
/// Zero means idle; any other value means the armed action is still running.
#[derive(Debug)]
pub struct TickCountdown {
    remaining: AtomicU32,
    held: AtomicBool,
}

impl TickCountdown {
    /// Create an idle countdown.
    pub const fn new() -> Self {
        Self {
            remaining: AtomicU32::new(0),
            held: AtomicBool::new(false),
        }
    }

    /// Arm the countdown with a number of ticks remaining.
    ///
    /// Call with a [`TickHold`] in scope so the tick handler cannot observe
    /// the surrounding reconfiguration mid-write.
    pub fn arm(&self, ticks: u32) {
        self.remaining.store(ticks, Ordering::Release);
    }

    /// True while the countdown has not reached zero.
    pub fn active(&self) -> bool {
        self.remaining.load(Ordering::Relaxed) != 0
    }

    /// Mark the start of a reconfiguration.
    ///
    /// Tick calls are skipped until the returned guard is dropped.
    pub fn hold(&self) -> TickHold<'_> {
        self.held.store(true, Ordering::SeqCst);
        TickHold { countdown: self }
    }

    /// Advance by one tick.
    ///
    /// Returns `true` exactly when the countdown reaches zero on this call,
    /// so the caller can run its expiry action once. Skips entirely (no
    /// decrement) while a hold is in place.
    ///
    /// Call from the periodic tick interrupt only; not safe to call
    /// concurrently with itself.
    pub fn tick(&self) -> bool {
        if self.held.load(Ordering::SeqCst) {
            return false;
        }
        let remaining = self.remaining.load(Ordering::Acquire);
        if remaining == 0 {
            return false;
        }
        // Sole decrementer; a plain load/store pair is enough.
        let remaining = remaining - 1;
        self.remaining.store(remaining, Ordering::Release);
        remaining == 0
    }
}

impl Default for TickCountdown {
    fn default() -> Self {
        Self::new()
    }
}

/// Guard marking a reconfiguration in progress.
///
/// Dropping it re-admits the tick handler, including on early error returns
/// from the reconfiguration.
#[derive(Debug)]
pub struct TickHold<'a> {
    countdown: &'a TickCountdown,
}

impl Drop for TickHold<'_> {
    fn drop(&mut self) {
        self.countdown.held.store(false, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_down_to_zero_once() {
        let countdown = TickCountdown::new();
        assert!(!countdown.active());

        countdown.arm(3);
        assert!(countdown.active());

        assert!(!countdown.tick());
        assert!(!countdown.tick());
        assert!(countdown.active());

        // Expiry is reported exactly once, on the tick that reaches zero
        assert!(countdown.tick());
        assert!(!countdown.active());
        assert!(!countdown.tick());
    }

    #[test]
    fn test_hold_skips_ticks() {
        let countdown = TickCountdown::new();
        countdown.arm(2);

        {
            let _hold = countdown.hold();
            assert!(!countdown.tick());
            assert!(!countdown.tick());
            // Nothing was decremented while held
            assert!(countdown.active());
        }

        assert!(!countdown.tick());
        assert!(countdown.tick());
    }

    #[test]
    fn test_hold_released_on_drop() {
        let countdown = TickCountdown::new();
        countdown.arm(1);

        drop(countdown.hold());
        assert!(countdown.tick());
    }

    #[test]
    fn test_arm_zero_stays_idle() {
        let countdown = TickCountdown::new();
        countdown.arm(0);
        assert!(!countdown.active());
        assert!(!countdown.tick());
    }
}
