//! Lifecycle decisions for a host element.
//!
//! The browser drives attach/detach; the policy about what those events
//! mean lives here, where it can be tested without a DOM. The subtlety is
//! the detach debounce: elements get detached and re-attached transiently
//! (moving a node, opening a modal), and destroying the instance on every
//! detach would be wrong. A detach therefore only marks the host and
//! schedules a deadline check; the check re-reads the host's flags when it
//! fires, so a re-attach in the meantime turns the fired timer into a
//! no-op. Timers are never cancelled, only out-voted by the flags.

/// The host flags a decision is made from, read at decision time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HostSnapshot {
    /// A framework instance currently exists for this host.
    pub has_instance: bool,
    /// The host saw a detach that has not been followed by a re-attach.
    pub pending_detach: bool,
}

/// What a connect callback should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectAction {
    /// First real attach: construct the instance.
    Mount,
    /// Transient re-attach or duplicate connect: keep the existing state.
    /// The caller clears the pending-detach flag in both cases.
    Resume,
}

/// What a fired destroy deadline should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeadlineAction {
    /// Still detached with a live instance: destroy it, forced. The
    /// driver clears both flags afterwards; the detach has been honored,
    /// so a later attach mounts fresh.
    Destroy,
    /// Re-attached in the meantime, or nothing to destroy.
    Keep,
}

/// Decide a connect callback.
///
/// Mount only on a first real attach: no instance yet and no detach in
/// flight. A connect that interrupts a pending detach is the transient
/// case and must not reconstruct.
pub fn decide_connect(snapshot: HostSnapshot) -> ConnectAction {
    if snapshot.pending_detach || snapshot.has_instance {
        ConnectAction::Resume
    } else {
        ConnectAction::Mount
    }
}

/// Decide a fired destroy deadline from the flags as they are *now*, not
/// as they were when the detach scheduled it.
pub fn decide_deadline(snapshot: HostSnapshot) -> DeadlineAction {
    if snapshot.pending_detach && snapshot.has_instance {
        DeadlineAction::Destroy
    } else {
        DeadlineAction::Keep
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Simulated host: applies decisions the way the DOM driver does, and
    /// counts what a real driver would have done.
    #[derive(Default)]
    struct SimHost {
        snapshot: HostSnapshot,
        mounts: u32,
        destroys: u32,
        deadlines: Vec<()>,
    }

    impl SimHost {
        fn connect(&mut self) {
            if let ConnectAction::Mount = decide_connect(self.snapshot) {
                self.snapshot.has_instance = true;
                self.mounts += 1;
            }
            self.snapshot.pending_detach = false;
        }

        fn disconnect(&mut self) {
            self.snapshot.pending_detach = true;
            self.deadlines.push(());
        }

        fn fire_deadline(&mut self) {
            self.deadlines.pop().expect("no deadline scheduled");
            if let DeadlineAction::Destroy = decide_deadline(self.snapshot) {
                // The detach was honored; nothing is pending anymore.
                self.snapshot.has_instance = false;
                self.snapshot.pending_detach = false;
                self.destroys += 1;
            }
        }
    }

    #[test]
    fn test_first_attach_mounts_once() {
        let mut host = SimHost::default();
        host.connect();
        assert_eq!(host.mounts, 1);

        // Duplicate connect without a detach never constructs again.
        host.connect();
        host.connect();
        assert_eq!(host.mounts, 1);
    }

    #[test]
    fn test_transient_detach_keeps_instance() {
        let mut host = SimHost::default();
        host.connect();
        host.disconnect();
        host.connect(); // re-attached inside the grace period

        // The stale timer still fires, and must be a no-op.
        host.fire_deadline();
        assert_eq!(host.destroys, 0);
        assert!(host.snapshot.has_instance);
        assert_eq!(host.mounts, 1);
    }

    #[test]
    fn test_expired_deadline_destroys_exactly_once() {
        let mut host = SimHost::default();
        host.connect();
        host.disconnect();
        host.fire_deadline();

        assert_eq!(host.destroys, 1);
        assert!(!host.snapshot.has_instance);
    }

    #[test]
    fn test_deadline_without_instance_is_noop() {
        let mut host = SimHost::default();
        // Detached before anything mounted (connect never happened).
        host.disconnect();
        host.fire_deadline();
        assert_eq!(host.destroys, 0);
    }

    #[test]
    fn test_detach_cycle_then_final_detach() {
        let mut host = SimHost::default();
        host.connect();

        // Two transient cycles, each leaving a stale timer behind.
        host.disconnect();
        host.connect();
        host.disconnect();
        host.connect();
        host.fire_deadline();
        host.fire_deadline();
        assert_eq!(host.destroys, 0);
        assert_eq!(host.mounts, 1);

        // The real detach.
        host.disconnect();
        host.fire_deadline();
        assert_eq!(host.destroys, 1);

        // Attaching again after destruction constructs a fresh instance.
        host.connect();
        assert_eq!(host.mounts, 2);
    }

    #[test]
    fn test_connect_during_pending_detach_does_not_mount_fresh_host() {
        // Pending detach with no instance (mount never happened): the
        // re-attach resumes, and the next clean connect mounts.
        let snapshot = HostSnapshot {
            has_instance: false,
            pending_detach: true,
        };
        assert_eq!(decide_connect(snapshot), ConnectAction::Resume);
        assert_eq!(
            decide_connect(HostSnapshot::default()),
            ConnectAction::Mount
        );
    }
}
