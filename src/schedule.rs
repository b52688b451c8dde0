//! Cancellable cooperative schedules
//!
//! The loop controller owns exactly two periodic tasks: the per-frame
//! advance gated on the host's display refresh, and the enemy spawn
//! timer. Both are modeled as slots holding at most one armed task;
//! arming a slot cancels whatever it held first, so a stale schedule can
//! never coexist with a fresh one. Cancellation is synchronous and
//! idempotent. Generations distinguish re-arms for anyone holding a
//! token from an earlier arm.

/// Gate for the per-frame advance. The host keeps invoking its refresh
/// callback unconditionally; the gate decides whether a tick runs.
#[derive(Debug, Default)]
pub struct FrameSchedule {
    armed: bool,
    generation: u64,
}

impl FrameSchedule {
    /// Arm the schedule, cancelling any prior arm. Returns the new
    /// generation token.
    pub fn arm(&mut self) -> u64 {
        self.cancel();
        self.armed = true;
        self.generation += 1;
        self.generation
    }

    /// Idempotent: cancelling an idle schedule is a no-op.
    pub fn cancel(&mut self) {
        self.armed = false;
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug)]
struct Periodic {
    period_ms: f32,
    elapsed_ms: f32,
}

/// Periodic spawn timer measured in host milliseconds
#[derive(Debug, Default)]
pub struct SpawnTimer {
    task: Option<Periodic>,
    generation: u64,
}

impl SpawnTimer {
    /// Cancel any armed task and arm a fresh one with the given period,
    /// starting from zero elapsed. Returns the new generation token.
    pub fn arm(&mut self, period_ms: f32) -> u64 {
        self.cancel();
        self.task = Some(Periodic {
            period_ms: period_ms.max(1.0),
            elapsed_ms: 0.0,
        });
        self.generation += 1;
        self.generation
    }

    /// Idempotent: cancelling an idle timer is a no-op.
    pub fn cancel(&mut self) {
        self.task = None;
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.task.is_some()
    }

    #[must_use]
    pub fn period_ms(&self) -> Option<f32> {
        self.task.as_ref().map(|t| t.period_ms)
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Advance by one host frame's wall time; returns how many times the
    /// timer fired. A cancelled timer never fires. A single oversized
    /// frame fires the timer repeatedly so spawn cadence survives host
    /// hitches.
    pub fn advance(&mut self, dt_ms: f32) -> u32 {
        let Some(task) = self.task.as_mut() else {
            return 0;
        };
        task.elapsed_ms += dt_ms;
        let mut fires = 0;
        while task.elapsed_ms >= task.period_ms {
            task.elapsed_ms -= task.period_ms;
            fires += 1;
        }
        fires
    }
}
