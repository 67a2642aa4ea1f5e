#![allow(dead_code)]

use reaper::{AuditSink, ChangeEvent, ChangeWatcher, Clock, Errno, Error, Pid, ProcessTable, RunState};
use std::collections::{BTreeMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

pub const SNAP_CMDLINE: &[u8] = b"/system/bin/vendor.samsung.hardware.snap-service\0--foo\0";

/// How the fake kernel answers a SIGKILL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KillBehavior {
    /// The process dies and leaves the table.
    Reap,
    /// The request is rejected with the given errno; the table is unchanged.
    Reject(Errno),
}

#[derive(Debug)]
struct TableState {
    processes: BTreeMap<i32, Vec<u8>>,
    kill_behavior: KillBehavior,
    kills: Vec<Pid>,
    reads: usize,
    scans: usize,
    stop_after_reads: Option<(usize, RunState)>,
}

/// In-memory process table. Clones share state.
#[derive(Debug, Clone)]
pub struct FakeTable {
    state: Arc<Mutex<TableState>>,
}

impl FakeTable {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(TableState {
                processes: BTreeMap::new(),
                kill_behavior: KillBehavior::Reap,
                kills: Vec::new(),
                reads: 0,
                scans: 0,
                stop_after_reads: None,
            })),
        }
    }

    pub fn with_process(self, pid: i32, cmdline: &[u8]) -> Self {
        self.state.lock().unwrap().processes.insert(pid, cmdline.to_vec());
        self
    }

    pub fn with_kill_behavior(self, behavior: KillBehavior) -> Self {
        self.state.lock().unwrap().kill_behavior = behavior;
        self
    }

    /// Request shutdown once `reads` descriptors have been read.
    pub fn stop_after_reads(self, reads: usize, run_state: RunState) -> Self {
        self.state.lock().unwrap().stop_after_reads = Some((reads, run_state));
        self
    }

    /// Add a process to a table that is already in use.
    pub fn spawn(&self, pid: i32, cmdline: &[u8]) {
        self.state.lock().unwrap().processes.insert(pid, cmdline.to_vec());
    }

    pub fn kills(&self) -> Vec<Pid> {
        self.state.lock().unwrap().kills.clone()
    }

    pub fn reads(&self) -> usize {
        self.state.lock().unwrap().reads
    }

    pub fn scans(&self) -> usize {
        self.state.lock().unwrap().scans
    }

    pub fn contains(&self, pid: i32) -> bool {
        self.state.lock().unwrap().processes.contains_key(&pid)
    }
}

impl ProcessTable for FakeTable {
    fn pids(&self) -> Result<Box<dyn Iterator<Item = Pid> + '_>, Error> {
        let mut state = self.state.lock().unwrap();
        state.scans += 1;
        let pids: Vec<Pid> = state.processes.keys().copied().map(Pid::from_raw).collect();
        Ok(Box::new(pids.into_iter()))
    }

    fn cmdline(&self, pid: Pid) -> Option<Vec<u8>> {
        let mut state = self.state.lock().unwrap();
        state.reads += 1;
        if let Some((limit, run_state)) = &state.stop_after_reads {
            if state.reads >= *limit {
                run_state.request_stop();
            }
        }
        state.processes.get(&pid.as_raw()).cloned()
    }

    fn kill(&self, pid: Pid) -> Result<(), Errno> {
        let mut state = self.state.lock().unwrap();
        if let KillBehavior::Reject(errno) = state.kill_behavior {
            return Err(errno);
        }
        match state.processes.remove(&pid.as_raw()) {
            Some(_) => {
                state.kills.push(pid);
                Ok(())
            }
            None => Err(Errno::ESRCH),
        }
    }
}

/// Collects audit records. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    records: Arc<Mutex<Vec<String>>>,
}

impl RecordingSink {
    pub fn records(&self) -> Vec<String> {
        self.records.lock().unwrap().clone()
    }
}

impl AuditSink for RecordingSink {
    fn emit(&self, record: &str) {
        self.records.lock().unwrap().push(record.to_owned());
    }
}

/// Clock that only moves when slept on. Clones share state.
#[derive(Debug, Clone)]
pub struct ManualClock {
    start: Instant,
    elapsed: Arc<Mutex<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            elapsed: Arc::new(Mutex::new(Duration::ZERO)),
        }
    }

    pub fn elapsed(&self) -> Duration {
        *self.elapsed.lock().unwrap()
    }

    pub fn advance(&self, by: Duration) {
        *self.elapsed.lock().unwrap() += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.start + self.elapsed()
    }

    fn sleep(&self, duration: Duration) {
        self.advance(duration);
    }
}

/// Replays batches of events, then stops the loop.
///
/// Each poll first advances the clock by `advance_per_poll`. Once the
/// script is exhausted the watcher requests shutdown and reports no data.
pub struct ScriptedWatcher {
    script: VecDeque<Result<Vec<ChangeEvent>, Error>>,
    run_state: RunState,
    clock: ManualClock,
    advance_per_poll: Duration,
    stop_at: Option<Duration>,
    on_first_poll: Option<Box<dyn FnOnce() + Send>>,
}

impl ScriptedWatcher {
    pub fn new(run_state: RunState, clock: ManualClock) -> Self {
        Self {
            script: VecDeque::new(),
            run_state,
            clock,
            advance_per_poll: Duration::ZERO,
            stop_at: None,
            on_first_poll: None,
        }
    }

    pub fn batch(mut self, events: Vec<ChangeEvent>) -> Self {
        self.script.push_back(Ok(events));
        self
    }

    pub fn failure(mut self, err: Error) -> Self {
        self.script.push_back(Err(err));
        self
    }

    pub fn advance_per_poll(mut self, by: Duration) -> Self {
        self.advance_per_poll = by;
        self
    }

    /// Run `hook` right before the first poll, after the startup scan.
    pub fn on_first_poll(mut self, hook: impl FnOnce() + Send + 'static) -> Self {
        self.on_first_poll = Some(Box::new(hook));
        self
    }

    /// Keep reporting "no data" until the clock reaches `at`, then stop.
    pub fn idle_until(mut self, at: Duration) -> Self {
        self.stop_at = Some(at);
        self
    }
}

impl ChangeWatcher for ScriptedWatcher {
    fn poll(&mut self) -> Result<Vec<ChangeEvent>, Error> {
        if let Some(hook) = self.on_first_poll.take() {
            hook();
        }
        self.clock.advance(self.advance_per_poll);
        if let Some(next) = self.script.pop_front() {
            return next;
        }
        match self.stop_at {
            Some(at) if self.clock.elapsed() < at => {}
            _ => self.run_state.request_stop(),
        }
        Ok(Vec::new())
    }
}
