// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Recorded delayed-task queue.

use std::time::Instant;

/// One scheduled task.
#[derive(Debug, Clone)]
struct Entry<T> {
    due: Instant,
    seq: u64,
    task: T,
}

/// A queue of delayed tasks, drained by the owner's tick loop.
///
/// Tasks are not cancelable once scheduled: a full reclamation always
/// eventually restores media sources and restarts tracking, even if the
/// session has since wound down. Keeping the tasks recorded here (instead of
/// handing them to an ambient timer facility) bounds that to the owner's
/// lifetime and lets tests inspect what is pending.
#[derive(Debug)]
pub struct TaskScheduler<T> {
    entries: Vec<Entry<T>>,
    next_seq: u64,
}

impl<T> TaskScheduler<T> {
    /// Creates an empty scheduler.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_seq: 0,
        }
    }

    /// Records `task` to be released once `due` has passed.
    pub fn schedule(&mut self, due: Instant, task: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push(Entry { due, seq, task });
    }

    /// Removes and returns every task due at `now`, ordered by due time and
    /// then by scheduling order.
    pub fn pop_due(&mut self, now: Instant) -> Vec<T> {
        let mut due: Vec<Entry<T>> = Vec::new();
        let mut remaining: Vec<Entry<T>> = Vec::new();
        for entry in self.entries.drain(..) {
            if entry.due <= now {
                due.push(entry);
            } else {
                remaining.push(entry);
            }
        }
        self.entries = remaining;

        due.sort_by_key(|entry| (entry.due, entry.seq));
        due.into_iter().map(|entry| entry.task).collect()
    }

    /// The number of tasks still waiting.
    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    /// The earliest due instant among pending tasks.
    pub fn next_due(&self) -> Option<Instant> {
        self.entries.iter().map(|entry| entry.due).min()
    }
}

impl<T> Default for TaskScheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}
