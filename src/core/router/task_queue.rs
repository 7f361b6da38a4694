//=========================================================================
// Task Queue
//=========================================================================
//
// Work deferred to the next tick boundary of the game thread.
//
// Input handlers push tasks here instead of doing heavy lifecycle work
// inside their own call frame. The router drains the queue between
// input processing and the frame update.
//
//=========================================================================

//=== Task ================================================================

/// Unit of deferred work for the game thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    /// Build, bind and announce a fresh level in the empty slot.
    RestartLevel,
}

//=== TaskQueue ===========================================================

/// FIFO of pending [`Task`]s.
#[derive(Debug, Default)]
pub struct TaskQueue {
    queue: Vec<Task>,
}

impl TaskQueue {
    /// Creates a new empty task queue.
    pub fn new() -> Self {
        Self { queue: Vec::new() }
    }

    /// Queues a task to run at the next tick boundary.
    pub fn push(&mut self, task: Task) {
        self.queue.push(task);
    }

    /// Returns true if `task` is already queued.
    pub fn contains(&self, task: Task) -> bool {
        self.queue.contains(&task)
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Takes all tasks in FIFO order, leaving the queue empty.
    ///
    /// Tasks pushed while the returned batch is being processed land in
    /// the next batch.
    pub fn take(&mut self) -> Vec<Task> {
        std::mem::take(&mut self.queue)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_queue_is_empty() {
        let queue = TaskQueue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);
    }

    #[test]
    fn take_drains_in_order() {
        let mut queue = TaskQueue::new();
        queue.push(Task::RestartLevel);
        queue.push(Task::RestartLevel);

        assert!(queue.contains(Task::RestartLevel));
        assert_eq!(queue.take(), vec![Task::RestartLevel, Task::RestartLevel]);
        assert!(queue.is_empty());
        assert!(!queue.contains(Task::RestartLevel));
    }
}
