//! Stable priority ordering for generated lines

/// A line of generated code with an ordering priority and insertion index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrioritizedLine {
    pub line: String,
    pub priority: i32,
    pub index: usize,
}

/// Collects lines and yields them ordered by descending priority, with
/// insertion order breaking ties
#[derive(Debug, Clone, Default)]
pub struct LineQueue {
    lines: Vec<PrioritizedLine>,
}

impl LineQueue {
    pub fn push(&mut self, line: String, priority: i32) {
        let index = self.lines.len();
        self.lines.push(PrioritizedLine {
            line,
            priority,
            index,
        });
    }

    pub fn into_sorted(mut self) -> Vec<PrioritizedLine> {
        self.lines
            .sort_by(|a, b| b.priority.cmp(&a.priority).then(a.index.cmp(&b.index)));
        self.lines
    }
}
