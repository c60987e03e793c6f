// Step snapshots and playback over the materialized history

/// Label identifying the sub-event a step depicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepTag {
    Initial,
    Create,
    Insert,
    PreDelete,
    Delete,
    PreUpdate,
    Update,
    PreSwap,
    Swap,
    Compare,
    SearchStart,
    SearchCheck,
    Found,
    NotFound,
    BinarySearchStart,
    BinarySearchCheck,
    ReverseStart,
    ReverseComplete,
}

impl StepTag {
    /// Stable string label, as shown in the step log.
    pub fn label(&self) -> &'static str {
        match self {
            StepTag::Initial => "initial",
            StepTag::Create => "create",
            StepTag::Insert => "insert",
            StepTag::PreDelete => "pre-delete",
            StepTag::Delete => "delete",
            StepTag::PreUpdate => "pre-update",
            StepTag::Update => "update",
            StepTag::PreSwap => "pre-swap",
            StepTag::Swap => "swap",
            StepTag::Compare => "compare",
            StepTag::SearchStart => "search-start",
            StepTag::SearchCheck => "search-check",
            StepTag::Found => "found",
            StepTag::NotFound => "not-found",
            StepTag::BinarySearchStart => "binary-search-start",
            StepTag::BinarySearchCheck => "binary-search-check",
            StepTag::ReverseStart => "reverse-start",
            StepTag::ReverseComplete => "reverse-complete",
        }
    }
}

/// Semantic color role for a highlighted position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightKind {
    Created,
    Inserted,
    Removed,
    Updated,
    Compared,
    Swapped,
    Probed,
    Found,
    Range,
    Midpoint,
    Reversed,
}

/// A position tagged with a semantic color role for one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub index: usize,
    pub kind: HighlightKind,
}

impl Highlight {
    pub fn new(index: usize, kind: HighlightKind) -> Self {
        Self { index, kind }
    }
}

/// A derived adjacency pair between consecutive linked-list nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub from: usize,
    pub to: usize,
}

/// One immutable, independently renderable snapshot.
///
/// `values` is a full copy of the structure's content at that instant, never
/// a reference into the generator's working state — later mutation cannot
/// corrupt an already-emitted step. `links` holds the derived adjacency
/// pairs for linked-list steps and is empty for array-family steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub tag: StepTag,
    pub values: Vec<i64>,
    pub links: Vec<Link>,
    pub highlights: Vec<Highlight>,
    pub description: String,
}

impl Step {
    /// Build an array-family step, copying the working array.
    pub fn array(
        tag: StepTag,
        values: &[i64],
        highlights: Vec<Highlight>,
        description: String,
    ) -> Self {
        Step {
            tag,
            values: values.to_vec(),
            links: Vec::new(),
            highlights,
            description,
        }
    }

    /// Build a linked-list step, copying the node values and deriving the
    /// adjacency pairs for the renderer's link arrows.
    pub fn list(
        tag: StepTag,
        values: &[i64],
        highlights: Vec<Highlight>,
        description: String,
    ) -> Self {
        let links = (1..values.len())
            .map(|i| Link {
                from: i - 1,
                to: i,
            })
            .collect();

        Step {
            tag,
            values: values.to_vec(),
            links,
            highlights,
            description,
        }
    }
}

/// Cursor over a fully materialized step history.
///
/// Generation is batch: the whole history exists before playback begins, so
/// navigation is pure index arithmetic. The steps themselves are never
/// mutated.
#[derive(Debug)]
pub struct Playback {
    steps: Vec<Step>,
    position: usize,
}

impl Playback {
    pub fn new(steps: Vec<Step>) -> Self {
        Playback { steps, position: 0 }
    }

    /// Get the step at the cursor
    pub fn current(&self) -> Option<&Step> {
        self.steps.get(self.position)
    }

    /// Get a step by index
    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    /// All steps in order
    pub fn as_slice(&self) -> &[Step] {
        &self.steps
    }

    /// Get the total number of steps
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Get the current cursor position
    pub fn position(&self) -> usize {
        self.position
    }

    /// Whether the cursor sits on the last step
    pub fn is_at_end(&self) -> bool {
        self.steps.is_empty() || self.position + 1 >= self.steps.len()
    }

    /// Advance by one step. Returns false at the end of history.
    pub fn step_forward(&mut self) -> bool {
        if self.position + 1 < self.steps.len() {
            self.position += 1;
            true
        } else {
            false
        }
    }

    /// Retreat by one step. Returns false at the beginning.
    pub fn step_backward(&mut self) -> bool {
        if self.position > 0 {
            self.position -= 1;
            true
        } else {
            false
        }
    }

    /// Jump to an arbitrary index. Returns false if out of range.
    pub fn jump_to(&mut self, index: usize) -> bool {
        if index < self.steps.len() {
            self.position = index;
            true
        } else {
            false
        }
    }

    /// Rewind the cursor to the first step
    pub fn rewind_to_start(&mut self) {
        self.position = 0;
    }
}
