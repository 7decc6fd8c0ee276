use chrono::NaiveDate;

/// Status of a task relative to its date range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    InProgress,
    DuePassed,
    Complete,
}

impl TaskStatus {
    /// Parse status from its display label like "in-progress"
    pub fn from_label(label: &str) -> Option<Self> {
        match label.to_lowercase().as_str() {
            "in-progress" => Some(Self::InProgress),
            "due-passed" => Some(Self::DuePassed),
            "complete" => Some(Self::Complete),
            _ => None,
        }
    }

    /// Display label as shown in the status column
    pub fn label(&self) -> &'static str {
        match self {
            Self::InProgress => "in-progress",
            Self::DuePassed => "due-passed",
            Self::Complete => "complete",
        }
    }

    /// Badge for the details pane
    pub fn badge(&self, use_emoji: bool) -> &'static str {
        if use_emoji {
            match self {
                Self::InProgress => "▶ in-progress",
                Self::DuePassed => "⚠ due-passed",
                Self::Complete => "✓ complete",
            }
        } else {
            self.label()
        }
    }

    /// Derive a status by comparing the date range to today:
    /// start after today means the task hasn't begun, end before today
    /// means its window has passed, anything else counts as complete.
    pub fn derive(start: NaiveDate, end: NaiveDate, today: NaiveDate) -> Self {
        if start > today {
            Self::InProgress
        } else if end < today {
            Self::DuePassed
        } else {
            Self::Complete
        }
    }

    /// Next status in cycle order (for the form's status field)
    pub fn next(&self) -> Self {
        match self {
            Self::InProgress => Self::DuePassed,
            Self::DuePassed => Self::Complete,
            Self::Complete => Self::InProgress,
        }
    }

    /// Previous status in cycle order
    pub fn prev(&self) -> Self {
        match self {
            Self::InProgress => Self::Complete,
            Self::DuePassed => Self::InProgress,
            Self::Complete => Self::DuePassed,
        }
    }

    /// Get all statuses as a list
    pub fn all() -> &'static [TaskStatus] {
        &[Self::InProgress, Self::DuePassed, Self::Complete]
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    Form,          // Adding or editing a task through the input form
    ConfirmDelete, // Blocking delete confirmation
    Search,        // Keystrokes go to the search field
}
