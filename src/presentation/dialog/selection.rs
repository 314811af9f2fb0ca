/// One checklist row: the link text and its checkbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionRow {
    pub label: String,
    pub checked: bool,
}

/// Checklist state for the audio file selection: an ordered list of
/// boolean flags keyed by row. The "select all" control both derives
/// from and mutates every row uniformly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    rows: Vec<SelectionRow>,
}

impl SelectionState {
    pub fn new(labels: impl IntoIterator<Item = String>) -> Self {
        Self {
            rows: labels
                .into_iter()
                .map(|label| SelectionRow {
                    label,
                    checked: false,
                })
                .collect(),
        }
    }

    pub fn rows(&self) -> &[SelectionRow] {
        &self.rows
    }

    /// Flips one row's checkbox; indexes outside the list are ignored.
    pub fn toggle(&mut self, index: usize) {
        if let Some(row) = self.rows.get_mut(index) {
            row.checked = !row.checked;
        }
    }

    pub fn set_all(&mut self, checked: bool) {
        for row in &mut self.rows {
            row.checked = checked;
        }
    }

    pub fn all_checked(&self) -> bool {
        !self.rows.is_empty() && self.rows.iter().all(|row| row.checked)
    }

    /// Checked labels in their original extraction order.
    pub fn selected(&self) -> Vec<String> {
        self.rows
            .iter()
            .filter(|row| row.checked)
            .map(|row| row.label.clone())
            .collect()
    }
}

/// The selection dialog: open until submitted or dismissed. Submission
/// hands the checked subset to the callback exactly once; dismissal
/// drops the callback uninvoked.
pub struct SelectionDialog<F>
where
    F: FnOnce(Vec<String>),
{
    state: SelectionState,
    on_select: Option<F>,
}

impl<F> SelectionDialog<F>
where
    F: FnOnce(Vec<String>),
{
    pub fn new(labels: impl IntoIterator<Item = String>, on_select: F) -> Self {
        Self {
            state: SelectionState::new(labels),
            on_select: Some(on_select),
        }
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut SelectionState {
        &mut self.state
    }

    pub fn submit(mut self) {
        if let Some(on_select) = self.on_select.take() {
            on_select(self.state.selected());
        }
    }

    pub fn dismiss(self) {}
}
