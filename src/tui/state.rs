use crate::model::{BusinessRecord, RunEvent};

/// Which form field currently receives typed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Keyword,
    City,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Keyword => Focus::City,
            Focus::City => Focus::Keyword,
        }
    }
}

/// UI-side mirror of the run, built purely from controller events.
/// Owned by the UI thread only; no cross-thread mutation.
pub struct UiState {
    pub focus: Focus,
    pub keyword: String,
    pub city: String,
    pub running: bool,
    pub results: Vec<BusinessRecord>,
    pub info: String,
    pub show_help: bool,
    pub last_exported_path: Option<String>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            focus: Focus::Keyword,
            keyword: String::new(),
            city: String::new(),
            running: false,
            results: Vec::new(),
            info: String::new(),
            show_help: false,
            last_exported_path: None,
        }
    }
}

impl UiState {
    pub fn apply_event(&mut self, ev: RunEvent) {
        match ev {
            RunEvent::RunStarted { query } => {
                self.running = true;
                self.results.clear();
                self.info = format!(
                    "Searching \"{}\" in {}…",
                    query.keyword, query.city
                );
            }
            RunEvent::Record { record, .. } => {
                self.results.push(record);
            }
            RunEvent::RunStopped { total } => {
                self.running = false;
                self.info = format!("Stopped — {total} businesses found");
            }
            RunEvent::Exported { path, .. } => {
                self.info = format!("Saved: {}", path.display());
                self.last_exported_path = Some(path.display().to_string());
            }
            RunEvent::Info(msg) => {
                self.info = msg;
            }
        }
    }

    /// Typing is only allowed while idle; both fields are disabled during a run.
    pub fn push_char(&mut self, c: char) {
        if self.running {
            return;
        }
        match self.focus {
            Focus::Keyword => self.keyword.push(c),
            Focus::City => self.city.push(c),
        }
    }

    pub fn pop_char(&mut self) {
        if self.running {
            return;
        }
        match self.focus {
            Focus::Keyword => {
                self.keyword.pop();
            }
            Focus::City => {
                self.city.pop();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SearchQuery;

    #[test]
    fn events_drive_the_result_mirror() {
        let mut state = UiState::default();
        let query = SearchQuery::parse("gym", "Tokyo").unwrap();
        state.apply_event(RunEvent::RunStarted {
            query: query.clone(),
        });
        assert!(state.running);

        let seeds = crate::synth::synthesize(&query);
        state.apply_event(RunEvent::Record {
            record: crate::synth::derive(seeds.get(0), 0),
            cursor: 0,
        });
        assert_eq!(state.results.len(), 1);

        state.apply_event(RunEvent::RunStopped { total: 1 });
        assert!(!state.running);
        assert_eq!(state.results.len(), 1, "results freeze on stop");
    }

    #[test]
    fn fields_are_locked_while_running() {
        let mut state = UiState::default();
        state.push_char('g');
        state.focus = Focus::City;
        state.push_char('T');
        assert_eq!((state.keyword.as_str(), state.city.as_str()), ("g", "T"));

        state.running = true;
        state.push_char('x');
        state.pop_char();
        assert_eq!((state.keyword.as_str(), state.city.as_str()), ("g", "T"));
    }
}
