//! Command palette state: query, fuzzy-filtered entries and selection

use crate::command::{Command, PaletteEntry, PALETTE_ENTRIES};
use crate::fuzzy::fuzzy_filter;

/// Rows visible in the palette popup
pub const VISIBLE_ROWS: usize = 6;

/// What submitting the palette will dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteSelection {
    pub action: &'static str,
    pub payload: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandPaletteState {
    pub query: String,
    /// Indices into [`PALETTE_ENTRIES`] matching the query, best first
    pub filtered: Vec<usize>,
    /// Cursor into `filtered`
    pub selected: usize,
    pub scroll_offset: usize,
}

impl Default for CommandPaletteState {
    fn default() -> Self {
        Self {
            query: String::new(),
            filtered: (0..PALETTE_ENTRIES.len()).collect(),
            selected: 0,
            scroll_offset: 0,
        }
    }
}

impl CommandPaletteState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Matching entries in display order
    pub fn entries(&self) -> impl Iterator<Item = &'static PaletteEntry> + '_ {
        self.filtered.iter().filter_map(|&i| PALETTE_ENTRIES.get(i))
    }

    pub fn has_results(&self) -> bool {
        !self.filtered.is_empty()
    }

    /// The highlighted entry, or the query itself as an `ai-query`
    pub fn selection(&self) -> Option<PaletteSelection> {
        if let Some(entry) = self
            .filtered
            .get(self.selected)
            .and_then(|&i| PALETTE_ENTRIES.get(i))
        {
            return Some(PaletteSelection {
                action: entry.action,
                payload: None,
            });
        }

        let query = self.query.trim();
        (!query.is_empty()).then(|| PaletteSelection {
            action: Command::AI_QUERY,
            payload: Some(query.to_string()),
        })
    }

    pub fn navigate_up(&mut self) {
        if self.filtered.is_empty() {
            return;
        }
        self.selected = self
            .selected
            .checked_sub(1)
            .unwrap_or(self.filtered.len() - 1);
        self.keep_selection_visible();
    }

    pub fn navigate_down(&mut self) {
        if self.filtered.is_empty() {
            return;
        }
        self.selected = (self.selected + 1) % self.filtered.len();
        self.keep_selection_visible();
    }

    pub fn input_char(&mut self, c: char) {
        self.query.push(c);
        self.refilter();
    }

    pub fn backspace(&mut self) {
        self.query.pop();
        self.refilter();
    }

    fn keep_selection_visible(&mut self) {
        if self.selected < self.scroll_offset {
            self.scroll_offset = self.selected;
        } else if self.selected >= self.scroll_offset + VISIBLE_ROWS {
            self.scroll_offset = self.selected + 1 - VISIBLE_ROWS;
        }
    }

    fn refilter(&mut self) {
        let labels: Vec<&str> = PALETTE_ENTRIES.iter().map(|e| e.label).collect();
        self.filtered = fuzzy_filter(&self.query, &labels);
        self.selected = 0;
        self.scroll_offset = 0;
    }
}
