//! Application state management for jobdeck
//!
//! Holds the current view, the job list delivered by the feed manager, and
//! the client-side filter/sort/search state, and translates keyboard input
//! into state transitions.

use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent};

use crate::data::JobListing;
use crate::feed::{FeedResponse, FeedWarning};

/// Application state enum representing the current view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppState {
    /// Initial loading state while the feed resolves
    Loading,
    /// List view showing the job feed
    JobList,
    /// Detail view for the selected job
    JobDetail,
}

/// Sort order for the job list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Provider order (most recent first, as returned)
    Recent,
    SalaryHighToLow,
    SalaryLowToHigh,
}

impl SortOrder {
    pub fn next(self) -> Self {
        match self {
            SortOrder::Recent => SortOrder::SalaryHighToLow,
            SortOrder::SalaryHighToLow => SortOrder::SalaryLowToHigh,
            SortOrder::SalaryLowToHigh => SortOrder::Recent,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Recent => "Recent",
            SortOrder::SalaryHighToLow => "Salary ↓",
            SortOrder::SalaryLowToHigh => "Salary ↑",
        }
    }
}

/// Main application struct managing state and data
pub struct App {
    /// Current application state/view
    pub state: AppState,
    /// Jobs as delivered by the feed manager (provider order preserved)
    pub jobs: Vec<JobListing>,
    /// Degradation warning from the last feed response, if any
    pub warning: Option<FeedWarning>,
    /// Index of the selected job within the visible (filtered) list
    pub selected_index: usize,
    /// Active sort order
    pub sort_order: SortOrder,
    /// Employment-type filter (None = all types)
    pub type_filter: Option<String>,
    /// Location filter (None = all locations)
    pub location_filter: Option<String>,
    /// Free-text search over title, company and description
    pub search: String,
    /// Whether keystrokes currently feed the search box
    pub search_mode: bool,
    /// Scroll offset in the detail view
    pub detail_scroll: u16,
    /// Flag indicating the application should quit
    pub should_quit: bool,
    /// When the job list was last applied
    pub last_refresh: Option<DateTime<Local>>,
}

impl App {
    /// Creates a new App instance in the loading state
    pub fn new() -> Self {
        Self {
            state: AppState::Loading,
            jobs: Vec::new(),
            warning: None,
            selected_index: 0,
            sort_order: SortOrder::Recent,
            type_filter: None,
            location_filter: None,
            search: String::new(),
            search_mode: false,
            detail_scroll: 0,
            should_quit: false,
            last_refresh: None,
        }
    }

    /// Applies a resolved feed response and transitions to the list view.
    pub fn apply_feed(&mut self, response: FeedResponse) {
        self.jobs = response.jobs;
        self.warning = response.warning;
        self.selected_index = 0;
        self.last_refresh = Some(Local::now());
        self.state = AppState::JobList;
    }

    /// Jobs matching the active filters, in the active sort order.
    pub fn visible_jobs(&self) -> Vec<&JobListing> {
        let mut visible: Vec<&JobListing> = self
            .jobs
            .iter()
            .filter(|job| self.matches_filters(job))
            .collect();

        // Unpriced listings sort last in both salary directions
        match self.sort_order {
            SortOrder::Recent => {}
            SortOrder::SalaryHighToLow => visible.sort_by_key(|job| {
                std::cmp::Reverse(salary_value(&job.salary_range).unwrap_or(i64::MIN))
            }),
            SortOrder::SalaryLowToHigh => {
                visible.sort_by_key(|job| salary_value(&job.salary_range).unwrap_or(i64::MAX))
            }
        }

        visible
    }

    /// The currently selected job in the visible list, if any
    pub fn selected_job(&self) -> Option<&JobListing> {
        self.visible_jobs().get(self.selected_index).copied()
    }

    /// Distinct employment types present in the feed, in first-seen order
    pub fn unique_types(&self) -> Vec<&str> {
        unique_values(self.jobs.iter().map(|job| job.employment_type.as_str()))
    }

    /// Distinct locations present in the feed, in first-seen order
    pub fn unique_locations(&self) -> Vec<&str> {
        unique_values(self.jobs.iter().map(|job| job.location.as_str()))
    }

    fn matches_filters(&self, job: &JobListing) -> bool {
        if let Some(employment_type) = &self.type_filter {
            if &job.employment_type != employment_type {
                return false;
            }
        }
        if let Some(location) = &self.location_filter {
            if &job.location != location {
                return false;
            }
        }
        if !self.search.is_empty() {
            let needle = self.search.to_lowercase();
            let haystack_hit = job.title.to_lowercase().contains(&needle)
                || job.company.to_lowercase().contains(&needle)
                || job.description.to_lowercase().contains(&needle);
            if !haystack_hit {
                return false;
            }
        }
        true
    }

    /// Advances the type filter through all -> each type -> all.
    pub fn cycle_type_filter(&mut self) {
        let types: Vec<String> = self.unique_types().iter().map(|t| t.to_string()).collect();
        self.type_filter = cycle(&types, self.type_filter.take());
        self.clamp_selection();
    }

    /// Advances the location filter through all -> each location -> all.
    pub fn cycle_location_filter(&mut self) {
        let locations: Vec<String> = self
            .unique_locations()
            .iter()
            .map(|l| l.to_string())
            .collect();
        self.location_filter = cycle(&locations, self.location_filter.take());
        self.clamp_selection();
    }

    /// Clears every filter and the search text.
    pub fn clear_filters(&mut self) {
        self.type_filter = None;
        self.location_filter = None;
        self.search.clear();
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        let count = self.visible_jobs().len();
        if count == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= count {
            self.selected_index = count - 1;
        }
    }

    /// Handles a keyboard event for the current view.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.search_mode {
            self.handle_search_key(key);
            return;
        }

        match self.state {
            AppState::Loading => {
                if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                    self.should_quit = true;
                }
            }
            AppState::JobList => self.handle_list_key(key),
            AppState::JobDetail => self.handle_detail_key(key),
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => {
                self.search_mode = false;
                self.clamp_selection();
            }
            KeyCode::Backspace => {
                self.search.pop();
                self.clamp_selection();
            }
            KeyCode::Char(c) => {
                self.search.push(c);
                self.clamp_selection();
            }
            _ => {}
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Down | KeyCode::Char('j') => {
                let count = self.visible_jobs().len();
                if count > 0 && self.selected_index < count - 1 {
                    self.selected_index += 1;
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected_index = self.selected_index.saturating_sub(1);
            }
            KeyCode::Enter => {
                if self.selected_job().is_some() {
                    self.detail_scroll = 0;
                    self.state = AppState::JobDetail;
                }
            }
            KeyCode::Char('/') => self.search_mode = true,
            KeyCode::Char('t') => self.cycle_type_filter(),
            KeyCode::Char('l') => self.cycle_location_filter(),
            KeyCode::Char('s') => {
                self.sort_order = self.sort_order.next();
            }
            KeyCode::Char('c') => self.clear_filters(),
            _ => {}
        }
    }

    fn handle_detail_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc | KeyCode::Backspace => self.state = AppState::JobList,
            KeyCode::Down | KeyCode::Char('j') => {
                self.detail_scroll = self.detail_scroll.saturating_add(1);
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.detail_scroll = self.detail_scroll.saturating_sub(1);
            }
            _ => {}
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Extracts the lower salary bound as a comparable number.
///
/// Takes the first dash-separated segment of the range and keeps its
/// digits; "Not specified" (or anything digit-free) yields `None`, which
/// sorts after every priced listing in both directions.
pub fn salary_value(salary_range: &str) -> Option<i64> {
    let first = salary_range.split('-').next().unwrap_or(salary_range);
    let digits: String = first.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

/// First-seen-order deduplication
fn unique_values<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = Vec::new();
    for value in values {
        if !seen.contains(&value) {
            seen.push(value);
        }
    }
    seen
}

/// Advances `current` to the entry after it in `options`, wrapping to None.
fn cycle(options: &[String], current: Option<String>) -> Option<String> {
    match current {
        None => options.first().cloned(),
        Some(value) => {
            let position = options.iter().position(|option| option == &value);
            match position {
                Some(index) if index + 1 < options.len() => Some(options[index + 1].clone()),
                _ => None,
            }
        }
    }
}
