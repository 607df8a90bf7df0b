// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use std::collections::BTreeSet;

use crate::actions::{ActionSpec, BulkFailure, BulkOutcome, resolve_selected};
use crate::fields::{ListRecord, ListSchema};
use crate::filter::{FilterCriteria, SearchField, filter_records};
use crate::page::PageState;
use crate::select::SelectionSet;
use crate::sort::{SortCriteria, compare_records, cycle_sort};
use crate::view::{ListView, RowView, ViewPhase};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListCommand<F, K> {
    SetQuery(String),
    SetSearchField(SearchField<F>),
    SortBy(F),
    ClearSort,
    GotoPage(usize),
    NextPage,
    PrevPage,
    SetPageSize(usize),
    ToggleRow(K),
    SelectPage,
    DeselectPage,
    InvertPage,
    SelectAllMatching,
    ClearSelection,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEvent<F> {
    QueryChanged(String),
    SearchFieldChanged(SearchField<F>),
    SortChanged(Option<SortCriteria<F>>),
    PageChanged(usize),
    PageSizeChanged(usize),
    SelectionChanged(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchEvent<T> {
    Loaded { request_id: u64, records: Vec<T> },
    Failed { request_id: u64, error: String },
}

impl<T> FetchEvent<T> {
    pub const fn request_id(&self) -> u64 {
        match self {
            Self::Loaded { request_id, .. } | Self::Failed { request_id, .. } => *request_id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Applied,
    Failed,
    Stale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingAction {
    action: ActionSpec,
    confirmed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionStatus {
    NothingSelected,
    AwaitingConfirmation { label: &'static str, count: usize },
    Armed { label: &'static str, count: usize },
    Cancelled,
    NoActionPending,
    Completed { succeeded: usize, failed: usize },
}

impl ActionStatus {
    pub fn message(&self) -> String {
        match self {
            Self::NothingSelected => "no eligible rows selected".to_owned(),
            Self::AwaitingConfirmation { label, count } => {
                format!("{label}: confirm to apply to {count} rows")
            }
            Self::Armed { label, count } => format!("{label}: ready for {count} rows"),
            Self::Cancelled => "action cancelled".to_owned(),
            Self::NoActionPending => "no action pending".to_owned(),
            Self::Completed { succeeded, failed } => {
                format!("{succeeded} rows succeeded, {failed} failed")
            }
        }
    }
}

pub struct ListState<T: ListRecord, F> {
    schema: ListSchema<T, F>,
    records: Option<Vec<T>>,
    filter: FilterCriteria<F>,
    sort: Option<SortCriteria<F>>,
    page: PageState,
    selection: SelectionSet<T::Key>,
    pending_action: Option<PendingAction>,
    in_flight: Option<u64>,
    next_request_id: u64,
    last_error: Option<String>,
}

impl<T, F> ListState<T, F>
where
    T: ListRecord,
    F: Copy + PartialEq,
{
    pub fn new(schema: ListSchema<T, F>, page_size: usize) -> Self {
        Self {
            schema,
            records: None,
            filter: FilterCriteria::default(),
            sort: None,
            page: PageState::new(page_size),
            selection: SelectionSet::default(),
            pending_action: None,
            in_flight: None,
            next_request_id: 0,
            last_error: None,
        }
    }

    pub fn with_sort(mut self, sort: SortCriteria<F>) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn schema(&self) -> &ListSchema<T, F> {
        &self.schema
    }

    pub fn query(&self) -> &str {
        &self.filter.query
    }

    pub fn search_field(&self) -> SearchField<F> {
        self.filter.field
    }

    pub fn sort(&self) -> Option<SortCriteria<F>> {
        self.sort
    }

    pub fn page_size(&self) -> usize {
        self.page.page_size()
    }

    pub fn current_page(&self) -> usize {
        self.page.current_page()
    }

    pub fn total_pages(&self) -> usize {
        self.page.total_pages(self.visible_len())
    }

    pub fn is_loaded(&self) -> bool {
        self.records.is_some()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn fetch_in_flight(&self) -> Option<u64> {
        self.in_flight
    }

    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }

    pub fn is_selected(&self, key: &T::Key) -> bool {
        self.selection.contains(key)
    }

    pub fn selected_keys(&self) -> Vec<T::Key> {
        self.selection.to_vec()
    }

    fn loaded_records(&self) -> &[T] {
        self.records.as_deref().unwrap_or_default()
    }

    pub fn visible_records(&self) -> Vec<&T> {
        let mut visible = filter_records(&self.schema, self.loaded_records(), &self.filter);
        if let Some(sort) = self.sort {
            visible.sort_by(|left, right| compare_records(&self.schema, sort, left, right));
        }
        visible
    }

    fn visible_len(&self) -> usize {
        filter_records(&self.schema, self.loaded_records(), &self.filter).len()
    }

    pub fn page_records(&self) -> Vec<&T> {
        let visible = self.visible_records();
        let window = self.page.window(visible.len());
        visible[window].to_vec()
    }

    pub fn dispatch(&mut self, command: ListCommand<F, T::Key>) -> Vec<ListEvent<F>> {
        match command {
            ListCommand::SetQuery(query) => {
                self.filter.query = query;
                let mut events = vec![ListEvent::QueryChanged(self.filter.query.clone())];
                self.reclamp_page(&mut events);
                events
            }
            ListCommand::SetSearchField(field) => {
                self.filter.field = field;
                let mut events = vec![ListEvent::SearchFieldChanged(field)];
                self.reclamp_page(&mut events);
                events
            }
            ListCommand::SortBy(field) => {
                self.sort = Some(cycle_sort(self.sort, field));
                vec![ListEvent::SortChanged(self.sort)]
            }
            ListCommand::ClearSort => {
                self.sort = None;
                vec![ListEvent::SortChanged(None)]
            }
            ListCommand::GotoPage(number) => {
                let before = self.page.current_page();
                self.page.set_page(number, self.visible_len());
                self.page_change_events(before)
            }
            ListCommand::NextPage => {
                let before = self.page.current_page();
                self.page.next_page(self.visible_len());
                self.page_change_events(before)
            }
            ListCommand::PrevPage => {
                let before = self.page.current_page();
                self.page.prev_page(self.visible_len());
                self.page_change_events(before)
            }
            ListCommand::SetPageSize(size) => {
                let before = self.page.current_page();
                self.page.set_page_size(size);
                let mut events = vec![ListEvent::PageSizeChanged(self.page.page_size())];
                events.extend(self.page_change_events(before));
                events
            }
            ListCommand::ToggleRow(key) => {
                if self.selection.contains(&key) {
                    self.selection.remove(&key);
                    vec![ListEvent::SelectionChanged(self.selection.len())]
                } else if self.can_select(&key) {
                    self.selection.insert(key);
                    vec![ListEvent::SelectionChanged(self.selection.len())]
                } else {
                    Vec::new()
                }
            }
            ListCommand::SelectPage => {
                let keys = self.eligible_page_keys();
                self.selection.insert_all(&keys);
                vec![ListEvent::SelectionChanged(self.selection.len())]
            }
            ListCommand::DeselectPage => {
                let keys: Vec<T::Key> = self
                    .page_records()
                    .into_iter()
                    .map(|record| record.key())
                    .collect();
                self.selection.remove_all(&keys);
                vec![ListEvent::SelectionChanged(self.selection.len())]
            }
            ListCommand::InvertPage => {
                let keys = self.eligible_page_keys();
                self.selection.invert_each(&keys);
                vec![ListEvent::SelectionChanged(self.selection.len())]
            }
            ListCommand::SelectAllMatching => {
                let keys = self.eligible_visible_keys();
                self.selection.insert_all(&keys);
                vec![ListEvent::SelectionChanged(self.selection.len())]
            }
            ListCommand::ClearSelection => {
                self.selection.clear();
                vec![ListEvent::SelectionChanged(0)]
            }
        }
    }

    fn page_change_events(&self, before: usize) -> Vec<ListEvent<F>> {
        if self.page.current_page() == before {
            Vec::new()
        } else {
            vec![ListEvent::PageChanged(self.page.current_page())]
        }
    }

    fn reclamp_page(&mut self, events: &mut Vec<ListEvent<F>>) {
        let before = self.page.current_page();
        self.page.clamp_to(self.visible_len());
        if self.page.current_page() != before {
            events.push(ListEvent::PageChanged(self.page.current_page()));
        }
    }

    fn can_select(&self, key: &T::Key) -> bool {
        self.loaded_records()
            .iter()
            .find(|record| record.key() == *key)
            .is_some_and(|record| self.schema.is_eligible(record))
    }

    fn eligible_page_keys(&self) -> Vec<T::Key> {
        self.page_records()
            .into_iter()
            .filter(|record| self.schema.is_eligible(record))
            .map(|record| record.key())
            .collect()
    }

    fn eligible_visible_keys(&self) -> Vec<T::Key> {
        self.visible_records()
            .into_iter()
            .filter(|record| self.schema.is_eligible(record))
            .map(|record| record.key())
            .collect()
    }

    pub fn begin_fetch(&mut self) -> u64 {
        self.next_request_id = self.next_request_id.wrapping_add(1);
        self.in_flight = Some(self.next_request_id);
        self.next_request_id
    }

    pub fn apply_fetch(&mut self, event: FetchEvent<T>) -> FetchOutcome {
        let Some(in_flight) = self.in_flight else {
            return FetchOutcome::Stale;
        };
        if event.request_id() != in_flight {
            return FetchOutcome::Stale;
        }
        self.in_flight = None;

        match event {
            FetchEvent::Loaded { records, .. } => {
                let live: BTreeSet<T::Key> = records.iter().map(|record| record.key()).collect();
                self.selection.retain(|key| live.contains(key));
                self.records = Some(records);
                self.last_error = None;
                self.page.clamp_to(self.visible_len());
                FetchOutcome::Applied
            }
            FetchEvent::Failed { error, .. } => {
                self.last_error = Some(error);
                FetchOutcome::Failed
            }
        }
    }

    pub fn selected_records(&self) -> Vec<&T> {
        resolve_selected(&self.schema, self.loaded_records(), &self.selection)
    }

    pub fn begin_action(&mut self, action: ActionSpec) -> ActionStatus {
        let count = self.selected_records().len();
        if count == 0 {
            self.pending_action = None;
            return ActionStatus::NothingSelected;
        }

        let confirmed = !action.requires_confirmation;
        self.pending_action = Some(PendingAction { action, confirmed });
        if confirmed {
            ActionStatus::Armed {
                label: action.label,
                count,
            }
        } else {
            ActionStatus::AwaitingConfirmation {
                label: action.label,
                count,
            }
        }
    }

    pub fn confirm_action(&mut self) -> ActionStatus {
        if self.pending_action.is_none() {
            return ActionStatus::NoActionPending;
        }

        let count = self.selected_records().len();
        if count == 0 {
            self.pending_action = None;
            return ActionStatus::NothingSelected;
        }

        match self.pending_action.as_mut() {
            Some(pending) => {
                pending.confirmed = true;
                ActionStatus::Armed {
                    label: pending.action.label,
                    count,
                }
            }
            None => ActionStatus::NoActionPending,
        }
    }

    pub fn cancel_action(&mut self) -> ActionStatus {
        match self.pending_action.take() {
            Some(_) => ActionStatus::Cancelled,
            None => ActionStatus::NoActionPending,
        }
    }

    pub fn pending_action(&self) -> Option<ActionSpec> {
        self.pending_action.map(|pending| pending.action)
    }

    pub fn action_is_armed(&self) -> bool {
        self.pending_action.is_some_and(|pending| pending.confirmed)
    }

    pub fn run_armed(
        &mut self,
        mut run: impl FnMut(&T) -> Result<(), String>,
    ) -> Option<BulkOutcome<T::Key>> {
        match self.pending_action {
            Some(pending) if pending.confirmed => {}
            _ => return None,
        }

        let mut outcome = BulkOutcome::default();
        for record in self.selected_records() {
            match run(record) {
                Ok(()) => outcome.succeeded.push(record.key()),
                Err(reason) => outcome.failed.push(BulkFailure {
                    key: record.key(),
                    reason,
                }),
            }
        }

        self.complete_action(&outcome);
        Some(outcome)
    }

    pub fn complete_action(&mut self, outcome: &BulkOutcome<T::Key>) -> ActionStatus {
        // Failed rows stay selected for a retry.
        self.selection.remove_all(&outcome.succeeded);
        self.pending_action = None;
        ActionStatus::Completed {
            succeeded: outcome.succeeded.len(),
            failed: outcome.failed.len(),
        }
    }

    pub fn view(&self) -> ListView<'_, T, F> {
        let visible = self.visible_records();
        let total_items = visible.len();
        let window = self.page.window(total_items);
        let page_rows = &visible[window];

        let page_eligible: Vec<T::Key> = page_rows
            .iter()
            .filter(|record| self.schema.is_eligible(record))
            .map(|record| record.key())
            .collect();
        let global_eligible: Vec<T::Key> = visible
            .iter()
            .filter(|record| self.schema.is_eligible(record))
            .map(|record| record.key())
            .collect();

        let rows = page_rows
            .iter()
            .map(|record| RowView {
                selected: self.selection.contains(&record.key()),
                eligible: self.schema.is_eligible(record),
                record: *record,
            })
            .collect();

        let phase = match &self.records {
            None if self.last_error.is_some() => ViewPhase::Failed,
            None => ViewPhase::Loading,
            Some(records) if records.is_empty() => ViewPhase::Empty,
            Some(_) => ViewPhase::Ready,
        };

        ListView {
            phase,
            rows,
            current_page: self.page.current_page(),
            total_pages: self.page.total_pages(total_items),
            page_size: self.page.page_size(),
            total_items,
            selected_count: self.selection.len(),
            selected_keys: self.selection.to_vec(),
            page_selection: self.selection.classify(&page_eligible),
            global_selection: self.selection.classify(&global_eligible),
            sort: self.sort,
            query: &self.filter.query,
            search_field: self.filter.field,
            last_error: self.last_error.as_deref(),
        }
    }
}
