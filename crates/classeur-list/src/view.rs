// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::fields::ListRecord;
use crate::filter::SearchField;
use crate::select::SelectionSummary;
use crate::sort::SortCriteria;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewPhase {
    Loading,
    Failed,
    Empty,
    Ready,
}

pub struct RowView<'a, T> {
    pub record: &'a T,
    pub selected: bool,
    pub eligible: bool,
}

pub struct ListView<'a, T: ListRecord, F> {
    pub phase: ViewPhase,
    pub rows: Vec<RowView<'a, T>>,
    pub current_page: usize,
    pub total_pages: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub selected_count: usize,
    pub selected_keys: Vec<T::Key>,
    pub page_selection: SelectionSummary,
    pub global_selection: SelectionSummary,
    pub sort: Option<SortCriteria<F>>,
    pub query: &'a str,
    pub search_field: SearchField<F>,
    pub last_error: Option<&'a str>,
}
