// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    page_size: usize,
    current_page: usize,
}

impl PageState {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            current_page: 1,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self, total_items: usize) -> usize {
        total_items.div_ceil(self.page_size).max(1)
    }

    pub fn set_page(&mut self, page: usize, total_items: usize) {
        self.current_page = page.clamp(1, self.total_pages(total_items));
    }

    pub fn next_page(&mut self, total_items: usize) {
        self.set_page(self.current_page.saturating_add(1), total_items);
    }

    pub fn prev_page(&mut self, total_items: usize) {
        self.set_page(self.current_page.saturating_sub(1), total_items);
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        // A new window size rebuilds every page, so restart at the first.
        self.current_page = 1;
    }

    pub fn clamp_to(&mut self, total_items: usize) {
        self.current_page = self.current_page.clamp(1, self.total_pages(total_items));
    }

    pub fn window(&self, total_items: usize) -> Range<usize> {
        let start = (self.current_page - 1)
            .saturating_mul(self.page_size)
            .min(total_items);
        let end = start.saturating_add(self.page_size).min(total_items);
        start..end
    }
}
