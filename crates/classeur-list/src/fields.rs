// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use std::cmp::Ordering;
use std::fmt;
use time::OffsetDateTime;

pub trait ListRecord {
    type Key: Clone + Ord + fmt::Debug;

    fn key(&self) -> Self::Key;
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    OptionalInteger(Option<i64>),
    Decimal(Option<f64>),
    Money(Option<i64>),
    Timestamp(Option<OffsetDateTime>),
}

impl FieldValue {
    pub fn cmp_value(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Text(left), Self::Text(right)) => {
                left.to_ascii_lowercase().cmp(&right.to_ascii_lowercase())
            }
            (Self::Integer(left), Self::Integer(right)) => left.cmp(right),
            // Missing numeric values order as zero.
            (Self::OptionalInteger(left), Self::OptionalInteger(right)) => {
                left.unwrap_or(0).cmp(&right.unwrap_or(0))
            }
            (Self::Money(left), Self::Money(right)) => left.unwrap_or(0).cmp(&right.unwrap_or(0)),
            (Self::Decimal(left), Self::Decimal(right)) => {
                left.unwrap_or(0.0).total_cmp(&right.unwrap_or(0.0))
            }
            (Self::Timestamp(left), Self::Timestamp(right)) => left.cmp(right),
            _ => self
                .to_string()
                .to_ascii_lowercase()
                .cmp(&other.to_string().to_ascii_lowercase()),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(value) => write!(f, "{value}"),
            Self::Integer(value) => write!(f, "{value}"),
            Self::OptionalInteger(Some(value)) => write!(f, "{value}"),
            Self::Decimal(Some(value)) => write!(f, "{value:.2}"),
            Self::Money(Some(cents)) => write!(f, "{}", format_money(*cents)),
            Self::Timestamp(Some(value)) => write!(f, "{}", value.date()),
            Self::OptionalInteger(None)
            | Self::Decimal(None)
            | Self::Money(None)
            | Self::Timestamp(None) => Ok(()),
        }
    }
}

fn format_money(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let absolute = cents.unsigned_abs();
    let euros = absolute / 100;
    let cents_component = absolute % 100;
    format!("{sign}{euros}.{cents_component:02}")
}

pub struct FieldSpec<T, F> {
    pub field: F,
    pub label: &'static str,
    pub accessor: fn(&T) -> FieldValue,
    pub searchable: bool,
}

// Derived Clone would demand T: Clone even though only a fn pointer
// mentions T.
impl<T, F: Clone> Clone for FieldSpec<T, F> {
    fn clone(&self) -> Self {
        Self {
            field: self.field.clone(),
            label: self.label,
            accessor: self.accessor,
            searchable: self.searchable,
        }
    }
}

pub struct ListSchema<T, F> {
    fields: Vec<FieldSpec<T, F>>,
    eligibility: Option<fn(&T) -> bool>,
}

impl<T, F: Copy + PartialEq> ListSchema<T, F> {
    pub fn new(fields: Vec<FieldSpec<T, F>>) -> Self {
        Self {
            fields,
            eligibility: None,
        }
    }

    pub fn with_eligibility(mut self, eligibility: fn(&T) -> bool) -> Self {
        self.eligibility = Some(eligibility);
        self
    }

    pub fn fields(&self) -> &[FieldSpec<T, F>] {
        &self.fields
    }

    pub fn spec(&self, field: F) -> Option<&FieldSpec<T, F>> {
        self.fields.iter().find(|spec| spec.field == field)
    }

    pub fn value(&self, field: F, record: &T) -> Option<FieldValue> {
        self.spec(field).map(|spec| (spec.accessor)(record))
    }

    pub fn label(&self, field: F) -> Option<&'static str> {
        self.spec(field).map(|spec| spec.label)
    }

    pub fn is_eligible(&self, record: &T) -> bool {
        match self.eligibility {
            Some(eligible) => eligible(record),
            None => true,
        }
    }
}

impl<T, F: Clone> Clone for ListSchema<T, F> {
    fn clone(&self) -> Self {
        Self {
            fields: self.fields.clone(),
            eligibility: self.eligibility,
        }
    }
}
