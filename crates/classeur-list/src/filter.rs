// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};

use crate::fields::ListSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchField<F> {
    All,
    One(F),
}

impl<F> Default for SearchField<F> {
    fn default() -> Self {
        Self::All
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria<F> {
    pub query: String,
    pub field: SearchField<F>,
}

impl<F> Default for FilterCriteria<F> {
    fn default() -> Self {
        Self {
            query: String::new(),
            field: SearchField::All,
        }
    }
}

impl<F: Copy + PartialEq> FilterCriteria<F> {
    pub fn matches<T>(&self, schema: &ListSchema<T, F>, record: &T) -> bool {
        let needle = self.query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }

        match self.field {
            SearchField::All => schema
                .fields()
                .iter()
                .filter(|spec| spec.searchable)
                .any(|spec| (spec.accessor)(record).to_string().to_lowercase().contains(&needle)),
            SearchField::One(field) => match schema.spec(field) {
                Some(spec) => (spec.accessor)(record)
                    .to_string()
                    .to_lowercase()
                    .contains(&needle),
                // An unknown field never filters anything out.
                None => true,
            },
        }
    }
}

pub fn filter_records<'a, T, F: Copy + PartialEq>(
    schema: &ListSchema<T, F>,
    records: &'a [T],
    criteria: &FilterCriteria<F>,
) -> Vec<&'a T> {
    records
        .iter()
        .filter(|record| criteria.matches(schema, record))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{FilterCriteria, SearchField, filter_records};
    use crate::fields::{FieldSpec, FieldValue, ListSchema};

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Sample {
        name: String,
        reference: String,
        count: Option<i64>,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum SampleField {
        Name,
        Reference,
        Count,
    }

    fn sample(name: &str, reference: &str) -> Sample {
        Sample {
            name: name.to_owned(),
            reference: reference.to_owned(),
            count: None,
        }
    }

    fn sample_schema() -> ListSchema<Sample, SampleField> {
        ListSchema::new(vec![
            FieldSpec {
                field: SampleField::Name,
                label: "name",
                accessor: |record: &Sample| FieldValue::Text(record.name.clone()),
                searchable: true,
            },
            FieldSpec {
                field: SampleField::Reference,
                label: "reference",
                accessor: |record: &Sample| FieldValue::Text(record.reference.clone()),
                searchable: false,
            },
        ])
    }

    #[test]
    fn blank_query_keeps_every_record() {
        let schema = sample_schema();
        let records = vec![sample("Invoice Request", "A-1"), sample("Purchase Order", "A-2")];

        for query in ["", "   ", "\t"] {
            let criteria = FilterCriteria {
                query: query.to_owned(),
                field: SearchField::All,
            };
            let kept = filter_records(&schema, &records, &criteria);
            assert_eq!(kept.len(), 2);
            assert_eq!(kept[0].name, "Invoice Request");
            assert_eq!(kept[1].name, "Purchase Order");
        }
    }

    #[test]
    fn search_is_a_case_insensitive_substring_match() {
        let schema = sample_schema();
        let records = vec![sample("Invoice Request", "A-1"), sample("Purchase Order", "A-2")];

        let criteria = FilterCriteria {
            query: "INVOICE".to_owned(),
            field: SearchField::All,
        };
        let kept = filter_records(&schema, &records, &criteria);

        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].name, "Invoice Request");
    }

    #[test]
    fn all_fields_search_skips_unsearchable_fields() {
        let schema = sample_schema();
        let records = vec![sample("Invoice Request", "A-1")];

        let criteria = FilterCriteria {
            query: "a-1".to_owned(),
            field: SearchField::All,
        };
        assert!(filter_records(&schema, &records, &criteria).is_empty());
    }

    #[test]
    fn single_field_search_targets_only_that_field() {
        let schema = sample_schema();
        let records = vec![sample("Invoice Request", "A-1"), sample("Purchase Order", "A-2")];

        let criteria = FilterCriteria {
            query: "a-2".to_owned(),
            field: SearchField::One(SampleField::Reference),
        };
        let kept = filter_records(&schema, &records, &criteria);

        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].reference, "A-2");
    }

    #[test]
    fn unknown_search_field_filters_nothing() {
        let schema = sample_schema();
        let records = vec![sample("Invoice Request", "A-1"), sample("Purchase Order", "A-2")];

        let criteria = FilterCriteria {
            query: "zzz".to_owned(),
            field: SearchField::One(SampleField::Count),
        };
        assert_eq!(filter_records(&schema, &records, &criteria).len(), 2);
    }

    #[test]
    fn missing_values_read_as_empty_and_never_match() {
        let schema = ListSchema::new(vec![FieldSpec {
            field: SampleField::Count,
            label: "count",
            accessor: |record: &Sample| FieldValue::OptionalInteger(record.count),
            searchable: true,
        }]);
        let records = vec![sample("Invoice Request", "A-1")];

        let criteria = FilterCriteria {
            query: "0".to_owned(),
            field: SearchField::All,
        };
        assert!(filter_records(&schema, &records, &criteria).is_empty());
    }
}
