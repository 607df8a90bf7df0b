// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::fields::ListSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortCriteria<F> {
    pub field: F,
    pub direction: SortDirection,
}

pub fn compare_records<T, F: Copy + PartialEq>(
    schema: &ListSchema<T, F>,
    sort: SortCriteria<F>,
    left: &T,
    right: &T,
) -> Ordering {
    let Some(spec) = schema.spec(sort.field) else {
        return Ordering::Equal;
    };

    let order = (spec.accessor)(left).cmp_value(&(spec.accessor)(right));
    match sort.direction {
        SortDirection::Asc => order,
        SortDirection::Desc => order.reverse(),
    }
}

pub fn sort_records<'a, T, F: Copy + PartialEq>(
    schema: &ListSchema<T, F>,
    records: &'a [T],
    sort: SortCriteria<F>,
) -> Vec<&'a T> {
    let mut ordered: Vec<&T> = records.iter().collect();
    // Stable sort, so records with equal keys keep collection order.
    ordered.sort_by(|left, right| compare_records(schema, sort, left, right));
    ordered
}

pub fn cycle_sort<F: Copy + PartialEq>(
    current: Option<SortCriteria<F>>,
    field: F,
) -> SortCriteria<F> {
    match current {
        Some(sort) if sort.field == field => SortCriteria {
            field,
            direction: match sort.direction {
                SortDirection::Asc => SortDirection::Desc,
                SortDirection::Desc => SortDirection::Asc,
            },
        },
        _ => SortCriteria {
            field,
            direction: SortDirection::Asc,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::{SortCriteria, SortDirection, cycle_sort, sort_records};
    use crate::fields::{FieldSpec, FieldValue, ListSchema};

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Sample {
        id: i64,
        name: String,
        count: Option<i64>,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum SampleField {
        Name,
        Count,
    }

    fn sample(id: i64, name: &str, count: Option<i64>) -> Sample {
        Sample {
            id,
            name: name.to_owned(),
            count,
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
                field: SampleField::Count,
                label: "count",
                accessor: |record: &Sample| FieldValue::OptionalInteger(record.count),
                searchable: false,
            },
        ])
    }

    fn ids(records: &[&Sample]) -> Vec<i64> {
        records.iter().map(|record| record.id).collect()
    }

    #[test]
    fn missing_numeric_values_sort_as_zero() {
        let schema = sample_schema();
        let records = vec![
            sample(1, "a", Some(5)),
            sample(2, "b", None),
            sample(3, "c", Some(2)),
        ];

        let sort = SortCriteria {
            field: SampleField::Count,
            direction: SortDirection::Asc,
        };
        assert_eq!(ids(&sort_records(&schema, &records, sort)), vec![2, 3, 1]);
    }

    #[test]
    fn text_sort_ignores_case() {
        let schema = sample_schema();
        let records = vec![
            sample(1, "beta", None),
            sample(2, "Alpha", None),
            sample(3, "gamma", None),
        ];

        let sort = SortCriteria {
            field: SampleField::Name,
            direction: SortDirection::Asc,
        };
        assert_eq!(ids(&sort_records(&schema, &records, sort)), vec![2, 1, 3]);
    }

    #[test]
    fn equal_keys_keep_collection_order() {
        let schema = sample_schema();
        let records = vec![
            sample(1, "same", Some(1)),
            sample(2, "same", Some(2)),
            sample(3, "same", Some(3)),
        ];

        let sort = SortCriteria {
            field: SampleField::Name,
            direction: SortDirection::Asc,
        };
        assert_eq!(ids(&sort_records(&schema, &records, sort)), vec![1, 2, 3]);
    }

    #[test]
    fn descending_reverses_key_order_but_keeps_tie_runs() {
        let schema = sample_schema();
        let records = vec![
            sample(1, "apple", None),
            sample(2, "apple", None),
            sample(3, "banana", None),
        ];

        let desc = SortCriteria {
            field: SampleField::Name,
            direction: SortDirection::Desc,
        };
        // The tie run [1, 2] keeps collection order even when descending.
        assert_eq!(ids(&sort_records(&schema, &records, desc)), vec![3, 1, 2]);
    }

    #[test]
    fn descending_is_the_exact_inverse_for_distinct_keys() {
        let schema = sample_schema();
        let records = vec![
            sample(1, "c", Some(30)),
            sample(2, "a", Some(10)),
            sample(3, "b", Some(20)),
        ];

        for field in [SampleField::Name, SampleField::Count] {
            let asc = sort_records(
                &schema,
                &records,
                SortCriteria {
                    field,
                    direction: SortDirection::Asc,
                },
            );
            let desc = sort_records(
                &schema,
                &records,
                SortCriteria {
                    field,
                    direction: SortDirection::Desc,
                },
            );

            let mut reversed = ids(&asc);
            reversed.reverse();
            assert_eq!(ids(&desc), reversed);
        }
    }

    #[test]
    fn unknown_sort_field_leaves_order_unchanged() {
        let schema = ListSchema::new(vec![FieldSpec {
            field: SampleField::Name,
            label: "name",
            accessor: |record: &Sample| FieldValue::Text(record.name.clone()),
            searchable: true,
        }]);
        let records = vec![
            sample(1, "b", Some(2)),
            sample(2, "a", Some(1)),
        ];

        let sort = SortCriteria {
            field: SampleField::Count,
            direction: SortDirection::Asc,
        };
        assert_eq!(ids(&sort_records(&schema, &records, sort)), vec![1, 2]);
    }

    #[test]
    fn cycling_the_same_field_flips_direction() {
        let current = Some(SortCriteria {
            field: SampleField::Name,
            direction: SortDirection::Asc,
        });

        let flipped = cycle_sort(current, SampleField::Name);
        assert_eq!(flipped.direction, SortDirection::Desc);

        let restored = cycle_sort(Some(flipped), SampleField::Name);
        assert_eq!(restored.direction, SortDirection::Asc);
    }

    #[test]
    fn cycling_a_new_field_starts_ascending() {
        let current = Some(SortCriteria {
            field: SampleField::Name,
            direction: SortDirection::Desc,
        });

        let switched = cycle_sort(current, SampleField::Count);
        assert_eq!(switched.field, SampleField::Count);
        assert_eq!(switched.direction, SortDirection::Asc);

        let first = cycle_sort(None, SampleField::Name);
        assert_eq!(first.direction, SortDirection::Asc);
    }
}
