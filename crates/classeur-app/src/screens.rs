// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use classeur_list::{ActionSpec, FieldSpec, FieldValue, ListSchema, SortCriteria, SortDirection};
use serde::{Deserialize, Serialize};

use crate::model::{
    Circuit, Document, DocumentType, GeneralAccount, Item, ResponsibilityCentre, Status, Step,
    UnitCode, User, Vendor,
};

pub const DELETE_SELECTED: ActionSpec = ActionSpec {
    id: "delete-selected",
    label: "delete selected",
    requires_confirmation: true,
};

pub const EXPORT_SELECTED: ActionSpec = ActionSpec {
    id: "export-selected",
    label: "export selected",
    requires_confirmation: false,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScreenKind {
    Documents,
    DocumentTypes,
    Vendors,
    Items,
    UnitCodes,
    GeneralAccounts,
    Circuits,
    Steps,
    Statuses,
    Users,
    Centres,
}

impl ScreenKind {
    pub const ALL: [ScreenKind; 11] = [
        ScreenKind::Documents,
        ScreenKind::DocumentTypes,
        ScreenKind::Vendors,
        ScreenKind::Items,
        ScreenKind::UnitCodes,
        ScreenKind::GeneralAccounts,
        ScreenKind::Circuits,
        ScreenKind::Steps,
        ScreenKind::Statuses,
        ScreenKind::Users,
        ScreenKind::Centres,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Documents => "documents",
            Self::DocumentTypes => "document types",
            Self::Vendors => "vendors",
            Self::Items => "items",
            Self::UnitCodes => "unit codes",
            Self::GeneralAccounts => "general accounts",
            Self::Circuits => "circuits",
            Self::Steps => "steps",
            Self::Statuses => "statuses",
            Self::Users => "users",
            Self::Centres => "responsibility centres",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentField {
    Reference,
    Subject,
    TypeName,
    VendorName,
    StatusName,
    Total,
    IssuedOn,
    UpdatedAt,
}

impl DocumentField {
    pub const ALL: [DocumentField; 8] = [
        DocumentField::Reference,
        DocumentField::Subject,
        DocumentField::TypeName,
        DocumentField::VendorName,
        DocumentField::StatusName,
        DocumentField::Total,
        DocumentField::IssuedOn,
        DocumentField::UpdatedAt,
    ];
}

pub const DOCUMENT_DEFAULT_SORT: SortCriteria<DocumentField> = SortCriteria {
    field: DocumentField::UpdatedAt,
    direction: SortDirection::Desc,
};

pub fn document_schema() -> ListSchema<Document, DocumentField> {
    ListSchema::new(vec![
        FieldSpec {
            field: DocumentField::Reference,
            label: "reference",
            accessor: |record: &Document| FieldValue::Text(record.reference.clone()),
            searchable: true,
        },
        FieldSpec {
            field: DocumentField::Subject,
            label: "subject",
            accessor: |record: &Document| FieldValue::Text(record.subject.clone()),
            searchable: true,
        },
        FieldSpec {
            field: DocumentField::TypeName,
            label: "type",
            accessor: |record: &Document| FieldValue::Text(record.type_name.clone()),
            searchable: true,
        },
        FieldSpec {
            field: DocumentField::VendorName,
            label: "vendor",
            accessor: |record: &Document| FieldValue::Text(record.vendor_name.clone()),
            searchable: true,
        },
        FieldSpec {
            field: DocumentField::StatusName,
            label: "status",
            accessor: |record: &Document| FieldValue::Text(record.status_name.clone()),
            searchable: true,
        },
        FieldSpec {
            field: DocumentField::Total,
            label: "total",
            accessor: |record: &Document| FieldValue::Money(record.total_cents),
            searchable: false,
        },
        FieldSpec {
            field: DocumentField::IssuedOn,
            label: "issued",
            accessor: |record: &Document| FieldValue::Timestamp(record.issued_on),
            searchable: false,
        },
        FieldSpec {
            field: DocumentField::UpdatedAt,
            label: "updated",
            accessor: |record: &Document| FieldValue::Timestamp(Some(record.updated_at)),
            searchable: false,
        },
    ])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentTypeField {
    Name,
    Description,
    DocumentCount,
    UpdatedAt,
}

impl DocumentTypeField {
    pub const ALL: [DocumentTypeField; 4] = [
        DocumentTypeField::Name,
        DocumentTypeField::Description,
        DocumentTypeField::DocumentCount,
        DocumentTypeField::UpdatedAt,
    ];
}

pub const DOCUMENT_TYPE_DEFAULT_SORT: SortCriteria<DocumentTypeField> = SortCriteria {
    field: DocumentTypeField::Name,
    direction: SortDirection::Asc,
};

pub fn document_type_schema() -> ListSchema<DocumentType, DocumentTypeField> {
    ListSchema::new(vec![
        FieldSpec {
            field: DocumentTypeField::Name,
            label: "name",
            accessor: |record: &DocumentType| FieldValue::Text(record.name.clone()),
            searchable: true,
        },
        FieldSpec {
            field: DocumentTypeField::Description,
            label: "description",
            accessor: |record: &DocumentType| FieldValue::Text(record.description.clone()),
            searchable: true,
        },
        FieldSpec {
            field: DocumentTypeField::DocumentCount,
            label: "documents",
            accessor: |record: &DocumentType| FieldValue::Integer(record.document_count),
            searchable: false,
        },
        FieldSpec {
            field: DocumentTypeField::UpdatedAt,
            label: "updated",
            accessor: |record: &DocumentType| FieldValue::Timestamp(Some(record.updated_at)),
            searchable: false,
        },
    ])
    .with_eligibility(|record: &DocumentType| record.document_count == 0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VendorField {
    Code,
    Name,
    Email,
    City,
    DocumentCount,
    UpdatedAt,
}

impl VendorField {
    pub const ALL: [VendorField; 6] = [
        VendorField::Code,
        VendorField::Name,
        VendorField::Email,
        VendorField::City,
        VendorField::DocumentCount,
        VendorField::UpdatedAt,
    ];
}

pub const VENDOR_DEFAULT_SORT: SortCriteria<VendorField> = SortCriteria {
    field: VendorField::Name,
    direction: SortDirection::Asc,
};

pub fn vendor_schema() -> ListSchema<Vendor, VendorField> {
    ListSchema::new(vec![
        FieldSpec {
            field: VendorField::Code,
            label: "code",
            accessor: |record: &Vendor| FieldValue::Text(record.code.clone()),
            searchable: true,
        },
        FieldSpec {
            field: VendorField::Name,
            label: "name",
            accessor: |record: &Vendor| FieldValue::Text(record.name.clone()),
            searchable: true,
        },
        FieldSpec {
            field: VendorField::Email,
            label: "email",
            accessor: |record: &Vendor| FieldValue::Text(record.email.clone()),
            searchable: true,
        },
        FieldSpec {
            field: VendorField::City,
            label: "city",
            accessor: |record: &Vendor| FieldValue::Text(record.city.clone()),
            searchable: true,
        },
        FieldSpec {
            field: VendorField::DocumentCount,
            label: "documents",
            accessor: |record: &Vendor| FieldValue::OptionalInteger(record.document_count),
            searchable: false,
        },
        FieldSpec {
            field: VendorField::UpdatedAt,
            label: "updated",
            accessor: |record: &Vendor| FieldValue::Timestamp(Some(record.updated_at)),
            searchable: false,
        },
    ])
    // An unknown aggregate is not proof the vendor is unused.
    .with_eligibility(|record: &Vendor| record.document_count == Some(0))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemField {
    Code,
    Label,
    UnitCode,
    AccountNumber,
    UpdatedAt,
}

impl ItemField {
    pub const ALL: [ItemField; 5] = [
        ItemField::Code,
        ItemField::Label,
        ItemField::UnitCode,
        ItemField::AccountNumber,
        ItemField::UpdatedAt,
    ];
}

pub const ITEM_DEFAULT_SORT: SortCriteria<ItemField> = SortCriteria {
    field: ItemField::Code,
    direction: SortDirection::Asc,
};

pub fn item_schema() -> ListSchema<Item, ItemField> {
    ListSchema::new(vec![
        FieldSpec {
            field: ItemField::Code,
            label: "code",
            accessor: |record: &Item| FieldValue::Text(record.code.clone()),
            searchable: true,
        },
        FieldSpec {
            field: ItemField::Label,
            label: "label",
            accessor: |record: &Item| FieldValue::Text(record.label.clone()),
            searchable: true,
        },
        FieldSpec {
            field: ItemField::UnitCode,
            label: "unit",
            accessor: |record: &Item| FieldValue::Text(record.unit_code.clone()),
            searchable: true,
        },
        FieldSpec {
            field: ItemField::AccountNumber,
            label: "account",
            accessor: |record: &Item| FieldValue::Text(record.account_number.clone()),
            searchable: true,
        },
        FieldSpec {
            field: ItemField::UpdatedAt,
            label: "updated",
            accessor: |record: &Item| FieldValue::Timestamp(Some(record.updated_at)),
            searchable: false,
        },
    ])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitCodeField {
    Code,
    Label,
    Coefficient,
    ItemCount,
}

impl UnitCodeField {
    pub const ALL: [UnitCodeField; 4] = [
        UnitCodeField::Code,
        UnitCodeField::Label,
        UnitCodeField::Coefficient,
        UnitCodeField::ItemCount,
    ];
}

pub const UNIT_CODE_DEFAULT_SORT: SortCriteria<UnitCodeField> = SortCriteria {
    field: UnitCodeField::Code,
    direction: SortDirection::Asc,
};

pub fn unit_code_schema() -> ListSchema<UnitCode, UnitCodeField> {
    ListSchema::new(vec![
        FieldSpec {
            field: UnitCodeField::Code,
            label: "code",
            accessor: |record: &UnitCode| FieldValue::Text(record.code.clone()),
            searchable: true,
        },
        FieldSpec {
            field: UnitCodeField::Label,
            label: "label",
            accessor: |record: &UnitCode| FieldValue::Text(record.label.clone()),
            searchable: true,
        },
        FieldSpec {
            field: UnitCodeField::Coefficient,
            label: "coefficient",
            accessor: |record: &UnitCode| FieldValue::Decimal(record.coefficient),
            searchable: false,
        },
        FieldSpec {
            field: UnitCodeField::ItemCount,
            label: "items",
            accessor: |record: &UnitCode| FieldValue::Integer(record.item_count),
            searchable: false,
        },
    ])
    .with_eligibility(|record: &UnitCode| record.item_count == 0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GeneralAccountField {
    Number,
    Label,
    ItemCount,
}

impl GeneralAccountField {
    pub const ALL: [GeneralAccountField; 3] = [
        GeneralAccountField::Number,
        GeneralAccountField::Label,
        GeneralAccountField::ItemCount,
    ];
}

pub const GENERAL_ACCOUNT_DEFAULT_SORT: SortCriteria<GeneralAccountField> = SortCriteria {
    field: GeneralAccountField::Number,
    direction: SortDirection::Asc,
};

pub fn general_account_schema() -> ListSchema<GeneralAccount, GeneralAccountField> {
    ListSchema::new(vec![
        FieldSpec {
            field: GeneralAccountField::Number,
            label: "number",
            accessor: |record: &GeneralAccount| FieldValue::Text(record.number.clone()),
            searchable: true,
        },
        FieldSpec {
            field: GeneralAccountField::Label,
            label: "label",
            accessor: |record: &GeneralAccount| FieldValue::Text(record.label.clone()),
            searchable: true,
        },
        FieldSpec {
            field: GeneralAccountField::ItemCount,
            label: "items",
            accessor: |record: &GeneralAccount| FieldValue::Integer(record.item_count),
            searchable: false,
        },
    ])
    .with_eligibility(|record: &GeneralAccount| record.item_count == 0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CircuitField {
    Code,
    Label,
    StepCount,
}

impl CircuitField {
    pub const ALL: [CircuitField; 3] = [
        CircuitField::Code,
        CircuitField::Label,
        CircuitField::StepCount,
    ];
}

pub const CIRCUIT_DEFAULT_SORT: SortCriteria<CircuitField> = SortCriteria {
    field: CircuitField::Code,
    direction: SortDirection::Asc,
};

pub fn circuit_schema() -> ListSchema<Circuit, CircuitField> {
    ListSchema::new(vec![
        FieldSpec {
            field: CircuitField::Code,
            label: "code",
            accessor: |record: &Circuit| FieldValue::Text(record.code.clone()),
            searchable: true,
        },
        FieldSpec {
            field: CircuitField::Label,
            label: "label",
            accessor: |record: &Circuit| FieldValue::Text(record.label.clone()),
            searchable: true,
        },
        FieldSpec {
            field: CircuitField::StepCount,
            label: "steps",
            accessor: |record: &Circuit| FieldValue::Integer(record.step_count),
            searchable: false,
        },
    ])
    .with_eligibility(|record: &Circuit| record.step_count == 0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepField {
    Name,
    CircuitCode,
    StatusName,
    Position,
    DocumentCount,
}

impl StepField {
    pub const ALL: [StepField; 5] = [
        StepField::Name,
        StepField::CircuitCode,
        StepField::StatusName,
        StepField::Position,
        StepField::DocumentCount,
    ];
}

pub const STEP_DEFAULT_SORT: SortCriteria<StepField> = SortCriteria {
    field: StepField::Position,
    direction: SortDirection::Asc,
};

pub fn step_schema() -> ListSchema<Step, StepField> {
    ListSchema::new(vec![
        FieldSpec {
            field: StepField::Name,
            label: "name",
            accessor: |record: &Step| FieldValue::Text(record.name.clone()),
            searchable: true,
        },
        FieldSpec {
            field: StepField::CircuitCode,
            label: "circuit",
            accessor: |record: &Step| FieldValue::Text(record.circuit_code.clone()),
            searchable: true,
        },
        FieldSpec {
            field: StepField::StatusName,
            label: "status",
            accessor: |record: &Step| FieldValue::Text(record.status_name.clone()),
            searchable: true,
        },
        FieldSpec {
            field: StepField::Position,
            label: "position",
            accessor: |record: &Step| FieldValue::Integer(record.position),
            searchable: false,
        },
        FieldSpec {
            field: StepField::DocumentCount,
            label: "documents",
            accessor: |record: &Step| FieldValue::Integer(record.document_count),
            searchable: false,
        },
    ])
    .with_eligibility(|record: &Step| record.document_count == 0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusField {
    Name,
    Rank,
    StepCount,
}

impl StatusField {
    pub const ALL: [StatusField; 3] = [
        StatusField::Name,
        StatusField::Rank,
        StatusField::StepCount,
    ];
}

pub const STATUS_DEFAULT_SORT: SortCriteria<StatusField> = SortCriteria {
    field: StatusField::Rank,
    direction: SortDirection::Asc,
};

pub fn status_schema() -> ListSchema<Status, StatusField> {
    ListSchema::new(vec![
        FieldSpec {
            field: StatusField::Name,
            label: "name",
            accessor: |record: &Status| FieldValue::Text(record.name.clone()),
            searchable: true,
        },
        FieldSpec {
            field: StatusField::Rank,
            label: "rank",
            accessor: |record: &Status| FieldValue::Integer(record.rank),
            searchable: false,
        },
        FieldSpec {
            field: StatusField::StepCount,
            label: "steps",
            accessor: |record: &Status| FieldValue::Integer(record.step_count),
            searchable: false,
        },
    ])
    .with_eligibility(|record: &Status| record.step_count == 0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserField {
    Username,
    FullName,
    Email,
    Role,
    CentreCode,
    UpdatedAt,
}

impl UserField {
    pub const ALL: [UserField; 6] = [
        UserField::Username,
        UserField::FullName,
        UserField::Email,
        UserField::Role,
        UserField::CentreCode,
        UserField::UpdatedAt,
    ];
}

pub const USER_DEFAULT_SORT: SortCriteria<UserField> = SortCriteria {
    field: UserField::Username,
    direction: SortDirection::Asc,
};

pub fn user_schema() -> ListSchema<User, UserField> {
    ListSchema::new(vec![
        FieldSpec {
            field: UserField::Username,
            label: "username",
            accessor: |record: &User| FieldValue::Text(record.username.clone()),
            searchable: true,
        },
        FieldSpec {
            field: UserField::FullName,
            label: "name",
            accessor: |record: &User| FieldValue::Text(record.full_name.clone()),
            searchable: true,
        },
        FieldSpec {
            field: UserField::Email,
            label: "email",
            accessor: |record: &User| FieldValue::Text(record.email.clone()),
            searchable: true,
        },
        FieldSpec {
            field: UserField::Role,
            label: "role",
            accessor: |record: &User| FieldValue::Text(record.role.as_str().to_owned()),
            searchable: true,
        },
        FieldSpec {
            field: UserField::CentreCode,
            label: "centre",
            accessor: |record: &User| FieldValue::Text(record.centre_code.clone()),
            searchable: true,
        },
        FieldSpec {
            field: UserField::UpdatedAt,
            label: "updated",
            accessor: |record: &User| FieldValue::Timestamp(Some(record.updated_at)),
            searchable: false,
        },
    ])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CentreField {
    Code,
    Label,
    UserCount,
}

impl CentreField {
    pub const ALL: [CentreField; 3] = [
        CentreField::Code,
        CentreField::Label,
        CentreField::UserCount,
    ];
}

pub const CENTRE_DEFAULT_SORT: SortCriteria<CentreField> = SortCriteria {
    field: CentreField::Code,
    direction: SortDirection::Asc,
};

pub fn centre_schema() -> ListSchema<ResponsibilityCentre, CentreField> {
    ListSchema::new(vec![
        FieldSpec {
            field: CentreField::Code,
            label: "code",
            accessor: |record: &ResponsibilityCentre| FieldValue::Text(record.code.clone()),
            searchable: true,
        },
        FieldSpec {
            field: CentreField::Label,
            label: "label",
            accessor: |record: &ResponsibilityCentre| FieldValue::Text(record.label.clone()),
            searchable: true,
        },
        FieldSpec {
            field: CentreField::UserCount,
            label: "users",
            accessor: |record: &ResponsibilityCentre| FieldValue::Integer(record.user_count),
            searchable: false,
        },
    ])
    .with_eligibility(|record: &ResponsibilityCentre| record.user_count == 0)
}

#[cfg(test)]
mod tests {
    use super::{
        CENTRE_DEFAULT_SORT, CIRCUIT_DEFAULT_SORT, CentreField, CircuitField,
        DOCUMENT_DEFAULT_SORT, DOCUMENT_TYPE_DEFAULT_SORT, DocumentField, DocumentTypeField,
        GENERAL_ACCOUNT_DEFAULT_SORT, GeneralAccountField, ITEM_DEFAULT_SORT, ItemField,
        STATUS_DEFAULT_SORT, STEP_DEFAULT_SORT, ScreenKind, StatusField, StepField,
        UNIT_CODE_DEFAULT_SORT, USER_DEFAULT_SORT, UnitCodeField, UserField, VENDOR_DEFAULT_SORT,
        VendorField,
        centre_schema, circuit_schema, document_schema, document_type_schema,
        general_account_schema, item_schema, status_schema, step_schema, unit_code_schema,
        user_schema, vendor_schema,
    };
    use crate::ids::{DocumentId, DocumentTypeId, StatusId, VendorId};
    use crate::model::{Document, DocumentType, Vendor};
    use classeur_list::FieldValue;
    use std::collections::BTreeSet;
    use time::macros::datetime;

    fn sample_document() -> Document {
        Document {
            id: DocumentId::new(7),
            reference: "DOC-2026-00007".to_owned(),
            subject: "Office chairs".to_owned(),
            type_id: DocumentTypeId::new(2),
            type_name: "Purchase Order".to_owned(),
            vendor_id: VendorId::new(4),
            vendor_name: "Mobilier Nord".to_owned(),
            status_id: StatusId::new(1),
            status_name: "Draft".to_owned(),
            total_cents: Some(125_000),
            issued_on: None,
            created_at: datetime!(2026-02-10 09:15 UTC),
            updated_at: datetime!(2026-02-11 16:40 UTC),
        }
    }

    fn sample_document_type(count: i64) -> DocumentType {
        DocumentType {
            id: DocumentTypeId::new(2),
            name: "Purchase Order".to_owned(),
            description: "Outgoing purchase orders".to_owned(),
            document_count: count,
            created_at: datetime!(2026-01-02 08:00 UTC),
            updated_at: datetime!(2026-01-02 08:00 UTC),
        }
    }

    fn sample_vendor(count: Option<i64>) -> Vendor {
        Vendor {
            id: VendorId::new(4),
            code: "MOB-NORD".to_owned(),
            name: "Mobilier Nord".to_owned(),
            email: "compta@mobilier-nord.example".to_owned(),
            city: "Lille".to_owned(),
            document_count: count,
            created_at: datetime!(2026-01-05 08:00 UTC),
            updated_at: datetime!(2026-01-06 08:00 UTC),
        }
    }

    #[test]
    fn document_schema_projects_display_values() {
        let schema = document_schema();
        let document = sample_document();

        assert_eq!(
            schema.value(DocumentField::Reference, &document),
            Some(FieldValue::Text("DOC-2026-00007".to_owned())),
        );
        assert_eq!(
            schema
                .value(DocumentField::Total, &document)
                .map(|value| value.to_string()),
            Some("1250.00".to_owned()),
        );
        assert_eq!(
            schema
                .value(DocumentField::IssuedOn, &document)
                .map(|value| value.to_string()),
            Some(String::new()),
        );
        assert_eq!(
            schema
                .value(DocumentField::UpdatedAt, &document)
                .map(|value| value.to_string()),
            Some("2026-02-11".to_owned()),
        );
    }

    #[test]
    fn documents_are_always_eligible() {
        let schema = document_schema();
        assert!(schema.is_eligible(&sample_document()));
    }

    #[test]
    fn document_type_deletion_requires_zero_documents() {
        let schema = document_type_schema();
        assert!(schema.is_eligible(&sample_document_type(0)));
        assert!(!schema.is_eligible(&sample_document_type(12)));
    }

    #[test]
    fn vendor_with_unknown_document_count_is_not_deletable() {
        let schema = vendor_schema();
        assert!(schema.is_eligible(&sample_vendor(Some(0))));
        assert!(!schema.is_eligible(&sample_vendor(Some(3))));
        assert!(!schema.is_eligible(&sample_vendor(None)));
    }

    #[test]
    fn every_declared_field_has_a_spec() {
        let documents = document_schema();
        for field in DocumentField::ALL {
            assert!(documents.spec(field).is_some(), "{field:?}");
        }

        let types = document_type_schema();
        for field in DocumentTypeField::ALL {
            assert!(types.spec(field).is_some(), "{field:?}");
        }

        let vendors = vendor_schema();
        for field in VendorField::ALL {
            assert!(vendors.spec(field).is_some(), "{field:?}");
        }

        let items = item_schema();
        for field in ItemField::ALL {
            assert!(items.spec(field).is_some(), "{field:?}");
        }

        let unit_codes = unit_code_schema();
        for field in UnitCodeField::ALL {
            assert!(unit_codes.spec(field).is_some(), "{field:?}");
        }

        let accounts = general_account_schema();
        for field in GeneralAccountField::ALL {
            assert!(accounts.spec(field).is_some(), "{field:?}");
        }

        let circuits = circuit_schema();
        for field in CircuitField::ALL {
            assert!(circuits.spec(field).is_some(), "{field:?}");
        }

        let steps = step_schema();
        for field in StepField::ALL {
            assert!(steps.spec(field).is_some(), "{field:?}");
        }

        let statuses = status_schema();
        for field in StatusField::ALL {
            assert!(statuses.spec(field).is_some(), "{field:?}");
        }

        let users = user_schema();
        for field in UserField::ALL {
            assert!(users.spec(field).is_some(), "{field:?}");
        }

        let centres = centre_schema();
        for field in CentreField::ALL {
            assert!(centres.spec(field).is_some(), "{field:?}");
        }
    }

    #[test]
    fn screen_catalog_labels_are_unique() {
        let labels: BTreeSet<&str> = ScreenKind::ALL.iter().map(|kind| kind.label()).collect();
        assert_eq!(labels.len(), ScreenKind::ALL.len());
        assert!(labels.iter().all(|label| !label.is_empty()));
    }

    #[test]
    fn default_sorts_point_at_declared_fields() {
        assert!(document_schema().spec(DOCUMENT_DEFAULT_SORT.field).is_some());
        assert!(document_type_schema()
            .spec(DOCUMENT_TYPE_DEFAULT_SORT.field)
            .is_some());
        assert!(vendor_schema().spec(VENDOR_DEFAULT_SORT.field).is_some());
        assert!(item_schema().spec(ITEM_DEFAULT_SORT.field).is_some());
        assert!(unit_code_schema().spec(UNIT_CODE_DEFAULT_SORT.field).is_some());
        assert!(general_account_schema()
            .spec(GENERAL_ACCOUNT_DEFAULT_SORT.field)
            .is_some());
        assert!(circuit_schema().spec(CIRCUIT_DEFAULT_SORT.field).is_some());
        assert!(step_schema().spec(STEP_DEFAULT_SORT.field).is_some());
        assert!(status_schema().spec(STATUS_DEFAULT_SORT.field).is_some());
        assert!(user_schema().spec(USER_DEFAULT_SORT.field).is_some());
        assert!(centre_schema().spec(CENTRE_DEFAULT_SORT.field).is_some());
    }
}
