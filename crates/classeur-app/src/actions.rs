// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use classeur_list::{BulkOutcome, FetchEvent, FetchOutcome, ListState};

use crate::ids::{
    CentreId, CircuitId, DocumentId, DocumentTypeId, GeneralAccountId, ItemId, StatusId, StepId,
    UnitCodeId, UserId, VendorId,
};
use crate::model::{
    Circuit, Document, DocumentType, GeneralAccount, Item, ResponsibilityCentre, Status, Step,
    UnitCode, User, Vendor,
};
use crate::runtime::ScreenRuntime;
use crate::screens::{
    CentreField, CircuitField, DocumentField, DocumentTypeField, GeneralAccountField, ItemField,
    StatusField, StepField, UnitCodeField, UserField, VendorField,
};

macro_rules! screen_ops {
    ($refresh:ident, $delete_selected:ident, $record:ty, $field:ty, $key:ty, $load:ident, $delete:ident) => {
        pub fn $refresh<R: ScreenRuntime>(
            runtime: &mut R,
            state: &mut ListState<$record, $field>,
        ) -> FetchOutcome {
            let request_id = state.begin_fetch();
            let event = match runtime.$load() {
                Ok(records) => FetchEvent::Loaded {
                    request_id,
                    records,
                },
                Err(error) => FetchEvent::Failed {
                    request_id,
                    error: error.to_string(),
                },
            };
            state.apply_fetch(event)
        }

        pub fn $delete_selected<R: ScreenRuntime>(
            runtime: &mut R,
            state: &mut ListState<$record, $field>,
        ) -> Option<BulkOutcome<$key>> {
            state.run_armed(|record| {
                runtime
                    .$delete(record.id)
                    .map_err(|error| error.to_string())
            })
        }
    };
}

screen_ops!(
    refresh_documents,
    delete_selected_documents,
    Document,
    DocumentField,
    DocumentId,
    load_documents,
    delete_document
);
screen_ops!(
    refresh_document_types,
    delete_selected_document_types,
    DocumentType,
    DocumentTypeField,
    DocumentTypeId,
    load_document_types,
    delete_document_type
);
screen_ops!(
    refresh_vendors,
    delete_selected_vendors,
    Vendor,
    VendorField,
    VendorId,
    load_vendors,
    delete_vendor
);
screen_ops!(
    refresh_items,
    delete_selected_items,
    Item,
    ItemField,
    ItemId,
    load_items,
    delete_item
);
screen_ops!(
    refresh_unit_codes,
    delete_selected_unit_codes,
    UnitCode,
    UnitCodeField,
    UnitCodeId,
    load_unit_codes,
    delete_unit_code
);
screen_ops!(
    refresh_general_accounts,
    delete_selected_general_accounts,
    GeneralAccount,
    GeneralAccountField,
    GeneralAccountId,
    load_general_accounts,
    delete_general_account
);
screen_ops!(
    refresh_circuits,
    delete_selected_circuits,
    Circuit,
    CircuitField,
    CircuitId,
    load_circuits,
    delete_circuit
);
screen_ops!(
    refresh_steps,
    delete_selected_steps,
    Step,
    StepField,
    StepId,
    load_steps,
    delete_step
);
screen_ops!(
    refresh_statuses,
    delete_selected_statuses,
    Status,
    StatusField,
    StatusId,
    load_statuses,
    delete_status
);
screen_ops!(
    refresh_users,
    delete_selected_users,
    User,
    UserField,
    UserId,
    load_users,
    delete_user
);
screen_ops!(
    refresh_centres,
    delete_selected_centres,
    ResponsibilityCentre,
    CentreField,
    CentreId,
    load_centres,
    delete_centre
);

#[cfg(test)]
mod tests {
    use super::{delete_selected_document_types, refresh_document_types};
    use crate::ids::{
        CentreId, CircuitId, DocumentId, DocumentTypeId, GeneralAccountId, ItemId, StatusId,
        StepId, UnitCodeId, UserId, VendorId,
    };
    use crate::model::{
        Circuit, Document, DocumentType, GeneralAccount, Item, ResponsibilityCentre, Status, Step,
        UnitCode, User, Vendor,
    };
    use crate::runtime::ScreenRuntime;
    use crate::screens::{DELETE_SELECTED, document_type_schema};
    use anyhow::{Result, bail};
    use classeur_list::{FetchOutcome, ListCommand, ListState};
    use time::macros::datetime;

    struct FakeRuntime {
        document_types: Vec<DocumentType>,
        fail_load: bool,
        fail_delete_ids: Vec<i64>,
        deleted: Vec<i64>,
    }

    impl FakeRuntime {
        fn new(document_types: Vec<DocumentType>) -> Self {
            Self {
                document_types,
                fail_load: false,
                fail_delete_ids: Vec::new(),
                deleted: Vec::new(),
            }
        }
    }

    impl ScreenRuntime for FakeRuntime {
        fn load_documents(&mut self) -> Result<Vec<Document>> {
            bail!("unused in this test")
        }

        fn load_document_types(&mut self) -> Result<Vec<DocumentType>> {
            if self.fail_load {
                bail!("registry unreachable")
            }
            Ok(self.document_types.clone())
        }

        fn load_vendors(&mut self) -> Result<Vec<Vendor>> {
            bail!("unused in this test")
        }

        fn load_items(&mut self) -> Result<Vec<Item>> {
            bail!("unused in this test")
        }

        fn load_unit_codes(&mut self) -> Result<Vec<UnitCode>> {
            bail!("unused in this test")
        }

        fn load_general_accounts(&mut self) -> Result<Vec<GeneralAccount>> {
            bail!("unused in this test")
        }

        fn load_circuits(&mut self) -> Result<Vec<Circuit>> {
            bail!("unused in this test")
        }

        fn load_steps(&mut self) -> Result<Vec<Step>> {
            bail!("unused in this test")
        }

        fn load_statuses(&mut self) -> Result<Vec<Status>> {
            bail!("unused in this test")
        }

        fn load_users(&mut self) -> Result<Vec<User>> {
            bail!("unused in this test")
        }

        fn load_centres(&mut self) -> Result<Vec<ResponsibilityCentre>> {
            bail!("unused in this test")
        }

        fn delete_document(&mut self, _id: DocumentId) -> Result<()> {
            bail!("unused in this test")
        }

        fn delete_document_type(&mut self, id: DocumentTypeId) -> Result<()> {
            if self.fail_delete_ids.contains(&id.get()) {
                bail!("document type in use")
            }
            self.deleted.push(id.get());
            Ok(())
        }

        fn delete_vendor(&mut self, _id: VendorId) -> Result<()> {
            bail!("unused in this test")
        }

        fn delete_item(&mut self, _id: ItemId) -> Result<()> {
            bail!("unused in this test")
        }

        fn delete_unit_code(&mut self, _id: UnitCodeId) -> Result<()> {
            bail!("unused in this test")
        }

        fn delete_general_account(&mut self, _id: GeneralAccountId) -> Result<()> {
            bail!("unused in this test")
        }

        fn delete_circuit(&mut self, _id: CircuitId) -> Result<()> {
            bail!("unused in this test")
        }

        fn delete_step(&mut self, _id: StepId) -> Result<()> {
            bail!("unused in this test")
        }

        fn delete_status(&mut self, _id: StatusId) -> Result<()> {
            bail!("unused in this test")
        }

        fn delete_user(&mut self, _id: UserId) -> Result<()> {
            bail!("unused in this test")
        }

        fn delete_centre(&mut self, _id: CentreId) -> Result<()> {
            bail!("unused in this test")
        }
    }

    fn document_type(id: i64, count: i64) -> DocumentType {
        DocumentType {
            id: DocumentTypeId::new(id),
            name: format!("Type {id}"),
            description: String::new(),
            document_count: count,
            created_at: datetime!(2026-01-02 08:00 UTC),
            updated_at: datetime!(2026-01-02 08:00 UTC),
        }
    }

    #[test]
    fn refresh_loads_the_collection_into_the_list() {
        let mut runtime = FakeRuntime::new(vec![document_type(1, 0), document_type(2, 4)]);
        let mut state = ListState::new(document_type_schema(), 15);

        let outcome = refresh_document_types(&mut runtime, &mut state);

        assert_eq!(outcome, FetchOutcome::Applied);
        assert_eq!(state.view().total_items, 2);
    }

    #[test]
    fn refresh_failure_keeps_the_previous_collection() {
        let mut runtime = FakeRuntime::new(vec![document_type(1, 0)]);
        let mut state = ListState::new(document_type_schema(), 15);
        refresh_document_types(&mut runtime, &mut state);

        runtime.fail_load = true;
        let outcome = refresh_document_types(&mut runtime, &mut state);

        assert_eq!(outcome, FetchOutcome::Failed);
        assert_eq!(state.view().total_items, 1);
        assert_eq!(state.last_error(), Some("registry unreachable"));
    }

    #[test]
    fn delete_selected_aggregates_per_row_results() {
        let types: Vec<DocumentType> = (1..=5).map(|id| document_type(id, 0)).collect();
        let mut runtime = FakeRuntime::new(types);
        runtime.fail_delete_ids = vec![4, 5];

        let mut state = ListState::new(document_type_schema(), 15);
        refresh_document_types(&mut runtime, &mut state);
        state.dispatch(ListCommand::SelectAllMatching);
        state.begin_action(DELETE_SELECTED);
        state.confirm_action();

        let outcome = delete_selected_document_types(&mut runtime, &mut state)
            .expect("armed action should run");

        let succeeded: Vec<i64> = outcome.succeeded.iter().map(|id| id.get()).collect();
        assert_eq!(succeeded, vec![1, 2, 3]);
        assert_eq!(outcome.failed.len(), 2);
        assert_eq!(outcome.failed[0].reason, "document type in use");
        assert_eq!(runtime.deleted, vec![1, 2, 3]);

        let remaining: Vec<i64> = state.selected_keys().iter().map(|id| id.get()).collect();
        assert_eq!(remaining, vec![4, 5]);
    }

    #[test]
    fn delete_without_an_armed_action_does_nothing() {
        let mut runtime = FakeRuntime::new(vec![document_type(1, 0)]);
        let mut state = ListState::new(document_type_schema(), 15);
        refresh_document_types(&mut runtime, &mut state);
        state.dispatch(ListCommand::SelectAllMatching);

        assert!(delete_selected_document_types(&mut runtime, &mut state).is_none());
        assert!(runtime.deleted.is_empty());
    }
}
