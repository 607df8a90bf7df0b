// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::Result;

use crate::ids::{
    CentreId, CircuitId, DocumentId, DocumentTypeId, GeneralAccountId, ItemId, StatusId, StepId,
    UnitCodeId, UserId, VendorId,
};
use crate::model::{
    Circuit, Document, DocumentType, GeneralAccount, Item, ResponsibilityCentre, Status, Step,
    UnitCode, User, Vendor,
};

pub trait ScreenRuntime {
    fn load_documents(&mut self) -> Result<Vec<Document>>;
    fn load_document_types(&mut self) -> Result<Vec<DocumentType>>;
    fn load_vendors(&mut self) -> Result<Vec<Vendor>>;
    fn load_items(&mut self) -> Result<Vec<Item>>;
    fn load_unit_codes(&mut self) -> Result<Vec<UnitCode>>;
    fn load_general_accounts(&mut self) -> Result<Vec<GeneralAccount>>;
    fn load_circuits(&mut self) -> Result<Vec<Circuit>>;
    fn load_steps(&mut self) -> Result<Vec<Step>>;
    fn load_statuses(&mut self) -> Result<Vec<Status>>;
    fn load_users(&mut self) -> Result<Vec<User>>;
    fn load_centres(&mut self) -> Result<Vec<ResponsibilityCentre>>;

    fn delete_document(&mut self, id: DocumentId) -> Result<()>;
    fn delete_document_type(&mut self, id: DocumentTypeId) -> Result<()>;
    fn delete_vendor(&mut self, id: VendorId) -> Result<()>;
    fn delete_item(&mut self, id: ItemId) -> Result<()>;
    fn delete_unit_code(&mut self, id: UnitCodeId) -> Result<()>;
    fn delete_general_account(&mut self, id: GeneralAccountId) -> Result<()>;
    fn delete_circuit(&mut self, id: CircuitId) -> Result<()>;
    fn delete_step(&mut self, id: StepId) -> Result<()>;
    fn delete_status(&mut self, id: StatusId) -> Result<()>;
    fn delete_user(&mut self, id: UserId) -> Result<()>;
    fn delete_centre(&mut self, id: CentreId) -> Result<()>;
}
