// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

pub mod config;

use anyhow::{Context, Result, anyhow, bail};
use classeur_app::{
    CentreId, Circuit, CircuitId, Document, DocumentId, DocumentType, DocumentTypeId,
    GeneralAccount, GeneralAccountId, Item, ItemId, ResponsibilityCentre, ScreenRuntime, Status,
    StatusId, Step, StepId, UnitCode, UnitCodeId, User, UserId, Vendor, VendorId,
};
use reqwest::StatusCode;
use reqwest::blocking::Client as HttpClient;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

pub use config::Config;

#[derive(Debug, Clone)]
pub struct RestClient {
    base_url: String,
    timeout: Duration,
    http: HttpClient,
}

impl RestClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = base_url.trim_end_matches('/').to_owned();
        if base_url.is_empty() {
            bail!("api.base_url must not be empty");
        }

        let http = HttpClient::builder()
            .timeout(timeout)
            .build()
            .context("build HTTP client")?;

        Ok(Self {
            base_url,
            timeout,
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn fetch_collection<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>> {
        let response = self
            .http
            .get(format!("{}/{path}", self.base_url))
            .send()
            .map_err(|error| connection_error(&self.base_url, error))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(clean_error_response(status, &body));
        }

        response
            .json()
            .with_context(|| format!("decode {path} response"))
    }

    fn delete_resource(&self, path: &str, id: i64) -> Result<()> {
        let response = self
            .http
            .delete(format!("{}/{path}/{id}", self.base_url))
            .send()
            .map_err(|error| connection_error(&self.base_url, error))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(clean_error_response(status, &body));
        }

        Ok(())
    }
}

impl ScreenRuntime for RestClient {
    fn load_documents(&mut self) -> Result<Vec<Document>> {
        self.fetch_collection("documents")
    }

    fn load_document_types(&mut self) -> Result<Vec<DocumentType>> {
        self.fetch_collection("document-types")
    }

    fn load_vendors(&mut self) -> Result<Vec<Vendor>> {
        self.fetch_collection("vendors")
    }

    fn load_items(&mut self) -> Result<Vec<Item>> {
        self.fetch_collection("items")
    }

    fn load_unit_codes(&mut self) -> Result<Vec<UnitCode>> {
        self.fetch_collection("unit-codes")
    }

    fn load_general_accounts(&mut self) -> Result<Vec<GeneralAccount>> {
        self.fetch_collection("general-accounts")
    }

    fn load_circuits(&mut self) -> Result<Vec<Circuit>> {
        self.fetch_collection("circuits")
    }

    fn load_steps(&mut self) -> Result<Vec<Step>> {
        self.fetch_collection("steps")
    }

    fn load_statuses(&mut self) -> Result<Vec<Status>> {
        self.fetch_collection("statuses")
    }

    fn load_users(&mut self) -> Result<Vec<User>> {
        self.fetch_collection("users")
    }

    fn load_centres(&mut self) -> Result<Vec<ResponsibilityCentre>> {
        self.fetch_collection("responsibility-centres")
    }

    fn delete_document(&mut self, id: DocumentId) -> Result<()> {
        self.delete_resource("documents", id.get())
    }

    fn delete_document_type(&mut self, id: DocumentTypeId) -> Result<()> {
        self.delete_resource("document-types", id.get())
    }

    fn delete_vendor(&mut self, id: VendorId) -> Result<()> {
        self.delete_resource("vendors", id.get())
    }

    fn delete_item(&mut self, id: ItemId) -> Result<()> {
        self.delete_resource("items", id.get())
    }

    fn delete_unit_code(&mut self, id: UnitCodeId) -> Result<()> {
        self.delete_resource("unit-codes", id.get())
    }

    fn delete_general_account(&mut self, id: GeneralAccountId) -> Result<()> {
        self.delete_resource("general-accounts", id.get())
    }

    fn delete_circuit(&mut self, id: CircuitId) -> Result<()> {
        self.delete_resource("circuits", id.get())
    }

    fn delete_step(&mut self, id: StepId) -> Result<()> {
        self.delete_resource("steps", id.get())
    }

    fn delete_status(&mut self, id: StatusId) -> Result<()> {
        self.delete_resource("statuses", id.get())
    }

    fn delete_user(&mut self, id: UserId) -> Result<()> {
        self.delete_resource("users", id.get())
    }

    fn delete_centre(&mut self, id: CentreId) -> Result<()> {
        self.delete_resource("responsibility-centres", id.get())
    }
}

fn connection_error(base_url: &str, error: reqwest::Error) -> anyhow::Error {
    anyhow!(
        "cannot reach {} -- check api.base_url and that the registry server is running ({})",
        base_url,
        error
    )
}

fn clean_error_response(status: StatusCode, body: &str) -> anyhow::Error {
    if let Ok(parsed) = serde_json::from_str::<ErrorEnvelope>(body)
        && let Some(error) = parsed.error
        && !error.is_empty()
    {
        return anyhow!("server error ({}): {}", status.as_u16(), error);
    }

    if let Ok(parsed) = serde_json::from_str::<MessageEnvelope>(body)
        && let Some(message) = parsed.message
        && !message.is_empty()
    {
        return anyhow!("server error ({}): {}", status.as_u16(), message);
    }

    if body.len() < 100 && !body.contains('{') {
        return anyhow!("server error ({}): {}", status.as_u16(), body);
    }

    anyhow!("server returned {}", status.as_u16())
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MessageEnvelope {
    message: Option<String>,
}
