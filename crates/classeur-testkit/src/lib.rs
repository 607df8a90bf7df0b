// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use classeur_app::{
    CentreId, Circuit, CircuitId, Document, DocumentId, DocumentType, DocumentTypeId,
    GeneralAccount, GeneralAccountId, Item, ItemId, ResponsibilityCentre, Status, StatusId, Step,
    StepId, UnitCode, UnitCodeId, User, UserId, UserRole, Vendor, VendorId,
};
use time::{Date, Duration, Month, OffsetDateTime, Time};

const REFERENCE_YEAR: i32 = 2026;

const DOCUMENT_TYPE_NAMES: [(&str, &str); 8] = [
    ("Invoice", "supplier invoices awaiting payment"),
    ("Purchase Order", "orders issued to suppliers"),
    ("Credit Note", "credits received against invoices"),
    ("Delivery Note", "goods received confirmations"),
    ("Contract", "framework and service contracts"),
    ("Quote", "supplier quotes under comparison"),
    ("Expense Report", "staff expense claims"),
    ("Receipt", "payment receipts and proofs"),
];

const VENDOR_STEMS: [&str; 10] = [
    "Moreau",
    "Lefebvre",
    "Fournier",
    "Girard",
    "Bonnet",
    "Lambert",
    "Rousseau",
    "Mercier",
    "Blanchard",
    "Perrot",
];
const VENDOR_SUFFIXES: [&str; 6] = [
    "SARL",
    "SAS",
    "et Fils",
    "Distribution",
    "Industrie",
    "Logistique",
];

const CITIES: [&str; 10] = [
    "Lyon",
    "Nantes",
    "Lille",
    "Bordeaux",
    "Toulouse",
    "Strasbourg",
    "Rennes",
    "Grenoble",
    "Dijon",
    "Angers",
];

const ITEM_LABELS: [&str; 12] = [
    "Copy paper A4",
    "Toner cartridge",
    "Desk chair",
    "Laptop dock",
    "Network switch",
    "Safety gloves",
    "Cleaning kit",
    "Shipping crate",
    "Label printer",
    "Badge reader",
    "First aid kit",
    "Cable spool",
];

const UNIT_CODES: [(&str, &str); 8] = [
    ("EA", "each"),
    ("BX", "box"),
    ("KG", "kilogram"),
    ("L", "litre"),
    ("M", "metre"),
    ("HR", "hour"),
    ("PK", "pack"),
    ("PAL", "pallet"),
];

const ACCOUNTS: [(&str, &str); 8] = [
    ("606100", "Energy and fluids"),
    ("606300", "Office supplies"),
    ("611000", "Subcontracting"),
    ("613200", "Building rent"),
    ("615200", "Equipment upkeep"),
    ("622600", "Professional fees"),
    ("624100", "Freight on purchases"),
    ("626000", "Postage and telecom"),
];

const CIRCUITS: [(&str, &str); 5] = [
    ("ACH", "procurement approval"),
    ("FIN", "finance review"),
    ("DIR", "management sign-off"),
    ("JUR", "legal review"),
    ("RH", "staff expense approval"),
];

const STEP_NAMES: [&str; 6] = [
    "registration",
    "technical review",
    "budget check",
    "approval",
    "payment release",
    "archiving",
];

const STATUSES: [(&str, bool); 6] = [
    ("draft", false),
    ("submitted", false),
    ("under review", false),
    ("approved", false),
    ("rejected", true),
    ("archived", true),
];

const ROLES: [UserRole; 3] = [UserRole::Admin, UserRole::Manager, UserRole::Viewer];

const FIRST_NAMES: [&str; 12] = [
    "Claire", "Julien", "Sophie", "Marc", "Elise", "Antoine", "Camille", "Hugo", "Manon", "Paul",
    "Louise", "Thomas",
];
const LAST_NAMES: [&str; 12] = [
    "Moreau",
    "Lefevre",
    "Garnier",
    "Roche",
    "Perrin",
    "Chevalier",
    "Leroy",
    "Marchand",
    "Dubois",
    "Fontaine",
    "Caron",
    "Picard",
];

const CENTRES: [(&str, &str); 6] = [
    ("DG", "general management"),
    ("DAF", "finance and administration"),
    ("DSI", "information systems"),
    ("DRH", "human resources"),
    ("DT", "technical services"),
    ("DC", "procurement"),
];

const SUBJECT_WORDS: [&str; 20] = [
    "annual",
    "quarterly",
    "maintenance",
    "supply",
    "renewal",
    "framework",
    "transport",
    "server",
    "office",
    "licence",
    "audit",
    "training",
    "cleaning",
    "security",
    "printing",
    "fleet",
    "network",
    "energy",
    "insurance",
    "catering",
];

#[derive(Debug, Clone)]
struct DeterministicRng {
    state: u64,
}

impl DeterministicRng {
    fn new(seed: u64) -> Self {
        let mut state = seed ^ 0x9E37_79B9_7F4A_7C15;
        if state == 0 {
            state = 0xA409_3822_299F_31D0;
        }
        Self { state }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);

        let mut x = self.state;
        x ^= x >> 13;
        x ^= x << 7;
        x ^= x >> 17;
        x
    }

    fn int_n(&mut self, n: usize) -> usize {
        if n <= 1 {
            return 0;
        }
        (self.next_u64() % (n as u64)) as usize
    }

    fn bool(&mut self) -> bool {
        (self.next_u64() & 1) == 1
    }
}

#[derive(Debug, Clone)]
pub struct RegistryFaker {
    rng: DeterministicRng,
    seed: u64,
}

impl RegistryFaker {
    pub fn new(seed: u64) -> Self {
        let normalized = if seed == 0 { 1 } else { seed };
        Self {
            rng: DeterministicRng::new(normalized),
            seed: normalized,
        }
    }

    pub fn int_n(&mut self, n: usize) -> usize {
        self.rng.int_n(n)
    }

    pub fn document(&mut self, id: i64) -> Document {
        let type_index = self.rng.int_n(DOCUMENT_TYPE_NAMES.len());
        let (type_name, _) = DOCUMENT_TYPE_NAMES[type_index];
        let status_index = self.rng.int_n(STATUSES.len());
        let (status_name, _) = STATUSES[status_index];
        let subject = self.subject();
        let vendor_name = self.vendor_name();
        let (created_at, updated_at) = self.stamps();

        let issued_on = if self.rng.bool() {
            Some(self.date_in_year(REFERENCE_YEAR - 1))
        } else {
            None
        };
        let total_cents = if self.rng.bool() {
            Some(self.int_range_i64(1_000, 25_000_000))
        } else {
            None
        };

        Document {
            id: DocumentId::new(id),
            reference: format!(
                "{}-{}-{:05}",
                reference_prefix(type_name),
                REFERENCE_YEAR,
                self.int_range_i64(1, 99_999),
            ),
            subject,
            type_id: DocumentTypeId::new(type_index as i64 + 1),
            type_name: type_name.to_owned(),
            vendor_id: VendorId::new(self.int_range_i64(1, 40)),
            vendor_name,
            status_id: StatusId::new(status_index as i64 + 1),
            status_name: status_name.to_owned(),
            total_cents,
            issued_on,
            created_at,
            updated_at,
        }
    }

    pub fn document_type(&mut self, id: i64) -> DocumentType {
        let (name, description) = DOCUMENT_TYPE_NAMES[self.rng.int_n(DOCUMENT_TYPE_NAMES.len())];
        let (created_at, updated_at) = self.stamps();
        DocumentType {
            id: DocumentTypeId::new(id),
            name: name.to_owned(),
            description: description.to_owned(),
            document_count: self.int_range_i64(0, 8),
            created_at,
            updated_at,
        }
    }

    pub fn unused_document_type(&mut self, id: i64) -> DocumentType {
        let mut doc_type = self.document_type(id);
        doc_type.document_count = 0;
        doc_type
    }

    pub fn vendor(&mut self, id: i64) -> Vendor {
        let stem = self.pick(&VENDOR_STEMS);
        let suffix = self.pick(&VENDOR_SUFFIXES);
        let city = self.pick(&CITIES);
        let (created_at, updated_at) = self.stamps();
        Vendor {
            id: VendorId::new(id),
            code: format!("V{id:04}"),
            name: format!("{stem} {suffix}"),
            email: format!("contact@{}.example.fr", stem.to_ascii_lowercase()),
            city: city.to_owned(),
            document_count: Some(self.int_range_i64(0, 8)),
            created_at,
            updated_at,
        }
    }

    pub fn item(&mut self, id: i64) -> Item {
        let unit_index = self.rng.int_n(UNIT_CODES.len());
        let (unit_code, _) = UNIT_CODES[unit_index];
        let account_index = self.rng.int_n(ACCOUNTS.len());
        let (account_number, _) = ACCOUNTS[account_index];
        let label = self.pick(&ITEM_LABELS);
        let (created_at, updated_at) = self.stamps();
        Item {
            id: ItemId::new(id),
            code: format!("ART-{id:04}"),
            label: label.to_owned(),
            unit_code_id: UnitCodeId::new(unit_index as i64 + 1),
            unit_code: unit_code.to_owned(),
            account_id: GeneralAccountId::new(account_index as i64 + 1),
            account_number: account_number.to_owned(),
            created_at,
            updated_at,
        }
    }

    pub fn unit_code(&mut self, id: i64) -> UnitCode {
        let (code, label) = UNIT_CODES[self.rng.int_n(UNIT_CODES.len())];
        let coefficient = if self.rng.bool() {
            Some(self.int_range_i64(1, 1_000) as f64 / 100.0)
        } else {
            None
        };
        let (created_at, updated_at) = self.stamps();
        UnitCode {
            id: UnitCodeId::new(id),
            code: code.to_owned(),
            label: label.to_owned(),
            coefficient,
            item_count: self.int_range_i64(0, 6),
            created_at,
            updated_at,
        }
    }

    pub fn general_account(&mut self, id: i64) -> GeneralAccount {
        let (number, label) = ACCOUNTS[self.rng.int_n(ACCOUNTS.len())];
        let (created_at, updated_at) = self.stamps();
        GeneralAccount {
            id: GeneralAccountId::new(id),
            number: number.to_owned(),
            label: label.to_owned(),
            item_count: self.int_range_i64(0, 6),
            created_at,
            updated_at,
        }
    }

    pub fn circuit(&mut self, id: i64) -> Circuit {
        let (code, label) = CIRCUITS[self.rng.int_n(CIRCUITS.len())];
        let (created_at, updated_at) = self.stamps();
        Circuit {
            id: CircuitId::new(id),
            code: code.to_owned(),
            label: label.to_owned(),
            step_count: self.int_range_i64(0, 5),
            created_at,
            updated_at,
        }
    }

    pub fn step(&mut self, id: i64, circuit: &Circuit, position: i64) -> Step {
        let name = self.pick(&STEP_NAMES);
        let status_index = self.rng.int_n(STATUSES.len());
        let (status_name, _) = STATUSES[status_index];
        let (created_at, updated_at) = self.stamps();
        Step {
            id: StepId::new(id),
            circuit_id: circuit.id,
            circuit_code: circuit.code.clone(),
            name: name.to_owned(),
            position,
            status_id: StatusId::new(status_index as i64 + 1),
            status_name: status_name.to_owned(),
            document_count: self.int_range_i64(0, 10),
            created_at,
            updated_at,
        }
    }

    pub fn status(&mut self, id: i64) -> Status {
        let index = self.rng.int_n(STATUSES.len());
        let (name, is_final) = STATUSES[index];
        let (created_at, updated_at) = self.stamps();
        Status {
            id: StatusId::new(id),
            name: name.to_owned(),
            rank: index as i64 + 1,
            is_final,
            step_count: self.int_range_i64(0, 5),
            created_at,
            updated_at,
        }
    }

    pub fn user(&mut self, id: i64) -> User {
        let first = self.pick(&FIRST_NAMES);
        let last = self.pick(&LAST_NAMES);
        let role_index = (self.seed as usize + self.rng.int_n(ROLES.len())) % ROLES.len();
        let role = ROLES[role_index];
        let (centre_id, centre_code) = if self.rng.bool() {
            let centre_index = self.rng.int_n(CENTRES.len());
            let (code, _) = CENTRES[centre_index];
            (Some(CentreId::new(centre_index as i64 + 1)), code.to_owned())
        } else {
            (None, String::new())
        };
        let (created_at, updated_at) = self.stamps();
        User {
            id: UserId::new(id),
            username: format!("{}{}", first.to_ascii_lowercase(), last.to_ascii_lowercase()),
            full_name: format!("{first} {last}"),
            email: format!(
                "{}.{}@classeur.example.fr",
                first.to_ascii_lowercase(),
                last.to_ascii_lowercase()
            ),
            role,
            centre_id,
            centre_code,
            created_at,
            updated_at,
        }
    }

    pub fn centre(&mut self, id: i64) -> ResponsibilityCentre {
        let (code, label) = CENTRES[self.rng.int_n(CENTRES.len())];
        let (created_at, updated_at) = self.stamps();
        ResponsibilityCentre {
            id: CentreId::new(id),
            code: code.to_owned(),
            label: label.to_owned(),
            user_count: self.int_range_i64(0, 6),
            created_at,
            updated_at,
        }
    }

    pub fn date_in_year(&mut self, year: i32) -> OffsetDateTime {
        let start = midnight_utc(year, Month::January, 1);
        let end =
            midnight_utc(year, Month::December, 31) + Duration::days(1) - Duration::seconds(1);
        self.random_datetime_between(start, end)
    }

    fn stamps(&mut self) -> (OffsetDateTime, OffsetDateTime) {
        let created_at = self.date_in_year(REFERENCE_YEAR - 1);
        let updated_at = created_at + Duration::days(self.int_range_i64(0, 120));
        (created_at, updated_at)
    }

    fn subject(&mut self) -> String {
        let count = self.int_range_i64(3, 5) as usize;
        let mut parts = Vec::with_capacity(count);
        for _ in 0..count {
            parts.push(self.pick(&SUBJECT_WORDS).to_owned());
        }
        let mut subject = parts.join(" ");
        if let Some(first) = subject.get_mut(0..1) {
            first.make_ascii_uppercase();
        }
        subject
    }

    fn vendor_name(&mut self) -> String {
        format!("{} {}", self.pick(&VENDOR_STEMS), self.pick(&VENDOR_SUFFIXES))
    }

    fn pick<'a>(&mut self, items: &'a [&'a str]) -> &'a str {
        items[self.rng.int_n(items.len())]
    }

    fn int_range_i64(&mut self, min: i64, max: i64) -> i64 {
        if max <= min {
            return min;
        }
        let span = max - min + 1;
        min + (self.rng.next_u64() % (span as u64)) as i64
    }

    fn random_datetime_between(
        &mut self,
        start: OffsetDateTime,
        end: OffsetDateTime,
    ) -> OffsetDateTime {
        let start_ts = start.unix_timestamp();
        let end_ts = end.unix_timestamp();
        if end_ts <= start_ts {
            return start;
        }
        let span = (end_ts - start_ts) as u64;
        let offset = self.rng.next_u64() % (span + 1);
        OffsetDateTime::from_unix_timestamp(start_ts + offset as i64).expect("valid unix timestamp")
    }
}

pub fn reference_prefix(type_name: &str) -> String {
    type_name
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .take(3)
        .collect::<String>()
        .to_uppercase()
}

pub fn document_type_names() -> &'static [(&'static str, &'static str)] {
    &DOCUMENT_TYPE_NAMES
}

pub fn status_names() -> &'static [(&'static str, bool)] {
    &STATUSES
}

fn midnight_utc(year: i32, month: Month, day: u8) -> OffsetDateTime {
    let date = Date::from_calendar_date(year, month, day).expect("valid calendar date");
    let midnight = Time::from_hms(0, 0, 0).expect("valid midnight");
    date.with_time(midnight).assume_utc()
}
