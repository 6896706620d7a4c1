//! Serde models for the BankFind API responses.
//!
//! Response shape:
//! `{meta: {total: int}, data: [{data: {NAME: string, TE01N528..TE10N528: string}}]}`

use serde::Deserialize;

/// Envelope of the count request; only `meta.total` is read.
#[derive(Debug, Deserialize)]
pub struct CountResponse {
    /// Response metadata.
    #[serde(default)]
    pub meta: Meta,
}

/// Metadata block of a BankFind response.
#[derive(Debug, Default, Deserialize)]
pub struct Meta {
    /// Total number of institution records matching the query.
    #[serde(default)]
    pub total: u64,
}

/// Envelope of a page request.
#[derive(Debug, Default, Deserialize)]
pub struct PageResponse {
    /// One entry per institution record.
    #[serde(default)]
    pub data: Vec<RecordEnvelope>,
}

/// Wrapper around a single record; entries without an inner `data` object
/// are dropped.
#[derive(Debug, Deserialize)]
pub struct RecordEnvelope {
    /// The projected institution fields, if present.
    #[serde(default)]
    pub data: Option<InstitutionFields>,
}

/// The projected fields of one institution: its name plus the ten columns
/// that may hold a website URL.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InstitutionFields {
    /// Institution name.
    #[serde(rename = "NAME", default)]
    pub name: String,
    /// URL column TE01N528.
    #[serde(rename = "TE01N528", default)]
    pub te01: Option<String>,
    /// URL column TE02N528.
    #[serde(rename = "TE02N528", default)]
    pub te02: Option<String>,
    /// URL column TE03N528.
    #[serde(rename = "TE03N528", default)]
    pub te03: Option<String>,
    /// URL column TE04N528.
    #[serde(rename = "TE04N528", default)]
    pub te04: Option<String>,
    /// URL column TE05N528.
    #[serde(rename = "TE05N528", default)]
    pub te05: Option<String>,
    /// URL column TE06N528.
    #[serde(rename = "TE06N528", default)]
    pub te06: Option<String>,
    /// URL column TE07N528.
    #[serde(rename = "TE07N528", default)]
    pub te07: Option<String>,
    /// URL column TE08N528.
    #[serde(rename = "TE08N528", default)]
    pub te08: Option<String>,
    /// URL column TE09N528.
    #[serde(rename = "TE09N528", default)]
    pub te09: Option<String>,
    /// URL column TE10N528.
    #[serde(rename = "TE10N528", default)]
    pub te10: Option<String>,
}

impl InstitutionFields {
    /// The ten URL column values, in column order.
    pub fn url_columns(&self) -> [Option<&str>; 10] {
        [
            self.te01.as_deref(),
            self.te02.as_deref(),
            self.te03.as_deref(),
            self.te04.as_deref(),
            self.te05.as_deref(),
            self.te06.as_deref(),
            self.te07.as_deref(),
            self.te08.as_deref(),
            self.te09.as_deref(),
            self.te10.as_deref(),
        ]
    }
}
