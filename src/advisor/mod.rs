//! Advisory collaborator: ships a read-only snapshot to a text-generation
//! endpoint and hands back opaque advice. The core never parses the reply,
//! and every failure degrades to a fixed user-facing string instead of
//! surfacing an error.

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::{Deserialize, Serialize};

use crate::errors::LedgerError;
use crate::ledger::{ReferenceMonth, Transaction};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Shown when no API key is configured.
pub const MISSING_KEY_ADVICE: &str =
    "Please configure your advisor API key to receive insights.";
/// Shown when the request or response handling fails.
pub const UNAVAILABLE_ADVICE: &str =
    "Could not reach the financial advisor. Try again later.";

const SYSTEM_INSTRUCTION: &str =
    "You are an experienced, practical personal finance advisor.";

#[derive(Debug, Clone)]
pub struct AdvisorConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
}

impl AdvisorConfig {
    /// Loads config from env vars:
    /// - `LEDGER_ADVISOR_API_KEY` (no default; advice falls back without it)
    /// - `LEDGER_ADVISOR_MODEL`   (default: `gemini-2.5-flash`)
    /// - `LEDGER_ADVISOR_BASE_URL`
    pub fn from_env() -> Self {
        let api_key = std::env::var("LEDGER_ADVISOR_API_KEY").ok();
        let model =
            std::env::var("LEDGER_ADVISOR_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let base_url = std::env::var("LEDGER_ADVISOR_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self {
            api_key,
            model,
            base_url,
        }
    }
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Blocking HTTP client for the advice endpoint.
pub struct FinanceAdvisor {
    http: Client,
    config: AdvisorConfig,
}

impl FinanceAdvisor {
    pub fn new(config: AdvisorConfig) -> Result<Self, LedgerError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let http = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|err| LedgerError::Validation(format!("failed to build HTTP client: {err}")))?;
        Ok(Self { http, config })
    }

    /// Analyzes the snapshot for the reference month and returns free-form
    /// advice text. Total: a missing key or any transport failure yields
    /// one of the fixed fallback strings, never an error.
    pub fn analyze(&self, transactions: &[Transaction], month: ReferenceMonth) -> String {
        let Some(api_key) = self.config.api_key.as_deref() else {
            return MISSING_KEY_ADVICE.to_string();
        };
        match self.request_advice(api_key, transactions, month) {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(error = %err, "advisor request failed");
                UNAVAILABLE_ADVICE.to_string()
            }
        }
    }

    fn request_advice(
        &self,
        api_key: &str,
        transactions: &[Transaction],
        month: ReferenceMonth,
    ) -> Result<String, LedgerError> {
        let prompt = build_prompt(transactions, month)?;
        let endpoint = format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        );

        let request = GenerateRequest {
            system_instruction: Content::from_text(SYSTEM_INSTRUCTION),
            contents: vec![Content::from_text(&prompt)],
        };

        let response: GenerateResponse = self
            .http
            .post(&endpoint)
            .query(&[("key", api_key)])
            .json(&request)
            .send()
            .map_err(http_error)?
            .error_for_status()
            .map_err(http_error)?
            .json()
            .map_err(http_error)?;

        response
            .first_text()
            .ok_or_else(|| LedgerError::Validation("advisor response had no text".into()))
    }
}

fn http_error(err: reqwest::Error) -> LedgerError {
    LedgerError::Validation(format!("advisor request failed: {err}"))
}

fn build_prompt(transactions: &[Transaction], month: ReferenceMonth) -> Result<String, LedgerError> {
    // Compact snapshot: display fields only, no ids.
    let records: Vec<SnapshotRecord<'_>> = transactions.iter().map(SnapshotRecord::from).collect();
    let data = serde_json::to_string(&records)?;
    Ok(format!(
        "Analyze the following financial data (JSON) for the reference month {month}.\n\
         \n\
         Data:\n{data}\n\
         \n\
         Provide a short summary and 3 practical pieces of financial advice or \
         warnings about excessive spending. Answer in Markdown with bullet points. \
         Be direct and professional. Focus on cash flow and accounts payable."
    ))
}

#[derive(Serialize)]
struct SnapshotRecord<'a> {
    desc: &'a str,
    val: f64,
    date: chrono::NaiveDate,
    #[serde(rename = "type")]
    kind: crate::ledger::TransactionType,
    status: crate::ledger::PaymentStatus,
    cat: &'a str,
}

impl<'a> From<&'a Transaction> for SnapshotRecord<'a> {
    fn from(txn: &'a Transaction) -> Self {
        Self {
            desc: &txn.description,
            val: txn.amount,
            date: txn.date,
            kind: txn.kind,
            status: txn.status,
            cat: &txn.category,
        }
    }
}

#[derive(Serialize)]
struct GenerateRequest {
    #[serde(rename = "systemInstruction")]
    system_instruction: Content,
    contents: Vec<Content>,
}

#[derive(Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

impl Content {
    fn from_text(text: &str) -> Self {
        Self {
            parts: vec![Part {
                text: text.to_string(),
            }],
        }
    }
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Content,
}

impl GenerateResponse {
    fn first_text(&self) -> Option<String> {
        let text = self
            .candidates
            .first()?
            .content
            .parts
            .iter()
            .map(|part| part.text.as_str())
            .collect::<String>();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}
