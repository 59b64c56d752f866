//! A [TransactionStore] backed by the Google Sheets REST API.

use std::path::Path;

use async_trait::async_trait;
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::{Value, json};

use crate::{
    Error,
    store::{
        TransactionStore,
        credentials::{Authenticator, ServiceAccountKey},
    },
    transaction::{RowNumber, Transaction, TransactionKind},
};

const API_BASE_URL: &str = "https://sheets.googleapis.com/v4/spreadsheets";

/// The cell range covering the Type, Amount, Date and Remark columns,
/// header row included.
const TABLE_RANGE: &str = "A1:D";

/// A [TransactionStore] over the first worksheet of a remote spreadsheet.
///
/// The client authenticates once at startup; the first worksheet's numeric
/// ID and title are resolved at [connect](GoogleSheetsStore::connect) time
/// so later calls can address it directly. Rows themselves are never cached:
/// every read loads the whole table again.
#[derive(Debug, Clone)]
pub struct GoogleSheetsStore {
    http: reqwest::Client,
    auth: Authenticator,
    spreadsheet_id: String,
    /// Numeric ID of the first worksheet, needed by row deletion requests.
    sheet_id: i64,
    /// Title of the first worksheet, used to qualify cell ranges.
    sheet_title: String,
}

#[derive(Debug, Deserialize)]
struct SpreadsheetMetadata {
    #[serde(default)]
    sheets: Vec<SheetEntry>,
}

#[derive(Debug, Deserialize)]
struct SheetEntry {
    properties: SheetProperties,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SheetProperties {
    sheet_id: i64,
    title: String,
}

#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<Value>>,
}

impl GoogleSheetsStore {
    /// Open the spreadsheet `spreadsheet_id` with the service account key
    /// at `credentials_path`.
    ///
    /// # Errors
    /// Returns an error if the key file cannot be loaded, the spreadsheet
    /// metadata cannot be fetched, or the spreadsheet has no worksheets.
    pub async fn connect(credentials_path: &Path, spreadsheet_id: &str) -> Result<Self, Error> {
        let key = ServiceAccountKey::from_file(credentials_path)?;
        let http = reqwest::Client::new();
        let auth = Authenticator::new(key, http.clone());

        let mut store = Self {
            http,
            auth,
            spreadsheet_id: spreadsheet_id.to_owned(),
            sheet_id: 0,
            sheet_title: String::new(),
        };

        let properties = store.first_worksheet().await?;
        store.sheet_id = properties.sheet_id;
        store.sheet_title = properties.title;

        tracing::info!(
            "opened spreadsheet {spreadsheet_id}, first worksheet {:?}",
            store.sheet_title
        );

        Ok(store)
    }

    async fn first_worksheet(&self) -> Result<SheetProperties, Error> {
        let url = format!(
            "{API_BASE_URL}/{}?fields=sheets.properties",
            self.spreadsheet_id
        );

        let metadata: SpreadsheetMetadata = self.get_json(&url).await?;

        metadata
            .sheets
            .into_iter()
            .next()
            .map(|sheet| sheet.properties)
            .ok_or(Error::MissingWorksheet)
    }

    /// The table range qualified with the worksheet title, percent-encoded
    /// for use in a URL path.
    fn encoded_range(&self) -> String {
        urlencoding::encode(&format!("'{}'!{TABLE_RANGE}", self.sheet_title)).into_owned()
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, Error> {
        let token = self.auth.bearer_token().await?;
        let response = self.http.get(url).bearer_auth(token).send().await?;

        parse_api_response(response).await
    }

    async fn post_json<T: DeserializeOwned>(&self, url: &str, body: &Value) -> Result<T, Error> {
        let token = self.auth.bearer_token().await?;
        let response = self
            .http
            .post(url)
            .bearer_auth(token)
            .json(body)
            .send()
            .await?;

        parse_api_response(response).await
    }
}

#[async_trait]
impl TransactionStore for GoogleSheetsStore {
    async fn append(&self, transaction: Transaction) -> Result<(), Error> {
        // RAW keeps the backend from re-interpreting the dd-mm-yyyy date
        // string as a date value.
        let url = format!(
            "{API_BASE_URL}/{}/values/{}:append?valueInputOption=RAW",
            self.spreadsheet_id,
            self.encoded_range()
        );

        let body = json!({
            "values": [[
                transaction.kind.tag(),
                transaction.amount,
                transaction.date,
                transaction.remark,
            ]]
        });

        let _: Value = self.post_json(&url, &body).await?;

        Ok(())
    }

    async fn get_all(&self) -> Result<Vec<Transaction>, Error> {
        let url = format!(
            "{API_BASE_URL}/{}/values/{}",
            self.spreadsheet_id,
            self.encoded_range()
        );

        let value_range: ValueRange = self.get_json(&url).await?;

        rows_to_transactions(value_range.values)
    }

    async fn delete_row(&self, row_number: RowNumber) -> Result<(), Error> {
        let url = format!("{API_BASE_URL}/{}:batchUpdate", self.spreadsheet_id);

        // The dimension range is zero-based and end-exclusive.
        let body = json!({
            "requests": [{
                "deleteDimension": {
                    "range": {
                        "sheetId": self.sheet_id,
                        "dimension": "ROWS",
                        "startIndex": row_number - 1,
                        "endIndex": row_number,
                    }
                }
            }]
        });

        let _: Value = self.post_json(&url, &body).await?;

        Ok(())
    }
}

async fn parse_api_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, Error> {
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();

        return Err(Error::SheetApi {
            status: status.as_u16(),
            message: api_error_message(&body),
        });
    }

    response
        .json()
        .await
        .map_err(|error| Error::SheetRequest(error.to_string()))
}

/// Extract the message from an API error body, which wraps errors as
/// `{"error": {"message": ...}}`. Falls back to the raw body.
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("error")
                .and_then(|error| error.get("message"))
                .and_then(Value::as_str)
                .map(str::to_owned)
        })
        .unwrap_or_else(|| body.to_owned())
}

/// Map the raw cell grid to transactions, skipping the header row.
fn rows_to_transactions(values: Vec<Vec<Value>>) -> Result<Vec<Transaction>, Error> {
    values
        .into_iter()
        .enumerate()
        .skip(1)
        .map(|(index, row)| row_to_transaction(index as RowNumber + 1, row))
        .collect()
}

fn row_to_transaction(row_number: RowNumber, row: Vec<Value>) -> Result<Transaction, Error> {
    let kind_tag = cell_text(row.first());
    let kind = TransactionKind::from_tag(&kind_tag).ok_or_else(|| Error::MalformedRow {
        row_number,
        reason: format!("unknown transaction type {kind_tag:?}"),
    })?;

    let amount = parse_amount(row.get(1)).map_err(|reason| Error::MalformedRow {
        row_number,
        reason,
    })?;

    Ok(Transaction {
        kind,
        amount,
        date: cell_text(row.get(2)),
        remark: cell_text(row.get(3)),
    })
}

/// The text of a cell. Trailing empty cells are omitted from the API
/// response entirely, so a missing cell reads as empty text.
fn cell_text(cell: Option<&Value>) -> String {
    match cell {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Number(number)) => number.to_string(),
        Some(Value::Bool(boolean)) => boolean.to_string(),
        _ => String::new(),
    }
}

fn parse_amount(cell: Option<&Value>) -> Result<f64, String> {
    match cell {
        Some(Value::Number(number)) => number
            .as_f64()
            .ok_or_else(|| format!("amount {number} is out of range")),
        Some(Value::String(text)) => text
            .trim()
            .parse()
            .map_err(|_| format!("amount {text:?} is not a number")),
        other => Err(format!("amount cell {other:?} is not a number")),
    }
}
