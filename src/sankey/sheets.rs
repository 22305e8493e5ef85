use std::fs::File;
use std::path::Path;

use log::debug;
use rust_decimal::Decimal;

use crate::data::DataError;

pub const NAME_COLUMN: &str = "Name";
pub const CATEGORY_COLUMN: &str = "Category";
pub const SUBCATEGORY_COLUMN: &str = "SubCategory";

/// Placeholder markers that exclude a row from loading.
pub const NAME_PLACEHOLDER: &str = "-";
pub const EXCLUDED_CATEGORY_MARKERS: [&str; 3] = ["xcl", "$", "pdf"];

/// A named-column row from one sheet, whitespace-trimmed.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetRow {
    pub name: String,
    pub amount: Decimal,
    pub category: Option<String>,
    pub subcategory: Option<String>,
}

/// The three tables the tree builder consumes.
#[derive(Debug)]
pub struct Workbook {
    pub income: Vec<SheetRow>,
    pub expense_tier2: Vec<SheetRow>,
    pub expense_tier3: Vec<SheetRow>,
}

/// Sheet names are configuration, not protocol.
#[derive(Debug, Clone)]
pub struct SheetNames {
    pub income: String,
    pub expense_tier2: String,
    pub expense_tier3: String,
}

/// The column a sheet links through; rows without it are dropped.
#[derive(Debug, Clone, Copy)]
enum LinkColumn {
    Category,
    Subcategory,
}

impl LinkColumn {
    fn header(self) -> &'static str {
        match self {
            LinkColumn::Category => CATEGORY_COLUMN,
            LinkColumn::Subcategory => SUBCATEGORY_COLUMN,
        }
    }
}

/// Loads the three named sheets from `dir`, one CSV file per sheet.
pub fn load_workbook(dir: &Path, names: &SheetNames, amount_column: &str) -> Result<Workbook, DataError> {
    Ok(Workbook {
        income: load_sheet(dir, &names.income, amount_column, LinkColumn::Category)?,
        expense_tier2: load_sheet(dir, &names.expense_tier2, amount_column, LinkColumn::Category)?,
        expense_tier3: load_sheet(dir, &names.expense_tier3, amount_column, LinkColumn::Subcategory)?,
    })
}

fn load_sheet(
    dir: &Path,
    sheet: &str,
    amount_column: &str,
    link: LinkColumn,
) -> Result<Vec<SheetRow>, DataError> {
    let path = dir.join(format!("{sheet}.csv"));
    let file = File::open(&path).map_err(|err| match err.kind() {
        std::io::ErrorKind::NotFound => DataError::MissingSheet {
            name: sheet.to_string(),
            path: path.clone(),
        },
        _ => DataError::Io(err),
    })?;

    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(file);
    let headers = reader.headers()?.clone();

    let name_idx = column_index(&headers, NAME_COLUMN, sheet)?;
    let amount_idx = column_index(&headers, amount_column, sheet)?;
    let link_idx = column_index(&headers, link.header(), sheet)?;
    let category_idx = position(&headers, CATEGORY_COLUMN);
    let subcategory_idx = position(&headers, SUBCATEGORY_COLUMN);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;

        let name = record.get(name_idx).unwrap_or("");
        if name.is_empty() || name == NAME_PLACEHOLDER {
            continue;
        }

        match record.get(link_idx) {
            None | Some("") => continue,
            Some(value) if EXCLUDED_CATEGORY_MARKERS.contains(&value) => continue,
            Some(_) => {}
        }

        let raw_amount = record.get(amount_idx).unwrap_or("");
        let amount: Decimal = match raw_amount.parse() {
            Ok(amount) => amount,
            Err(_) => {
                debug!("skipping row {name:?} in sheet {sheet:?}: bad amount {raw_amount:?}");
                continue;
            }
        };

        rows.push(SheetRow {
            name: name.to_string(),
            amount,
            category: field(&record, category_idx),
            subcategory: field(&record, subcategory_idx),
        });
    }

    Ok(rows)
}

fn column_index(headers: &csv::StringRecord, column: &str, sheet: &str) -> Result<usize, DataError> {
    position(headers, column).ok_or_else(|| DataError::MissingColumn {
        sheet: sheet.to_string(),
        column: column.to_string(),
    })
}

fn position(headers: &csv::StringRecord, column: &str) -> Option<usize> {
    headers.iter().position(|header| header == column)
}

fn field(record: &csv::StringRecord, index: Option<usize>) -> Option<String> {
    index
        .and_then(|i| record.get(i))
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
