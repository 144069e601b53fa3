use serde::{Deserialize, Deserializer};
use std::io::Read;

#[derive(Debug)]
pub(crate) struct BankRow {
    pub(crate) question_id: u32,
    pub(crate) question_text: String,
    pub(crate) option_id: String,
    pub(crate) option_text: String,
    pub(crate) trait_label: Option<String>,
}

pub(crate) fn parse_rows<R: Read>(reader: R) -> Result<Vec<BankRow>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut rows = Vec::new();

    for record in csv_reader.deserialize::<CsvRow>() {
        let row = record?;
        rows.push(BankRow {
            question_id: row.question_id,
            question_text: collapse_whitespace(&row.question_text),
            option_id: row.option_id,
            option_text: collapse_whitespace(&row.option_text),
            trait_label: row.trait_label,
        });
    }

    Ok(rows)
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    question_id: u32,
    question_text: String,
    option_id: String,
    option_text: String,
    #[serde(rename = "trait", default, deserialize_with = "empty_string_as_none")]
    trait_label: Option<String>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn collapse_whitespace(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}
