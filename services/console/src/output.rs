use clap::ValueEnum;
use inmo::error::AppError;
use inmo::models::{Agent, City, CityZone, Country, Department, Neighborhood, OwnerContact};
use serde::Serialize;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum OutputFormat {
    Table,
    Json,
    Csv,
}

/// Flat view of a catalog row for table and CSV output.
pub(crate) trait Row: Serialize {
    const HEADERS: &'static [&'static str];

    fn cells(&self) -> Vec<String>;
}

fn opt<T: ToString>(value: &Option<T>) -> String {
    value.as_ref().map(ToString::to_string).unwrap_or_default()
}

impl Row for Country {
    const HEADERS: &'static [&'static str] = &["id", "name", "code", "phone_code"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.code.clone(),
            opt(&self.phone_code),
        ]
    }
}

impl Row for Department {
    const HEADERS: &'static [&'static str] = &["id", "name", "country_id", "active"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.country_id.to_string(),
            self.active.to_string(),
        ]
    }
}

impl Row for City {
    const HEADERS: &'static [&'static str] =
        &["id", "name", "department_id", "department", "country"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.department_id.to_string(),
            opt(&self.department_name),
            opt(&self.country_name),
        ]
    }
}

impl Row for CityZone {
    const HEADERS: &'static [&'static str] = &["id", "name", "city_id", "active"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.city_id.to_string(),
            self.active.to_string(),
        ]
    }
}

impl Row for Neighborhood {
    const HEADERS: &'static [&'static str] = &["id", "name", "city_id"];

    fn cells(&self) -> Vec<String> {
        vec![self.id.to_string(), self.name.clone(), self.city_id.to_string()]
    }
}

impl Row for Agent {
    const HEADERS: &'static [&'static str] = &["id", "name", "email", "phone", "active"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            opt(&self.email),
            opt(&self.phone),
            self.active.to_string(),
        ]
    }
}

impl Row for OwnerContact {
    const HEADERS: &'static [&'static str] = &["id", "name", "email", "phone", "document_id"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            opt(&self.email),
            opt(&self.phone),
            opt(&self.document_id),
        ]
    }
}

pub(crate) fn render<R: Row>(rows: &[R], format: OutputFormat) -> Result<String, AppError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(rows)?),
        OutputFormat::Csv => csv_text(rows),
        OutputFormat::Table => Ok(table(rows)),
    }
}

fn csv_text<R: Row>(rows: &[R]) -> Result<String, AppError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(R::HEADERS).map_err(csv_error)?;
    for row in rows {
        writer.write_record(row.cells()).map_err(csv_error)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|err| AppError::Input(err.to_string()))?;
    String::from_utf8(bytes).map_err(|err| AppError::Input(err.to_string()))
}

fn csv_error(err: csv::Error) -> AppError {
    AppError::Input(err.to_string())
}

fn table<R: Row>(rows: &[R]) -> String {
    let cells: Vec<Vec<String>> = rows.iter().map(Row::cells).collect();
    let mut widths: Vec<usize> = R::HEADERS.iter().map(|h| h.chars().count()).collect();
    for line in &cells {
        for (width, cell) in widths.iter_mut().zip(line) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_line = |values: Vec<&str>| {
        values
            .iter()
            .zip(&widths)
            .map(|(value, &width)| format!("{value:<width$}"))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut lines = vec![format_line(R::HEADERS.to_vec())];
    for line in &cells {
        lines.push(format_line(line.iter().map(String::as_str).collect()));
    }
    if cells.is_empty() {
        lines.push("(sin registros)".to_string());
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use inmo::models::EntityId;

    fn countries() -> Vec<Country> {
        vec![
            Country {
                id: EntityId(1),
                name: "Bolivia".to_string(),
                code: "BO".to_string(),
                phone_code: Some("+591".to_string()),
            },
            Country {
                id: EntityId(12),
                name: "Perú".to_string(),
                code: "PE".to_string(),
                phone_code: None,
            },
        ]
    }

    #[test]
    fn table_pads_columns() {
        let text = render(&countries(), OutputFormat::Table).expect("renders");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "id  name     code  phone_code");
        assert_eq!(lines[1], "1   Bolivia  BO    +591");
        assert_eq!(lines[2], "12  Perú     PE");
    }

    #[test]
    fn csv_has_header_and_blank_optionals() {
        let text = render(&countries(), OutputFormat::Csv).expect("renders");
        assert_eq!(text, "id,name,code,phone_code\n1,Bolivia,BO,+591\n12,Perú,PE,\n");
    }

    #[test]
    fn empty_table_says_so() {
        let text = render::<Country>(&[], OutputFormat::Table).expect("renders");
        assert!(text.ends_with("(sin registros)"));
    }
}
