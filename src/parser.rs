use crate::normalize::clean_number;
use crate::types::RawPlayerRow;

use scraper::{ElementRef, Html, Selector};

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("No player table found in document")]
    NoTable,
}

fn elem_text(element: ElementRef) -> String {
    element.text().collect::<String>()
}

fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Extracts player rows from a dashboard page. Both dashboards render the
/// squad as a plain table with the columns name, position, total points,
/// average points, market value, trend. Rows that do not fit that shape are
/// skipped with a warning rather than failing the whole page.
pub fn parse_player_table(html: &str) -> Result<Vec<RawPlayerRow>, ParseError> {
    let document = Html::parse_document(html);
    let row_selector = Selector::parse("table tbody tr").unwrap();
    let cell_selector = Selector::parse("td").unwrap();

    let table_selector = Selector::parse("table").unwrap();
    if document.select(&table_selector).next().is_none() {
        return Err(ParseError::NoTable);
    }

    let mut rows = Vec::new();
    for element in document.select(&row_selector) {
        let cells: Vec<ElementRef> = element.select(&cell_selector).collect();

        if cells.len() < 6 {
            log::warn!(
                "Skipping row with {} cells: '{}'",
                cells.len(),
                normalize_whitespace(&elem_text(element))
            );
            continue;
        }

        let name = normalize_whitespace(&elem_text(cells[0]));
        if name.is_empty() {
            log::warn!("Skipping row without a player name");
            continue;
        }

        rows.push(RawPlayerRow {
            name,
            position: normalize_whitespace(&elem_text(cells[1])),
            total_points: clean_number(&elem_text(cells[2])),
            avg_points: clean_number(&elem_text(cells[3])),
            market_value: clean_number(&elem_text(cells[4])),
            trend: clean_number(&elem_text(cells[5])),
        });
    }

    Ok(rows)
}
