use chrono::NaiveDate;

use crate::render::DocumentRenderer;
use crate::report::build_report_html;
use crate::storage::StorageSink;
use crate::types::EnrichedPlayer;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Failed to serialize results: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// File names embed the run date, so repeated runs on the same day
/// overwrite the same files.
pub fn results_file_name(date: NaiveDate) -> String {
    format!("Results_{}.json", date.format("%Y-%m-%d"))
}

pub fn report_file_name(date: NaiveDate) -> String {
    format!("Report_{}.pdf", date.format("%Y-%m-%d"))
}

#[derive(Debug)]
pub struct WriteOutcome {
    pub sink: String,
    pub file: String,
    pub error: Option<String>,
}

#[derive(Debug)]
pub struct ExportSummary {
    pub players: usize,
    pub outcomes: Vec<WriteOutcome>,
    pub render_error: Option<String>,
}

impl ExportSummary {
    pub fn all_succeeded(&self) -> bool {
        self.render_error.is_none() && self.outcomes.iter().all(|o| o.error.is_none())
    }
}

impl std::fmt::Display for ExportSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Exported {} players:", self.players)?;
        for outcome in &self.outcomes {
            match &outcome.error {
                None => writeln!(f, "  ok    {} -> {}", outcome.file, outcome.sink)?,
                Some(e) => writeln!(f, "  FAIL  {} -> {}: {}", outcome.file, outcome.sink, e)?,
            }
        }
        if let Some(e) = &self.render_error {
            writeln!(f, "  FAIL  report rendering: {}", e)?;
        }
        Ok(())
    }
}

/// Serializes the full ranked set and writes the artifacts to every sink.
///
/// Sinks are independent: a failed write is recorded and the remaining
/// sinks are still attempted. With a renderer present the top-20 report is
/// rendered and written the same way; a render failure only skips the
/// report file. Only a serialization failure aborts the export.
pub fn export_results(
    players: &[EnrichedPlayer],
    sinks: &[&dyn StorageSink],
    renderer: Option<&dyn DocumentRenderer>,
    date: NaiveDate,
) -> Result<ExportSummary, ExportError> {
    let json = serde_json::to_string_pretty(players)?;
    let json_file = results_file_name(date);

    let mut summary = ExportSummary {
        players: players.len(),
        outcomes: Vec::new(),
        render_error: None,
    };

    for sink in sinks {
        let error = sink.write_text(&json_file, &json).err();
        if let Some(e) = &error {
            log::error!("Writing {} to {} failed: {}", json_file, sink.name(), e);
        }
        summary.outcomes.push(WriteOutcome {
            sink: sink.name().to_string(),
            file: json_file.clone(),
            error: error.map(|e| e.to_string()),
        });
    }

    if let Some(renderer) = renderer {
        let html = build_report_html(players);
        match renderer.render(&html) {
            Ok(pdf) => {
                let pdf_file = report_file_name(date);
                for sink in sinks {
                    let error = sink.write_binary(&pdf_file, &pdf).err();
                    if let Some(e) = &error {
                        log::error!("Writing {} to {} failed: {}", pdf_file, sink.name(), e);
                    }
                    summary.outcomes.push(WriteOutcome {
                        sink: sink.name().to_string(),
                        file: pdf_file.clone(),
                        error: error.map(|e| e.to_string()),
                    });
                }
            }
            Err(e) => {
                log::error!("Report rendering failed: {}", e);
                summary.render_error = Some(e.to_string());
            }
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enrich::rank_players;
    use crate::render::RenderError;
    use crate::types::RawPlayerRow;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::io;

    struct MemorySink {
        name: String,
        files: RefCell<HashMap<String, Vec<u8>>>,
    }

    impl MemorySink {
        fn new(name: &str) -> Self {
            Self {
                name: name.to_string(),
                files: RefCell::new(HashMap::new()),
            }
        }
    }

    impl StorageSink for MemorySink {
        fn name(&self) -> &str {
            &self.name
        }

        fn write_text(&self, file_name: &str, contents: &str) -> io::Result<()> {
            self.files
                .borrow_mut()
                .insert(file_name.to_string(), contents.as_bytes().to_vec());
            Ok(())
        }

        fn write_binary(&self, file_name: &str, contents: &[u8]) -> io::Result<()> {
            self.files
                .borrow_mut()
                .insert(file_name.to_string(), contents.to_vec());
            Ok(())
        }
    }

    struct BrokenSink;

    impl StorageSink for BrokenSink {
        fn name(&self) -> &str {
            "broken"
        }

        fn write_text(&self, _: &str, _: &str) -> io::Result<()> {
            Err(io::Error::other("disk full"))
        }

        fn write_binary(&self, _: &str, _: &[u8]) -> io::Result<()> {
            Err(io::Error::other("disk full"))
        }
    }

    struct FakeRenderer;

    impl DocumentRenderer for FakeRenderer {
        fn render(&self, markup: &str) -> Result<Vec<u8>, RenderError> {
            Ok(markup.as_bytes().to_vec())
        }
    }

    struct BrokenRenderer;

    impl DocumentRenderer for BrokenRenderer {
        fn render(&self, _: &str) -> Result<Vec<u8>, RenderError> {
            Err(RenderError::Io(io::Error::other("no converter")))
        }
    }

    fn sample_players(n: usize) -> Vec<crate::types::EnrichedPlayer> {
        let rows = (0..n)
            .map(|i| RawPlayerRow {
                name: format!("Player {}", i),
                position: "ST".to_string(),
                total_points: 100.0 + i as f64,
                avg_points: 5.0,
                market_value: 1_000_000.0,
                trend: 20000.0,
            })
            .collect();
        rank_players(rows, Vec::new())
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 30).unwrap()
    }

    #[test]
    fn test_file_names_are_date_stamped() {
        assert_eq!(results_file_name(date()), "Results_2026-08-30.json");
        assert_eq!(report_file_name(date()), "Report_2026-08-30.pdf");
    }

    #[test]
    fn test_full_set_exported_report_capped() {
        let players = sample_players(500);
        let sink = MemorySink::new("memory");

        let summary =
            export_results(&players, &[&sink], Some(&FakeRenderer), date()).unwrap();

        assert!(summary.all_succeeded());
        assert_eq!(summary.players, 500);

        let files = sink.files.borrow();
        let json = String::from_utf8(files["Results_2026-08-30.json"].clone()).unwrap();
        let exported: Vec<crate::types::EnrichedPlayer> = serde_json::from_str(&json).unwrap();
        assert_eq!(exported.len(), 500);

        // FakeRenderer echoes the markup, so the "pdf" is the top-20 table
        let report = String::from_utf8(files["Report_2026-08-30.pdf"].clone()).unwrap();
        assert_eq!(report.matches("<tr><td>").count(), 20);
    }

    #[test]
    fn test_json_round_trips_with_camel_case_fields() {
        let players = sample_players(1);
        let sink = MemorySink::new("memory");

        export_results(&players, &[&sink], None, date()).unwrap();

        let files = sink.files.borrow();
        let json = String::from_utf8(files["Results_2026-08-30.json"].clone()).unwrap();
        for field in [
            "\"name\"",
            "\"position\"",
            "\"totalPoints\"",
            "\"avgPoints\"",
            "\"marketValue\"",
            "\"trend\"",
            "\"trendRatio\"",
            "\"euroPerPoint\"",
            "\"valueEfficiency\"",
            "\"kes\"",
            "\"recommendation\"",
        ] {
            assert!(json.contains(field), "missing field {}", field);
        }

        let exported: Vec<crate::types::EnrichedPlayer> = serde_json::from_str(&json).unwrap();
        assert_eq!(exported, players);
    }

    #[test]
    fn test_broken_sink_does_not_block_others() {
        let players = sample_players(2);
        let good = MemorySink::new("good");

        let summary =
            export_results(&players, &[&BrokenSink, &good], None, date()).unwrap();

        assert!(!summary.all_succeeded());
        assert_eq!(summary.outcomes.len(), 2);
        assert!(summary.outcomes[0].error.is_some());
        assert!(summary.outcomes[1].error.is_none());
        assert!(good.files.borrow().contains_key("Results_2026-08-30.json"));
    }

    #[test]
    fn test_disabled_renderer_skips_report() {
        let players = sample_players(2);
        let sink = MemorySink::new("memory");

        let summary = export_results(&players, &[&sink], None, date()).unwrap();

        assert!(summary.all_succeeded());
        assert_eq!(sink.files.borrow().len(), 1);
    }

    #[test]
    fn test_render_failure_keeps_json() {
        let players = sample_players(2);
        let sink = MemorySink::new("memory");

        let summary =
            export_results(&players, &[&sink], Some(&BrokenRenderer), date()).unwrap();

        assert!(!summary.all_succeeded());
        assert!(summary.render_error.is_some());
        let files = sink.files.borrow();
        assert!(files.contains_key("Results_2026-08-30.json"));
        assert!(!files.contains_key("Report_2026-08-30.pdf"));
    }
}
