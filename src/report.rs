use crate::types::EnrichedPlayer;

/// Number of entries shown in the rendered report. The exported data file
/// always carries the full set.
pub const REPORT_TOP_N: usize = 20;

/// Builds the self-contained HTML report: a ranked table of at most the top
/// 20 players with rank, name, position and KES. Pure text-to-text; turning
/// the markup into a PDF is the renderer's job.
pub fn build_report_html(players: &[EnrichedPlayer]) -> String {
    let rows = players
        .iter()
        .take(REPORT_TOP_N)
        .enumerate()
        .map(|(i, p)| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{:.1}</td></tr>",
                i + 1,
                escape_html(&p.name),
                escape_html(&p.position),
                p.kes
            )
        })
        .collect::<Vec<_>>()
        .join("");

    format!(
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><style>\
         table{{width:100%;border-collapse:collapse;}}\
         th,td{{border:1px solid #ccc;padding:4px;text-align:left;}}\
         </style></head><body><h1>KES Top {}</h1>\
         <table><tr><th>#</th><th>Name</th><th>Pos</th><th>KES</th></tr>{}</table>\
         </body></html>",
        REPORT_TOP_N, rows
    )
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enrich::enrich;
    use crate::types::RawPlayerRow;

    fn players(n: usize) -> Vec<EnrichedPlayer> {
        (0..n)
            .map(|i| {
                enrich(RawPlayerRow {
                    name: format!("Player {}", i),
                    position: "MF".to_string(),
                    total_points: 100.0,
                    avg_points: 4.0,
                    market_value: 500_000.0,
                    trend: 0.0,
                })
            })
            .collect()
    }

    #[test]
    fn test_report_caps_at_top_20() {
        let html = build_report_html(&players(500));
        assert_eq!(html.matches("<tr><td>").count(), 20);
        assert!(html.contains("<td>20</td>"));
        assert!(!html.contains("<td>21</td>"));
    }

    #[test]
    fn test_report_with_fewer_entries() {
        let html = build_report_html(&players(3));
        assert_eq!(html.matches("<tr><td>").count(), 3);
    }

    #[test]
    fn test_report_rows_carry_rank_name_position_kes() {
        let set = players(1);
        let html = build_report_html(&set);
        assert!(html.contains("<td>1</td>"));
        assert!(html.contains("<td>Player 0</td>"));
        assert!(html.contains("<td>MF</td>"));
        assert!(html.contains(&format!("<td>{:.1}</td>", set[0].kes)));
    }

    #[test]
    fn test_report_escapes_names() {
        let mut set = players(1);
        set[0].name = "<script>alert('x')</script>".to_string();
        let html = build_report_html(&set);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
