#![cfg(test)]
mod tests {
    use crate::tools::performance::*;

    fn header(text: &str) -> TableRow {
        TableRow::new(text, vec![text.to_string()])
    }

    fn metric_row(name: &str, values: &[&str]) -> TableRow {
        let mut cells = vec![name.to_string()];
        cells.extend(values.iter().map(|v| v.to_string()));
        let text = cells.join(" ");
        TableRow::new(&text, cells)
    }

    const FULL: [&str; 5] = ["6.1", "5.9", "6.4", "7.0", "6.8"];

    #[test]
    fn test_section_prefix_follows_headers() {
        let rows = vec![
            header("Gr 4"),
            metric_row("Reading", &FULL),
            header("Gr 7 Avg"),
            metric_row("Reading", &FULL),
        ];
        let data = fold_rows(rows);

        assert_eq!(data.len(), 10);
        for (i, year) in YEARS.iter().enumerate() {
            let gr4 = data.get(&format!("gr4_reading_{year}"));
            let gr7 = data.get(&format!("gr7_reading_{year}"));
            assert_eq!(gr4, Some(FULL[i]));
            assert_eq!(gr4, gr7);
        }
    }

    #[test]
    fn test_default_section_is_grade_4() {
        let data = fold_rows(vec![metric_row("Numeracy", &FULL)]);
        assert_eq!(data.get("gr4_numeracy_2022"), Some("6.1"));
        assert_eq!(data.get("gr4_numeracy_2018"), Some("6.8"));
    }

    #[test]
    fn test_gender_gap_section() {
        let rows = vec![
            header("Grade 7 avg"),
            header("Gender gap (F - M)"),
            metric_row("Literacy", &["F 0.4", "M 0.1", "E", "", "F 1.0"]),
        ];
        let data = fold_rows(rows);

        assert_eq!(data.get("gr7_gender_gap_literacy_2022"), Some("F 0.4"));
        assert_eq!(data.get("gr7_gender_gap_literacy_2019"), Some("n/a"));
        assert!(data.get("gr7_literacy_2022").is_none());
    }

    #[test]
    fn test_overall_metrics_never_prefixed() {
        for section_header in ["Gr 4", "Gr 7 avg", "Gender gap"] {
            let rows = vec![
                header(section_header),
                metric_row("Overall rating out of 10", &FULL),
                metric_row("Below expectations (%)", &FULL),
                metric_row("Tests not written (%)", &FULL),
            ];
            let data = fold_rows(rows);

            for year in YEARS {
                assert!(data.contains_key(&format!("overall_rating_out_of_10_{year}")));
                assert!(data.contains_key(&format!("below_expectations__{year}")));
                assert!(data.contains_key(&format!("tests_not_written__{year}")));
            }
            assert_eq!(data.len(), 15);
        }
    }

    #[test]
    fn test_each_metric_row_emits_five_years() {
        for metric in Metric::ALL {
            let data = fold_rows(vec![metric_row(metric.label(), &[])]);
            assert_eq!(data.len(), 5, "{:?}", metric);
            for (_, value) in data.iter() {
                assert_eq!(value, MISSING_VALUE);
            }
        }
    }

    #[test]
    fn test_missing_and_blank_cells_become_na() {
        let data = fold_rows(vec![metric_row("Writing", &["5.0", "  ", ""])]);

        assert_eq!(data.get("gr4_writing_2022"), Some("5.0"));
        assert_eq!(data.get("gr4_writing_2021"), Some("n/a"));
        assert_eq!(data.get("gr4_writing_2020"), Some("n/a"));
        assert_eq!(data.get("gr4_writing_2019"), Some("n/a"));
        assert_eq!(data.get("gr4_writing_2018"), Some("n/a"));
    }

    #[test]
    fn test_unrecognized_rows_ignored_and_keep_section() {
        let rows = vec![
            header("Gr 7 avg"),
            metric_row("Attendance", &FULL),
            metric_row("Reading", &FULL),
        ];
        let data = fold_rows(rows);

        assert_eq!(data.len(), 5);
        assert!(data.contains_key("gr7_reading_2022"));
    }

    #[test]
    fn test_rows_without_first_cell_skipped() {
        let rows = vec![
            TableRow::new("Year 2022 2021", vec![]),
            TableRow::new("", vec!["".to_string(), "6.0".to_string()]),
        ];
        assert!(fold_rows(rows).is_empty());
    }

    #[test]
    fn test_help_markers_cleaned() {
        let data = fold_rows(vec![metric_row("Reading help", &["6.1 help", "5.9"])]);
        assert_eq!(data.get("gr4_reading_2022"), Some("6.1"));
        assert_eq!(data.get("gr4_reading_2021"), Some("5.9"));
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify(&header("GR 4")), RowKind::Header(Section::Gr4));
        assert_eq!(
            classify(&metric_row("Numeracy", &FULL)),
            RowKind::Metric(Metric::Numeracy)
        );
        assert_eq!(classify(&metric_row("reading", &FULL)), RowKind::Skip);
    }

    #[test]
    fn test_parse_performance_from_html() {
        let html = r#"
            <html><body>
              <table>
                <tr><th>Academic Performance</th><th>2022</th><th>2021</th></tr>
                <tr><td colspan="6">Gr 4</td></tr>
                <tr><td>Reading <span>help</span></td><td>6.1</td><td>5.9</td><td>6.4</td><td>7.0</td><td>6.8</td></tr>
                <tr><td colspan="6">Gr 7 Avg.</td></tr>
                <tr><td>Numeracy</td><td>5.5</td><td></td><td>5.1</td></tr>
              </table>
              <table>
                <tr><td>Overall rating out of 10</td><td>7.2</td><td>7.0</td><td>6.9</td><td>6.8</td><td>6.5</td></tr>
              </table>
            </body></html>
        "#;
        let data = parse_performance(html);

        assert_eq!(data.get("gr4_reading_2022"), Some("6.1"));
        assert_eq!(data.get("gr4_reading_2018"), Some("6.8"));
        assert_eq!(data.get("gr7_numeracy_2022"), Some("5.5"));
        assert_eq!(data.get("gr7_numeracy_2021"), Some("n/a"));
        assert_eq!(data.get("gr7_numeracy_2019"), Some("n/a"));
        assert_eq!(data.get("overall_rating_out_of_10_2022"), Some("7.2"));
        assert_eq!(data.len(), 15);

        let keys: Vec<&str> = data.keys().collect();
        assert_eq!(keys[0], "gr4_reading_2022");
        assert_eq!(keys[14], "overall_rating_out_of_10_2018");
    }

    #[test]
    fn test_parse_is_deterministic() {
        let html = "<table><tr><td>Writing</td><td>1</td></tr></table>";
        assert_eq!(parse_performance(html), parse_performance(html));
    }
}
