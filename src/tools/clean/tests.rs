#![cfg(test)]
mod tests {
    use crate::tools::clean::*;
    use scraper::{Html, Selector};

    #[test]
    fn test_clean_label_strips_trailing_help_only() {
        assert_eq!(clean_label("Grade range help"), "Grade range");
        assert_eq!(clean_label("Grade range\n   help"), "Grade range");
        // Marker in the middle stays
        assert_eq!(clean_label("helpful staff"), "helpful staff");
        // Whitespace after the marker defeats the end-of-text anchor
        assert_eq!(clean_label("Grade range help\n"), "Grade range help");
    }

    #[test]
    fn test_clean_metric_name() {
        assert_eq!(clean_metric_name("Reading help"), "Reading");
        assert_eq!(clean_metric_name("Reading   help  "), "Reading");
        assert_eq!(
            clean_metric_name("Overall rating out of 10help"),
            "Overall rating out of 10"
        );
        assert_eq!(clean_metric_name("Writing"), "Writing");
    }

    #[test]
    fn test_clean_cell_value_removes_first_marker() {
        assert_eq!(clean_cell_value("7.5 help"), "7.5");
        assert_eq!(clean_cell_value("7.5"), "7.5");
        assert_eq!(clean_cell_value("n/a"), "n/a");
        assert_eq!(clean_cell_value("1 help 2 help"), "12 help");
    }

    #[test]
    fn test_normalize_key_character_set() {
        let labels = [
            "Pass %  Rate",
            "Students with special needs (%)",
            "Avg. parents' income ($)",
            "ESL\u{00A0}%",
            "Grade   range\t\n(K-7)",
        ];
        for label in labels {
            let key = normalize_key(label);
            assert!(!key.contains('%'), "{key}");
            assert!(!key.contains(' '), "{key}");
            assert!(
                key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'),
                "{key}"
            );
        }
    }

    #[test]
    fn test_normalize_key_examples() {
        assert_eq!(normalize_key("Pass %  Rate"), "Pass_Percent_Rate");
        assert_eq!(
            normalize_key("Students with special needs (%)"),
            "Students_with_special_needs_Percent"
        );
        assert_eq!(normalize_key("Avg. parents' income ($)"), "Avg_parents_income_");
    }

    #[test]
    fn test_label_key() {
        assert_eq!(
            label_key("Pass %  Rate help").as_deref(),
            Some("Pass_Percent_Rate")
        );
        assert_eq!(label_key("   help"), None);
        assert_eq!(label_key(""), None);
    }

    #[test]
    fn test_metric_base_key() {
        assert_eq!(metric_base_key("Reading"), "reading");
        assert_eq!(metric_base_key("Tests not written (%)"), "tests_not_written_");
        assert_eq!(
            metric_base_key("Overall rating out of 10"),
            "overall_rating_out_of_10"
        );
    }

    #[test]
    fn test_text_of_trims_nested_text() {
        let doc = Html::parse_fragment("<div id='x'>  Maple <b>Elementary</b>\n </div>");
        let sel = Selector::parse("#x").unwrap();
        let el = doc.select(&sel).next().unwrap();
        assert_eq!(text_of(&el), "Maple Elementary");
    }
}
