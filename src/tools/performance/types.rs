use crate::tools::clean::metric_base_key;

/// Result years, most recent first. Cell `i + 1` of a metric row holds year `i`.
pub const YEARS: [&str; 5] = ["2022", "2021", "2020", "2019", "2018"];

/// Value emitted for a missing or blank cell.
pub const MISSING_VALUE: &str = "n/a";

/// Table section a metric row belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Gr4,
    Gr7,
    Gr7GenderGap,
}

impl Section {
    pub fn prefix(self) -> &'static str {
        match self {
            Section::Gr4 => "gr4",
            Section::Gr7 => "gr7",
            Section::Gr7GenderGap => "gr7_gender_gap",
        }
    }
}

/// Metric rows recognized in the results table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Reading,
    Writing,
    Literacy,
    Numeracy,
    BelowExpectations,
    TestsNotWritten,
    OverallRating,
}

impl Metric {
    pub const ALL: [Metric; 7] = [
        Metric::Reading,
        Metric::Writing,
        Metric::Literacy,
        Metric::Numeracy,
        Metric::BelowExpectations,
        Metric::TestsNotWritten,
        Metric::OverallRating,
    ];

    /// Row label exactly as the site prints it.
    pub fn label(self) -> &'static str {
        match self {
            Metric::Reading => "Reading",
            Metric::Writing => "Writing",
            Metric::Literacy => "Literacy",
            Metric::Numeracy => "Numeracy",
            Metric::BelowExpectations => "Below expectations (%)",
            Metric::TestsNotWritten => "Tests not written (%)",
            Metric::OverallRating => "Overall rating out of 10",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.label() == label)
    }

    /// School-wide metrics are never section-prefixed.
    pub fn is_overall(self) -> bool {
        matches!(
            self,
            Metric::BelowExpectations | Metric::TestsNotWritten | Metric::OverallRating
        )
    }

    pub fn base_key(self) -> String {
        metric_base_key(self.label())
    }

    /// Output key for this metric in `section` for `year`.
    pub fn key(self, section: Section, year: &str) -> String {
        if self.is_overall() {
            format!("{}_{}", self.base_key(), year)
        } else {
            format!("{}_{}_{}", section.prefix(), self.base_key(), year)
        }
    }
}

/// Text snapshot of one `<tr>`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableRow {
    /// Whole-row text, trimmed and lowercased.
    pub text: String,
    /// Trimmed text of each `<td>`, in order.
    pub cells: Vec<String>,
}

impl TableRow {
    pub fn new(text: &str, cells: Vec<String>) -> Self {
        Self {
            text: text.trim().to_lowercase(),
            cells,
        }
    }
}

/// What a row means to the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Header(Section),
    Metric(Metric),
    Skip,
}
