//! Sheet contents shared by the report writers.
//!
//! Builders here only produce rows of [`Cell`]s; serialising them is the job of
//! the individual writers.

use crate::document::Proverb;
use crate::pipeline::CorpusStatistics;
use crate::text::Category;

/// Name of the proverb listing sheet.
pub const PROVERBS_SHEET: &str = "Proverbs";
/// Name of the category legend sheet.
pub const DOCUMENTATION_SHEET: &str = "Code Documentation";
/// Name of the statistics sheet.
pub const STATISTICS_SHEET: &str = "Statistics";

/// Header of the proverb listing.
pub const PROVERB_HEADER: [&str; 5] = ["Filename", "Page", "Proverb #", "Text", "POS Tags"];

/// Column widths of the proverb listing, in characters.
pub const PROVERB_COLUMN_WIDTHS: [f64; 5] = [30.0, 10.0, 12.0, 80.0, 50.0];

const COMPONENTS: &[(&str, &str)] = &[
    ("Text Extraction", "Extracts text from PDF files"),
    (
        "Proverb Identification",
        "Uses pattern matching to identify Romanian proverbs",
    ),
    (
        "POS Tagging",
        "Romanian part-of-speech analysis with incremental numbering",
    ),
    ("Excel Generation", "Creates structured XLSX output"),
    ("File Versioning", "Prevents overwrites with automatic numbering"),
];

/// A single spreadsheet cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Inline text
    Text(String),
    /// Numeric value
    Number(f64),
    /// Nothing
    Empty,
}

impl Cell {
    /// Text cell.
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    /// Numeric cell from any count.
    pub fn count(value: usize) -> Self {
        Cell::Number(value as f64)
    }

    /// Value as it appears in a text export.
    pub fn to_plain(&self) -> String {
        match self {
            Cell::Text(s) => s.clone(),
            Cell::Number(n) if n.fract() == 0.0 => format!("{:.0}", n),
            Cell::Number(n) => n.to_string(),
            Cell::Empty => String::new(),
        }
    }
}

/// A named sheet with optional column widths.
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    /// Sheet name
    pub name: String,
    /// Column widths; empty to leave defaults
    pub column_widths: Vec<f64>,
    /// Rows, header included
    pub rows: Vec<Vec<Cell>>,
}

impl Sheet {
    /// Empty sheet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            column_widths: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Set column widths.
    pub fn with_column_widths(mut self, widths: &[f64]) -> Self {
        self.column_widths = widths.to_vec();
        self
    }

    /// Append a row of text cells.
    pub fn push_text_row(&mut self, values: &[&str]) {
        self.rows.push(values.iter().map(|v| Cell::text(*v)).collect());
    }

    /// Append a label/value row.
    pub fn push_pair(&mut self, label: &str, value: Cell) {
        self.rows.push(vec![Cell::text(label), value]);
    }
}

/// Row of the proverb listing for one proverb.
pub fn proverb_row(proverb: &Proverb) -> Vec<Cell> {
    vec![
        Cell::text(proverb.source_filename.as_str()),
        Cell::text(proverb.page_number.as_str()),
        Cell::count(proverb.proverb_number),
        Cell::text(proverb.text.as_str()),
        Cell::text(proverb.tag_summary()),
    ]
}

/// The proverb listing sheet.
pub fn proverbs_sheet(proverbs: &[Proverb]) -> Sheet {
    let mut sheet = Sheet::new(PROVERBS_SHEET).with_column_widths(&PROVERB_COLUMN_WIDTHS);
    sheet.push_text_row(&PROVERB_HEADER);
    sheet.rows.extend(proverbs.iter().map(proverb_row));
    sheet
}

/// Tag pattern shown in the legend, e.g. `s1, s2, s3...`.
fn legend_pattern(category: Category) -> String {
    let code = category.code();
    if code.len() > 1 {
        format!("{code}1, {code}2...")
    } else {
        format!("{code}1, {code}2, {code}3...")
    }
}

/// The component and category-code legend sheet.
pub fn documentation_sheet() -> Sheet {
    let mut sheet = Sheet::new(DOCUMENTATION_SHEET).with_column_widths(&[25.0, 60.0]);
    sheet.push_text_row(&["Component", "Description"]);
    for &(component, description) in COMPONENTS {
        sheet.push_text_row(&[component, description]);
    }
    sheet.rows.push(vec![Cell::Empty, Cell::Empty]);
    sheet.push_text_row(&["POS Tag Mapping", ""]);
    for category in Category::ALL {
        let pattern = legend_pattern(category);
        sheet.push_text_row(&[pattern.as_str(), category.label()]);
    }
    sheet
}

/// Plural Romanian name used in the statistics sheet.
fn plural_name(category: Category) -> &'static str {
    category
        .label()
        .split(" (")
        .next()
        .unwrap_or_else(|| category.name())
}

/// The corpus statistics sheet.
pub fn statistics_sheet(stats: &CorpusStatistics) -> Sheet {
    let (longest_text, longest_len) = stats
        .longest
        .as_ref()
        .map_or(("", 0), |l| (l.text.as_str(), l.length));
    let (shortest_text, shortest_len) = stats
        .shortest
        .as_ref()
        .map_or(("", 0), |s| (s.text.as_str(), s.length));

    let mut sheet = Sheet::new(STATISTICS_SHEET).with_column_widths(&[30.0, 80.0]);
    sheet.push_text_row(&["Statistică", "Valoare"]);
    sheet.push_pair("Total fișiere procesate", Cell::count(stats.total_files));
    sheet.push_pair("Total proverbe extrase", Cell::count(stats.total_proverbs));
    sheet.push_pair("Proverb cel mai lung", Cell::text(longest_text));
    sheet.push_pair("Lungime (caractere)", Cell::count(longest_len));
    sheet.push_pair("Proverb cel mai scurt", Cell::text(shortest_text));
    sheet.push_pair("Lungime (caractere)", Cell::count(shortest_len));
    sheet.push_pair(
        "Lungime medie proverb",
        Cell::text(format!("{:.2}", stats.average_length)),
    );
    sheet.rows.push(vec![Cell::Empty, Cell::Empty]);
    sheet.push_text_row(&["Distribuție POS", ""]);
    for (category, count) in stats.legend_distribution() {
        sheet.push_pair(plural_name(category), Cell::count(count));
    }
    sheet
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::PosTag;

    fn sample() -> Proverb {
        Proverb {
            source_filename: "doc_Page_006_ocred.pdf".to_string(),
            page_number: "006".to_string(),
            proverb_number: 3,
            text: "Dreptatea e nemuritoare.".to_string(),
            pos_tags: vec![PosTag {
                word: "Dreptatea".to_string(),
                tag: "s1".to_string(),
                index: 0,
            }],
        }
    }

    #[test]
    fn test_proverb_row() {
        let row = proverb_row(&sample());
        assert_eq!(
            row,
            vec![
                Cell::text("doc_Page_006_ocred.pdf"),
                Cell::text("006"),
                Cell::Number(3.0),
                Cell::text("Dreptatea e nemuritoare."),
                Cell::text("s1:Dreptatea"),
            ]
        );
    }

    #[test]
    fn test_proverbs_sheet_layout() {
        let sheet = proverbs_sheet(&[sample(), sample()]);
        assert_eq!(sheet.name, "Proverbs");
        assert_eq!(sheet.rows.len(), 3);
        assert_eq!(sheet.rows[0][2], Cell::text("Proverb #"));
        assert_eq!(sheet.column_widths, vec![30.0, 10.0, 12.0, 80.0, 50.0]);
    }

    #[test]
    fn test_documentation_legend() {
        let sheet = documentation_sheet();
        let legend: Vec<String> = sheet.rows[8..].iter().map(|r| r[0].to_plain()).collect();
        assert_eq!(
            legend,
            vec![
                "s1, s2, s3...",
                "a1, a2, a3...",
                "v1, v2, v3...",
                "p1, p2, p3...",
                "n1, n2, n3...",
                "art1, art2...",
                "i1, i2, i3...",
            ]
        );
        assert_eq!(sheet.rows[7][0], Cell::text("POS Tag Mapping"));
        assert_eq!(sheet.rows[14][1], Cell::text("Interjecții (Interjections)"));
    }

    #[test]
    fn test_statistics_sheet() {
        let stats = CorpusStatistics::from_proverbs(&[sample()]);
        let sheet = statistics_sheet(&stats);
        assert_eq!(sheet.rows.len(), 17);
        assert_eq!(sheet.rows[1][1], Cell::Number(1.0));
        assert_eq!(sheet.rows[4][1], Cell::Number(24.0));
        assert_eq!(sheet.rows[7][1], Cell::text("24.00"));
        assert_eq!(sheet.rows[10], vec![Cell::text("Substantive"), Cell::Number(1.0)]);
        assert_eq!(sheet.rows[16], vec![Cell::text("Interjecții"), Cell::Number(0.0)]);
    }

    #[test]
    fn test_statistics_sheet_empty_corpus() {
        let sheet = statistics_sheet(&CorpusStatistics::default());
        assert_eq!(sheet.rows[3][1], Cell::text(""));
        assert_eq!(sheet.rows[4][1], Cell::Number(0.0));
        assert_eq!(sheet.rows[7][1], Cell::text("0.00"));
    }

    #[test]
    fn test_cell_to_plain() {
        assert_eq!(Cell::Number(3.0).to_plain(), "3");
        assert_eq!(Cell::Number(2.5).to_plain(), "2.5");
        assert_eq!(Cell::Empty.to_plain(), "");
    }
}
