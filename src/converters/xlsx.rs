//! XLSX report writer.
//!
//! Writes a minimal SpreadsheetML package directly: one zip archive holding the
//! content types, package and workbook relationships, a default stylesheet and one
//! XML part per sheet. Text goes into inline-string cells, so no shared string
//! table is needed.

use super::sheets::{self, Cell, Sheet};
use super::ReportWriter;
use crate::error::Result;
use crate::pipeline::CorpusReport;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::Path;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

const NS_MAIN: &str = "http://schemas.openxmlformats.org/spreadsheetml/2006/main";
const NS_REL: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const NS_PACKAGE_REL: &str = "http://schemas.openxmlformats.org/package/2006/relationships";
const NS_CONTENT_TYPES: &str = "http://schemas.openxmlformats.org/package/2006/content-types";

const REL_OFFICE_DOCUMENT: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
const REL_WORKSHEET: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet";
const REL_STYLES: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles";

const CT_RELS: &str = "application/vnd.openxmlformats-package.relationships+xml";
const CT_WORKBOOK: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml";
const CT_WORKSHEET: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml";
const CT_STYLES: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.styles+xml";

const STYLES_XML: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<styleSheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">"#,
    r#"<fonts count="1"><font><sz val="11"/><name val="Calibri"/></font></fonts>"#,
    r#"<fills count="2"><fill><patternFill patternType="none"/></fill>"#,
    r#"<fill><patternFill patternType="gray125"/></fill></fills>"#,
    r#"<borders count="1"><border><left/><right/><top/><bottom/><diagonal/></border></borders>"#,
    r#"<cellStyleXfs count="1"><xf numFmtId="0" fontId="0" fillId="0" borderId="0"/></cellStyleXfs>"#,
    r#"<cellXfs count="1"><xf numFmtId="0" fontId="0" fillId="0" borderId="0" xfId="0"/></cellXfs>"#,
    r#"<cellStyles count="1"><cellStyle name="Normal" xfId="0" builtinId="0"/></cellStyles>"#,
    r#"</styleSheet>"#,
);

/// Writes reports as XLSX workbooks.
#[derive(Debug, Clone, Copy)]
pub struct XlsxReportWriter {
    include_code_sheet: bool,
    include_statistics_sheet: bool,
}

impl Default for XlsxReportWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl XlsxReportWriter {
    /// Writer that includes every sheet.
    pub fn new() -> Self {
        Self {
            include_code_sheet: true,
            include_statistics_sheet: true,
        }
    }

    /// Include or omit the category legend sheet.
    pub fn with_code_sheet(mut self, enable: bool) -> Self {
        self.include_code_sheet = enable;
        self
    }

    /// Include or omit the statistics sheet.
    pub fn with_statistics_sheet(mut self, enable: bool) -> Self {
        self.include_statistics_sheet = enable;
        self
    }

    /// Sheets this writer produces for `report`, in workbook order.
    pub fn sheets(&self, report: &CorpusReport) -> Vec<Sheet> {
        let mut sheets = vec![sheets::proverbs_sheet(&report.proverbs)];
        if self.include_code_sheet {
            sheets.push(sheets::documentation_sheet());
        }
        if self.include_statistics_sheet {
            sheets.push(sheets::statistics_sheet(&report.statistics));
        }
        sheets
    }

    /// Write `report` as a workbook into `out`.
    pub fn write_to<W: Write + Seek>(&self, report: &CorpusReport, out: W) -> Result<W> {
        write_workbook(&self.sheets(report), out)
    }
}

impl ReportWriter for XlsxReportWriter {
    fn write(&self, report: &CorpusReport, path: &Path) -> Result<()> {
        let file = BufWriter::new(File::create(path)?);
        let mut file = self.write_to(report, file)?;
        file.flush()?;
        log::info!(
            "Wrote {} proverbs to {}",
            report.proverbs.len(),
            path.display()
        );
        Ok(())
    }

    fn extension(&self) -> &'static str {
        "xlsx"
    }
}

/// Write `sheets` as an XLSX package into `out`.
pub fn write_workbook<W: Write + Seek>(sheets: &[Sheet], out: W) -> Result<W> {
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    let mut zip = ZipWriter::new(out);

    zip.start_file("[Content_Types].xml", options)?;
    zip.write_all(&content_types_xml(sheets.len())?)?;

    zip.start_file("_rels/.rels", options)?;
    zip.write_all(&package_rels_xml()?)?;

    zip.start_file("xl/workbook.xml", options)?;
    zip.write_all(&workbook_xml(sheets)?)?;

    zip.start_file("xl/_rels/workbook.xml.rels", options)?;
    zip.write_all(&workbook_rels_xml(sheets.len())?)?;

    zip.start_file("xl/styles.xml", options)?;
    zip.write_all(STYLES_XML.as_bytes())?;

    for (i, sheet) in sheets.iter().enumerate() {
        zip.start_file(format!("xl/worksheets/sheet{}.xml", i + 1), options)?;
        zip.write_all(&worksheet_xml(sheet)?)?;
    }

    Ok(zip.finish()?)
}

/// Column letters for a 0-based column index (`0` → `A`, `26` → `AA`).
pub fn column_name(mut index: usize) -> String {
    let mut name = Vec::new();
    loop {
        name.push(b'A' + (index % 26) as u8);
        if index < 26 {
            break;
        }
        index = index / 26 - 1;
    }
    name.reverse();
    String::from_utf8_lossy(&name).into_owned()
}

fn new_document() -> Result<Writer<Vec<u8>>> {
    let mut writer = Writer::new(Vec::new());
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;
    Ok(writer)
}

fn content_types_xml(sheet_count: usize) -> Result<Vec<u8>> {
    let mut w = new_document()?;
    w.write_event(Event::Start(
        BytesStart::new("Types").with_attributes([("xmlns", NS_CONTENT_TYPES)]),
    ))?;
    w.write_event(Event::Empty(
        BytesStart::new("Default").with_attributes([("Extension", "rels"), ("ContentType", CT_RELS)]),
    ))?;
    w.write_event(Event::Empty(
        BytesStart::new("Default")
            .with_attributes([("Extension", "xml"), ("ContentType", "application/xml")]),
    ))?;
    w.write_event(Event::Empty(BytesStart::new("Override").with_attributes([
        ("PartName", "/xl/workbook.xml"),
        ("ContentType", CT_WORKBOOK),
    ])))?;
    w.write_event(Event::Empty(BytesStart::new("Override").with_attributes([
        ("PartName", "/xl/styles.xml"),
        ("ContentType", CT_STYLES),
    ])))?;
    for i in 1..=sheet_count {
        let part = format!("/xl/worksheets/sheet{}.xml", i);
        w.write_event(Event::Empty(BytesStart::new("Override").with_attributes([
            ("PartName", part.as_str()),
            ("ContentType", CT_WORKSHEET),
        ])))?;
    }
    w.write_event(Event::End(BytesEnd::new("Types")))?;
    Ok(w.into_inner())
}

fn package_rels_xml() -> Result<Vec<u8>> {
    let mut w = new_document()?;
    w.write_event(Event::Start(
        BytesStart::new("Relationships").with_attributes([("xmlns", NS_PACKAGE_REL)]),
    ))?;
    w.write_event(Event::Empty(BytesStart::new("Relationship").with_attributes([
        ("Id", "rId1"),
        ("Type", REL_OFFICE_DOCUMENT),
        ("Target", "xl/workbook.xml"),
    ])))?;
    w.write_event(Event::End(BytesEnd::new("Relationships")))?;
    Ok(w.into_inner())
}

fn workbook_xml(sheets: &[Sheet]) -> Result<Vec<u8>> {
    let mut w = new_document()?;
    w.write_event(Event::Start(
        BytesStart::new("workbook").with_attributes([("xmlns", NS_MAIN), ("xmlns:r", NS_REL)]),
    ))?;
    w.write_event(Event::Start(BytesStart::new("sheets")))?;
    for (i, sheet) in sheets.iter().enumerate() {
        let id = (i + 1).to_string();
        let rel = format!("rId{}", i + 1);
        w.write_event(Event::Empty(BytesStart::new("sheet").with_attributes([
            ("name", sheet.name.as_str()),
            ("sheetId", id.as_str()),
            ("r:id", rel.as_str()),
        ])))?;
    }
    w.write_event(Event::End(BytesEnd::new("sheets")))?;
    w.write_event(Event::End(BytesEnd::new("workbook")))?;
    Ok(w.into_inner())
}

fn workbook_rels_xml(sheet_count: usize) -> Result<Vec<u8>> {
    let mut w = new_document()?;
    w.write_event(Event::Start(
        BytesStart::new("Relationships").with_attributes([("xmlns", NS_PACKAGE_REL)]),
    ))?;
    for i in 1..=sheet_count {
        let id = format!("rId{}", i);
        let target = format!("worksheets/sheet{}.xml", i);
        w.write_event(Event::Empty(BytesStart::new("Relationship").with_attributes([
            ("Id", id.as_str()),
            ("Type", REL_WORKSHEET),
            ("Target", target.as_str()),
        ])))?;
    }
    // Styles take the id after the last sheet.
    let styles_id = format!("rId{}", sheet_count + 1);
    w.write_event(Event::Empty(BytesStart::new("Relationship").with_attributes([
        ("Id", styles_id.as_str()),
        ("Type", REL_STYLES),
        ("Target", "styles.xml"),
    ])))?;
    w.write_event(Event::End(BytesEnd::new("Relationships")))?;
    Ok(w.into_inner())
}

fn worksheet_xml(sheet: &Sheet) -> Result<Vec<u8>> {
    let mut w = new_document()?;
    w.write_event(Event::Start(
        BytesStart::new("worksheet").with_attributes([("xmlns", NS_MAIN)]),
    ))?;

    if !sheet.column_widths.is_empty() {
        w.write_event(Event::Start(BytesStart::new("cols")))?;
        for (i, width) in sheet.column_widths.iter().enumerate() {
            let index = (i + 1).to_string();
            let width = width.to_string();
            w.write_event(Event::Empty(BytesStart::new("col").with_attributes([
                ("min", index.as_str()),
                ("max", index.as_str()),
                ("width", width.as_str()),
                ("customWidth", "1"),
            ])))?;
        }
        w.write_event(Event::End(BytesEnd::new("cols")))?;
    }

    w.write_event(Event::Start(BytesStart::new("sheetData")))?;
    for (r, row) in sheet.rows.iter().enumerate() {
        let row_number = (r + 1).to_string();
        w.write_event(Event::Start(
            BytesStart::new("row").with_attributes([("r", row_number.as_str())]),
        ))?;
        for (c, cell) in row.iter().enumerate() {
            let reference = format!("{}{}", column_name(c), row_number);
            write_cell(&mut w, &reference, cell)?;
        }
        w.write_event(Event::End(BytesEnd::new("row")))?;
    }
    w.write_event(Event::End(BytesEnd::new("sheetData")))?;
    w.write_event(Event::End(BytesEnd::new("worksheet")))?;
    Ok(w.into_inner())
}

fn write_cell(w: &mut Writer<Vec<u8>>, reference: &str, cell: &Cell) -> Result<()> {
    match cell {
        Cell::Empty => {},
        Cell::Text(text) if text.is_empty() => {},
        Cell::Text(text) => {
            w.write_event(Event::Start(
                BytesStart::new("c").with_attributes([("r", reference), ("t", "inlineStr")]),
            ))?;
            w.write_event(Event::Start(BytesStart::new("is")))?;
            w.write_event(Event::Start(
                BytesStart::new("t").with_attributes([("xml:space", "preserve")]),
            ))?;
            w.write_event(Event::Text(BytesText::new(text)))?;
            w.write_event(Event::End(BytesEnd::new("t")))?;
            w.write_event(Event::End(BytesEnd::new("is")))?;
            w.write_event(Event::End(BytesEnd::new("c")))?;
        },
        Cell::Number(value) => {
            w.write_event(Event::Start(
                BytesStart::new("c").with_attributes([("r", reference)]),
            ))?;
            w.write_event(Event::Start(BytesStart::new("v")))?;
            w.write_event(Event::Text(BytesText::new(&value.to_string())))?;
            w.write_event(Event::End(BytesEnd::new("v")))?;
            w.write_event(Event::End(BytesEnd::new("c")))?;
        },
    }
    Ok(())
}
