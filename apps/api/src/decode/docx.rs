use docx_rs::{
    read_docx, DocumentChild, Paragraph, ParagraphChild, RunChild, Table, TableCellContent,
    TableChild, TableRowChild,
};

use crate::decode::DecodeError;

/// Reads the body text of a DOCX: one line per paragraph, table cells in
/// reading order. Empty paragraphs are dropped.
pub fn extract_text(bytes: &[u8]) -> Result<String, DecodeError> {
    let docx = read_docx(bytes).map_err(|e| DecodeError::Docx(e.to_string()))?;

    let mut lines: Vec<String> = Vec::new();
    for child in docx.document.children.iter() {
        match child {
            DocumentChild::Paragraph(para) => push_line(&mut lines, paragraph_text(para)),
            DocumentChild::Table(table) => table_lines(table, &mut lines),
            _ => {}
        }
    }

    Ok(lines.join("\n"))
}

fn paragraph_text(para: &Paragraph) -> String {
    para.children
        .iter()
        .filter_map(|pc| match pc {
            ParagraphChild::Run(run) => Some(
                run.children
                    .iter()
                    .filter_map(|rc| match rc {
                        RunChild::Text(t) => Some(t.text.as_str()),
                        RunChild::Tab(_) => Some(" "),
                        _ => None,
                    })
                    .collect::<String>(),
            ),
            _ => None,
        })
        .collect()
}

fn table_lines(table: &Table, lines: &mut Vec<String>) {
    for TableChild::TableRow(row) in table.rows.iter() {
        for TableRowChild::TableCell(cell) in row.cells.iter() {
            for content in cell.children.iter() {
                match content {
                    TableCellContent::Paragraph(para) => push_line(lines, paragraph_text(para)),
                    TableCellContent::Table(inner) => table_lines(inner, lines),
                    _ => {}
                }
            }
        }
    }
}

fn push_line(lines: &mut Vec<String>, text: String) {
    if !text.trim().is_empty() {
        lines.push(text);
    }
}
