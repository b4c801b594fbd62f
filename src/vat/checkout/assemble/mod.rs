//! Builds the checkout form and hang-tag documents from loaded records.
//!
//! Assembly is pure: the functions here only read the configuration, records
//! and calendar, and return [`Document`](crate::vat::checkout::markup::Document)
//! trees for the writer.

pub mod checkout_form;
pub mod hang_tags;

use crate::vat::checkout::markup::{Element, NBSP, Node};

/// Stylesheet referenced by both documents.
pub const STYLESHEET: &str = "stylesheet.css";
/// Class of the divs that force a printed page break.
pub const PAGE_BREAK_CLASS: &str = "pageBreak";
/// Class of the divs that clear floated content.
pub const CLEAR_CLASS: &str = "clear";

pub(crate) fn page_break() -> Node {
    Element::new("div").with_class(PAGE_BREAK_CLASS).into()
}

pub(crate) fn clear() -> Node {
    Element::new("div").with_class(CLEAR_CLASS).into()
}

pub(crate) fn strong(text: impl Into<String>) -> Element {
    Element::new("strong").with_text(text)
}

pub(crate) fn paragraph(text: impl Into<String>) -> Element {
    Element::new("p").with_text(text)
}

/// A table row of text cells. Empty strings produce empty cells.
pub(crate) fn row<I, S>(cells: I) -> Element
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Element::new("tr").with_children(cells.into_iter().map(|cell| {
        let cell: String = cell.into();
        if cell.is_empty() {
            Element::new("td")
        } else {
            Element::new("td").with_text(cell)
        }
    }))
}

/// Fully blank rows used as filler for late additions.
pub(crate) fn blank_rows(count: u32, width: usize) -> impl Iterator<Item = Element> {
    (0..count).map(move |_| row(std::iter::repeat_n(NBSP, width)))
}

/// A table with a header row in `thead` and the data rows in `tbody`.
pub(crate) fn table<I>(header: &[String], rows: I) -> Element
where
    I: IntoIterator<Item = Element>,
{
    Element::new("table")
        .with_child(Element::new("thead").with_child(row(header.iter().cloned())))
        .with_child(Element::new("tbody").with_children(rows))
}

/// Data rows of a table built by [`table`].
pub fn body_rows(table: &Element) -> Vec<&Element> {
    table
        .child_elements()
        .filter(|child| child.tag == "tbody")
        .flat_map(|tbody| tbody.child_elements())
        .collect()
}

/// Header labels of a table built by [`table`].
pub fn header_labels(table: &Element) -> Vec<String> {
    table
        .child_elements()
        .filter(|child| child.tag == "thead")
        .flat_map(|thead| thead.find_all(|element| element.tag == "td"))
        .map(Element::text_content)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_separates_header_and_rows() {
        let header = vec!["A".to_string(), "B".to_string()];
        let built = table(&header, vec![row(["x", ""])].into_iter().chain(blank_rows(2, 2)));

        assert_eq!(header_labels(&built), header);
        let rows = body_rows(&built);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].children.len(), 2);
        assert!(rows[0].child_elements().nth(1).unwrap().children.is_empty());
        assert_eq!(rows[2].text_content(), format!("{NBSP}{NBSP}"));
    }

    #[test]
    fn zero_blank_rows_yields_nothing() {
        assert_eq!(blank_rows(0, 7).count(), 0);
    }
}
