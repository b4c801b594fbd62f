use crate::vat::checkout::assemble::{
    STYLESHEET, blank_rows, clear, page_break, paragraph, row, strong, table,
};
use crate::vat::checkout::calendar::CheckoutCalendar;
use crate::vat::checkout::config::{Config, ITEM_HEADER_LEN, STUDENT_HEADER_LEN};
use crate::vat::checkout::markup::{Document, Element, Node};
use crate::vat::checkout::model::{Item, Student};

pub const TITLE: &str = "CHECKOUT";
pub const LATE_POLICY: &str =
    "If equipment is late (by even a few minutes), the equipment is considered a day late";
pub const FEES_REMINDER: &str = "CHECK LATE FEES FIRST -- NO CHECKOUT UNTIL FEES ARE PAID!";
pub const NOTES_PROMPT: &str =
    "Please note any problems with the equipment, broken or missing pieces, etc";
/// Class of the span holding each item's details.
pub const ITEM_DETAILS_CLASS: &str = "equipmentDetails";

/// Builds the checkout form: semester divider, late-fee roster, then one
/// checkout sheet per item.
pub fn build(
    config: &Config,
    students: &[Student],
    items: &[Item],
    calendar: &CheckoutCalendar,
) -> Document {
    let mut content: Vec<Node> = Vec::new();

    content.push(semester_title(config).into());
    content.push(page_break());
    content.extend(late_fees(config, students));
    content.push(page_break());

    for (index, item) in items.iter().enumerate() {
        content.extend(item_sheet(config, item, calendar));
        if index + 1 < items.len() {
            content.push(page_break());
        }
    }

    Document::page(TITLE, STYLESHEET, content)
}

fn semester_title(config: &Config) -> Element {
    Element::new("div")
        .with_id("semesterTitlePage")
        .with_child(Element::new("h1").with_text(config.semester.to_uppercase()))
}

fn late_fees(config: &Config, students: &[Student]) -> Vec<Node> {
    let announcement = format!(
        "ALL EQUIPMENT DUE BY {} AT {}",
        config.due_day_of_week.to_uppercase(),
        config.due_time.to_uppercase()
    );
    let details = Element::new("span")
        .with_class("pageDetails")
        .with_child(Element::new("p").with_child(strong(announcement)))
        .with_child(paragraph(LATE_POLICY))
        .with_child(paragraph(config.fees_message.as_str()));

    vec![
        Element::new("h1")
            .with_class("pageLabel")
            .with_text("LATE FEES")
            .into(),
        details.into(),
        clear(),
        student_table(config, students).into(),
    ]
}

/// Roster table: one row per student plus blank rows for late additions.
pub fn student_table(config: &Config, students: &[Student]) -> Element {
    let filled = STUDENT_HEADER_LEN - 2;
    let rows = students
        .iter()
        .map(|student| {
            let cells = [student.display_name(), student.id_num.clone()]
                .into_iter()
                .chain(std::iter::repeat_n(String::new(), filled));
            row(cells)
        })
        .chain(blank_rows(config.extra_students, STUDENT_HEADER_LEN));
    table(&config.student_header, rows)
}

fn item_sheet(config: &Config, item: &Item, calendar: &CheckoutCalendar) -> Vec<Node> {
    let heading = format!("{}: {}", item.item_id, item.item_name.to_uppercase());
    let maker = Element::new("p")
        .with_text("Manufacturer: ")
        .with_child(strong(item.manufacturer.as_str()))
        .with_child(Element::new("span").with_class("spacer").with_text("|"))
        .with_text("Serial #: ")
        .with_child(strong(item.serial_num.as_str()));

    let details = Element::new("span")
        .with_class(ITEM_DETAILS_CLASS)
        .with_child(Element::new("h1").with_text(heading))
        .with_child(maker)
        .with_child(Element::new("h2").with_text("SHOULD INCLUDE"))
        .with_child(paragraph(item.should_include.as_str()))
        .with_child(
            Element::new("p")
                .with_class("reminder")
                .with_child(strong(FEES_REMINDER)),
        );

    let thumbnail = Element::new("img")
        .with_attr("src", item.image_path())
        .with_class("thumbnail");

    let notes_prompt = Element::new("p").with_child(Element::new("em").with_text(NOTES_PROMPT));

    vec![
        details.into(),
        thumbnail.into(),
        clear(),
        checkout_table(config, calendar).into(),
        Element::new("h2").with_text("NOTES").into(),
        notes_prompt.into(),
    ]
}

/// Item checkout table: one row per checkout window plus blank buffer weeks.
pub fn checkout_table(config: &Config, calendar: &CheckoutCalendar) -> Element {
    let rows = calendar
        .iter()
        .map(|pair| {
            row([
                pair.checkout_label(),
                String::new(),
                String::new(),
                pair.due_label(),
                String::new(),
                String::new(),
            ])
        })
        .chain(blank_rows(config.extra_weeks, ITEM_HEADER_LEN));
    table(&config.item_header, rows)
}

/// Top-level item sections of a built checkout form, in inventory order.
pub fn item_sections(document: &Document) -> Vec<&Element> {
    document
        .content()
        .into_iter()
        .filter(|element| element.has_class(ITEM_DETAILS_CLASS))
        .collect()
}
