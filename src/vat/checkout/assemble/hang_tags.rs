use crate::vat::checkout::assemble::{STYLESHEET, clear, paragraph, strong};
use crate::vat::checkout::config::Config;
use crate::vat::checkout::markup::{Document, Element, Node};
use crate::vat::checkout::model::Item;

pub const TITLE: &str = "HANG TAGS";
pub const FRONT_CLASS: &str = "hangTagEquipmentInfo";
pub const BACK_CLASS: &str = "hangTagReturnInfo";

/// Builds one folded tag per item: equipment details on the front, return
/// address and contact details on the back.
pub fn build(config: &Config, items: &[Item]) -> Document {
    let mut content: Vec<Node> = Vec::with_capacity(items.len() * 3);
    for item in items {
        content.push(front(item).into());
        content.push(back(config).into());
        content.push(clear());
    }
    Document::page(TITLE, STYLESHEET, content)
}

fn front(item: &Item) -> Element {
    let mut panel = Element::new("div")
        .with_class(format!("hangTag {FRONT_CLASS}"))
        .with_child(Element::new("h1").with_text(item.item_name.to_uppercase()))
        .with_child(
            Element::new("p")
                .with_text("ID #: ")
                .with_child(strong(item.item_id.as_str()))
                .with_child(Element::new("span").with_class("spacer").with_text("|"))
                .with_text("Manufacturer: ")
                .with_child(strong(item.manufacturer.as_str())),
        );

    if !item.should_include.is_empty() {
        panel.push(
            Element::new("p")
                .with_attr("style", "margin-top: 40px")
                .with_child(strong("SHOULD INCLUDE")),
        );
        panel.push(paragraph(item.should_include.as_str()));
    }

    panel.with_child(Node::comment(" end hangTag front "))
}

fn back(config: &Config) -> Element {
    let institution = &config.institution;
    Element::new("div")
        .with_class(format!("hangTag {BACK_CLASS}"))
        .with_child(Element::new("h1").with_text(institution.name.as_str()))
        .with_child(Element::new("h3").with_text(institution.subtitle.as_str()))
        .with_child(paragraph(institution.address.as_str()))
        .with_child(paragraph(format!(
            "If found, please call {} or email {}.",
            config.contact_phone, config.contact_email
        )))
        .with_child(Node::comment(" end hangTag back "))
}
