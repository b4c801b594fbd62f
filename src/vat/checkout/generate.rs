use std::path::PathBuf;

use tracing::{debug, info, instrument};

use crate::vat::checkout::assemble::{checkout_form, hang_tags};
use crate::vat::checkout::calendar::CheckoutCalendar;
use crate::vat::checkout::config::Config;
use crate::vat::checkout::error::Result;
use crate::vat::checkout::io::csv_read::{read_items, read_students};
use crate::vat::checkout::io::html_write::{ensure_output_dir, write_html};
use crate::vat::checkout::markup::Document;
use crate::vat::checkout::markup::render::prettify;
use crate::vat::checkout::model::{Item, Student};

/// File name of the hang-tag document.
pub const HANG_TAGS_FILE: &str = "HangTags.html";

/// File name of the checkout form, e.g. `Checkout-Fall_2014.html`.
pub fn checkout_file_name(config: &Config) -> String {
    format!("Checkout-{}.html", config.semester_slug())
}

/// Both assembled documents of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Documents {
    pub checkout_form: Document,
    pub hang_tags: Document,
}

/// Both documents serialised and ready to write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocuments {
    pub checkout_form: String,
    pub hang_tags: String,
}

impl Documents {
    pub fn render(&self) -> RenderedDocuments {
        RenderedDocuments {
            checkout_form: prettify(&self.checkout_form),
            hang_tags: prettify(&self.hang_tags),
        }
    }
}

/// Paths written by [`run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFiles {
    pub checkout_form: PathBuf,
    pub hang_tags: PathBuf,
}

/// Assembles both documents from already loaded records.
#[instrument(
    level = "debug",
    skip_all,
    fields(students = students.len(), items = items.len())
)]
pub fn build_documents(config: &Config, students: &[Student], items: &[Item]) -> Documents {
    let calendar = CheckoutCalendar::from_config(config);
    debug!(
        first_day = %calendar.first_day(),
        weeks = calendar.weeks(),
        "checkout calendar derived"
    );

    Documents {
        checkout_form: checkout_form::build(config, students, items, &calendar),
        hang_tags: hang_tags::build(config, items),
    }
}

/// Loads both sources, renders both documents, then writes them into the
/// configured output directory. Nothing is written if loading fails.
#[instrument(
    level = "info",
    skip_all,
    fields(
        semester = %config.semester,
        roster = %config.roster.path.display(),
        inventory = %config.inventory.path.display()
    )
)]
pub fn run(config: &Config) -> Result<GeneratedFiles> {
    let students = read_students(&config.roster)?;
    let items = read_items(&config.inventory)?;

    let rendered = build_documents(config, &students, &items).render();
    debug!(
        checkout_bytes = rendered.checkout_form.len(),
        hang_tag_bytes = rendered.hang_tags.len(),
        "documents rendered"
    );

    ensure_output_dir(&config.output_dir)?;
    let files = GeneratedFiles {
        checkout_form: config.output_dir.join(checkout_file_name(config)),
        hang_tags: config.output_dir.join(HANG_TAGS_FILE),
    };
    write_html(&files.checkout_form, &rendered.checkout_form)?;
    write_html(&files.hang_tags, &rendered.hang_tags)?;

    info!(
        students = students.len(),
        items = items.len(),
        "checkout form and hang tags generated"
    );
    Ok(files)
}
