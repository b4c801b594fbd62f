use std::fs;
use std::path::Path;

use checkout_forms::ToolError;
use checkout_forms::assemble::{body_rows, checkout_form, hang_tags};
use checkout_forms::config::Config;
use checkout_forms::generate::{self, HANG_TAGS_FILE, build_documents};
use checkout_forms::io::csv_read::{read_items, read_students};
use checkout_forms::markup::Element;
use chrono::NaiveDate;
use tempfile::tempdir;

const ROSTER: &str = "\
jane,\"doe,\",12345
JOHN, smith,67890
maria,\"garcia, \",A-0042
";

const INVENTORY: &str = "\
ID,NAME,SHORT DESCRIPTION,SHOULD INCLUDE,MANUFACTURER,MODEL #,SERIAL #,CATEGORY,VALUE
CAM-01,Video Camera,HD camcorder,\"Battery, charger, 32GB SD card\",Canon,XA10,SN-1001,Video,1500
TRI-01,Tripod,Fluid head tripod,,Manfrotto,190X,SN-2002,Grip,200
MIC-01,Shotgun Mic,Directional microphone,Windscreen & XLR cable,Rode,NTG2,SN-3003,Audio,270
";

fn write_inputs(dir: &Path) -> Config {
    let roster = dir.join("students.csv");
    let inventory = dir.join("inventory.csv");
    fs::write(&roster, ROSTER).expect("roster written");
    fs::write(&inventory, INVENTORY).expect("inventory written");

    let mut config = Config::builtin().expect("default configuration");
    config.roster.path = roster;
    config.inventory.path = inventory;
    config.output_dir = dir.join("out");
    config
}

fn cells(row: &Element) -> Vec<String> {
    row.child_elements().map(Element::text_content).collect()
}

#[test]
fn run_writes_both_documents() {
    let temp_dir = tempdir().expect("temporary directory");
    let config = write_inputs(temp_dir.path());

    let files = generate::run(&config).expect("pipeline run");

    assert_eq!(
        files.checkout_form,
        config.output_dir.join("Checkout-Fall_2014.html")
    );
    assert_eq!(files.hang_tags, config.output_dir.join(HANG_TAGS_FILE));

    let checkout = fs::read_to_string(&files.checkout_form).expect("checkout read");
    let stylesheet = r#"<link href="stylesheet.css" rel="stylesheet" type="text/css"/>"#;
    assert!(checkout.contains(stylesheet));
    assert!(checkout.contains("FALL 2014"));
    assert!(checkout.contains("Doe, Jane"));
    assert!(checkout.contains("Monday, August 25"));
    assert!(checkout.contains("Monday, December 15"));
    assert!(checkout.contains("Windscreen &amp; XLR cable"));

    let tags = fs::read_to_string(&files.hang_tags).expect("hang tags read");
    assert!(tags.contains("HANG TAGS"));
    assert!(tags.contains("VA&amp;T"));
    assert!(tags.contains("If found, please call xxx.xxx.xxxx or email xxxx@xxxxx.edu."));
}

#[test]
fn repeated_runs_are_byte_identical() {
    let temp_dir = tempdir().expect("temporary directory");
    let config = write_inputs(temp_dir.path());

    let first = generate::run(&config).expect("first run");
    let checkout_first = fs::read(&first.checkout_form).expect("checkout read");
    let tags_first = fs::read(&first.hang_tags).expect("hang tags read");

    let second = generate::run(&config).expect("second run");
    assert_eq!(checkout_first, fs::read(&second.checkout_form).expect("checkout read"));
    assert_eq!(tags_first, fs::read(&second.hang_tags).expect("hang tags read"));
}

#[test]
fn tables_have_expected_row_counts() {
    let temp_dir = tempdir().expect("temporary directory");
    let config = write_inputs(temp_dir.path());
    let students = read_students(&config.roster).expect("roster loaded");
    let items = read_items(&config.inventory).expect("inventory loaded");

    let documents = build_documents(&config, &students, &items);
    let tables = documents
        .checkout_form
        .root
        .find_all(|element| element.tag == "table");
    assert_eq!(tables.len(), 1 + items.len());

    let roster_rows = body_rows(tables[0]);
    assert_eq!(
        roster_rows.len(),
        students.len() + config.extra_students as usize
    );
    for (row, student) in roster_rows.iter().zip(&students) {
        assert_eq!(cells(row)[1], student.id_num);
    }
    assert_eq!(cells(roster_rows[2])[0], "Garcia, Maria");
    assert_eq!(cells(roster_rows[2])[1], "A-0042");

    for table in &tables[1..] {
        let rows = body_rows(table);
        assert_eq!(
            rows.len(),
            (config.checkout_weeks + config.extra_weeks) as usize
        );
    }
}

#[test]
fn every_item_appears_once_in_each_document() {
    let temp_dir = tempdir().expect("temporary directory");
    let config = write_inputs(temp_dir.path());
    let items = read_items(&config.inventory).expect("inventory loaded");
    let documents = build_documents(&config, &[], &items);
    let rendered = documents.render();

    let headings: Vec<String> = checkout_form::item_sections(&documents.checkout_form)
        .into_iter()
        .map(|section| section.find_all(|element| element.tag == "h1")[0].text_content())
        .collect();
    assert_eq!(
        headings,
        vec!["CAM-01: VIDEO CAMERA", "TRI-01: TRIPOD", "MIC-01: SHOTGUN MIC"]
    );

    let fronts = documents
        .hang_tags
        .root
        .find_all(|element| element.has_class(hang_tags::FRONT_CLASS));
    let tag_ids: Vec<String> = fronts
        .iter()
        .map(|front| front.find_all(|element| element.tag == "strong")[0].text_content())
        .collect();
    assert_eq!(tag_ids, vec!["CAM-01", "TRI-01", "MIC-01"]);

    for item in &items {
        let image = format!("EquipmentImages/{}.jpg", item.item_id);
        assert_eq!(rendered.checkout_form.matches(&image).count(), 1);
        assert_eq!(rendered.hang_tags.matches(&image).count(), 0);
    }
}

#[test]
fn empty_should_include_only_affects_hang_tag() {
    let temp_dir = tempdir().expect("temporary directory");
    let config = write_inputs(temp_dir.path());
    let items = read_items(&config.inventory).expect("inventory loaded");
    let documents = build_documents(&config, &[], &items);

    let tripod_section = checkout_form::item_sections(&documents.checkout_form)[1];
    assert!(tripod_section.text_content().contains("SHOULD INCLUDE"));

    let fronts = documents
        .hang_tags
        .root
        .find_all(|element| element.has_class(hang_tags::FRONT_CLASS));
    assert!(fronts[0].text_content().contains("SHOULD INCLUDE"));
    assert!(!fronts[1].text_content().contains("SHOULD INCLUDE"));
    assert!(fronts[2].text_content().contains("SHOULD INCLUDE"));
}

#[test]
fn zero_filler_rows_with_custom_schedule() {
    let temp_dir = tempdir().expect("temporary directory");
    let mut config = write_inputs(temp_dir.path());
    config.extra_students = 0;
    config.extra_weeks = 0;
    config.checkout_weeks = 2;

    let students = read_students(&config.roster).expect("roster loaded");
    let items = read_items(&config.inventory).expect("inventory loaded");
    let documents = build_documents(&config, &students, &items);
    let tables = documents
        .checkout_form
        .root
        .find_all(|element| element.tag == "table");

    assert_eq!(body_rows(tables[0]).len(), students.len());
    let weeks = body_rows(tables[1]);
    assert_eq!(weeks.len(), 2);
    assert_eq!(
        cells(weeks[0]),
        vec!["Monday, August 25", "", "", "Monday, September 1", "", ""]
    );
    assert_eq!(
        cells(weeks[1]),
        vec!["Monday, September 1", "", "", "Monday, September 8", "", ""]
    );
}

#[test]
fn mid_week_first_day_still_prints_monday() {
    let temp_dir = tempdir().expect("temporary directory");
    let mut config = write_inputs(temp_dir.path());
    config.first_day = NaiveDate::from_ymd_opt(2014, 8, 27).expect("valid date");
    config.checkout_weeks = 1;
    config.extra_weeks = 0;

    let items = read_items(&config.inventory).expect("inventory loaded");
    let documents = build_documents(&config, &[], &items);
    let tables = documents
        .checkout_form
        .root
        .find_all(|element| element.tag == "table");

    assert_eq!(
        cells(body_rows(tables[1])[0]),
        vec!["Monday, August 27", "", "", "Monday, September 3", "", ""]
    );
}

#[test]
fn missing_inventory_writes_nothing() {
    let temp_dir = tempdir().expect("temporary directory");
    let mut config = write_inputs(temp_dir.path());
    config.inventory.path = temp_dir.path().join("absent.csv");

    let err = generate::run(&config).unwrap_err();
    assert!(matches!(err, ToolError::SourceUnavailable { .. }));
    assert!(!config.output_dir.exists());
}

#[test]
fn malformed_roster_aborts_the_run() {
    let temp_dir = tempdir().expect("temporary directory");
    let config = write_inputs(temp_dir.path());
    fs::write(&config.roster.path, "jane,\"doe,\",12345\nprince,prince,777\n")
        .expect("roster rewritten");

    match generate::run(&config) {
        Err(ToolError::MalformedRecord { row, .. }) => assert_eq!(row, 2),
        other => panic!("unexpected result {other:?}"),
    }
    assert!(!config.output_dir.exists());
}

#[test]
fn config_file_drives_the_run() {
    let temp_dir = tempdir().expect("temporary directory");
    let defaults = write_inputs(temp_dir.path());
    let config_path = temp_dir.path().join("semester.toml");
    fs::write(
        &config_path,
        format!(
            r#"
semester = "Spring 2015"
first_day = "01/19/15"
checkout_weeks = 1
extra_weeks = 0
output_dir = "{out}"

[roster]
path = "{roster}"
has_header = false

[inventory]
path = "{inventory}"
has_header = true
"#,
            out = defaults.output_dir.display(),
            roster = defaults.roster.path.display(),
            inventory = defaults.inventory.path.display(),
        ),
    )
    .expect("config written");

    let config = Config::load(Some(&config_path)).expect("config loaded");
    let files = generate::run(&config).expect("pipeline run");

    assert!(files.checkout_form.ends_with("Checkout-Spring_2015.html"));
    let checkout = fs::read_to_string(&files.checkout_form).expect("checkout read");
    assert!(checkout.contains("SPRING 2015"));
    assert!(checkout.contains("Monday, January 19"));
    assert!(checkout.contains("Monday, January 26"));
    assert!(!checkout.contains("Monday, February 2"));
}
