use siteadmin_core::GENERAL_FIELDS;

use crate::commands::common::format_field_lines;

pub fn run_fields() {
    for line in format_field_lines(GENERAL_FIELDS) {
        println!("{line}");
    }
}
