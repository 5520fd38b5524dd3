use super::*;

#[test]
fn copyright_line_includes_year_and_name() {
    let line = copyright_line(2025, "Aysha Areej");
    assert!(line.starts_with("© 2025 Aysha Areej."));
}
