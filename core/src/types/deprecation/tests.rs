use super::*;

#[test]
fn table_is_sorted_for_binary_search() {
    let names: Vec<_> = DEPRECATED_ICONS.iter().map(|(old, _)| *old).collect();
    let mut sorted = names.clone();
    sorted.sort_unstable();
    assert_eq!(names, sorted);
}

#[test]
fn renamed_icon_resolves_to_entry_with_replacement() {
    let entry = deprecation_for("google-controller").unwrap();
    assert_eq!(entry.replacement, Some("controller"));
}

#[test]
fn removed_icon_resolves_to_entry_without_replacement() {
    let entry = deprecation_for("adobe").unwrap();
    assert_eq!(entry.replacement, None);
}

#[test]
fn current_icon_has_no_entry() {
    assert_eq!(deprecation_for("lightbulb"), None);
    assert_eq!(deprecation_for(""), None);
}

#[test]
fn rename_warning_names_both_icons_and_version() {
    let entry = deprecation_for("google-controller").unwrap();
    let warning = entry.warning("mdi", "google-controller");

    assert!(warning.contains("mdi:google-controller"));
    assert!(warning.contains("mdi:controller"));
    assert!(warning.contains(entry.removed_in));
}

#[test]
fn removal_warning_names_icon_and_version() {
    let entry = deprecation_for("telegram").unwrap();
    let warning = entry.warning("mdi", "telegram");

    assert!(warning.contains("mdi:telegram"));
    assert!(warning.contains("no replacement"));
    assert!(warning.contains(entry.removed_in));
}
