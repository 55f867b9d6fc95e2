use super::*;

#[test]
fn is_active_exact_match() {
    assert!(is_active("/stats", "/stats"));
    assert!(is_active("/", "/"));
}

#[test]
fn is_active_rejects_prefix_and_nested_paths() {
    assert!(!is_active("/stats/weekly", "/stats"));
    assert!(!is_active("/upload", "/"));
    assert!(!is_active("/plan/", "/plan"));
}

#[test]
fn nav_items_cover_all_destinations_in_order() {
    let hrefs: Vec<&str> = NAV_ITEMS.iter().map(|i| i.href).collect();
    assert_eq!(hrefs, vec!["/", "/upload", "/stats", "/plan"]);
}

#[test]
fn exactly_one_item_active_per_destination() {
    for item in NAV_ITEMS {
        let active = NAV_ITEMS.iter().filter(|other| is_active(item.href, other.href)).count();
        assert_eq!(active, 1, "{}", item.href);
    }
}
