use mobi_dict::mobi::index::{first_value, lookup};
use mobi_dict::{IndexEntry, TagArray};

fn sample_entry() -> IndexEntry {
    IndexEntry::new("run")
        .with_tag(5, [1, 2])
        .with_tag(26, [3, 4])
}

#[test]
fn lookup_returns_values_for_present_tag() {
    let entry = sample_entry();
    assert_eq!(lookup(Some(&entry), 26), Some(&[3, 4][..]));
    assert_eq!(lookup(Some(&entry), 5), Some(&[1, 2][..]));
}

#[test]
fn lookup_reports_missing_tag() {
    let entry = sample_entry();
    assert_eq!(lookup(Some(&entry), 99), None);
}

#[test]
fn lookup_on_absent_entry_is_not_found() {
    assert_eq!(lookup(None, 26), None);
    assert_eq!(first_value(None, 1), None);
}

#[test]
fn lookup_prefers_first_matching_pair() {
    let entry = IndexEntry {
        label: b"dup".to_vec(),
        tags: vec![TagArray::new(7, [10]), TagArray::new(7, [20, 30])],
    };
    assert_eq!(lookup(Some(&entry), 7), Some(&[10][..]));
}

#[test]
fn lookup_borrows_entry_storage() {
    let entry = sample_entry();
    let values = lookup(Some(&entry), 26).expect("tag 26 present");
    assert!(
        std::ptr::eq(values.as_ptr(), entry.tags[1].values.as_ptr()),
        "lookup should lend a view into the entry, not a copy"
    );
}

#[test]
fn first_value_reads_head_of_array() {
    let entry = IndexEntry::new("w").with_tag(1, [120, 7]).with_tag(2, Vec::<u32>::new());
    assert_eq!(first_value(Some(&entry), 1), Some(120));
    assert_eq!(first_value(Some(&entry), 2), None, "empty array has no first value");
    assert_eq!(entry.tag_values(2), Some(&[][..]));
}
