use std::cell::Cell;

use super::*;

#[test]
fn apply_mode_sets_attribute_and_single_icon() {
    let doc = MemoryDocument::new();
    doc.apply_mode(ThemeMode::Dark);
    assert_eq!(doc.attribute().as_deref(), Some("dark"));
    assert_eq!(doc.classes(), vec!["icon-moon".to_owned()]);

    doc.apply_mode(ThemeMode::Light);
    assert_eq!(doc.attribute().as_deref(), Some("light"));
    assert_eq!(doc.classes(), vec!["icon-sun".to_owned()]);
}

#[test]
fn class_edits_follow_token_list_semantics() {
    let doc = MemoryDocument::new();
    doc.add_toggle_class("icon-sun");
    doc.add_toggle_class("icon-sun");
    doc.remove_toggle_class("icon-moon");
    assert_eq!(doc.classes(), vec!["icon-sun".to_owned()]);
}

#[test]
fn click_runs_every_bound_handler() {
    let doc = MemoryDocument::new();
    let hits = Rc::new(Cell::new(0));
    for _ in 0..2 {
        let hits = Rc::clone(&hits);
        doc.bind_toggle_click(Box::new(move || hits.set(hits.get() + 1)))
            .expect("toggle exists");
    }
    assert_eq!(doc.handler_count(), 2);
    doc.click();
    assert_eq!(hits.get(), 2);
}

#[test]
fn missing_toggle_rejects_binding() {
    let doc = MemoryDocument::without_toggle();
    let err = doc
        .bind_toggle_click(Box::new(|| {}))
        .expect_err("no toggle control");
    assert!(matches!(err, ThemeError::ToggleNotFound(ref s) if s == "#toggle-theme"));
    doc.add_toggle_class("icon-moon");
    assert!(doc.classes().is_empty());
}
