use super::*;

#[test]
fn starts_empty_with_no_selection() {
    let registry = DocumentRegistry::new();
    assert!(registry.is_empty());
    assert!(registry.selected().is_none());
    assert!(registry.views().is_empty());
}

#[test]
fn register_uploaded_selects_the_new_document() {
    let mut registry = DocumentRegistry::new();
    let first = registry.register_uploaded("report.pdf");
    assert_eq!(registry.selected().map(|d| d.id), Some(first.id));

    let second = registry.register_uploaded("notes.pdf");
    assert_eq!(registry.len(), 2);
    assert_eq!(registry.selected().map(|d| d.id), Some(second.id));
}

#[test]
fn exactly_one_view_is_selected_after_any_sequence() {
    let mut registry = DocumentRegistry::new();
    let a = registry.register_uploaded("a.pdf");
    registry.register_uploaded("b.pdf");
    registry.register_uploaded("c.pdf");
    registry.select(a.id);

    let selected: Vec<_> = registry
        .views()
        .into_iter()
        .filter(|view| view.is_selected)
        .collect();
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].id, a.id);
}

#[test]
fn select_unknown_id_is_a_silent_no_op() {
    let mut registry = DocumentRegistry::new();
    let document = registry.register_uploaded("a.pdf");

    registry.select(DocumentId::new());
    assert_eq!(registry.selected().map(|d| d.id), Some(document.id));

    let mut empty = DocumentRegistry::new();
    empty.select(DocumentId::new());
    assert!(empty.selected().is_none());
}

#[test]
fn fresh_ids_are_unique_even_for_identical_names() {
    let mut registry = DocumentRegistry::new();
    let a = registry.register_uploaded("a.pdf");
    let b = registry.register_uploaded("a.pdf");
    assert_ne!(a.id, b.id);
}
