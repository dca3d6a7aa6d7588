use super::*;

#[test]
fn entries_keep_append_order() {
    let mut transcript = Transcript::new();
    transcript.push_user("What is the summary?");
    transcript.push_assistant("It's a quarterly report.");
    transcript.push_user("Who wrote it?");

    let entries = transcript.entries();
    assert_eq!(entries.len(), 3);
    assert!(entries[0].is_user);
    assert!(!entries[1].is_user);
    assert!(entries[2].is_user);
    assert_eq!(entries[0].text, "What is the summary?");
    assert_eq!(entries[1].text, "It's a quarterly report.");
    assert_eq!(entries[2].text, "Who wrote it?");
}

#[test]
fn push_returns_the_recorded_entry() {
    let mut transcript = Transcript::new();
    let entry = transcript.push_assistant("hello");
    assert_eq!(transcript.entries().last(), Some(&entry));
    assert!(!entry.is_user);
}

#[test]
fn observed_entries_do_not_change_on_later_appends() {
    let mut transcript = Transcript::new();
    transcript.push_user("first");
    let before = transcript.entries().to_vec();

    transcript.push_user("second");
    transcript.push_assistant("third");

    assert_eq!(&transcript.entries()[..1], &before[..]);
    assert_eq!(transcript.len(), 3);
}
