use super::*;

#[test]
fn open_count_skips_done_items() {
    let todos = vec![
        Todo { id: 1, title: "Share brand assets".to_owned(), done: true },
        Todo { id: 2, title: "Approve wireframes".to_owned(), done: false },
        Todo { id: 3, title: "Send domain access".to_owned(), done: false },
    ];
    assert_eq!(open_count(&todos), 2);
}

#[test]
fn open_count_empty() {
    assert_eq!(open_count(&[]), 0);
}
