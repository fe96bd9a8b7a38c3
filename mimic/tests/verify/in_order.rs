use mimic::matcher::eq;
use mimic::{mock, never, times, verify, InOrder, VerificationError};

pub trait List {
    fn add(&self, item: &str) -> bool;
}

mock! {
    pub struct MockList;

    impl List for MockList {
        fn add(&self, item: &str) -> bool;
    }
}

#[test]
fn single_mock() {
    let (single, list) = MockList::mock();

    list.add("was added first");
    list.add("was added second");

    let in_order = InOrder::new([&*single]);
    verify!(in_order => single as List, add(eq("was added first"))).unwrap();
    verify!(in_order => single as List, add(eq("was added second"))).unwrap();
}

#[test]
fn single_mock_wrong_order() {
    let (single, list) = MockList::mock();

    list.add("was added first");
    list.add("was added second");

    let in_order = InOrder::new([&*single]);
    verify!(in_order => single as List, add(eq("was added second"))).unwrap();

    let err = verify!(in_order => single as List, add(eq("was added first"))).unwrap_err();
    assert!(matches!(err, VerificationError::NotInOrder { .. }));
}

#[test]
fn multiple_mocks() {
    let (first, first_list) = MockList::mock();
    let (second, second_list) = MockList::mock();

    first_list.add("was called first");
    second_list.add("was called second");

    let in_order = InOrder::new([&*first, &*second]);
    verify!(in_order => first as List, add(eq("was called first"))).unwrap();
    verify!(in_order => second as List, add(eq("was called second"))).unwrap();
}

#[test]
fn multiple_mocks_wrong_order() {
    let (first, first_list) = MockList::mock();
    let (second, second_list) = MockList::mock();

    first_list.add("was called first");
    second_list.add("was called second");

    let in_order = InOrder::new([&*first, &*second]);
    verify!(in_order => second as List, add(eq("was called second"))).unwrap();

    let err = verify!(in_order => first as List, add(eq("was called first"))).unwrap_err();
    assert!(err.to_string().contains("List::add(eq(\"was called first\"))"));
}

#[test]
fn never_does_not_move_the_cursor() {
    let (handle, list) = MockList::mock();

    list.add("a");
    list.add("b");

    let in_order = InOrder::new([&*handle]);
    verify!(in_order => handle as List, add(eq("c")), never()).unwrap();
    verify!(in_order => handle as List, add(eq("a"))).unwrap();
    verify!(in_order => handle as List, add(eq("a")), never()).unwrap();
    verify!(in_order => handle as List, add(eq("b"))).unwrap();
}

#[test]
fn unregistered_mock() {
    let (known, _known_list) = MockList::mock();
    let (unknown, unknown_list) = MockList::mock();

    unknown_list.add("x");

    let in_order = InOrder::new([&*known]);
    let err = verify!(in_order => unknown as List, add(eq("x"))).unwrap_err();

    assert!(matches!(err, VerificationError::UnknownMock { .. }));
}

#[test]
fn times_counts_every_matching_call_after_the_cursor() {
    let (handle, list) = MockList::mock();

    list.add("x");
    list.add("x");
    list.add("x");

    let in_order = InOrder::new([&*handle]);
    verify!(in_order => handle as List, add(eq("x")), times(2)).unwrap_err();
    verify!(handle as List, add(eq("x")), times(2)).unwrap_err();

    verify!(in_order => handle as List, add(eq("x")), times(3)).unwrap();
}
