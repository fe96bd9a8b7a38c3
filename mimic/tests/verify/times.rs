use mimic::matcher::eq;
use mimic::{at_least, at_least_once, at_most, mock, never, times, verify, VerificationError};

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
fn number_of_invocations() {
    let (handle, list) = MockList::mock();

    list.add("once");

    list.add("twice");
    list.add("twice");

    list.add("three times");
    list.add("three times");
    list.add("three times");

    verify!(handle as List, add(eq("once"))).unwrap();
    verify!(handle as List, add(eq("once")), times(1)).unwrap();

    verify!(handle as List, add(eq("twice")), times(2)).unwrap();
    verify!(handle as List, add(eq("three times")), times(3)).unwrap();

    verify!(handle as List, add(eq("never happened")), never()).unwrap();

    verify!(handle as List, add(eq("three times")), at_least_once()).unwrap();
    verify!(handle as List, add(eq("five times")), at_least(0)).unwrap();
    verify!(handle as List, add(eq("three times")), at_most(5)).unwrap();
}

#[test]
fn ranges() {
    let (handle, list) = MockList::mock();

    list.add("x");
    list.add("x");

    verify!(handle as List, add(eq("x")), 1..3).unwrap();
    verify!(handle as List, add(eq("x")), 2..).unwrap();
    verify!(handle as List, add(eq("x")), ..=2).unwrap();
    verify!(handle as List, add(eq("x")), 3..).unwrap_err();
}

#[test]
fn count_mismatch() {
    let (handle, list) = MockList::mock();

    list.add("x");
    list.add("x");
    list.add("x");

    verify!(handle as List, add(eq("x")), times(3)).unwrap();

    let err = verify!(handle as List, add(eq("x")), times(2)).unwrap_err();
    match err {
        VerificationError::CountMismatch {
            actual, recorded, ..
        } => {
            assert_eq!(3, actual);
            assert_eq!(3, recorded.calls().len());
        }
        err => panic!("Unexpected error: {err}"),
    }
}

#[test]
fn once_and_never_for_single_call() {
    let (handle, list) = MockList::mock();

    list.add("one");

    verify!(handle as List, add(eq("one"))).unwrap();
    verify!(handle as List, add(eq("one")), never()).unwrap_err();
    verify!(handle as List, add(eq("two")), never()).unwrap();
    verify!(handle as List, add(eq("two"))).unwrap_err();
}
