use mimic::matcher::{any, eq};
use mimic::{mock, verify, verify_no_more_interactions, VerificationError};

pub trait List {
    fn add(&self, item: &str) -> bool;
    fn clear(&self);
}

mock! {
    pub struct MockList;

    impl List for MockList {
        fn add(&self, item: &str) -> bool;
        fn clear(&self);
    }
}

#[test]
fn all_calls_verified() {
    let (handle, list) = MockList::mock();

    list.add("one");
    list.add("two");

    verify!(handle as List, add(any()), 2).unwrap();

    handle.verify_no_more_interactions().unwrap();
}

#[test]
fn unverified_call() {
    let (handle, list) = MockList::mock();
    let (other, _other_list) = MockList::mock();

    list.add("one");
    list.clear();

    verify!(handle as List, add(eq("one"))).unwrap();

    let err = verify_no_more_interactions([&*other, &*handle]).unwrap_err();
    match err {
        VerificationError::UnverifiedInteractions { unverified, .. } => {
            assert_eq!(1, unverified.calls().len());
            assert!(unverified.calls()[0].contains("List::clear()"));
        }
        err => panic!("Unexpected error: {err}"),
    }
}

#[test]
fn failed_verification_does_not_mark_calls() {
    let (handle, list) = MockList::mock();

    list.add("one");

    verify!(handle as List, add(eq("one")), 2).unwrap_err();
    handle.verify_no_more_interactions().unwrap_err();
}
