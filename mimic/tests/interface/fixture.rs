use mimic::matcher::eq;
use mimic::{mock, verify, when, with_fixture, Fixture, VerificationError};

pub trait List {
    fn add(&self, value: i32) -> bool;
}

mock! {
    pub struct MockList;

    impl List for MockList {
        fn add(&self, value: i32) -> bool;
    }
}

struct ListFixture {
    handle: MockListHandle,
    list: MockList,
}

impl Fixture for ListFixture {
    fn setup() -> Self {
        let (handle, list) = MockList::mock();

        Self { handle, list }
    }

    fn teardown(&self) -> Result<(), VerificationError> {
        self.handle.verify_no_more_interactions()
    }
}

#[test]
fn shorthand() {
    with_fixture(|f: &mut ListFixture| {
        f.list.add(1);

        verify!(f.handle as List, add(eq(1))).unwrap();
    })
    .unwrap();
}

#[test]
fn fresh_mocks_for_each_test() {
    let first = with_fixture(|f: &mut ListFixture| {
        when!(f.handle as List, add(_)).then_return(true).unwrap();

        let ret = f.list.add(2);
        verify!(f.handle as List, add(_)).unwrap();

        ret
    })
    .unwrap();
    assert!(first);

    let second = with_fixture(|f: &mut ListFixture| {
        let ret = f.list.add(2);
        verify!(f.handle as List, add(_)).unwrap();

        ret
    })
    .unwrap();
    assert!(!second);
}

#[test]
fn teardown_reports_unverified_calls() {
    let err = with_fixture(|f: &mut ListFixture| {
        f.list.add(3);
    })
    .unwrap_err();

    assert!(matches!(err, VerificationError::UnverifiedInteractions { .. }));
}
