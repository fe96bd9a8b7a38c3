use mimic::{mock, verify, when};

pub trait Duplicate {
    fn duplicate(&self) -> Self;
}

mock! {
    pub struct MockDuplicate;

    impl Duplicate for MockDuplicate {
        fn duplicate(&self) -> Self;
    }
}

#[test]
fn success() {
    let (handle, mock) = MockDuplicate::mock();
    let (other_handle, other) = MockDuplicate::mock();

    let fresh = mock.duplicate();
    assert_ne!(handle.id(), fresh.mock_handle().id());

    when!(handle as Duplicate, duplicate()).then_return(other).unwrap();

    let dup = mock.duplicate();
    assert_eq!(other_handle.id(), dup.mock_handle().id());

    verify!(handle as Duplicate, duplicate(), 2).unwrap();
}
