use mimic::{mock, verify};

pub trait Fuu {
    fn fuu(&self);
}

mock! {
    #[derive(Clone, Default)]
    pub struct MockedFuu;

    impl Fuu for MockedFuu {
        fn fuu(&self);
    }
}

#[test]
fn clones_share_the_interaction_log() {
    let (handle, mock) = MockedFuu::mock();
    let cloned = mock.clone();

    mock.fuu();
    cloned.fuu();

    verify!(handle as Fuu, fuu(), 2).unwrap();
    assert_eq!(handle.id(), cloned.mock_handle().id());
}

#[test]
fn default_creates_independent_mock() {
    let first = MockedFuu::default();
    let second = MockedFuu::default();

    first.fuu();

    verify!(first.mock_handle() as Fuu, fuu()).unwrap();
    verify!(second.mock_handle() as Fuu, fuu(), 0).unwrap();
}
