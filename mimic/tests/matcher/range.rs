use mimic::matcher::range;
use mimic::{mock, verify, when};

pub trait Fuu {
    fn fuu(&self, x: usize) -> usize;
}

mock! {
    pub struct MockedFuu;

    impl Fuu for MockedFuu {
        fn fuu(&self, x: usize) -> usize;
    }
}

#[test]
fn success() {
    let (handle, mock) = MockedFuu::mock();

    when!(handle as Fuu, fuu(range(4..=6))).then_return(10).unwrap();

    assert_eq!(10, mock.fuu(4));
    assert_eq!(10, mock.fuu(6));
    assert_eq!(0, mock.fuu(7));

    verify!(handle as Fuu, fuu(range(..4)), 0).unwrap();
    verify!(handle as Fuu, fuu(range(4..)), 3).unwrap();
}

#[test]
fn failure_lists_recorded_calls() {
    let (handle, mock) = MockedFuu::mock();

    mock.fuu(3);

    let err = verify!(handle as Fuu, fuu(range(4..=6))).unwrap_err();
    let message = err.to_string();

    assert!(message.contains("Fuu::fuu(range[4, 6])"));
    assert!(message.contains("MockedFuu.Fuu::fuu(3)"));
}
