use mimic::matcher::{any, eq};
use mimic::{mock, when};

pub trait Lookup {
    fn get(&self, index: usize) -> Option<String>;
}

mock! {
    pub struct MockLookup;

    impl Lookup for MockLookup {
        fn get(&self, index: usize) -> Option<String>;
    }
}

#[test]
fn most_recent_stub_wins() {
    let (handle, lookup) = MockLookup::mock();

    when!(handle as Lookup, get(any()))
        .then_return(Some("any".to_owned()))
        .unwrap();
    when!(handle as Lookup, get(eq(0)))
        .then_return(Some("first".to_owned()))
        .unwrap();

    assert_eq!(Some("first".to_owned()), lookup.get(0));
    assert_eq!(Some("any".to_owned()), lookup.get(1));

    when!(handle as Lookup, get(eq(0)))
        .then_return(Some("changed".to_owned()))
        .unwrap();
    assert_eq!(Some("changed".to_owned()), lookup.get(0));

    when!(handle as Lookup, get(any())).then_return(None).unwrap();
    assert_eq!(None, lookup.get(0));
}

#[test]
fn stubs_are_used_repeatedly() {
    let (handle, lookup) = MockLookup::mock();

    when!(handle as Lookup, get(eq(3)))
        .then_return(Some("three".to_owned()))
        .unwrap();

    for _ in 0..5 {
        assert_eq!(Some("three".to_owned()), lookup.get(3));
    }
}
