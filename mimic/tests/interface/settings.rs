use std::panic::{catch_unwind, AssertUnwindSafe};

use mimic::matcher::eq;
use mimic::{mock, verify, DefaultAnswer, MockSettings};

pub trait Counter {
    fn next(&self) -> usize;
}

mock! {
    pub struct MockCounter;

    impl Counter for MockCounter {
        fn next(&self) -> usize;
    }
}

pub trait Named {
    fn name(&self, id: u32) -> String;
}

mock! {
    pub struct MockNamed;

    impl Named for MockNamed {
        fn name(&self, id: u32) -> String;
    }
}

#[test]
fn name_is_used_in_failures() {
    let (handle, named) = MockNamed::mock_with(MockSettings::new().name("namedService"));

    assert_eq!("namedService", handle.name());
    assert_eq!(String::new(), named.name(1));

    let err = verify!(handle as Named, name(eq(2))).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("namedService"));
    assert!(message.contains("Named::name(eq(2))"));
    assert!(message.contains("Named::name(1)"));
}

#[test]
fn default_name_is_the_mocked_type() {
    let (handle, _counter) = MockCounter::mock();

    assert_eq!("MockCounter", handle.name());
    assert_eq!(1, handle.capabilities().methods().len());
}

#[test]
fn fail_on_unstubbed_calls() {
    let (handle, counter) =
        MockCounter::mock_with(MockSettings::new().default_answer(DefaultAnswer::Fail));

    let err = catch_unwind(AssertUnwindSafe(|| counter.next())).unwrap_err();
    let message = err.downcast_ref::<String>().unwrap();

    assert!(message.contains("MockCounter"));
    assert!(message.contains("Counter::next()"));
    assert_eq!(1, handle.snapshot().len());
}
