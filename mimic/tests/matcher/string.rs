use mimic::matcher::{is_empty, str_contains, str_ends_with, str_starts_with};
use mimic::{mock, verify, when};

pub trait Greeter {
    fn greet(&self, name: &str) -> String;
}

mock! {
    pub struct MockGreeter;

    impl Greeter for MockGreeter {
        fn greet(&self, name: &str) -> String;
    }
}

#[test]
fn string_matchers() {
    let (handle, greeter) = MockGreeter::mock();

    when!(handle as Greeter, greet(str_starts_with("Dr.")))
        .then_return("Good day, doctor".to_owned())
        .unwrap();
    when!(handle as Greeter, greet(is_empty()))
        .then_return("Hello stranger".to_owned())
        .unwrap();

    assert_eq!("Good day, doctor", greeter.greet("Dr. Who"));
    assert_eq!("Hello stranger", greeter.greet(""));
    assert_eq!("", greeter.greet("Alice"));

    verify!(handle as Greeter, greet(str_contains("Who"))).unwrap();
    verify!(handle as Greeter, greet(str_ends_with("ce"))).unwrap();
}
