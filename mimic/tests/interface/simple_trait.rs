use std::panic::{catch_unwind, AssertUnwindSafe};

use mimic::matcher::{any, arg_that, eq};
use mimic::{mock, verify, when};

pub trait List {
    fn add(&self, item: &str) -> bool;
    fn get(&self, index: usize) -> Option<String>;
    fn contains(&self, value: i32) -> bool;
    fn clear(&self);
}

mock! {
    pub struct MockList;

    impl List for MockList {
        fn add(&self, item: &str) -> bool;
        fn get(&self, index: usize) -> Option<String>;
        fn contains(&self, value: i32) -> bool;
        fn clear(&self);
    }
}

struct Inventory<L: List> {
    items: L,
}

impl<L: List> Inventory<L> {
    fn store(&self, item: &str) -> bool {
        self.items.add(item)
    }

    fn reset(&self) {
        self.items.clear();
    }
}

#[test]
fn verify_behaviour() {
    let (handle, list) = MockList::mock();

    list.add("one");
    list.clear();

    verify!(handle as List, add(eq("one"))).unwrap();
    verify!(handle as List, clear()).unwrap();
}

#[test]
fn stubbing() {
    let (handle, list) = MockList::mock();

    when!(handle as List, get(eq(0)))
        .then_return(Some("first".to_owned()))
        .unwrap();
    when!(handle as List, get(eq(1)))
        .then_fail("index out of bounds")
        .unwrap();

    assert_eq!(Some("first".to_owned()), list.get(0));
    assert_eq!(None, list.get(999));

    let err = catch_unwind(AssertUnwindSafe(|| list.get(1))).unwrap_err();
    assert_eq!(
        Some("index out of bounds"),
        err.downcast_ref::<String>().map(String::as_str)
    );

    verify!(handle as List, get(eq(0))).unwrap();
    verify!(handle as List, get(_), 3).unwrap();
}

#[test]
fn argument_matchers() {
    let (handle, list) = MockList::mock();

    when!(handle as List, get(any()))
        .then_return(Some("element".to_owned()))
        .unwrap();

    assert_eq!(Some("element".to_owned()), list.get(999));

    verify!(handle as List, get(any())).unwrap();
}

#[test]
fn custom_argument_matcher() {
    let (handle, list) = MockList::mock();

    when!(
        handle as List,
        contains(arg_that(|x: &i32| *x == 1 || *x == 2).describe("is 1 or 2"))
    )
    .then_return(true)
    .unwrap();

    assert!(list.contains(1));
    assert!(list.contains(2));
    assert!(!list.contains(3));
}

#[test]
#[should_panic(expected = "clear failed")]
fn stub_void_method_to_fail() {
    let (handle, list) = MockList::mock();

    when!(handle as List, clear()).then_fail("clear failed").unwrap();

    list.clear();
}

#[test]
fn without_trait_prefix() {
    let (handle, list) = MockList::mock();

    when!(handle, add(_)).then_return(true).unwrap();

    let inventory = Inventory { items: list };
    assert!(inventory.store("apple"));
    inventory.reset();

    verify!(handle, add(eq("apple"))).unwrap();
    verify!(handle, clear()).unwrap();
    verify!(handle, get(_), 0).unwrap();
}

#[test]
fn mock_as_trait_object() {
    let (handle, list) = MockList::mock();
    let list: Box<dyn List> = Box::new(list);

    list.add("boxed");

    verify!(handle as List, add(eq("boxed"))).unwrap();
    assert_eq!(1, handle.snapshot().len());
}
