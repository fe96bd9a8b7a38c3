use mimic::matcher::arg_that;
use mimic::{mock, verify, when};

pub trait Filter {
    fn accept(&self, value: u32) -> bool;
}

mock! {
    pub struct MockFilter;

    impl Filter for MockFilter {
        fn accept(&self, value: u32) -> bool;
    }
}

#[test]
fn predicate() {
    let (handle, filter) = MockFilter::mock();

    when!(handle as Filter, accept(arg_that(|x: &u32| x % 2 == 0)))
        .then_return(true)
        .unwrap();

    assert!(filter.accept(2));
    assert!(!filter.accept(3));
}

#[test]
fn description_is_rendered() {
    let (handle, filter) = MockFilter::mock();

    filter.accept(3);

    let err = verify!(
        handle as Filter,
        accept(arg_that(|x: &u32| x % 2 == 0).describe("is even"))
    )
    .unwrap_err();

    assert!(err.to_string().contains("Filter::accept(arg_that(is even))"));
}
