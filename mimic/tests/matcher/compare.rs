use mimic::matcher::{ge, gt, lt, ne};
use mimic::{mock, verify, when};

pub trait Calculator {
    fn sign(&self, x: i64) -> i64;
}

mock! {
    pub struct MockCalculator;

    impl Calculator for MockCalculator {
        fn sign(&self, x: i64) -> i64;
    }
}

#[test]
fn ordering_matchers() {
    let (handle, calc) = MockCalculator::mock();

    when!(handle as Calculator, sign(gt(0))).then_return(1).unwrap();
    when!(handle as Calculator, sign(lt(0))).then_return(-1).unwrap();

    assert_eq!(1, calc.sign(42));
    assert_eq!(-1, calc.sign(-7));
    assert_eq!(0, calc.sign(0));

    verify!(handle as Calculator, sign(ge(0)), 2).unwrap();
    verify!(handle as Calculator, sign(ne(0)), 2).unwrap();
}
