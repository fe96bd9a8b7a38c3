use mimic::{mock, verify, when};
use proptest::prelude::*;

pub trait Sink {
    fn push(&self, value: u64) -> bool;
}

mock! {
    pub struct MockSink;

    impl Sink for MockSink {
        fn push(&self, value: u64) -> bool;
    }
}

proptest! {
    #[test]
    fn every_call_is_recorded(values in prop::collection::vec(any::<u64>(), 0..50)) {
        let (handle, sink) = MockSink::mock();

        for value in &values {
            sink.push(*value);
        }

        let snapshot = handle.snapshot();
        prop_assert_eq!(values.len(), snapshot.len());
        prop_assert!(snapshot.windows(2).all(|w| w[0].seq() < w[1].seq()));

        for (value, invocation) in values.iter().zip(&snapshot) {
            prop_assert_eq!(Some(value), invocation.argument::<u64>(0));
        }

        prop_assert!(verify!(handle as Sink, push(_), values.len()).is_ok());
    }

    #[test]
    fn stubbed_answer_does_not_change_recording(count in 1usize..20) {
        let (handle, sink) = MockSink::mock();

        when!(handle as Sink, push(mimic::matcher::any())).then_return(true).unwrap();

        for i in 0..count {
            prop_assert!(sink.push(i as u64));
        }

        prop_assert_eq!(count, handle.snapshot().len());
    }
}
