use mimic::{mock, verify, when};

pub trait Source {
    type Item;

    fn next_item(&mut self) -> Option<Self::Item>;
}

mock! {
    pub struct MockSource;

    impl Source for MockSource {
        type Item = u32;

        fn next_item(&mut self) -> Option<Self::Item>;
    }
}

fn drain<S: Source>(source: &mut S) -> Vec<S::Item> {
    let mut ret = Vec::new();

    while let Some(item) = source.next_item() {
        ret.push(item);
    }

    ret
}

#[test]
fn success() {
    let (handle, mut source) = MockSource::mock();

    assert!(drain(&mut source).is_empty());

    when!(handle as Source, next_item()).then_return(Some(4)).unwrap();
    assert_eq!(Some(4), source.next_item());

    when!(handle as Source, next_item()).then_return(None).unwrap();
    assert!(drain(&mut source).is_empty());

    verify!(handle as Source, next_item(), 3).unwrap();
}
