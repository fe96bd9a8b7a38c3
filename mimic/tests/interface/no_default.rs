use mimic::{mock, when};

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Config {
    pub name: String,
}

pub trait Store {
    fn load(&self) -> Config;
}

mock! {
    pub struct MockStore;

    impl Store for MockStore {
        #[mimic(no_default)]
        fn load(&self) -> Config;
    }
}

#[test]
fn stubbed() {
    let (handle, store) = MockStore::mock();

    let config = Config {
        name: "test".into(),
    };
    when!(handle as Store, load()).then_return(config.clone()).unwrap();

    assert_eq!(config, store.load());
}

#[test]
#[should_panic(expected = "the return type has no default value")]
fn unstubbed() {
    let (_handle, store) = MockStore::mock();

    store.load();
}
