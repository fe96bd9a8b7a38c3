mod associated_type;
mod clonable_mock;
mod fixture;
mod no_default;
mod return_self_type;
mod settings;
mod simple_trait;
