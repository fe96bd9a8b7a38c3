//! The [`fixture`](self) module contains helpers to build a fresh set of mocks
//! for each test.

use crate::VerificationError;

/// A set of mocked objects that is created fresh for every test.
///
/// Implement this trait for a struct that holds the mocks (and their handles)
/// a group of tests works with.
pub trait Fixture: Sized {
    /// Create a new instance of the fixture with fresh mocks.
    fn setup() -> Self;

    /// Checks that are executed after the test body has finished.
    ///
    /// # Errors
    /// Returns a [`VerificationError`] if one of the checks failed.
    fn teardown(&self) -> Result<(), VerificationError> {
        Ok(())
    }
}

/// Create a new fixture of type `F`, pass it to `test` and run the teardown
/// checks of the fixture afterwards.
///
/// # Errors
/// Returns the error of [`Fixture::teardown`].
pub fn with_fixture<F, R, T>(test: T) -> Result<R, VerificationError>
where
    F: Fixture,
    T: FnOnce(&mut F) -> R,
{
    let mut fixture = F::setup();

    tracing::trace!(fixture = std::any::type_name::<F>(), "Fixture set up");

    let ret = test(&mut fixture);

    fixture.teardown()?;

    Ok(ret)
}
