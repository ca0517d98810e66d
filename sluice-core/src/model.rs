/// A callable model that maps a typed input to a typed output.
///
/// Models must be deterministic, always producing the same result for a given
/// input. A gate bank recomputed from the same levels and openings yields the
/// same table every time, which is what lets callers rerun it on every input
/// change without caching.
pub trait Model {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Calls the model with the given input.
    ///
    /// # Errors
    ///
    /// Each model defines its own `Error` type to represent domain-specific failures.
    /// Total models use [`std::convert::Infallible`].
    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error>;
}
