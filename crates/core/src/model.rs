//! The typed evaluation seam shared by production functions.

/// A deterministic map from a typed input to a typed output.
///
/// Grid evaluation relies on determinism: evaluating the same mesh twice must
/// give bit-identical surfaces.
pub trait Model {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the model at `input`.
    ///
    /// # Errors
    ///
    /// Returns the model's own error type when `input` cannot be evaluated.
    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error>;

    /// Evaluates the model and keeps the input alongside the result.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`Model::call`].
    fn snapshot(
        &self,
        input: Self::Input,
    ) -> Result<Snapshot<Self::Input, Self::Output>, Self::Error> {
        let output = self.call(&input)?;
        Ok(Snapshot::new(input, output))
    }
}

/// An input paired with the output a model produced for it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot<I, O> {
    pub input: I,
    pub output: O,
}

impl<I, O> Snapshot<I, O> {
    #[must_use]
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }
}
