/// Compares predicted probabilities against realized 0/1 outcomes.
///
/// Lower is better. Both slices have the same length.
pub trait LossFunction: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    fn loss(&self, predicted: &[f64], actual: &[f64]) -> f64;
}
