/// A state type that supports vector-space addition and real scaling.
///
/// Implementing this trait is all a state needs to be integrated: step
/// functions only combine states and derivatives through [`add`] and
/// [`scale`], never through the state's fields. A derivative lives in the
/// same space as its state, so both are represented by the same type.
///
/// Implementations are expected to obey the laws of a real vector space
/// (associativity and commutativity of addition, distributivity of scaling
/// over addition, `a.scale(k1).scale(k2) == a.scale(k1 * k2)`) up to floating
/// point rounding. No zero element is required.
///
/// Arrays and pairs of vector spaces are vector spaces themselves, which lets
/// composite states integrate without extra code.
///
/// [`add`]: VectorSpace::add
/// [`scale`]: VectorSpace::scale
pub trait VectorSpace: Sized {
    /// Returns the sum of `self` and `other`.
    #[must_use]
    fn add(&self, other: &Self) -> Self;

    /// Returns `self` scaled by `factor`.
    ///
    /// `factor` must be finite.
    #[must_use]
    fn scale(&self, factor: f64) -> Self;
}

impl VectorSpace for f64 {
    fn add(&self, other: &Self) -> Self {
        self + other
    }

    fn scale(&self, factor: f64) -> Self {
        debug_assert!(factor.is_finite(), "scale factor must be finite, got {factor}");
        self * factor
    }
}

impl<T: VectorSpace, const N: usize> VectorSpace for [T; N] {
    fn add(&self, other: &Self) -> Self {
        std::array::from_fn(|i| self[i].add(&other[i]))
    }

    fn scale(&self, factor: f64) -> Self {
        std::array::from_fn(|i| self[i].scale(factor))
    }
}

impl<A: VectorSpace, B: VectorSpace> VectorSpace for (A, B) {
    fn add(&self, other: &Self) -> Self {
        (self.0.add(&other.0), self.1.add(&other.1))
    }

    fn scale(&self, factor: f64) -> Self {
        (self.0.scale(factor), self.1.scale(factor))
    }
}
