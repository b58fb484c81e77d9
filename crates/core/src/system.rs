use std::marker::PhantomData;

use crate::VectorSpace;

/// Defines a dynamical system to be integrated.
///
/// A dynamical system supplies the instantaneous rate of change of its state.
/// The rate of change lives in the same vector space as the state, so it is
/// returned as [`Self::State`]. Step functions are written once against this
/// trait and work for every implementor.
///
/// [`derivatives`] must be a pure function of `(state, time)`: a single step
/// may evaluate it several times at trial states that are never committed.
///
/// [`derivatives`]: DynamicalSystem::derivatives
pub trait DynamicalSystem {
    type State: VectorSpace;

    /// Returns the time derivative of `state` at `time`.
    fn derivatives(&self, state: &Self::State, time: f64) -> Self::State;
}

impl<S: DynamicalSystem + ?Sized> DynamicalSystem for &S {
    type State = S::State;

    fn derivatives(&self, state: &Self::State, time: f64) -> Self::State {
        (**self).derivatives(state, time)
    }
}

/// Type alias for the state of a `DynamicalSystem`.
pub type StateOf<S> = <S as DynamicalSystem>::State;

/// A wrapper that allows using functions as dynamical systems.
///
/// Construct with [`from_fn`].
#[derive(Debug, Clone, Copy)]
pub struct FnSystem<F, S> {
    function: F,
    _marker: PhantomData<fn(&S, f64) -> S>,
}

/// Creates a dynamical system from a derivative function.
///
/// # Example
///
/// ```
/// use odestep_core::{DynamicalSystem, from_fn};
///
/// let decay = from_fn(|y: &f64, _t| -2.0 * y);
/// assert_eq!(decay.derivatives(&3.0, 0.0), -6.0);
/// ```
pub const fn from_fn<F, S>(function: F) -> FnSystem<F, S>
where
    F: Fn(&S, f64) -> S,
    S: VectorSpace,
{
    FnSystem {
        function,
        _marker: PhantomData,
    }
}

impl<F, S> DynamicalSystem for FnSystem<F, S>
where
    F: Fn(&S, f64) -> S,
    S: VectorSpace,
{
    type State = S;

    fn derivatives(&self, state: &S, time: f64) -> S {
        (self.function)(state, time)
    }
}
