// 🔌 Policy Hosts - entities that run caller-supplied rules against themselves
//
// The entity holds no business rule of its own. "Price must be positive",
// "10% discount" and similar policies live with the caller and are passed in
// as closures:
// - validator: FnOnce(&T) -> bool
// - processor: FnOnce(&T) -> R
// - executor:  FnOnce(&mut T)   (only where the entity exposes mutable state)

/// Applies externally defined validators and processors to `self`.
///
/// Both methods hand back exactly what the closure returns, so for any
/// entity `e`: `e.validate(f) == f(&e)` and `e.process(g) == g(&e)`.
pub trait PolicyHost: Sized {
    /// Run a boolean predicate against this entity
    fn validate<F>(&self, validator: F) -> bool
    where
        F: FnOnce(&Self) -> bool,
    {
        validator(self)
    }

    /// Run a transform against this entity and return its result
    fn process<R, F>(&self, processor: F) -> R
    where
        F: FnOnce(&Self) -> R,
    {
        processor(self)
    }
}
