use anyhow::{Context, Result};
use std::marker::PhantomData;

/// Core `Transform` trait for composable image-processing pipelines.
///
/// A `Transform<I, O>` is a stateless step converting an input of type `I`
/// into an output of type `O`. Steps are chained with `.then(...)` into a
/// single statically-dispatched pipeline, e.g. decode → greyscale → resize
/// → flatten.
pub trait Transform<I, O>: Send + Sync {
    /// Applies the transformation to the input.
    fn apply(&self, input: I) -> Result<O>;

    /// Chains another transform after this one.
    ///
    /// Requires `Self: Sized` (concrete types, no trait objects) and that
    /// the output type of `self` matches the input type of `next`.
    #[inline]
    fn then<T, M>(self, next: T) -> Chain<Self, T, O>
    where
        Self: Sized,
        T: Transform<O, M>,
        O: Send,
        M: Send,
    {
        Chain {
            first: self,
            second: next,
            _marker: PhantomData,
        }
    }
}

/// Two transforms run in sequence.
///
/// `PhantomData<M>` pins the intermediate type so chains of three or more
/// steps infer correctly.
#[derive(Debug)]
pub struct Chain<A, B, M> {
    first: A,
    second: B,
    _marker: PhantomData<fn() -> M>,
}

impl<A, B, M> Chain<A, B, M> {
    /// Builds a chain directly. Prefer [`Transform::then`]; this is useful
    /// when assembling pipelines from parts held in variables.
    pub fn new(first: A, second: B) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<I, M, O, A, B> Transform<I, O> for Chain<A, B, M>
where
    A: Transform<I, M>,
    B: Transform<M, O>,
    M: Send,
{
    fn apply(&self, input: I) -> Result<O> {
        self.first
            .apply(input)
            .and_then(|mid| self.second.apply(mid))
            .with_context(|| {
                format!(
                    "Transform chain failed: {} -> {}",
                    std::any::type_name::<A>(),
                    std::any::type_name::<B>(),
                )
            })
    }
}
