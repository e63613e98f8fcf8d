use serde::Serialize;
use std::ops::Add;

/// A directed, labeled edge between two vertices
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Edge<T, E> {
    pub from: T,
    pub to: T,
    pub label: E,
}

impl<T, E> Edge<T, E> {
    pub fn new(from: T, to: T, label: E) -> Self {
        Edge { from, to, label }
    }
}

/// One weighted step of a [`Path`](super::Path)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment<T, W> {
    pub start: T,
    pub end: T,
    pub cost: W,
}

/// Numeric edge label usable by weighted search.
///
/// Costs are accumulated with `+` starting from [`Weight::zero`] and
/// compared with `PartialOrd`. Callers must only supply non-negative
/// weights; the searches do not check this.
pub trait Weight: Copy + PartialOrd + Add<Output = Self> {
    fn zero() -> Self;
}

macro_rules! impl_weight {
    ($($ty:ty => $zero:expr),* $(,)?) => {
        $(
            impl Weight for $ty {
                fn zero() -> Self {
                    $zero
                }
            }
        )*
    };
}

impl_weight!(f32 => 0.0, f64 => 0.0, u32 => 0, u64 => 0, usize => 0);
