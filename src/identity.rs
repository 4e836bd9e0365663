//! Solution identity.
//!
//! Tabu Search needs to tell solutions apart (to collect distinct candidates
//! and, when a problem reports no moves, to forbid solutions themselves).
//! Solution types do not have to implement `Hash`; instead they expose one
//! or more *views* through [`Identify`], and [`SolutionId::of`] tries the
//! views in a fixed priority order:
//!
//! 1. [`HashStrategy::Native`]: the value is hashable as-is.
//! 2. [`HashStrategy::NumericBuffer`]: a dense numeric array, hashed
//!    element by element.
//! 3. [`HashStrategy::Set`]: an unordered collection, hashed over its
//!    elements.
//! 4. [`HashStrategy::MappingKeys`]: a mapping, hashed over its sorted keys
//!    only. Two maps with the same keys and different values collide.
//! 5. [`HashStrategy::Sequence`]: an ordered list of numbers, hashed over its
//!    flattened view.
//!
//! A value exposing none of the views is rejected with
//! [`SearchError::UnresolvedHashing`].

use std::collections::hash_map::DefaultHasher;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::hash::{Hash, Hasher};

use crate::error::{Result, SearchError};

/// Hashing views, in the order [`SolutionId::of`] tries them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashStrategy {
    /// Hash the value directly.
    Native,
    /// Hash a flattened dense numeric buffer.
    NumericBuffer,
    /// Hash the elements of a set.
    Set,
    /// Hash the sorted keys of a mapping.
    MappingKeys,
    /// Hash a flattened numeric sequence.
    Sequence,
}

impl HashStrategy {
    /// Resolution order.
    pub const PRIORITY: [HashStrategy; 5] = [
        HashStrategy::Native,
        HashStrategy::NumericBuffer,
        HashStrategy::Set,
        HashStrategy::MappingKeys,
        HashStrategy::Sequence,
    ];

    fn view<T: Identify + ?Sized>(self, value: &T) -> Option<Vec<u64>> {
        match self {
            HashStrategy::Native => value.native_hash().map(|h| vec![h]),
            HashStrategy::NumericBuffer => value.numeric_buffer().map(float_words),
            HashStrategy::Set => value.set_elements().map(sorted),
            HashStrategy::MappingKeys => value.mapping_keys().map(sorted),
            HashStrategy::Sequence => value.sequence().map(float_words),
        }
    }
}

/// Views a solution type can offer for identity purposes.
///
/// Every method defaults to `None`; implement the ones that apply. Only the
/// first view in [`HashStrategy::PRIORITY`] order that returns `Some` is used.
///
/// # Examples
///
/// ```
/// use u_localsearch::identity::{HashStrategy, Identify, SolutionId};
///
/// struct Point { x: f64, y: f64 }
///
/// impl Identify for Point {
///     fn numeric_buffer(&self) -> Option<Vec<f64>> {
///         Some(vec![self.x, self.y])
///     }
/// }
///
/// let a = SolutionId::of(&Point { x: 1.0, y: 2.0 }).unwrap();
/// let b = SolutionId::of(&Point { x: 1.0, y: 2.0 }).unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a.strategy(), HashStrategy::NumericBuffer);
/// ```
pub trait Identify {
    /// Hash of the value itself, for natively hashable types.
    fn native_hash(&self) -> Option<u64> {
        None
    }

    /// Flattened dense numeric content (row-major for grids).
    fn numeric_buffer(&self) -> Option<Vec<f64>> {
        None
    }

    /// Hashes of the elements of an unordered collection.
    fn set_elements(&self) -> Option<Vec<u64>> {
        None
    }

    /// Hashes of the keys of a mapping.
    fn mapping_keys(&self) -> Option<Vec<u64>> {
        None
    }

    /// Flattened ordered numeric content.
    fn sequence(&self) -> Option<Vec<f64>> {
        None
    }
}

/// Stable equality/hash identity of a solution value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SolutionId {
    strategy: HashStrategy,
    words: Vec<u64>,
}

impl SolutionId {
    /// Resolves the identity of `value`.
    pub fn of<T: Identify + ?Sized>(value: &T) -> Result<Self> {
        HashStrategy::PRIORITY
            .into_iter()
            .find_map(|strategy| {
                strategy
                    .view(value)
                    .map(|words| SolutionId { strategy, words })
            })
            .ok_or(SearchError::UnresolvedHashing {
                type_name: std::any::type_name::<T>(),
            })
    }

    /// The view that produced this identity.
    pub fn strategy(&self) -> HashStrategy {
        self.strategy
    }

    /// A single 64-bit digest of the identity.
    pub fn digest(&self) -> u64 {
        hash_one(&(self.strategy, &self.words))
    }
}

/// A solution paired with its resolved identity.
///
/// Equality and hashing go through the identity only.
#[derive(Debug, Clone)]
pub struct Identified<S> {
    value: S,
    id: SolutionId,
}

impl<S: Identify> Identified<S> {
    /// Wraps `value`, resolving its identity.
    pub fn new(value: S) -> Result<Self> {
        let id = SolutionId::of(&value)?;
        Ok(Self { value, id })
    }
}

impl<S> Identified<S> {
    /// The wrapped value.
    pub fn value(&self) -> &S {
        &self.value
    }

    /// The resolved identity.
    pub fn id(&self) -> &SolutionId {
        &self.id
    }

    /// Unwraps the value.
    pub fn into_inner(self) -> S {
        self.value
    }
}

impl<S> PartialEq for Identified<S> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<S> Eq for Identified<S> {}

impl<S> Hash for Identified<S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

pub(crate) fn hash_one<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

// -0.0 and 0.0 compare equal, and every NaN is folded onto one pattern.
fn float_words(values: Vec<f64>) -> Vec<u64> {
    values
        .into_iter()
        .map(|v| {
            if v == 0.0 {
                0
            } else if v.is_nan() {
                f64::NAN.to_bits()
            } else {
                v.to_bits()
            }
        })
        .collect()
}

fn sorted(mut words: Vec<u64>) -> Vec<u64> {
    words.sort_unstable();
    words
}

macro_rules! impl_native {
    ($($t:ty),* $(,)?) => {
        $(
            impl Identify for $t {
                fn native_hash(&self) -> Option<u64> {
                    Some(hash_one(self))
                }
            }

            impl Identify for [$t] {
                fn native_hash(&self) -> Option<u64> {
                    Some(hash_one(self))
                }
            }

            impl Identify for Vec<$t> {
                fn native_hash(&self) -> Option<u64> {
                    Some(hash_one(self))
                }
            }

            impl Identify for Vec<Vec<$t>> {
                fn native_hash(&self) -> Option<u64> {
                    Some(hash_one(self))
                }
            }

            impl<const N: usize> Identify for [$t; N] {
                fn native_hash(&self) -> Option<u64> {
                    Some(hash_one(self))
                }
            }

            impl<const N: usize, const M: usize> Identify for [[$t; N]; M] {
                fn native_hash(&self) -> Option<u64> {
                    Some(hash_one(self))
                }
            }
        )*
    };
}

impl_native!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, bool, char, String);

impl Identify for str {
    fn native_hash(&self) -> Option<u64> {
        Some(hash_one(self))
    }
}

macro_rules! impl_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl Identify for $t {
                fn numeric_buffer(&self) -> Option<Vec<f64>> {
                    Some(vec![f64::from(*self)])
                }
            }

            impl<const N: usize> Identify for [$t; N] {
                fn numeric_buffer(&self) -> Option<Vec<f64>> {
                    Some(self.iter().map(|&v| f64::from(v)).collect())
                }
            }

            impl<const N: usize, const M: usize> Identify for [[$t; N]; M] {
                fn numeric_buffer(&self) -> Option<Vec<f64>> {
                    Some(self.iter().flatten().map(|&v| f64::from(v)).collect())
                }
            }

            impl Identify for [$t] {
                fn sequence(&self) -> Option<Vec<f64>> {
                    Some(self.iter().map(|&v| f64::from(v)).collect())
                }
            }

            impl Identify for Vec<$t> {
                fn sequence(&self) -> Option<Vec<f64>> {
                    Some(self.iter().map(|&v| f64::from(v)).collect())
                }
            }

            impl Identify for VecDeque<$t> {
                fn sequence(&self) -> Option<Vec<f64>> {
                    Some(self.iter().map(|&v| f64::from(v)).collect())
                }
            }

            impl Identify for Vec<Vec<$t>> {
                fn sequence(&self) -> Option<Vec<f64>> {
                    Some(self.iter().flatten().map(|&v| f64::from(v)).collect())
                }
            }
        )*
    };
}

impl_float!(f32, f64);

impl<T: Hash> Identify for HashSet<T> {
    fn set_elements(&self) -> Option<Vec<u64>> {
        Some(self.iter().map(hash_one).collect())
    }
}

impl<T: Hash> Identify for BTreeSet<T> {
    fn set_elements(&self) -> Option<Vec<u64>> {
        Some(self.iter().map(hash_one).collect())
    }
}

impl<K: Hash, V> Identify for HashMap<K, V> {
    fn mapping_keys(&self) -> Option<Vec<u64>> {
        Some(self.keys().map(hash_one).collect())
    }
}

impl<K: Hash, V> Identify for BTreeMap<K, V> {
    fn mapping_keys(&self) -> Option<Vec<u64>> {
        Some(self.keys().map(hash_one).collect())
    }
}
