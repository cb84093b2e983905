//! Semigroup trait for associative accumulation
//!
//! Every piece of metadata a monad carries alongside its payload is combined
//! with an associative operation when two steps are bound together. The Writer
//! log is concatenated and the IO environment is merged unit by unit. Both are
//! expressed as a [`Semigroup`].
//!
//! # Mathematical Properties
//!
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! Associativity is what makes `bind` itself associative for the Writer and IO
//! variants.
//!
//! # Examples
//!
//! ```
//! use millrace::Semigroup;
//!
//! let log = vec!["parsed".to_string()].combine(vec!["checked".to_string()]);
//! assert_eq!(log, vec!["parsed".to_string(), "checked".to_string()]);
//!
//! let buffer = "AB".to_string().combine("C".to_string());
//! assert_eq!(buffer, "ABC");
//! ```

/// A type that supports an associative binary operation
///
/// # Laws
///
/// ```text
/// a.combine(b).combine(c) == a.combine(b.combine(c))
/// ```
///
/// `combine` is not required to be commutative. The left operand always holds
/// what happened first.
///
/// # Note on Ownership
///
/// `combine` takes both sides by value. Clone beforehand if either side is
/// still needed.
pub trait Semigroup: Sized {
    /// Combine this value with a later one
    ///
    /// # Examples
    ///
    /// ```
    /// use millrace::Semigroup;
    ///
    /// assert_eq!(vec![1, 2].combine(vec![3]), vec![1, 2, 3]);
    /// ```
    fn combine(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl Semigroup for String {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_semigroup() {
        let v1 = vec!["a".to_string()];
        let v2 = vec!["b".to_string(), "c".to_string()];
        assert_eq!(
            v1.combine(v2),
            vec!["a".to_string(), "b".to_string(), "c".to_string()]
        );
    }

    #[test]
    fn test_vec_semigroup_empty_left() {
        let v1: Vec<i32> = vec![];
        assert_eq!(v1.combine(vec![1, 2]), vec![1, 2]);
    }

    #[test]
    fn test_string_keeps_left_first() {
        assert_eq!("out".to_string().combine("put".to_string()), "output");
        assert_ne!(
            "A".to_string().combine("B".to_string()),
            "B".to_string().combine("A".to_string())
        );
    }

    #[test]
    fn test_vec_associativity() {
        let a = vec![1, 2];
        let b = vec![3];
        let c = vec![4, 5];

        let left = a.clone().combine(b.clone()).combine(c.clone());
        let right = a.combine(b.combine(c));

        assert_eq!(left, right);
    }

    #[test]
    fn test_string_associativity() {
        let a = "x".to_string();
        let b = "y".to_string();
        let c = "z".to_string();

        let left = a.clone().combine(b.clone()).combine(c.clone());
        let right = a.combine(b.combine(c));

        assert_eq!(left, right);
    }
}
