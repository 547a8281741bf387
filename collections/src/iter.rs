//! The iteration contract shared by every collection and view.
use immutils_core::{Error, Result};

/// An iterator over an immutable collection or one of its views.
///
/// Iterators hand out shared references only. Code written against a
/// cursor-style API may still call [`ReadOnlyIter::remove`]; it always fails
/// and leaves the collection untouched.
pub trait ReadOnlyIter: Iterator {
    /// Name of the walked collection or view, as shown in error messages.
    const VIEW: &'static str;

    fn remove(&mut self) -> Result<()> {
        Err(Error::UnsupportedMutation { view: Self::VIEW })
    }
}

/// Implements [`Iterator`] and [`ReadOnlyIter`] for a newtype around another
/// iterator, forwarding everything to the inner one.
macro_rules! read_only_iter {
    ( $iter:ident < $lt:lifetime $(, $param:ident )* >, $item:ty, $view:literal ) => {
        impl<$lt $(, $param )*> Iterator for $iter<$lt $(, $param )*> {
            type Item = $item;

            fn next(&mut self) -> Option<Self::Item> {
                self.inner.next()
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                self.inner.size_hint()
            }
        }

        impl<$lt $(, $param )*> DoubleEndedIterator for $iter<$lt $(, $param )*> {
            fn next_back(&mut self) -> Option<Self::Item> {
                self.inner.next_back()
            }
        }

        impl<$lt $(, $param )*> ExactSizeIterator for $iter<$lt $(, $param )*> {}

        impl<$lt $(, $param )*> std::iter::FusedIterator for $iter<$lt $(, $param )*> {}

        impl<$lt $(, $param )*> $crate::iter::ReadOnlyIter for $iter<$lt $(, $param )*> {
            const VIEW: &'static str = $view;
        }
    };
}

pub(crate) use read_only_iter;
