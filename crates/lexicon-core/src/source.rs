// Ordered word streams.

/// An ordered, finite stream of words that can be inspected before it is
/// consumed.
///
/// This is the interface a merge needs from each input: look at the current
/// candidate, then step past it. Implementations must yield words in strictly
/// ascending byte order.
pub trait WordSource {
    /// The current candidate, or `None` once the stream is exhausted.
    fn peek(&self) -> Option<&str>;

    /// Step past the current candidate. Does nothing when exhausted.
    fn advance(&mut self);
}

/// Adapts an ordered iterator of string slices into a [`WordSource`].
#[derive(Debug, Clone)]
pub struct IterSource<'a, I> {
    inner: I,
    current: Option<&'a str>,
}

impl<'a, I: Iterator<Item = &'a str>> IterSource<'a, I> {
    pub fn new(mut inner: I) -> Self {
        let current = inner.next();
        Self { inner, current }
    }
}

impl<'a, I: Iterator<Item = &'a str>> WordSource for IterSource<'a, I> {
    #[inline]
    fn peek(&self) -> Option<&str> {
        self.current
    }

    #[inline]
    fn advance(&mut self) {
        if self.current.is_some() {
            self.current = self.inner.next();
        }
    }
}

impl<W: WordSource + ?Sized> WordSource for &mut W {
    fn peek(&self) -> Option<&str> {
        (**self).peek()
    }

    fn advance(&mut self) {
        (**self).advance();
    }
}
