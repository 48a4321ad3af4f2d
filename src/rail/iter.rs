use crate::rail::RailResult;

pub struct Iter<'a, S> {
    inner: Option<&'a S>,
}

impl<'a, S> Iterator for Iter<'a, S> {
    type Item = &'a S;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

pub struct IterMut<'a, S> {
    inner: Option<&'a mut S>,
}

impl<'a, S> Iterator for IterMut<'a, S> {
    type Item = &'a mut S;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

pub struct IntoIter<S> {
    inner: Option<S>,
}

impl<S> Iterator for IntoIter<S> {
    type Item = S;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

impl<S, M> IntoIterator for RailResult<S, M> {
    type Item = S;
    type IntoIter = IntoIter<S>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.into_value(),
        }
    }
}

impl<'a, S, M> IntoIterator for &'a RailResult<S, M> {
    type Item = &'a S;
    type IntoIter = Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, S, M> IntoIterator for &'a mut RailResult<S, M> {
    type Item = &'a mut S;
    type IntoIter = IterMut<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<S, M> RailResult<S, M> {
    /// Iterates over the payload, yielding it zero or one times.
    pub fn iter(&self) -> Iter<'_, S> {
        Iter {
            inner: self.value(),
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, S> {
        match self {
            RailResult::Success(value, _) => IterMut { inner: Some(value) },
            RailResult::Failure(_) => IterMut { inner: None },
        }
    }

    /// Iterates over the messages of whichever track the result is on.
    pub fn iter_messages(&self) -> core::slice::Iter<'_, M> {
        self.messages().iter()
    }
}
