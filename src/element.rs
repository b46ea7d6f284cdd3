use std::fmt;

pub trait ElementOps<T> {
    fn copy(&self, element: &T) -> T;
    fn delete(&self, element: T);
    fn print(&self, element: &T);
}

#[derive(Clone, Copy)]
pub struct FnOps<C, D, P> {
    copy: C,
    delete: D,
    print: P,
}

impl<C, D, P> FnOps<C, D, P> {
    pub fn new<T>(copy: C, delete: D, print: P) -> Self
    where
        C: Fn(&T) -> T,
        D: Fn(T),
        P: Fn(&T),
    {
        FnOps {
            copy,
            delete,
            print,
        }
    }
}

impl<T, C, D, P> ElementOps<T> for FnOps<C, D, P>
where
    C: Fn(&T) -> T,
    D: Fn(T),
    P: Fn(&T),
{
    fn copy(&self, element: &T) -> T {
        (self.copy)(element)
    }

    fn delete(&self, element: T) {
        (self.delete)(element)
    }

    fn print(&self, element: &T) {
        (self.print)(element)
    }
}

impl<C, D, P> fmt::Debug for FnOps<C, D, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnOps").finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CloneOps;

impl<T: Clone + fmt::Display> ElementOps<T> for CloneOps {
    fn copy(&self, element: &T) -> T {
        element.clone()
    }

    fn delete(&self, element: T) {
        drop(element);
    }

    fn print(&self, element: &T) {
        println!("{element}");
    }
}
