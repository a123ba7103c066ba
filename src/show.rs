use itertools::Itertools;

/// Helper trait which can be used to display states, symbols and words in a human readable way.
///
/// The rendering of a symbol is also what ends up in a synthesized regular expression, so for
/// symbols it should be as short as possible, ideally a single character.
pub trait Show {
    /// Returns a human readable representation of `self`. For a state this could be `q0`,
    /// for a symbol `a`.
    fn show(&self) -> String;
}

impl Show for char {
    fn show(&self) -> String {
        self.to_string()
    }
}

impl Show for String {
    fn show(&self) -> String {
        self.clone()
    }
}

impl Show for str {
    fn show(&self) -> String {
        self.to_string()
    }
}

macro_rules! impl_integer_show {
    ($($t:ty),*) => {
        $(
            impl Show for $t {
                fn show(&self) -> String {
                    self.to_string()
                }
            }
        )*
    }
}

impl_integer_show!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl<S: Show> Show for [S] {
    fn show(&self) -> String {
        format!("\"{}\"", self.iter().map(|x| x.show()).join(""))
    }
}

impl<S: Show> Show for Vec<S> {
    fn show(&self) -> String {
        self.as_slice().show()
    }
}

impl<S: Show + ?Sized> Show for &S {
    fn show(&self) -> String {
        S::show(*self)
    }
}
