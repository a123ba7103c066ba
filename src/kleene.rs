/// Iterator over all finite words over a list of symbols in length-lexicographic order, i.e.
/// shorter words come first and words of equal length are ordered by the position of their
/// symbols in the list. The iterator is infinite unless the list of symbols is empty, in which
/// case only the empty word is produced.
#[derive(Debug, Clone)]
pub struct KleeneStar<S> {
    symbols: Vec<S>,
    current: Option<Vec<usize>>,
}

impl<S: Clone> Iterator for KleeneStar<S> {
    type Item = Vec<S>;
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current.as_mut()?;
        let out = current.iter().map(|i| self.symbols[*i].clone()).collect();

        if self.symbols.is_empty() {
            self.current = None;
            return Some(out);
        }

        let mut carry = true;
        let mut i = current.len();
        while carry && i > 0 {
            i -= 1;
            current[i] += 1;
            if current[i] >= self.symbols.len() {
                current[i] = 0;
                carry = true;
            } else {
                carry = false;
            }
        }

        if carry {
            *current = vec![0; current.len() + 1];
        }

        Some(out)
    }
}

impl<S> KleeneStar<S> {
    /// Starts the enumeration with the empty word.
    pub fn new(symbols: Vec<S>) -> Self {
        Self {
            symbols,
            current: Some(vec![]),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::kleene::KleeneStar;

    #[test]
    fn kleene_star() {
        assert_eq!(
            KleeneStar::new(vec!['a', 'b'])
                .take_while(|e| e.len() <= 2)
                .collect::<Vec<_>>(),
            vec![
                vec![],
                vec!['a'],
                vec!['b'],
                vec!['a', 'a'],
                vec!['a', 'b'],
                vec!['b', 'a'],
                vec!['b', 'b']
            ]
        );
        assert_eq!(KleeneStar::new(vec![1, 2, 3]).take(40).count(), 40);
    }

    #[test]
    fn empty_symbols() {
        assert_eq!(
            KleeneStar::<char>::new(vec![]).collect::<Vec<_>>(),
            vec![Vec::<char>::new()]
        );
        assert_eq!(
            KleeneStar::new(vec!["x".to_string()]).nth(2),
            Some(vec!["x".to_string(), "x".to_string()])
        );
    }
}
