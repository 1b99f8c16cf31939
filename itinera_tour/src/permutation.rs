/// Iterative, restartable enumeration of all orderings of a set, in
/// lexicographic index order. Yields exactly n! orderings, including the
/// single empty ordering for an empty set.
pub struct Permutations<T> {
    items: Vec<T>,
    indices: Vec<usize>,
    started: bool,
    done: bool,
}

impl<T: Clone> Permutations<T> {
    pub fn new(items: Vec<T>) -> Permutations<T> {
        Permutations {
            indices: (0..items.len()).collect(),
            items,
            started: false,
            done: false,
        }
    }
}

impl<T: Clone> Iterator for Permutations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        if self.done {
            return None;
        }

        if self.started {
            if !next_index_permutation(&mut self.indices) {
                self.done = true;
                return None;
            }
        } else {
            self.started = true;
        }

        Some(
            self.indices
                .iter()
                .map(|&index| self.items[index].clone())
                .collect(),
        )
    }
}

fn next_index_permutation(indices: &mut [usize]) -> bool {
    if indices.len() < 2 {
        return false;
    }

    // Narayana's algorithm: find the longest non-increasing suffix, swap
    // its pivot with the rightmost larger element, reverse the suffix.
    let mut pivot = indices.len() - 1;
    while pivot > 0 && indices[pivot - 1] >= indices[pivot] {
        pivot -= 1;
    }
    if pivot == 0 {
        return false;
    }

    let mut swap = indices.len() - 1;
    while indices[swap] <= indices[pivot - 1] {
        swap -= 1;
    }

    indices.swap(pivot - 1, swap);
    indices[pivot..].reverse();
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set_has_one_empty_ordering() {
        let orderings: Vec<Vec<u8>> = Permutations::new(vec![]).collect();

        assert_eq!(orderings, vec![Vec::<u8>::new()]);
    }

    #[test]
    fn counts_are_factorial() {
        assert_eq!(Permutations::new(vec![1]).count(), 1);
        assert_eq!(Permutations::new(vec![1, 2, 3]).count(), 6);
        assert_eq!(Permutations::new(vec![1, 2, 3, 4, 5]).count(), 120);
    }

    #[test]
    fn orderings_come_out_lexicographically() {
        let orderings: Vec<Vec<u8>> = Permutations::new(vec![1, 2, 3]).collect();

        assert_eq!(
            orderings,
            vec![
                vec![1, 2, 3],
                vec![1, 3, 2],
                vec![2, 1, 3],
                vec![2, 3, 1],
                vec![3, 1, 2],
                vec![3, 2, 1],
            ]
        );
    }

    #[test]
    fn a_fresh_generator_restarts_from_the_beginning() {
        let first: Vec<Vec<u8>> = Permutations::new(vec![4, 7]).collect();
        let second: Vec<Vec<u8>> = Permutations::new(vec![4, 7]).collect();

        assert_eq!(first, second);
        assert_eq!(first, vec![vec![4, 7], vec![7, 4]]);
    }
}
