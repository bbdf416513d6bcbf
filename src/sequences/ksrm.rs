//! The ternary tree enumeration of coprime pairs

use crate::errors::ContFracError;
use num_integer::Integer;
use num_traits::{NumRef, RefNum};

/// The three branches of the coprime pair tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    One,
    Two,
    Three,
}

impl Branch {
    /// The child of `node` along this branch.
    pub fn apply<T>(&self, node: &(T, T)) -> (T, T)
    where
        T: Integer + NumRef + Clone,
        for<'r> &'r T: RefNum<T>,
    {
        let (x, y) = node;
        match self {
            Branch::One => (x + x - y, x.clone()),
            Branch::Two => (x + x + y, x.clone()),
            Branch::Three => (x + y + y, y.clone()),
        }
    }

    fn successor(self) -> Option<Branch> {
        match self {
            Branch::One => Some(Branch::Two),
            Branch::Two => Some(Branch::Three),
            Branch::Three => None,
        }
    }
}

/// The ternary tree of coprime pairs described by Kanga, and by Saunders,
/// Randall and Mitchell.
///
/// Every coprime pair `(a, b)` with `a > b >= 1` appears exactly once in the
/// two trees rooted at `(2, 1)` and `(3, 1)`, where the children of `(x, y)`
/// are `(2x-y, x)`, `(2x+y, x)` and `(x+2y, y)`. Both trees grow strictly in
/// the first coordinate, which makes a bounded search prunable.
pub struct KsrmTree {}

impl KsrmTree {
    /// The two roots `(2, 1)` and `(3, 1)`.
    pub fn roots<T: Integer + Clone>() -> [(T, T); 2] {
        let one = T::one();
        let two = one.clone() + one.clone();
        let three = two.clone() + one.clone();
        [(two, one.clone()), (three, one)]
    }

    /// Searches one subtree for the coprime pairs with first coordinate at
    /// most `n`, in depth first pre-order.
    ///
    /// `n` must be at least 1 and `root` must be a coprime pair `(a, b)`
    /// with `a > b >= 1`, otherwise [ContFracError::InvalidArgument] is
    /// returned. A root already past the bound yields an empty sequence.
    pub fn search_root<T>(n: T, root: (T, T)) -> Result<RootSearch<T>, ContFracError>
    where
        T: Integer + NumRef + Clone,
        for<'r> &'r T: RefNum<T>,
    {
        if n < T::one() {
            return Err(ContFracError::InvalidArgument(
                "search bound must be at least 1",
            ));
        }
        let (a, b) = &root;
        if b < &T::one() || a <= b || !a.gcd(b).is_one() {
            return Err(ContFracError::InvalidArgument(
                "root must be a coprime pair (a, b) with a > b >= 1",
            ));
        }
        let mut visited = Vec::new();
        if root.0 <= n {
            visited.push((root, None));
        }
        Ok(RootSearch {
            bound: n,
            visited,
            started: false,
        })
    }

    /// Enumerates all coprime pairs `(a, b)` with `1 <= b <= a <= n`: the
    /// unit pair `(1, 1)`, both subtrees searched up to `n - 1`, then the
    /// pairs with first coordinate exactly `n`.
    ///
    /// The number of pairs equals the totient summatory function
    /// `phi(1) + phi(2) + ... + phi(n)`.
    pub fn search<T>(n: T) -> Result<Search<T>, ContFracError>
    where
        T: Integer + NumRef + Clone,
        for<'r> &'r T: RefNum<T>,
    {
        if n < T::one() {
            return Err(ContFracError::InvalidArgument(
                "search bound must be at least 1",
            ));
        }
        let (first, second) = if n.is_one() {
            (None, None)
        } else {
            let bound = &n - T::one();
            let [first_root, second_root] = Self::roots();
            (
                Some(Self::search_root(bound.clone(), first_root)?),
                Some(Self::search_root(bound, second_root)?),
            )
        };
        let one = T::one();
        let tail = coprime_integers(n.clone())?;
        Ok(Search {
            unit: Some((one.clone(), one)),
            first,
            second,
            tail,
            n,
        })
    }
}

/// Depth first pre-order iterator over one subtree of the coprime pair
/// tree, pruned at first coordinates above the bound.
///
/// The traversal keeps an explicit stack of visited nodes together with the
/// last branch taken from each. When every branch of a node is exhausted or
/// pruned, the stack unwinds to the deepest ancestor that is strictly below
/// the bound and still has an untried branch, and resumes there.
#[derive(Debug, Clone)]
pub struct RootSearch<T> {
    bound: T,
    visited: Vec<((T, T), Option<Branch>)>,
    started: bool,
}

impl<T: Integer + NumRef + Clone> Iterator for RootSearch<T>
where
    for<'r> &'r T: RefNum<T>,
{
    type Item = (T, T);

    fn next(&mut self) -> Option<(T, T)> {
        if !self.started {
            self.started = true;
            let (root, _) = self.visited.last()?;
            return Some(root.clone());
        }
        loop {
            let next_child = {
                let (node, last) = self.visited.last_mut()?;
                // a node at the bound cannot have a child within it
                if node.0 < self.bound {
                    let mut candidate = match last {
                        None => Some(Branch::One),
                        Some(b) => b.successor(),
                    };
                    let mut found = None;
                    while let Some(branch) = candidate {
                        *last = Some(branch);
                        let child = branch.apply(node);
                        if child.0 <= self.bound {
                            found = Some(child);
                            break;
                        }
                        candidate = branch.successor();
                    }
                    found
                } else {
                    None
                }
            };
            match next_child {
                Some(child) => {
                    self.visited.push((child.clone(), None));
                    return Some(child);
                }
                None => {
                    self.visited.pop();
                }
            }
        }
    }
}

/// Iterator of all coprime pairs `(a, b)` with `1 <= b <= a <= n`, returned
/// by [KsrmTree::search].
#[derive(Debug, Clone)]
pub struct Search<T> {
    unit: Option<(T, T)>,
    first: Option<RootSearch<T>>,
    second: Option<RootSearch<T>>,
    tail: CoprimeIntegers<T>,
    n: T,
}

impl<T: Integer + NumRef + Clone> Iterator for Search<T>
where
    for<'r> &'r T: RefNum<T>,
{
    type Item = (T, T);

    fn next(&mut self) -> Option<(T, T)> {
        if let Some(pair) = self.unit.take() {
            return Some(pair);
        }
        if let Some(iter) = self.first.as_mut() {
            if let Some(pair) = iter.next() {
                return Some(pair);
            }
            self.first = None;
        }
        if let Some(iter) = self.second.as_mut() {
            if let Some(pair) = iter.next() {
                return Some(pair);
            }
            self.second = None;
        }
        let m = self.tail.next()?;
        Some((self.n.clone(), m))
    }
}

/// Iterator of the integers below `n` that are coprime to `n`, in
/// descending order. There are `phi(n)` of them.
#[derive(Debug, Clone)]
pub struct CoprimeIntegers<T> {
    n: T,
    m: T,
}

impl<T: Integer + NumRef + Clone> Iterator for CoprimeIntegers<T>
where
    for<'r> &'r T: RefNum<T>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        while self.m >= T::one() {
            let candidate = self.m.clone();
            self.m = &self.m - T::one();
            if self.n.gcd(&candidate).is_one() {
                return Some(candidate);
            }
        }
        None
    }
}

/// Enumerates the integers `m < n` with `gcd(m, n) = 1`, largest first.
///
/// `n` must be at least 1, otherwise [ContFracError::InvalidArgument] is
/// returned; `n = 1` yields an empty sequence.
pub fn coprime_integers<T>(n: T) -> Result<CoprimeIntegers<T>, ContFracError>
where
    T: Integer + NumRef + Clone,
    for<'r> &'r T: RefNum<T>,
{
    if n < T::one() {
        return Err(ContFracError::InvalidArgument(
            "the upper bound must be at least 1",
        ));
    }
    let m = &n - T::one();
    Ok(CoprimeIntegers { n, m })
}
