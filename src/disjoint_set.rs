
// https://en.wikipedia.org/wiki/Disjoint-set_data_structure
use error::{PercolationError, Result};

#[derive(Debug, Clone)]
pub struct DisjointSet {
	parent: Vec<usize>,
	rank: Vec<usize>,
	groups: usize,
}

impl DisjointSet {
	pub fn make_singletons(size: usize) -> DisjointSet {
		DisjointSet {
			parent: (0..size).collect(),
			rank: vec![0; size],
			groups: size,
		}
	}

	pub fn len(&self) -> usize {
		self.parent.len()
	}

	/// Number of distinct groups.
	pub fn count(&self) -> usize {
		self.groups
	}

	fn check(&self, x: usize) -> Result<()> {
		if x < self.parent.len() {
			Ok(())
		} else {
			Err(PercolationError::ElementOutOfRange { element: x, size: self.parent.len() })
		}
	}

	/// Root of `x`'s group, compressing the path on the way back.
	pub fn find(&mut self, x: usize) -> Result<usize> {
		self.check(x)?;
		Ok(self.find_root(x))
	}

	fn find_root(&mut self, x: usize) -> usize {
		let parent = self.parent[x];
		if parent != x {
			self.parent[x] = self.find_root(parent);
		}
		self.parent[x]
	}

	// Read-only walk; union by rank keeps trees O(log n) deep.
	fn root(&self, mut x: usize) -> usize {
		while self.parent[x] != x {
			x = self.parent[x];
		}
		x
	}

	pub fn connected(&self, x: usize, y: usize) -> Result<bool> {
		self.check(x)?;
		self.check(y)?;
		Ok(self.root(x) == self.root(y))
	}

	/// Merges the groups of `x` and `y`. Returns false if they were already one group.
	pub fn unite(&mut self, x: usize, y: usize) -> Result<bool> {
		self.check(x)?;
		self.check(y)?;
		let x_root = self.find_root(x);
		let y_root = self.find_root(y);
		if x_root == y_root {
			return Ok(false);
		}
		if self.rank[x_root] < self.rank[y_root] {
			self.parent[x_root] = y_root;
		} else if self.rank[x_root] > self.rank[y_root] {
			self.parent[y_root] = x_root;
		} else {
			self.parent[y_root] = x_root;
			self.rank[x_root]+= 1;
		}
		self.groups -= 1;
		Ok(true)
	}
}
