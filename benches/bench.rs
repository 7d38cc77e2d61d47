use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use sorted_bst::SortedSet;

/// Returns how many nodes are needed to fill a binary tree with `num_levels` levels.
fn num_nodes_in_full_tree(num_levels: usize) -> usize {
    2usize.pow(num_levels as u32) - 1
}

/// Builds a set by inserting values in ascending order. Nothing rebalances the tree so it ends up
/// as one long right spine.
fn get_unbalanced_set(num_levels: usize) -> SortedSet<i32> {
    (0..num_nodes_in_full_tree(num_levels) as i32).collect()
}

/// Builds a set by inserting values so that the resultant tree is full, with `num_levels` levels.
fn get_balanced_set(num_levels: usize) -> SortedSet<i32> {
    let xs = (0..num_nodes_in_full_tree(num_levels) as i32).collect::<Vec<_>>();
    let mut set = SortedSet::new();
    fill_balanced_set(&mut set, &xs);
    set
}

/// Recursive helper for [`get_balanced_set`].
fn fill_balanced_set(set: &mut SortedSet<i32>, xs: &[i32]) {
    if !xs.is_empty() {
        let mid = xs.len() / 2;
        set.insert(xs[mid]);
        fill_balanced_set(set, &xs[..mid]);
        fill_balanced_set(set, &xs[mid + 1..]);
    }
}

/// Helper to bench a function on a set.
/// It creates a group for the given name and closure and runs it for various sizes and
/// shapes of trees before finishing the group. The closure gets the largest value in the set.
fn bench_helper(c: &mut Criterion, name: &str, f: impl Fn(&SortedSet<i32>, i32)) {
    let mut group = c.benchmark_group(name);

    // For trees of size 2^3, 2^7, etc....
    for num_levels in [3, 7, 11] {
        let set_tests = [
            ("unbalanced", get_unbalanced_set(num_levels)),
            ("balanced", get_balanced_set(num_levels)),
        ];
        let largest_element_in_set = num_nodes_in_full_tree(num_levels) as i32 - 1;
        for (name, set) in set_tests {
            let id = BenchmarkId::new(name.to_string(), largest_element_in_set);

            group.bench_with_input(id, &largest_element_in_set, |b, &largest| {
                b.iter(|| f(&set, largest))
            });
        }
    }

    group.finish();
}

/// Benches the range views, structural queries and reconstruction against balanced and
/// unbalanced trees of various sizes.
pub fn criterion_benchmark(c: &mut Criterion) {
    bench_helper(c, "contains", |set, i| {
        black_box(set.contains(&i));
    });
    bench_helper(c, "sub_set", |set, i| {
        black_box(set.sub_set(&(i / 4), &(3 * i / 4)));
    });
    bench_helper(c, "head_set", |set, i| {
        black_box(set.head_set(&(i / 2)));
    });
    bench_helper(c, "tail_set", |set, i| {
        black_box(set.tail_set(&(i / 2)));
    });
    bench_helper(c, "depth", |set, i| {
        black_box(set.depth(&i));
    });
    bench_helper(c, "height", |set, _| {
        black_box(set.height(set.first().unwrap()));
    });
    bench_helper(c, "reconstruct", |set, _| {
        let pre: Vec<i32> = set.preorder().into_iter().copied().collect();
        let ino: Vec<i32> = set.inorder().into_iter().copied().collect();
        black_box(SortedSet::from_traversals(&pre, &ino));
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
