use sorted_bst::SortedSet;

use crate::both;

quickcheck::quickcheck! {
    fn round_trip_reproduces_shape(xs: Vec<i8>) -> bool {
        let (original, _) = both(&xs);
        let pre: Vec<i8> = original.preorder().into_iter().copied().collect();
        let ino: Vec<i8> = original.inorder().into_iter().copied().collect();

        let mut rebuilt = SortedSet::new();
        let root = rebuilt.reconstruct(&pre, &ino).copied();

        root == pre.first().copied()
            && rebuilt.preorder() == original.preorder()
            && rebuilt.inorder() == original.inorder()
            && xs.iter().all(|x| rebuilt.depth(x) == original.depth(x))
    }
}

quickcheck::quickcheck! {
    fn reconstruct_into_a_populated_set_is_a_union(xs: Vec<i8>, ys: Vec<i8>) -> bool {
        let (source, _) = both(&xs);
        let pre: Vec<i8> = source.preorder().into_iter().copied().collect();
        let ino: Vec<i8> = source.inorder().into_iter().copied().collect();

        let (mut target, mut expected) = both(&ys);
        target.reconstruct(&pre, &ino);
        expected.extend(xs);

        target.iter().eq(expected.iter())
    }
}
