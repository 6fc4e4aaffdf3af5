//! Insertion sort specialized for decreasing order.
//!
//! Both entry points share one core that grows a sorted prefix and inserts
//! each following element into it. The shift condition is a strict "less
//! than", so equal elements are never moved past each other and the sort is
//! stable.

use std::mem;
use std::ptr;

/// Returns a new `Vec` with the elements of `v` ordered decreasing, leaving
/// `v` untouched.
///
/// Stable: equal elements keep their relative input order. O(n²) worst case
/// (ascending input), O(n) if `v` is already decreasing.
///
/// ```
/// let v = vec![5, 2, 8, 1, 9, 3];
/// assert_eq!(downsort::sort_decreasing(&v), [9, 8, 5, 3, 2, 1]);
/// assert_eq!(v, [5, 2, 8, 1, 9, 3]);
/// ```
pub fn sort_decreasing<T>(v: &[T]) -> Vec<T>
where
    T: Ord + Clone,
{
    let mut sorted = v.to_vec();
    insertion_sort_decreasing_by(&mut sorted, &mut |a, b| a.lt(b));
    sorted
}

/// Orders `v` decreasing in its own buffer and returns the same slice for
/// chaining.
///
/// Same algorithm and guarantees as [`sort_decreasing`]. If a user-supplied
/// `Ord` impl panics mid-sort, `v` is left as some valid permutation of its
/// original elements, order unspecified.
///
/// ```
/// let mut v = vec![5, 2, 8, 1, 9, 3];
/// assert_eq!(downsort::sort_decreasing_inplace(&mut v), [9, 8, 5, 3, 2, 1]);
/// assert_eq!(v, [9, 8, 5, 3, 2, 1]);
/// ```
pub fn sort_decreasing_inplace<T>(v: &mut [T]) -> &mut [T]
where
    T: Ord,
{
    insertion_sort_decreasing_by(v, &mut |a, b| a.lt(b));
    v
}

/// Sorts `v` so that `!is_less(&v[i], &v[i + 1])` holds for all valid `i`.
///
/// `is_less` must be a strict total order for the result to be fully sorted.
/// If it isn't, or if it panics, `v` still holds every original element
/// exactly once afterwards.
fn insertion_sort_decreasing_by<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    if len < 2 {
        // These inputs are always sorted.
        return;
    }

    for i in 1..len {
        // SAFETY: we tested that len >= 2.
        unsafe {
            insert_tail(&mut v[..=i], is_less);
        }
    }
}

/// Inserts `v[v.len() - 1]` into the pre-sorted decreasing sequence
/// `v[..v.len() - 1]` so that the whole of `v[..]` becomes sorted.
unsafe fn insert_tail<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(v.len() >= 2);

    let arr_ptr = v.as_mut_ptr();
    let i = v.len() - 1;

    // SAFETY: caller must ensure v is at least len 2.
    unsafe {
        let i_ptr = arr_ptr.add(i);

        // The prefix is decreasing, so the tail is out of place exactly when
        // its predecessor is strictly less than it. Strict comparison keeps
        // equal elements where they are, which is what makes this stable.
        if is_less(&*i_ptr.sub(1), &*i_ptr) {
            // From here on compare against tmp, the value that will be
            // copied back into the slice.
            let tmp = mem::ManuallyDrop::new(ptr::read(i_ptr));
            // Intermediate state of the insertion process is always tracked
            // by `hole`, which serves two purposes:
            // 1. Protects integrity of `v` from panics in `is_less`.
            // 2. Fills the remaining hole in `v` in the end.
            //
            // If `is_less` panics at any point during the process, `hole`
            // will get dropped and fill the hole in `v` with `tmp`, thus
            // ensuring that `v` still holds every object it initially held
            // exactly once.
            let mut hole = InsertionHole {
                src: &*tmp,
                dest: i_ptr.sub(1),
            };
            ptr::copy_nonoverlapping(hole.dest, i_ptr, 1);

            // Shift prefix elements right while they are strictly less than
            // the held value. SAFETY: We know i is at least 1.
            for j in (0..(i - 1)).rev() {
                let j_ptr = arr_ptr.add(j);
                if !is_less(&*j_ptr, &*tmp) {
                    break;
                }

                ptr::copy_nonoverlapping(j_ptr, hole.dest, 1);
                hole.dest = j_ptr;
            }
            // `hole` gets dropped and thus copies `tmp` into the remaining
            // hole in `v`.
        }
    }

    // When dropped, copies from `src` into `dest`.
    struct InsertionHole<T> {
        src: *const T,
        dest: *mut T,
    }

    impl<T> Drop for InsertionHole<T> {
        fn drop(&mut self) {
            unsafe {
                ptr::copy_nonoverlapping(self.src, self.dest, 1);
            }
        }
    }
}
