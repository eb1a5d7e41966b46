use log::trace;
use rand::Rng;

use crate::error::{Error, Result};

/// Sorts `arr[low..high]` in place into non-decreasing order using
/// randomized quicksort, drawing pivot indices from `rng`.
///
/// The pivot is chosen uniformly at random from the current sub-range on
/// every partition step, so expected running time is O(n log n) regardless
/// of the input order. Elements outside `[low, high)` are left untouched.
/// The sort is not stable: equal elements may be reordered relative to one
/// another.
///
/// # Arguments
/// - `arr`: the slice to sort; mutated in place.
/// - `low`: inclusive start of the range to sort.
/// - `high`: exclusive end of the range to sort.
/// - `rng`: the random generator used for pivot selection. Pass a seeded
///   generator for reproducible pivot sequences.
///
/// # Errors
/// Returns [`Error::InvalidRange`] if `low > high` or `high > arr.len()`.
/// The slice is unchanged in that case; validation happens before any
/// element is moved.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha20Rng;
/// use rqsort::quicksort_range;
///
/// let mut data = [9, 2, 1, 8];
/// let mut rng = ChaCha20Rng::seed_from_u64(7);
/// quicksort_range(&mut data, 1, 3, &mut rng).unwrap();
/// assert_eq!(data, [9, 1, 2, 8]);
/// ```
pub fn quicksort_range<T, R>(arr: &mut [T], low: usize, high: usize, rng: &mut R) -> Result<()>
where
    T: Ord,
    R: Rng + ?Sized,
{
    if low > high || high > arr.len() {
        return Err(Error::InvalidRange {
            low,
            high,
            len: arr.len(),
        });
    }
    trace!("quicksort range [{}, {}) of slice len {}", low, high, arr.len());
    sort_in_range(arr, low, high, rng);
    Ok(())
}

/// Sorts the whole slice with randomized quicksort using `thread_rng`.
pub fn randomized_quicksort<T: Ord>(arr: &mut [T]) {
    let mut rng = rand::thread_rng();
    randomized_quicksort_with_rng(arr, &mut rng);
}

/// Sorts the whole slice with randomized quicksort, drawing pivots from the
/// supplied generator.
pub fn randomized_quicksort_with_rng<T, R>(arr: &mut [T], rng: &mut R)
where
    T: Ord,
    R: Rng + ?Sized,
{
    trace!("quicksort full slice of len {}", arr.len());
    sort_in_range(arr, 0, arr.len(), rng);
}

/// Recursion engine over an already-validated range.
///
/// Recurses only on the smaller of the two partitions and loops on the
/// larger, so every frame covers at most half of its parent's range and the
/// call stack stays O(log n) under any sequence of pivot draws.
fn sort_in_range<T, R>(arr: &mut [T], mut low: usize, mut high: usize, rng: &mut R)
where
    T: Ord,
    R: Rng + ?Sized,
{
    // Ranges of 0 or 1 elements are already sorted.
    while high - low > 1 {
        let pivot_index = partition(arr, low, high, rng);
        let left_len = pivot_index - low;
        let right_len = high - (pivot_index + 1);
        if left_len < right_len {
            sort_in_range(arr, low, pivot_index, rng);
            low = pivot_index + 1;
        } else {
            sort_in_range(arr, pivot_index + 1, high, rng);
            high = pivot_index;
        }
    }
}

/// Lomuto partition of `arr[low..high]` around a uniformly random pivot.
///
/// The pivot is swapped to `arr[low]` and stays there for the whole scan,
/// so it can be compared by index without cloning. `boundary` is one past
/// the region confirmed to hold elements strictly less than the pivot;
/// everything scanned at or beyond `boundary` is >= pivot, so equal
/// elements always land in the right partition. Returns the pivot's final
/// index: elements left of it are < pivot, elements right of it >= pivot.
fn partition<T, R>(arr: &mut [T], low: usize, high: usize, rng: &mut R) -> usize
where
    T: Ord,
    R: Rng + ?Sized,
{
    let pivot_index = rng.gen_range(low..high);
    arr.swap(low, pivot_index);
    let mut boundary = low + 1;
    for index in low + 1..high {
        if arr[index] < arr[low] {
            arr.swap(boundary, index);
            boundary += 1;
        }
    }
    arr.swap(low, boundary - 1);
    boundary - 1
}
