use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use rqsort::{quicksort_range, randomized_quicksort, randomized_quicksort_with_rng};

fn main() {
    // Edge cases: sorting these is a no-op.
    let mut empty: Vec<i32> = vec![];
    randomized_quicksort(&mut empty);
    let mut single = vec![4];
    randomized_quicksort(&mut single);
    let mut pair = vec![5, 4];
    randomized_quicksort(&mut pair);

    let mut numbers = vec![1, 4, 3, 5, 77, 7];
    randomized_quicksort(&mut numbers);
    println!("{:?}", numbers); // should give [1, 3, 4, 5, 7, 77]

    // Seeded generator: same pivot sequence on every run.
    let mut seeded = vec![3, 3, 1, 3, 2];
    let mut rng = ChaCha20Rng::seed_from_u64(123);
    randomized_quicksort_with_rng(&mut seeded, &mut rng);
    println!("seeded sort: {:?}", seeded);

    // Sorting a sub-range leaves the rest of the slice alone.
    let mut partial = vec![9, 2, 1, 8];
    quicksort_range(&mut partial, 1, 3, &mut rng).expect("range is valid");
    println!("positions 1..3 sorted: {:?}", partial);
}
