//! Console demonstration of the two sort entry points over fixed sample
//! arrays.

use downsort::{sort_decreasing, sort_decreasing_inplace};

fn print_array(label: &str, arr: &[i32]) {
    println!("{label}: {arr:?}");
}

fn main() {
    println!("Insertion Sort - Decreasing Order");
    println!("{}", "=".repeat(50));

    let sample_arrays: Vec<Vec<i32>> = vec![
        vec![5, 2, 8, 1, 9, 3],
        vec![1, 2, 3, 4, 5],          // Already sorted ascending, worst case.
        vec![5, 4, 3, 2, 1],          // Already sorted descending, best case.
        vec![1],                      // Single element.
        vec![],                       // Empty.
        vec![3, 3, 3, 3],             // All equal.
        vec![64, 34, 25, 12, 22, 11, 90],
    ];

    for (i, sample) in sample_arrays.iter().enumerate() {
        println!("\nSample {}:", i + 1);
        print_array("Original", sample);

        let sorted = sort_decreasing(sample);
        print_array("Sorted (decreasing)", &sorted);
        print_array("Original (unchanged)", sample);

        let mut inplace = sample.clone();
        sort_decreasing_inplace(&mut inplace);
        print_array("In-place sorted", &inplace);
        println!("{}", "-".repeat(30));
    }
}
