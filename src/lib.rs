mod heap;
mod order;

pub use heap::{MaxHeap, MinHeap, Underflow, DEFAULT_CAPACITY};
pub use order::{ByKey, FnOrder, NaturalOrder, ReverseOrder, TotalOrder};

use rand::prelude::*;

fn bench<F: FnOnce()>(name: &str, num_tabs: usize, f: F) {
    use std::time::{Duration, Instant};
    let start = Instant::now();
    f();
    let elapsed = start.elapsed();

    print!("BENCH `{}` :", name);
    for _ in 0..num_tabs {
        print!("\t");
    }

    if elapsed < Duration::from_millis(1) {
        println!(
            "{} {:03} nanos",
            elapsed.as_micros(),
            elapsed.as_nanos() % 1000,
        );
    } else if elapsed < Duration::from_secs(1) {
        println!(
            "{} {:03} micros",
            elapsed.as_millis(),
            elapsed.as_micros() % 1000,
        );
    } else {
        println!(
            "{} {:03} millis",
            elapsed.as_secs(),
            elapsed.subsec_millis(),
        );
    }
}

#[allow(dead_code)]
fn validate_heap_binheap() {
    use ordered_float::OrderedFloat;
    use std::collections::BinaryHeap;

    let mut rng = SmallRng::from_entropy();

    // The per-mutation consistency assert makes every op O(n) in debug
    // builds, so keep the op count moderate.
    const N: usize = 16 * 1024;

    println!("[Validate MaxHeap against std BinaryHeap]");
    let mut heap = MaxHeap::with_capacity(16);
    let mut std_heap = BinaryHeap::new();

    for _ in 0..N {
        if std_heap.is_empty() || rng.gen_bool(0.55) {
            let x: u32 = rng.gen_range(0..1000_000);
            heap.insert(x);
            std_heap.push(x);
        } else {
            assert_eq!(heap.extract_max().ok(), std_heap.pop());
        }

        assert_eq!(heap.len(), std_heap.len());
        assert_eq!(heap.peek_max().ok(), std_heap.peek());
        assert!(heap.capacity() >= heap.len());
    }

    while let Some(x) = std_heap.pop() {
        assert_eq!(heap.extract_max(), Ok(x));
    }
    assert_eq!(heap.extract_max(), Err(Underflow));

    // Float elements via a derived key.
    let mut scores = MaxHeap::new_by(ByKey(|&x: &f64| OrderedFloat(x)));
    for _ in 0..1024 {
        scores.insert(rng.gen_range(-1.0..1.0));
    }
    let mut prev = f64::INFINITY;
    while let Ok(x) = scores.extract_max() {
        assert!(x <= prev);
        prev = x;
    }

    println!("MaxHeap VALIDATED");
    println!();
}

#[allow(dead_code)]
fn bench_heap_binheap() {
    let mut rng = SmallRng::from_entropy();

    const N: usize = 16 * 1024;

    let values: Vec<u64> = (0..N).map(|_| rng.gen()).collect();

    let mut std_heap = std::collections::BinaryHeap::new();
    bench("std::collections::BinaryHeap::push", 2, || {
        for &x in values.iter() {
            std_heap.push(x);
        }
    });
    bench("std::collections::BinaryHeap::pop", 2, || {
        while std_heap.pop().is_some() {}
    });
    println!();

    let mut heap = MaxHeap::new();
    bench("MaxHeap::insert", 6, || {
        for &x in values.iter() {
            heap.insert(x);
        }
    });
    bench("MaxHeap::extract_max", 5, || {
        while heap.extract_max().is_ok() {}
    });
    println!();

    bench("MaxHeap::from_vec", 6, || {
        heap = MaxHeap::from_vec(values.clone());
    });
    bench("MaxHeap::into_sorted_vec", 4, || {
        assert!(heap.len() == N);
        let sorted = std::mem::take(&mut heap).into_sorted_vec();
        assert!(sorted.windows(2).all(|w| w[0] <= w[1]));
    });
}

#[test]
pub fn main() {
    validate_heap_binheap();
    bench_heap_binheap();
    println!();
}
