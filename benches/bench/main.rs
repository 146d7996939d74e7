// std imports
use std::hash::{DefaultHasher, Hash, Hasher};

// third-party imports
use criterion::criterion_main;

const ND: &str = ":"; // name delimiter

mod compile;
mod matching;

criterion_main!(compile::benches, matching::benches);

fn hash<T: Hash>(value: T) -> String {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    format!("{:016x}", hasher.finish())
}
