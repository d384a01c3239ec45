//! Benchmark for predicate serialization using synthetic item data.
//!
//! Builds a batch of `can_place_on` / `can_break` payloads shaped like the
//! ones found on adventure-map items, then times encoding and decoding.

use std::time::Instant;

use adventure_predicate::{
    AdventureModePredicate, AdventureModePredicateBuilder, BlockPredicateBuilder, Identifier,
    OpaqueCompound, decode_predicate, encode_predicate,
};

const DEFAULT_ITEMS: usize = 50_000;
const DECODE_ITERS: u32 = 10;

/// Block tags commonly used by adventure maps.
const TAGS: &[&str] = &[
    "logs",
    "planks",
    "wool",
    "doors",
    "buttons",
    "pressure_plates",
    "stone_bricks",
    "leaves",
];

/// Deterministic xorshift generator so runs are comparable.
struct Rng(u64);

impl Rng {
    fn next(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    fn below(&mut self, n: u64) -> u64 {
        self.next() % n
    }
}

/// `{Lock: "key"}` as a network compound.
fn lock_compound() -> OpaqueCompound {
    let mut bytes = vec![10, 8, 0, 4];
    bytes.extend_from_slice(b"Lock");
    bytes.extend_from_slice(&[0, 3]);
    bytes.extend_from_slice(b"key");
    bytes.push(0);
    OpaqueCompound::from_bytes(bytes).expect("static compound is well-formed")
}

fn build_block(rng: &mut Rng, lock: &OpaqueCompound) -> BlockPredicateBuilder {
    let mut b = BlockPredicateBuilder::new();

    b = match rng.below(3) {
        0 => {
            let tag = TAGS[rng.below(TAGS.len() as u64) as usize];
            b.tag(Identifier::minecraft(tag).expect("static tag is valid"))
        }
        1 => {
            let count = 1 + rng.below(12);
            b.ids((0..count).map(|_| rng.below(1_100) as u32))
        }
        _ => b,
    };

    if rng.below(2) == 0 {
        b = b.exact("facing", ["north", "south", "east", "west"][rng.below(4) as usize]);
    }
    if rng.below(4) == 0 {
        let min = rng.below(8).to_string();
        b = b.ranged("age", Some(min.as_str()), None);
    }
    if rng.below(8) == 0 {
        b = b.nbt(lock.clone());
    }
    b
}

fn build_item(rng: &mut Rng, lock: &OpaqueCompound) -> AdventureModePredicate {
    let blocks = 1 + rng.below(4);
    let mut builder = AdventureModePredicateBuilder::new().show_in_tooltip(rng.below(2) == 0);
    for _ in 0..blocks {
        builder = builder.predicate(build_block(rng, lock).build());
    }
    builder.build()
}

fn main() {
    env_logger::init();

    let item_count = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_ITEMS);

    let lock = lock_compound();
    let mut rng = Rng(0x9E37_79B9_7F4A_7C15);

    let build_start = Instant::now();
    let items: Vec<AdventureModePredicate> =
        (0..item_count).map(|_| build_item(&mut rng, &lock)).collect();
    let build_time = build_start.elapsed();

    let block_count: usize = items.iter().map(|i| i.predicates.len()).sum();
    log::info!("built {} items with {} block predicates", items.len(), block_count);
    println!(
        "Built {} items ({} block predicates) in {:?}",
        items.len(),
        block_count,
        build_time
    );

    // Benchmark encoding
    let encode_start = Instant::now();
    let encoded: Vec<Vec<u8>> = items
        .iter()
        .map(|item| encode_predicate(item).expect("Failed to encode"))
        .collect();
    let encode_time = encode_start.elapsed();
    let total_bytes: usize = encoded.iter().map(Vec::len).sum();

    println!("\nEncode: {} bytes in {:?}", total_bytes, encode_time);
    println!(
        "  Throughput: {:.2} MB/s",
        (total_bytes as f64 / 1_000_000.0) / encode_time.as_secs_f64()
    );
    println!(
        "  Average size: {:.1} bytes/item",
        total_bytes as f64 / items.len().max(1) as f64
    );

    // Warmup
    for bytes in encoded.iter().take(1_000) {
        let _ = decode_predicate(bytes).expect("Failed to decode");
    }

    // Benchmark decoding
    let decode_start = Instant::now();
    let mut decoded = Vec::new();
    for _ in 0..DECODE_ITERS {
        decoded = encoded
            .iter()
            .map(|bytes| decode_predicate(bytes).expect("Failed to decode"))
            .collect();
    }
    let decode_time = decode_start.elapsed() / DECODE_ITERS;

    println!(
        "\nDecode: {:?} (avg of {} iterations)",
        decode_time, DECODE_ITERS
    );
    println!(
        "  Throughput: {:.2} MB/s",
        (total_bytes as f64 / 1_000_000.0) / decode_time.as_secs_f64()
    );

    assert_eq!(decoded, items, "Decoded items should match the originals");

    println!("\n=== Summary ===");
    println!("Items: {}", items.len());
    println!("Block predicates: {}", block_count);
    println!("Encoded size: {} bytes", total_bytes);
}
