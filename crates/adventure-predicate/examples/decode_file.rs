//! Simple decoder to inspect encoded adventure-mode predicates.
//!
//! Usage:
//!   cargo run --example decode_file -- <path>
//!   cargo run --example decode_file -- --hex 0101040102030000 01

use std::fs;

use adventure_predicate::{decode_predicate, BlockPredicate, HolderSet, ValueMatcher};

fn parse_hex(s: &str) -> Option<Vec<u8>> {
    let digits: String = s.chars().filter(|c| !c.is_whitespace()).collect();
    if digits.len() % 2 != 0 {
        return None;
    }
    digits
        .as_bytes()
        .chunks(2)
        .map(|pair| {
            let pair = std::str::from_utf8(pair).ok()?;
            u8::from_str_radix(pair, 16).ok()
        })
        .collect()
}

fn format_holder_set(set: &HolderSet) -> String {
    match set {
        HolderSet::Tag(tag) => format!("#{}", tag),
        HolderSet::Ids(ids) if ids.len() > 16 => {
            format!("{:?}... ({} ids)", &ids[..16], ids.len())
        }
        HolderSet::Ids(ids) => format!("{:?}", ids),
    }
}

fn format_matcher(matcher: &ValueMatcher) -> String {
    match matcher {
        ValueMatcher::Exact(value) => format!("= {:?}", value),
        ValueMatcher::Ranged { min, max } => format!(
            "in [{}, {}]",
            min.as_deref().unwrap_or("-inf"),
            max.as_deref().unwrap_or("+inf")
        ),
    }
}

fn print_block(index: usize, block: &BlockPredicate) {
    println!("\n[{}]", index);
    match &block.blocks {
        Some(set) => println!("  blocks: {}", format_holder_set(set)),
        None => println!("  blocks: any"),
    }
    match &block.properties {
        Some(properties) => {
            println!("  properties: {}", properties.len());
            for p in properties {
                println!("    {} {}", p.name, format_matcher(&p.matcher));
            }
        }
        None => println!("  properties: any"),
    }
    match &block.nbt {
        Some(nbt) => println!("  nbt: {} bytes", nbt.as_bytes().len()),
        None => println!("  nbt: any"),
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let data = match args.first().map(String::as_str) {
        Some("--hex") => parse_hex(&args[1..].join("")).expect("Invalid hex input"),
        Some(path) => {
            println!("Reading: {}", path);
            fs::read(path).expect("Failed to read file")
        }
        None => {
            eprintln!("usage: decode_file <path> | --hex <bytes>");
            std::process::exit(2);
        }
    };
    println!("Input size: {} bytes", data.len());

    let predicate = match decode_predicate(&data) {
        Ok(predicate) => predicate,
        Err(e) => {
            eprintln!("Failed to decode ({}): {}", e.code().code(), e);
            std::process::exit(1);
        }
    };

    println!("\n=== Adventure Predicate ===");
    println!("Block predicates: {}", predicate.predicates.len());
    println!("Show in tooltip: {}", predicate.show_in_tooltip);

    for (i, block) in predicate.predicates.iter().enumerate() {
        print_block(i, block);
    }
}
